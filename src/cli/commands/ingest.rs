//! Ingest command: upload a transcript file, store it, and analyze it.

use anyhow::{bail, Context, Result};
use clap::Args;
use serde::Deserialize;
use std::path::PathBuf;
use tracing::warn;

use crate::cli::commands::analyze::format_analysis;
use crate::cli::commands::{build_service, open_database};
use crate::cli::output::{output, CommandOutput};
use crate::domain::models::{Conversation, ConversationAnalysis, NewMessage, Sender};
use crate::domain::ports::ConversationRepository;
use uuid::Uuid;

#[derive(Args, Debug)]
pub struct IngestArgs {
    /// Path to a transcript JSON file
    pub file: PathBuf,

    /// Title for the conversation (defaults to one derived from the
    /// transcript timestamp)
    #[arg(short, long)]
    pub title: Option<String>,
}

/// Transcript file layout. Messages with a missing or unrecognized sender
/// are skipped with a warning rather than failing the whole upload.
#[derive(Debug, Deserialize)]
struct TranscriptFile {
    #[serde(default)]
    messages: Vec<TranscriptEntry>,
    timestamp: Option<String>,
}

#[derive(Debug, Deserialize)]
struct TranscriptEntry {
    sender: Option<String>,
    message: Option<String>,
}

fn parse_transcript(raw: &str) -> Result<(Vec<NewMessage>, Option<String>, usize)> {
    let file: TranscriptFile =
        serde_json::from_str(raw).context("Transcript is not valid JSON")?;

    let mut messages = Vec::with_capacity(file.messages.len());
    let mut skipped = 0usize;
    for (index, entry) in file.messages.iter().enumerate() {
        let (sender_raw, text) = match (&entry.sender, &entry.message) {
            (Some(sender), Some(text)) => (sender, text),
            _ => {
                warn!(index, "skipping transcript entry without sender or message");
                skipped += 1;
                continue;
            }
        };
        match Sender::from_str(sender_raw) {
            Some(sender) => messages.push(NewMessage::new(sender, text.clone())),
            None => {
                warn!(index, sender = %sender_raw, "skipping entry with unknown sender");
                skipped += 1;
            }
        }
    }
    Ok((messages, file.timestamp, skipped))
}

#[derive(Debug, serde::Serialize)]
struct IngestOutput {
    conversation_id: Uuid,
    title: Option<String>,
    message_count: usize,
    skipped_entries: usize,
    analysis: Option<ConversationAnalysis>,
}

impl CommandOutput for IngestOutput {
    fn to_human(&self) -> String {
        let mut lines = vec![format!(
            "Stored conversation {} ({} messages{})",
            self.conversation_id,
            self.message_count,
            if self.skipped_entries > 0 {
                format!(", {} entries skipped", self.skipped_entries)
            } else {
                String::new()
            }
        )];
        if let Some(title) = &self.title {
            lines.push(format!("  Title: {title}"));
        }
        match &self.analysis {
            Some(analysis) => {
                lines.push(String::new());
                lines.push(format_analysis(analysis));
            }
            None => lines.push("No messages stored; analysis skipped".to_string()),
        }
        lines.join("\n")
    }
}

pub async fn execute(args: IngestArgs, json_mode: bool) -> Result<()> {
    let raw = std::fs::read_to_string(&args.file)
        .with_context(|| format!("Failed to read {}", args.file.display()))?;
    let (messages, timestamp, skipped) = parse_transcript(&raw)?;
    if messages.is_empty() && skipped > 0 {
        bail!("Transcript contained no usable messages ({skipped} entries skipped)");
    }

    let title = args.title.or_else(|| {
        Some(format!(
            "Chat on {}",
            timestamp.as_deref().unwrap_or("unknown date")
        ))
    });

    let (_config, pool) = open_database().await?;
    let (conversations, _analyses, service) = build_service(&pool);

    let conversation = Conversation::new(title.clone());
    conversations.create(&conversation).await?;
    conversations
        .add_messages(conversation.id, &messages)
        .await?;

    let analysis = service.analyze_conversation(conversation.id).await?;

    let out = IngestOutput {
        conversation_id: conversation.id,
        title,
        message_count: messages.len(),
        skipped_entries: skipped,
        analysis,
    };
    output(&out, json_mode);
    Ok(())
}
