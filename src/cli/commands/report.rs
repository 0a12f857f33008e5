//! Report command: list stored conversations or show one in detail.

use anyhow::{bail, Result};
use clap::Args;
use uuid::Uuid;

use crate::cli::commands::analyze::format_analysis;
use crate::cli::commands::{build_service, open_database};
use crate::cli::output::{output, truncate, CommandOutput};
use crate::domain::models::{Conversation, ConversationAnalysis, Message};
use crate::domain::ports::{AnalysisRepository, ConversationRepository};

#[derive(Args, Debug)]
pub struct ReportArgs {
    /// Conversation ID to show in detail; omit to list all conversations
    pub id: Option<Uuid>,
}

#[derive(Debug, serde::Serialize)]
struct ReportRow {
    #[serde(flatten)]
    conversation: Conversation,
    overall_score: Option<f64>,
    sentiment: Option<String>,
}

#[derive(Debug, serde::Serialize)]
struct ReportListOutput {
    conversations: Vec<ReportRow>,
}

impl CommandOutput for ReportListOutput {
    fn to_human(&self) -> String {
        if self.conversations.is_empty() {
            return "No conversations stored yet".to_string();
        }
        let mut lines = vec![format!("{} conversation(s):", self.conversations.len())];
        for row in &self.conversations {
            let title = row.conversation.title.as_deref().unwrap_or("(untitled)");
            let score = match row.overall_score {
                Some(score) => format!("{score:.2}"),
                None => "unanalyzed".to_string(),
            };
            let sentiment = row.sentiment.as_deref().unwrap_or("-");
            lines.push(format!(
                "  {}  {:<30}  score: {:<10}  sentiment: {}",
                row.conversation.id,
                truncate(title, 30),
                score,
                sentiment,
            ));
        }
        lines.join("\n")
    }
}

#[derive(Debug, serde::Serialize)]
struct ReportDetailOutput {
    conversation: Conversation,
    messages: Vec<Message>,
    analysis: Option<ConversationAnalysis>,
}

impl CommandOutput for ReportDetailOutput {
    fn to_human(&self) -> String {
        let title = self.conversation.title.as_deref().unwrap_or("(untitled)");
        let mut lines = vec![
            format!("Conversation {}", self.conversation.id),
            format!("  Title:   {title}"),
            format!("  Created: {}", self.conversation.created_at),
            format!("  Messages ({}):", self.messages.len()),
        ];
        for message in &self.messages {
            lines.push(format!(
                "    [{}] {}: {}",
                message.seq,
                message.sender.as_str(),
                message.text
            ));
        }
        lines.push(String::new());
        match &self.analysis {
            Some(analysis) => lines.push(format_analysis(analysis)),
            None => lines.push("Not analyzed yet (run 'convoscope analyze' or 'convoscope batch')".to_string()),
        }
        lines.join("\n")
    }
}

pub async fn execute(args: ReportArgs, json_mode: bool) -> Result<()> {
    let (_config, pool) = open_database().await?;
    let (conversations, analyses, _service) = build_service(&pool);

    match args.id {
        Some(id) => {
            let Some(conversation) = conversations.get(id).await? else {
                bail!("Conversation {id} not found");
            };
            let messages = conversations.get_messages(id).await?;
            let analysis = analyses.get_by_conversation(id).await?;
            let out = ReportDetailOutput {
                conversation,
                messages,
                analysis,
            };
            output(&out, json_mode);
        }
        None => {
            let mut rows = Vec::new();
            for conversation in conversations.list().await? {
                let analysis = analyses.get_by_conversation(conversation.id).await?;
                rows.push(ReportRow {
                    conversation,
                    overall_score: analysis.as_ref().map(|a| a.overall_score),
                    sentiment: analysis.map(|a| a.sentiment.as_str().to_string()),
                });
            }
            let out = ReportListOutput {
                conversations: rows,
            };
            output(&out, json_mode);
        }
    }
    Ok(())
}
