//! Analyze command: run (or re-run) the analysis for one conversation.

use anyhow::Result;
use clap::Args;
use uuid::Uuid;

use crate::cli::commands::{build_service, open_database};
use crate::cli::output::{output, CommandOutput};
use crate::domain::models::ConversationAnalysis;

#[derive(Args, Debug)]
pub struct AnalyzeArgs {
    /// Conversation ID to analyze
    pub id: Uuid,
}

#[derive(Debug, serde::Serialize)]
pub(crate) enum AnalyzeOutput {
    Analyzed(ConversationAnalysis),
    Empty { conversation_id: Uuid },
}

impl CommandOutput for AnalyzeOutput {
    fn to_human(&self) -> String {
        match self {
            Self::Analyzed(analysis) => format_analysis(analysis),
            Self::Empty { conversation_id } => {
                format!("Conversation {conversation_id} has no messages; nothing to analyze")
            }
        }
    }

    fn to_json(&self) -> serde_json::Value {
        match self {
            Self::Analyzed(analysis) => serde_json::to_value(analysis).unwrap_or_default(),
            Self::Empty { conversation_id } => serde_json::json!({
                "conversation_id": conversation_id,
                "analyzed": false,
                "reason": "empty conversation",
            }),
        }
    }
}

fn fmt_dim(score: Option<f64>) -> String {
    match score {
        Some(v) => format!("{v:.2}"),
        None => "-".to_string(),
    }
}

/// Render one analysis record as the human-readable report block shared by
/// the analyze, ingest, and report commands.
pub(crate) fn format_analysis(a: &ConversationAnalysis) -> String {
    format!(
        "Analysis for conversation {}\n\
         \x20 Sentiment:          {}\n\
         \x20 Resolution:         {}\n\
         \x20 Escalation needed:  {}\n\
         \x20 Fallback count:     {}\n\
         \x20 Avg response time:  {:.2}s\n\
         \x20 Clarity:            {}\n\
         \x20 Relevance:          {}\n\
         \x20 Accuracy:           {}\n\
         \x20 Completeness:       {}\n\
         \x20 Empathy:            {}\n\
         \x20 Overall score:      {:.2} / 5",
        a.conversation_id,
        a.sentiment.as_str(),
        if a.resolution { "yes" } else { "no" },
        if a.escalation_need { "yes" } else { "no" },
        a.fallback_frequency,
        a.response_time_avg,
        fmt_dim(a.clarity_score),
        fmt_dim(a.relevance_score),
        fmt_dim(a.accuracy_score),
        fmt_dim(a.completeness_score),
        fmt_dim(a.empathy_score),
        a.overall_score,
    )
}

pub async fn execute(args: AnalyzeArgs, json_mode: bool) -> Result<()> {
    let (_config, pool) = open_database().await?;
    let (_conversations, _analyses, service) = build_service(&pool);

    let result = service.analyze_conversation(args.id).await?;
    let out = match result {
        Some(analysis) => AnalyzeOutput::Analyzed(analysis),
        None => AnalyzeOutput::Empty {
            conversation_id: args.id,
        },
    };
    output(&out, json_mode);
    Ok(())
}
