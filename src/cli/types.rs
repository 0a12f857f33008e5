//! CLI type definitions.
//!
//! Clap command structures that define the CLI interface.

use clap::{Parser, Subcommand};

use crate::cli::commands::{
    analyze::AnalyzeArgs, ingest::IngestArgs, init::InitArgs, report::ReportArgs,
};

#[derive(Parser)]
#[command(name = "convoscope")]
#[command(about = "Convoscope - Conversation quality analysis", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output in JSON format
    #[arg(short, long, global = true)]
    pub json: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize Convoscope configuration and database
    Init(InitArgs),

    /// Upload a conversation transcript and analyze it immediately
    Ingest(IngestArgs),

    /// Run (or re-run) the analysis for a stored conversation
    Analyze(AnalyzeArgs),

    /// Show conversation reports
    Report(ReportArgs),

    /// Analyze every conversation that has no stored analysis yet
    Batch,
}
