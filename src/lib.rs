//! Convoscope - Conversation quality analysis
//!
//! Convoscope ingests chat transcripts between a user and an AI assistant,
//! runs a set of lexicon-driven heuristics over them, and produces a single
//! satisfaction score per conversation alongside the individual signals
//! (sentiment, resolution, escalation need, fallback frequency, and a set of
//! pluggable quality dimensions).
//!
//! # Architecture
//!
//! The crate follows a hexagonal layout:
//!
//! - **Domain Layer** (`domain`): models, errors, and the port traits the
//!   engine depends on
//! - **Service Layer** (`services`): the analysis engine, lexicons,
//!   detectors, aggregation, and the batch runner
//! - **Adapters** (`adapters`): SQLite persistence and the placeholder
//!   quality scorer
//! - **CLI Layer** (`cli`): command-line interface
//!
//! # Example
//!
//! ```ignore
//! use convoscope::services::AnalysisEngine;
//! use convoscope::adapters::scoring::RandomQualityScorer;
//!
//! let engine = AnalysisEngine::new(RandomQualityScorer);
//! let analysis = engine.analyze(conversation_id, &messages);
//! ```

pub mod adapters;
pub mod cli;
pub mod config;
pub mod domain;
pub mod services;

// Re-export commonly used types for convenience
pub use config::{Config, ConfigLoader, DatabaseConfig, LoggingConfig};
pub use domain::errors::{DomainError, DomainResult};
pub use domain::models::{
    Conversation, ConversationAnalysis, Message, NewMessage, QualityScores, Sender, Sentiment,
};
pub use domain::ports::{AnalysisRepository, ConversationRepository, QualityScorer};
pub use services::{AnalysisEngine, AnalysisService, BatchReport, BatchRunner};
