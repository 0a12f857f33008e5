//! CLI command implementations.

pub mod analyze;
pub mod batch;
pub mod ingest;
pub mod init;
pub mod report;

use std::sync::Arc;

use anyhow::{Context, Result};
use sqlx::SqlitePool;

use crate::adapters::scoring::RandomQualityScorer;
use crate::adapters::sqlite::{
    initialize_database, SqliteAnalysisRepository, SqliteConversationRepository,
};
use crate::config::{Config, ConfigLoader};
use crate::services::{AnalysisEngine, AnalysisService};

type Service = AnalysisService<
    SqliteConversationRepository,
    SqliteAnalysisRepository,
    RandomQualityScorer,
>;

/// Load config and open the project database.
pub(crate) async fn open_database() -> Result<(Config, SqlitePool)> {
    let config = ConfigLoader::load()?;
    let pool = initialize_database(&config.database.url())
        .await
        .context("Failed to initialize database. Run 'convoscope init' first.")?;
    Ok((config, pool))
}

/// Wire the standard repository/service stack around a pool.
pub(crate) fn build_service(
    pool: &SqlitePool,
) -> (
    Arc<SqliteConversationRepository>,
    Arc<SqliteAnalysisRepository>,
    Service,
) {
    let conversations = Arc::new(SqliteConversationRepository::new(pool.clone()));
    let analyses = Arc::new(SqliteAnalysisRepository::new(pool.clone()));
    let service = AnalysisService::new(
        conversations.clone(),
        analyses.clone(),
        AnalysisEngine::new(RandomQualityScorer),
    );
    (conversations, analyses, service)
}
