//! Batch command: analyze every conversation with no stored analysis yet.

use anyhow::Result;

use crate::cli::commands::{build_service, open_database};
use crate::cli::output::{output, CommandOutput};
use crate::services::{BatchReport, BatchRunner};

impl CommandOutput for BatchReport {
    fn to_human(&self) -> String {
        format!(
            "Batch analysis complete: {} analyzed, {} skipped (empty), {} failed",
            self.analyzed, self.skipped_empty, self.failed
        )
    }
}

pub async fn execute(json_mode: bool) -> Result<()> {
    let (_config, pool) = open_database().await?;
    let (conversations, _analyses, service) = build_service(&pool);

    let runner = BatchRunner::new(conversations, service);
    let report = runner.run().await?;
    output(&report, json_mode);
    Ok(())
}
