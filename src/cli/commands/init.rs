//! Project initialization command.

use anyhow::{Context, Result};
use clap::Args;
use std::path::Path;

use crate::adapters::sqlite::initialize_database;
use crate::cli::output::{output, CommandOutput};
use crate::config::{Config, ConfigLoader, PROJECT_DIR};

#[derive(Args, Debug)]
pub struct InitArgs {
    /// Overwrite an existing config file
    #[arg(short, long)]
    pub force: bool,
}

#[derive(Debug, serde::Serialize)]
struct InitOutput {
    config_path: String,
    database_path: String,
    created_config: bool,
}

impl CommandOutput for InitOutput {
    fn to_human(&self) -> String {
        let config_line = if self.created_config {
            format!("Wrote config to {}", self.config_path)
        } else {
            format!("Config already exists at {} (use --force to overwrite)", self.config_path)
        };
        format!("{config_line}\nDatabase ready at {}", self.database_path)
    }
}

pub async fn execute(args: InitArgs, json_mode: bool) -> Result<()> {
    std::fs::create_dir_all(PROJECT_DIR)
        .with_context(|| format!("Failed to create {PROJECT_DIR}"))?;

    let config_path = format!("{PROJECT_DIR}/config.yaml");
    let created_config = if !Path::new(&config_path).exists() || args.force {
        let defaults = serde_yaml::to_string(&Config::default())
            .context("Failed to serialize default config")?;
        std::fs::write(&config_path, defaults)
            .with_context(|| format!("Failed to write {config_path}"))?;
        true
    } else {
        false
    };

    let config = ConfigLoader::load()?;
    initialize_database(&config.database.url())
        .await
        .context("Failed to initialize database")?;

    let out = InitOutput {
        config_path,
        database_path: config.database.path,
        created_config,
    };
    output(&out, json_mode);
    Ok(())
}
