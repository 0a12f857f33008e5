//! Convoscope CLI entry point.

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use convoscope::cli::{Cli, Commands};

#[tokio::main]
async fn main() {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Init(args) => convoscope::cli::commands::init::execute(args, cli.json).await,
        Commands::Ingest(args) => convoscope::cli::commands::ingest::execute(args, cli.json).await,
        Commands::Analyze(args) => {
            convoscope::cli::commands::analyze::execute(args, cli.json).await
        }
        Commands::Report(args) => convoscope::cli::commands::report::execute(args, cli.json).await,
        Commands::Batch => convoscope::cli::commands::batch::execute(cli.json).await,
    };

    if let Err(err) = result {
        convoscope::cli::handle_error(err, cli.json);
    }
}
