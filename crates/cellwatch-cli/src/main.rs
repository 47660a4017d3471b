mod run;

use std::path::PathBuf;

use clap::Parser;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "cellwatch")]
#[command(about = "Collect stem-cell and immune-cell therapy updates into a JSON digest")]
struct Cli {
    /// Write the report here instead of the configured output path
    #[arg(long)]
    output: Option<PathBuf>,

    /// Collect and print the report to stdout without writing any file
    #[arg(long)]
    dry_run: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config = cellwatch_core::load_app_config()?;
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(config.log_level.clone()))?;
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    run::run_once(&config, cli.output.as_deref(), cli.dry_run).await
}
