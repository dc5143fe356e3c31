//! biohint — extract entity hints from PubTator BioC JSON.
//!
//! Run with: cargo run -p biohint-cli -- path/to/export.json

use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::Context;
use biohint_cli::config::DEFAULT_CONFIG_FILE;
use biohint_cli::{run, Config};
use clap::Parser;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "biohint", version, about = "Extract entity hints from PubTator BioC JSON")]
struct Cli {
    /// BioC JSON files (collection, document array or single document); `-` for stdin
    #[arg(required = true)]
    files: Vec<PathBuf>,

    /// Pretty-print the JSON output
    #[arg(long)]
    pretty: bool,

    /// Emit one record per document instead of a flat hint array
    #[arg(long)]
    by_document: bool,

    /// Config file (defaults to ./biohint.toml when present)
    #[arg(long, env = "BIOHINT_CONFIG")]
    config: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();

    let mut config = Config::load(cli.config.as_deref())?;
    config.output.pretty |= cli.pretty;
    config.output.by_document |= cli.by_document;

    // Initialise structured logging; stdout is reserved for JSON
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(&config.logging.filter)),
        )
        .with_writer(std::io::stderr)
        .init();

    info!("biohint {}", env!("CARGO_PKG_VERSION"));
    match &cli.config {
        Some(path) => info!(path = %path.display(), "Configuration loaded"),
        None if Path::new(DEFAULT_CONFIG_FILE).exists() => {
            info!(path = DEFAULT_CONFIG_FILE, "Configuration loaded")
        }
        None => debug!("No {} found, using defaults", DEFAULT_CONFIG_FILE),
    }

    let mut documents = Vec::new();
    for path in &cli.files {
        documents.extend(run::read_documents(path)?);
    }

    let json = run::render(&documents, &config.output)?;
    let mut stdout = std::io::stdout().lock();
    writeln!(stdout, "{json}").context("Could not write output")?;

    Ok(())
}
