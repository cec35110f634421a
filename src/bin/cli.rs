//! CLI binary for artomatic.

use std::path::PathBuf;

use artomatic::render::{render_cards, render_collection};
use artomatic::config::MAX_CARD_COUNT;
use artomatic::{ArtConfig, DisplaySession, OutputFormat};
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

/// Art-O-Matic: a random artwork from the Smithsonian American Art Museum.
#[derive(Parser)]
#[command(name = "artomatic", version, about)]
struct Cli {
    /// Path to TOML configuration file.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Subcommand to run.
    #[command(subcommand)]
    command: Option<Command>,
}

/// Available commands.
#[derive(Subcommand)]
enum Command {
    /// Show random artworks (the default).
    Show {
        /// Number of artworks to show (at most 100). Defaults to the config value.
        #[arg(short = 'n', long)]
        count: Option<usize>,

        /// Print cards as JSON.
        #[arg(long)]
        json: bool,
    },

    /// Print every artwork the query returned.
    List {
        /// Print records as JSON.
        #[arg(long)]
        json: bool,
    },

    /// Print the SPARQL query that will be sent.
    Query,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Logs go to stderr so stdout stays clean for `--json`.
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("artomatic=info,saam_sparql=info")),
        )
        .init();

    let cli = Cli::parse();
    let config = ArtConfig::load(cli.config.as_deref())?;

    let command = cli.command.unwrap_or(Command::Show {
        count: None,
        json: false,
    });

    match command {
        Command::Show { count, json } => {
            let count = count.unwrap_or(config.display.count);
            if count == 0 || count > MAX_CARD_COUNT {
                anyhow::bail!("--count must be between 1 and {MAX_CARD_COUNT}");
            }
            show(&config, count, output_format(&config, json)).await
        }
        Command::List { json } => list(&config, output_format(&config, json)).await,
        Command::Query => {
            println!("{}", config.endpoint.query.text().trim());
            Ok(())
        }
    }
}

/// `--json` overrides the configured format; it never forces text.
fn output_format(config: &ArtConfig, json: bool) -> OutputFormat {
    if json {
        OutputFormat::Json
    } else {
        config.display.format
    }
}

async fn show(config: &ArtConfig, count: usize, format: OutputFormat) -> anyhow::Result<()> {
    let mut session = DisplaySession::from_config(config)?;
    let cards = session.cards(count).await.map_err(|e| {
        tracing::error!(error = %e, "could not load artwork");
        anyhow::anyhow!("could not load artwork: {e}")
    })?;
    println!("{}", render_cards(&cards, format)?);
    Ok(())
}

async fn list(config: &ArtConfig, format: OutputFormat) -> anyhow::Result<()> {
    let session = DisplaySession::from_config(config)?;
    let collection = session.collection().await?;
    tracing::info!(count = collection.len(), "artworks loaded");
    println!("{}", render_collection(&collection, format)?);
    Ok(())
}
