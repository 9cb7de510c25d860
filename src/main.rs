mod cli;
mod config;
mod corpus;
mod embedding;
mod engine;
mod error;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "crumb", version, about = "Offline baking assistant for Q&A and recipe recommendations")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Start an interactive chat session
    Chat,
    /// Ask a single question and print the reply
    Ask {
        /// The query text
        query: String,
    },
    /// Recommend recipes for a query, bypassing the intent router
    Recommend {
        /// The query text
        query: String,
        /// Maximum number of recipes to return
        #[arg(long)]
        top_n: Option<usize>,
    },
    /// Manage the embedding model
    Model {
        #[command(subcommand)]
        action: ModelAction,
    },
    /// Check config, corpora, and model files
    Doctor,
}

#[derive(Subcommand)]
enum ModelAction {
    /// Download the embedding model to ~/.crumb/models/
    Download,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Load config (for corpus paths and log level)
    let config = config::CrumbConfig::load()?;

    // Initialize tracing with the configured log level.
    // Log to stderr so stdout stays clean for chat output.
    let filter =
        EnvFilter::try_new(&config.chat.log_level).unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Command::Chat => {
            cli::chat::run(&config)?;
        }
        Command::Ask { query } => {
            cli::ask::run(&config, &query)?;
        }
        Command::Recommend { query, top_n } => {
            cli::recommend::run(&config, &query, top_n)?;
        }
        Command::Model { action } => match action {
            ModelAction::Download => {
                cli::model_download(&config.embedding).await?;
            }
        },
        Command::Doctor => {
            cli::doctor::run(&config)?;
        }
    }

    Ok(())
}
