mod cli;
mod config;
mod context;
mod embedding;
mod memory;
mod retrieval;

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "memoir", version, about = "Journal memory retrieval and reranking")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Rerank a snapshot of journal entries against a query
    Search {
        /// The retrieval query
        query: String,
        /// Path to a JSON snapshot of memory records
        #[arg(long)]
        records: PathBuf,
        /// Number of results to return (default from config)
        #[arg(long)]
        top_n: Option<usize>,
        /// Similarity candidates kept before blended scoring
        #[arg(long)]
        candidates: Option<usize>,
        /// Print the per-candidate score breakdown
        #[arg(long)]
        debug: bool,
    },
    /// Show which topical domain a query classifies into
    Classify {
        query: String,
    },
    /// Print the prompt context block built for a query
    Context {
        query: String,
        #[arg(long)]
        records: PathBuf,
        #[arg(long)]
        top_n: Option<usize>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Load config (for log level)
    let config = config::MemoirConfig::load()?;

    // Initialize tracing with the configured log level.
    // Log to stderr so stdout stays clean for piped output.
    let filter = EnvFilter::try_new(&config.logging.level)
        .unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Command::Search {
            query,
            records,
            top_n,
            candidates,
            debug,
        } => cli::search::search(&config, &query, &records, top_n, candidates, debug),
        Command::Classify { query } => cli::classify::classify(&query),
        Command::Context {
            query,
            records,
            top_n,
        } => cli::context::context(&config, &query, &records, top_n),
    }
}
