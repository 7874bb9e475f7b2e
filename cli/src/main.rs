//! # folio CLI
//!
//! Terminal front-end for folio - an academic research portfolio.
//!
//! ## Usage
//!
//! - `folio` - Browse the portfolio full-screen
//! - `folio --page projects` - Start on a given page
//! - `folio render achievements --expand` - Print one page and exit
//!
//! Content is read from a JSON file when one is found and falls back to the
//! built-in sample portfolio otherwise.

use anyhow::Result;
use clap::{Parser, Subcommand};
use folio_core::{MenuItem, Portfolio};
use std::path::PathBuf;

mod commands;
mod config;
mod interactive;

use commands::{interactive_command, render_command};
use config::ContentLoader;

/// folio - An academic research portfolio in the terminal
#[derive(Parser)]
#[command(name = "folio")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "An academic research portfolio in the terminal")]
#[command(long_about = None)]
struct Cli {
    /// Content file, or directory holding content.json
    #[arg(short, long, env = "FOLIO_CONTENT")]
    content: Option<PathBuf>,

    /// Directory images are read from
    #[arg(long)]
    assets_dir: Option<PathBuf>,

    /// Page shown first
    #[arg(long, default_value = "home")]
    page: MenuItem,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Print a single page and exit
    Render {
        /// home, achievements, interests, projects or contact
        page: MenuItem,

        /// Open every card
        #[arg(long)]
        expand: bool,

        /// Output width in columns (defaults to the terminal width)
        #[arg(long)]
        width: Option<u16>,
    },
}

/// Build a content loader from CLI arguments
fn build_content_loader(cli: &Cli) -> ContentLoader {
    let mut loader = ContentLoader::new();

    if let Some(content) = &cli.content {
        loader = loader.with_content_override(content.clone());
    }

    if let Some(assets_dir) = &cli.assets_dir {
        loader = loader.with_assets_override(assets_dir.clone());
    }

    loader
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Logs go to stderr; the full-screen UI keeps quiet unless asked
    let filter = match (cli.verbose, &cli.command) {
        (true, _) => "debug",
        (false, Some(_)) => "info",
        (false, None) => "warn",
    };

    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::new(filter))
        .with_writer(std::io::stderr)
        .init();

    let loaded = build_content_loader(&cli).load().await?;
    let assets = loaded.assets();
    let portfolio = Portfolio::new(loaded.content, assets);

    match cli.command {
        Some(Commands::Render {
            page,
            expand,
            width,
        }) => render_command(&portfolio, page, expand, width),
        None => interactive_command(portfolio, cli.page).await,
    }
}
