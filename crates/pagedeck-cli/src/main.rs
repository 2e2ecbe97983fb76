use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use pagedeck_core::DeckConfig;

mod app;
mod pages;

#[derive(Parser)]
#[command(name = "pagedeck")]
#[command(author, version, about = "A swipeable page deck in the terminal")]
struct Cli {
    /// Number of demo pages in the deck
    #[arg(short = 'n', long, default_value_t = 4)]
    pages: usize,

    /// Configuration file (defaults to ~/.config/pagedeck/config.toml)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Page to show first
    #[arg(long)]
    start: Option<usize>,

    /// Disable drag-to-swipe
    #[arg(long)]
    no_swipe: bool,

    /// Show the decorative bottom line
    #[arg(long)]
    bottom_line: bool,

    /// Hide the page-indicator dots
    #[arg(long)]
    no_dots: bool,

    /// Do not mirror page titles into the title bar
    #[arg(long)]
    no_title: bool,
}

fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info".into()),
        ))
        .with(tracing_subscriber::fmt::layer().with_target(false))
        .init();

    let cli = Cli::parse();

    // Load configuration, then let flags override it
    let mut config = match &cli.config {
        Some(path) => DeckConfig::load_from(path)?,
        None => DeckConfig::load()?,
    };
    if let Some(start) = cli.start {
        config.navigator.start_page = start;
    }
    if cli.no_swipe {
        config.navigator.enable_swipe = false;
    }
    if cli.bottom_line {
        config.navigator.show_bottom_line = true;
    }
    if cli.no_dots {
        config.navigator.show_page_control = false;
    }
    if cli.no_title {
        config.navigator.set_navigation_title = false;
    }

    app::run(config, cli.pages.max(1))
}
