use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use folio_core::AppConfig;

mod commands;

#[derive(Parser)]
#[command(name = "folio")]
#[command(author, version, about = "Articles and categories for the portfolio site")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List an author's articles
    Articles {
        /// Author handle (defaults to general.default_handle)
        #[arg(short = 'u', long)]
        handle: Option<String>,
        /// Category slug, e.g. "web", "ai" or "all"
        #[arg(short = 'c', long)]
        category: Option<String>,
        /// Show at most this many articles
        #[arg(short = 'l', long)]
        limit: Option<usize>,
        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },
    /// List the configured article categories
    Categories,
    /// Estimate read time for a file, or stdin when no file is given
    ReadTime {
        file: Option<PathBuf>,
    },
    /// Show the configuration file location
    Config {
        /// Write the default configuration if no file exists yet
        #[arg(long)]
        init: bool,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Load configuration
    let config = AppConfig::load()?;

    // Initialize logging
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| config.general.log_level.clone()),
        ))
        .with(tracing_subscriber::fmt::layer().with_target(false).with_writer(std::io::stderr))
        .init();

    match cli.command {
        Commands::Articles { handle, category, limit, json } => {
            let options = commands::articles::Options {
                handle,
                category,
                limit,
                json,
            };
            commands::articles::run(&config, options).await
        }
        Commands::Categories => commands::categories::run(&config),
        Commands::ReadTime { file } => commands::read_time::run(file.as_deref()),
        Commands::Config { init } => commands::config::run(&config, init),
    }
}
