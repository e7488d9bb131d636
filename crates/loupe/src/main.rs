//! Loupe CLI - component metadata extraction for preview renderers.

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::{fmt, EnvFilter};

mod commands;

#[derive(Parser)]
#[command(name = "loupe")]
#[command(about = "Extract component metadata for interactive previews")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Path to loupe.toml config file
    #[arg(short, long, default_value = "loupe.toml")]
    config: PathBuf,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Extract component metadata and write the output artifacts
    Extract {
        /// Project root to extract from
        #[arg(long, default_value = ".")]
        root: PathBuf,

        /// Output directory (defaults to config or "loupe-meta")
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Create a default loupe.toml in the current project
    Init {
        /// Overwrite an existing config
        #[arg(short, long)]
        yes: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    fmt().with_env_filter(filter).with_target(false).init();

    // Execute command
    match cli.command {
        Commands::Extract { root, output } => {
            commands::extract::run(&cli.config, &root, output)?;
        }
        Commands::Init { yes } => {
            commands::init::run(yes)?;
        }
    }

    Ok(())
}
