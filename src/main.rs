// SPDX-License-Identifier: GPL-3.0-only

use clap::{Parser, Subcommand};
use std::path::PathBuf;

mod cli;

#[derive(Parser)]
#[command(name = "picker")]
#[command(about = "Media selection and export core for gallery-style pickers")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List media items in a library directory
    List {
        /// Library directory to scan
        dir: PathBuf,
    },

    /// Export selected items to the temporary store
    Export {
        /// Library directory to pick from
        dir: PathBuf,

        /// Item names to select (repeatable)
        #[arg(short, long)]
        select: Vec<String>,

        /// Select every photo in the directory
        #[arg(short, long)]
        all: bool,

        /// Export format: jpeg or png (default from config)
        #[arg(short, long)]
        format: Option<String>,

        /// JPEG quality preset: low, balanced, high or maximum
        #[arg(short, long)]
        quality: Option<String>,

        /// Output directory (defaults to the configured export namespace)
        #[arg(short, long)]
        out: Option<PathBuf>,
    },
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize logging
    // Set RUST_LOG environment variable to control log level
    // Examples: RUST_LOG=debug, RUST_LOG=picker=debug, RUST_LOG=info
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_target(true)
        .with_level(true)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::List { dir } => cli::list_media(dir).await,
        Commands::Export {
            dir,
            select,
            all,
            format,
            quality,
            out,
        } => cli::export_selection(dir, select, all, format, quality, out).await,
    }
}
