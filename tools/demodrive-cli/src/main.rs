//! DemoDrive CLI — Command-line interface for music-synced timelines.
//!
//! Usage:
//!   demodrive sync <REQUEST>       Compose overlays for a track and media list
//!   demodrive validate <REQUEST>   Check markers and media without composing
//!   demodrive info <PROJECT>       Show project state information

use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, Subcommand};

use demodrive_common::config::AppConfig;

mod commands;

#[derive(Parser)]
#[command(
    name = "demodrive",
    about = "Sync media to music markers and build render-ready timelines",
    version,
    author
)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Configuration file (defaults to $XDG_CONFIG_HOME/demodrive/config.json)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Compose a synced overlay timeline from a request file
    Sync {
        /// Path to the sync request JSON
        request: PathBuf,

        /// Write a project state here instead of printing the composition
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Project name (defaults to the track title)
        #[arg(short, long)]
        name: Option<String>,

        /// Frame rate, overriding the request
        #[arg(long)]
        fps: Option<u32>,

        /// Aspect ratio (16:9, 9:16 or 1:1), overriding the request
        #[arg(long)]
        aspect_ratio: Option<String>,

        /// Outro configuration JSON
        #[arg(long)]
        outro_config: Option<PathBuf>,

        /// Drop repeated media uploads before composing
        #[arg(long)]
        dedupe: bool,
    },

    /// Check a request's markers and media without composing
    Validate {
        /// Path to the sync request JSON
        request: PathBuf,

        /// Frame rate, overriding the request
        #[arg(long)]
        fps: Option<u32>,
    },

    /// Show project state information
    Info {
        /// Path to the project state JSON
        path: PathBuf,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let app_config = match &cli.config {
        Some(path) => AppConfig::load_from(path)
            .with_context(|| format!("Failed to load config {}", path.display()))?,
        None => AppConfig::load(),
    };

    // Initialize logging
    let mut logging = app_config.logging.clone();
    if cli.verbose {
        logging.level = "debug".to_string();
    }
    demodrive_common::logging::init_logging(&logging);

    match cli.command {
        Commands::Sync {
            request,
            output,
            name,
            fps,
            aspect_ratio,
            outro_config,
            dedupe,
        } => commands::sync::run(
            commands::sync::SyncOptions {
                request,
                output,
                name,
                fps,
                aspect_ratio,
                outro_config,
                dedupe,
            },
            &app_config.composition,
        ),
        Commands::Validate { request, fps } => {
            commands::validate::run(request, fps, &app_config.composition)
        }
        Commands::Info { path } => commands::info::run(path),
    }
}
