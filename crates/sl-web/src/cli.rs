//! Command-line argument definitions.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Single-user sleep logger.
///
/// Records sleep intervals to a flat file and serves a browser page that
/// charts them per day.
#[derive(Debug, Parser)]
#[command(name = "sleeplog", version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output.
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Path to config file.
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Serve the web UI.
    Serve {
        /// Port to listen on (overrides configuration).
        #[arg(long)]
        port: Option<u16>,

        /// Path to the entry file (overrides configuration).
        #[arg(long)]
        data_file: Option<PathBuf>,
    },
}
