//! CLI argument definitions using clap
//!
//! Commands:
//! - caredash query --file <snapshot.json> [--search] [--status] [--sort] [--direction] [--page] [--page-size]
//! - caredash stats --file <snapshot.json>

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// caredash - Deterministic query core for a patient records dashboard
#[derive(Parser, Debug)]
#[command(name = "caredash")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Run one query against a snapshot file and print the served page
    Query {
        /// Path to the JSON snapshot
        #[arg(long)]
        file: PathBuf,

        /// Free-text search over name, id and condition
        #[arg(long, default_value = "")]
        search: String,

        /// Status filter: all, stable, critical or recovering
        #[arg(long, default_value = "all")]
        status: String,

        /// Sort field: name, id, condition, status or lastVisit
        #[arg(long, default_value = "lastVisit")]
        sort: String,

        /// Sort direction: asc or desc
        #[arg(long, default_value = "desc")]
        direction: String,

        /// Requested page, 1-based
        #[arg(long, default_value_t = 1)]
        page: usize,

        /// Rows per page
        #[arg(long, default_value_t = 10)]
        page_size: usize,
    },

    /// Print total and per-status record counts for a snapshot
    Stats {
        /// Path to the JSON snapshot
        #[arg(long)]
        file: PathBuf,
    },
}

impl Cli {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}
