//! CLI module
//!
//! One-shot commands over a snapshot file:
//! - query: run the pipeline and print the served page
//! - stats: print collection counts

mod args;
mod commands;
mod errors;

pub use args::{Cli, Command};
pub use commands::{run, run_command};
pub use errors::{CliError, CliResult};
