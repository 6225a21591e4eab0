//! CLI command implementations
//!
//! Commands are thin: load the snapshot, build a `ViewState` from the
//! arguments (rejecting bad input at the boundary), run the engine once and
//! print JSON on stdout. Diagnostics go to stderr via the logger.

use std::path::Path;

use serde_json::json;

use crate::engine::QueryEngine;
use crate::record::PatientStatus;
use crate::source::SnapshotLoader;
use crate::view::ViewState;

use super::args::{Cli, Command};
use super::errors::{CliError, CliResult};

/// Parses arguments and dispatches to the selected command
pub fn run() -> CliResult<()> {
    run_command(Cli::parse_args().command)
}

/// Dispatches a parsed command
pub fn run_command(command: Command) -> CliResult<()> {
    match command {
        Command::Query {
            file,
            search,
            status,
            sort,
            direction,
            page,
            page_size,
        } => query(&file, &search, &status, &sort, &direction, page, page_size),
        Command::Stats { file } => stats(&file),
    }
}

#[allow(clippy::too_many_arguments)]
fn query(
    file: &Path,
    search: &str,
    status: &str,
    sort: &str,
    direction: &str,
    page: usize,
    page_size: usize,
) -> CliResult<()> {
    let records = SnapshotLoader::load(file)?;

    let mut view = ViewState::default();
    view.set_search_term(search);
    view.set_status_filter(status.parse()?);
    view.sort_field = sort.parse()?;
    view.sort_direction = direction.parse()?;
    view.set_page(page)?;
    view.set_page_size(page_size)?;

    let output = QueryEngine::run(&records, &view);

    let body = json!({
        "rows": output.page_rows,
        "totalCount": output.total_count,
        "totalPages": output.total_pages,
        "effectivePage": output.effective_page,
    });
    print_json(&body)
}

fn stats(file: &Path) -> CliResult<()> {
    let records = SnapshotLoader::load(file)?;

    let mut body = serde_json::Map::new();
    body.insert("totalPatients".to_string(), json!(records.len()));
    for status in PatientStatus::all() {
        let count = records.iter().filter(|r| r.status == status).count();
        body.insert(status.as_str().to_ascii_lowercase(), json!(count));
    }
    print_json(&serde_json::Value::Object(body))
}

fn print_json(value: &serde_json::Value) -> CliResult<()> {
    let rendered =
        serde_json::to_string_pretty(value).map_err(|e| CliError::Encode(e.to_string()))?;
    println!("{}", rendered);
    Ok(())
}
