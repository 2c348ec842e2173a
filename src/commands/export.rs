//! Season-totals export: fetch, reshape, write, report.
//!
//! This is the whole pipeline behind the binary: one request to the stats
//! provider for the season's per-player totals, a positional reshape of the
//! returned table into named-field records, and one pretty-printed JSON file.
//! Fetch completes fully before the transform begins, and the transform
//! completes fully before the write; any failure at any stage aborts the run.

use std::fs;
use std::path::{Path, PathBuf};

use reqwest::Client;

use crate::{
    cli::types::Season,
    nba::{
        http::get_league_player_stats,
        transform::{records_from_result_set, PlayerRecord},
    },
    Result,
};

use super::resolve_season;


/// Configuration for one export run.
#[derive(Debug)]
pub struct ExportParams {
    /// Season to request; `None` falls back to the env var, then the default.
    pub season: Option<Season>,
    pub output: PathBuf,
    /// Print the request URL before fetching.
    pub debug: bool,
    /// Stats endpoint base URL; the binary passes [`STATS_BASE_URL`],
    /// tests pass a mock server.
    ///
    /// [`STATS_BASE_URL`]: crate::nba::http::STATS_BASE_URL
    pub base_url: String,
}

/// Run the fetch → transform → write pipeline and print the summary line.
///
/// # Errors
///
/// Returns an error if:
/// - The stats endpoint is unreachable or answers non-2xx
/// - The response lacks the expected result-set structure
/// - A row's length disagrees with the header list
/// - The output file cannot be written
pub async fn handle_export(params: ExportParams) -> Result<()> {
    let season = resolve_season(params.season);

    let client = Client::new();
    let result_set =
        get_league_player_stats(&client, &params.base_url, &season, params.debug).await?;
    let records = records_from_result_set(result_set)?;

    write_records(&params.output, &records)?;
    println!("{}", summary_line(records.len(), &params.output));

    Ok(())
}

/// Render the post-write summary, e.g. `Exported 450 players → all_player_stats.json`.
pub fn summary_line(count: usize, path: &Path) -> String {
    format!("Exported {} players → {}", count, path.display())
}

/// Serialize records as a pretty-printed JSON array, overwriting `path`.
///
/// Writes in place with no temp-file step, so a failed write may leave a
/// partial file behind as a failure artifact.
pub fn write_records(path: &Path, records: &[PlayerRecord]) -> Result<()> {
    let json = serde_json::to_string_pretty(records)?;
    fs::write(path, json)?;
    Ok(())
}
