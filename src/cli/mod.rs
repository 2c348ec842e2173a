//! CLI argument definitions and parsing.

pub mod types;

use clap::Parser;
use std::path::PathBuf;
use types::Season;

/// Export season-total statistics for every NBA player to a JSON file.
///
/// Queries `leaguedashplayerstats` with `PerMode=Totals` and writes one JSON
/// object per player, keyed by the provider's column names.
#[derive(Debug, Parser)]
#[clap(name = "nba-export", about = "NBA season-totals export CLI")]
pub struct Export {
    /// Season in provider format, e.g. 2024-25 (or set `NBA_EXPORT_SEASON` env var).
    #[clap(long, short)]
    pub season: Option<Season>,

    /// Output file path, overwritten on each run.
    #[clap(long, short, default_value = "all_player_stats.json")]
    pub output: PathBuf,

    /// Print the request URL before fetching.
    #[clap(long)]
    pub debug: bool,
}
