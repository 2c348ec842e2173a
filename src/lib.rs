//! NBA Season-Totals Export CLI Library
//!
//! Fetches aggregate per-player statistics for one season from the
//! stats.nba.com `leaguedashplayerstats` endpoint, reshapes the provider's
//! tabular payload (parallel `headers` + `rowSet` lists) into one JSON object
//! per player, and writes the whole sequence to a JSON file.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use nba_export::commands::export::{handle_export, ExportParams};
//! use nba_export::nba::http::STATS_BASE_URL;
//!
//! # async fn example() -> nba_export::Result<()> {
//! handle_export(ExportParams {
//!     season: None, // resolved from env var or default
//!     output: "all_player_stats.json".into(),
//!     debug: false,
//!     base_url: STATS_BASE_URL.to_string(),
//! })
//! .await?;
//! # Ok(())
//! # }
//! ```
//!
//! ## Environment Configuration
//!
//! Set a season to avoid passing it on every run:
//! ```bash
//! export NBA_EXPORT_SEASON=2024-25
//! ```

pub mod cli;
pub mod commands;
pub mod error;
pub mod nba;

// Re-export commonly used types
pub use cli::types::Season;
pub use error::{ExportError, Result};
pub use nba::transform::PlayerRecord;
pub use nba::types::{ResultSet, StatsResponse};

pub const SEASON_ENV_VAR: &str = "NBA_EXPORT_SEASON";
