//! Command implementations for the NBA export CLI

pub mod export;

use crate::{cli::types::Season, SEASON_ENV_VAR};

/// Resolve the season from the CLI flag, the `NBA_EXPORT_SEASON` env var, or
/// the built-in default, in that order.
pub fn resolve_season(flag: Option<Season>) -> Season {
    flag.or_else(|| std::env::var(SEASON_ENV_VAR).ok().map(Season::new))
        .unwrap_or_default()
}
