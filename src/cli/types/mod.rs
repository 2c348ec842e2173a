//! Type-safe wrappers for stats.nba.com request parameters.

pub mod time;

pub use time::Season;
