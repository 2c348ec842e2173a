//! stats.nba.com endpoint client, payload types, and row reshaping.

pub mod http;
pub mod transform;
pub mod types;
