use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{ExportError, Result};


/// One named table within a stats.nba.com response: a column-name list and a
/// row list positionally aligned with it.
///
/// Rows are kept verbatim as untyped scalars (string, number, or null); the
/// column set is owned entirely by the provider and is not fixed here.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ResultSet {
    pub name: String,
    pub headers: Vec<String>,
    #[serde(rename = "rowSet")]
    pub row_set: Vec<Vec<Value>>,
}

/// Top-level envelope for a stats.nba.com endpoint response.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct StatsResponse {
    #[serde(rename = "resultSets")]
    pub result_sets: Vec<ResultSet>,
}

impl StatsResponse {
    /// Pull out the result set with the given name, falling back to the first
    /// set when no name matches (older payloads label the table differently).
    ///
    /// An envelope with no result sets at all is a malformed response and
    /// fails with [`ExportError::MissingResultSet`].
    pub fn into_result_set(self, name: &str) -> Result<ResultSet> {
        let mut sets = self.result_sets;

        if let Some(pos) = sets.iter().position(|s| s.name == name) {
            return Ok(sets.swap_remove(pos));
        }

        if sets.is_empty() {
            return Err(ExportError::MissingResultSet {
                name: name.to_string(),
            });
        }

        Ok(sets.swap_remove(0))
    }
}
