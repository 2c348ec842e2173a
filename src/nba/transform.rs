//! Reshape a tabular result set into per-player records.

use serde_json::{Map, Value};

use crate::error::{ExportError, Result};
use crate::nba::types::ResultSet;


/// One player's season-totals row keyed by the provider's column names.
///
/// Built with serde_json's `preserve_order` map, so key order reproduces the
/// header order and serialized output is deterministic.
pub type PlayerRecord = Map<String, Value>;

/// Pair each row positionally with the header list, one record per row.
///
/// Records come out in row order. A row that is shorter or longer than the
/// header list is a data-integrity error and fails the whole transform; rows
/// are never truncated or null-padded to fit.
pub fn records_from_result_set(set: ResultSet) -> Result<Vec<PlayerRecord>> {
    let headers = &set.headers;
    let mut records = Vec::with_capacity(set.row_set.len());

    for (row, values) in set.row_set.into_iter().enumerate() {
        if values.len() != headers.len() {
            return Err(ExportError::RowShape {
                row,
                expected: headers.len(),
                actual: values.len(),
            });
        }

        let mut record = PlayerRecord::new();
        for (header, value) in headers.iter().zip(values) {
            record.insert(header.clone(), value);
        }
        records.push(record);
    }

    Ok(records)
}
