//! Column value aggregation.
//!
//! Flattens a result set into one bucket per column holding every distinct,
//! non-empty display string of that column. Buckets keep the order in which
//! columns first appear, and values keep the order in which they are first
//! seen, so the rendered form is stable for a given result.

use indexmap::{IndexMap, IndexSet};

use crate::search::{ResultColumn, ResultValue};
use crate::types::{ColumnKind, Row};

/// Distinct display values of one column.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnValues {
    /// Display label of the column.
    pub label: String,
    pub kind: ColumnKind,
    /// Distinct non-empty display strings, first-seen order.
    pub values: IndexSet<String>,
}

/// Aggregated values keyed by column storage label.
pub type ColumnValueMap = IndexMap<String, ColumnValues>;

/// Collect every distinct display value per column.
///
/// Empty display values are skipped, list values contribute each of their
/// entries. A column whose cells are all empty still gets a bucket, with no
/// values.
pub fn aggregate<V: ResultValue>(rows: &[Row<V>]) -> ColumnValueMap {
    let mut buckets = ColumnValueMap::new();

    for row in rows {
        for value in row.values() {
            let column = value.column();
            let bucket = buckets
                .entry(column.label().to_string())
                .or_insert_with(|| ColumnValues {
                    label: column.translated_label().to_string(),
                    kind: column.kind(),
                    values: IndexSet::new(),
                });
            // the last translation seen wins
            if bucket.label != column.translated_label() {
                bucket.label = column.translated_label().to_string();
            }

            let display = value.display_value();
            if display.is_empty() {
                continue;
            }
            for entry in display.entries() {
                bucket.values.insert(entry.to_string());
            }
        }
    }

    tracing::debug!(
        rows = rows.len(),
        columns = buckets.len(),
        options = buckets.values().map(|b| b.values.len()).sum::<usize>(),
        "aggregated column values"
    );
    buckets
}
