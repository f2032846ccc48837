/// Row-oriented stat records and the boundary adapter that builds them
///
/// The backend answers in three encodings depending on the endpoint:
///
/// - column-oriented: `{"PTS": {"0": 27, "1": 31}, "AST": {"0": 8, "1": 5}}`
/// - index-keyed rows: `{"0": {"PTS": 27}, "1": {"PTS": 31}}`
/// - a plain list of records: `[{"PTS": 27}, {"PTS": 31}]`
///
/// `records_from_payload` turns any of them into `Vec<StatRecord>` once, so
/// nothing downstream has to know which encoding an endpoint uses.
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::collections::BTreeSet;
use tracing::debug;

use super::schema::FieldSource;

/// Column used by stats payloads to mark which row indices exist
pub const ROW_MARKER: &str = "PLAYER_ID";

/// One row of raw stat values keyed by field name
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StatRecord(Map<String, Value>);

impl StatRecord {
    pub fn new(fields: Map<String, Value>) -> Self {
        Self(fields)
    }

    /// Look up a top-level field
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    /// Look up a field at the given source, descending into a nested mapping if needed
    ///
    /// A nested mapping that is missing or not an object yields `None`.
    pub fn lookup(&self, key: &str, source: FieldSource) -> Option<&Value> {
        match source {
            FieldSource::TopLevel => self.0.get(key),
            FieldSource::Nested(parent) => self.0.get(parent)?.as_object()?.get(key),
        }
    }

    pub fn insert(&mut self, key: impl Into<String>, value: Value) {
        self.0.insert(key.into(), value);
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<Map<String, Value>> for StatRecord {
    fn from(fields: Map<String, Value>) -> Self {
        Self(fields)
    }
}

/// Convert any backend payload encoding into ordered row records
///
/// Non-object entries in a list, and scalars at the top level, produce no rows.
pub fn records_from_payload(payload: &Value) -> Vec<StatRecord> {
    match payload {
        Value::Array(items) => items
            .iter()
            .filter_map(|item| item.as_object().cloned().map(StatRecord::from))
            .collect(),
        Value::Object(map) if map.is_empty() => Vec::new(),
        Value::Object(map) if is_index_keyed(map) => {
            let mut rows: Vec<(usize, StatRecord)> = map
                .iter()
                .filter_map(|(k, v)| {
                    let idx = k.parse::<usize>().ok()?;
                    Some((idx, StatRecord::from(v.as_object()?.clone())))
                })
                .collect();
            rows.sort_by_key(|(idx, _)| *idx);
            rows.into_iter().map(|(_, row)| row).collect()
        }
        Value::Object(map) => invert_columns(map),
        _ => Vec::new(),
    }
}

/// Rows keyed by their index (`{"0": {...}, "1": {...}}`)
fn is_index_keyed(map: &Map<String, Value>) -> bool {
    map.iter()
        .all(|(k, v)| k.parse::<usize>().is_ok() && v.is_object())
}

/// Invert a column-oriented table (field -> index -> value) into rows
///
/// All columns of one payload are expected to share a single index set. The
/// row set is taken from the `PLAYER_ID` column when present, otherwise the
/// union of every column's indices; rows are ordered numerically. A cell a
/// column does not carry is left out of the row rather than invented.
fn invert_columns(columns: &Map<String, Value>) -> Vec<StatRecord> {
    let indices: BTreeSet<usize> = match columns.get(ROW_MARKER).and_then(Value::as_object) {
        Some(marker) => marker.keys().filter_map(|k| k.parse().ok()).collect(),
        None => columns
            .values()
            .filter_map(Value::as_object)
            .flat_map(|col| col.keys().filter_map(|k| k.parse().ok()))
            .collect(),
    };

    let ragged = columns
        .values()
        .filter_map(Value::as_object)
        .any(|col| col.len() != indices.len());
    if ragged {
        debug!(
            "PAYLOAD: column-oriented payload has ragged columns ({} rows expected)",
            indices.len()
        );
    }

    indices
        .iter()
        .map(|idx| {
            let key = idx.to_string();
            let mut row = StatRecord::default();
            for (field, column) in columns {
                if let Some(value) = column.as_object().and_then(|col| col.get(&key)) {
                    row.insert(field.clone(), value.clone());
                }
            }
            row
        })
        .collect()
}

/// Backend error body (`{"error": "Team not found."}`), if the payload is one
pub fn backend_error(payload: &Value) -> Option<&str> {
    let map = payload.as_object()?;
    if map.len() != 1 {
        return None;
    }
    map.get("error")?.as_str()
}
