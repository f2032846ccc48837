/// Projection of stat records onto a schema, producing display-ready cells
use super::format::format_stat;
use super::record::StatRecord;
use super::schema::FieldSchema;

/// Header plus formatted rows, always in schema column order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayTable {
    pub headers: Vec<&'static str>,
    pub rows: Vec<Vec<String>>,
}

impl DisplayTable {
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn column_count(&self) -> usize {
        self.headers.len()
    }

    /// Cell text by (row, column), if present
    pub fn cell(&self, row: usize, column: usize) -> Option<&str> {
        self.rows.get(row)?.get(column).map(String::as_str)
    }

    /// Index of the column with the given header title
    pub fn column_index(&self, title: &str) -> Option<usize> {
        self.headers.iter().position(|h| *h == title)
    }
}

/// Project records onto a schema
///
/// Record order and schema column order are preserved exactly. A missing
/// field renders as a blank cell.
pub fn project(records: &[StatRecord], schema: &FieldSchema) -> DisplayTable {
    DisplayTable {
        headers: schema.titles(),
        rows: records.iter().map(|record| project_row(record, schema)).collect(),
    }
}

/// Format one record's cells in schema order
pub fn project_row(record: &StatRecord, schema: &FieldSchema) -> Vec<String> {
    schema
        .columns
        .iter()
        .map(|column| {
            record
                .lookup(column.key, column.source)
                .map(|raw| format_stat(column.key, raw))
                .unwrap_or_default()
        })
        .collect()
}
