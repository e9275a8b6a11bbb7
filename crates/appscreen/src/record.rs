//! Row model for scraped app metadata.

use crate::input::DataTable;

/// Candidate headers per field, tried in priority order.
///
/// Scrapers emit either the canonical store column names or a lowercase
/// scheme; the first header present in the table wins.
const TITLE_COLUMNS: &[&str] = &["App Name", "title"];
const DESCRIPTION_COLUMNS: &[&str] = &["Description", "description"];
const GENRE_COLUMNS: &[&str] = &["Genre", "genre"];
const UPDATED_COLUMNS: &[&str] = &["Updated", "updated"];

/// One scraped app record, normalized from a table row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppRecord {
    /// 1-based position within the source table.
    pub index: usize,
    pub title: String,
    pub description: String,
    pub genre: String,
    /// Free-form update-date field; absent when the column is missing or
    /// the cell is null-like.
    pub updated: Option<String>,
}

impl AppRecord {
    /// Build a record from the 1-based row position of a table.
    ///
    /// Missing columns and cells default to empty strings; this never fails.
    pub fn from_table(table: &DataTable, index: usize) -> Self {
        let row = index - 1;

        Self {
            index,
            title: resolve_text(table, row, TITLE_COLUMNS),
            description: resolve_text(table, row, DESCRIPTION_COLUMNS),
            genre: resolve_text(table, row, GENRE_COLUMNS),
            updated: resolve_optional(table, row, UPDATED_COLUMNS),
        }
    }
}

/// Resolve a text field through the candidate headers, defaulting to "".
fn resolve_text(table: &DataTable, row: usize, candidates: &[&str]) -> String {
    candidates
        .iter()
        .find_map(|name| table.cell_by_name(row, name))
        .unwrap_or("")
        .to_string()
}

/// Resolve an optional field; null-like cells become None.
fn resolve_optional(table: &DataTable, row: usize, candidates: &[&str]) -> Option<String> {
    candidates
        .iter()
        .find_map(|name| table.cell_by_name(row, name))
        .filter(|v| !DataTable::is_null_value(v))
        .map(|v| v.to_string())
}
