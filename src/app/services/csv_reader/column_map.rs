//! Header-based column mapping for delimited files
//!
//! This module analyzes a header row to build a case-insensitive lookup
//! from column name to zero-based column index.

use csv::StringRecord;
use std::collections::HashMap;

/// Case-insensitive column name to index mapping
///
/// Built once per file from the header line and immutable afterwards.
/// Blank header cells are skipped; a duplicated header name resolves to
/// its last occurrence.
#[derive(Debug, Clone)]
pub struct ColumnMap {
    name_to_index: HashMap<String, usize>,
}

impl ColumnMap {
    /// Build a column map from a trimmed header record
    pub fn from_headers(headers: &StringRecord) -> Self {
        let mut name_to_index = HashMap::new();

        for (index, header) in headers.iter().enumerate() {
            let name = header.trim();
            if !name.is_empty() {
                name_to_index.insert(name.to_lowercase(), index);
            }
        }

        ColumnMap { name_to_index }
    }

    /// Get the index for a given column name, ignoring case
    pub fn index_of(&self, column_name: &str) -> Option<usize> {
        self.name_to_index.get(&column_name.to_lowercase()).copied()
    }

    /// Check if a column exists in the mapping
    pub fn has_column(&self, column_name: &str) -> bool {
        self.name_to_index.contains_key(&column_name.to_lowercase())
    }

    /// Number of mapped columns
    pub fn len(&self) -> usize {
        self.name_to_index.len()
    }

    /// Whether the header produced no usable columns
    pub fn is_empty(&self) -> bool {
        self.name_to_index.is_empty()
    }
}
