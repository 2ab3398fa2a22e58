//! Typed access to the cells of one raw data row
//!
//! Every record parser goes through [`RawRecord`] so that all of them share
//! one locale-robust numeric path and one consistent missing-column policy:
//! an absent column yields an empty string or zero rather than an error,
//! while a present but malformed cell fails with the column name and the
//! raw text.

use csv::StringRecord;

use super::column_map::ColumnMap;
use super::number_format::normalize;
use crate::{Error, Result};

/// Borrowed view over one data row and its column mapping
///
/// Lives only as long as the row it wraps; the typed record produced from
/// it owns all of its data.
#[derive(Debug)]
pub struct RawRecord<'a> {
    values: &'a StringRecord,
    columns: &'a ColumnMap,
}

impl<'a> RawRecord<'a> {
    /// Wrap a data row together with the file's column map
    pub fn new(values: &'a StringRecord, columns: &'a ColumnMap) -> Self {
        Self { values, columns }
    }

    /// Get the trimmed cell value for a column.
    ///
    /// Returns an empty string when the column is absent from the map or
    /// the row is shorter than the mapped index. Never fails.
    pub fn get_string(&self, column_name: &str) -> &'a str {
        self.columns
            .index_of(column_name)
            .and_then(|index| self.values.get(index))
            .map(str::trim)
            .unwrap_or("")
    }

    /// Get an integer cell value.
    ///
    /// Empty or missing cells parse as 0. Non-empty cells are normalized
    /// first; a value in decimal form after normalization is accepted and
    /// rounded to the nearest integer.
    pub fn get_int(&self, column_name: &str) -> Result<i64> {
        let value = self.get_string(column_name);
        if value.is_empty() {
            return Ok(0);
        }

        let normalized = normalize(value);
        if let Ok(parsed) = normalized.parse::<i64>() {
            return Ok(parsed);
        }

        normalized
            .parse::<f64>()
            .ok()
            .filter(|parsed| parsed.is_finite())
            .map(|parsed| parsed.round() as i64)
            .ok_or_else(|| Error::invalid_integer(column_name, value))
    }

    /// Get a floating-point cell value.
    ///
    /// Empty or missing cells parse as 0.0; the same normalization applies.
    pub fn get_double(&self, column_name: &str) -> Result<f64> {
        let value = self.get_string(column_name);
        if value.is_empty() {
            return Ok(0.0);
        }

        normalize(value)
            .parse::<f64>()
            .map_err(|_| Error::invalid_decimal(column_name, value))
    }
}
