//! Generic delimited file reader with header-based mapping
//!
//! [`DelimitedReader`] owns the mechanics every dataset shares: file
//! access checks, header analysis, required-column validation, and the
//! per-line loop. What varies per dataset — delimiter, required columns,
//! and how one row becomes a typed record — is fixed at construction, the
//! line parser as a plain function rather than a trait object.
//!
//! Line-parse policy is fail fast: the first data line that does not
//! parse aborts the read, wrapped with its 1-based source line number.
//! Bad lines are never silently skipped.

use std::path::PathBuf;

use csv::{ReaderBuilder, Trim};
use tracing::{debug, info};

use super::column_map::ColumnMap;
use super::raw_record::RawRecord;
use crate::{Error, Result};

/// Reads a delimited text file into typed records of `T`
#[derive(Debug)]
pub struct DelimitedReader<T> {
    path: PathBuf,
    delimiter: u8,
    required_columns: &'static [&'static str],
    parse_line: fn(&RawRecord<'_>) -> Result<T>,
}

impl<T> DelimitedReader<T> {
    /// Create a reader for one dataset format.
    ///
    /// The delimiter and required columns are fixed per format and not
    /// configurable at call time.
    pub fn new(
        path: impl Into<PathBuf>,
        delimiter: u8,
        required_columns: &'static [&'static str],
        parse_line: fn(&RawRecord<'_>) -> Result<T>,
    ) -> Self {
        Self {
            path: path.into(),
            delimiter,
            required_columns,
            parse_line,
        }
    }

    /// Path of the underlying file
    pub fn path(&self) -> &std::path::Path {
        &self.path
    }

    /// Read every data row of the file into a typed record, in file order.
    ///
    /// An empty or header-only file yields an empty vector. A missing
    /// required column fails before any data line is parsed, naming all
    /// missing columns at once. The file is read fully and closed before
    /// this returns.
    pub fn read_all_records(&self) -> Result<Vec<T>> {
        let content = self.read_content()?;
        let file = self.path.display().to_string();

        // Header-only or empty input is a valid zero-record dataset
        if content.lines().count() <= 1 {
            debug!("no data lines in {}", file);
            return Ok(Vec::new());
        }

        let mut csv_reader = ReaderBuilder::new()
            .delimiter(self.delimiter)
            .has_headers(true)
            .trim(Trim::All)
            .flexible(true)
            .from_reader(content.as_bytes());

        let headers = csv_reader
            .headers()
            .map_err(|e| Error::csv_parse(&file, "failed to read header line", Some(e)))?;
        let columns = ColumnMap::from_headers(headers);
        debug!("mapped {} header columns in {}", columns.len(), file);

        self.ensure_required_columns(&columns, &file)?;

        let mut records = Vec::new();
        for result in csv_reader.records() {
            let record =
                result.map_err(|e| Error::csv_parse(&file, "malformed data line", Some(e)))?;

            // Rows of empty cells (delimiter-only lines) carry no data
            if record.iter().all(str::is_empty) {
                continue;
            }

            let line = record.position().map(|p| p.line()).unwrap_or(0);
            let raw = RawRecord::new(&record, &columns);
            let parsed = (self.parse_line)(&raw).map_err(|e| Error::line(line, e))?;
            records.push(parsed);
        }

        info!("read {} records from {}", records.len(), file);
        Ok(records)
    }

    /// Read the whole file, mapping access problems to a file access error
    fn read_content(&self) -> Result<String> {
        if self.path.as_os_str().is_empty() {
            return Err(Error::file_access("file path cannot be empty", None));
        }

        std::fs::read_to_string(&self.path).map_err(|e| {
            Error::file_access(
                format!("CSV file not found: {}", self.path.display()),
                Some(e),
            )
        })
    }

    /// Fail with every missing required column at once, not just the first
    fn ensure_required_columns(&self, columns: &ColumnMap, file: &str) -> Result<()> {
        let missing: Vec<String> = self
            .required_columns
            .iter()
            .filter(|column| !columns.has_column(column))
            .map(|column| column.to_string())
            .collect();

        if missing.is_empty() {
            Ok(())
        } else {
            Err(Error::missing_columns(file, missing))
        }
    }
}
