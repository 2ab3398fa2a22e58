//! Delimited file ingestion with locale-robust number parsing
//!
//! This module turns heterogeneous CSV input into typed records. The
//! pipeline is the same for every dataset format:
//!
//! - [`number_format`] - canonicalizes locale-ambiguous numeric strings
//! - [`column_map`] - case-insensitive header name to index mapping
//! - [`raw_record`] - typed cell access over one data row
//! - [`reader`] - generic file reading, validation, and the per-line loop
//! - [`record_parsers`] - per-format row DTOs and parse functions
//!
//! ## Usage
//!
//! ```rust,no_run
//! use dataset_analyzer::app::services::csv_reader::weather_reader;
//!
//! # fn example() -> dataset_analyzer::Result<()> {
//! let reader = weather_reader("data/weather.csv");
//! let records = reader.read_all_records()?;
//!
//! println!("read {} weather records", records.len());
//! # Ok(())
//! # }
//! ```

pub mod column_map;
pub mod number_format;
pub mod raw_record;
pub mod reader;
pub mod record_parsers;

#[cfg(test)]
pub mod tests;

// Re-export main types for easy access
pub use column_map::ColumnMap;
pub use raw_record::RawRecord;
pub use reader::DelimitedReader;
pub use record_parsers::{
    CountryCsvRecord, WeatherCsvRecord, country_reader, parse_country_line, parse_weather_line,
    weather_reader,
};
