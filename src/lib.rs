//! Dataset Analyzer Library
//!
//! A Rust library for analyzing flat CSV datasets with heterogeneous,
//! locale-formatted numeric text.
//!
//! This library provides tools for:
//! - Reading delimited files with header-based column mapping
//! - Normalizing European ("1.234,56"), US ("1,234.56"), and plain decimal
//!   numeric strings into a canonical dot-decimal form before parsing
//! - Mapping raw rows into validated domain records
//! - Computing the day with the smallest temperature spread and the country
//!   with the highest population density
//! - Comprehensive error handling with cause chaining

pub mod constants;

// Core application modules
pub mod app {
    pub mod models;
    pub mod repositories;
    pub mod services {
        pub mod analysis;
        pub mod climate;
        pub mod csv_reader;
        pub mod demographics;
    }
}

// CLI modules
pub mod cli {
    pub mod args;
    pub mod commands;
}

// Re-export commonly used types
pub use app::models::{Country, Weather};
pub use app::repositories::{CountryRepository, RecordSource, WeatherRepository};
pub use app::services::analysis::{
    ClimateAnalysis, ClimateAnalysisResult, CountryAnalysis, CountryAnalysisResult,
};

/// Result type alias for the dataset analyzer
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for dataset analysis operations
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// File path empty, missing, or unreadable
    #[error("file access error: {message}")]
    FileAccess {
        message: String,
        #[source]
        source: Option<std::io::Error>,
    },

    /// Required columns absent from the header row
    #[error("configuration error in '{}': required columns missing: {}", .file, .missing.join(", "))]
    MissingColumns { file: String, missing: Vec<String> },

    /// Cell is not a valid integer after normalization
    #[error("invalid integer format for column '{column}': '{value}'")]
    InvalidInteger { column: String, value: String },

    /// Cell is not a valid decimal after normalization
    #[error("invalid decimal format for column '{column}': '{value}'")]
    InvalidDecimal { column: String, value: String },

    /// A data line failed to parse; carries the 1-based source line number
    #[error("error in line {line}: {source}")]
    Line {
        line: u64,
        #[source]
        source: Box<Error>,
    },

    /// Malformed delimited input surfaced by the CSV reader
    #[error("CSV parsing error in file '{file}': {message}")]
    CsvParse {
        file: String,
        message: String,
        #[source]
        source: Option<csv::Error>,
    },

    /// Aggregation attempted over zero records
    #[error("empty data error: {message}")]
    EmptyData { message: String },

    /// Domain invariant violation
    #[error("data validation error: {message}")]
    DataValidation { message: String },

    /// Use-case level wrapper around any lower-layer failure
    #[error("analysis failed: {message}")]
    AnalysisFailed {
        message: String,
        #[source]
        source: Box<Error>,
    },
}

impl Error {
    /// Create a file access error with optional I/O cause
    pub fn file_access(message: impl Into<String>, source: Option<std::io::Error>) -> Self {
        Self::FileAccess {
            message: message.into(),
            source,
        }
    }

    /// Create a configuration error listing all missing required columns
    pub fn missing_columns(file: impl Into<String>, missing: Vec<String>) -> Self {
        Self::MissingColumns {
            file: file.into(),
            missing,
        }
    }

    /// Create an integer format error for a specific cell
    pub fn invalid_integer(column: impl Into<String>, value: impl Into<String>) -> Self {
        Self::InvalidInteger {
            column: column.into(),
            value: value.into(),
        }
    }

    /// Create a decimal format error for a specific cell
    pub fn invalid_decimal(column: impl Into<String>, value: impl Into<String>) -> Self {
        Self::InvalidDecimal {
            column: column.into(),
            value: value.into(),
        }
    }

    /// Wrap a per-line failure with its 1-based source line number
    pub fn line(line: u64, source: Error) -> Self {
        Self::Line {
            line,
            source: Box::new(source),
        }
    }

    /// Create a CSV parsing error with file context
    pub fn csv_parse(
        file: impl Into<String>,
        message: impl Into<String>,
        source: Option<csv::Error>,
    ) -> Self {
        Self::CsvParse {
            file: file.into(),
            message: message.into(),
            source,
        }
    }

    /// Create an empty data error
    pub fn empty_data(message: impl Into<String>) -> Self {
        Self::EmptyData {
            message: message.into(),
        }
    }

    /// Create a data validation error
    pub fn data_validation(message: impl Into<String>) -> Self {
        Self::DataValidation {
            message: message.into(),
        }
    }

    /// Wrap a lower-layer failure as a single analysis failure,
    /// preserving the original message and cause
    pub fn analysis_failed(source: Error) -> Self {
        Self::AnalysisFailed {
            message: source.to_string(),
            source: Box::new(source),
        }
    }
}
