//! Application constants for the dataset analyzer
//!
//! This module contains the column names, delimiters, and default file
//! locations used throughout the application.

// =============================================================================
// Weather Dataset
// =============================================================================

/// Delimiter used by the weather CSV format
pub const WEATHER_DELIMITER: u8 = b',';

/// Columns that must be present in a weather file header
pub const WEATHER_REQUIRED_COLUMNS: &[&str] = &["Day", "MxT", "MnT"];

/// Default location of the weather dataset
pub const DEFAULT_WEATHER_FILE: &str = "data/weather.csv";

// =============================================================================
// Country Dataset
// =============================================================================

/// Delimiter used by the country CSV format
pub const COUNTRY_DELIMITER: u8 = b';';

/// Columns that must be present in a country file header
pub const COUNTRY_REQUIRED_COLUMNS: &[&str] = &["Name", "Capital"];

/// Default location of the country dataset
pub const DEFAULT_COUNTRIES_FILE: &str = "data/countries.csv";
