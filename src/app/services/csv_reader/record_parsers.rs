//! Per-format line parsers and reader constructors
//!
//! One raw-row DTO and one parse function per dataset format. The parse
//! functions are plain field-by-field assignment: all locale handling and
//! missing-column policy lives in [`RawRecord`], so optional columns
//! default to zero or an empty string when a file does not carry them.

use std::path::PathBuf;

use super::raw_record::RawRecord;
use super::reader::DelimitedReader;
use crate::Result;
use crate::constants::{
    COUNTRY_DELIMITER, COUNTRY_REQUIRED_COLUMNS, WEATHER_DELIMITER, WEATHER_REQUIRED_COLUMNS,
};

/// One raw row of the daily weather dataset
///
/// `day`, `max_temperature`, and `min_temperature` come from the required
/// columns; everything else is optional in the file.
#[derive(Debug, Clone, PartialEq)]
pub struct WeatherCsvRecord {
    pub day: i64,
    pub max_temperature: f64,
    pub min_temperature: f64,
    pub avg_temperature: f64,
    pub avg_dew_point: f64,
    pub total_precipitation: f64,
    pub prevailing_wind_dir: i64,
    pub avg_wind_speed: f64,
    pub max_gust_dir: i64,
    pub max_wind_speed: i64,
    pub sky_cover: f64,
    pub max_humidity: i64,
    pub min_humidity: i64,
    pub rainfall: f64,
    pub avg_sea_level_pressure: f64,
}

/// One raw row of the country dataset
///
/// Accession, GDP, HDI, and MEPs are carried as raw text; nothing
/// downstream computes with them.
#[derive(Debug, Clone, PartialEq)]
pub struct CountryCsvRecord {
    pub name: String,
    pub capital: String,
    pub accession: String,
    pub population: i64,
    pub area: f64,
    pub gdp: String,
    pub hdi: String,
    pub meps: String,
}

/// Parse one weather data row
pub fn parse_weather_line(row: &RawRecord<'_>) -> Result<WeatherCsvRecord> {
    Ok(WeatherCsvRecord {
        day: row.get_int("Day")?,
        max_temperature: row.get_double("MxT")?,
        min_temperature: row.get_double("MnT")?,
        avg_temperature: row.get_double("AvT")?,
        avg_dew_point: row.get_double("AvDP")?,
        total_precipitation: row.get_double("1HrP TPcpn")?,
        prevailing_wind_dir: row.get_int("PDir")?,
        avg_wind_speed: row.get_double("AvSp")?,
        max_gust_dir: row.get_int("Dir")?,
        max_wind_speed: row.get_int("MxS")?,
        sky_cover: row.get_double("SkyC")?,
        max_humidity: row.get_int("MxR")?,
        min_humidity: row.get_int("Mn")?,
        rainfall: row.get_double("R")?,
        avg_sea_level_pressure: row.get_double("AvSLP")?,
    })
}

/// Parse one country data row
pub fn parse_country_line(row: &RawRecord<'_>) -> Result<CountryCsvRecord> {
    Ok(CountryCsvRecord {
        name: row.get_string("Name").to_string(),
        capital: row.get_string("Capital").to_string(),
        accession: row.get_string("Accession").to_string(),
        population: row.get_int("Population")?,
        area: row.get_double("Area (km²)")?,
        gdp: row.get_string("GDP (US$ M)").to_string(),
        hdi: row.get_string("HDI").to_string(),
        meps: row.get_string("MEPs").to_string(),
    })
}

/// Reader for the comma-delimited weather format
pub fn weather_reader(path: impl Into<PathBuf>) -> DelimitedReader<WeatherCsvRecord> {
    DelimitedReader::new(
        path,
        WEATHER_DELIMITER,
        WEATHER_REQUIRED_COLUMNS,
        parse_weather_line,
    )
}

/// Reader for the semicolon-delimited country format
pub fn country_reader(path: impl Into<PathBuf>) -> DelimitedReader<CountryCsvRecord> {
    DelimitedReader::new(
        path,
        COUNTRY_DELIMITER,
        COUNTRY_REQUIRED_COLUMNS,
        parse_country_line,
    )
}
