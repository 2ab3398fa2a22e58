//! File-backed record sources for the analysis use cases
//!
//! Repositories own a configured [`DelimitedReader`] and map its raw CSV
//! rows into validated domain models. Dependencies are constructed
//! explicitly and passed in; there is no shared registry or singleton.

use std::path::PathBuf;

use crate::Result;
use crate::app::models::{Country, Weather};
use crate::app::services::csv_reader::{
    CountryCsvRecord, DelimitedReader, WeatherCsvRecord, country_reader, weather_reader,
};

/// Source of typed records for one analysis run.
///
/// `read_all` may be called repeatedly; each call re-reads the underlying
/// data in full.
pub trait RecordSource<T> {
    fn read_all(&self) -> Result<Vec<T>>;
}

/// Reads weather records from a comma-delimited CSV file
#[derive(Debug)]
pub struct WeatherRepository {
    reader: DelimitedReader<WeatherCsvRecord>,
}

impl WeatherRepository {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            reader: weather_reader(path),
        }
    }
}

impl RecordSource<Weather> for WeatherRepository {
    fn read_all(&self) -> Result<Vec<Weather>> {
        self.reader
            .read_all_records()?
            .into_iter()
            .map(|record| Weather::new(record.day, record.max_temperature, record.min_temperature))
            .collect()
    }
}

/// Reads country records from a semicolon-delimited CSV file
#[derive(Debug)]
pub struct CountryRepository {
    reader: DelimitedReader<CountryCsvRecord>,
}

impl CountryRepository {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            reader: country_reader(path),
        }
    }
}

impl RecordSource<Country> for CountryRepository {
    fn read_all(&self) -> Result<Vec<Country>> {
        self.reader
            .read_all_records()?
            .into_iter()
            .map(|record| Country::new(record.name, record.population, record.area))
            .collect()
    }
}
