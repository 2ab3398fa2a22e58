//! Analysis use cases and their result types
//!
//! Use cases wire a record source to the aggregation services and map the
//! winning record into a plain result struct. They are the single point
//! where lower-layer failures are caught: any error crossing this
//! boundary comes out as one analysis failure carrying the original
//! message, with the cause chain intact.

use serde::Serialize;
use tracing::info;

use crate::app::models::{Country, Weather};
use crate::app::repositories::RecordSource;
use crate::app::services::{climate, demographics};
use crate::{Error, Result};

/// Outcome of a climate analysis run
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ClimateAnalysisResult {
    /// Day number with the smallest temperature spread
    pub day_with_smallest_spread: i64,

    /// Value of the smallest temperature spread
    pub smallest_spread: f64,
}

/// Outcome of a country statistics analysis run
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CountryAnalysisResult {
    /// Name of the country with the highest population density
    pub country_with_highest_density: String,

    /// Value of the highest population density
    pub highest_density: f64,
}

/// Finds the day with the smallest temperature spread
#[derive(Debug)]
pub struct ClimateAnalysis<R> {
    source: R,
}

impl<R: RecordSource<Weather>> ClimateAnalysis<R> {
    pub fn new(source: R) -> Self {
        Self { source }
    }

    /// Run the analysis, converting any failure into a single
    /// analysis-failed error
    pub fn run(&self) -> Result<ClimateAnalysisResult> {
        self.analyze().map_err(Error::analysis_failed)
    }

    fn analyze(&self) -> Result<ClimateAnalysisResult> {
        let records = self.source.read_all()?;
        if records.is_empty() {
            return Err(Error::empty_data("no weather records found in the file"));
        }

        info!("analyzing {} weather records", records.len());
        let winner = climate::find_smallest_temperature_spread(&records)?;

        Ok(ClimateAnalysisResult {
            day_with_smallest_spread: winner.day,
            smallest_spread: winner.temperature_spread(),
        })
    }
}

/// Finds the country with the highest population density
#[derive(Debug)]
pub struct CountryAnalysis<R> {
    source: R,
}

impl<R: RecordSource<Country>> CountryAnalysis<R> {
    pub fn new(source: R) -> Self {
        Self { source }
    }

    /// Run the analysis, converting any failure into a single
    /// analysis-failed error
    pub fn run(&self) -> Result<CountryAnalysisResult> {
        self.analyze().map_err(Error::analysis_failed)
    }

    fn analyze(&self) -> Result<CountryAnalysisResult> {
        let countries = self.source.read_all()?;
        if countries.is_empty() {
            return Err(Error::empty_data("no country records found in the file"));
        }

        info!("analyzing {} country records", countries.len());
        let winner = demographics::find_highest_population_density(&countries)?;

        Ok(CountryAnalysisResult {
            country_with_highest_density: winner.name.clone(),
            highest_density: winner.population_density(),
        })
    }
}
