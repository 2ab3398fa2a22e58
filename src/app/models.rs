//! Domain models for dataset analysis
//!
//! This module contains the validated record types the analysis services
//! operate on. Both are immutable once constructed and live only for the
//! duration of one analysis run.

use serde::{Deserialize, Serialize};

use crate::{Error, Result};

// =============================================================================
// Weather Record
// =============================================================================

/// Weather data for one day: day number plus max/min temperature
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Weather {
    /// Day of month, starting at 1
    pub day: i64,

    /// Maximum temperature observed on the day
    pub max_temperature: f64,

    /// Minimum temperature observed on the day
    pub min_temperature: f64,
}

impl Weather {
    /// Create a new weather record with validation
    pub fn new(day: i64, max_temperature: f64, min_temperature: f64) -> Result<Self> {
        let weather = Self {
            day,
            max_temperature,
            min_temperature,
        };

        weather.validate()?;
        Ok(weather)
    }

    /// Validate record invariants
    pub fn validate(&self) -> Result<()> {
        if self.day <= 0 {
            return Err(Error::data_validation(format!(
                "Invalid day {}: must be a positive integer",
                self.day
            )));
        }

        if self.max_temperature < self.min_temperature {
            return Err(Error::data_validation(format!(
                "Max temperature {} cannot be less than min temperature {}",
                self.max_temperature, self.min_temperature
            )));
        }

        Ok(())
    }

    /// Temperature spread between max and min for the day
    pub fn temperature_spread(&self) -> f64 {
        self.max_temperature - self.min_temperature
    }
}

// =============================================================================
// Country Record
// =============================================================================

/// Demographic data for one country
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Country {
    /// Country name
    pub name: String,

    /// Total population
    pub population: i64,

    /// Surface area in square kilometres
    pub area: f64,
}

impl Country {
    /// Create a new country record with validation
    pub fn new(name: impl Into<String>, population: i64, area: f64) -> Result<Self> {
        let country = Self {
            name: name.into(),
            population,
            area,
        };

        country.validate()?;
        Ok(country)
    }

    /// Validate record invariants
    pub fn validate(&self) -> Result<()> {
        if self.name.trim().is_empty() {
            return Err(Error::data_validation(
                "Country name cannot be empty".to_string(),
            ));
        }

        if self.population < 0 {
            return Err(Error::data_validation(format!(
                "Invalid population {}: cannot be negative",
                self.population
            )));
        }

        if self.area <= 0.0 {
            return Err(Error::data_validation(format!(
                "Invalid area {}: must be greater than zero",
                self.area
            )));
        }

        Ok(())
    }

    /// Population density in people per square kilometre
    pub fn population_density(&self) -> f64 {
        self.population as f64 / self.area
    }
}
