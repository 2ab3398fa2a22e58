//! Demographic aggregation over country records

use crate::app::models::Country;
use crate::{Error, Result};

/// Find the country with the highest population density.
///
/// Single pass over the input in order; ties resolve to the first
/// occurrence. The input is never reordered.
pub fn find_highest_population_density(countries: &[Country]) -> Result<&Country> {
    let mut iter = countries.iter();
    let mut best = iter
        .next()
        .ok_or_else(|| Error::empty_data("country records cannot be empty"))?;

    for country in iter {
        if country.population_density() > best.population_density() {
            best = country;
        }
    }

    Ok(best)
}
