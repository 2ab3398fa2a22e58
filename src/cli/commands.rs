//! Command execution for the dataset analyzer CLI
//!
//! Wires logging, repositories, and use cases together, then renders the
//! two analysis reports in the requested output format.

use tracing::{debug, info};

use crate::app::repositories::{CountryRepository, WeatherRepository};
use crate::app::services::analysis::{
    ClimateAnalysis, ClimateAnalysisResult, CountryAnalysis, CountryAnalysisResult,
};
use crate::cli::args::{Args, OutputFormat};
use crate::Result;

/// Run both analyses and print their reports.
///
/// The first failing analysis aborts the run; its error propagates to the
/// caller for printing and a non-zero exit.
pub fn run(args: Args) -> Result<()> {
    setup_logging(&args);

    info!("Starting dataset analyzer");
    debug!("Command line arguments: {:?}", args);

    let climate = ClimateAnalysis::new(WeatherRepository::new(&args.weather_file));
    let demographics = CountryAnalysis::new(CountryRepository::new(&args.countries_file));

    let climate_result = climate.run()?;
    let country_result = demographics.run()?;

    match args.output_format {
        OutputFormat::Human => print_human_report(&climate_result, &country_result),
        OutputFormat::Json => print_json_report(&climate_result, &country_result),
    }

    Ok(())
}

/// Set up tracing output on stderr, filtered by the CLI verbosity flags
fn setup_logging(args: &Args) {
    use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("dataset_analyzer={}", args.log_level())));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_target(false)
                .with_level(true)
                .with_writer(std::io::stderr)
                .compact(),
        )
        .init();
}

/// Print both reports in the console format
fn print_human_report(climate: &ClimateAnalysisResult, country: &CountryAnalysisResult) {
    println!("===== Weather Analysis =====");
    println!(
        "Day with smallest temperature spread: Day {}",
        climate.day_with_smallest_spread
    );
    println!(
        "Smallest temperature spread: {:.2}°C",
        climate.smallest_spread
    );
    println!();

    println!("===== Country Analysis =====");
    println!(
        "Country with highest population density: {}",
        country.country_with_highest_density
    );
    println!(
        "Highest population density: {:.2} inhabitants per km²",
        country.highest_density
    );
}

/// Print both reports as one pretty JSON document
fn print_json_report(climate: &ClimateAnalysisResult, country: &CountryAnalysisResult) {
    let report = serde_json::json!({
        "climate": climate,
        "countries": country,
    });

    println!("{}", serde_json::to_string_pretty(&report).unwrap());
}
