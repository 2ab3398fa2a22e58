//! Integration tests for the full analysis pipeline
//!
//! These tests drive repositories and use cases end to end over fixture
//! files, covering the happy path, mixed numeric locales, and the error
//! paths a malformed or incomplete file produces.

use std::io::Write;
use tempfile::NamedTempFile;

use dataset_analyzer::{
    ClimateAnalysis, CountryAnalysis, CountryRepository, Error, RecordSource, WeatherRepository,
};

/// Helper to create a temporary file with given content
fn create_temp_file(content: &str) -> NamedTempFile {
    let mut temp_file = NamedTempFile::new().unwrap();
    write!(temp_file, "{}", content).unwrap();
    temp_file.flush().unwrap();
    temp_file
}

#[test]
fn test_climate_analysis_end_to_end() {
    let file = create_temp_file(
        "Day,MxT,MnT,AvT\n\
         1,88.0,59.0,74.0\n\
         2,79.0,63.0,71.0\n\
         3,77.0,55.0,66.0\n\
         14,61.0,59.0,60.0\n",
    );

    let analysis = ClimateAnalysis::new(WeatherRepository::new(file.path()));
    let result = analysis.run().unwrap();

    assert_eq!(result.day_with_smallest_spread, 14);
    assert!((result.smallest_spread - 2.0).abs() < f64::EPSILON);
}

#[test]
fn test_country_analysis_end_to_end_with_mixed_locales() {
    let file = create_temp_file(
        "Name;Capital;Accession;Population;Area (km²);GDP (US$ M);HDI;MEPs\n\
         Austria;Vienna;1995;8926000;83855;447718;0.922;19\n\
         Belgium;Brussels;Founder;11.566.041,0;30528;517609;0.931;21\n\
         Malta;Valletta;2004;516100;316;14859;0.895;6\n",
    );

    let analysis = CountryAnalysis::new(CountryRepository::new(file.path()));
    let result = analysis.run().unwrap();

    assert_eq!(result.country_with_highest_density, "Malta");
    assert!((result.highest_density - 516_100.0 / 316.0).abs() < 1e-9);
}

#[test]
fn test_weather_repository_maps_to_domain_records() {
    let file = create_temp_file("Day,MxT,MnT\n1,20.5,10.5\n2,30.0,20.0\n");
    let repository = WeatherRepository::new(file.path());

    let records = repository.read_all().unwrap();
    assert_eq!(records.len(), 2);
    assert_eq!(records[0].day, 1);
    assert!((records[1].temperature_spread() - 10.0).abs() < f64::EPSILON);
}

#[test]
fn test_invalid_domain_values_fail_mapping() {
    // Day 0 parses fine but violates the domain invariant
    let file = create_temp_file("Day,MxT,MnT\n0,20.0,10.0\n");
    let repository = WeatherRepository::new(file.path());

    let result = repository.read_all();
    assert!(matches!(result, Err(Error::DataValidation { .. })));
}

#[test]
fn test_header_only_file_fails_as_empty_data_not_parse_error() {
    let file = create_temp_file("Day,MxT,MnT\n");
    let analysis = ClimateAnalysis::new(WeatherRepository::new(file.path()));

    match analysis.run() {
        Err(Error::AnalysisFailed { source, .. }) => {
            assert!(matches!(*source, Error::EmptyData { .. }));
        }
        other => panic!("expected analysis failure, got {other:?}"),
    }
}

#[test]
fn test_malformed_cell_reports_line_and_column() {
    let file = create_temp_file("Day,MxT,MnT\n1,20.0,10.0\n2,oops,5.0\n");
    let analysis = ClimateAnalysis::new(WeatherRepository::new(file.path()));

    let error = analysis.run().unwrap_err();
    let message = error.to_string();

    assert!(message.starts_with("analysis failed:"));
    assert!(message.contains("error in line 3"));
    assert!(message.contains("MxT"));
    assert!(message.contains("oops"));
}

#[test]
fn test_missing_columns_reported_before_any_line_parses() {
    let file = create_temp_file("Day,Temperature\n1,20.0\n");
    let repository = WeatherRepository::new(file.path());

    match repository.read_all() {
        Err(Error::MissingColumns { missing, .. }) => {
            assert_eq!(missing, vec!["MxT".to_string(), "MnT".to_string()]);
        }
        other => panic!("expected missing columns error, got {other:?}"),
    }
}

#[test]
fn test_missing_file_surfaces_as_analysis_failure() {
    let analysis = CountryAnalysis::new(CountryRepository::new("/nonexistent/countries.csv"));

    let error = analysis.run().unwrap_err();
    assert!(error.to_string().contains("analysis failed:"));
    assert!(error.to_string().contains("file access error"));
}

#[test]
fn test_shipped_sample_datasets_analyze() {
    let climate = ClimateAnalysis::new(WeatherRepository::new("data/weather.csv"));
    let demographics = CountryAnalysis::new(CountryRepository::new("data/countries.csv"));

    let climate_result = climate.run().unwrap();
    let country_result = demographics.run().unwrap();

    assert!(climate_result.day_with_smallest_spread > 0);
    assert!(country_result.highest_density > 0.0);
}
