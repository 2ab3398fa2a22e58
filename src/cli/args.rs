//! Command-line argument definitions for the dataset analyzer
//!
//! This module defines the CLI interface using the clap derive API.

use clap::{Parser, ValueEnum};
use std::path::PathBuf;

use crate::constants::{DEFAULT_COUNTRIES_FILE, DEFAULT_WEATHER_FILE};

/// CLI arguments for the dataset analyzer
///
/// Analyzes a daily weather dataset and a per-country demographic dataset,
/// reporting the day with the smallest temperature spread and the country
/// with the highest population density.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "dataset-analyzer",
    version,
    about = "Analyze weather and demographic CSV datasets with locale-aware number parsing",
    long_about = "Reads a comma-delimited weather dataset and a semicolon-delimited country \
                  dataset, normalizing European (\"1.234,56\"), US (\"1,234.56\") and plain \
                  decimal numeric cells per cell, then reports the day with the smallest \
                  temperature spread and the country with the highest population density."
)]
pub struct Args {
    /// Path to the weather dataset
    ///
    /// Comma-delimited; the header must contain at least Day, MxT and MnT.
    #[arg(
        short = 'w',
        long = "weather",
        value_name = "FILE",
        default_value = DEFAULT_WEATHER_FILE,
        help = "Path to the comma-delimited weather CSV file"
    )]
    pub weather_file: PathBuf,

    /// Path to the country dataset
    ///
    /// Semicolon-delimited; the header must contain at least Name and Capital.
    #[arg(
        short = 'c',
        long = "countries",
        value_name = "FILE",
        default_value = DEFAULT_COUNTRIES_FILE,
        help = "Path to the semicolon-delimited country CSV file"
    )]
    pub countries_file: PathBuf,

    /// Output format for machine-readable results
    #[arg(
        long = "output-format",
        value_enum,
        default_value = "human",
        help = "Output format for results"
    )]
    pub output_format: OutputFormat,

    /// Logging verbosity level
    #[arg(
        short = 'v',
        long = "verbose",
        action = clap::ArgAction::Count,
        help = "Increase logging verbosity (-v: info, -vv: debug, -vvv: trace)"
    )]
    pub verbose: u8,

    /// Suppress output (quiet mode)
    ///
    /// Only show errors. Overrides verbose settings.
    #[arg(
        short = 'q',
        long = "quiet",
        help = "Suppress output except errors",
        conflicts_with = "verbose"
    )]
    pub quiet: bool,
}

/// Output format options for analysis results
#[derive(Debug, Clone, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable output
    Human,
    /// JSON format for scripting
    Json,
}

impl Args {
    /// Determine the appropriate log level based on verbosity flags
    pub fn log_level(&self) -> &'static str {
        if self.quiet {
            "error"
        } else {
            match self.verbose {
                0 => "warn",
                1 => "info",
                2 => "debug",
                _ => "trace",
            }
        }
    }
}
