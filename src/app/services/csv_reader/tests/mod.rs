//! Test utilities for the CSV reader modules
//!
//! Provides the fixture-file helper and sample dataset content shared
//! across the reader test modules.

use std::io::Write;
use tempfile::NamedTempFile;

mod record_parsers_tests;

/// Helper to create a temporary file with given content
pub fn create_temp_file(content: &str) -> NamedTempFile {
    let mut temp_file = NamedTempFile::new().unwrap();
    write!(temp_file, "{}", content).unwrap();
    temp_file.flush().unwrap();
    temp_file
}

/// Helper to create weather CSV content with the full column set
pub fn create_test_weather_csv() -> String {
    "Day,MxT,MnT,AvT,AvDP,1HrP TPcpn,PDir,AvSp,Dir,MxS,SkyC,MxR,Mn,R,AvSLP\n\
     1,88.0,59.0,74.0,53.8,0,280,9.6,270,17,1.6,93,23,0,1004.5\n\
     2,79.0,63.0,71.0,46.5,0,330,8.7,340,23,3.3,70,28,0,1004.5\n\
     3,77.0,55.0,66.0,39.6,0,350,5.0,350,9,2.8,59,24,0,1016.8\n"
        .to_string()
}

/// Helper to create country CSV content mixing numeric locales
pub fn create_test_countries_csv() -> String {
    "Name;Capital;Accession;Population;Area (km²);GDP (US$ M);HDI;MEPs\n\
     Austria;Vienna;1995;8926000;83855;447718;0.922;19\n\
     Belgium;Brussels;Founder;11.566.041,0;30528;517609;0.931;21\n\
     Malta;Valletta;2004;516100;316;14859;0.895;6\n"
        .to_string()
}
