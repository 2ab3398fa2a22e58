//! Tests for per-format record parsers

use super::create_temp_file;
use crate::app::services::csv_reader::{country_reader, weather_reader};

#[test]
fn test_weather_row_with_all_columns() {
    let content = "Day,MxT,MnT,AvT,AvDP,1HrP TPcpn,PDir,AvSp,Dir,MxS,SkyC,MxR,Mn,R,AvSLP\n\
                   9,86.0,32.0,59.0,54.9,0,50,9.0,60,13,9.5,95,40,0,1015.9\n";
    let file = create_temp_file(content);
    let records = weather_reader(file.path()).read_all_records().unwrap();

    let record = &records[0];
    assert_eq!(record.day, 9);
    assert!((record.max_temperature - 86.0).abs() < f64::EPSILON);
    assert!((record.min_temperature - 32.0).abs() < f64::EPSILON);
    assert!((record.avg_dew_point - 54.9).abs() < f64::EPSILON);
    assert_eq!(record.prevailing_wind_dir, 50);
    assert_eq!(record.max_wind_speed, 13);
    assert!((record.avg_sea_level_pressure - 1015.9).abs() < f64::EPSILON);
}

#[test]
fn test_weather_row_with_only_required_columns() {
    let content = "Day,MxT,MnT\n4,77.0,59.0\n";
    let file = create_temp_file(content);
    let records = weather_reader(file.path()).read_all_records().unwrap();

    let record = &records[0];
    assert_eq!(record.day, 4);

    // Absent optional columns default to zero
    assert_eq!(record.avg_temperature, 0.0);
    assert_eq!(record.prevailing_wind_dir, 0);
    assert_eq!(record.rainfall, 0.0);
}

#[test]
fn test_country_row_with_all_columns() {
    let content = "Name;Capital;Accession;Population;Area (km²);GDP (US$ M);HDI;MEPs\n\
                   Belgium;Brussels;Founder;11.566.041,0;30528;517.609;0,931;21\n";
    let file = create_temp_file(content);
    let records = country_reader(file.path()).read_all_records().unwrap();

    let record = &records[0];
    assert_eq!(record.name, "Belgium");
    assert_eq!(record.capital, "Brussels");
    assert_eq!(record.accession, "Founder");
    assert_eq!(record.population, 11_566_041);
    assert!((record.area - 30528.0).abs() < f64::EPSILON);
    assert_eq!(record.gdp, "517.609");
    assert_eq!(record.hdi, "0,931");
    assert_eq!(record.meps, "21");
}

#[test]
fn test_country_row_with_only_required_columns() {
    let content = "Name;Capital\nMalta;Valletta\n";
    let file = create_temp_file(content);
    let records = country_reader(file.path()).read_all_records().unwrap();

    let record = &records[0];
    assert_eq!(record.name, "Malta");
    assert_eq!(record.capital, "Valletta");
    assert_eq!(record.population, 0);
    assert_eq!(record.area, 0.0);
    assert_eq!(record.accession, "");
}

#[test]
fn test_country_population_accepts_each_locale() {
    let content = "Name;Capital;Population;Area (km²)\n\
                   Plain;A;8926000;100\n\
                   European;B;8.926.000,0;100\n\
                   Decimal;C;8926000,4;100\n";
    let file = create_temp_file(content);
    let records = country_reader(file.path()).read_all_records().unwrap();

    assert_eq!(records[0].population, 8_926_000);
    assert_eq!(records[1].population, 8_926_000);
    assert_eq!(records[2].population, 8_926_000);
}
