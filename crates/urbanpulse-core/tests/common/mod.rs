#![allow(dead_code)]

use std::path::PathBuf;
use urbanpulse_core::{CityRecord, Dataset};

pub fn fixture_path(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name)
}

pub fn city(name: &str, country: &str, population: u64) -> CityRecord {
    CityRecord {
        city: name.to_owned(),
        country: country.to_owned(),
        lat: 0.0,
        lon: 0.0,
        population,
        timezone: None,
    }
}

pub fn city_at(name: &str, lat: f64, lon: f64, timezone: Option<&str>) -> CityRecord {
    CityRecord {
        city: name.to_owned(),
        country: "Testland".to_owned(),
        lat,
        lon,
        population: 1_000_000,
        timezone: timezone.map(str::to_owned),
    }
}

/// Small dataset spanning a few countries and population bands.
pub fn sample_dataset() -> Dataset {
    Dataset::from_records(vec![
        city("Tokyo", "Japan", 37_400_068),
        city("Delhi", "India", 28_514_000),
        city("Osaka", "Japan", 19_281_000),
        city("Pune", "India", 6_276_000),
        city("Kobe", "Japan", 1_522_000),
        city("Nara", "Japan", 360_000),
        city("Shimla", "India", 169_578),
        city("Aomori", "Japan", 150_000),
        city("Leh", "India", 30_870),
    ])
}
