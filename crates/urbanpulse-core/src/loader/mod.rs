// crates/urbanpulse-core/src/loader/mod.rs

//! # Data Loader
//!
//! Handles the physical layer (HTTP, files, decompression), normalizes the
//! raw city table into a [`Dataset`] and memoizes the result.
//!
//! Normalization, in order:
//! 1. Map the source columns `name, country_name, latitude, longitude,
//!    population, timezone` onto `city, country, lat, lon, population,
//!    timezone`.
//! 2. Coerce the numeric columns. Anything unparsable is *missing*, never 0,
//!    and so is a population outside `0..=MAX_POPULATION`.
//! 3. Drop records missing `lat`, `lon`, `population`, `city` or `country`.
//! 4. Keep `population > min_population`.
//! 5. Stable sort by population, descending.
//! 6. Truncate to `max_records`.

use crate::error::LoadError;
use crate::model::{CityRecord, Dataset};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::io::Read;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

pub mod cache;
mod common_io;
mod snapshot;

pub use cache::{global, CacheKey, CachePolicy, DatasetCache};

pub const DATA_REPO_URL: &str =
    "https://raw.githubusercontent.com/dr5hn/countries-states-cities-database/master/csv/cities.csv";

/// Records at or below this population are noise for the dashboard.
pub const DEFAULT_MIN_POPULATION: u64 = 10_000;

/// Upper bound for a plausible city population. Larger values are treated as
/// corrupt cells rather than stored.
pub const MAX_POPULATION: u64 = 10_000_000_000;

/// Rendering tens of thousands of columns is too heavy; the top 5000 cover
/// every city that matters on a world map.
pub const DEFAULT_MAX_RECORDS: usize = 5_000;

// -----------------------------------------------------------------------------
// CONFIGURATION
// -----------------------------------------------------------------------------

/// Where the raw table lives.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DataSource {
    Url(String),
    Path(PathBuf),
}

impl DataSource {
    /// `http://` and `https://` strings become URLs, everything else a path.
    pub fn parse(s: &str) -> Self {
        let trimmed = s.trim();
        if trimmed.starts_with("http://") || trimmed.starts_with("https://") {
            DataSource::Url(trimmed.to_owned())
        } else {
            DataSource::Path(PathBuf::from(trimmed))
        }
    }

    fn is_gzipped(&self) -> bool {
        match self {
            DataSource::Url(url) => common_io::has_gz_suffix(url),
            DataSource::Path(path) => common_io::has_gz_suffix(&path.to_string_lossy()),
        }
    }
}

impl Default for DataSource {
    fn default() -> Self {
        DataSource::Url(DATA_REPO_URL.to_owned())
    }
}

impl fmt::Display for DataSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DataSource::Url(url) => f.write_str(url),
            DataSource::Path(path) => write!(f, "{}", path.display()),
        }
    }
}

#[derive(Debug, Clone)]
pub struct LoaderConfig {
    pub source: DataSource,
    /// Exclusive lower bound on population.
    pub min_population: u64,
    pub max_records: usize,
    /// Optional bincode snapshot of the normalized dataset.
    pub snapshot: Option<PathBuf>,
    /// For URL sources: how old a snapshot may get before it is rebuilt.
    /// `None` trusts the snapshot forever (the upstream file is static).
    pub snapshot_max_age: Option<Duration>,
}

impl Default for LoaderConfig {
    fn default() -> Self {
        Self {
            source: DataSource::default(),
            min_population: DEFAULT_MIN_POPULATION,
            max_records: DEFAULT_MAX_RECORDS,
            snapshot: None,
            snapshot_max_age: None,
        }
    }
}

impl LoaderConfig {
    pub fn from_source(source: DataSource) -> Self {
        Self {
            source,
            ..Self::default()
        }
    }
}

/// Result of [`load_or_empty`]: always a dataset, plus the reason it is
/// empty when loading failed.
#[derive(Debug)]
pub struct LoadOutcome {
    pub dataset: Arc<Dataset>,
    pub error: Option<LoadError>,
}

impl LoadOutcome {
    /// `false` means the caller should present "data unavailable".
    pub fn is_available(&self) -> bool {
        self.error.is_none()
    }
}

// -----------------------------------------------------------------------------
// ENTRY POINTS
// -----------------------------------------------------------------------------

/// **Boundary Loader:** loads through the process-wide cache and never fails.
///
/// On error the dataset is empty and `error` says why. Failures are not
/// cached and not retried here; the next call tries again.
pub fn load_or_empty(config: &LoaderConfig) -> LoadOutcome {
    cache::global().load_or_empty(config)
}

/// **Uncached Loader:** snapshot check, fetch, normalize, snapshot write.
pub fn load(config: &LoaderConfig) -> Result<Dataset, LoadError> {
    // 1. Snapshot
    if let Some(path) = &config.snapshot {
        if snapshot::is_fresh(&config.source, path, config.snapshot_max_age) {
            match snapshot::read(path, config) {
                Ok(Some(dataset)) => {
                    tracing::debug!(snapshot = %path.display(), "reusing dataset snapshot");
                    return Ok(dataset);
                }
                Ok(None) => {
                    tracing::debug!(snapshot = %path.display(), "snapshot built for other settings")
                }
                Err(e) => tracing::warn!(snapshot = %path.display(), error = %e, "unreadable snapshot"),
            }
        }
    }

    // 2. Fetch + Normalize
    let reader = common_io::open_stream(&config.source)?;
    let dataset = normalize(reader, config.min_population, config.max_records)?;
    tracing::info!(
        source = %config.source,
        records = dataset.len(),
        "dataset loaded"
    );

    // 3. Snapshot (best-effort)
    if let Some(path) = &config.snapshot {
        if let Err(e) = snapshot::write(path, config, &dataset) {
            tracing::warn!(snapshot = %path.display(), error = %e, "could not write snapshot");
        }
    }

    Ok(dataset)
}

// -----------------------------------------------------------------------------
// NORMALIZATION
// -----------------------------------------------------------------------------

/// Source header names, case-sensitive.
const COL_CITY: &str = "name";
const COL_COUNTRY: &str = "country_name";
const COL_LAT: &str = "latitude";
const COL_LON: &str = "longitude";
const COL_POPULATION: &str = "population";
const COL_TIMEZONE: &str = "timezone";

struct Columns {
    city: usize,
    country: usize,
    lat: usize,
    lon: usize,
    population: usize,
    timezone: usize,
}

impl Columns {
    fn locate(headers: &csv::StringRecord) -> Result<Self, LoadError> {
        let find = |name: &'static str| {
            headers
                .iter()
                .position(|h| h == name)
                .ok_or(LoadError::MissingColumn(name))
        };
        Ok(Self {
            city: find(COL_CITY)?,
            country: find(COL_COUNTRY)?,
            lat: find(COL_LAT)?,
            lon: find(COL_LON)?,
            population: find(COL_POPULATION)?,
            timezone: find(COL_TIMEZONE)?,
        })
    }
}

/// Parses and normalizes a raw CSV stream. See the module docs for the steps.
pub fn normalize<R: Read>(
    reader: R,
    min_population: u64,
    max_records: usize,
) -> Result<Dataset, LoadError> {
    let mut csv = csv::ReaderBuilder::new()
        .has_headers(true)
        .from_reader(reader);
    let columns = Columns::locate(csv.headers()?)?;

    let mut kept = Vec::new();
    let mut invalid = 0usize;
    let mut small = 0usize;
    for row in csv.records() {
        let row = row?;
        match parse_row(&row, &columns) {
            Some(record) if record.population > min_population => kept.push(record),
            Some(_) => small += 1,
            None => invalid += 1,
        }
    }
    tracing::debug!(kept = kept.len(), invalid, small, "normalized source rows");

    let mut dataset = Dataset::from_records(kept);
    dataset.truncate(max_records);
    Ok(dataset)
}

fn parse_row(row: &csv::StringRecord, columns: &Columns) -> Option<CityRecord> {
    let city = parse_text(row.get(columns.city))?;
    let country = parse_text(row.get(columns.country))?;
    let lat = parse_number(row.get(columns.lat)).filter(|v| (-90.0..=90.0).contains(v))?;
    let lon = parse_number(row.get(columns.lon)).filter(|v| (-180.0..=180.0).contains(v))?;
    // Truncation mirrors the integer population column of the source.
    let population = parse_number(row.get(columns.population))
        .filter(|v| (0.0..=MAX_POPULATION as f64).contains(v))? as u64;
    let timezone = parse_text(row.get(columns.timezone));

    Some(CityRecord {
        city,
        country,
        lat,
        lon,
        population,
        timezone,
    })
}

fn parse_text(cell: Option<&str>) -> Option<String> {
    cell.map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_owned)
}

/// Float coercion: empty, unparsable and non-finite cells are all missing.
fn parse_number(cell: Option<&str>) -> Option<f64> {
    cell.map(str::trim)
        .filter(|s| !s.is_empty())
        .and_then(|s| s.parse::<f64>().ok())
        .filter(|v| v.is_finite())
}
