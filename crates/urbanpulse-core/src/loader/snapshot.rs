// crates/urbanpulse-core/src/loader/snapshot.rs

//! Binary snapshot of a normalized dataset.
//!
//! Parsing the upstream CSV takes a network round trip and a full scan; the
//! snapshot lets a restarted process skip both. The header records the
//! settings the dataset was built with so a snapshot made with a different
//! threshold is never mistaken for the current one.

use super::{DataSource, LoaderConfig};
use crate::error::LoadError;
use crate::model::Dataset;
use serde::{Deserialize, Serialize};
use std::fs::{self, File};
use std::io::{BufReader, BufWriter, Read, Write};
use std::path::Path;
use std::time::{Duration, SystemTime};

#[cfg(feature = "compact")]
use flate2::{read::GzDecoder, write::GzEncoder, Compression};

#[derive(Serialize, Deserialize)]
struct SnapshotHeader {
    source: String,
    min_population: u64,
    max_records: usize,
}

impl SnapshotHeader {
    fn for_config(config: &LoaderConfig) -> Self {
        Self {
            source: config.source.to_string(),
            min_population: config.min_population,
            max_records: config.max_records,
        }
    }

    fn matches(&self, config: &LoaderConfig) -> bool {
        self.source == config.source.to_string()
            && self.min_population == config.min_population
            && self.max_records == config.max_records
    }
}

#[derive(Serialize, Deserialize)]
struct Snapshot {
    header: SnapshotHeader,
    dataset: Dataset,
}

/// A snapshot is fresh when it exists and
/// - for file sources: is not older than the source file,
/// - for URL sources: is younger than `max_age` (if any).
pub fn is_fresh(source: &DataSource, snapshot: &Path, max_age: Option<Duration>) -> bool {
    let snapshot_time = match fs::metadata(snapshot).and_then(|m| m.modified()) {
        Ok(t) => t,
        Err(_) => return false,
    };

    match source {
        DataSource::Path(path) => match fs::metadata(path).and_then(|m| m.modified()) {
            Ok(source_time) => source_time <= snapshot_time,
            // Source gone: the snapshot is all we have.
            Err(_) => true,
        },
        DataSource::Url(_) => match max_age {
            Some(max_age) => SystemTime::now()
                .duration_since(snapshot_time)
                .map(|age| age <= max_age)
                .unwrap_or(true),
            None => true,
        },
    }
}

/// Reads a snapshot. `Ok(None)` means it was built for other loader settings.
pub fn read(path: &Path, config: &LoaderConfig) -> Result<Option<Dataset>, LoadError> {
    let file = File::open(path)?;
    let reader = decoder(BufReader::new(file));
    let snapshot: Snapshot = bincode::deserialize_from(reader)?;
    if snapshot.header.matches(config) {
        Ok(Some(snapshot.dataset))
    } else {
        Ok(None)
    }
}

/// Writes the snapshot through a temp file so readers never see half of it.
pub fn write(path: &Path, config: &LoaderConfig, dataset: &Dataset) -> Result<(), LoadError> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }
    let tmp = path.with_extension("tmp");
    {
        let file = File::create(&tmp)?;
        let mut encoder = encoder(BufWriter::new(file));
        let snapshot = SnapshotRef {
            header: SnapshotHeader::for_config(config),
            dataset,
        };
        bincode::serialize_into(&mut encoder, &snapshot)?;
        encoder.flush()?;
    }
    fs::rename(&tmp, path)?;
    Ok(())
}

/// Borrowing twin of [`Snapshot`] so writing does not clone the dataset.
#[derive(Serialize)]
struct SnapshotRef<'a> {
    header: SnapshotHeader,
    dataset: &'a Dataset,
}

#[cfg(feature = "compact")]
fn decoder<R: Read + 'static>(reader: R) -> Box<dyn Read> {
    Box::new(GzDecoder::new(reader))
}

#[cfg(not(feature = "compact"))]
fn decoder<R: Read + 'static>(reader: R) -> Box<dyn Read> {
    Box::new(reader)
}

#[cfg(feature = "compact")]
fn encoder<W: Write + 'static>(writer: W) -> Box<dyn Write> {
    Box::new(GzEncoder::new(writer, Compression::default()))
}

#[cfg(not(feature = "compact"))]
fn encoder<W: Write + 'static>(writer: W) -> Box<dyn Write> {
    Box::new(writer)
}
