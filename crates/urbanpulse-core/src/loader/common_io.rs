// crates/urbanpulse-core/src/loader/common_io.rs
use super::DataSource;
use crate::error::LoadError;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

#[cfg(feature = "compact")]
use flate2::read::GzDecoder;

/// Opens a source and hands back a plain byte stream.
///
/// Gzip is detected from the `.gz` suffix of the path or URL, so the caller
/// never cares about compression.
pub fn open_stream(source: &DataSource) -> Result<Box<dyn Read>, LoadError> {
    let reader: Box<dyn Read> = match source {
        DataSource::Path(path) => {
            let file = File::open(path).map_err(|e| {
                LoadError::Io(std::io::Error::new(
                    e.kind(),
                    format!("dataset not found at {}: {e}", path.display()),
                ))
            })?;
            Box::new(BufReader::new(file))
        }
        DataSource::Url(url) => fetch(url)?,
    };

    if source.is_gzipped() {
        return decompress(reader);
    }
    Ok(reader)
}

#[cfg(feature = "fetch")]
fn fetch(url: &str) -> Result<Box<dyn Read>, LoadError> {
    tracing::debug!(url, "fetching dataset");
    let response = reqwest::blocking::get(url)
        .and_then(|r| r.error_for_status())
        .map_err(|e| LoadError::Fetch(e.to_string()))?;
    Ok(Box::new(response))
}

#[cfg(not(feature = "fetch"))]
fn fetch(url: &str) -> Result<Box<dyn Read>, LoadError> {
    Err(LoadError::UnsupportedSource(format!(
        "{url}: http sources need the 'fetch' feature"
    )))
}

#[cfg(feature = "compact")]
fn decompress(reader: Box<dyn Read>) -> Result<Box<dyn Read>, LoadError> {
    Ok(Box::new(GzDecoder::new(reader)))
}

#[cfg(not(feature = "compact"))]
fn decompress(_reader: Box<dyn Read>) -> Result<Box<dyn Read>, LoadError> {
    Err(LoadError::UnsupportedSource(
        "gzip sources need the 'compact' feature".into(),
    ))
}

pub fn has_gz_suffix(name: &str) -> bool {
    Path::new(name)
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("gz"))
}
