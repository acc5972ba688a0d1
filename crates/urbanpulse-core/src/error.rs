// crates/urbanpulse-core/src/error.rs
use thiserror::Error;

/// Everything that can go wrong while turning a raw source into a [`Dataset`].
///
/// The dashboard treats all of these the same way ("data unavailable"), but
/// the variants are kept apart so logs and callers can tell a dead network
/// from a broken file.
///
/// [`Dataset`]: crate::model::Dataset
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to fetch dataset: {0}")]
    Fetch(String),

    #[error("I/O error while reading dataset: {0}")]
    Io(#[from] std::io::Error),

    #[error("malformed CSV: {0}")]
    Csv(#[from] csv::Error),

    #[error("required column `{0}` is missing from the header")]
    MissingColumn(&'static str),

    #[error("snapshot could not be (de)serialized: {0}")]
    Snapshot(#[from] bincode::Error),

    #[error("unsupported source: {0}")]
    UnsupportedSource(String),
}

/// Crate-level error.
#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Load(#[from] LoadError),

    #[error("invalid input: {0}")]
    InvalidInput(String),
}

pub type Result<T> = std::result::Result<T, Error>;
