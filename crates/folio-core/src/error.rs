//! Library error types

use std::path::PathBuf;

use thiserror::Error;

/// Folio error type
///
/// Only construction and configuration can fail. Runtime tracking never
/// returns an error; every edge case there is a fallback branch.
#[derive(Debug, Error)]
pub enum FolioError {
    /// A hero needs at least one line
    #[error("hero must contain at least one line")]
    EmptyLines,

    /// Line indices must match their position
    #[error("line at position {position} has index {index}")]
    NonContiguousIndex { position: usize, index: usize },

    /// Observer thresholds must lie in [0, 1]
    #[error("invalid observer threshold: {0}")]
    InvalidThreshold(f64),

    /// Band margins must leave a non-empty band
    #[error("invalid band margins: top {top}, bottom {bottom}")]
    InvalidBand { top: f64, bottom: f64 },

    /// Config file could not be read
    #[error("failed to read config {path}: {source}")]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Config file is not valid TOML for the hero schema
    #[error("failed to parse config {path}: {source}")]
    ConfigParse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

pub type Result<T> = std::result::Result<T, FolioError>;
