// src/error.rs
use std::path::PathBuf;

use thiserror::Error;

/// Everything that can go wrong while loading reference data or decoding
/// samples. Resolution itself never fails: "no match" is an empty result.
#[derive(Error, Debug)]
pub enum Error {
    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("bad CSV in {}: {source}", path.display())]
    Csv {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    #[error("bad JSON in {}: {source}", path.display())]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("could not decode image: {0}")]
    Image(#[from] image::ImageError),

    #[error("{}:{line}: {reason}", path.display())]
    Malformed {
        path: PathBuf,
        line: u64,
        reason: String,
    },

    #[error("invalid hex colour '{0}'")]
    InvalidHex(String),

    #[error("palette has no entries")]
    EmptyPalette,
}

pub type Result<T> = std::result::Result<T, Error>;
