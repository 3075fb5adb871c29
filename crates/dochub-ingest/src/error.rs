#![deny(unsafe_code)]

use std::path::PathBuf;

use dochub_model::ModelError;

#[derive(Debug, thiserror::Error)]
pub enum IngestError {
    #[error("failed to read file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse TOML roster: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("failed to parse CSV listing: {0}")]
    Csv(#[from] csv::Error),

    #[error(transparent)]
    Model(#[from] ModelError),

    #[error("listing row {row}: invalid date {value:?} (expected YYYY-MM-DD)")]
    InvalidDate { row: usize, value: String },

    #[error("listing row {row}: {message}")]
    InvalidOrigin { row: usize, message: String },
}

impl IngestError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}
