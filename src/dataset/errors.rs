//! Error types for dataset loading

use std::path::PathBuf;
use thiserror::Error;

/// Errors that make a dataset unavailable
#[derive(Error, Debug)]
pub enum DatasetError {
    /// No dataset location configured at any settings layer
    #[error("No data source configured")]
    MissingSource,

    /// Dataset file missing or unreadable
    #[error("Failed to read dataset {path}: {source}")]
    Unreadable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Dataset file is not a valid repository document
    #[error("Failed to parse dataset {path}: {source}")]
    Invalid {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },
}

impl DatasetError {
    /// Location of the dataset that failed, when one was configured
    pub fn path(&self) -> Option<&PathBuf> {
        match self {
            Self::MissingSource => None,
            Self::Unreadable { path, .. } | Self::Invalid { path, .. } => Some(path),
        }
    }
}
