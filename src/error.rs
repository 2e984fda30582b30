//! Error handling for the repository listing renderer.
//!
//! Every layer owns a focused error enum; this module folds them into the
//! crate-level [`Error`] so marker processing can use `?` across layers.
//!
//! # Examples
//!
//! ```
//! use repository_listing::error::{Error, Result};
//!
//! fn lookup(found: bool) -> Result<()> {
//!     if !found {
//!         return Err(Error::item_not_found("missing-tool"));
//!     }
//!     Ok(())
//! }
//!
//! assert!(lookup(false).is_err());
//! ```

use thiserror::Error;

use crate::config::ConfigError;
use crate::dataset::DatasetError;
use crate::document::DocumentError;
use crate::rendering::RenderError;

/// Result type for repository listing operations
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for repository listing operations
#[derive(Debug, Error)]
pub enum Error {
    /// Dataset could not be loaded
    #[error(transparent)]
    Dataset(#[from] DatasetError),

    /// Template selection or evaluation failed
    #[error(transparent)]
    Render(#[from] RenderError),

    /// Settings could not be parsed or applied
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// Document could not be mutated or serialized
    #[error(transparent)]
    Document(#[from] DocumentError),

    /// Single-item marker references an unknown item
    #[error("Item not found: {0}")]
    ItemNotFound(String),

    /// Single-item marker names no item at any settings layer
    #[error("No item configured for single-item marker")]
    MissingItem,
}

impl Error {
    /// Create a new item not found error
    pub fn item_not_found<S: Into<String>>(name: S) -> Self {
        Self::ItemNotFound(name.into())
    }
}
