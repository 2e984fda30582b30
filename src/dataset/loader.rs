//! YAML dataset loader
//!
//! A dataset document has a `repository` list of item records and an optional
//! `sets` mapping from subset name to item names:
//!
//! ```yaml
//! repository:
//!   - name: tool
//!     title: Tool
//!     type: git
//! sets:
//!   featured: [tool]
//! ```

use serde::Deserialize;
use std::collections::BTreeMap;
use std::path::Path;

use tracing::debug;

use crate::dataset::{DatasetError, Item, Registry};

/// Document structure as written by the dataset author
#[derive(Debug, Deserialize)]
struct RepositoryDocument {
    #[serde(default)]
    repository: Vec<Item>,
    #[serde(default)]
    sets: Option<BTreeMap<String, Option<Vec<String>>>>,
}

/// Read and parse the dataset at `source`.
///
/// Every call re-reads the file; nothing is cached between calls.
pub fn load_registry(source: Option<&Path>) -> Result<Registry, DatasetError> {
    let path = source.ok_or(DatasetError::MissingSource)?;

    let content = std::fs::read_to_string(path).map_err(|e| DatasetError::Unreadable {
        path: path.to_path_buf(),
        source: e,
    })?;

    let registry = parse_registry(&content).map_err(|e| DatasetError::Invalid {
        path: path.to_path_buf(),
        source: e,
    })?;

    debug!(
        "Loaded dataset {} with {} items, sets: [{}]",
        path.display(),
        registry.items.len(),
        registry.set_names().join(", ")
    );
    Ok(registry)
}

/// Parse dataset text and resolve subsets against the flat collection
pub(crate) fn parse_registry(content: &str) -> Result<Registry, serde_yaml::Error> {
    let document: RepositoryDocument = serde_yaml::from_str(content)?;
    Ok(document.into_registry())
}

impl RepositoryDocument {
    fn into_registry(self) -> Registry {
        let items = self.repository;

        // Names without a matching item are dropped; order follows the declaration
        let sets = self.sets.map(|sets| {
            sets.into_iter()
                .map(|(set, names)| {
                    let resolved: Vec<Item> = names
                        .unwrap_or_default()
                        .iter()
                        .filter_map(|name| items.iter().find(|item| &item.name == name))
                        .cloned()
                        .collect();
                    (set, resolved)
                })
                .collect()
        });

        Registry { items, sets }
    }
}
