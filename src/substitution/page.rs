//! Content objects exchanged with the host pipeline

use std::collections::BTreeMap;

/// Kind of content object handed over by the host
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum ContentKind {
    Article,
    #[default]
    Page,
    /// Copied verbatim by the host; never processed
    Static,
}

/// Page metadata read for per-page overrides and extended with asset references
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PageMetadata {
    /// Raw metadata values (`brepository`, `brepository_source`, `title`, ...)
    pub values: BTreeMap<String, String>,
    /// Markup for stylesheets the host emits into the page header
    pub styles: Vec<String>,
    /// Markup for scripts the host emits into the page header
    pub scripts: Vec<String>,
}

impl PageMetadata {
    /// Set a raw metadata value
    pub fn insert<K: Into<String>, V: Into<String>>(&mut self, key: K, value: V) {
        self.values.insert(key.into(), value.into());
    }

    /// Get a raw metadata value
    pub fn get(&self, key: &str) -> Option<&str> {
        self.values.get(key).map(String::as_str)
    }
}

/// One generated page, mutated in place by the listing plugin
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Page {
    pub kind: ContentKind,
    pub title: Option<String>,
    /// Rendered HTML body
    pub content: String,
    pub metadata: PageMetadata,
    /// Listing exposed to the page template when the page enables it
    pub listing: Option<String>,
}

impl Page {
    /// Create a regular page with the given body
    pub fn new<S: Into<String>>(content: S) -> Self {
        Self {
            content: content.into(),
            ..Default::default()
        }
    }

    /// Builder-style metadata setter
    pub fn with_metadata<K: Into<String>, V: Into<String>>(mut self, key: K, value: V) -> Self {
        self.metadata.insert(key, value);
        self
    }

    /// Title used in log lines
    pub fn display_title(&self) -> &str {
        self.title
            .as_deref()
            .or_else(|| self.metadata.get("title"))
            .unwrap_or("untitled")
    }
}
