//! Layered listing settings.
//!
//! Settings resolve in three layers: process-wide [`ListingSettings`] built once
//! at startup, a per-page layer read from page metadata, and a per-marker layer
//! read from marker attributes. Each narrower layer is a [`SettingsOverrides`]
//! applied to a clone of the enclosing settings, so the shared defaults are
//! never mutated.

use std::collections::BTreeMap;
use std::path::PathBuf;
use std::str::FromStr;

use tracing::warn;

use crate::config::defaults::{
    DEFAULT_HEADER, DEFAULT_PANEL_COLOR, ITEM_CARD_TEMPLATE, LIST_CONTAINER_TEMPLATE,
    LIST_ITEM_TEMPLATE, PANEL_CONTAINER_TEMPLATE, PANEL_ITEM_TEMPLATE, default_type_icons,
};
use crate::config::{ConfigError, Mode};

/// Prefix of marker attributes carrying per-marker overrides
pub const MARKER_ATTRIBUTE_PREFIX: &str = "data-";

/// Page metadata key enabling the page-level listing variable
pub const PAGE_FLAG_KEY: &str = "brepository";

/// Prefix of page metadata keys carrying per-page overrides
pub const PAGE_METADATA_PREFIX: &str = "brepository_";

/// Effective configuration for rendering listings and item cards.
#[derive(Debug, Clone, PartialEq)]
pub struct ListingSettings {
    /// Location of the YAML dataset
    pub data_source: Option<PathBuf>,
    /// Named subset to list instead of the full collection
    pub set: Option<String>,
    /// Active presentation variant
    pub mode: Mode,
    /// Listing title; empty hides the heading
    pub header: String,
    /// Accent class for panel containers
    pub panel_color: String,
    /// Item rendered by single-item markers
    pub item: Option<String>,
    /// Container template per mode
    pub templates: BTreeMap<Mode, String>,
    /// Per-item template per mode
    pub item_templates: BTreeMap<Mode, String>,
    /// Single-item card template
    pub item_card: String,
    /// Type tag to icon markup
    pub type_icons: BTreeMap<String, String>,
    /// Site root prepended to asset URLs and exposed to templates
    pub site_url: String,
    /// Reference the minified stylesheet
    pub minified: bool,
    /// Emit per-page marker counts at debug level
    pub debug_processing: bool,
}

impl Default for ListingSettings {
    fn default() -> Self {
        Self {
            data_source: None,
            set: None,
            mode: Mode::default(),
            header: DEFAULT_HEADER.to_string(),
            panel_color: DEFAULT_PANEL_COLOR.to_string(),
            item: None,
            templates: BTreeMap::from([
                (Mode::Panel, PANEL_CONTAINER_TEMPLATE.to_string()),
                (Mode::List, LIST_CONTAINER_TEMPLATE.to_string()),
            ]),
            item_templates: BTreeMap::from([
                (Mode::Panel, PANEL_ITEM_TEMPLATE.to_string()),
                (Mode::List, LIST_ITEM_TEMPLATE.to_string()),
            ]),
            item_card: ITEM_CARD_TEMPLATE.to_string(),
            type_icons: default_type_icons()
                .into_iter()
                .map(|(name, icon)| (name.to_string(), icon))
                .collect(),
            site_url: String::new(),
            minified: true,
            debug_processing: false,
        }
    }
}

impl ListingSettings {
    /// Stylesheet URL required by the icon font used in type icons
    pub fn stylesheet_url(&self) -> String {
        let file = if self.minified {
            "font-mfizz.min.css"
        } else {
            "font-mfizz.css"
        };
        format!("{}/theme/css/{}", self.site_url, file)
    }
}

/// One layer of overrides; unset fields inherit from the enclosing layer.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SettingsOverrides {
    pub data_source: Option<PathBuf>,
    pub set: Option<String>,
    pub mode: Option<Mode>,
    pub header: Option<String>,
    pub panel_color: Option<String>,
    pub item: Option<String>,
}

impl SettingsOverrides {
    /// Read overrides from marker attributes (`data-source`, `data-mode`, ...).
    ///
    /// `attribute` returns the value of a full attribute name. An unparseable
    /// `data-mode` is an error so the caller can skip just that marker.
    pub fn from_attributes<F>(attribute: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| attribute(&format!("{MARKER_ATTRIBUTE_PREFIX}{key}"));

        Ok(Self {
            data_source: get("source").map(PathBuf::from),
            set: get("set"),
            mode: get("mode").map(|m| Mode::from_str(&m)).transpose()?,
            header: get("header"),
            panel_color: get("panel-color"),
            item: get("item"),
        })
    }

    /// Read overrides from page metadata (`brepository_source`, `brepository_mode`, ...).
    ///
    /// Unrecognized `brepository_*` keys and unparseable modes are logged and ignored.
    pub fn from_page_metadata(metadata: &BTreeMap<String, String>) -> Self {
        let mut overrides = Self::default();

        for (key, value) in metadata {
            let Some(option) = key.strip_prefix(PAGE_METADATA_PREFIX) else {
                continue;
            };
            match option {
                "source" => overrides.data_source = Some(PathBuf::from(value)),
                "set" => overrides.set = Some(value.clone()),
                "mode" => match Mode::from_str(value) {
                    Ok(mode) => overrides.mode = Some(mode),
                    Err(e) => warn!("Ignoring page metadata '{}': {}", key, e),
                },
                "header" => overrides.header = Some(value.clone()),
                "panel_color" => overrides.panel_color = Some(value.clone()),
                "item" => overrides.item = Some(value.clone()),
                _ => warn!("Ignoring unknown page metadata key '{}'", key),
            }
        }

        overrides
    }

    /// Clone `base` and replace every key this layer sets
    pub fn apply(&self, base: &ListingSettings) -> ListingSettings {
        let mut settings = base.clone();

        if let Some(source) = &self.data_source {
            settings.data_source = Some(source.clone());
        }
        if let Some(set) = &self.set {
            settings.set = Some(set.clone());
        }
        if let Some(mode) = self.mode {
            settings.mode = mode;
        }
        if let Some(header) = &self.header {
            settings.header = header.clone();
        }
        if let Some(panel_color) = &self.panel_color {
            settings.panel_color = panel_color.clone();
        }
        if let Some(item) = &self.item {
            settings.item = Some(item.clone());
        }

        settings
    }
}

/// Settings context for one page, rebuilt from the defaults for every page.
#[derive(Debug, Clone, PartialEq)]
pub struct PageSettings {
    /// Defaults narrowed by the page's metadata
    pub settings: ListingSettings,
    /// Whether the page template receives a pre-rendered listing
    pub template_variable: bool,
}

impl PageSettings {
    /// Build the page layer from process-wide defaults and page metadata
    pub fn build(defaults: &ListingSettings, metadata: &BTreeMap<String, String>) -> Self {
        let template_variable = metadata
            .get(PAGE_FLAG_KEY)
            .is_some_and(|flag| flag.trim().eq_ignore_ascii_case("true"));

        Self {
            settings: SettingsOverrides::from_page_metadata(metadata).apply(defaults),
            template_variable,
        }
    }

    /// Effective settings for a marker nested in this page
    pub fn for_marker(&self, overrides: &SettingsOverrides) -> ListingSettings {
        overrides.apply(&self.settings)
    }
}
