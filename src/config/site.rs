//! Site-wide configuration supplied by the host pipeline.
//!
//! The host reads this once at startup and converts it into the process-wide
//! [`ListingSettings`] via [`SiteConfig::into_settings`].

use serde::Deserialize;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use tracing::warn;

use crate::config::{ConfigError, ListingSettings, Mode};

/// Raw site configuration as written by the site author
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct SiteConfig {
    /// Default dataset location
    #[serde(default)]
    pub source: Option<PathBuf>,
    /// Container template overrides keyed by mode
    #[serde(default)]
    pub template: BTreeMap<String, String>,
    /// Item template overrides keyed by mode
    #[serde(default)]
    pub item_template: BTreeMap<String, String>,
    /// Replacement single-item card template
    #[serde(default)]
    pub item_card: Option<String>,
    /// Additional or replacement type icons
    #[serde(default)]
    pub type_icons: BTreeMap<String, String>,
    #[serde(default)]
    pub panel_color: Option<String>,
    #[serde(default)]
    pub header: Option<String>,
    #[serde(default)]
    pub mode: Option<String>,
    #[serde(default)]
    pub site_url: Option<String>,
    #[serde(default)]
    pub minified: Option<bool>,
    #[serde(default)]
    pub debug_processing: Option<bool>,
    /// Keys this crate does not recognize; logged and ignored
    #[serde(flatten)]
    pub unknown: BTreeMap<String, serde_json::Value>,
}

impl SiteConfig {
    /// Parse a YAML site configuration
    pub fn from_yaml_str(content: &str) -> Result<Self, ConfigError> {
        Ok(serde_yaml::from_str(content)?)
    }

    /// Parse a TOML site configuration
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }

    /// Load a site configuration, picking the format from the file extension
    pub fn from_path(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        match path.extension().and_then(|ext| ext.to_str()) {
            Some("yml") | Some("yaml") => Self::from_yaml_str(&content),
            Some("toml") => Self::from_toml_str(&content),
            _ => Err(ConfigError::UnsupportedFormat(path.display().to_string())),
        }
    }

    /// Merge this configuration over the built-in defaults.
    ///
    /// Template and icon maps merge key-wise; the item card is replaced.
    /// Template keys naming an unknown mode are logged and dropped.
    pub fn into_settings(self) -> Result<ListingSettings, ConfigError> {
        let mut settings = ListingSettings::default();

        for key in self.unknown.keys() {
            warn!("Ignoring unknown site configuration key '{}'", key);
        }

        if let Some(source) = self.source {
            settings.data_source = Some(source);
        }
        merge_mode_templates(&mut settings.templates, self.template, "template");
        merge_mode_templates(&mut settings.item_templates, self.item_template, "item-template");
        if let Some(card) = self.item_card {
            settings.item_card = card;
        }
        settings.type_icons.extend(self.type_icons);
        if let Some(panel_color) = self.panel_color {
            settings.panel_color = panel_color;
        }
        if let Some(header) = self.header {
            settings.header = header;
        }
        if let Some(mode) = self.mode {
            settings.mode = Mode::from_str(&mode)?;
        }
        if let Some(site_url) = self.site_url {
            settings.site_url = site_url.trim_end_matches('/').to_string();
        }
        if let Some(minified) = self.minified {
            settings.minified = minified;
        }
        if let Some(debug_processing) = self.debug_processing {
            settings.debug_processing = debug_processing;
        }

        Ok(settings)
    }
}

fn merge_mode_templates(
    target: &mut BTreeMap<Mode, String>,
    overrides: BTreeMap<String, String>,
    section: &str,
) {
    for (key, template) in overrides {
        match Mode::from_str(&key) {
            Ok(mode) => {
                target.insert(mode, template);
            }
            Err(e) => warn!("Ignoring {} override '{}': {}", section, key, e),
        }
    }
}
