//! Named values bound into a template

use serde_json::Value as JsonValue;
use std::collections::BTreeMap;

use crate::config::ListingSettings;
use crate::dataset::Item;

/// Variables available to one template evaluation
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Bindings {
    pub variables: BTreeMap<String, JsonValue>,
}

impl Bindings {
    /// Create an empty set of bindings
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a variable, replacing any earlier value under the same name
    pub fn add_variable<V: Into<JsonValue>>(&mut self, key: &str, value: V) {
        self.variables.insert(key.to_string(), value.into());
    }

    /// Text value of a variable, if it is a string
    pub fn get_str(&self, key: &str) -> Option<&str> {
        self.variables.get(key).and_then(JsonValue::as_str)
    }

    /// Listing-wide values every template may reference.
    ///
    /// `item_css` and `item_color` are styling hooks used by hand-written
    /// templates; nothing sets them, so they render empty.
    pub fn for_settings(settings: &ListingSettings) -> Self {
        let mut bindings = Self::new();
        bindings.add_variable("header", settings.header.clone());
        bindings.add_variable("panel_color", settings.panel_color.clone());
        bindings.add_variable("site_url", settings.site_url.clone());
        bindings.add_variable("item_css", "");
        bindings.add_variable("item_color", "");
        bindings
    }

    /// Bindings for one item.
    ///
    /// Every field is bound, absent ones as empty strings, so templates can
    /// test them with `{% if field %}`. `type_icon` carries the icon markup
    /// when the item's type has a configured icon.
    pub fn for_item(item: &Item, settings: &ListingSettings) -> Self {
        let mut bindings = Self::for_settings(settings);
        let text = |value: &Option<String>| value.clone().unwrap_or_default();

        let type_icon = item
            .kind
            .as_ref()
            .and_then(|kind| settings.type_icons.get(kind))
            .cloned()
            .unwrap_or_default();

        bindings.add_variable("name", item.name.clone());
        bindings.add_variable("title", text(&item.title));
        bindings.add_variable("url", text(&item.url));
        bindings.add_variable("type", text(&item.kind));
        bindings.add_variable("size", text(&item.size));
        bindings.add_variable("version", text(&item.version));
        bindings.add_variable("package_type", text(&item.package_type));
        bindings.add_variable("password", text(&item.password));
        bindings.add_variable("DOI", text(&item.doi));
        bindings.add_variable("DOI_img", text(&item.doi_img));
        bindings.add_variable("type_icon", type_icon);
        bindings
    }

    /// Convert to a Tera context
    pub fn to_tera_context(&self) -> tera::Context {
        let mut context = tera::Context::new();
        for (key, value) in &self.variables {
            context.insert(key.as_str(), value);
        }
        context
    }
}
