//! Marker substitution - coordinates settings, dataset lookup and rendering per page

use std::fmt;
use std::sync::Arc;

use tracing::{debug, warn};

use crate::config::{ListingSettings, PageSettings, SettingsOverrides, SiteConfig};
use crate::dataset::load_registry;
use crate::document::{Element, HtmlDocument};
use crate::error::{Error, Result};
use crate::rendering::{TemplateBinder, TemplateEngine, TeraTemplateEngine};
use crate::substitution::{ContentKind, Page, register_stylesheet};

/// Element name of both marker kinds
pub const MARKER_TAG: &str = "div";

/// Class token of listing markers
pub const LISTING_MARKER_CLASS: &str = "brepository";

/// Class token of single-item markers
pub const ITEM_MARKER_CLASS: &str = "brepository-item";

/// What a marker element asks to be replaced with
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MarkerRole {
    /// A full listing, or one named subset of it
    Listing,
    /// A card for one named item
    SingleItem,
}

impl MarkerRole {
    /// Class token identifying this marker kind
    pub fn class(&self) -> &'static str {
        match self {
            MarkerRole::Listing => LISTING_MARKER_CLASS,
            MarkerRole::SingleItem => ITEM_MARKER_CLASS,
        }
    }
}

impl fmt::Display for MarkerRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.class())
    }
}

/// Replaces listing and single-item markers in generated pages.
///
/// Holds the process-wide defaults, which stay untouched; every page builds its
/// own [`PageSettings`] and every marker its own effective settings from them.
pub struct ListingPlugin {
    defaults: ListingSettings,
    engine: Arc<dyn TemplateEngine>,
}

impl ListingPlugin {
    /// Create a plugin rendering with Tera
    pub fn new(defaults: ListingSettings) -> Self {
        Self::with_engine(defaults, Arc::new(TeraTemplateEngine::new()))
    }

    /// Create a plugin with a custom template engine
    pub fn with_engine(defaults: ListingSettings, engine: Arc<dyn TemplateEngine>) -> Self {
        Self { defaults, engine }
    }

    /// Create a plugin from the host's site configuration
    pub fn from_site_config(config: SiteConfig) -> Result<Self> {
        Ok(Self::new(config.into_settings()?))
    }

    /// Process-wide default settings
    pub fn defaults(&self) -> &ListingSettings {
        &self.defaults
    }

    /// Substitute every marker in `page` and register the stylesheet when
    /// anything was rendered. Returns the number of markers replaced.
    ///
    /// Failures of individual markers are logged and leave the marker in place.
    /// Page content is rewritten only when at least one marker was replaced.
    pub fn process_page(&self, page: &mut Page) -> Result<usize> {
        if page.kind == ContentKind::Static {
            return Ok(0);
        }

        let page_settings = PageSettings::build(&self.defaults, &page.metadata.values);
        let mut produced = false;

        page.listing = None;
        if page_settings.template_variable {
            match self.render_listing(&page_settings.settings) {
                Ok(html) => {
                    page.listing = Some(html);
                    produced = true;
                }
                Err(e) => warn!(
                    "Failed to render listing variable for page '{}': {}",
                    page.display_title(),
                    e
                ),
            }
        }

        let document = HtmlDocument::parse(&page.content);
        let mut replaced = 0;

        for role in [MarkerRole::Listing, MarkerRole::SingleItem] {
            let markers = document.find_by_class(MARKER_TAG, role.class());
            if markers.is_empty() {
                continue;
            }
            if page_settings.settings.debug_processing {
                debug!(
                    "[{}] title:[{}] markers:[{}]",
                    role,
                    page.display_title(),
                    markers.len()
                );
            }

            for marker in &markers {
                match self.substitute_marker(&document, marker, role, &page_settings) {
                    Ok(()) => replaced += 1,
                    Err(e) => warn!(
                        "Leaving {} marker unprocessed on page '{}': {}",
                        role,
                        page.display_title(),
                        e
                    ),
                }
            }
        }

        if replaced > 0 {
            page.content = document.to_html()?;
        }
        if produced || replaced > 0 {
            register_stylesheet(&mut page.metadata, &page_settings.settings);
        }

        Ok(replaced)
    }

    /// Render the listing described by `settings`: the named subset when it
    /// exists in the dataset, otherwise every item
    pub fn render_listing(&self, settings: &ListingSettings) -> Result<String> {
        let registry = load_registry(settings.data_source.as_deref())?;

        if let Some(set) = settings.set.as_deref() {
            if registry.find_subset(set).is_none() {
                debug!("Subset '{}' not found, listing all items", set);
            }
        }
        let items = registry.listing_items(settings.set.as_deref());

        let binder = TemplateBinder::new(self.engine.as_ref(), settings);
        Ok(binder.render_listing(items)?)
    }

    /// Render the card for the item named in `settings`
    pub fn render_item_card(&self, settings: &ListingSettings) -> Result<String> {
        let name = settings.item.as_deref().ok_or(Error::MissingItem)?;
        let registry = load_registry(settings.data_source.as_deref())?;
        let item = registry
            .find_item(name)
            .ok_or_else(|| Error::item_not_found(name))?;

        let binder = TemplateBinder::new(self.engine.as_ref(), settings);
        Ok(binder.render_card(item)?)
    }

    fn substitute_marker(
        &self,
        document: &HtmlDocument,
        marker: &Element,
        role: MarkerRole,
        page_settings: &PageSettings,
    ) -> Result<()> {
        let overrides = SettingsOverrides::from_attributes(|name| marker.attribute(name))?;
        let settings = page_settings.for_marker(&overrides);

        let html = match role {
            MarkerRole::Listing => self.render_listing(&settings)?,
            MarkerRole::SingleItem => self.render_item_card(&settings)?,
        };

        document.replace_with_html(marker, &html)?;
        Ok(())
    }
}
