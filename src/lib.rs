//! Repository listing renderer for static site pipelines
//!
//! Pages embed placeholder `<div>` markers; this crate resolves the items they
//! reference from a YAML dataset and replaces each marker with templated HTML.
//!
//! The host pipeline builds a [`ListingPlugin`] once from its global settings and
//! then hands every generated page to [`ListingPlugin::process_page`]:
//!
//! ```no_run
//! use repository_listing::{ListingPlugin, ListingSettings, Page};
//!
//! let plugin = ListingPlugin::new(ListingSettings::default());
//! let mut page = Page::new(r#"<div class="brepository" data-source="content/data/repository.yaml"></div>"#);
//! plugin.process_page(&mut page).expect("page processed");
//! println!("{}", page.content);
//! ```
#![deny(unsafe_code)]

pub mod config;
pub mod dataset;
pub mod document;
pub mod error;
pub mod rendering;
pub mod substitution;

pub use crate::{
    config::{ListingSettings, Mode, PageSettings, SettingsOverrides, SiteConfig},
    dataset::{Item, Registry, load_registry},
    error::{Error, Result},
    rendering::{Bindings, TemplateBinder, TemplateEngine, TeraTemplateEngine},
    substitution::{ContentKind, ListingPlugin, Page, PageMetadata},
};
