//! Substitution domain - replaces in-page markers with rendered listings and cards
//!
//! The host pipeline hands each generated page to [`ListingPlugin::process_page`];
//! the plugin rebuilds the page's settings context, replaces every listing and
//! single-item marker it can resolve, and records the stylesheet the rendered
//! markup depends on.

pub mod assets;
pub mod page;
pub mod plugin;

pub use assets::*;
pub use page::*;
pub use plugin::*;
