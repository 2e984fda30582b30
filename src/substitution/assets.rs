//! Stylesheet references required by rendered listings

use crate::config::ListingSettings;
use crate::substitution::PageMetadata;

/// Add the icon font stylesheet to the page styles unless the same link is already present
pub fn register_stylesheet(metadata: &mut PageMetadata, settings: &ListingSettings) -> bool {
    let link = format!(r#"<link rel="stylesheet" href="{}">"#, settings.stylesheet_url());
    if metadata.styles.contains(&link) {
        return false;
    }

    metadata.styles.push(link);
    true
}
