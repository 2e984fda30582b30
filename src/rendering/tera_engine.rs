//! Tera-based template engine implementation

use tera::Tera;

use crate::rendering::{Bindings, RenderError, TemplateEngine};

/// Tera-based template engine
pub struct TeraTemplateEngine;

impl TeraTemplateEngine {
    pub fn new() -> Self {
        Self
    }
}

impl Default for TeraTemplateEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl TemplateEngine for TeraTemplateEngine {
    fn render(&self, source: &str, bindings: &Bindings) -> Result<String, RenderError> {
        // Icons and pre-rendered rows are markup, so autoescaping stays off
        Ok(Tera::one_off(source, &bindings.to_tera_context(), false)?)
    }
}
