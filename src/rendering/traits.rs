//! Port interface for the templating capability

use crate::rendering::{Bindings, RenderError};

/// Evaluates template text against named bindings
pub trait TemplateEngine: Send + Sync {
    /// Render `source` with `bindings`; output is not HTML-escaped
    fn render(&self, source: &str, bindings: &Bindings) -> Result<String, RenderError>;
}
