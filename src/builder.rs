// src/builder.rs
use crate::error::RenderError;
use crate::renderer::Renderer;
use std::fs;
use std::io;
use std::path::Path;
use std::sync::Arc;
use vitae_template::{EmptySectionPolicy, HtmlPolicy, Leafish, PageTemplate, RenderOptions};

/// A builder for creating a `Renderer`.
pub struct RendererBuilder {
    options: RenderOptions,
    template: Option<Arc<dyn PageTemplate>>,
}

impl Default for RendererBuilder {
    fn default() -> Self {
        Self {
            options: RenderOptions::default(),
            template: None,
        }
    }
}

impl RendererBuilder {
    /// Creates a new `RendererBuilder` with default options.
    pub fn new() -> Self {
        Default::default()
    }

    /// Replaces all render options at once.
    pub fn with_options(mut self, options: RenderOptions) -> Self {
        self.options = options;
        self
    }

    /// Loads render options from a JSON file. Keys missing from the file keep
    /// their default values.
    pub fn with_options_file<P: AsRef<Path>>(mut self, path: P) -> Result<Self, RenderError> {
        let path_ref = path.as_ref();
        let source = fs::read_to_string(path_ref).map_err(|e| {
            RenderError::Io(io::Error::new(
                e.kind(),
                format!("Failed to read options from '{}': {}", path_ref.display(), e),
            ))
        })?;
        self.options = serde_json::from_str(&source)?;
        Ok(self)
    }

    /// Selects how HTML-bearing fields are emitted.
    pub fn with_html_policy(mut self, policy: HtmlPolicy) -> Self {
        self.options.html_policy = policy;
        self
    }

    /// Selects when a visible section counts as empty.
    pub fn with_empty_section_policy(mut self, policy: EmptySectionPolicy) -> Self {
        self.options.empty_sections = policy;
        self
    }

    /// Rejects layouts with duplicate section keys instead of warning.
    pub fn with_strict_layout(mut self, strict: bool) -> Self {
        self.options.strict_layout = strict;
        self
    }

    /// Uses a page template other than the default two-column one.
    pub fn with_template(mut self, template: Arc<dyn PageTemplate>) -> Self {
        self.template = Some(template);
        self
    }

    /// Consumes the builder and creates the `Renderer`.
    pub fn build(self) -> Renderer {
        let template = self.template.unwrap_or_else(|| Arc::new(Leafish));
        log::info!(
            "Building renderer with '{}' template ({:?})",
            template.name(),
            self.options
        );
        Renderer::new(template, self.options)
    }
}
