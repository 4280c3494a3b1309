// src/renderer.rs
use crate::error::RenderError;
use std::collections::BTreeMap;
use std::sync::Arc;
use vitae_idf::IRNode;
use vitae_schema::{Document, PageLayout};
use vitae_style::theme_variables;
use vitae_template::{PageTemplate, RenderContext, RenderOptions};
use vitae_types::Color;

/// Renders resume documents into one IDF tree per page.
///
/// Holds only immutable configuration, so a single instance can be shared
/// between threads and reused for any number of documents.
pub struct Renderer {
    template: Arc<dyn PageTemplate>,
    options: RenderOptions,
}

impl Renderer {
    pub(crate) fn new(template: Arc<dyn PageTemplate>, options: RenderOptions) -> Self {
        Self { template, options }
    }

    pub fn options(&self) -> &RenderOptions {
        &self.options
    }

    pub fn template_name(&self) -> &'static str {
        self.template.name()
    }

    /// Parses a JSON document and renders every page of its layout.
    pub fn render_json(&self, source: &str) -> Result<Vec<IRNode>, RenderError> {
        let document = Document::from_json(source)?;
        self.render_document(&document)
    }

    /// Renders every page of the document's own layout.
    pub fn render_document(&self, document: &Document) -> Result<Vec<IRNode>, RenderError> {
        self.render_layout(document, &document.metadata.layout)
    }

    /// Renders `document` with an explicit layout; the first page carries
    /// the header.
    ///
    /// A key placed in more than one column of a page is an error under
    /// `strict_layout` and a warning otherwise.
    pub fn render_layout(
        &self,
        document: &Document,
        layout: &[PageLayout],
    ) -> Result<Vec<IRNode>, RenderError> {
        for (page, columns) in layout.iter().enumerate() {
            if let Err(e) = columns.validate(page) {
                if self.options.strict_layout {
                    return Err(e.into());
                }
                log::warn!("{}", e);
            }
        }

        let ctx = RenderContext::new(document, &self.options);
        let pages: Vec<IRNode> = layout
            .iter()
            .enumerate()
            .map(|(page, columns)| self.template.render_page(&ctx, columns, page == 0))
            .collect();
        log::debug!("Rendered {} page(s) for '{}'", pages.len(), document.basics.name);
        Ok(pages)
    }

    /// Renders a single page without validating its layout.
    pub fn render_page(&self, document: &Document, layout: &PageLayout, is_first_page: bool) -> IRNode {
        let ctx = RenderContext::new(document, &self.options);
        self.template.render_page(&ctx, layout, is_first_page)
    }

    /// The CSS custom properties a host should set for the document's theme.
    pub fn theme_variables(&self, document: &Document) -> BTreeMap<String, String> {
        theme_variables(&document.metadata.theme)
    }

    /// Checks that every theme color is a valid hex color.
    ///
    /// Rendering never requires this: invalid colors are dropped from the
    /// stylesheet with a warning.
    pub fn check_theme(&self, document: &Document) -> Result<(), RenderError> {
        let theme = &document.metadata.theme;
        for value in [&theme.background, &theme.text, &theme.primary] {
            Color::from_hex(value)?;
        }
        Ok(())
    }

    /// Serializes rendered pages as pretty-printed JSON.
    pub fn to_json(pages: &[IRNode]) -> Result<String, RenderError> {
        Ok(serde_json::to_string_pretty(pages)?)
    }
}
