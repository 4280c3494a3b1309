use crate::options::{HtmlPolicy, RenderOptions};
use vitae_idf::{IRNode, InlineNode, NodeMetadata};
use vitae_schema::Document;
use vitae_style::stylesheet::names;
use vitae_style::{Stylesheet, Typography};

/// Everything a template needs to render one document: the data, the
/// theme-derived stylesheet, and the render options.
///
/// Built once per render pass and only ever read.
pub struct RenderContext<'a> {
    document: &'a Document,
    options: &'a RenderOptions,
    stylesheet: Stylesheet,
}

impl<'a> RenderContext<'a> {
    pub fn new(document: &'a Document, options: &'a RenderOptions) -> Self {
        let metadata = &document.metadata;
        Self {
            document,
            options,
            stylesheet: Stylesheet::from_theme(&metadata.theme, &metadata.typography),
        }
    }

    pub fn document(&self) -> &'a Document {
        self.document
    }

    pub fn options(&self) -> &RenderOptions {
        self.options
    }

    pub fn stylesheet(&self) -> &Stylesheet {
        &self.stylesheet
    }

    pub fn typography(&self) -> &'a Typography {
        &self.document.metadata.typography
    }

    /// Node metadata carrying `class_names` and the styles they resolve to.
    pub fn meta(&self, class_names: &[&str]) -> NodeMetadata {
        NodeMetadata {
            class_names: class_names.iter().map(|c| c.to_string()).collect(),
            style_sets: self.stylesheet.resolve(class_names),
            ..Default::default()
        }
    }

    /// A single-line paragraph, or `None` when `text` is blank.
    pub fn line(&self, class_names: &[&str], text: &str) -> Option<IRNode> {
        if text.trim().is_empty() {
            return None;
        }
        Some(IRNode::text(self.meta(class_names), text))
    }

    /// A named icon glyph, or `None` when the document hides icons.
    pub fn icon(&self, name: &str) -> Option<InlineNode> {
        if self.typography().hide_icons {
            return None;
        }
        Some(InlineNode::Icon {
            meta: self.meta(&[names::ICON]),
            name: name.to_string(),
        })
    }

    /// Emits an HTML-bearing field according to the configured policy.
    pub fn html(&self, class_names: &[&str], content: &str, columns: Option<usize>) -> IRNode {
        match self.options.html_policy {
            HtmlPolicy::Trusted => IRNode::Html {
                meta: self.meta(class_names),
                content: content.to_string(),
                columns,
            },
            HtmlPolicy::Untrusted => IRNode::text(self.meta(class_names), content),
        }
    }
}
