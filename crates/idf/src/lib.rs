//! Intermediate Document Format (IDF)
//! This crate defines the in-memory tree a rendered resume page is made of.
//! Templates produce it; hosts paint it, serialize it, or inspect it in tests.

use serde::Serialize;
use std::sync::Arc;
use vitae_style::stylesheet::ElementStyle;

// --- Shared Types ---

pub type TextStr = String;

/// A common metadata structure for all block-level `IRNode`s.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NodeMetadata {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<TextStr>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub class_names: Vec<TextStr>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub style_sets: Vec<Arc<ElementStyle>>,
}

impl NodeMetadata {
    pub fn with_id(mut self, id: impl Into<TextStr>) -> Self {
        self.id = Some(id.into());
        self
    }

    pub fn has_class(&self, class_name: &str) -> bool {
        self.class_names.iter().any(|c| c == class_name)
    }
}

/// A track list entry of a grid container, sized in fractions of the free space.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum GridTrack {
    Fraction(f32),
    /// `count` tracks of `fraction` each, kept as one entry like CSS `repeat()`.
    Repeat { count: usize, fraction: f32 },
}

impl GridTrack {
    /// `count` equal tracks, the equivalent of `repeat(count, 1fr)`.
    pub fn repeat(count: usize) -> GridTrack {
        GridTrack::Repeat {
            count,
            fraction: 1.0,
        }
    }

    /// The number of tracks this entry stands for.
    pub fn count(&self) -> usize {
        match self {
            GridTrack::Fraction(_) => 1,
            GridTrack::Repeat { count, .. } => *count,
        }
    }

    /// The total number of tracks in a track list.
    pub fn total(tracks: &[GridTrack]) -> usize {
        tracks
            .iter()
            .fold(0usize, |sum, track| sum.saturating_add(track.count()))
    }
}

// --- Main Node Enums ---

/// Represents a block-level element in the document tree.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type")]
pub enum IRNode {
    /// The root of a rendered page.
    Root { children: Vec<IRNode> },
    /// A generic block container.
    Block {
        meta: NodeMetadata,
        children: Vec<IRNode>,
    },
    /// A grid container; children fill the tracks row by row.
    Grid {
        meta: NodeMetadata,
        tracks: Vec<GridTrack>,
        children: Vec<IRNode>,
    },
    /// A horizontal flex row.
    FlexContainer {
        meta: NodeMetadata,
        children: Vec<IRNode>,
    },
    /// A paragraph, containing only inline content.
    Paragraph {
        meta: NodeMetadata,
        children: Vec<InlineNode>,
    },
    /// A heading, with a level and inline content.
    Heading {
        meta: NodeMetadata,
        level: u8,
        children: Vec<InlineNode>,
    },
    /// A fragment of HTML carried through verbatim.
    Html {
        meta: NodeMetadata,
        content: TextStr,
        #[serde(skip_serializing_if = "Option::is_none")]
        columns: Option<usize>,
    },
    /// A block image.
    Image {
        meta: NodeMetadata,
        src: TextStr,
        #[serde(skip_serializing_if = "Option::is_none")]
        size: Option<f32>,
    },
}

impl IRNode {
    pub fn root(children: Vec<IRNode>) -> Self {
        IRNode::Root { children }
    }

    pub fn block(meta: NodeMetadata, children: Vec<IRNode>) -> Self {
        IRNode::Block { meta, children }
    }

    pub fn paragraph(meta: NodeMetadata, children: Vec<InlineNode>) -> Self {
        IRNode::Paragraph { meta, children }
    }

    /// A paragraph holding a single run of text.
    pub fn text(meta: NodeMetadata, text: impl Into<TextStr>) -> Self {
        IRNode::Paragraph {
            meta,
            children: vec![InlineNode::text(text)],
        }
    }

    /// Returns a reference to the metadata if the node type supports it.
    pub fn meta(&self) -> Option<&NodeMetadata> {
        match self {
            IRNode::Block { meta, .. }
            | IRNode::Grid { meta, .. }
            | IRNode::FlexContainer { meta, .. }
            | IRNode::Paragraph { meta, .. }
            | IRNode::Heading { meta, .. }
            | IRNode::Html { meta, .. }
            | IRNode::Image { meta, .. } => Some(meta),
            IRNode::Root { .. } => None,
        }
    }

    pub fn id(&self) -> Option<&str> {
        self.meta().and_then(|m| m.id.as_deref())
    }

    pub fn has_class(&self, class_name: &str) -> bool {
        self.meta().is_some_and(|m| m.has_class(class_name))
    }

    /// Block-level children; empty for leaf and inline-only nodes.
    pub fn children(&self) -> &[IRNode] {
        match self {
            IRNode::Root { children }
            | IRNode::Block { children, .. }
            | IRNode::Grid { children, .. }
            | IRNode::FlexContainer { children, .. } => children,
            _ => &[],
        }
    }

    /// Inline children of paragraphs and headings.
    pub fn inlines(&self) -> &[InlineNode] {
        match self {
            IRNode::Paragraph { children, .. } | IRNode::Heading { children, .. } => children,
            _ => &[],
        }
    }

    /// Returns a string identifier for the node type.
    pub fn kind(&self) -> &'static str {
        match self {
            IRNode::Root { .. } => "root",
            IRNode::Block { .. } => "block",
            IRNode::Grid { .. } => "grid",
            IRNode::FlexContainer { .. } => "flex-container",
            IRNode::Paragraph { .. } => "paragraph",
            IRNode::Heading { .. } => "heading",
            IRNode::Html { .. } => "html",
            IRNode::Image { .. } => "image",
        }
    }

    /// Concatenates all visible text below this node, in document order.
    /// HTML fragments contribute their raw source.
    pub fn text_content(&self) -> String {
        let mut out = String::new();
        self.collect_text(&mut out);
        out
    }

    fn collect_text(&self, out: &mut String) {
        if let IRNode::Html { content, .. } = self {
            out.push_str(content);
        }
        for inline in self.inlines() {
            inline.collect_text(out);
        }
        for child in self.children() {
            child.collect_text(out);
        }
    }

    /// Depth-first search over block nodes, including `self`.
    pub fn find_all<'a>(&'a self, pred: &dyn Fn(&IRNode) -> bool) -> Vec<&'a IRNode> {
        let mut found = Vec::new();
        self.visit(&mut |node| {
            if pred(node) {
                found.push(node);
            }
        });
        found
    }

    /// Every hyperlink below this node, in document order.
    pub fn hyperlinks(&self) -> Vec<&InlineNode> {
        let mut found = Vec::new();
        self.visit(&mut |node| {
            for inline in node.inlines() {
                inline.visit(&mut |i| {
                    if matches!(i, InlineNode::Hyperlink { .. }) {
                        found.push(i);
                    }
                });
            }
        });
        found
    }

    fn visit<'a>(&'a self, f: &mut dyn FnMut(&'a IRNode)) {
        f(self);
        for child in self.children() {
            child.visit(f);
        }
    }
}

/// Represents an inline-level element within a `Paragraph` or `Heading`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type")]
pub enum InlineNode {
    /// A run of plain text.
    Text { content: TextStr },
    /// A styled span.
    StyledSpan {
        meta: NodeMetadata,
        children: Vec<InlineNode>,
    },
    /// A hyperlink that opens outside the document.
    Hyperlink {
        meta: NodeMetadata,
        href: TextStr,
        children: Vec<InlineNode>,
    },
    /// A named glyph from the icon font.
    Icon { meta: NodeMetadata, name: TextStr },
    /// An inline image, such as a brand logo.
    Image {
        meta: NodeMetadata,
        src: TextStr,
        alt: TextStr,
        size: f32,
    },
}

impl InlineNode {
    pub fn text(text: impl Into<TextStr>) -> Self {
        InlineNode::Text {
            content: text.into(),
        }
    }

    pub fn children(&self) -> &[InlineNode] {
        match self {
            InlineNode::StyledSpan { children, .. } | InlineNode::Hyperlink { children, .. } => {
                children
            }
            _ => &[],
        }
    }

    pub fn href(&self) -> Option<&str> {
        match self {
            InlineNode::Hyperlink { href, .. } => Some(href),
            _ => None,
        }
    }

    pub fn text_content(&self) -> String {
        let mut out = String::new();
        self.collect_text(&mut out);
        out
    }

    fn collect_text(&self, out: &mut String) {
        if let InlineNode::Text { content } = self {
            out.push_str(content);
        }
        for child in self.children() {
            child.collect_text(out);
        }
    }

    fn visit<'a>(&'a self, f: &mut dyn FnMut(&'a InlineNode)) {
        f(self);
        for child in self.children() {
            child.visit(f);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> IRNode {
        IRNode::root(vec![IRNode::block(
            NodeMetadata::default().with_id("experience"),
            vec![
                IRNode::text(NodeMetadata::default(), "Engineer"),
                IRNode::paragraph(
                    NodeMetadata::default(),
                    vec![InlineNode::Hyperlink {
                        meta: NodeMetadata::default(),
                        href: "https://acme.test".to_string(),
                        children: vec![InlineNode::text("Acme")],
                    }],
                ),
                IRNode::Html {
                    meta: NodeMetadata::default(),
                    content: "<p>Built things</p>".to_string(),
                    columns: None,
                },
            ],
        )])
    }

    #[test]
    fn test_text_content_walks_blocks_and_inlines() {
        assert_eq!(sample().text_content(), "EngineerAcme<p>Built things</p>");
    }

    #[test]
    fn test_find_all_and_hyperlinks() {
        let tree = sample();
        let blocks = tree.find_all(&|n| n.id() == Some("experience"));
        assert_eq!(blocks.len(), 1);
        assert_eq!(blocks[0].kind(), "block");

        let links = tree.hyperlinks();
        assert_eq!(links.len(), 1);
        assert_eq!(links[0].href(), Some("https://acme.test"));
        assert_eq!(links[0].text_content(), "Acme");
    }

    #[test]
    fn test_serializes_with_type_tags() {
        let json = serde_json::to_value(IRNode::text(NodeMetadata::default(), "Hi")).unwrap();
        assert_eq!(json["type"], "Paragraph");
        assert_eq!(json["children"][0]["type"], "Text");
        assert_eq!(json["children"][0]["content"], "Hi");
    }

    #[test]
    fn test_grid_repeat_tracks() {
        let tracks = [GridTrack::repeat(3), GridTrack::Fraction(2.0)];
        assert_eq!(tracks[0].count(), 3);
        assert_eq!(GridTrack::total(&tracks), 4);

        let json = serde_json::to_value(tracks[0]).unwrap();
        assert_eq!(json["repeat"]["count"], 3);
        assert_eq!(json["repeat"]["fraction"], 1.0);
    }

    #[test]
    fn test_grid_repeat_does_not_expand_huge_counts() {
        let tracks = [GridTrack::repeat(usize::MAX), GridTrack::repeat(2)];
        assert_eq!(GridTrack::total(&tracks), usize::MAX);
    }
}
