#![allow(dead_code)]

pub mod fixtures;

use serde_json::Value;
use vitae::{IRNode, RenderError, Renderer, RendererBuilder};

pub type TestResult = Result<(), Box<dyn std::error::Error>>;

/// Render a JSON document with default options
pub fn render(document: &Value) -> Result<Vec<IRNode>, RenderError> {
    render_with(RendererBuilder::new().build(), document)
}

/// Render a JSON document with the given renderer
pub fn render_with(renderer: Renderer, document: &Value) -> Result<Vec<IRNode>, RenderError> {
    renderer.render_json(&serde_json::to_string(document)?)
}

/// Find the single node with the given id, failing the test otherwise
pub fn node_by_id<'a>(page: &'a IRNode, id: &str) -> &'a IRNode {
    let found = page.find_all(&|n| n.id() == Some(id));
    assert_eq!(found.len(), 1, "expected exactly one node with id '{}'", id);
    found[0]
}

/// Ids of the section blocks on a page, in document order
pub fn section_ids(page: &IRNode) -> Vec<String> {
    page.find_all(&|n| n.has_class("section"))
        .into_iter()
        .filter_map(|n| n.id().map(str::to_string))
        .collect()
}

/// Count nodes of the given kind on a page
pub fn count_kind(page: &IRNode, kind: &str) -> usize {
    page.find_all(&|n| n.kind() == kind).len()
}
