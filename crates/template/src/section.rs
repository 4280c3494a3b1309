//! The generic section renderer shared by every section type.

use crate::context::RenderContext;
use crate::field::FieldConfig;
use crate::options::EmptySectionPolicy;
use crate::rating::render_rating;
use itertools::Itertools;
use vitae_idf::{GridTrack, IRNode, InlineNode, NodeMetadata};
use vitae_schema::{Section, SectionItem};
use vitae_style::stylesheet::names;

pub const SECTION_CLASS: &str = "section";
pub const SECTION_ITEMS_CLASS: &str = "section-items";
pub const SECTION_ITEM_CLASS: &str = "section-item";
pub const SUMMARY_CLASS: &str = "summary";
pub const KEYWORDS_CLASS: &str = "keywords";

impl EmptySectionPolicy {
    /// Whether `section` should be skipped as empty under this policy.
    pub fn is_empty<T: SectionItem>(self, section: &Section<T>) -> bool {
        match self {
            EmptySectionPolicy::AnyItems => section.items.is_empty(),
            EmptySectionPolicy::VisibleItems => section.visible_items().next().is_none(),
        }
    }
}

/// Renders one section as a titled grid of item cells.
///
/// Returns `None` for hidden sections and for sections the configured
/// [`EmptySectionPolicy`] considers empty. `primary` renders the
/// type-specific head of each item; the optional summary, rating and keyword
/// blocks follow it when `fields` configures them and the item has data.
pub fn render_section<T, F>(
    ctx: &RenderContext<'_>,
    section: &Section<T>,
    fields: &FieldConfig<T>,
    primary: F,
) -> Option<IRNode>
where
    T: SectionItem,
    F: Fn(&RenderContext<'_>, &T) -> IRNode,
{
    if !section.visible || ctx.options().empty_sections.is_empty(section) {
        return None;
    }

    let cells = section
        .visible_items()
        .map(|item| render_item(ctx, item, fields, &primary))
        .collect();

    let heading = IRNode::Heading {
        meta: ctx.meta(&[names::SECTION_TITLE]),
        level: 4,
        children: vec![InlineNode::text(section.name.as_str())],
    };
    let grid = IRNode::Grid {
        meta: ctx.meta(&[SECTION_ITEMS_CLASS]),
        tracks: vec![GridTrack::repeat(section.columns.get())],
        children: cells,
    };

    Some(IRNode::block(
        with_id(ctx.meta(&[SECTION_CLASS]), &section.id),
        vec![heading, grid],
    ))
}

fn render_item<T, F>(ctx: &RenderContext<'_>, item: &T, fields: &FieldConfig<T>, primary: &F) -> IRNode
where
    T: SectionItem,
    F: Fn(&RenderContext<'_>, &T) -> IRNode,
{
    let values = fields.extract_all(item);
    let mut children = vec![primary(ctx, item)];

    if let Some(summary) = values.summary_to_render() {
        children.push(ctx.html(&[SUMMARY_CLASS], summary, None));
    }
    if let Some(level) = values.level_to_render() {
        children.push(render_rating(ctx, level));
    }
    if let Some(keywords) = values.keywords_to_render() {
        children.push(IRNode::text(
            ctx.meta(&[KEYWORDS_CLASS, names::SMALL]),
            keywords.iter().join(", "),
        ));
    }

    IRNode::block(with_id(ctx.meta(&[SECTION_ITEM_CLASS]), item.id()), children)
}

fn with_id(meta: NodeMetadata, id: &str) -> NodeMetadata {
    if id.is_empty() { meta } else { meta.with_id(id) }
}
