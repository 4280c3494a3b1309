use crate::context::RenderContext;
use crate::dispatch::render_section_key;
use crate::header::render_header;
use vitae_idf::{GridTrack, IRNode};
use vitae_schema::PageLayout;
use vitae_style::stylesheet::names;

/// A page template turns one page of the layout into an IDF tree.
pub trait PageTemplate: Send + Sync {
    fn name(&self) -> &'static str;

    fn render_page(&self, ctx: &RenderContext<'_>, layout: &PageLayout, is_first_page: bool) -> IRNode;
}

/// A two-column template: a wide main column and a right-aligned sidebar,
/// with the header above both on the first page.
#[derive(Debug, Clone, Copy, Default)]
pub struct Leafish;

impl Leafish {
    pub const MAIN_FRACTION: f32 = 63.0;
    pub const SIDEBAR_FRACTION: f32 = 37.0;
}

impl PageTemplate for Leafish {
    fn name(&self) -> &'static str {
        "leafish"
    }

    fn render_page(&self, ctx: &RenderContext<'_>, layout: &PageLayout, is_first_page: bool) -> IRNode {
        log::debug!(
            "Rendering {} page (first: {}, main: {} keys, sidebar: {} keys)",
            self.name(),
            is_first_page,
            layout.main().len(),
            layout.sidebar().len()
        );

        let columns = IRNode::Grid {
            meta: ctx.meta(&[names::PAGE]),
            tracks: vec![
                GridTrack::Fraction(Self::MAIN_FRACTION),
                GridTrack::Fraction(Self::SIDEBAR_FRACTION),
            ],
            children: vec![
                column(ctx, &["main-column"], layout.main()),
                column(ctx, &["sidebar-column", names::ALIGN_RIGHT], layout.sidebar()),
            ],
        };

        let mut children = Vec::with_capacity(2);
        if is_first_page {
            children.push(render_header(ctx));
        }
        children.push(columns);
        IRNode::root(children)
    }
}

fn column(ctx: &RenderContext<'_>, class_names: &[&str], keys: &[String]) -> IRNode {
    IRNode::block(
        ctx.meta(class_names),
        keys.iter()
            .filter_map(|key| render_section_key(ctx, key))
            .collect(),
    )
}
