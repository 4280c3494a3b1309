//! Hyperlink validation and rendering.
//!
//! A link is only emitted when its target is a syntactically valid absolute
//! URL; anything else renders as nothing at all rather than a dead link.

use crate::context::RenderContext;
use nom::{
    IResult, Parser,
    bytes::complete::{tag, take_while, take_while1},
    character::complete::satisfy,
    combinator::{all_consuming, recognize, verify},
    sequence::{pair, separated_pair, terminated},
};
use vitae_idf::{IRNode, InlineNode};
use vitae_schema::Url;
use vitae_style::stylesheet::names;

const DEFAULT_LINK_ICON: &str = "link";

// --- URL syntax ---

fn scheme(input: &str) -> IResult<&str, &str> {
    recognize(pair(
        satisfy(|c| c.is_ascii_alphabetic()),
        take_while(|c: char| c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.')),
    ))
    .parse(input)
}

fn host(input: &str) -> IResult<&str, &str> {
    verify(
        take_while1(|c: char| !matches!(c, '/' | '?' | '#') && !c.is_whitespace()),
        |host: &str| host.chars().any(char::is_alphanumeric),
    )
    .parse(input)
}

fn absolute_url(input: &str) -> IResult<&str, (&str, &str)> {
    all_consuming(terminated(
        separated_pair(scheme, tag("://"), host),
        take_while(|c: char| !c.is_whitespace()),
    ))
    .parse(input)
}

/// True when `href` has a scheme, `://`, a non-empty host, and no whitespace.
pub fn is_url(href: &str) -> bool {
    absolute_url(href).is_ok()
}

/// The text to show for a link: the explicit label, else the stored label,
/// else the target itself.
pub fn resolve_label<'a>(url: &'a Url, explicit: Option<&'a str>) -> &'a str {
    match explicit {
        Some(label) => label,
        None if !url.label.is_empty() => &url.label,
        None => &url.href,
    }
}

/// What to put in front of a link.
#[derive(Debug, Clone, Default)]
pub enum LinkIcon {
    /// The generic link glyph.
    #[default]
    Default,
    /// No icon at all.
    None,
    /// A caller-provided inline node, such as a brand logo.
    Custom(InlineNode),
}

#[derive(Debug, Clone, Default)]
pub struct LinkOptions<'a> {
    pub label: Option<&'a str>,
    pub icon: LinkIcon,
    /// Right-align the link row.
    pub rtl: bool,
    /// Extra classes for the hyperlink itself.
    pub class_names: &'a [&'a str],
}

/// Renders `url` as an icon-prefixed link row, or `None` when the target is
/// not a valid URL.
pub fn render_link(ctx: &RenderContext<'_>, url: &Url, options: LinkOptions<'_>) -> Option<IRNode> {
    if !is_url(&url.href) {
        return None;
    }

    let mut children = Vec::with_capacity(2);
    match options.icon {
        LinkIcon::Default => children.extend(ctx.icon(DEFAULT_LINK_ICON)),
        LinkIcon::None => {}
        LinkIcon::Custom(node) => {
            if !ctx.typography().hide_icons {
                children.push(node);
            }
        }
    }

    let mut link_classes = vec![names::LINK];
    link_classes.extend_from_slice(options.class_names);
    children.push(hyperlink(
        ctx,
        &link_classes,
        &url.href,
        resolve_label(url, options.label),
    ));

    let row_classes: &[&str] = if options.rtl {
        &["link-row", names::ALIGN_RIGHT]
    } else {
        &["link-row"]
    };
    Some(IRNode::paragraph(ctx.meta(row_classes), children))
}

/// A bare hyperlink with a text label.
pub fn hyperlink(ctx: &RenderContext<'_>, class_names: &[&str], href: &str, label: &str) -> InlineNode {
    InlineNode::Hyperlink {
        meta: ctx.meta(class_names),
        href: href.to_string(),
        children: vec![InlineNode::text(label)],
    }
}

/// `label` as a hyperlink to `url` when the target is valid, else as plain text.
pub fn text_or_link(ctx: &RenderContext<'_>, url: &Url, label: &str) -> InlineNode {
    if is_url(&url.href) {
        hyperlink(ctx, &[names::LINK], &url.href, label)
    } else {
        InlineNode::text(label)
    }
}
