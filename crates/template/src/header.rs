//! The first-page header: identity, summary, picture and contact details.

use crate::context::RenderContext;
use crate::link::{LinkIcon, LinkOptions, hyperlink, render_link};
use itertools::Itertools;
use vitae_idf::{IRNode, InlineNode};
use vitae_schema::{Basics, CustomField, Profile, Section, SummarySection};
use vitae_style::stylesheet::names;

pub const BRAND_ICON_BASE: &str = "https://cdn.simpleicons.org/";

const HEADER_CLASS: &str = "header";
const CONTACT_CLASS: &str = "contact";
const PROFILES_CLASS: &str = "profiles";
const PICTURE_CLASS: &str = "picture";

pub fn render_header(ctx: &RenderContext<'_>) -> IRNode {
    let document = ctx.document();
    let basics = &document.basics;

    let identity = IRNode::block(
        ctx.meta(&[]),
        [
            ctx.line(&[names::NAME], &basics.name),
            ctx.line(&[names::HEADLINE], &basics.headline),
            summary(ctx, &document.sections.summary),
        ]
        .into_iter()
        .flatten()
        .collect(),
    );

    let mut top = vec![identity];
    top.extend(picture(ctx, basics));

    IRNode::block(
        ctx.meta(&[HEADER_CLASS]),
        vec![
            IRNode::FlexContainer {
                meta: ctx.meta(&[]),
                children: top,
            },
            IRNode::FlexContainer {
                meta: ctx.meta(&[CONTACT_CLASS, names::SMALL]),
                children: contacts(ctx, basics, &document.sections.profiles),
            },
        ],
    )
}

/// The summary is shown whenever it has content; its own `visible` flag
/// only governs placement as a section, which this template never does.
fn summary(ctx: &RenderContext<'_>, section: &SummarySection) -> Option<IRNode> {
    if section.content.trim().is_empty() {
        return None;
    }
    Some(ctx.html(
        &["summary"],
        &section.content,
        Some(section.columns.get()),
    ))
}

fn picture(ctx: &RenderContext<'_>, basics: &Basics) -> Option<IRNode> {
    let picture = &basics.picture;
    picture.is_shown().then(|| IRNode::Image {
        meta: ctx.meta(&[PICTURE_CLASS]),
        src: picture.url.clone(),
        size: Some(picture.size),
    })
}

fn contacts(ctx: &RenderContext<'_>, basics: &Basics, profiles: &Section<Profile>) -> Vec<IRNode> {
    let mut items = Vec::new();

    if !basics.location.trim().is_empty() {
        items.push(contact(ctx, "map-pin", InlineNode::text(basics.location.as_str())));
    }
    if !basics.phone.trim().is_empty() {
        let href = format!("tel:{}", basics.phone);
        items.push(contact(ctx, "phone", hyperlink(ctx, &[names::LINK], &href, &basics.phone)));
    }
    if !basics.email.trim().is_empty() {
        let href = format!("mailto:{}", basics.email);
        items.push(contact(ctx, "at", hyperlink(ctx, &[names::LINK], &href, &basics.email)));
    }
    items.extend(render_link(ctx, &basics.url, LinkOptions::default()));
    items.extend(basics.custom_fields.iter().filter_map(|field| custom_field(ctx, field)));

    if profiles.visible && !profiles.items.is_empty() {
        let links: Vec<IRNode> = profiles
            .visible_items()
            .filter_map(|profile| profile_link(ctx, profile))
            .collect();
        if !links.is_empty() {
            items.push(IRNode::FlexContainer {
                meta: ctx.meta(&[PROFILES_CLASS]),
                children: links,
            });
        }
    }

    items
}

fn contact(ctx: &RenderContext<'_>, icon: &str, content: InlineNode) -> IRNode {
    let mut children: Vec<InlineNode> = ctx.icon(icon).into_iter().collect();
    children.push(content);
    IRNode::paragraph(ctx.meta(&[]), children)
}

/// `name: value`, dropping whichever part is blank.
fn custom_field(ctx: &RenderContext<'_>, field: &CustomField) -> Option<IRNode> {
    let text = [field.name.as_str(), field.value.as_str()]
        .into_iter()
        .filter(|part| !part.trim().is_empty())
        .join(": ");
    if text.is_empty() {
        return None;
    }

    let mut children = Vec::with_capacity(2);
    if !field.icon.is_empty() {
        children.extend(ctx.icon(&field.icon));
    }
    children.push(InlineNode::text(text));
    Some(IRNode::paragraph(ctx.meta(&[]), children))
}

fn profile_link(ctx: &RenderContext<'_>, profile: &Profile) -> Option<IRNode> {
    let logo = InlineNode::Image {
        meta: ctx.meta(&[names::ICON]),
        src: format!("{}{}", BRAND_ICON_BASE, profile.icon),
        alt: profile.network.clone(),
        size: ctx.typography().font.size,
    };
    render_link(
        ctx,
        &profile.url,
        LinkOptions {
            label: Some(&profile.username),
            icon: LinkIcon::Custom(logo),
            class_names: &[names::SMALL],
            ..Default::default()
        },
    )
}
