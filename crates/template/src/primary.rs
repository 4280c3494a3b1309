//! The type-specific head of each section item.
//!
//! Each function renders the fields that identify one record: a job's
//! position and company, a degree and its institution, and so on. Blank
//! fields produce no line at all.

use crate::context::RenderContext;
use crate::link::{LinkIcon, LinkOptions, is_url, render_link, text_or_link};
use itertools::Itertools;
use vitae_idf::{IRNode, InlineNode};
use vitae_schema::{
    Award, Certification, CustomItem, Education, Experience, Interest, Language, Project,
    Publication, Reference, Skill, Url, Volunteer,
};
use vitae_style::stylesheet::names;

pub const GITHUB_ICON_SRC: &str = "https://cdn.simpleicons.org/GitHub";
const ROW_CLASS: &str = "row";
const LANGUAGE_SEPARATOR: &str = " · ";

// --- Layout helpers ---

fn stack(ctx: &RenderContext<'_>, lines: impl IntoIterator<Item = Option<IRNode>>) -> IRNode {
    IRNode::block(ctx.meta(&[]), lines.into_iter().flatten().collect())
}

fn row(ctx: &RenderContext<'_>, class_names: &[&str], cells: impl IntoIterator<Item = Option<IRNode>>) -> Option<IRNode> {
    let children: Vec<IRNode> = cells.into_iter().flatten().collect();
    if children.is_empty() {
        return None;
    }
    let mut classes = vec![ROW_CLASS];
    classes.extend_from_slice(class_names);
    Some(IRNode::FlexContainer {
        meta: ctx.meta(&classes),
        children,
    })
}

/// `label`, linked to `url` when it is a valid target.
fn linked_line(ctx: &RenderContext<'_>, class_names: &[&str], label: &str, url: &Url) -> Option<IRNode> {
    if label.trim().is_empty() {
        return None;
    }
    Some(IRNode::paragraph(
        ctx.meta(class_names),
        vec![text_or_link(ctx, url, label)],
    ))
}

// --- Templates ---

pub fn experience(ctx: &RenderContext<'_>, item: &Experience) -> IRNode {
    let accent = [names::BOLD, names::PRIMARY];
    stack(
        ctx,
        [
            row(
                ctx,
                &[],
                [
                    ctx.line(&accent, &item.position),
                    ctx.line(&[names::EXTRA_SMALL], &item.date),
                ],
            ),
            row(
                ctx,
                &[],
                [
                    linked_line(ctx, &accent, &item.company, &item.url),
                    ctx.line(&[names::EXTRA_SMALL], &item.location),
                ],
            ),
        ],
    )
}

pub fn education(ctx: &RenderContext<'_>, item: &Education) -> IRNode {
    stack(
        ctx,
        [
            ctx.line(&[], &item.study_type),
            ctx.line(&[names::BOLD], &item.institution),
            render_link(
                ctx,
                &item.url,
                LinkOptions {
                    icon: LinkIcon::None,
                    rtl: true,
                    ..Default::default()
                },
            ),
            ctx.line(&[], &item.area),
            ctx.line(&[], &item.score),
        ],
    )
}

pub fn award(ctx: &RenderContext<'_>, item: &Award) -> IRNode {
    stack(
        ctx,
        [
            ctx.line(&[names::BOLD], &item.title),
            ctx.line(&[], &item.awarder),
            ctx.line(&[names::BOLD], &item.date),
        ],
    )
}

pub fn certification(ctx: &RenderContext<'_>, item: &Certification) -> IRNode {
    stack(
        ctx,
        [
            ctx.line(&[names::BOLD], &item.name),
            ctx.line(&[], &item.issuer),
            ctx.line(&[names::BOLD], &item.date),
        ],
    )
}

pub fn skill(ctx: &RenderContext<'_>, item: &Skill) -> IRNode {
    stack(
        ctx,
        [
            ctx.line(&[names::BOLD, names::PRIMARY], &item.name),
            ctx.line(&[], &item.description),
        ],
    )
}

pub fn interest(ctx: &RenderContext<'_>, item: &Interest) -> IRNode {
    stack(ctx, [ctx.line(&[names::BOLD], &item.name)])
}

pub fn publication(ctx: &RenderContext<'_>, item: &Publication) -> IRNode {
    stack(
        ctx,
        [
            ctx.line(&[names::BOLD], &item.name),
            ctx.line(&[], &item.publisher),
            ctx.line(&[names::BOLD], &item.date),
        ],
    )
}

pub fn volunteer(ctx: &RenderContext<'_>, item: &Volunteer) -> IRNode {
    stack(
        ctx,
        [
            ctx.line(&[names::BOLD], &item.organization),
            ctx.line(&[], &item.position),
            ctx.line(&[], &item.location),
            ctx.line(&[names::BOLD], &item.date),
        ],
    )
}

/// `name · description`, dropping whichever part is blank.
pub fn language(ctx: &RenderContext<'_>, item: &Language) -> IRNode {
    // Blank parts are dropped so a lone name never ends in a separator.
    let label = [item.name.as_str(), item.description.as_str()]
        .into_iter()
        .filter(|part| !part.trim().is_empty())
        .join(LANGUAGE_SEPARATOR);
    stack(ctx, [ctx.line(&[], &label)])
}

pub fn project(ctx: &RenderContext<'_>, item: &Project) -> IRNode {
    let mut title = Vec::with_capacity(2);
    if let Some(source) = item.url2.as_ref().filter(|url| is_url(&url.href)) {
        title.push(InlineNode::Hyperlink {
            meta: ctx.meta(&[names::LINK]),
            href: source.href.clone(),
            children: vec![InlineNode::Image {
                meta: ctx.meta(&[names::ICON]),
                src: GITHUB_ICON_SRC.to_string(),
                alt: "View GitHub".to_string(),
                size: ctx.typography().font.size,
            }],
        });
    }
    if !item.name.trim().is_empty() {
        title.push(text_or_link(ctx, &item.url, &item.name));
    }
    let title = (!title.is_empty())
        .then(|| IRNode::paragraph(ctx.meta(&[ROW_CLASS, names::ALIGN_RIGHT]), title));

    stack(
        ctx,
        [
            title,
            ctx.line(&[], &item.description),
            ctx.line(&[names::BOLD, names::PRIMARY], &item.date),
        ],
    )
}

pub fn reference(ctx: &RenderContext<'_>, item: &Reference) -> IRNode {
    stack(
        ctx,
        [
            ctx.line(&[names::BOLD], &item.name),
            ctx.line(&[], &item.description),
        ],
    )
}

pub fn custom(ctx: &RenderContext<'_>, item: &CustomItem) -> IRNode {
    stack(ctx, [linked_line(ctx, &[], &item.name, &item.url)])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::options::RenderOptions;
    use vitae_schema::Document;

    fn with_ctx(f: impl FnOnce(&RenderContext<'_>)) {
        let document = Document::default();
        let options = RenderOptions::default();
        f(&RenderContext::new(&document, &options));
    }

    #[test]
    fn test_experience_links_company_only_with_valid_url() {
        with_ctx(|ctx| {
            let mut job = Experience {
                company: "Acme".to_string(),
                position: "Engineer".to_string(),
                date: "2020 - 2024".to_string(),
                ..Default::default()
            };
            let node = experience(ctx, &job);
            assert!(node.hyperlinks().is_empty());
            assert_eq!(node.text_content(), "Engineer2020 - 2024Acme");

            job.url = Url::new("acme.test");
            assert!(experience(ctx, &job).hyperlinks().is_empty());

            job.url = Url::new("https://acme.test");
            let node = experience(ctx, &job);
            let links = node.hyperlinks();
            assert_eq!(links.len(), 1);
            assert_eq!(links[0].text_content(), "Acme");
        });
    }

    #[test]
    fn test_experience_skips_blank_rows() {
        with_ctx(|ctx| {
            let job = Experience {
                position: "Engineer".to_string(),
                ..Default::default()
            };
            assert_eq!(experience(ctx, &job).children().len(), 1);
        });
    }

    #[test]
    fn test_education_link_is_right_aligned_without_icon() {
        with_ctx(|ctx| {
            let degree = Education {
                study_type: "MSc".to_string(),
                institution: "TU Delft".to_string(),
                url: Url::labelled("https://tudelft.test", "tudelft.test"),
                ..Default::default()
            };
            let node = education(ctx, &degree);
            let link_row = node
                .children()
                .iter()
                .find(|c| c.has_class("link-row"))
                .unwrap();
            assert!(link_row.has_class(names::ALIGN_RIGHT));
            assert_eq!(link_row.inlines().len(), 1);
            assert_eq!(link_row.text_content(), "tudelft.test");
        });
    }

    #[test]
    fn test_language_joins_non_empty_parts() {
        with_ctx(|ctx| {
            let both = Language {
                name: "Dutch".to_string(),
                description: "Native".to_string(),
                ..Default::default()
            };
            assert_eq!(language(ctx, &both).text_content(), "Dutch · Native");

            let name_only = Language {
                name: "German".to_string(),
                ..Default::default()
            };
            assert_eq!(language(ctx, &name_only).text_content(), "German");
        });
    }

    #[test]
    fn test_project_source_link_uses_brand_icon() {
        with_ctx(|ctx| {
            let item = Project {
                name: "vitae".to_string(),
                url: Url::new("https://vitae.test"),
                url2: Some(Url::new("https://git.test/vitae")),
                ..Default::default()
            };
            let node = project(ctx, &item);
            let links = node.hyperlinks();
            assert_eq!(links.len(), 2);
            assert_eq!(links[0].href(), Some("https://git.test/vitae"));
            assert!(matches!(
                &links[0].children()[0],
                InlineNode::Image { src, size, .. } if src == GITHUB_ICON_SRC && *size == 14.0
            ));
            assert_eq!(links[1].text_content(), "vitae");
        });
    }

    #[test]
    fn test_custom_item_name_without_url_is_plain() {
        with_ctx(|ctx| {
            let item = CustomItem {
                name: "Talk".to_string(),
                ..Default::default()
            };
            let node = custom(ctx, &item);
            assert!(node.hyperlinks().is_empty());
            assert_eq!(node.text_content(), "Talk");
        });
    }
}
