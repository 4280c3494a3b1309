//! Maps layout keys to their section data, field configuration and primary
//! template.

use crate::context::RenderContext;
use crate::field::FieldConfig;
use crate::primary;
use crate::section::render_section;
use vitae_idf::IRNode;
use vitae_schema::{
    Award, Certification, CustomItem, Education, Experience, Interest, Language, Project,
    Publication, Reference, SectionKey, Skill, Volunteer,
};

// --- Field configurations ---

pub fn experience_fields() -> FieldConfig<Experience> {
    FieldConfig::<Experience>::none()
        .with_url(|i| Some(&i.url))
        .with_summary(|i| Some(i.summary.as_str()))
}

pub fn education_fields() -> FieldConfig<Education> {
    FieldConfig::<Education>::none()
        .with_url(|i| Some(&i.url))
        .with_summary(|i| Some(i.summary.as_str()))
}

pub fn award_fields() -> FieldConfig<Award> {
    FieldConfig::<Award>::none()
        .with_url(|i| Some(&i.url))
        .with_summary(|i| Some(i.summary.as_str()))
}

pub fn certification_fields() -> FieldConfig<Certification> {
    FieldConfig::<Certification>::none()
        .with_url(|i| Some(&i.url))
        .with_summary(|i| Some(i.summary.as_str()))
}

pub fn skill_fields() -> FieldConfig<Skill> {
    FieldConfig::<Skill>::none()
        .with_level(|i| Some(i.level))
        .with_keywords(|i| Some(i.keywords.as_slice()))
}

pub fn interest_fields() -> FieldConfig<Interest> {
    FieldConfig::<Interest>::none().with_keywords(|i| Some(i.keywords.as_slice()))
}

pub fn publication_fields() -> FieldConfig<Publication> {
    FieldConfig::<Publication>::none()
        .with_url(|i| Some(&i.url))
        .with_summary(|i| Some(i.summary.as_str()))
}

pub fn volunteer_fields() -> FieldConfig<Volunteer> {
    FieldConfig::<Volunteer>::none()
        .with_url(|i| Some(&i.url))
        .with_summary(|i| Some(i.summary.as_str()))
}

pub fn language_fields() -> FieldConfig<Language> {
    FieldConfig::<Language>::none().with_level(|i| Some(i.level))
}

pub fn project_fields() -> FieldConfig<Project> {
    FieldConfig::<Project>::none()
        .with_url(|i| Some(&i.url))
        .with_summary(|i| Some(i.summary.as_str()))
        .with_keywords(|i| Some(i.keywords.as_slice()))
}

pub fn reference_fields() -> FieldConfig<Reference> {
    FieldConfig::<Reference>::none()
        .with_url(|i| Some(&i.url))
        .with_summary(|i| Some(i.summary.as_str()))
}

pub fn custom_fields() -> FieldConfig<CustomItem> {
    FieldConfig::<CustomItem>::none()
        .with_url(|i| Some(&i.url))
        .with_summary(|i| Some(i.summary.as_str()))
        .with_keywords(|i| Some(i.keywords.as_slice()))
}

// --- Dispatch ---

/// Renders the section a raw layout key names.
///
/// Keys that do not parse, and custom keys whose section does not exist,
/// render nothing.
pub fn render_section_key(ctx: &RenderContext<'_>, key: &str) -> Option<IRNode> {
    SectionKey::parse(key).and_then(|key| render_key(ctx, &key))
}

pub fn render_key(ctx: &RenderContext<'_>, key: &SectionKey) -> Option<IRNode> {
    let sections = &ctx.document().sections;
    match key {
        SectionKey::Experience => render_section(
            ctx,
            &sections.experience,
            &experience_fields(),
            primary::experience,
        ),
        SectionKey::Education => render_section(
            ctx,
            &sections.education,
            &education_fields(),
            primary::education,
        ),
        SectionKey::Awards => {
            render_section(ctx, &sections.awards, &award_fields(), primary::award)
        }
        SectionKey::Certifications => render_section(
            ctx,
            &sections.certifications,
            &certification_fields(),
            primary::certification,
        ),
        SectionKey::Skills => {
            render_section(ctx, &sections.skills, &skill_fields(), primary::skill)
        }
        SectionKey::Interests => render_section(
            ctx,
            &sections.interests,
            &interest_fields(),
            primary::interest,
        ),
        SectionKey::Publications => render_section(
            ctx,
            &sections.publications,
            &publication_fields(),
            primary::publication,
        ),
        SectionKey::Volunteer => render_section(
            ctx,
            &sections.volunteer,
            &volunteer_fields(),
            primary::volunteer,
        ),
        SectionKey::Languages => render_section(
            ctx,
            &sections.languages,
            &language_fields(),
            primary::language,
        ),
        SectionKey::Projects => render_section(
            ctx,
            &sections.projects,
            &project_fields(),
            primary::project,
        ),
        SectionKey::References => render_section(
            ctx,
            &sections.references,
            &reference_fields(),
            primary::reference,
        ),
        SectionKey::Custom(id) => {
            let section = sections.custom.get(id)?;
            render_section(ctx, section, &custom_fields(), primary::custom)
        }
    }
}
