//! The resume document model.
//!
//! Everything here deserializes from the camelCase JSON produced by the
//! resume editor. Missing fields fall back to empty values so that documents
//! written by older or newer editors still load.

pub mod basics;
pub mod document;
pub mod error;
pub mod items;
pub mod key;
pub mod metadata;
pub mod section;

pub use basics::{Basics, CustomField, Picture, PictureEffects, Url};
pub use document::{Document, Sections};
pub use error::SchemaError;
pub use items::{
    Award, Certification, CustomItem, Education, Experience, Interest, Language, Profile, Project,
    Publication, Reference, Skill, Volunteer,
};
pub use key::SectionKey;
pub use metadata::{Metadata, PageLayout};
pub use section::{Section, SectionItem, SummarySection};
pub use vitae_style::{FontSettings, Theme, Typography};

pub(crate) fn default_true() -> bool {
    true
}
