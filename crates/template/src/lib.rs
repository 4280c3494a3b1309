//! Resume templates.
//!
//! A template walks a [`vitae_schema::Document`] and a page layout and
//! produces an IDF tree. Section rendering is generic: each section type
//! contributes a [`FieldConfig`] naming its optional fields and a primary
//! template for the head of each item, and [`render_section`] does the rest.

pub mod context;
pub mod dispatch;
pub mod field;
pub mod header;
pub mod leafish;
pub mod link;
pub mod options;
pub mod primary;
pub mod rating;
pub mod section;

pub use context::RenderContext;
pub use dispatch::{render_key, render_section_key};
pub use field::{FieldConfig, ItemFields, extract};
pub use header::render_header;
pub use leafish::{Leafish, PageTemplate};
pub use link::{LinkIcon, LinkOptions, is_url, render_link, resolve_label};
pub use options::{EmptySectionPolicy, HtmlPolicy, RenderOptions};
pub use rating::{RATING_CELLS, rating_cells, render_rating};
pub use section::render_section;
