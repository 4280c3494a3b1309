//! Vitae renders resume documents into an intermediate document tree.
//!
//! ```no_run
//! use vitae::{RendererBuilder, HtmlPolicy, Renderer};
//!
//! # fn main() -> Result<(), vitae::RenderError> {
//! let renderer = RendererBuilder::new()
//!     .with_html_policy(HtmlPolicy::Untrusted)
//!     .build();
//! let pages = renderer.render_json(&std::fs::read_to_string("resume.json")?)?;
//! println!("{}", Renderer::to_json(&pages)?);
//! # Ok(())
//! # }
//! ```

pub mod builder;
pub mod error;
pub mod renderer;

pub use builder::RendererBuilder;
pub use error::RenderError;
pub use renderer::Renderer;

pub use vitae_idf::{GridTrack, IRNode, InlineNode, NodeMetadata};
pub use vitae_schema::{Document, PageLayout, SectionKey};
pub use vitae_style::{Theme, Typography, theme_variables};
pub use vitae_template::{EmptySectionPolicy, HtmlPolicy, Leafish, PageTemplate, RenderOptions};
pub use vitae_types::{Color, ColorError, hex_to_color, hue_from_hex};
