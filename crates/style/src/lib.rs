pub mod border;
pub mod font;
pub mod stylesheet;
pub mod text;
pub mod theme;

pub use border::{Border, BorderStyle};
pub use font::FontWeight;
pub use stylesheet::{ElementStyle, Stylesheet};
pub use text::{TextAlign, TextDecoration};
pub use theme::{FontSettings, Theme, Typography, theme_variables};
