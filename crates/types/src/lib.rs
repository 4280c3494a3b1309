pub mod color;

pub use color::{Color, ColorError, hex_to_color, hue_from_hex};
