//! Color values and hex color conversions.
//!
//! Two families of functions live here:
//!
//! - [`Color::from_hex`] is a strict parser used by the stylesheet. It rejects
//!   anything that is not `#RGB` or `#RRGGBB`.
//! - [`hex_to_color`] and [`hue_from_hex`] are lenient converters used for
//!   theme variables. They never fail: a channel that cannot be read becomes
//!   `NaN` and flows through into the output unchanged.

use serde::{Deserialize, Deserializer, Serialize, de};
use std::fmt;
use std::hash::{Hash, Hasher};
use std::num::ParseIntError;
use std::ops::Range;
use std::str::FromStr;
use thiserror::Error;

const RED: Range<usize> = 1..3;
const GREEN: Range<usize> = 3..5;
const BLUE: Range<usize> = 5..7;

fn default_one() -> f32 {
    1.0
}

fn is_one(num: &f32) -> bool {
    *num == 1.0
}

/// Errors returned by the strict hex parser.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ColorError {
    #[error("Color must start with #, got: {0}")]
    MissingHash(String),

    #[error("Invalid hex color length: expected 3 or 6, got {0}")]
    InvalidLength(usize),

    #[error("Invalid {component} component: {source}")]
    InvalidComponent {
        component: &'static str,
        #[source]
        source: ParseIntError,
    },
}

#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    #[serde(skip_serializing_if = "is_one", default = "default_one")]
    pub a: f32,
}

impl Eq for Color {}

impl Hash for Color {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.r.hash(state);
        self.g.hash(state);
        self.b.hash(state);
        self.a.to_bits().hash(state);
    }
}

impl Default for Color {
    fn default() -> Self {
        Self { r: 0, g: 0, b: 0, a: 1.0 }
    }
}

impl Color {
    pub fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    /// Returns a copy of this color with the given alpha.
    pub fn with_alpha(&self, a: f32) -> Self {
        Self { a, ..self.clone() }
    }

    /// Parse a hex color string (#RGB or #RRGGBB format).
    pub fn from_hex(s: &str) -> Result<Color, ColorError> {
        let s = s.trim();
        let hex = s
            .strip_prefix('#')
            .ok_or_else(|| ColorError::MissingHash(s.to_string()))?;

        let component = |digits: &str, component: &'static str| {
            u8::from_str_radix(digits, 16)
                .map_err(|source| ColorError::InvalidComponent { component, source })
        };

        if !hex.is_ascii() {
            return Err(ColorError::InvalidLength(hex.chars().count()));
        }

        match hex.len() {
            3 => {
                // #RGB format - expand each digit
                let r = component(hex[0..1].repeat(2).as_str(), "red")?;
                let g = component(hex[1..2].repeat(2).as_str(), "green")?;
                let b = component(hex[2..3].repeat(2).as_str(), "blue")?;
                Ok(Color::rgb(r, g, b))
            }
            6 => {
                let r = component(&hex[0..2], "red")?;
                let g = component(&hex[2..4], "green")?;
                let b = component(&hex[4..6], "blue")?;
                Ok(Color::rgb(r, g, b))
            }
            len => Err(ColorError::InvalidLength(len)),
        }
    }
}

impl FromStr for Color {
    type Err = ColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Color::from_hex(s)
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if is_one(&self.a) {
            write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
        } else {
            write!(f, "rgba({}, {}, {}, {})", self.r, self.g, self.b, self.a)
        }
    }
}

impl<'de> Deserialize<'de> for Color {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum ColorDef {
            Str(String),
            Map {
                r: u8,
                g: u8,
                b: u8,
                #[serde(default = "default_one")]
                a: f32,
            },
        }

        match ColorDef::deserialize(deserializer)? {
            ColorDef::Str(s) => Self::from_hex(&s).map_err(de::Error::custom),
            ColorDef::Map { r, g, b, a } => Ok(Color { r, g, b, a }),
        }
    }
}

/// Reads one two-digit channel of a `#RRGGBB` string as 0-255, or `NaN`
/// when the digits are missing or not hexadecimal.
fn channel(hex: &str, range: Range<usize>) -> f64 {
    hex.get(range)
        .and_then(|digits| u8::from_str_radix(digits, 16).ok())
        .map_or(f64::NAN, f64::from)
}

/// Converts `#RRGGBB` into a CSS `rgb(r, g, b)` string, or `rgba(r, g, b, a)`
/// when `alpha` is non-zero.
///
/// Malformed input is not rejected: unreadable channels print as `NaN`.
pub fn hex_to_color(hex: &str, alpha: f64) -> String {
    let r = channel(hex, RED);
    let g = channel(hex, GREEN);
    let b = channel(hex, BLUE);

    if alpha != 0.0 && !alpha.is_nan() {
        format!("rgba({r}, {g}, {b}, {alpha})")
    } else {
        format!("rgb({r}, {g}, {b})")
    }
}

/// Returns the HSL hue of a `#RRGGBB` color in degrees, within `[0, 360)`.
///
/// Achromatic colors have hue 0. When two channels share the maximum, red
/// takes precedence over green and green over blue. Malformed input yields
/// `NaN`.
pub fn hue_from_hex(hex: &str) -> f64 {
    let r = channel(hex, RED) / 255.0;
    let g = channel(hex, GREEN) / 255.0;
    let b = channel(hex, BLUE) / 255.0;

    if r.is_nan() || g.is_nan() || b.is_nan() {
        return f64::NAN;
    }

    let min = r.min(g).min(b);
    let max = r.max(g).max(b);
    let delta = max - min;

    let hue = if delta == 0.0 {
        0.0
    } else if max == r {
        (g - b) / delta
    } else if max == g {
        2.0 + (b - r) / delta
    } else {
        4.0 + (r - g) / delta
    };

    (hue * 60.0 + 360.0) % 360.0
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_hue(hex: &str, expected: f64) {
        let hue = hue_from_hex(hex);
        assert!(
            (hue - expected).abs() < 1e-9,
            "hue of {} was {}, expected {}",
            hex,
            hue,
            expected
        );
    }

    #[test]
    fn test_hex_to_color_opaque() {
        assert_eq!(hex_to_color("#112233", 0.0), "rgb(17, 34, 51)");
        assert_eq!(hex_to_color("#FFFFFF", 0.0), "rgb(255, 255, 255)");
    }

    #[test]
    fn test_hex_to_color_with_alpha() {
        assert_eq!(hex_to_color("#112233", 0.5), "rgba(17, 34, 51, 0.5)");
        assert_eq!(hex_to_color("#000000", 1.0), "rgba(0, 0, 0, 1)");
    }

    #[test]
    fn test_hex_to_color_nan_alpha_is_opaque() {
        assert_eq!(hex_to_color("#112233", f64::NAN), "rgb(17, 34, 51)");
    }

    #[test]
    fn test_hex_to_color_malformed_propagates_nan() {
        assert_eq!(hex_to_color("#1122", 0.0), "rgb(17, 34, NaN)");
        assert_eq!(hex_to_color("#zz2233", 0.0), "rgb(NaN, 34, 51)");
        assert_eq!(hex_to_color("", 0.3), "rgba(NaN, NaN, NaN, 0.3)");
    }

    #[test]
    fn test_hue_primaries() {
        assert_hue("#FF0000", 0.0);
        assert_hue("#00FF00", 120.0);
        assert_hue("#0000FF", 240.0);
    }

    #[test]
    fn test_hue_achromatic() {
        assert_hue("#FFFFFF", 0.0);
        assert_hue("#808080", 0.0);
        assert_hue("#000000", 0.0);
    }

    #[test]
    fn test_hue_negative_sector_wraps() {
        // Magenta-ish red: red is max and blue > green, so the raw hue is negative.
        assert_hue("#FF00FF", 300.0);
        assert_hue("#FF0080", 360.0 - 60.0 * (128.0 / 255.0));
    }

    #[test]
    fn test_hue_tie_break_prefers_red_then_green() {
        // Red and green tie at the max: the red branch gives (g - b) / delta = 1.
        assert_hue("#FFFF00", 60.0);
        // Green and blue tie: the green branch gives 2 + (b - r) / delta = 3.
        assert_hue("#00FFFF", 180.0);
    }

    #[test]
    fn test_hue_malformed_is_nan() {
        assert!(hue_from_hex("#12").is_nan());
        assert!(hue_from_hex("not a color").is_nan());
    }

    #[test]
    fn test_from_hex_strict() {
        assert_eq!(Color::from_hex("#112233").unwrap(), Color::rgb(17, 34, 51));
        assert_eq!(Color::from_hex("#fff").unwrap(), Color::rgb(255, 255, 255));
        assert_eq!(
            Color::from_hex("112233"),
            Err(ColorError::MissingHash("112233".to_string()))
        );
        assert_eq!(Color::from_hex("#1122"), Err(ColorError::InvalidLength(4)));
        assert!(matches!(
            Color::from_hex("#11zz33"),
            Err(ColorError::InvalidComponent { component: "green", .. })
        ));
    }

    #[test]
    fn test_color_deserialize_from_hex_and_map() {
        let from_hex: Color = serde_json::from_str("\"#0a0b0c\"").unwrap();
        assert_eq!(from_hex, Color::rgb(10, 11, 12));

        let from_map: Color = serde_json::from_str(r#"{"r":1,"g":2,"b":3,"a":0.5}"#).unwrap();
        assert_eq!(from_map, Color::rgb(1, 2, 3).with_alpha(0.5));
    }

    #[test]
    fn test_color_display() {
        assert_eq!(Color::rgb(17, 34, 51).to_string(), "#112233");
        assert_eq!(
            Color::rgb(17, 34, 51).with_alpha(0.25).to_string(),
            "rgba(17, 34, 51, 0.25)"
        );
    }
}
