//! Document-level theme and typography settings.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use vitae_types::{hex_to_color, hue_from_hex};

/// Alpha applied to the primary color for tinted backgrounds.
const PRIMARY_TINT_ALPHA: f64 = 0.1;

/// The three theme colors of a document, as `#RRGGBB` strings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default, rename_all = "camelCase")]
pub struct Theme {
    pub background: String,
    pub text: String,
    pub primary: String,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            background: "#ffffff".to_string(),
            text: "#000000".to_string(),
            primary: "#dc2626".to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct FontSettings {
    pub family: String,
    pub size: f32,
}

impl Default for FontSettings {
    fn default() -> Self {
        Self {
            family: "IBM Plex Serif".to_string(),
            size: 14.0,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct Typography {
    pub font: FontSettings,
    pub line_height: f32,
    pub hide_icons: bool,
    pub underline_links: bool,
}

impl Default for Typography {
    fn default() -> Self {
        Self {
            font: FontSettings::default(),
            line_height: 1.5,
            hide_icons: false,
            underline_links: true,
        }
    }
}

/// Builds the CSS custom properties a host page needs to paint a themed
/// document.
///
/// Values come from the lenient converters, so a malformed theme color shows
/// up as `NaN` in the output rather than failing.
pub fn theme_variables(theme: &Theme) -> BTreeMap<String, String> {
    BTreeMap::from([
        ("--color-primary".to_string(), theme.primary.clone()),
        (
            "--color-primary-rgb".to_string(),
            hex_to_color(&theme.primary, 0.0),
        ),
        (
            "--color-primary-tint".to_string(),
            hex_to_color(&theme.primary, PRIMARY_TINT_ALPHA),
        ),
        ("--color-text".to_string(), hex_to_color(&theme.text, 0.0)),
        (
            "--color-background".to_string(),
            hex_to_color(&theme.background, 0.0),
        ),
        (
            "--primary-hue".to_string(),
            format!("{}", hue_from_hex(&theme.primary).round()),
        ),
    ])
}
