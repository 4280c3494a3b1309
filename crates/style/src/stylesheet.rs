//! Defines the element style record and the named stylesheet derived from a
//! document's theme.

use super::border::Border;
use super::font::FontWeight;
use super::text::{TextAlign, TextDecoration};
use super::theme::{Theme, Typography};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::sync::Arc;
use vitae_types::Color;

/// Style names registered by [`Stylesheet::from_theme`].
pub mod names {
    pub const PAGE: &str = "page";
    pub const NAME: &str = "name";
    pub const HEADLINE: &str = "headline";
    pub const SECTION_TITLE: &str = "section-title";
    pub const PRIMARY: &str = "primary";
    pub const BOLD: &str = "bold";
    pub const SMALL: &str = "small";
    pub const EXTRA_SMALL: &str = "extra-small";
    pub const ICON: &str = "icon";
    pub const LINK: &str = "link";
    pub const RATING_CELL: &str = "rating-cell";
    pub const RATING_CELL_FILLED: &str = "rating-cell-filled";
    pub const ALIGN_RIGHT: &str = "align-right";
}

#[derive(Debug, Clone, Default)]
pub struct Stylesheet {
    /// A map of all named element styles.
    pub styles: HashMap<String, Arc<ElementStyle>>,
}

impl Stylesheet {
    /// Derives the named styles used by the resume templates.
    ///
    /// Theme colors that are not valid hex are logged and left unset on the
    /// styles that would have used them.
    pub fn from_theme(theme: &Theme, typography: &Typography) -> Self {
        let primary = parse_theme_color("primary", &theme.primary);
        let text = parse_theme_color("text", &theme.text);
        let background = parse_theme_color("background", &theme.background);
        let size = typography.font.size;

        let mut styles = HashMap::new();
        let mut add = |name: &str, style: ElementStyle| {
            styles.insert(name.to_string(), Arc::new(style));
        };

        add(
            names::PAGE,
            ElementStyle {
                font_family: Some(typography.font.family.clone()),
                font_size: Some(size),
                line_height: Some(typography.line_height),
                color: text,
                background_color: background,
                ..Default::default()
            },
        );
        add(
            names::NAME,
            ElementStyle {
                font_size: Some(size * 4.0),
                font_weight: Some(FontWeight::Bold),
                ..Default::default()
            },
        );
        add(
            names::HEADLINE,
            ElementStyle {
                font_size: Some(size * 1.25),
                font_weight: Some(FontWeight::Medium),
                color: primary.clone(),
                ..Default::default()
            },
        );
        add(
            names::SECTION_TITLE,
            ElementStyle {
                font_size: Some(size * 1.5),
                text_align: Some(TextAlign::Left),
                color: primary.clone(),
                ..Default::default()
            },
        );
        add(
            names::PRIMARY,
            ElementStyle {
                color: primary.clone(),
                ..Default::default()
            },
        );
        add(
            names::BOLD,
            ElementStyle {
                font_weight: Some(FontWeight::Bold),
                ..Default::default()
            },
        );
        add(
            names::SMALL,
            ElementStyle {
                font_size: Some(size * 0.875),
                ..Default::default()
            },
        );
        add(
            names::EXTRA_SMALL,
            ElementStyle {
                font_size: Some(size * 0.75),
                ..Default::default()
            },
        );
        add(
            names::ICON,
            ElementStyle {
                color: primary.clone(),
                ..Default::default()
            },
        );
        add(
            names::LINK,
            ElementStyle {
                text_decoration: typography
                    .underline_links
                    .then_some(TextDecoration::Underline),
                ..Default::default()
            },
        );
        add(
            names::RATING_CELL,
            ElementStyle {
                width: Some(24.0),
                height: Some(12.0),
                border: primary.clone().map(|color| Border::solid(2.0, color)),
                ..Default::default()
            },
        );
        add(
            names::RATING_CELL_FILLED,
            ElementStyle {
                background_color: primary,
                ..Default::default()
            },
        );
        add(
            names::ALIGN_RIGHT,
            ElementStyle {
                text_align: Some(TextAlign::Right),
                ..Default::default()
            },
        );

        Self { styles }
    }

    /// Looks up a style by its class name.
    pub fn get_style_by_class_name(&self, class_name: &str) -> Option<&Arc<ElementStyle>> {
        self.styles.get(class_name)
    }

    /// Resolves class names to their styles, skipping names with no entry.
    pub fn resolve<S: AsRef<str>>(&self, class_names: &[S]) -> Vec<Arc<ElementStyle>> {
        class_names
            .iter()
            .filter_map(|name| self.get_style_by_class_name(name.as_ref()))
            .cloned()
            .collect()
    }
}

fn parse_theme_color(role: &str, value: &str) -> Option<Color> {
    match Color::from_hex(value) {
        Ok(color) => Some(color),
        Err(err) => {
            log::warn!("Ignoring invalid {} theme color '{}': {}", role, value, err);
            None
        }
    }
}

#[derive(Deserialize, Serialize, Default, Clone, PartialEq, Debug)]
#[serde(rename_all = "camelCase")]
pub struct ElementStyle {
    // Font & Text
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font_family: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font_size: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font_weight: Option<FontWeight>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub line_height: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text_align: Option<TextAlign>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<Color>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text_decoration: Option<TextDecoration>,

    // Box Model
    #[serde(skip_serializing_if = "Option::is_none")]
    pub background_color: Option<Color>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub border: Option<Border>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub width: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub height: Option<f32>,
}
