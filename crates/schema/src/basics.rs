use serde::{Deserialize, Serialize};

/// A hyperlink as stored in the document: a target and an optional label.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Url {
    pub href: String,
    pub label: String,
}

impl Url {
    pub fn new(href: impl Into<String>) -> Self {
        Self {
            href: href.into(),
            label: String::new(),
        }
    }

    pub fn labelled(href: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            href: href.into(),
            label: label.into(),
        }
    }
}

/// A free-form contact entry shown in the header, e.g. `Nationality: Dutch`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CustomField {
    pub id: String,
    pub icon: String,
    pub name: String,
    pub value: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PictureEffects {
    pub hidden: bool,
    pub border: bool,
    pub grayscale: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Picture {
    pub url: String,
    pub size: f32,
    pub effects: PictureEffects,
}

impl Default for Picture {
    fn default() -> Self {
        Self {
            url: String::new(),
            size: 64.0,
            effects: PictureEffects::default(),
        }
    }
}

impl Picture {
    /// True when there is an image to show and it has not been hidden.
    pub fn is_shown(&self) -> bool {
        !self.url.trim().is_empty() && !self.effects.hidden
    }
}

/// Identity and contact details of the resume owner.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Basics {
    pub name: String,
    pub headline: String,
    pub email: String,
    pub phone: String,
    pub location: String,
    pub url: Url,
    pub custom_fields: Vec<CustomField>,
    pub picture: Picture,
}
