use crate::default_true;
use serde::{Deserialize, Serialize};
use std::num::NonZeroUsize;

fn default_columns() -> NonZeroUsize {
    NonZeroUsize::MIN
}

/// Behaviour shared by every record that can appear in a section.
pub trait SectionItem {
    fn id(&self) -> &str;
    fn visible(&self) -> bool;
}

/// A named, toggleable group of same-typed records laid out on a grid.
///
/// `columns` is the number of grid tracks; a zero value is rejected when the
/// document is deserialized.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Section<T> {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default = "default_true")]
    pub visible: bool,
    #[serde(default = "default_columns")]
    pub columns: NonZeroUsize,
    #[serde(default = "Vec::new")]
    pub items: Vec<T>,
}

impl<T> Default for Section<T> {
    fn default() -> Self {
        Self {
            id: String::new(),
            name: String::new(),
            visible: true,
            columns: default_columns(),
            items: Vec::new(),
        }
    }
}

impl<T> Section<T> {
    pub fn new(id: impl Into<String>, name: impl Into<String>, items: Vec<T>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            items,
            ..Self::default()
        }
    }

    /// Sets the grid track count; zero is raised to one.
    pub fn with_columns(mut self, columns: usize) -> Self {
        self.columns = NonZeroUsize::new(columns).unwrap_or(NonZeroUsize::MIN);
        self
    }

    pub fn hidden(mut self) -> Self {
        self.visible = false;
        self
    }
}

impl<T: SectionItem> Section<T> {
    /// Items with `visible` set, in their original order.
    pub fn visible_items(&self) -> impl Iterator<Item = &T> {
        self.items.iter().filter(|item| item.visible())
    }
}

/// The free-text summary shown in the header.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SummarySection {
    pub id: String,
    pub name: String,
    pub visible: bool,
    pub columns: NonZeroUsize,
    /// HTML-bearing rich text.
    pub content: String,
}

impl Default for SummarySection {
    fn default() -> Self {
        Self {
            id: "summary".to_string(),
            name: "Summary".to_string(),
            visible: true,
            columns: default_columns(),
            content: String::new(),
        }
    }
}
