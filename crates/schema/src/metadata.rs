use crate::error::SchemaError;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use vitae_style::{Theme, Typography};

/// The columns of one page, each an ordered list of section keys.
///
/// The page template reads the first column as the main column and the
/// second as the sidebar; further columns are ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PageLayout {
    pub columns: Vec<Vec<String>>,
}

impl PageLayout {
    pub fn new(main: Vec<String>, sidebar: Vec<String>) -> Self {
        Self {
            columns: vec![main, sidebar],
        }
    }

    pub fn main(&self) -> &[String] {
        self.columns.first().map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn sidebar(&self) -> &[String] {
        self.columns.get(1).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Checks that no key is placed in more than one column.
    pub fn validate(&self, page: usize) -> Result<(), SchemaError> {
        let mut seen = HashSet::new();
        for key in self.columns.iter().flatten() {
            if !seen.insert(key.as_str()) {
                return Err(SchemaError::DuplicateSectionKey {
                    key: key.clone(),
                    page,
                });
            }
        }
        Ok(())
    }
}

fn default_layout() -> Vec<PageLayout> {
    let keys = |names: &[&str]| -> Vec<String> { names.iter().map(|k| k.to_string()).collect() };
    vec![PageLayout::new(
        keys(&[
            "profiles",
            "summary",
            "experience",
            "education",
            "projects",
            "volunteer",
            "references",
        ]),
        keys(&[
            "skills",
            "interests",
            "certifications",
            "awards",
            "publications",
            "languages",
        ]),
    )]
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Metadata {
    /// One entry per page.
    pub layout: Vec<PageLayout>,
    pub theme: Theme,
    pub typography: Typography,
}

impl Default for Metadata {
    fn default() -> Self {
        Self {
            layout: default_layout(),
            theme: Theme::default(),
            typography: Typography::default(),
        }
    }
}
