use std::fmt;

const CUSTOM_PREFIX: &str = "custom.";

/// A layout key naming the section to render in a column slot.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum SectionKey {
    Experience,
    Education,
    Awards,
    Certifications,
    Skills,
    Interests,
    Publications,
    Volunteer,
    Languages,
    Projects,
    References,
    /// A user-defined section, addressed as `custom.<id>`.
    Custom(String),
}

impl SectionKey {
    /// Parses a layout key.
    ///
    /// Returns `None` for keys the templates do not render, such as
    /// `summary` and `profiles` (which live in the header) or keys written by
    /// a newer editor. For `custom.<id>` the id is the segment between the
    /// first and second dot.
    pub fn parse(key: &str) -> Option<SectionKey> {
        let parsed = match key {
            "experience" => SectionKey::Experience,
            "education" => SectionKey::Education,
            "awards" => SectionKey::Awards,
            "certifications" => SectionKey::Certifications,
            "skills" => SectionKey::Skills,
            "interests" => SectionKey::Interests,
            "publications" => SectionKey::Publications,
            "volunteer" => SectionKey::Volunteer,
            "languages" => SectionKey::Languages,
            "projects" => SectionKey::Projects,
            "references" => SectionKey::References,
            _ => {
                let rest = key.strip_prefix(CUSTOM_PREFIX)?;
                let id = rest.split('.').next().unwrap_or_default();
                SectionKey::Custom(id.to_string())
            }
        };
        Some(parsed)
    }

    pub fn as_str(&self) -> &str {
        match self {
            SectionKey::Experience => "experience",
            SectionKey::Education => "education",
            SectionKey::Awards => "awards",
            SectionKey::Certifications => "certifications",
            SectionKey::Skills => "skills",
            SectionKey::Interests => "interests",
            SectionKey::Publications => "publications",
            SectionKey::Volunteer => "volunteer",
            SectionKey::Languages => "languages",
            SectionKey::Projects => "projects",
            SectionKey::References => "references",
            SectionKey::Custom(id) => id,
        }
    }
}

impl fmt::Display for SectionKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SectionKey::Custom(id) => write!(f, "{}{}", CUSTOM_PREFIX, id),
            other => f.write_str(other.as_str()),
        }
    }
}
