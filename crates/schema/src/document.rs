use crate::basics::Basics;
use crate::error::SchemaError;
use crate::items::{
    Award, Certification, CustomItem, Education, Experience, Interest, Language, Profile, Project,
    Publication, Reference, Skill, Volunteer,
};
use crate::metadata::Metadata;
use crate::section::{Section, SummarySection};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;

/// Every section of a resume, keyed by type.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Sections {
    pub summary: SummarySection,
    pub profiles: Section<Profile>,
    pub experience: Section<Experience>,
    pub education: Section<Education>,
    pub awards: Section<Award>,
    pub certifications: Section<Certification>,
    pub skills: Section<Skill>,
    pub interests: Section<Interest>,
    pub publications: Section<Publication>,
    pub volunteer: Section<Volunteer>,
    pub languages: Section<Language>,
    pub projects: Section<Project>,
    pub references: Section<Reference>,
    /// User-defined sections by generated id.
    pub custom: BTreeMap<String, Section<CustomItem>>,
}

/// A complete resume: who, what, and how it should be laid out.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Document {
    pub basics: Basics,
    pub sections: Sections,
    pub metadata: Metadata,
}

impl Document {
    pub fn from_json(source: &str) -> Result<Self, SchemaError> {
        Ok(serde_json::from_str(source)?)
    }

    pub fn from_value(value: Value) -> Result<Self, SchemaError> {
        Ok(serde_json::from_value(value)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_empty_document_uses_defaults() {
        let document = Document::from_json("{}").unwrap();
        assert_eq!(document.metadata.layout.len(), 1);
        assert!(document.sections.experience.items.is_empty());
        assert!(document.sections.custom.is_empty());
    }

    #[test]
    fn test_custom_sections_by_id() {
        let document = Document::from_value(json!({
            "sections": {
                "custom": {
                    "abc123": {
                        "id": "abc123",
                        "name": "Talks",
                        "items": [{ "id": "t1", "name": "RustConf" }]
                    }
                }
            }
        }))
        .unwrap();
        let talks = &document.sections.custom["abc123"];
        assert_eq!(talks.name, "Talks");
        assert_eq!(talks.items[0].name, "RustConf");
    }

    #[test]
    fn test_invalid_columns_is_a_json_error() {
        let err = Document::from_value(json!({
            "sections": { "skills": { "columns": 0 } }
        }))
        .unwrap_err();
        assert!(matches!(err, SchemaError::Json(_)));
    }
}
