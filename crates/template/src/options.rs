//! Knobs that change how a document is rendered.

use serde::{Deserialize, Serialize};

/// How HTML-bearing fields (summaries, the profile summary) are emitted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum HtmlPolicy {
    /// Pass the markup through verbatim as `IRNode::Html`. The producer of
    /// the document is responsible for sanitizing it.
    #[default]
    Trusted,
    /// Emit the raw source as plain text so no markup is ever interpreted.
    Untrusted,
}

/// Decides when a visible section counts as empty and renders nothing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum EmptySectionPolicy {
    /// Empty only when it has no items at all. A section whose items are all
    /// hidden still renders its title and an empty grid.
    #[default]
    AnyItems,
    /// Empty when none of its items is visible.
    VisibleItems,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct RenderOptions {
    pub html_policy: HtmlPolicy,
    pub empty_sections: EmptySectionPolicy,
    /// Reject layouts that place a section key in more than one column
    /// instead of logging a warning.
    pub strict_layout: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_options_deserialize_with_defaults() {
        let options: RenderOptions =
            serde_json::from_str(r#"{"htmlPolicy":"untrusted"}"#).unwrap();
        assert_eq!(options.html_policy, HtmlPolicy::Untrusted);
        assert_eq!(options.empty_sections, EmptySectionPolicy::AnyItems);
        assert!(!options.strict_layout);
    }

    #[test]
    fn test_empty_section_policy_names() {
        let policy: EmptySectionPolicy = serde_json::from_str("\"visible-items\"").unwrap();
        assert_eq!(policy, EmptySectionPolicy::VisibleItems);
    }
}
