//! Typed field access for section items.
//!
//! Each section type declares which optional sub-blocks apply to it by filling
//! in a [`FieldConfig`]. A field left as `None` is not applicable to that
//! section type and never renders, whatever the item happens to contain.

use vitae_schema::Url;

pub const DEFAULT_LEVEL: i32 = 0;
pub const DEFAULT_SUMMARY: &str = "";
pub const DEFAULT_KEYWORDS: &[String] = &[];

pub type SummaryAccessor<T> = fn(&T) -> Option<&str>;
pub type LevelAccessor<T> = fn(&T) -> Option<i32>;
pub type KeywordsAccessor<T> = fn(&T) -> Option<&[String]>;
pub type UrlAccessor<T> = fn(&T) -> Option<&Url>;

/// The optional fields a section type exposes to the generic renderer.
pub struct FieldConfig<T> {
    pub summary: Option<SummaryAccessor<T>>,
    pub level: Option<LevelAccessor<T>>,
    pub keywords: Option<KeywordsAccessor<T>>,
    pub url: Option<UrlAccessor<T>>,
}

impl<T> Default for FieldConfig<T> {
    fn default() -> Self {
        Self::none()
    }
}

impl<T> FieldConfig<T> {
    /// A configuration with no optional fields.
    pub fn none() -> Self {
        Self {
            summary: None,
            level: None,
            keywords: None,
            url: None,
        }
    }

    pub fn with_summary(mut self, get: SummaryAccessor<T>) -> Self {
        self.summary = Some(get);
        self
    }

    pub fn with_level(mut self, get: LevelAccessor<T>) -> Self {
        self.level = Some(get);
        self
    }

    pub fn with_keywords(mut self, get: KeywordsAccessor<T>) -> Self {
        self.keywords = Some(get);
        self
    }

    pub fn with_url(mut self, get: UrlAccessor<T>) -> Self {
        self.url = Some(get);
        self
    }

    /// Extracts every configured field of `item`.
    pub fn extract_all<'a>(&self, item: &'a T) -> ItemFields<'a> {
        ItemFields {
            summary: extract(item, self.summary, DEFAULT_SUMMARY),
            level: extract(item, self.level, DEFAULT_LEVEL),
            keywords: extract(item, self.keywords, DEFAULT_KEYWORDS),
            url: self.url.and_then(|get| get(item)),
        }
    }
}

/// Reads one optional field.
///
/// Returns `None` when the field is not configured for this section type.
/// Otherwise returns the item's value, or `default` when the item has none.
pub fn extract<'a, T, V>(
    item: &'a T,
    accessor: Option<fn(&'a T) -> Option<V>>,
    default: V,
) -> Option<V> {
    accessor.map(|get| get(item).unwrap_or(default))
}

/// The configured fields of one item, already defaulted.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ItemFields<'a> {
    pub summary: Option<&'a str>,
    pub level: Option<i32>,
    pub keywords: Option<&'a [String]>,
    pub url: Option<&'a Url>,
}

impl<'a> ItemFields<'a> {
    /// The summary, when configured and not blank.
    pub fn summary_to_render(&self) -> Option<&'a str> {
        self.summary.filter(|s| !s.trim().is_empty())
    }

    /// The level, when configured and positive.
    pub fn level_to_render(&self) -> Option<i32> {
        self.level.filter(|level| *level > 0)
    }

    /// The keywords, when configured and non-empty.
    pub fn keywords_to_render(&self) -> Option<&'a [String]> {
        self.keywords.filter(|keywords| !keywords.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use vitae_schema::{CustomItem, Project, Skill};

    fn skill(level: i32) -> Skill {
        Skill {
            id: "s".to_string(),
            name: "Rust".to_string(),
            level,
            keywords: vec!["async".to_string(), "no_std".to_string()],
            ..Default::default()
        }
    }

    #[test]
    fn test_unconfigured_field_is_none() {
        let item = skill(3);
        let get: Option<LevelAccessor<Skill>> = None;
        assert_eq!(extract(&item, get, DEFAULT_LEVEL), None);
    }

    #[test]
    fn test_configured_field_returns_value() {
        let item = skill(3);
        let config = FieldConfig::none().with_level(|s: &Skill| Some(s.level));
        assert_eq!(extract(&item, config.level, DEFAULT_LEVEL), Some(3));
    }

    #[test]
    fn test_missing_value_falls_back_to_default() {
        let project = Project::default();
        let config = FieldConfig::<Project>::none()
            .with_url(|p| p.url2.as_ref())
            .with_summary(|_| None)
            .with_keywords(|_| None)
            .with_level(|_| None);

        let fields = config.extract_all(&project);
        assert_eq!(fields.summary, Some(DEFAULT_SUMMARY));
        assert_eq!(fields.level, Some(DEFAULT_LEVEL));
        assert_eq!(fields.keywords, Some(DEFAULT_KEYWORDS));
        assert_eq!(fields.url, None);
    }

    #[test]
    fn test_extract_all_only_reads_configured_fields() {
        let item = CustomItem {
            level: 5,
            summary: "<p>Talk</p>".to_string(),
            keywords: vec!["rust".to_string()],
            ..Default::default()
        };
        let config =
            FieldConfig::<CustomItem>::none().with_summary(|c| Some(c.summary.as_str()));

        let fields = config.extract_all(&item);
        assert_eq!(fields.summary, Some("<p>Talk</p>"));
        assert_eq!(fields.level, None);
        assert_eq!(fields.keywords, None);
        assert_eq!(fields.level_to_render(), None);
    }

    #[test]
    fn test_render_filters() {
        let fields = ItemFields {
            summary: Some("  "),
            level: Some(0),
            keywords: Some(&[]),
            url: None,
        };
        assert_eq!(fields.summary_to_render(), None);
        assert_eq!(fields.level_to_render(), None);
        assert_eq!(fields.keywords_to_render(), None);

        let keywords = skill(2).keywords;
        let fields = ItemFields {
            summary: Some("<p>x</p>"),
            level: Some(2),
            keywords: Some(&keywords),
            url: None,
        };
        assert_eq!(fields.summary_to_render(), Some("<p>x</p>"));
        assert_eq!(fields.level_to_render(), Some(2));
        assert_eq!(fields.keywords_to_render().map(<[String]>::len), Some(2));
    }
}
