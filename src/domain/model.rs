use serde::{Deserialize, Deserializer, Serialize};
use std::collections::HashMap;

pub const DEFAULT_GROUP: &str = "Other";

fn null_as_empty<'de, D>(deserializer: D) -> std::result::Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

/// One catalog entry. Missing or null text fields load as empty strings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceRecord {
    #[serde(default, deserialize_with = "null_as_empty")]
    pub title: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub short_desc: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub long_desc: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub group: Option<String>,
}

impl ServiceRecord {
    /// Category this record belongs to; absent or blank groups fall back to `"Other"`.
    pub fn group_name(&self) -> &str {
        match self.group.as_deref() {
            Some(group) if !group.is_empty() => group,
            _ => DEFAULT_GROUP,
        }
    }

    pub fn text_fields(&self) -> [&str; 3] {
        [&self.title, &self.short_desc, &self.long_desc]
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Category {
    pub name: String,
    pub services: Vec<ServiceRecord>,
    pub display_order_rank: usize,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OrderedCatalog {
    pub categories: Vec<Category>,
}

impl OrderedCatalog {
    pub fn category(&self, name: &str) -> Option<&Category> {
        self.categories.iter().find(|c| c.name == name)
    }

    pub fn record_count(&self) -> usize {
        self.categories.iter().map(|c| c.services.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }
}

/// How multiple query tokens combine into a record verdict.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
#[serde(rename_all = "lowercase")]
pub enum MatchMode {
    /// A single token found in any field is enough.
    #[default]
    Any,
    /// Every token must be found in at least one field.
    All,
}

/// Trusted markup wrapped around highlighted substrings; never escaped.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HighlightMarker {
    pub open: String,
    pub close: String,
}

impl HighlightMarker {
    pub fn new(open: impl Into<String>, close: impl Into<String>) -> Self {
        Self {
            open: open.into(),
            close: close.into(),
        }
    }
}

impl Default for HighlightMarker {
    fn default() -> Self {
        Self::new(r#"<span class="highlight">"#, "</span>")
    }
}

/// Category name to opaque icon identifier, with a fallback for unknown names.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IconMap {
    icons: HashMap<String, String>,
    fallback: String,
}

impl IconMap {
    pub fn new(icons: HashMap<String, String>, fallback: impl Into<String>) -> Self {
        Self {
            icons,
            fallback: fallback.into(),
        }
    }

    pub fn icon_for(&self, category: &str) -> &str {
        self.icons
            .get(category)
            .map(String::as_str)
            .unwrap_or(&self.fallback)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchResult {
    pub record: ServiceRecord,
    pub category: String,
    pub matched: bool,
    pub highlighted_title: String,
    pub highlighted_short_desc: String,
    pub highlighted_long_desc: String,
}

/// Results of one query, in catalog order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchOutcome {
    pub query: String,
    pub tokens: Vec<String>,
    /// False for the empty query: everything is shown, nothing is highlighted.
    pub filtered: bool,
    pub results: Vec<SearchResult>,
    pub match_count: usize,
    pub category_match_count: usize,
}

impl SearchOutcome {
    pub fn summary(&self) -> Option<String> {
        self.filtered.then(|| {
            format!(
                "{} services found in {} categories",
                self.match_count, self.category_match_count
            )
        })
    }

    pub fn is_empty_result(&self) -> bool {
        self.filtered && self.match_count == 0
    }

    /// Visible results grouped by category, skipping categories with no match.
    pub fn categories(&self) -> Vec<(&str, Vec<&SearchResult>)> {
        let mut grouped: Vec<(&str, Vec<&SearchResult>)> = Vec::new();
        for result in self.results.iter().filter(|r| r.matched) {
            match grouped.last_mut() {
                Some((name, members)) if *name == result.category => members.push(result),
                _ => grouped.push((result.category.as_str(), vec![result])),
            }
        }
        grouped
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_and_null_fields_degrade_to_defaults() {
        let records: Vec<ServiceRecord> = serde_json::from_str(
            r#"[{"title": "Virtual Server", "long_desc": null, "group": null},
                {"title": "Bucket", "group": ""}]"#,
        )
        .unwrap();

        assert_eq!(records[0].short_desc, "");
        assert_eq!(records[0].long_desc, "");
        assert_eq!(records[0].group_name(), "Other");
        assert_eq!(records[1].group_name(), "Other");
    }

    #[test]
    fn test_icon_map_falls_back_for_unknown_category() {
        let mut icons = HashMap::new();
        icons.insert("Storage".to_string(), "fas fa-hdd".to_string());
        let map = IconMap::new(icons, "fas fa-folder");

        assert_eq!(map.icon_for("Storage"), "fas fa-hdd");
        assert_eq!(map.icon_for("Quantum"), "fas fa-folder");
    }

    #[test]
    fn test_wrong_field_type_is_rejected() {
        let parsed = serde_json::from_str::<Vec<ServiceRecord>>(r#"[{"title": 42}]"#);
        assert!(parsed.is_err());
    }
}
