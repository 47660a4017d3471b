//! Keyword table used to decide which policy announcements are on-topic.
//!
//! One table maps a category to `(keyword, locale)` rules. A feed declares
//! its locale, and only the rules for that locale are applied to its entries.
//! Chinese rules match as exact substrings; English rules ignore case.

use std::collections::{BTreeMap, HashSet};
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::types::Category;
use crate::ConfigError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    Zh,
    En,
}

impl Locale {
    fn contains(self, haystack: &str, keyword: &str) -> bool {
        match self {
            Locale::Zh => haystack.contains(keyword),
            Locale::En => haystack.to_lowercase().contains(&keyword.to_lowercase()),
        }
    }
}

impl std::fmt::Display for Locale {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Locale::Zh => write!(f, "zh"),
            Locale::En => write!(f, "en"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeywordRule {
    pub keyword: String,
    pub locale: Locale,
}

impl KeywordRule {
    fn new(keyword: &str, locale: Locale) -> Self {
        Self {
            keyword: keyword.to_string(),
            locale,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct KeywordTable(BTreeMap<Category, Vec<KeywordRule>>);

impl Default for KeywordTable {
    fn default() -> Self {
        let policy = vec![
            KeywordRule::new("干细胞", Locale::Zh),
            KeywordRule::new("免疫细胞", Locale::Zh),
            KeywordRule::new("细胞治疗", Locale::Zh),
            KeywordRule::new("基因治疗", Locale::Zh),
            KeywordRule::new("CAR-T", Locale::Zh),
            KeywordRule::new("stem cell", Locale::En),
            KeywordRule::new("immune cell", Locale::En),
            KeywordRule::new("cell therapy", Locale::En),
            KeywordRule::new("gene therapy", Locale::En),
            KeywordRule::new("CAR-T", Locale::En),
        ];
        Self(BTreeMap::from([(Category::Policy, policy)]))
    }
}

impl KeywordTable {
    /// Rules configured for `category` in `locale`.
    pub fn rules(&self, category: Category, locale: Locale) -> impl Iterator<Item = &KeywordRule> {
        self.0
            .get(&category)
            .into_iter()
            .flatten()
            .filter(move |rule| rule.locale == locale)
    }

    /// True when any `(category, locale)` keyword occurs in one of `fields`.
    ///
    /// A category with no rules for the locale matches nothing.
    #[must_use]
    pub fn matches(&self, category: Category, locale: Locale, fields: &[&str]) -> bool {
        self.rules(category, locale).any(|rule| {
            fields
                .iter()
                .any(|field| locale.contains(field, &rule.keyword))
        })
    }
}

/// Load and validate a keyword table from a YAML file.
///
/// # Errors
///
/// Returns `ConfigError` if the file cannot be read, parsed, or fails validation.
pub fn load_keywords(path: &Path) -> Result<KeywordTable, ConfigError> {
    let content = std::fs::read_to_string(path).map_err(|e| ConfigError::KeywordsFileIo {
        path: path.display().to_string(),
        source: e,
    })?;

    let table: KeywordTable = serde_yaml::from_str(&content)?;
    validate_keywords(&table)?;

    Ok(table)
}

fn validate_keywords(table: &KeywordTable) -> Result<(), ConfigError> {
    for (category, rules) in &table.0 {
        let mut seen = HashSet::new();
        for rule in rules {
            if rule.keyword.trim().is_empty() {
                return Err(ConfigError::Validation(format!(
                    "{category} has an empty keyword"
                )));
            }
            if !seen.insert((rule.keyword.as_str(), rule.locale)) {
                return Err(ConfigError::Validation(format!(
                    "duplicate keyword '{}' ({}) in {category}",
                    rule.keyword, rule.locale
                )));
            }
        }
    }
    Ok(())
}
