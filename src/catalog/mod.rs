//! Bundled, read-only classification knowledge: sender-domain fragments and
//! per-category phrase lists. Matching is case-insensitive substring
//! containment throughout.

mod domains;
mod keywords;
mod patterns;

use std::sync::Arc;

use once_cell::sync::Lazy;

pub use domains::DOMAIN_MAPPINGS;
pub use keywords::DEFAULT_KEYWORDS;
pub use patterns::EMAIL_PATTERNS;

static BUILTIN: Lazy<Arc<PatternCatalog>> = Lazy::new(|| Arc::new(PatternCatalog::from_static()));

/// Static phrase lists for one category as declared in source.
#[derive(Debug, Clone, Copy)]
pub struct CategoryDef {
    pub name: &'static str,
    pub subjects: &'static [&'static str],
    pub body: &'static [&'static str],
    pub sender: &'static [&'static str],
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CategoryPatterns {
    pub name: String,
    pub subjects: Vec<String>,
    pub body: Vec<String>,
    pub sender: Vec<String>,
}

impl CategoryPatterns {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    pub fn subjects<I, S>(mut self, phrases: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.subjects = lowercase_all(phrases);
        self
    }

    pub fn body<I, S>(mut self, phrases: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.body = lowercase_all(phrases);
        self
    }

    pub fn sender<I, S>(mut self, phrases: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.sender = lowercase_all(phrases);
        self
    }
}

/// Domain map plus category phrase lists. Both keep declaration order, which
/// decides first-match domain lookups and score tie-breaks.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PatternCatalog {
    domain_map: Vec<(String, String)>,
    categories: Vec<CategoryPatterns>,
}

impl PatternCatalog {
    /// The catalog bundled with the binary, built once per process.
    pub fn builtin() -> Arc<PatternCatalog> {
        BUILTIN.clone()
    }

    pub fn new(domain_map: Vec<(String, String)>, categories: Vec<CategoryPatterns>) -> Self {
        let domain_map = domain_map
            .into_iter()
            .map(|(pattern, category)| (pattern.to_lowercase(), category))
            .collect();
        Self {
            domain_map,
            categories,
        }
    }

    fn from_static() -> Self {
        let domain_map = DOMAIN_MAPPINGS
            .iter()
            .map(|(pattern, category)| (pattern.to_string(), category.to_string()))
            .collect();
        let categories = EMAIL_PATTERNS
            .iter()
            .map(|def| {
                CategoryPatterns::new(def.name)
                    .subjects(def.subjects)
                    .body(def.body)
                    .sender(def.sender)
            })
            .collect();
        Self::new(domain_map, categories)
    }

    /// First category whose domain fragment occurs in `domain`.
    pub fn match_domain(&self, domain: &str) -> Option<&str> {
        if domain.is_empty() {
            return None;
        }
        self.domain_map
            .iter()
            .find(|(pattern, _)| domain.contains(pattern.as_str()))
            .map(|(_, category)| category.as_str())
    }

    pub fn categories(&self) -> &[CategoryPatterns] {
        &self.categories
    }

    pub fn domain_mappings(&self) -> usize {
        self.domain_map.len()
    }

    /// Subject and body phrases across all categories.
    pub fn phrase_count(&self) -> usize {
        self.categories
            .iter()
            .map(|c| c.subjects.len() + c.body.len())
            .sum()
    }
}

fn lowercase_all<I, S>(phrases: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    phrases
        .into_iter()
        .map(|p| p.as_ref().to_lowercase())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_catalog_is_populated() {
        let catalog = PatternCatalog::builtin();
        assert_eq!(catalog.categories().len(), EMAIL_PATTERNS.len());
        assert_eq!(catalog.domain_mappings(), DOMAIN_MAPPINGS.len());
        assert!(catalog.phrase_count() > 0);
        assert_eq!(catalog.categories()[0].name, "ChatGPT");
    }

    #[test]
    fn domain_lookup_uses_declaration_order() {
        let catalog = PatternCatalog::new(
            vec![
                ("accounts.google".into(), "Google Accounts".into()),
                ("google".into(), "Google".into()),
            ],
            Vec::new(),
        );
        assert_eq!(
            catalog.match_domain("accounts.google.com"),
            Some("Google Accounts")
        );
        assert_eq!(catalog.match_domain("mail.google.com"), Some("Google"));
        assert_eq!(catalog.match_domain(""), None);
    }

    #[test]
    fn builtin_resolves_known_platforms() {
        let catalog = PatternCatalog::builtin();
        assert_eq!(catalog.match_domain("leetcode.com"), Some("Leetcode"));
        assert_eq!(catalog.match_domain("github.com"), Some("GitHub"));
        assert_eq!(catalog.match_domain("example.test"), None);
    }

    #[test]
    fn phrases_are_lowercased() {
        let patterns = CategoryPatterns::new("X").subjects(["Hello World"]);
        assert_eq!(patterns.subjects, vec!["hello world".to_string()]);
    }
}
