use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};

use crate::catalog::DEFAULT_KEYWORDS;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeywordSet {
    pub category: String,
    pub keywords: Vec<String>,
}

/// User-editable keyword lists. Category order is preserved and decides
/// tie-breaks for categories that only the keyword pass scores.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct KeywordStore {
    sets: Vec<KeywordSet>,
}

impl KeywordStore {
    pub fn new(sets: Vec<KeywordSet>) -> Self {
        Self { sets }
    }

    pub fn defaults() -> Self {
        let sets = DEFAULT_KEYWORDS
            .iter()
            .map(|(category, keywords)| KeywordSet {
                category: category.to_string(),
                keywords: keywords.iter().map(|k| k.to_string()).collect(),
            })
            .collect();
        Self { sets }
    }

    /// Appends `keyword` to `category`, creating the category if needed.
    pub fn push(&mut self, category: &str, keyword: impl Into<String>) {
        let keyword = keyword.into();
        match self.sets.iter_mut().find(|set| set.category == category) {
            Some(set) => set.keywords.push(keyword),
            None => self.sets.push(KeywordSet {
                category: category.to_string(),
                keywords: vec![keyword],
            }),
        }
    }

    pub fn sets(&self) -> &[KeywordSet] {
        &self.sets
    }

    pub fn is_empty(&self) -> bool {
        self.sets.is_empty()
    }

    pub fn total_keywords(&self) -> usize {
        self.sets.iter().map(|set| set.keywords.len()).sum()
    }
}

/// Patterns accumulated from user corrections.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LearnedPatterns {
    #[serde(default)]
    pub domains: BTreeMap<String, String>,
    #[serde(default)]
    pub sender_names: BTreeMap<String, String>,
    #[serde(default)]
    pub subject_phrases: BTreeMap<String, BTreeSet<String>>,
}

impl LearnedPatterns {
    /// Exact domain first, otherwise the longest learned domain contained in
    /// `domain`.
    pub fn match_domain(&self, domain: &str) -> Option<&str> {
        if domain.is_empty() {
            return None;
        }
        if let Some(category) = self.domains.get(domain) {
            return Some(category.as_str());
        }
        self.domains
            .iter()
            .filter(|(learned, _)| !learned.is_empty() && domain.contains(learned.as_str()))
            .max_by(|(a, _), (b, _)| a.len().cmp(&b.len()).then_with(|| b.cmp(a)))
            .map(|(_, category)| category.as_str())
    }

    pub fn is_empty(&self) -> bool {
        self.domains.is_empty() && self.sender_names.is_empty() && self.subject_phrases.is_empty()
    }
}
