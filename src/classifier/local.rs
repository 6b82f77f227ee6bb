use std::collections::BTreeMap;

use crate::{
    catalog::PatternCatalog,
    domain::{ClassificationResult, KeywordStore, LearnedPatterns, NormalizedMessage},
};

use super::{
    confidence::{self, DEFAULT_MIN_SCORE},
    scorer::{self, MessageFeatures},
};

pub const DOMAIN_MATCH_CONFIDENCE: f64 = 0.95;
pub const DOMAIN_MATCH_SCORE: u32 = 100;

/// Mutable stores read at the start of a classification run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScoringStores {
    pub keywords: KeywordStore,
    pub learned: LearnedPatterns,
}

/// Offline classifier: domain lookup first, phrase scoring otherwise.
#[derive(Debug, Clone, Copy)]
pub struct LocalClassifier<'a> {
    catalog: &'a PatternCatalog,
    min_score: u32,
}

impl<'a> LocalClassifier<'a> {
    pub fn new(catalog: &'a PatternCatalog) -> Self {
        Self {
            catalog,
            min_score: DEFAULT_MIN_SCORE,
        }
    }

    pub fn with_min_score(mut self, min_score: u32) -> Self {
        self.min_score = min_score;
        self
    }

    pub fn classify(
        &self,
        message: &NormalizedMessage,
        stores: &ScoringStores,
    ) -> ClassificationResult {
        let features = MessageFeatures::from_message(message);
        tracing::debug!(
            target: "classifier",
            subject = %truncate(&message.subject, 60),
            domain = %features.domain,
            "classifying locally"
        );

        if let Some(result) = self.match_domain(&features.domain, &stores.learned) {
            return result;
        }

        let board = scorer::score_message(
            self.catalog,
            &stores.learned,
            &stores.keywords,
            &features,
        );
        let result = confidence::select(board, self.min_score);
        match &result.category {
            Some(category) => tracing::debug!(
                target: "classifier",
                category = %category,
                confidence = result.confidence,
                reasoning = %result.reasoning,
                "pattern match"
            ),
            None => tracing::debug!(target: "classifier", "no category matched"),
        }
        result
    }

    fn match_domain(&self, domain: &str, learned: &LearnedPatterns) -> Option<ClassificationResult> {
        if domain.is_empty() {
            return None;
        }
        if let Some(category) = learned.match_domain(domain) {
            tracing::debug!(target: "classifier", domain, category, "learned domain match");
            return Some(domain_result(category, "Domain: learned".to_string()));
        }
        let category = self.catalog.match_domain(domain)?;
        tracing::debug!(target: "classifier", domain, category, "catalog domain match");
        Some(domain_result(category, format!("Domain: {domain}")))
    }
}

fn domain_result(category: &str, reasoning: String) -> ClassificationResult {
    ClassificationResult {
        category: Some(category.to_string()),
        confidence: DOMAIN_MATCH_CONFIDENCE,
        reasoning,
        alternative_categories: Vec::new(),
        scores: BTreeMap::from([(category.to_string(), DOMAIN_MATCH_SCORE)]),
    }
}

fn truncate(value: &str, max_chars: usize) -> String {
    value.chars().take(max_chars).collect()
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::catalog::CategoryPatterns;

    fn stores() -> ScoringStores {
        ScoringStores {
            keywords: KeywordStore::defaults(),
            learned: LearnedPatterns::default(),
        }
    }

    #[test]
    fn catalog_domain_short_circuits_scoring() {
        let catalog = PatternCatalog::builtin();
        let classifier = LocalClassifier::new(&catalog);
        let message = NormalizedMessage::new(
            "50% off flash sale, order shipped",
            "unsubscribe, shop now, use code",
            "x@leetcode.com",
        );
        let result = classifier.classify(&message, &stores());
        assert_eq!(result.category.as_deref(), Some("Leetcode"));
        assert_eq!(result.confidence, 0.95);
        assert_eq!(result.reasoning, "Domain: leetcode.com");
        assert!(result.alternative_categories.is_empty());
        assert_eq!(result.scores, BTreeMap::from([("Leetcode".to_string(), 100)]));
    }

    #[test]
    fn learned_domain_wins_over_catalog() {
        let catalog = PatternCatalog::builtin();
        let mut stores = stores();
        stores
            .learned
            .domains
            .insert("leetcode.com".into(), "Practice".into());
        let result = LocalClassifier::new(&catalog)
            .classify(&NormalizedMessage::new("hi", "", "x@leetcode.com"), &stores);
        assert_eq!(result.category.as_deref(), Some("Practice"));
        assert_eq!(result.reasoning, "Domain: learned");
    }

    #[test]
    fn single_point_classifies_with_low_confidence() {
        let catalog = PatternCatalog::new(Vec::new(), Vec::new());
        let mut keywords = KeywordStore::default();
        keywords.push("Receipts", "invoice");
        let stores = ScoringStores {
            keywords,
            learned: LearnedPatterns::default(),
        };
        let message = NormalizedMessage::new("hello", "see invoice", "a@example.test");
        let result = LocalClassifier::new(&catalog).classify(&message, &stores);
        assert_eq!(result.category.as_deref(), Some("Receipts"));
        assert_eq!(result.confidence, 0.45);
        assert_eq!(result.reasoning, "kw-body: \"invoice\"");
    }

    #[test]
    fn nothing_matched_yields_null_category() {
        let catalog = PatternCatalog::new(Vec::new(), Vec::new());
        let message = NormalizedMessage::new("hello", "plain text", "a@example.test");
        let result = LocalClassifier::new(&catalog).classify(&message, &ScoringStores::default());
        assert_eq!(result.category, None);
        assert_eq!(result.confidence, 0.0);
        assert_eq!(result.reasoning, "No matching patterns found");
    }

    #[test]
    fn below_minimum_keeps_diagnostics() {
        let catalog = PatternCatalog::new(
            Vec::new(),
            vec![
                CategoryPatterns::new("A").subjects(["alpha"]),
                CategoryPatterns::new("B").body(["beta"]),
            ],
        );
        let message = NormalizedMessage::new("alpha", "beta", "a@example.test");
        let result = LocalClassifier::new(&catalog)
            .with_min_score(10)
            .classify(&message, &ScoringStores::default());
        assert_eq!(result.category, None);
        assert_eq!(result.confidence, 0.0);
        assert_eq!(result.alternative_categories, vec!["B".to_string()]);
        assert_eq!(
            result.scores,
            BTreeMap::from([("A".to_string(), 4), ("B".to_string(), 2)])
        );
    }

    #[test]
    fn close_scores_are_penalised() {
        let catalog = PatternCatalog::new(
            Vec::new(),
            vec![
                CategoryPatterns::new("Winner")
                    .subjects(["quarterly"])
                    .body(["numbers"]),
                CategoryPatterns::new("RunnerUp").subjects(["report"]),
            ],
        );
        let message = NormalizedMessage::new("Quarterly report", "numbers inside", "a@example.test");
        let result = LocalClassifier::new(&catalog).classify(&message, &ScoringStores::default());
        assert_eq!(result.category.as_deref(), Some("Winner"));
        assert_eq!(result.scores["Winner"], 6);
        assert_eq!(result.scores["RunnerUp"], 4);
        assert_eq!(result.confidence, 0.75);
        assert_eq!(result.alternative_categories, vec!["RunnerUp".to_string()]);
    }

    #[test]
    fn tied_single_points_are_lifted_to_floor() {
        let catalog = PatternCatalog::new(Vec::new(), Vec::new());
        let mut keywords = KeywordStore::default();
        keywords.push("Alpha", "alpha");
        keywords.push("Beta", "beta");
        let stores = ScoringStores {
            keywords,
            learned: LearnedPatterns::default(),
        };
        let message = NormalizedMessage::new("hello", "alpha beta", "a@example.test");
        let result = LocalClassifier::new(&catalog).classify(&message, &stores);
        assert_eq!(result.category.as_deref(), Some("Alpha"));
        assert_eq!(result.confidence, 0.55);
        assert_eq!(result.alternative_categories, vec!["Beta".to_string()]);
    }

    #[test]
    fn ranking_is_carried_by_alternatives_not_score_keys() {
        let catalog = PatternCatalog::new(
            Vec::new(),
            vec![
                CategoryPatterns::new("Zulu").subjects(["status", "weekly"]),
                CategoryPatterns::new("Mike").subjects(["status"]),
                CategoryPatterns::new("Alpha").body(["update"]),
            ],
        );
        let message = NormalizedMessage::new("Weekly status", "update", "a@example.test");
        let result = LocalClassifier::new(&catalog).classify(&message, &ScoringStores::default());
        assert_eq!(result.category.as_deref(), Some("Zulu"));
        assert_eq!(
            result.alternative_categories,
            vec!["Mike".to_string(), "Alpha".to_string()]
        );
        let keys: Vec<_> = result.scores.keys().cloned().collect();
        assert_eq!(keys, vec!["Alpha", "Mike", "Zulu"]);
    }

    #[test]
    fn ties_keep_catalog_order() {
        let catalog = PatternCatalog::new(
            Vec::new(),
            vec![
                CategoryPatterns::new("First").subjects(["shared"]),
                CategoryPatterns::new("Second").subjects(["shared"]),
            ],
        );
        let message = NormalizedMessage::new("shared words", "", "a@example.test");
        let result = LocalClassifier::new(&catalog).classify(&message, &ScoringStores::default());
        assert_eq!(result.category.as_deref(), Some("First"));
        assert_eq!(result.alternative_categories, vec!["Second".to_string()]);
    }

    #[test]
    fn classification_is_deterministic() {
        let catalog = PatternCatalog::builtin();
        let classifier = LocalClassifier::new(&catalog);
        let message = NormalizedMessage::new(
            "Meeting reminder: join the meeting",
            "Join Zoom Meeting. Meeting ID: 123. Passcode: abc. Add to calendar",
            "Team Lead <lead@example.test>",
        );
        let first = classifier.classify(&message, &stores());
        let second = classifier.classify(&message, &stores());
        assert_eq!(first, second);
        assert_eq!(first.category.as_deref(), Some("Meetings"));
    }

    #[test]
    fn empty_message_degrades_gracefully() {
        let catalog = PatternCatalog::builtin();
        let result = LocalClassifier::new(&catalog)
            .classify(&NormalizedMessage::default(), &stores());
        assert_eq!(result.category, None);
        assert_eq!(result.confidence, 0.0);
    }
}
