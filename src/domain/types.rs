use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Outcome of classifying a single message.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClassificationResult {
    pub category: Option<String>,
    pub confidence: f64,
    pub reasoning: String,
    /// Ranked runners-up, best first.
    pub alternative_categories: Vec<String>,
    /// Every scored category keyed by name. Keys iterate alphabetically;
    /// ranking lives in `category` and `alternative_categories`.
    pub scores: BTreeMap<String, u32>,
}

impl ClassificationResult {
    pub fn unclassified(reasoning: impl Into<String>) -> Self {
        Self {
            category: None,
            confidence: 0.0,
            reasoning: reasoning.into(),
            alternative_categories: Vec::new(),
            scores: BTreeMap::new(),
        }
    }

    /// Whether the orchestrator should apply the label automatically.
    pub fn should_auto_label(&self, min_confidence: f64) -> bool {
        self.category.is_some() && self.confidence >= min_confidence
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ClassifierStats {
    pub total_categories: usize,
    pub domain_mappings: usize,
    pub email_patterns: usize,
    pub custom_keywords: usize,
    pub learned_domains: usize,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct LearnedSummary {
    pub domains: usize,
    pub sender_names: usize,
    pub subject_phrases: usize,
}

impl LearnedSummary {
    pub fn total(&self) -> usize {
        self.domains + self.sender_names + self.subject_phrases
    }
}
