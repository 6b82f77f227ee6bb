//! Additive evidence scoring over the catalog, learned patterns and the
//! user's keyword lists.

use crate::{
    catalog::{CategoryPatterns, PatternCatalog},
    domain::{KeywordStore, LearnedPatterns, NormalizedMessage},
};

pub const SENDER_WEIGHT: u32 = 5;
pub const SUBJECT_WEIGHT: u32 = 4;
pub const SUBJECT_MATCH_CAP: u32 = 2;
pub const BODY_WEIGHT: u32 = 2;
pub const BODY_MATCH_CAP: u32 = 3;
pub const KEYWORD_SUBJECT_WEIGHT: u32 = 3;
pub const KEYWORD_BODY_WEIGHT: u32 = 1;
/// Categories at or above this score are not re-scored by the keyword pass.
pub const KEYWORD_SKIP_THRESHOLD: u32 = 5;
pub const MAX_REASONS: usize = 4;

/// Lowercased views of a message used by every matcher.
#[derive(Debug, Clone)]
pub struct MessageFeatures {
    pub subject: String,
    pub body: String,
    pub domain: String,
    pub sender_name: String,
}

impl MessageFeatures {
    pub fn from_message(message: &NormalizedMessage) -> Self {
        Self {
            subject: message.subject.to_lowercase(),
            body: message.body_or_snippet().to_lowercase(),
            domain: message.domain(),
            sender_name: message.sender_name(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryScore {
    pub category: String,
    pub score: u32,
    pub reasons: Vec<String>,
}

/// Scored categories in the order they first received evidence.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScoreBoard {
    entries: Vec<CategoryScore>,
}

impl ScoreBoard {
    pub fn get(&self, category: &str) -> Option<&CategoryScore> {
        self.entries.iter().find(|e| e.category == category)
    }

    pub fn score_of(&self, category: &str) -> u32 {
        self.get(category).map(|e| e.score).unwrap_or(0)
    }

    pub fn entries(&self) -> &[CategoryScore] {
        &self.entries
    }

    pub fn into_entries(self) -> Vec<CategoryScore> {
        self.entries
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Replaces the entry for `category` or appends a new one. Zero scores are
    /// never recorded.
    fn upsert(&mut self, category: &str, score: u32, mut reasons: Vec<String>) {
        if score == 0 {
            return;
        }
        reasons.truncate(MAX_REASONS);
        match self.entries.iter_mut().find(|e| e.category == category) {
            Some(entry) => {
                entry.score = score;
                entry.reasons = reasons;
            }
            None => self.entries.push(CategoryScore {
                category: category.to_string(),
                score,
                reasons,
            }),
        }
    }

    fn take_reasons(&self, category: &str) -> Vec<String> {
        self.get(category)
            .map(|e| e.reasons.clone())
            .unwrap_or_default()
    }
}

pub fn score_message(
    catalog: &PatternCatalog,
    learned: &LearnedPatterns,
    keywords: &KeywordStore,
    features: &MessageFeatures,
) -> ScoreBoard {
    let mut board = ScoreBoard::default();
    for patterns in catalog.categories() {
        let (score, reasons) = score_category(patterns, features);
        board.upsert(&patterns.name, score, reasons);
    }
    apply_learned(&mut board, learned, features);
    apply_keywords(&mut board, keywords, features);
    board
}

fn score_category(patterns: &CategoryPatterns, features: &MessageFeatures) -> (u32, Vec<String>) {
    let mut score = 0;
    let mut reasons = Vec::new();

    if let Some(pattern) = patterns.sender.iter().find(|p| {
        features.sender_name.contains(p.as_str())
            || (!features.domain.is_empty() && features.domain.contains(p.as_str()))
    }) {
        score += SENDER_WEIGHT;
        reasons.push(format!("sender: \"{pattern}\""));
    }

    let subject_hits = matched(&features.subject, &patterns.subjects);
    if !subject_hits.is_empty() {
        score += SUBJECT_WEIGHT * capped(subject_hits.len(), SUBJECT_MATCH_CAP);
        reasons.extend(
            subject_hits
                .iter()
                .take(2)
                .map(|m| format!("subject: \"{m}\"")),
        );
    }

    let body_hits = matched(&features.body, &patterns.body);
    if !body_hits.is_empty() {
        score += BODY_WEIGHT * capped(body_hits.len(), BODY_MATCH_CAP);
        reasons.extend(body_hits.iter().take(2).map(|m| format!("body: \"{m}\"")));
    }

    (score, reasons)
}

fn apply_learned(board: &mut ScoreBoard, learned: &LearnedPatterns, features: &MessageFeatures) {
    if !features.sender_name.is_empty() {
        if let Some(category) = learned.sender_names.get(&features.sender_name) {
            let mut reasons = board.take_reasons(category);
            reasons.push(format!("learned-sender: \"{}\"", features.sender_name));
            let score = board.score_of(category) + SENDER_WEIGHT;
            board.upsert(category, score, reasons);
        }
    }

    for (category, phrases) in &learned.subject_phrases {
        let hits: Vec<&str> = phrases
            .iter()
            .filter(|p| !p.is_empty() && features.subject.contains(&p.to_lowercase()))
            .map(String::as_str)
            .collect();
        if hits.is_empty() {
            continue;
        }
        let mut reasons = board.take_reasons(category);
        reasons.extend(
            hits.iter()
                .take(2)
                .map(|p| format!("learned-subject: \"{p}\"")),
        );
        let score =
            board.score_of(category) + SUBJECT_WEIGHT * capped(hits.len(), SUBJECT_MATCH_CAP);
        board.upsert(category, score, reasons);
    }
}

/// Keywords are weaker evidence than catalog phrases. Each keyword counts once:
/// a subject hit takes precedence over a body hit.
fn apply_keywords(board: &mut ScoreBoard, keywords: &KeywordStore, features: &MessageFeatures) {
    for set in keywords.sets() {
        let mut score = board.score_of(&set.category);
        if score >= KEYWORD_SKIP_THRESHOLD {
            continue;
        }
        let mut reasons = board.take_reasons(&set.category);

        for keyword in &set.keywords {
            let needle = keyword.trim().to_lowercase();
            if needle.is_empty() {
                continue;
            }
            if features.subject.contains(&needle) {
                score += KEYWORD_SUBJECT_WEIGHT;
                reasons.push(format!("kw-subject: \"{keyword}\""));
            } else if features.body.contains(&needle) {
                score += KEYWORD_BODY_WEIGHT;
                if reasons.len() < 3 {
                    reasons.push(format!("kw-body: \"{keyword}\""));
                }
            }
        }

        board.upsert(&set.category, score, reasons);
    }
}

fn matched<'a>(text: &str, phrases: &'a [String]) -> Vec<&'a str> {
    if text.is_empty() {
        return Vec::new();
    }
    phrases
        .iter()
        .filter(|p| text.contains(p.as_str()))
        .map(String::as_str)
        .collect()
}

fn capped(count: usize, cap: u32) -> u32 {
    u32::try_from(count).unwrap_or(u32::MAX).min(cap)
}
