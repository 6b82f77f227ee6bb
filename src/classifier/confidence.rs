use std::collections::BTreeMap;

use crate::domain::ClassificationResult;

use super::scorer::ScoreBoard;

/// Lowest winning score that still yields a category.
pub const DEFAULT_MIN_SCORE: u32 = 1;
pub const AMBIGUITY_GAP: u32 = 3;
pub const AMBIGUITY_PENALTY: f64 = 0.10;
pub const AMBIGUITY_FLOOR: f64 = 0.55;
pub const MAX_ALTERNATIVES: usize = 3;
const REASONS_IN_SUMMARY: usize = 3;

/// Step function from the winning score to a confidence value.
pub fn base_confidence(score: u32) -> f64 {
    const TIERS: [(u32, f64); 7] = [
        (15, 0.98),
        (10, 0.95),
        (7, 0.90),
        (5, 0.85),
        (4, 0.75),
        (3, 0.65),
        (2, 0.55),
    ];
    TIERS
        .iter()
        .find(|(min, _)| score >= *min)
        .map(|(_, confidence)| *confidence)
        .unwrap_or(0.45)
}

/// Applies the close-second penalty. A penalised confidence never drops
/// below `AMBIGUITY_FLOOR`.
pub fn calibrate(best: u32, runner_up: Option<u32>) -> f64 {
    let base = base_confidence(best);
    let confidence = match runner_up {
        Some(second) if best.saturating_sub(second) < AMBIGUITY_GAP => {
            (base - AMBIGUITY_PENALTY).max(AMBIGUITY_FLOOR)
        }
        _ => base,
    };
    round2(confidence)
}

pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Ranks the board and turns the winner into a result.
pub fn select(board: ScoreBoard, min_score: u32) -> ClassificationResult {
    if board.is_empty() {
        return ClassificationResult::unclassified("No matching patterns found");
    }

    let mut ranked = board.into_entries();
    // Stable: equal scores keep first-evidence order.
    ranked.sort_by(|a, b| b.score.cmp(&a.score));

    let scores: BTreeMap<String, u32> = ranked
        .iter()
        .map(|e| (e.category.clone(), e.score))
        .collect();
    let alternatives: Vec<String> = ranked
        .iter()
        .skip(1)
        .take(MAX_ALTERNATIVES)
        .map(|e| e.category.clone())
        .collect();

    let best = &ranked[0];
    if best.score < min_score {
        return ClassificationResult {
            category: None,
            confidence: 0.0,
            reasoning: "No patterns matched".to_string(),
            alternative_categories: alternatives,
            scores,
        };
    }

    let confidence = calibrate(best.score, ranked.get(1).map(|e| e.score));
    let reasoning = if best.reasons.is_empty() {
        "Pattern analysis".to_string()
    } else {
        best.reasons
            .iter()
            .take(REASONS_IN_SUMMARY)
            .cloned()
            .collect::<Vec<_>>()
            .join(", ")
    };

    ClassificationResult {
        category: Some(best.category.clone()),
        confidence,
        reasoning,
        alternative_categories: alternatives,
        scores,
    }
}
