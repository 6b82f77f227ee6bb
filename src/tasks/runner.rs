use std::{collections::BTreeMap, sync::Arc, time::Duration};

use serde::{Deserialize, Serialize};
use tokio::time::sleep;

use crate::{
    classifier::{ClassificationEngine, LabelContext},
    domain::{ClassificationResult, NormalizedMessage},
    infrastructure::shutdown::ShutdownListener,
};

/// A message as exported by the mailbox adapter, with its mailbox id.
#[derive(Debug, Clone, Deserialize)]
pub struct InboundMessage {
    #[serde(default)]
    pub id: String,
    #[serde(flatten)]
    pub message: NormalizedMessage,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Action {
    /// Category and confidence clear the auto-label threshold.
    Label,
    LowConfidence,
    Unclassified,
    Failed,
}

#[derive(Debug, Clone, Serialize)]
pub struct Decision {
    pub id: String,
    pub action: Action,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<ClassificationResult>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct RunStats {
    pub processed: usize,
    pub categorized: usize,
    pub skipped: usize,
    pub failed: usize,
    pub categories: BTreeMap<String, usize>,
}

/// Classifies a batch one message at a time, leaving `pacing` between calls,
/// and decides which results are confident enough to apply.
pub struct BatchRunner {
    engine: Arc<ClassificationEngine>,
    min_confidence: f64,
    pacing: Duration,
}

impl BatchRunner {
    pub fn new(engine: Arc<ClassificationEngine>, min_confidence: f64, pacing: Duration) -> Self {
        Self {
            engine,
            min_confidence,
            pacing,
        }
    }

    pub async fn run<F>(
        &self,
        messages: Vec<InboundMessage>,
        labels: &mut LabelContext,
        shutdown: &mut ShutdownListener,
        mut on_decision: F,
    ) -> RunStats
    where
        F: FnMut(&Decision),
    {
        let total = messages.len();
        let mut stats = RunStats::default();
        tracing::info!(target: "runner", total, known_labels = labels.labels().len(), "run started");

        for (index, inbound) in messages.into_iter().enumerate() {
            if shutdown.is_triggered() {
                tracing::info!(target: "runner", remaining = total - index, "shutdown requested; stopping run");
                break;
            }

            let outcome = tokio::select! {
                res = self.engine.classify(&inbound.message, labels) => res,
                _ = shutdown.notified() => {
                    tracing::info!(target: "runner", id = %inbound.id, "shutdown requested during classification");
                    break;
                }
            };

            let decision = match outcome {
                Ok(result) => self.decide(inbound.id, result, &mut stats),
                Err(err) => {
                    tracing::error!(target: "runner", id = %inbound.id, error = %err, "classification failed");
                    stats.failed += 1;
                    Decision {
                        id: inbound.id,
                        action: Action::Failed,
                        result: None,
                        error: Some(err.to_string()),
                    }
                }
            };
            on_decision(&decision);

            if index + 1 < total && !self.pacing.is_zero() {
                tokio::select! {
                    _ = sleep(self.pacing) => {}
                    _ = shutdown.notified() => {}
                }
            }
        }

        tracing::info!(
            target: "runner",
            processed = stats.processed,
            categorized = stats.categorized,
            skipped = stats.skipped,
            failed = stats.failed,
            "run finished"
        );
        stats
    }

    fn decide(&self, id: String, result: ClassificationResult, stats: &mut RunStats) -> Decision {
        stats.processed += 1;
        let action = match &result.category {
            Some(category) if result.should_auto_label(self.min_confidence) => {
                stats.categorized += 1;
                *stats.categories.entry(category.clone()).or_default() += 1;
                Action::Label
            }
            Some(_) => {
                stats.skipped += 1;
                Action::LowConfidence
            }
            None => {
                stats.skipped += 1;
                Action::Unclassified
            }
        };
        tracing::info!(
            target: "runner",
            id = %id,
            category = result.category.as_deref().unwrap_or("Unknown"),
            confidence = result.confidence,
            reasoning = %result.reasoning,
            action = ?action,
            "message classified"
        );
        Decision {
            id,
            action,
            result: Some(result),
            error: None,
        }
    }
}
