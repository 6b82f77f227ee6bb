use std::{path::Path, sync::Arc, time::Duration};

use anyhow::{Context, Result};
use reqwest::Client;
use serde::de::DeserializeOwned;
use sqlx::SqlitePool;
use tokio::time::timeout;

use crate::{
    catalog::PatternCatalog,
    classifier::{ClassificationEngine, LabelContext, Strategy},
    config::{AiProvider, AppConfig},
    db::{self, KeywordRepository, LearnedPatternRepository},
    domain::{ClassifierStats, KeywordStore, LearnedPatterns, LearnedSummary, NormalizedMessage},
    infrastructure::{directories::ResolvedPaths, shutdown::Shutdown},
    tasks::{BatchRunner, InboundMessage, RunStats},
};

pub struct LabelerApp {
    _paths: ResolvedPaths,
    pool: SqlitePool,
    engine: Arc<ClassificationEngine>,
    shutdown: Shutdown,
    config: Arc<AppConfig>,
}

impl LabelerApp {
    pub async fn initialize(
        config: AppConfig,
        paths: ResolvedPaths,
        shutdown: Shutdown,
    ) -> Result<Self> {
        let config = Arc::new(config);
        let pool = db::init_pool(&paths.db_path)
            .await
            .with_context(|| format!("failed to open {}", paths.db_path.display()))?;

        let http_client = Client::builder()
            .user_agent(format!("mail-labeler/{}", env!("CARGO_PKG_VERSION")))
            .build()?;

        let strategies = Strategy::chain_from_config(http_client, &config.ai);
        tracing::info!(
            target: "lifecycle",
            chain = ?strategies.iter().map(Strategy::name).collect::<Vec<_>>(),
            "classification strategies configured"
        );

        let engine = Arc::new(ClassificationEngine::new(
            PatternCatalog::builtin(),
            KeywordRepository::new(pool.clone()),
            LearnedPatternRepository::new(pool.clone(), config.classification.learned_max_entries),
            strategies,
            &config.classification,
        ));

        Ok(Self {
            _paths: paths,
            pool,
            engine,
            shutdown,
            config,
        })
    }

    /// Classifies every message in `messages_path`, printing one JSON decision
    /// per line on stdout followed by the run summary.
    pub async fn classify_file(&self, messages_path: &Path, labels_path: Option<&Path>) -> Result<RunStats> {
        let messages: Vec<InboundMessage> = read_json(messages_path).await?;
        let mut labels = match labels_path {
            Some(path) => LabelContext::from_labels(read_json::<Vec<String>>(path).await?),
            None => LabelContext::new(),
        };

        let runner = BatchRunner::new(
            self.engine.clone(),
            self.config.classification.min_confidence_for_auto_label,
            self.pacing(),
        );
        let mut listener = self.shutdown.subscribe();
        let stats = runner
            .run(messages, &mut labels, &mut listener, |decision| {
                match serde_json::to_string(decision) {
                    Ok(line) => println!("{line}"),
                    Err(err) => tracing::error!(target: "runner", error = %err, "failed to encode decision"),
                }
            })
            .await;
        println!("{}", serde_json::to_string(&stats)?);
        Ok(stats)
    }

    pub async fn learn(&self, sender: &str, category: &str) -> Result<()> {
        let message = NormalizedMessage::new("", "", sender);
        if message.domain().is_empty() {
            tracing::warn!(target: "classifier", sender, "sender has no domain; nothing learned");
        }
        self.engine.learn_from_correction(&message, category).await?;
        Ok(())
    }

    pub async fn stats(&self) -> Result<ClassifierStats> {
        Ok(self.engine.classifier_stats().await?)
    }

    pub async fn export_keywords(&self, path: &Path) -> Result<()> {
        let keywords = self.engine.keywords().await?;
        write_json(path, &keywords).await?;
        tracing::info!(target: "store", path = %path.display(), total = keywords.total_keywords(), "keywords exported");
        Ok(())
    }

    pub async fn import_keywords(&self, path: &Path) -> Result<()> {
        let keywords: KeywordStore = read_json(path).await?;
        self.engine.save_keywords(&keywords).await?;
        tracing::info!(target: "store", path = %path.display(), total = keywords.total_keywords(), "keywords imported");
        Ok(())
    }

    pub async fn learned_summary(&self) -> Result<LearnedSummary> {
        Ok(self.engine.learned_summary().await?)
    }

    pub async fn clear_learned(&self) -> Result<()> {
        Ok(self.engine.clear_learned().await?)
    }

    pub async fn import_learned(&self, path: &Path) -> Result<()> {
        let patterns: LearnedPatterns = read_json(path).await?;
        self.engine.import_learned(&patterns).await?;
        tracing::info!(target: "store", path = %path.display(), "learned patterns imported");
        Ok(())
    }

    pub async fn close(self) {
        let shutdown_timeout = Duration::from_secs(5);
        if timeout(shutdown_timeout, self.pool.close()).await.is_err() {
            tracing::warn!(
                target: "store",
                "database pool did not close within {:?}",
                shutdown_timeout
            );
        }
    }

    /// Pacing follows the strategy that actually runs first, so a cloud
    /// provider without a key is paced like the local classifier.
    fn pacing(&self) -> Duration {
        match self.engine.strategies().first() {
            Some(Strategy::Cloud(_)) => self.config.ai.provider.pacing_delay(),
            _ => AiProvider::Local.pacing_delay(),
        }
    }
}

async fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let raw = tokio::fs::read(path)
        .await
        .with_context(|| format!("failed to read {}", path.display()))?;
    serde_json::from_slice(&raw).with_context(|| format!("invalid JSON in {}", path.display()))
}

async fn write_json<T: serde::Serialize>(path: &Path, value: &T) -> Result<()> {
    let raw = serde_json::to_vec_pretty(value)?;
    tokio::fs::write(path, raw)
        .await
        .with_context(|| format!("failed to write {}", path.display()))
}
