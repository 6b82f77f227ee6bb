use std::sync::Arc;

use parking_lot::Mutex;
use reqwest::Client;
use thiserror::Error;

use crate::{
    ai::{CloudClassifier, CloudError},
    catalog::PatternCatalog,
    config::{AiConfig, ClassificationConfig},
    db::{KeywordRepository, LearnedPatternRepository},
    domain::{
        ClassificationResult, ClassifierStats, KeywordStore, LearnedPatterns, LearnedSummary,
        NormalizedMessage,
    },
};

use super::{
    labels::LabelContext,
    local::{LocalClassifier, ScoringStores},
};

#[derive(Debug, Error)]
pub enum ClassifyError {
    #[error("pattern store unavailable: {0}")]
    Store(#[from] sqlx::Error),
    #[error(transparent)]
    Cloud(#[from] CloudError),
    #[error("no classification strategy configured")]
    NoStrategy,
}

/// One way of producing a classification. Strategies are tried in order until
/// one succeeds.
#[derive(Clone)]
pub enum Strategy {
    Cloud(CloudClassifier),
    Local,
}

impl Strategy {
    pub fn name(&self) -> &'static str {
        match self {
            Strategy::Cloud(client) => client.provider().name(),
            Strategy::Local => "local",
        }
    }

    /// The configured provider first, local scoring as the final fallback.
    /// A cloud provider without an API key is skipped entirely.
    pub fn chain_from_config(http: Client, config: &AiConfig) -> Vec<Strategy> {
        let mut chain = Vec::with_capacity(2);
        match CloudClassifier::from_config(http, config) {
            Some(client) if config.api_key.is_some() => chain.push(Strategy::Cloud(client)),
            Some(client) => tracing::info!(
                target: "classifier",
                provider = client.provider().name(),
                "no API key configured; using local classification"
            ),
            None => {}
        }
        chain.push(Strategy::Local);
        chain
    }
}

pub struct ClassificationEngine {
    catalog: Arc<PatternCatalog>,
    keywords: KeywordRepository,
    learned: LearnedPatternRepository,
    strategies: Vec<Strategy>,
    min_score: u32,
    cache: Mutex<Option<Arc<ScoringStores>>>,
    corrections: tokio::sync::Mutex<()>,
}

impl ClassificationEngine {
    pub fn new(
        catalog: Arc<PatternCatalog>,
        keywords: KeywordRepository,
        learned: LearnedPatternRepository,
        strategies: Vec<Strategy>,
        config: &ClassificationConfig,
    ) -> Self {
        Self {
            catalog,
            keywords,
            learned,
            strategies,
            min_score: config.min_score,
            cache: Mutex::new(None),
            corrections: tokio::sync::Mutex::new(()),
        }
    }

    pub fn strategies(&self) -> &[Strategy] {
        &self.strategies
    }

    /// Classifies one message. Remote failures fall through to the next
    /// strategy; only store failures reach the caller.
    pub async fn classify(
        &self,
        message: &NormalizedMessage,
        labels: &mut LabelContext,
    ) -> Result<ClassificationResult, ClassifyError> {
        let mut last_error = None;
        for strategy in &self.strategies {
            let outcome = match strategy {
                Strategy::Cloud(client) => client
                    .classify(message, labels)
                    .await
                    .map_err(ClassifyError::from),
                Strategy::Local => self.classify_locally(message).await,
            };
            match outcome {
                Ok(result) => return Ok(result),
                Err(ClassifyError::Store(err)) => return Err(ClassifyError::Store(err)),
                Err(err) => {
                    tracing::warn!(
                        target: "classifier",
                        strategy = strategy.name(),
                        error = %err,
                        "classification strategy failed; falling back"
                    );
                    last_error = Some(err);
                }
            }
        }
        Err(last_error.unwrap_or(ClassifyError::NoStrategy))
    }

    pub async fn classify_locally(
        &self,
        message: &NormalizedMessage,
    ) -> Result<ClassificationResult, ClassifyError> {
        let stores = self.stores().await?;
        Ok(LocalClassifier::new(&self.catalog)
            .with_min_score(self.min_score)
            .classify(message, &stores))
    }

    /// Remembers `category` for the message's sender domain. Messages without
    /// a domain are ignored.
    pub async fn learn_from_correction(
        &self,
        message: &NormalizedMessage,
        category: &str,
    ) -> Result<(), ClassifyError> {
        let domain = message.domain();
        if domain.is_empty() {
            tracing::debug!(target: "classifier", "correction without sender domain ignored");
            return Ok(());
        }

        let _guard = self.corrections.lock().await;
        self.learned.record_domain(&domain, category).await?;
        self.invalidate();
        tracing::info!(target: "classifier", domain = %domain, category, "learned correction");
        Ok(())
    }

    pub async fn classifier_stats(&self) -> Result<ClassifierStats, ClassifyError> {
        let stores = self.stores().await?;
        Ok(ClassifierStats {
            total_categories: self.catalog.categories().len(),
            domain_mappings: self.catalog.domain_mappings(),
            email_patterns: self.catalog.phrase_count(),
            custom_keywords: stores.keywords.total_keywords(),
            learned_domains: stores.learned.domains.len(),
        })
    }

    pub async fn keywords(&self) -> Result<KeywordStore, ClassifyError> {
        Ok(self.stores().await?.keywords.clone())
    }

    pub async fn save_keywords(&self, keywords: &KeywordStore) -> Result<(), ClassifyError> {
        self.keywords.save(keywords).await?;
        self.invalidate();
        Ok(())
    }

    pub async fn learned_patterns(&self) -> Result<LearnedPatterns, ClassifyError> {
        Ok(self.stores().await?.learned.clone())
    }

    pub async fn learned_summary(&self) -> Result<LearnedSummary, ClassifyError> {
        Ok(self.learned.summary().await?)
    }

    pub async fn import_learned(&self, patterns: &LearnedPatterns) -> Result<(), ClassifyError> {
        let _guard = self.corrections.lock().await;
        self.learned.import(patterns).await?;
        self.invalidate();
        Ok(())
    }

    pub async fn clear_learned(&self) -> Result<(), ClassifyError> {
        let _guard = self.corrections.lock().await;
        self.learned.clear().await?;
        self.invalidate();
        tracing::info!(target: "classifier", "learned patterns cleared");
        Ok(())
    }

    /// Keyword and learned stores, read once and reused until a mutation.
    async fn stores(&self) -> Result<Arc<ScoringStores>, ClassifyError> {
        if let Some(stores) = self.cache.lock().clone() {
            return Ok(stores);
        }
        let keywords = self.keywords.load().await?;
        let learned = self.learned.load().await?;
        let stores = Arc::new(ScoringStores { keywords, learned });
        *self.cache.lock() = Some(stores.clone());
        Ok(stores)
    }

    fn invalidate(&self) {
        self.cache.lock().take();
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use pretty_assertions::assert_eq;
    use serde_json::json;
    use sqlx::sqlite::SqlitePool;
    use wiremock::{matchers::method, Mock, MockServer, ResponseTemplate};

    use super::*;
    use crate::{
        config::{AiProvider, RetryConfig},
        db::testing::temp_pool,
    };

    fn engine(pool: SqlitePool, strategies: Vec<Strategy>) -> ClassificationEngine {
        ClassificationEngine::new(
            PatternCatalog::builtin(),
            KeywordRepository::new(pool.clone()),
            LearnedPatternRepository::new(pool, 100),
            strategies,
            &ClassificationConfig::default(),
        )
    }

    fn cloud_config(endpoint: String) -> AiConfig {
        AiConfig {
            provider: AiProvider::OpenAi,
            api_key: Some("test-key".into()),
            model: None,
            endpoint: Some(endpoint),
            retry: RetryConfig {
                max_retries: 3,
                base_delay: Duration::from_millis(1),
                deadline: Duration::from_secs(5),
            },
        }
    }

    fn order_message() -> NormalizedMessage {
        NormalizedMessage::new(
            "Your order #4411 has shipped",
            "Tracking number 1Z. Estimated delivery Friday. Order details inside.",
            "Store <orders@store.invalid>",
        )
    }

    #[test]
    fn chain_without_key_is_local_only() {
        let mut config = cloud_config("http://127.0.0.1:9".into());
        config.api_key = None;
        let chain = Strategy::chain_from_config(Client::new(), &config);
        let names: Vec<_> = chain.iter().map(Strategy::name).collect();
        assert_eq!(names, vec!["local"]);

        let chain = Strategy::chain_from_config(Client::new(), &AiConfig::default());
        assert_eq!(chain.len(), 1);
    }

    #[test]
    fn chain_with_key_tries_cloud_first() {
        let chain =
            Strategy::chain_from_config(Client::new(), &cloud_config("http://127.0.0.1:9".into()));
        let names: Vec<_> = chain.iter().map(Strategy::name).collect();
        assert_eq!(names, vec!["openai", "local"]);
    }

    #[tokio::test]
    async fn domain_match_beats_content() {
        let (_dir, pool) = temp_pool().await;
        let engine = engine(pool, vec![Strategy::Local]);
        let message = NormalizedMessage::new(
            "Flash sale: 70% off, limited time",
            "Shop now and use code SAVE",
            "x@leetcode.com",
        );
        let result = engine
            .classify(&message, &mut LabelContext::new())
            .await
            .unwrap();
        assert_eq!(result.category.as_deref(), Some("Leetcode"));
        assert_eq!(result.confidence, 0.95);
    }

    #[tokio::test]
    async fn correction_overrides_future_classifications() {
        let (_dir, pool) = temp_pool().await;
        let engine = engine(pool, vec![Strategy::Local]);
        let mut labels = LabelContext::new();
        let message = NormalizedMessage::new("hello there", "", "a@foo.invalid");

        let before = engine.classify(&message, &mut labels).await.unwrap();
        assert_ne!(before.category.as_deref(), Some("Custom"));

        engine
            .learn_from_correction(&NormalizedMessage::new("", "", "a@foo.invalid"), "Custom")
            .await
            .unwrap();
        let after = engine.classify(&message, &mut labels).await.unwrap();
        assert_eq!(after.category.as_deref(), Some("Custom"));
        assert_eq!(after.reasoning, "Domain: learned");
        assert_eq!(engine.classifier_stats().await.unwrap().learned_domains, 1);
    }

    #[tokio::test]
    async fn correction_without_domain_is_a_no_op() {
        let (_dir, pool) = temp_pool().await;
        let engine = engine(pool, vec![Strategy::Local]);
        engine
            .learn_from_correction(&NormalizedMessage::new("s", "b", "no address"), "X")
            .await
            .unwrap();
        assert_eq!(engine.learned_summary().await.unwrap().total(), 0);
    }

    #[tokio::test]
    async fn failing_provider_falls_back_to_local() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(500))
            .expect(1)
            .mount(&server)
            .await;

        let (_dir, pool) = temp_pool().await;
        let chain = Strategy::chain_from_config(Client::new(), &cloud_config(server.uri()));
        let with_cloud = engine(pool.clone(), chain);
        let local_only = engine(pool, vec![Strategy::Local]);

        let message = order_message();
        let fallback = with_cloud
            .classify(&message, &mut LabelContext::new())
            .await
            .unwrap();
        let direct = local_only.classify_locally(&message).await.unwrap();
        assert_eq!(fallback, direct);
        assert_eq!(fallback.category.as_deref(), Some("Shopping"));
    }

    #[tokio::test]
    async fn exhausted_rate_limit_retries_fall_back_to_local() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(429))
            .expect(4)
            .mount(&server)
            .await;

        let (_dir, pool) = temp_pool().await;
        let chain = Strategy::chain_from_config(Client::new(), &cloud_config(server.uri()));
        let with_cloud = engine(pool.clone(), chain);
        let local_only = engine(pool, vec![Strategy::Local]);

        let message = order_message();
        let fallback = with_cloud
            .classify(&message, &mut LabelContext::new())
            .await
            .unwrap();
        assert_eq!(fallback, local_only.classify_locally(&message).await.unwrap());
    }

    #[tokio::test]
    async fn slow_provider_past_deadline_falls_back_to_local() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_delay(Duration::from_secs(2))
                    .set_body_json(json!({
                        "choices": [{"message": {"content": "{\"category\": \"Late\"}"}}]
                    })),
            )
            .mount(&server)
            .await;

        let (_dir, pool) = temp_pool().await;
        let mut config = cloud_config(server.uri());
        config.retry.deadline = Duration::from_millis(100);
        let chain = Strategy::chain_from_config(Client::new(), &config);
        let with_cloud = engine(pool.clone(), chain);
        let local_only = engine(pool, vec![Strategy::Local]);

        let message = order_message();
        let mut labels = LabelContext::new();
        let fallback = with_cloud.classify(&message, &mut labels).await.unwrap();
        assert_eq!(fallback, local_only.classify_locally(&message).await.unwrap());
        assert!(!labels.contains("Late"));
    }

    #[tokio::test]
    async fn malformed_model_answer_falls_back_to_local() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "choices": [{"message": {"content": "not json"}}]
            })))
            .mount(&server)
            .await;

        let (_dir, pool) = temp_pool().await;
        let chain = Strategy::chain_from_config(Client::new(), &cloud_config(server.uri()));
        let engine = engine(pool, chain);
        let mut labels = LabelContext::from_labels(["Shopping"]);
        let result = engine.classify(&order_message(), &mut labels).await.unwrap();
        assert_eq!(result.category.as_deref(), Some("Shopping"));
        assert!(!result.scores.is_empty());
    }

    #[tokio::test]
    async fn remote_answer_updates_label_context_once() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "choices": [{"message": {"content": "{\"category\": \"A\", \"confidence\": 0.88}"}}]
            })))
            .mount(&server)
            .await;

        let (_dir, pool) = temp_pool().await;
        let chain = Strategy::chain_from_config(Client::new(), &cloud_config(server.uri()));
        let engine = engine(pool, chain);
        let mut labels = LabelContext::new();
        labels.set_existing_labels(["A", "B"]);
        labels.set_existing_labels(["A", "B"]);

        let result = engine.classify(&order_message(), &mut labels).await.unwrap();
        assert_eq!(result.category.as_deref(), Some("A"));
        assert_eq!(result.confidence, 0.88);
        assert_eq!(labels.labels(), ["A", "B"]);
    }

    #[tokio::test]
    async fn keyword_suppression_once_patterns_are_confident() {
        let (_dir, pool) = temp_pool().await;
        let engine = engine(pool, vec![Strategy::Local]);
        let message = order_message();
        let baseline = engine.classify_locally(&message).await.unwrap();
        let shopping = baseline.scores["Shopping"];
        assert!(shopping >= 5);

        let mut keywords = engine.keywords().await.unwrap();
        keywords.push("Shopping", "shipped");
        keywords.push("Shopping", "tracking number");
        engine.save_keywords(&keywords).await.unwrap();

        let after = engine.classify_locally(&message).await.unwrap();
        assert_eq!(after.scores["Shopping"], shopping);
    }

    #[tokio::test]
    async fn stats_count_catalog_and_stores() {
        let (_dir, pool) = temp_pool().await;
        let engine = engine(pool, vec![Strategy::Local]);
        let stats = engine.classifier_stats().await.unwrap();
        let catalog = PatternCatalog::builtin();
        assert_eq!(stats.total_categories, catalog.categories().len());
        assert_eq!(stats.domain_mappings, catalog.domain_mappings());
        assert_eq!(stats.email_patterns, catalog.phrase_count());
        assert_eq!(stats.custom_keywords, KeywordStore::defaults().total_keywords());
        assert_eq!(stats.learned_domains, 0);
    }
}
