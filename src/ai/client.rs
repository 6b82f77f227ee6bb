use reqwest::Client;
use url::Url;

use crate::{
    classifier::labels::LabelContext,
    config::{AiConfig, AiProvider, RetryConfig},
    domain::{ClassificationResult, NormalizedMessage},
};

use super::{
    inference::{
        build_chat_request, build_gemini_request, chat_content, gemini_content, parse_verdict,
        ChatCompletionResponse, GeminiResponse, GEMINI_API_BASE, GROQ_API_URL, OPENAI_API_URL,
    },
    prompt::build_prompt,
    CloudError,
};

/// Remote providers able to classify a message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CloudProvider {
    Gemini,
    Groq,
    OpenAi,
}

impl CloudProvider {
    pub fn from_ai_provider(provider: AiProvider) -> Option<Self> {
        match provider {
            AiProvider::Local => None,
            AiProvider::Gemini => Some(CloudProvider::Gemini),
            AiProvider::Groq => Some(CloudProvider::Groq),
            AiProvider::OpenAi => Some(CloudProvider::OpenAi),
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            CloudProvider::Gemini => "gemini",
            CloudProvider::Groq => "groq",
            CloudProvider::OpenAi => "openai",
        }
    }

    pub fn default_model(&self) -> &'static str {
        match self {
            CloudProvider::Gemini => "gemini-2.0-flash",
            CloudProvider::Groq => "llama-3.1-8b-instant",
            CloudProvider::OpenAi => "gpt-4o-mini",
        }
    }

    fn default_endpoint(&self) -> &'static str {
        match self {
            CloudProvider::Gemini => GEMINI_API_BASE,
            CloudProvider::Groq => GROQ_API_URL,
            CloudProvider::OpenAi => OPENAI_API_URL,
        }
    }
}

#[derive(Clone)]
pub struct CloudClassifier {
    http: Client,
    provider: CloudProvider,
    api_key: Option<String>,
    model: String,
    endpoint: String,
    retry: RetryConfig,
}

impl CloudClassifier {
    /// Returns `None` for the local provider.
    pub fn from_config(http: Client, config: &AiConfig) -> Option<Self> {
        let provider = CloudProvider::from_ai_provider(config.provider)?;
        Some(Self {
            http,
            provider,
            api_key: config.api_key.clone(),
            model: config
                .model
                .clone()
                .unwrap_or_else(|| provider.default_model().to_string()),
            endpoint: config
                .endpoint
                .clone()
                .unwrap_or_else(|| provider.default_endpoint().to_string()),
            retry: config.retry,
        })
    }

    pub fn provider(&self) -> CloudProvider {
        self.provider
    }

    /// Asks the remote model for a label. A returned category the mailbox
    /// does not know yet is added to `labels`.
    pub async fn classify(
        &self,
        message: &NormalizedMessage,
        labels: &mut LabelContext,
    ) -> Result<ClassificationResult, CloudError> {
        let api_key = self
            .api_key
            .as_deref()
            .ok_or(CloudError::MissingApiKey(self.provider.name()))?;

        let prompt = build_prompt(message, labels);
        let text = match self.provider {
            CloudProvider::Gemini => self.call_gemini(api_key, &prompt).await?,
            CloudProvider::Groq | CloudProvider::OpenAi => self.call_chat(api_key, &prompt).await?,
        };
        let result = parse_verdict(&text)?;

        if let Some(category) = &result.category {
            if labels.remember(category) {
                tracing::debug!(target: "cloud", category = %category, "new label remembered");
            }
        }
        tracing::info!(
            target: "cloud",
            provider = self.provider.name(),
            category = result.category.as_deref().unwrap_or("-"),
            confidence = result.confidence,
            "remote classification"
        );
        Ok(result)
    }

    async fn call_gemini(&self, api_key: &str, prompt: &str) -> Result<String, CloudError> {
        let url = Url::parse_with_params(
            &format!(
                "{}/{}:generateContent",
                self.endpoint.trim_end_matches('/'),
                self.model
            ),
            &[("key", api_key)],
        )?;
        let request = build_gemini_request(prompt);
        let response = super::retry::send_with_retry(&self.retry, || {
            self.http.post(url.clone()).json(&request)
        })
        .await?;
        let payload: GeminiResponse = response.json().await?;
        gemini_content(payload)
    }

    async fn call_chat(&self, api_key: &str, prompt: &str) -> Result<String, CloudError> {
        let request = build_chat_request(self.model.clone(), prompt);
        let response = super::retry::send_with_retry(&self.retry, || {
            self.http
                .post(&self.endpoint)
                .bearer_auth(api_key)
                .json(&request)
        })
        .await?;
        let completion: ChatCompletionResponse = response.json().await?;
        chat_content(completion)
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use serde_json::json;
    use wiremock::{
        matchers::{header, method, path, query_param},
        Mock, MockServer, ResponseTemplate,
    };

    use super::*;

    fn config(provider: AiProvider, endpoint: String) -> AiConfig {
        AiConfig {
            provider,
            api_key: Some("test-key".into()),
            model: None,
            endpoint: Some(endpoint),
            retry: RetryConfig {
                max_retries: 1,
                base_delay: Duration::from_millis(1),
                deadline: Duration::from_secs(5),
            },
        }
    }

    fn message() -> NormalizedMessage {
        NormalizedMessage::new("Hack the weekend", "Teams of four", "Devfolio <team@devfolio.co>")
    }

    #[test]
    fn local_provider_has_no_cloud_client() {
        assert!(CloudClassifier::from_config(Client::new(), &AiConfig::default()).is_none());
    }

    #[tokio::test]
    async fn groq_chat_completion_is_parsed() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/chat"))
            .and(header("authorization", "Bearer test-key"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "choices": [{"message": {"content": "{\"category\": \"Hackathons\", \"confidence\": 0.9}"}}]
            })))
            .expect(1)
            .mount(&server)
            .await;

        let client = CloudClassifier::from_config(
            Client::new(),
            &config(AiProvider::Groq, format!("{}/chat", server.uri())),
        )
        .unwrap();
        let mut labels = LabelContext::from_labels(["Finance"]);
        let result = client.classify(&message(), &mut labels).await.unwrap();

        assert_eq!(result.category.as_deref(), Some("Hackathons"));
        assert_eq!(result.confidence, 0.9);
        assert_eq!(labels.labels(), ["Finance", "Hackathons"]);
    }

    #[tokio::test]
    async fn gemini_passes_key_and_model_in_url() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/models/gemini-2.0-flash:generateContent"))
            .and(query_param("key", "test-key"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "candidates": [{"content": {"parts": [{"text": "{\"category\": \"A\", \"reasoning\": \"known\"}"}]}}]
            })))
            .expect(1)
            .mount(&server)
            .await;

        let client = CloudClassifier::from_config(
            Client::new(),
            &config(AiProvider::Gemini, format!("{}/models", server.uri())),
        )
        .unwrap();
        let mut labels = LabelContext::from_labels(["A", "B"]);
        labels.set_existing_labels(["A", "B"]);
        let result = client.classify(&message(), &mut labels).await.unwrap();

        assert_eq!(result.category.as_deref(), Some("A"));
        assert_eq!(result.confidence, 0.8);
        assert_eq!(result.reasoning, "known");
        assert_eq!(labels.labels(), ["A", "B"]);
    }

    #[tokio::test]
    async fn missing_key_fails_without_network() {
        let mut cfg = config(AiProvider::OpenAi, "http://127.0.0.1:9".into());
        cfg.api_key = None;
        let client = CloudClassifier::from_config(Client::new(), &cfg).unwrap();
        let err = client
            .classify(&message(), &mut LabelContext::new())
            .await
            .unwrap_err();
        assert!(matches!(err, CloudError::MissingApiKey("openai")));
    }
}
