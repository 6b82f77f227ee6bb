use std::{fmt, str::FromStr, time::Duration};

use thiserror::Error;

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub ai: AiConfig,
    pub classification: ClassificationConfig,
    pub directories: DirectoryConfig,
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AiProvider {
    #[default]
    Local,
    Gemini,
    Groq,
    OpenAi,
}

impl AiProvider {
    pub fn as_str(&self) -> &'static str {
        match self {
            AiProvider::Local => "local",
            AiProvider::Gemini => "gemini",
            AiProvider::Groq => "groq",
            AiProvider::OpenAi => "openai",
        }
    }

    /// Pause an orchestrator should leave between two classifications so the
    /// provider's free-tier request quota is respected.
    pub fn pacing_delay(&self) -> Duration {
        match self {
            AiProvider::Local => Duration::from_millis(50),
            AiProvider::Gemini => Duration::from_millis(4_500),
            AiProvider::Groq => Duration::from_millis(2_200),
            AiProvider::OpenAi => Duration::from_millis(500),
        }
    }
}

impl fmt::Display for AiProvider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AiProvider {
    type Err = ConfigError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "" | "local" => Ok(AiProvider::Local),
            "gemini" => Ok(AiProvider::Gemini),
            "groq" => Ok(AiProvider::Groq),
            "openai" => Ok(AiProvider::OpenAi),
            other => Err(ConfigError::Invalid {
                key: "AI_PROVIDER",
                value: other.to_string(),
            }),
        }
    }
}

#[derive(Debug, Clone)]
pub struct AiConfig {
    pub provider: AiProvider,
    pub api_key: Option<String>,
    pub model: Option<String>,
    pub endpoint: Option<String>,
    pub retry: RetryConfig,
}

impl Default for AiConfig {
    fn default() -> Self {
        Self {
            provider: AiProvider::Local,
            api_key: None,
            model: None,
            endpoint: None,
            retry: RetryConfig::default(),
        }
    }
}

/// Bounds for one remote classification call including all of its retries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryConfig {
    pub max_retries: u32,
    pub base_delay: Duration,
    pub deadline: Duration,
}

impl Default for RetryConfig {
    fn default() -> Self {
        Self {
            max_retries: 3,
            base_delay: Duration::from_millis(1_000),
            deadline: Duration::from_secs(60),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ClassificationConfig {
    pub min_confidence_for_auto_label: f64,
    pub min_score: u32,
    pub learned_max_entries: u32,
}

impl Default for ClassificationConfig {
    fn default() -> Self {
        Self {
            min_confidence_for_auto_label: 0.7,
            min_score: 1,
            learned_max_entries: 5_000,
        }
    }
}

#[derive(Debug, Clone)]
pub struct DirectoryConfig {
    pub logs_dir: String,
    pub data_dir: String,
    pub db_filename: String,
}

#[derive(Debug, Clone)]
pub struct LoggingConfig {
    pub level: String,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid value for {key}: {value:?}")]
    Invalid { key: &'static str, value: String },
}
