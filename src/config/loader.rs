use std::{env, str::FromStr, time::Duration};

use super::env::{
    AiConfig, AiProvider, AppConfig, ClassificationConfig, ConfigError, DirectoryConfig,
    LoggingConfig, RetryConfig,
};

pub fn load_config() -> Result<AppConfig, ConfigError> {
    AppConfig::from_env()
}

impl AppConfig {
    fn from_env() -> Result<Self, ConfigError> {
        let retry_defaults = RetryConfig::default();
        let retry = RetryConfig {
            max_retries: parse_or("AI_MAX_RETRIES", retry_defaults.max_retries)?,
            base_delay: Duration::from_millis(parse_or(
                "AI_RETRY_BASE_MS",
                retry_defaults.base_delay.as_millis() as u64,
            )?),
            deadline: Duration::from_millis(parse_or(
                "AI_REQUEST_DEADLINE_MS",
                retry_defaults.deadline.as_millis() as u64,
            )?),
        };

        let ai = AiConfig {
            provider: match non_empty("AI_PROVIDER") {
                Some(value) => AiProvider::from_str(&value)?,
                None => AiProvider::Local,
            },
            api_key: non_empty("AI_API_KEY"),
            model: non_empty("AI_MODEL"),
            endpoint: non_empty("AI_ENDPOINT"),
            retry,
        };

        let defaults = ClassificationConfig::default();
        let min_confidence_for_auto_label: f64 = parse_or(
            "MIN_CONFIDENCE_FOR_AUTO_LABEL",
            defaults.min_confidence_for_auto_label,
        )?;
        if !(0.0..=1.0).contains(&min_confidence_for_auto_label) {
            return Err(ConfigError::Invalid {
                key: "MIN_CONFIDENCE_FOR_AUTO_LABEL",
                value: min_confidence_for_auto_label.to_string(),
            });
        }
        let classification = ClassificationConfig {
            min_confidence_for_auto_label,
            min_score: parse_or("MIN_SCORE", defaults.min_score)?,
            learned_max_entries: at_least_one(
                "LEARNED_MAX_ENTRIES",
                parse_or("LEARNED_MAX_ENTRIES", defaults.learned_max_entries)?,
            )?,
        };

        let directories = DirectoryConfig {
            logs_dir: env::var("LOGS_DIR").unwrap_or_else(|_| "logs".to_string()),
            data_dir: env::var("DATA_DIR").unwrap_or_else(|_| "data".to_string()),
            db_filename: env::var("DB_FILENAME")
                .unwrap_or_else(|_| "mail-labeler.db".to_string()),
        };

        let logging = LoggingConfig {
            level: env::var("LOG_LEVEL").unwrap_or_else(|_| "info".to_string()),
        };

        Ok(Self {
            ai,
            classification,
            directories,
            logging,
        })
    }
}

fn non_empty(key: &str) -> Option<String> {
    env::var(key)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

fn parse_or<T: FromStr>(key: &'static str, default: T) -> Result<T, ConfigError> {
    match non_empty(key) {
        Some(value) => value
            .parse::<T>()
            .map_err(|_| ConfigError::Invalid { key, value }),
        None => Ok(default),
    }
}

/// A zero cap would evict a learned row in the same transaction that wrote it.
fn at_least_one(key: &'static str, value: u32) -> Result<u32, ConfigError> {
    if value == 0 {
        return Err(ConfigError::Invalid {
            key,
            value: value.to_string(),
        });
    }
    Ok(value)
}
