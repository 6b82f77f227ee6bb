pub mod env;
mod loader;

pub use env::{
    AiConfig, AiProvider, AppConfig, ClassificationConfig, ConfigError, DirectoryConfig,
    LoggingConfig, RetryConfig,
};
pub use loader::load_config;
