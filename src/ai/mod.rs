pub mod client;
pub mod inference;
pub mod prompt;
pub mod retry;

use reqwest::StatusCode;
use thiserror::Error;

pub use client::{CloudClassifier, CloudProvider};

#[derive(Debug, Error)]
pub enum CloudError {
    #[error("no API key configured for {0}")]
    MissingApiKey(&'static str),
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("invalid endpoint: {0}")]
    Endpoint(#[from] url::ParseError),
    #[error("provider returned {status}: {body}")]
    Status { status: StatusCode, body: String },
    #[error("still rate limited after {attempts} attempts")]
    RateLimited { attempts: u32 },
    #[error("no response within {0:?}")]
    DeadlineExceeded(std::time::Duration),
    #[error("unexpected response shape: {0}")]
    MalformedResponse(String),
    #[error("model answer is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),
}
