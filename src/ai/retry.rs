use std::time::Duration;

use reqwest::{header::RETRY_AFTER, RequestBuilder, Response, StatusCode};
use tokio::time::{sleep, timeout};

use crate::config::RetryConfig;

use super::CloudError;

/// Sends the request built by `build`, retrying on HTTP 429 only. Every other
/// non-success status fails immediately. The whole loop, sleeps included, is
/// bounded by `policy.deadline`.
pub async fn send_with_retry<F>(policy: &RetryConfig, build: F) -> Result<Response, CloudError>
where
    F: Fn() -> RequestBuilder,
{
    let attempts = async {
        let mut attempt: u32 = 0;
        loop {
            let response = build().send().await?;
            let status = response.status();

            if status == StatusCode::TOO_MANY_REQUESTS {
                if attempt >= policy.max_retries {
                    return Err(CloudError::RateLimited {
                        attempts: attempt + 1,
                    });
                }
                let delay = retry_after(&response).unwrap_or_else(|| backoff(policy, attempt));
                tracing::warn!(
                    target: "cloud",
                    attempt = attempt + 1,
                    delay_ms = delay.as_millis() as u64,
                    "rate limited; retrying"
                );
                sleep(delay).await;
                attempt += 1;
                continue;
            }

            if !status.is_success() {
                let body = response.text().await.unwrap_or_default();
                return Err(CloudError::Status { status, body });
            }

            return Ok(response);
        }
    };

    timeout(policy.deadline, attempts)
        .await
        .map_err(|_| CloudError::DeadlineExceeded(policy.deadline))?
}

/// `base * 2^(attempt + 1)`.
pub fn backoff(policy: &RetryConfig, attempt: u32) -> Duration {
    let factor = 2u32.saturating_pow(attempt.saturating_add(1));
    policy.base_delay.saturating_mul(factor)
}

fn retry_after(response: &Response) -> Option<Duration> {
    response
        .headers()
        .get(RETRY_AFTER)?
        .to_str()
        .ok()?
        .trim()
        .parse::<u64>()
        .ok()
        .map(Duration::from_secs)
}
