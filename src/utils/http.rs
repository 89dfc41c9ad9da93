// src/utils/http.rs

//! HTTP client utilities with bounded retry.

use std::time::Duration;

use reqwest::{RequestBuilder, Response, StatusCode};
use serde::Serialize;

use crate::error::Result;
use crate::models::{HttpConfig, RetryConfig};

/// Retry policy derived from [`RetryConfig`].
#[derive(Debug, Clone)]
pub struct RetryPolicy {
    max_attempts: u32,
    base_delay: Duration,
    max_delay: Duration,
    retry_statuses: Vec<u16>,
}

impl RetryPolicy {
    pub fn new(config: &RetryConfig) -> Self {
        Self {
            max_attempts: config.max_attempts.max(1),
            base_delay: Duration::from_secs(config.base_delay_secs),
            max_delay: Duration::from_secs(config.max_delay_secs),
            retry_statuses: config.retry_statuses.clone(),
        }
    }

    /// Total attempts, including the first one.
    pub fn max_attempts(&self) -> u32 {
        self.max_attempts
    }

    /// Whether a response status is worth retrying.
    pub fn is_retryable(&self, status: StatusCode) -> bool {
        self.retry_statuses.contains(&status.as_u16())
    }

    /// Backoff before the n-th retry (0-based): base doubled each retry,
    /// capped at the configured maximum.
    pub fn delay_for(&self, retry: u32) -> Duration {
        let doubled = self
            .base_delay
            .saturating_mul(2u32.saturating_pow(retry.min(31)));
        doubled.min(self.max_delay)
    }
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self::new(&RetryConfig::default())
    }
}

/// HTTP client with automatic retry on transient status codes.
///
/// Cheap to clone; the fetcher and the publisher share one instance so
/// the connection pool is reused across the whole run. Retry-After
/// headers are ignored in favor of the computed backoff, and
/// connection-level errors are not retried.
#[derive(Debug, Clone)]
pub struct RetryingClient {
    inner: reqwest::Client,
    policy: RetryPolicy,
}

impl RetryingClient {
    /// Build a client from HTTP settings and a retry policy.
    pub fn new(http: &HttpConfig, policy: RetryPolicy) -> Result<Self> {
        let inner = reqwest::Client::builder()
            .user_agent(&http.user_agent)
            .timeout(Duration::from_secs(http.timeout_secs))
            .build()?;
        Ok(Self { inner, policy })
    }

    /// GET a URL, retrying transient failures.
    pub async fn get(&self, url: &str) -> Result<Response> {
        self.send_with_retry(|| self.inner.get(url)).await
    }

    /// POST a JSON body to a URL with query parameters, retrying
    /// transient failures.
    pub async fn post_json<T: Serialize + ?Sized>(
        &self,
        url: &str,
        query: &[(&str, &str)],
        body: &T,
    ) -> Result<Response> {
        self.send_with_retry(|| self.inner.post(url).query(query).json(body))
            .await
    }

    /// Send a request built by `build`, retrying on retryable statuses
    /// with exponential backoff. The final non-2xx status (retryable or
    /// not) surfaces as a transport error.
    async fn send_with_retry<F>(&self, build: F) -> Result<Response>
    where
        F: Fn() -> RequestBuilder,
    {
        let attempts = self.policy.max_attempts();
        let mut attempt: u32 = 0;

        loop {
            let response = build().send().await?;
            let status = response.status();
            attempt += 1;

            if attempt >= attempts || !self.policy.is_retryable(status) {
                return Ok(response.error_for_status()?);
            }

            let delay = self.policy.delay_for(attempt - 1);
            log::warn!(
                "HTTP {} from {}, retrying in {:?} (attempt {}/{})",
                status,
                response.url(),
                delay,
                attempt,
                attempts
            );
            tokio::time::sleep(delay).await;
        }
    }
}
