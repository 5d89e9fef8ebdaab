//! Minimal HTTP page fetcher with safe logging and a fixed timeout.
//!
//! - One outbound GET per call, no retries
//! - Structured `tracing` events for request start, response, and failures
//! - Body snippets in logs are truncated to keep log lines bounded
//!
//! Example (no_run):
//! ```rust
//! # async fn demo() -> Result<(), storelens_http::HttpError> {
//! use storelens_http::{PageFetcher, PageSource};
//!
//! let fetcher = PageFetcher::new()?;
//! let url = url::Url::parse("https://example.com").unwrap();
//! let html = fetcher.fetch_page(&url).await?;
//! # let _ = html;
//! # Ok(()) }
//! ```

use reqwest::{Client, StatusCode};
use std::time::Duration;
use thiserror::Error;
use url::Url;

#[derive(Debug, Error)]
pub enum HttpError {
    #[error("invalid URL: {0}")]
    Url(String),
    #[error("client build failed: {0}")]
    Build(String),
    #[error("network error: {0}")]
    Network(String),
    #[error("server returned error {status}, body_snippet: {snippet}")]
    Status { status: StatusCode, snippet: String },
}

/// Source of raw page content. The concrete implementation performs a real
/// network fetch; tests substitute canned documents behind the same trait.
#[async_trait::async_trait]
pub trait PageSource: Send + Sync {
    async fn fetch_page(&self, url: &Url) -> Result<String, HttpError>;
}

/// Page fetcher backed by a shared `reqwest` client.
#[derive(Clone)]
pub struct PageFetcher {
    inner: Client,
    pub timeout: Duration,
}

impl PageFetcher {
    /// Construct a fetcher with the default 10 second total timeout.
    pub fn new() -> Result<Self, HttpError> {
        let inner = Client::builder()
            .connect_timeout(Duration::from_secs(5))
            .build()
            .map_err(|e| HttpError::Build(e.to_string()))?;
        Ok(Self {
            inner,
            timeout: Duration::from_secs(10),
        })
    }

    /// Override the default timeout returned by [`PageFetcher::new`].
    ///
    /// ```no_run
    /// use std::time::Duration;
    /// use storelens_http::{HttpError, PageFetcher};
    ///
    /// let fetcher = PageFetcher::new()?.with_timeout(Duration::from_secs(2));
    /// assert_eq!(fetcher.timeout, Duration::from_secs(2));
    /// # Ok::<(), HttpError>(())
    /// ```
    pub fn with_timeout(mut self, dur: Duration) -> Self {
        self.timeout = dur;
        self
    }
}

#[async_trait::async_trait]
impl PageSource for PageFetcher {
    async fn fetch_page(&self, url: &Url) -> Result<String, HttpError> {
        tracing::debug!(
            host_path=%format!("{}{}", url.domain().unwrap_or("-"), url.path()),
            timeout_ms=self.timeout.as_millis() as u64,
            "http.request.start"
        );

        let t0 = std::time::Instant::now();
        let resp = self
            .inner
            .get(url.clone())
            .timeout(self.timeout)
            .send()
            .await
            .map_err(|e| {
                tracing::warn!(url=%url, error=%e, "http.network_error.send");
                HttpError::Network(e.to_string())
            })?;

        let status = resp.status();
        let body = resp.text().await.map_err(|e| {
            tracing::warn!(url=%url, error=%e, "http.network_error.body");
            HttpError::Network(e.to_string())
        })?;
        let dur_ms = t0.elapsed().as_millis() as u64;

        tracing::debug!(
            %status,
            duration_ms=dur_ms,
            body_len=body.len(),
            "http.response"
        );

        if !status.is_success() {
            let snippet = snip_body(&body);
            tracing::warn!(%status, body_snippet=%snippet, "http.error");
            return Err(HttpError::Status { status, snippet });
        }

        Ok(body)
    }
}

fn snip_body(body: &str) -> String {
    let mut snip = body.to_string();
    if snip.len() > 500 {
        snip.truncate(500);
        snip.push_str("...");
    }
    snip
}
