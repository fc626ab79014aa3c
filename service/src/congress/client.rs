//! Upstream HTTP client for the congress.gov API.
//!
//! The trait abstraction mirrors the rest of the service's seams: a real
//! `reqwest` implementation for production, a queue-driven mock (behind
//! `test-utils`) for unit tests, and `wiremock` in integration tests for
//! HTTP-level coverage.
//!
//! The client performs no failure classification — it hands back whatever
//! status and body arrived and the executor decides what they mean. It does
//! own the credential, so everything it returns is already redacted.

use async_trait::async_trait;
use thiserror::Error;

use crate::error::redact_credential;

/// A raw upstream response, before classification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawResponse {
    pub status: u16,
    pub body: String,
}

/// Transport-level failure: no usable HTTP response arrived at all.
#[derive(Debug, Clone, Error)]
#[error("{message}")]
pub struct TransportError {
    pub message: String,
}

/// Trait for issuing GET calls against the upstream API.
#[async_trait]
pub trait UpstreamClient: Send + Sync {
    /// Issue a GET for `path` (relative to the API base) with `query`
    /// appended.
    ///
    /// # Errors
    /// `TransportError` only when no response arrived; any response,
    /// whatever its status, is returned as [`RawResponse`].
    async fn get(
        &self,
        path: &str,
        query: &[(String, String)],
    ) -> Result<RawResponse, TransportError>;
}

/// `reqwest`-based implementation of [`UpstreamClient`].
///
/// Authenticates with the `X-Api-Key` header so the credential never
/// appears in a URL; bodies and transport messages are passed through
/// [`redact_credential`] anyway before leaving this module.
pub struct HttpUpstreamClient {
    client: reqwest::Client,
    base_url: String,
    api_key: String,
}

impl HttpUpstreamClient {
    /// Create a new client with the given base URL and API key.
    pub fn new(base_url: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.into(),
            api_key: api_key.into(),
        }
    }

    /// Create a client with a custom `reqwest::Client` (timeouts, proxies).
    pub fn with_client(
        client: reqwest::Client,
        base_url: impl Into<String>,
        api_key: impl Into<String>,
    ) -> Self {
        Self {
            client,
            base_url: base_url.into(),
            api_key: api_key.into(),
        }
    }
}

#[async_trait]
impl UpstreamClient for HttpUpstreamClient {
    async fn get(
        &self,
        path: &str,
        query: &[(String, String)],
    ) -> Result<RawResponse, TransportError> {
        let url = format!("{}{}", self.base_url, path);

        let response = self
            .client
            .get(&url)
            .header("X-Api-Key", &self.api_key)
            .query(query)
            .send()
            .await
            .map_err(|err| TransportError {
                message: redact_credential(&err.to_string(), &self.api_key),
            })?;

        let status = response.status().as_u16();
        let body = response.text().await.unwrap_or_default();

        Ok(RawResponse {
            status,
            body: redact_credential(&body, &self.api_key),
        })
    }
}

#[cfg(any(test, feature = "test-utils"))]
#[allow(
    clippy::unwrap_used,
    clippy::missing_panics_doc,
    clippy::missing_const_for_fn,
    clippy::must_use_candidate
)]
pub mod mock {
    //! Queue-driven mock implementation for unit testing.

    use super::{RawResponse, TransportError, UpstreamClient};
    use async_trait::async_trait;
    use std::collections::VecDeque;
    use std::sync::Mutex;

    /// Mock [`UpstreamClient`] for unit tests.
    ///
    /// Responses are consumed in FIFO order via `push_response`; with an
    /// empty queue every call returns `200 {}`. Issued calls are recorded
    /// and retrievable with `calls()`.
    pub struct MockUpstreamClient {
        responses: Mutex<VecDeque<Result<RawResponse, TransportError>>>,
        calls: Mutex<Vec<(String, Vec<(String, String)>)>>,
    }

    impl MockUpstreamClient {
        pub fn new() -> Self {
            Self {
                responses: Mutex::new(VecDeque::new()),
                calls: Mutex::new(Vec::new()),
            }
        }

        /// Queue the next response.
        pub fn push_response(&self, response: Result<RawResponse, TransportError>) {
            self.responses.lock().unwrap().push_back(response);
        }

        /// Queue a plain status/body response.
        pub fn push_status(&self, status: u16, body: &str) {
            self.push_response(Ok(RawResponse {
                status,
                body: body.to_string(),
            }));
        }

        /// All `(path, query)` pairs issued so far.
        pub fn calls(&self) -> Vec<(String, Vec<(String, String)>)> {
            self.calls.lock().unwrap().clone()
        }
    }

    impl Default for MockUpstreamClient {
        fn default() -> Self {
            Self::new()
        }
    }

    #[async_trait]
    impl UpstreamClient for MockUpstreamClient {
        async fn get(
            &self,
            path: &str,
            query: &[(String, String)],
        ) -> Result<RawResponse, TransportError> {
            self.calls
                .lock()
                .unwrap()
                .push((path.to_string(), query.to_vec()));

            self.responses
                .lock()
                .unwrap()
                .pop_front()
                .unwrap_or_else(|| {
                    Ok(RawResponse {
                        status: 200,
                        body: "{}".to_string(),
                    })
                })
        }
    }
}
