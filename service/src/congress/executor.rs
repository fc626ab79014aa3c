//! Rate-limited request execution and upstream failure classification.

use std::sync::{Arc, Mutex, PoisonError};
use std::time::{Duration, Instant};

use serde_json::Value;

use crate::congress::client::{RawResponse, UpstreamClient};
use crate::congress::window::AdmissionWindow;
use crate::error::GatewayError;
use crate::identifier::ResolvedRequest;

/// Executes typed requests against the upstream under a shared admission
/// budget.
///
/// The window is pruned and checked synchronously before the outbound call
/// is issued, and a timestamp is recorded only after a successful response:
/// a failed call never consumes budget, a successful one always does.
pub struct RequestExecutor {
    client: Arc<dyn UpstreamClient>,
    window: Mutex<AdmissionWindow>,
}

impl RequestExecutor {
    #[must_use]
    pub fn new(client: Arc<dyn UpstreamClient>, max_requests: usize, window: Duration) -> Self {
        Self {
            client,
            window: Mutex::new(AdmissionWindow::new(max_requests, window)),
        }
    }

    /// Execute a resolved request and return the upstream JSON payload.
    ///
    /// # Errors
    /// `RateLimitExceeded` when the local budget is spent or the upstream
    /// returns 429; `NotFound` on 404 (and the upstream's 500-with-
    /// "not found" quirk); `UpstreamApi` on any other non-2xx response or
    /// when no response arrived at all.
    pub async fn execute(&self, resolved: &ResolvedRequest) -> Result<Value, GatewayError> {
        self.check_admission(Instant::now())?;

        let path = resolved.request.upstream_path();
        let query = build_query(resolved);

        match self.client.get(&path, &query).await {
            Ok(response) => self.classify(&path, response),
            Err(transport) => {
                tracing::warn!(path = %path, error = %transport, "no response from upstream");
                Err(GatewayError::UpstreamApi {
                    status: None,
                    message: format!("no response from upstream: {transport}"),
                })
            }
        }
    }

    fn check_admission(&self, now: Instant) -> Result<(), GatewayError> {
        let mut window = self.lock_window();
        if window.admit(now) {
            Ok(())
        } else {
            Err(GatewayError::RateLimitExceeded(format!(
                "request budget exhausted: {} calls already issued in the current window",
                window.max_requests()
            )))
        }
    }

    fn classify(&self, path: &str, response: RawResponse) -> Result<Value, GatewayError> {
        let RawResponse { status, body } = response;
        match status {
            200..=299 => {
                // The upstream spent budget on this call even if the body
                // turns out to be garbage.
                self.lock_window().record(Instant::now());
                serde_json::from_str(&body).map_err(|err| {
                    tracing::warn!(status, path = %path, "unparseable upstream payload");
                    GatewayError::UpstreamApi {
                        status: Some(status),
                        message: format!("upstream returned invalid JSON: {err}"),
                    }
                })
            }
            404 => Err(GatewayError::NotFound(format!("no entity at {path}"))),
            429 => Err(GatewayError::RateLimitExceeded(
                "upstream throttled the request".to_string(),
            )),
            // Documented upstream quirk: some absent resources surface as
            // server errors whose body says "not found".
            500 if body.to_ascii_lowercase().contains("not found") => {
                tracing::debug!(path = %path, "upstream reported a missing entity as a 500");
                Err(GatewayError::NotFound(format!("no entity at {path}")))
            }
            _ => {
                tracing::warn!(status, path = %path, "upstream API error");
                let message = if body.is_empty() {
                    "upstream returned an empty error body".to_string()
                } else {
                    body
                };
                Err(GatewayError::UpstreamApi {
                    status: Some(status),
                    message,
                })
            }
        }
    }

    fn lock_window(&self) -> std::sync::MutexGuard<'_, AdmissionWindow> {
        self.window.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

/// Forward the caller's query passthrough, forcing `format=json` so the
/// envelope's constant media type is truthful.
fn build_query(resolved: &ResolvedRequest) -> Vec<(String, String)> {
    let mut query: Vec<(String, String)> = resolved
        .params
        .iter()
        .filter(|(key, _)| key.as_str() != "format")
        .map(|(key, value)| (key.clone(), value.clone()))
        .collect();
    query.push(("format".to_string(), "json".to_string()));
    query
}
