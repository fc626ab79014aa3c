//! HTTP transport boundary.
//!
//! The outer framing for the resolution pipeline: one resolve route, a
//! health check, and the single place where taxonomy kinds become HTTP
//! statuses. The core guarantees a closed error vocabulary; this module
//! owns the mapping out of it.

use std::sync::Arc;

use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
    routing::get,
    Json, Router,
};
use serde::{Deserialize, Serialize, Serializer};
use tower_http::trace::TraceLayer;

use crate::envelope::Envelope;
use crate::error::{ErrorKind, GatewayError};
use crate::gateway::Gateway;

/// Serialize a `StatusCode` as its `u16` representation.
#[allow(clippy::trivially_copy_pass_by_ref)] // serde requires `&T` signature
fn serialize_status_code<S: Serializer>(status: &StatusCode, s: S) -> Result<S::Ok, S::Error> {
    s.serialize_u16(status.as_u16())
}

/// RFC 7807 Problem Details error response.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProblemDetails {
    /// URI reference identifying the problem type
    #[serde(rename = "type")]
    pub problem_type: String,
    /// Short human-readable summary
    pub title: String,
    /// HTTP status code
    #[serde(serialize_with = "serialize_status_code")]
    pub status: StatusCode,
    /// Human-readable explanation specific to this occurrence
    pub detail: String,
    /// Additional error details
    pub extensions: ProblemExtensions,
}

/// Extended error information carrying the taxonomy code.
#[derive(Debug, Serialize)]
pub struct ProblemExtensions {
    /// Stable error code from the gateway taxonomy
    pub code: String,
}

impl ProblemDetails {
    /// Map a gateway error onto its HTTP representation.
    #[must_use]
    pub fn from_error(err: &GatewayError) -> Self {
        let kind = err.kind();
        let (status, title, slug) = match kind {
            ErrorKind::InvalidIdentifier => {
                (StatusCode::BAD_REQUEST, "Invalid Identifier", "invalid-identifier")
            }
            ErrorKind::InvalidParameter => {
                (StatusCode::BAD_REQUEST, "Invalid Parameter", "invalid-parameter")
            }
            ErrorKind::NotFound => (StatusCode::NOT_FOUND, "Not Found", "not-found"),
            ErrorKind::RateLimitExceeded => (
                StatusCode::TOO_MANY_REQUESTS,
                "Rate Limit Exceeded",
                "rate-limit-exceeded",
            ),
            ErrorKind::UpstreamApi => (
                StatusCode::BAD_GATEWAY,
                "Upstream API Error",
                "upstream-api-error",
            ),
            ErrorKind::Internal => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "Internal Server Error",
                "internal-error",
            ),
        };

        Self {
            problem_type: format!("https://congressgateway.dev/errors/{slug}"),
            title: title.to_string(),
            status,
            detail: err.to_string(),
            extensions: ProblemExtensions {
                code: kind.code().to_string(),
            },
        }
    }
}

impl From<GatewayError> for ProblemDetails {
    fn from(err: GatewayError) -> Self {
        Self::from_error(&err)
    }
}

impl IntoResponse for ProblemDetails {
    fn into_response(self) -> axum::response::Response {
        (self.status, Json(self)).into_response()
    }
}

#[derive(Debug, Deserialize)]
struct ResolveParams {
    id: String,
}

async fn resolve_handler(
    State(gateway): State<Arc<Gateway>>,
    Query(params): Query<ResolveParams>,
) -> Result<Json<Envelope>, ProblemDetails> {
    let envelope = gateway.resolve(&params.id).await?;
    Ok(Json(envelope))
}

// Health check handler
async fn health_check() -> impl IntoResponse {
    StatusCode::OK
}

/// Build the application router around a shared gateway.
pub fn router(gateway: Arc<Gateway>) -> Router {
    Router::new()
        .route("/v1/resolve", get(resolve_handler))
        .route("/health", get(health_check))
        .layer(TraceLayer::new_for_http())
        .with_state(gateway)
}
