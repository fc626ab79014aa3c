//! Gateway error taxonomy.
//!
//! Every failure in the resolution pipeline is expressed as one
//! [`GatewayError`] variant. The set is closed on purpose: the outer
//! transport maps each kind onto its own error representation and must
//! never see anything outside this vocabulary.

use thiserror::Error;

/// Stable tag for a [`GatewayError`], used for transport mapping and logs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    InvalidIdentifier,
    InvalidParameter,
    NotFound,
    RateLimitExceeded,
    UpstreamApi,
    Internal,
}

impl ErrorKind {
    /// Machine-readable code for error bodies.
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::InvalidIdentifier => "INVALID_IDENTIFIER",
            Self::InvalidParameter => "INVALID_PARAMETER",
            Self::NotFound => "NOT_FOUND",
            Self::RateLimitExceeded => "RATE_LIMIT_EXCEEDED",
            Self::UpstreamApi => "UPSTREAM_API_ERROR",
            Self::Internal => "INTERNAL_ERROR",
        }
    }
}

/// Errors surfaced by identifier resolution and upstream execution.
#[derive(Debug, Error)]
pub enum GatewayError {
    /// No collection pattern matched the identifier shape.
    #[error("invalid identifier: {0}")]
    InvalidIdentifier(String),

    /// A pattern matched but a field failed its validator.
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),

    /// The upstream reported the entity missing (404, or the documented
    /// 500-with-"not found" quirk).
    #[error("not found: {0}")]
    NotFound(String),

    /// Local admission budget exhausted, or upstream returned 429.
    #[error("rate limit exceeded: {0}")]
    RateLimitExceeded(String),

    /// Any other upstream failure. `status` is `None` when no response
    /// arrived at all (connect error, timeout).
    #[error("upstream API error (status {status:?}): {message}")]
    UpstreamApi {
        status: Option<u16>,
        message: String,
    },

    /// Uncaught failure inside the gateway itself. Message only; never a
    /// raw backtrace.
    #[error("internal error: {0}")]
    Internal(String),
}

impl GatewayError {
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::InvalidIdentifier(_) => ErrorKind::InvalidIdentifier,
            Self::InvalidParameter(_) => ErrorKind::InvalidParameter,
            Self::NotFound(_) => ErrorKind::NotFound,
            Self::RateLimitExceeded(_) => ErrorKind::RateLimitExceeded,
            Self::UpstreamApi { .. } => ErrorKind::UpstreamApi,
            Self::Internal(_) => ErrorKind::Internal,
        }
    }
}

/// Strip a credential from text destined for logs or error records.
///
/// Upstream bodies occasionally echo the request back, so anything stored
/// on an error path goes through here first.
#[must_use]
pub fn redact_credential(text: &str, credential: &str) -> String {
    if credential.is_empty() {
        return text.to_string();
    }
    text.replace(credential, "[redacted]")
}
