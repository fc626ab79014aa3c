//! Uniform success-response wrapper.

use serde::Serialize;
use serde_json::Value;

use crate::error::GatewayError;

/// The contents structure returned for every successful resolution.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Envelope {
    /// The identifier exactly as the caller supplied it.
    pub identifier: String,
    /// Always [`Envelope::MEDIA_TYPE`].
    pub media_type: &'static str,
    /// The serialized upstream payload.
    pub body: String,
}

impl Envelope {
    pub const MEDIA_TYPE: &'static str = "application/json";

    /// Pair a payload with its originating identifier.
    ///
    /// Deterministic and side-effect-free.
    ///
    /// # Errors
    /// `Internal` if the payload cannot be serialized.
    pub fn wrap(identifier: &str, payload: &Value) -> Result<Self, GatewayError> {
        let body = serde_json::to_string(payload)
            .map_err(|err| GatewayError::Internal(format!("payload serialization failed: {err}")))?;
        Ok(Self {
            identifier: identifier.to_string(),
            media_type: Self::MEDIA_TYPE,
            body,
        })
    }
}
