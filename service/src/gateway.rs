//! The resolution pipeline facade.
//!
//! One entry point ties the stages together: identifier string → dispatcher
//! → typed request → rate-limited executor → envelope. Collaborators are
//! injected at construction; there is no module-level state.

use crate::congress::RequestExecutor;
use crate::envelope::Envelope;
use crate::error::GatewayError;
use crate::identifier;

/// Resolves identifiers end to end.
pub struct Gateway {
    executor: RequestExecutor,
}

impl Gateway {
    #[must_use]
    pub const fn new(executor: RequestExecutor) -> Self {
        Self { executor }
    }

    /// Resolve an identifier, fetch its payload, and wrap it.
    ///
    /// # Errors
    /// Any [`GatewayError`] kind: resolution failures never reach the
    /// network; admission and upstream failures carry the executor's
    /// classification.
    pub async fn resolve(&self, identifier: &str) -> Result<Envelope, GatewayError> {
        let resolved = identifier::resolve(identifier)?;
        tracing::debug!(
            path = %resolved.request.upstream_path(),
            "identifier resolved"
        );

        let payload = self.executor.execute(&resolved).await?;
        Envelope::wrap(identifier, &payload)
    }
}
