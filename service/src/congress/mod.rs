//! Upstream congress.gov client, admission window, and executor.
//!
//! The module splits the outbound side of the gateway into three pieces:
//!
//! - [`UpstreamClient`] / [`HttpUpstreamClient`] - transport only: issue a
//!   GET, return whatever status and (redacted) body came back.
//! - [`AdmissionWindow`] - the sliding-window budget state.
//! - [`RequestExecutor`] - admission check, outbound call, and failure
//!   classification into the gateway error taxonomy.
//!
//! Unit tests drive the executor through [`mock::MockUpstreamClient`];
//! integration tests under `tests/` stub real HTTP with `wiremock`.

mod client;
mod executor;
mod window;

pub use client::{HttpUpstreamClient, RawResponse, TransportError, UpstreamClient};
pub use executor::RequestExecutor;
pub use window::AdmissionWindow;

#[cfg(any(test, feature = "test-utils"))]
pub use client::mock;
