//! Okta API client

use async_trait::async_trait;

use crate::error::Result;

#[cfg(test)]
pub mod mock;
pub mod models;
pub mod okta;
pub mod requests;

#[cfg(test)]
pub use mock::MockOktaClient;
pub use models::{ApiRequest, ApiResponse, CreateOutcome, LinkOutcome, SwaApplication};
pub use okta::OktaClient;
pub use requests::OktaEndpoints;

/// Transport for prepared Okta API requests.
///
/// Requests are built by [`OktaEndpoints`] so callers can inspect them
/// before they go out; implementations only move bytes.
#[async_trait]
pub trait OktaApi: Send + Sync {
    /// Send a request and read the full response.
    ///
    /// Any HTTP status is returned as a response. Only transport failures
    /// are errors.
    async fn send(&self, request: &ApiRequest) -> Result<ApiResponse>;
}
