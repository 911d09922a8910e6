//! Okta API data models
//!
//! Payload types sent to the Okta apps API and the request/response
//! descriptions exchanged with it.

mod app;
mod exchange;

pub use app::SwaApplication;
pub use exchange::{ApiRequest, ApiResponse, CreateOutcome, LinkOutcome};
