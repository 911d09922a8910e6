//! Plain descriptions of HTTP exchanges with Okta
//!
//! Requests are built before they are sent and responses are captured in full,
//! so the orchestrator can report both sides of every call.

use reqwest::{Method, StatusCode};

use super::app::CreatedApplication;

/// An HTTP request ready to be sent
#[derive(Debug, Clone, PartialEq)]
pub struct ApiRequest {
    pub method: Method,
    pub url: String,
    pub headers: Vec<(String, String)>,
    /// JSON body, if any
    pub body: Option<String>,
}

impl ApiRequest {
    /// Look up a header value by case-insensitive name
    #[allow(dead_code)]
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }
}

/// A fully read HTTP response
#[derive(Debug, Clone, PartialEq)]
pub struct ApiResponse {
    pub status: u16,
    pub headers: Vec<(String, String)>,
    pub body: String,
}

impl ApiResponse {
    #[allow(dead_code)]
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            headers: Vec::new(),
            body: body.into(),
        }
    }

    /// Status line in the form `200 OK`
    pub fn status_line(&self) -> String {
        match StatusCode::from_u16(self.status) {
            Ok(code) => match code.canonical_reason() {
                Some(reason) => format!("{} {}", self.status, reason),
                None => self.status.to_string(),
            },
            Err(_) => self.status.to_string(),
        }
    }
}

/// Result of an app creation call
#[derive(Debug, Clone, PartialEq)]
pub enum CreateOutcome {
    /// HTTP 200 with a non-blank `id`
    Created { id: String },

    /// Any status other than 200
    Rejected { status: u16, body: String },

    /// HTTP 200 whose body has no usable application id
    Malformed { body: String, reason: String },
}

impl CreateOutcome {
    /// Classify a creation response.
    ///
    /// Only 200 counts as success; Okta answers app creation with 200, not 201.
    pub fn from_response(response: &ApiResponse) -> Self {
        if response.status != StatusCode::OK.as_u16() {
            return CreateOutcome::Rejected {
                status: response.status,
                body: response.body.clone(),
            };
        }

        match serde_json::from_str::<CreatedApplication>(&response.body) {
            Ok(created) if created.id.trim().is_empty() => CreateOutcome::Malformed {
                body: response.body.clone(),
                reason: "empty application id".to_string(),
            },
            Ok(created) => CreateOutcome::Created { id: created.id },
            Err(e) => CreateOutcome::Malformed {
                body: response.body.clone(),
                reason: e.to_string(),
            },
        }
    }

    /// The created application ID, if creation succeeded
    pub fn application_id(&self) -> Option<&str> {
        match self {
            CreateOutcome::Created { id } => Some(id),
            _ => None,
        }
    }
}

/// Result of a group link call. Recorded, never acted upon.
#[derive(Debug, Clone, PartialEq)]
pub struct LinkOutcome {
    pub status: u16,
    pub body: String,
}

impl From<&ApiResponse> for LinkOutcome {
    fn from(response: &ApiResponse) -> Self {
        Self {
            status: response.status,
            body: response.body.clone(),
        }
    }
}

impl LinkOutcome {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}
