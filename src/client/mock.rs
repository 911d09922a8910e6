//! Mock Okta API client for testing
//!
//! Provides a mock implementation of [`OktaApi`] for unit testing
//! without making real API calls.

use std::collections::VecDeque;
use std::sync::Arc;

use async_trait::async_trait;
use reqwest::Method;
use tokio::sync::Mutex;

use super::OktaApi;
use super::models::{ApiRequest, ApiResponse};
use crate::error::{ApiError, Result};

/// Mock API client for testing.
///
/// Creation responses are consumed in order, one per POST. Every PUT gets
/// the same link response.
///
/// # Example
/// ```ignore
/// let mock = MockOktaClient::new()
///     .with_create_responses(vec![ApiResponse::new(200, r#"{"id":"0oa1"}"#)])
///     .await;
///
/// let response = mock.send(&request).await?;
/// assert_eq!(mock.captured_requests().await.len(), 1);
/// ```
pub struct MockOktaClient {
    /// Responses returned to successive POSTs
    create_responses: Arc<Mutex<VecDeque<ApiResponse>>>,
    /// Response returned to every PUT
    link_response: Arc<Mutex<ApiResponse>>,
    /// Error to return (if any) - consumed on first use
    error: Arc<Mutex<Option<ApiError>>>,
    /// Captured requests for test assertions
    captured_requests: Arc<Mutex<Vec<ApiRequest>>>,
}

impl Default for MockOktaClient {
    fn default() -> Self {
        Self {
            create_responses: Arc::new(Mutex::new(VecDeque::new())),
            link_response: Arc::new(Mutex::new(ApiResponse::new(200, "{}"))),
            error: Arc::new(Mutex::new(None)),
            captured_requests: Arc::new(Mutex::new(Vec::new())),
        }
    }
}

impl MockOktaClient {
    /// Create a new mock client with default responses.
    pub fn new() -> Self {
        Self::default()
    }

    /// Configure responses for successive creation calls.
    pub async fn with_create_responses(self, responses: Vec<ApiResponse>) -> Self {
        *self.create_responses.lock().await = responses.into();
        self
    }

    /// Configure the response for group link calls.
    pub async fn with_link_response(self, response: ApiResponse) -> Self {
        *self.link_response.lock().await = response;
        self
    }

    /// Configure an error to return on the next call.
    pub async fn with_error(self, error: ApiError) -> Self {
        *self.error.lock().await = Some(error);
        self
    }

    /// All requests sent so far, in order.
    pub async fn captured_requests(&self) -> Vec<ApiRequest> {
        self.captured_requests.lock().await.clone()
    }

    /// Requests sent with the given method.
    pub async fn requests_with_method(&self, method: Method) -> Vec<ApiRequest> {
        self.captured_requests
            .lock()
            .await
            .iter()
            .filter(|r| r.method == method)
            .cloned()
            .collect()
    }
}

#[async_trait]
impl OktaApi for MockOktaClient {
    async fn send(&self, request: &ApiRequest) -> Result<ApiResponse> {
        self.captured_requests.lock().await.push(request.clone());

        if let Some(err) = self.error.lock().await.take() {
            return Err(err.into());
        }

        if request.method == Method::POST {
            let next = self.create_responses.lock().await.pop_front();
            Ok(next.unwrap_or_else(|| ApiResponse::new(500, "no scripted response")))
        } else {
            Ok(self.link_response.lock().await.clone())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(method: Method) -> ApiRequest {
        ApiRequest {
            method,
            url: "https://example.okta.com/api/v1/apps".to_string(),
            headers: Vec::new(),
            body: None,
        }
    }

    #[tokio::test]
    async fn test_create_responses_consumed_in_order() {
        let mock = MockOktaClient::new()
            .with_create_responses(vec![
                ApiResponse::new(200, r#"{"id":"a"}"#),
                ApiResponse::new(500, "boom"),
            ])
            .await;

        assert_eq!(mock.send(&request(Method::POST)).await.unwrap().status, 200);
        assert_eq!(mock.send(&request(Method::POST)).await.unwrap().status, 500);
        assert_eq!(mock.captured_requests().await.len(), 2);
    }

    #[tokio::test]
    async fn test_error_consumed_once() {
        let mock = MockOktaClient::new()
            .with_error(ApiError::Network("down".to_string()))
            .await;

        assert!(mock.send(&request(Method::PUT)).await.is_err());
        assert!(mock.send(&request(Method::PUT)).await.is_ok());
        assert_eq!(mock.requests_with_method(Method::PUT).await.len(), 2);
    }
}
