//! Okta API client implementation

use async_trait::async_trait;
use reqwest::Client as HttpClient;

use super::OktaApi;
use super::models::{ApiRequest, ApiResponse};
use crate::error::{ApiError, Result};

/// HTTP client for the Okta API.
///
/// No request timeout is configured; calls block until Okta answers or the
/// connection fails.
pub struct OktaClient {
    http: HttpClient,
}

impl OktaClient {
    /// Create a new Okta API client
    pub fn new() -> Result<Self> {
        let http = HttpClient::builder()
            .user_agent(concat!("okta-swa/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| ApiError::Network(e.to_string()))?;

        Ok(Self { http })
    }
}

#[async_trait]
impl OktaApi for OktaClient {
    async fn send(&self, request: &ApiRequest) -> Result<ApiResponse> {
        let mut builder = self.http.request(request.method.clone(), &request.url);
        for (name, value) in &request.headers {
            builder = builder.header(name.as_str(), value.as_str());
        }
        if let Some(ref body) = request.body {
            builder = builder.body(body.clone());
        }

        let response = builder.send().await.map_err(ApiError::from)?;

        let status = response.status().as_u16();
        let headers = response
            .headers()
            .iter()
            .map(|(name, value)| {
                (
                    name.to_string(),
                    String::from_utf8_lossy(value.as_bytes()).into_owned(),
                )
            })
            .collect();
        let body = response.text().await.map_err(ApiError::from)?;

        Ok(ApiResponse {
            status,
            headers,
            body,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::{OktaEndpoints, SwaApplication};
    use crate::config::AuthToken;

    #[test]
    fn test_client_creation() {
        let client = OktaClient::new();
        assert!(client.is_ok());
    }

    #[tokio::test]
    async fn test_send_returns_non_success_status_as_response() {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("POST", "/api/v1/apps")
            .match_header("authorization", "SSWS test-token")
            .match_header("accept", "application/json")
            .with_status(400)
            .with_header("content-type", "application/json")
            .with_body(r#"{"errorCode":"E0000001"}"#)
            .create_async()
            .await;

        let endpoints = OktaEndpoints::new(&server.url(), AuthToken::new("test-token"));
        let app = SwaApplication::new("Acme", "https://acme/auth/login", "u@x", "pw");
        let request = endpoints.create_app(&app).unwrap();

        let response = OktaClient::new().unwrap().send(&request).await.unwrap();
        assert_eq!(response.status, 400);
        assert!(response.body.contains("E0000001"));
        assert!(
            response
                .headers
                .iter()
                .any(|(k, v)| k == "content-type" && v == "application/json")
        );
    }

    #[tokio::test]
    async fn test_send_put_without_body() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("PUT", "/api/v1/apps/0oaXYZ/groups/00g1")
            .match_body("")
            .with_status(204)
            .create_async()
            .await;

        let endpoints = OktaEndpoints::new(&server.url(), AuthToken::new("t"));
        let request = endpoints.assign_group("0oaXYZ", "00g1");

        let response = OktaClient::new().unwrap().send(&request).await.unwrap();
        assert_eq!(response.status, 204);
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_connection_failure_is_network_error() {
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let endpoints = OktaEndpoints::new(&format!("http://{}", addr), AuthToken::new("t"));
        let request = endpoints.assign_group("a", "g");

        let err = OktaClient::new().unwrap().send(&request).await.unwrap_err();
        assert!(matches!(
            err,
            crate::error::Error::Api(ApiError::Network(_))
        ));
    }
}
