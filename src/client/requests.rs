//! Request builders for the Okta apps API

use reqwest::Method;

use super::models::{ApiRequest, SwaApplication};
use crate::config::AuthToken;
use crate::error::Result;

/// Path of the apps collection, relative to the org URL
const APPS_PATH: &str = "/api/v1/apps";

/// Authorization scheme for Okta API tokens
const AUTH_SCHEME: &str = "SSWS";

/// Builds authenticated requests against one Okta org
#[derive(Debug, Clone)]
pub struct OktaEndpoints {
    base_url: String,
    token: AuthToken,
}

impl OktaEndpoints {
    /// Create endpoints for an org URL such as `https://example.okta.com`.
    pub fn new(base_url: &str, token: AuthToken) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            token,
        }
    }

    /// URL of the app creation endpoint
    pub fn apps_url(&self) -> String {
        format!("{}{}", self.base_url, APPS_PATH)
    }

    /// URL that assigns an app to a group
    pub fn app_group_url(&self, application_id: &str, group_id: &str) -> String {
        format!(
            "{}{}/{}/groups/{}",
            self.base_url, APPS_PATH, application_id, group_id
        )
    }

    /// `POST /api/v1/apps` with the app as JSON body
    pub fn create_app(&self, app: &SwaApplication) -> Result<ApiRequest> {
        Ok(ApiRequest {
            method: Method::POST,
            url: self.apps_url(),
            headers: self.headers(),
            body: Some(serde_json::to_string(app)?),
        })
    }

    /// `PUT /api/v1/apps/{app}/groups/{group}` with no body
    pub fn assign_group(&self, application_id: &str, group_id: &str) -> ApiRequest {
        ApiRequest {
            method: Method::PUT,
            url: self.app_group_url(application_id, group_id),
            headers: self.headers(),
            body: None,
        }
    }

    fn headers(&self) -> Vec<(String, String)> {
        vec![
            ("Content-type".to_string(), "application/json".to_string()),
            ("Accept".to_string(), "application/json".to_string()),
            (
                "Authorization".to_string(),
                format!("{} {}", AUTH_SCHEME, self.token.expose()),
            ),
        ]
    }
}
