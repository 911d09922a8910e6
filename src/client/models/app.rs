//! Okta application models

use serde::{Deserialize, Serialize};

/// Sign-on mode for SWA apps that submit the login form automatically
pub const SIGN_ON_MODE_AUTO_LOGIN: &str = "AUTO_LOGIN";

/// Credential scheme where every assignee shares one username/password
pub const SCHEME_SHARED_USERNAME_AND_PASSWORD: &str = "SHARED_USERNAME_AND_PASSWORD";

/// Creation payload for an Okta SWA application.
///
/// The shape is fixed by the Okta apps API; only the label, login URL,
/// shared username and password vary.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SwaApplication {
    /// Display label of the app
    pub label: String,

    pub visibility: Visibility,

    /// Always empty for SWA apps
    pub features: Vec<String>,

    pub sign_on_mode: String,

    pub settings: AppSettings,

    pub credentials: AppCredentials,
}

impl SwaApplication {
    /// Build a shared-credential auto-login app.
    pub fn new(
        label: impl Into<String>,
        login_url: impl Into<String>,
        shared_username: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        Self {
            label: label.into(),
            visibility: Visibility::default(),
            features: Vec::new(),
            sign_on_mode: SIGN_ON_MODE_AUTO_LOGIN.to_string(),
            settings: AppSettings {
                sign_on: SignOnSettings {
                    redirect_url: String::new(),
                    login_url: login_url.into(),
                },
            },
            credentials: AppCredentials {
                scheme: SCHEME_SHARED_USERNAME_AND_PASSWORD.to_string(),
                user_name_template: UserNameTemplate::default(),
                user_name: shared_username.into(),
                password: PasswordValue {
                    value: password.into(),
                },
            },
        }
    }

    /// Login URL the app submits credentials to
    pub fn login_url(&self) -> &str {
        &self.settings.sign_on.login_url
    }
}

/// App visibility on the Okta dashboard
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Visibility {
    pub auto_submit_toolbar: bool,
    pub hide: Hide,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Hide {
    #[serde(rename = "iOS")]
    pub ios: bool,
    pub web: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AppSettings {
    pub sign_on: SignOnSettings,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SignOnSettings {
    pub redirect_url: String,
    pub login_url: String,
}

/// Shared credentials attached to the app
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AppCredentials {
    pub scheme: String,
    pub user_name_template: UserNameTemplate,
    pub user_name: String,
    pub password: PasswordValue,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserNameTemplate {
    pub template: String,
    #[serde(rename = "type")]
    pub template_type: String,
}

impl Default for UserNameTemplate {
    fn default() -> Self {
        Self {
            template: "${source.email}".to_string(),
            template_type: "BUILT_IN".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PasswordValue {
    pub value: String,
}

/// The part of the creation response we care about
#[derive(Debug, Clone, Deserialize)]
pub struct CreatedApplication {
    /// Okta application ID (e.g. `0oa1b2c3d4`)
    pub id: String,
}
