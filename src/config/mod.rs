//! Configuration management for okta-swa
//!
//! Values are layered: CLI flag > environment variable > config file >
//! built-in default. Clap folds the first two together, so this module only
//! sees an [`Overrides`] set and the optional YAML file.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;

use crate::error::{ConfigError, Result};
use crate::input::ColumnNames;

/// Environment variable holding the Okta API token
pub const TOKEN_ENV_VAR: &str = "OKTA_AUTH_TOKEN";

/// Okta org the tool provisions into
pub const DEFAULT_OKTA_URL: &str = "https://signifyd.okta.com";

/// Chargeback-Team group
pub const DEFAULT_GROUP_ID: &str = "00glw9acqnIlFCzCY0x7";

/// Username shared by every provisioned app
pub const DEFAULT_SHARED_USERNAME: &str = "chargebacks@signifyd.com";

/// Appended to each admin URL to form the login URL
pub const DEFAULT_LOGIN_PATH: &str = "/auth/login";

pub const DEFAULT_RESULTS_FILE: &str = "created_apps.csv";

/// Okta API token. Never printed in full.
#[derive(Clone, PartialEq, Eq)]
pub struct AuthToken(String);

impl AuthToken {
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    /// Read the token from `OKTA_AUTH_TOKEN`
    pub fn from_env() -> Result<Self> {
        Self::from_value(std::env::var(TOKEN_ENV_VAR).ok())
    }

    /// Accept a token value, treating absent and empty alike
    pub fn from_value(value: Option<String>) -> Result<Self> {
        match value {
            Some(token) if !token.is_empty() => Ok(Self(token)),
            _ => Err(ConfigError::MissingToken.into()),
        }
    }

    /// The raw token, for building the Authorization header
    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for AuthToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("AuthToken(****)")
    }
}

/// Optional YAML configuration file
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Okta org URL
    #[serde(skip_serializing_if = "Option::is_none")]
    pub okta_url: Option<String>,

    /// Group every created app is assigned to
    #[serde(skip_serializing_if = "Option::is_none")]
    pub group_id: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub shared_username: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub login_path: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub results_file: Option<PathBuf>,

    /// CSV header names
    #[serde(default)]
    pub headers: HeaderConfig,
}

/// Column header overrides from the config file
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct HeaderConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
}

impl Config {
    /// Get the default config file path
    pub fn default_path() -> Result<PathBuf> {
        let home = dirs::home_dir().ok_or(ConfigError::Invalid(
            "Could not determine home directory".to_string(),
        ))?;

        Ok(home.join(".okta-swa").join("config.yaml"))
    }

    /// Load configuration from an explicit path, or the default location.
    ///
    /// A missing file at the default location yields an empty config; a
    /// missing file at an explicit path is an error.
    pub fn load_at(path: Option<&str>) -> Result<Self> {
        match path {
            Some(path) => Self::load_from(PathBuf::from(path)),
            None => {
                let path = match Self::default_path() {
                    Ok(path) => path,
                    Err(_) => return Ok(Self::default()),
                };
                if path.exists() {
                    Self::load_from(path)
                } else {
                    Ok(Self::default())
                }
            }
        }
    }

    /// Load configuration from a specific path
    pub fn load_from(path: PathBuf) -> Result<Self> {
        if !path.exists() {
            return Err(ConfigError::NotFound(path.display().to_string()).into());
        }

        let contents = std::fs::read_to_string(&path)?;
        if contents.trim().is_empty() {
            return Ok(Self::default());
        }

        let config: Config = serde_yaml::from_str(&contents).map_err(ConfigError::from)?;
        log::debug!("Loaded configuration from {}", path.display());

        Ok(config)
    }
}

/// Values supplied on the command line or through environment variables
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub okta_url: Option<String>,
    pub group_id: Option<String>,
    pub shared_username: Option<String>,
    pub results_file: Option<PathBuf>,
    pub header_name: Option<String>,
    pub header_url: Option<String>,
    pub header_password: Option<String>,
}

/// Fully resolved run settings
#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    pub okta_url: String,
    pub group_id: String,
    pub shared_username: String,
    pub login_path: String,
    pub results_file: PathBuf,
    pub columns: ColumnNames,
}

impl Settings {
    /// Merge overrides over the config file over built-in defaults.
    pub fn resolve(overrides: Overrides, config: Config) -> Result<Self> {
        let okta_url = overrides
            .okta_url
            .or(config.okta_url)
            .unwrap_or_else(|| DEFAULT_OKTA_URL.to_string());
        validate_okta_url(&okta_url)?;

        let defaults = ColumnNames::default();
        let columns = ColumnNames {
            name: overrides
                .header_name
                .or(config.headers.name)
                .unwrap_or(defaults.name),
            url: overrides
                .header_url
                .or(config.headers.url)
                .unwrap_or(defaults.url),
            password: overrides
                .header_password
                .or(config.headers.password)
                .unwrap_or(defaults.password),
        };

        Ok(Self {
            okta_url,
            group_id: overrides
                .group_id
                .or(config.group_id)
                .unwrap_or_else(|| DEFAULT_GROUP_ID.to_string()),
            shared_username: overrides
                .shared_username
                .or(config.shared_username)
                .unwrap_or_else(|| DEFAULT_SHARED_USERNAME.to_string()),
            login_path: config
                .login_path
                .unwrap_or_else(|| DEFAULT_LOGIN_PATH.to_string()),
            results_file: overrides
                .results_file
                .or(config.results_file)
                .unwrap_or_else(|| PathBuf::from(DEFAULT_RESULTS_FILE)),
            columns,
        })
    }

    /// Login URL for an admin URL from the credential CSV
    pub fn login_url(&self, admin_url: &str) -> String {
        format!("{}{}", admin_url, self.login_path)
    }
}

fn validate_okta_url(url: &str) -> Result<()> {
    let parsed = reqwest::Url::parse(url)
        .map_err(|e| ConfigError::Invalid(format!("okta_url '{}': {}", url, e)))?;

    match parsed.scheme() {
        "http" | "https" => Ok(()),
        scheme => Err(ConfigError::Invalid(format!(
            "okta_url '{}': unsupported scheme '{}'",
            url, scheme
        ))
        .into()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_token_missing_or_empty() {
        assert!(AuthToken::from_value(None).is_err());
        assert!(AuthToken::from_value(Some(String::new())).is_err());
        assert_eq!(
            AuthToken::from_value(Some("00abc".to_string()))
                .unwrap()
                .expose(),
            "00abc"
        );
    }

    #[test]
    fn test_token_debug_is_redacted() {
        let token = AuthToken::new("super-secret");
        assert!(!format!("{:?}", token).contains("super-secret"));
    }

    #[test]
    fn test_defaults() {
        let settings = Settings::resolve(Overrides::default(), Config::default()).unwrap();

        assert_eq!(settings.okta_url, DEFAULT_OKTA_URL);
        assert_eq!(settings.group_id, "00glw9acqnIlFCzCY0x7");
        assert_eq!(settings.shared_username, "chargebacks@signifyd.com");
        assert_eq!(settings.results_file, PathBuf::from("created_apps.csv"));
        assert_eq!(settings.columns.name, "Name");
        assert_eq!(settings.columns.url, "admin");
        assert_eq!(settings.columns.password, "admin");
    }

    #[test]
    fn test_overrides_beat_config_file() {
        let config = Config {
            group_id: Some("from-file".to_string()),
            shared_username: Some("file@example.com".to_string()),
            headers: HeaderConfig {
                password: Some("pw".to_string()),
                ..Default::default()
            },
            ..Default::default()
        };
        let overrides = Overrides {
            group_id: Some("from-cli".to_string()),
            ..Default::default()
        };

        let settings = Settings::resolve(overrides, config).unwrap();
        assert_eq!(settings.group_id, "from-cli");
        assert_eq!(settings.shared_username, "file@example.com");
        assert_eq!(settings.columns.password, "pw");
    }

    #[test]
    fn test_invalid_okta_url() {
        let overrides = Overrides {
            okta_url: Some("not a url".to_string()),
            ..Default::default()
        };
        assert!(Settings::resolve(overrides, Config::default()).is_err());

        let overrides = Overrides {
            okta_url: Some("ftp://example.okta.com".to_string()),
            ..Default::default()
        };
        assert!(Settings::resolve(overrides, Config::default()).is_err());
    }

    #[test]
    fn test_login_url_appends_path() {
        let settings = Settings::resolve(Overrides::default(), Config::default()).unwrap();
        assert_eq!(
            settings.login_url("https://acme.example/admin"),
            "https://acme.example/admin/auth/login"
        );
    }

    #[test]
    fn test_load_from_yaml() {
        let temp = tempdir().unwrap();
        let path = temp.path().join("config.yaml");
        std::fs::write(
            &path,
            "okta_url: https://example.okta.com\nlogin_path: /login\nheaders:\n  name: Merchant\n",
        )
        .unwrap();

        let config = Config::load_from(path).unwrap();
        assert_eq!(config.okta_url.as_deref(), Some("https://example.okta.com"));
        assert_eq!(config.login_path.as_deref(), Some("/login"));
        assert_eq!(config.headers.name.as_deref(), Some("Merchant"));
    }

    #[test]
    fn test_explicit_missing_path_is_error() {
        let temp = tempdir().unwrap();
        let path = temp.path().join("nope.yaml");
        assert!(Config::load_at(path.to_str()).is_err());
    }

    #[test]
    fn test_unknown_key_is_parse_error() {
        let temp = tempdir().unwrap();
        let path = temp.path().join("config.yaml");
        std::fs::write(&path, "grop_id: typo\n").unwrap();

        let err = Config::load_from(path).unwrap_err();
        assert!(matches!(
            err,
            crate::error::Error::Config(ConfigError::ParseError(_))
        ));
    }
}
