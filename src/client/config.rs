//! Serializable connection options.

use super::session::AuthMode;
use crate::protocol::DEFAULT_API_VERSION;
use crate::{Error, ErrorContext, Result};
use serde::{Deserialize, Deserializer};
use serde_json::Value;

pub const DEFAULT_COMMENT: &str = "iTop API client";

/// Connection options, loadable from YAML or JSON.
///
/// ```rust
/// use itop_api_client::{AuthMode, ConnectOptions};
///
/// let opts = ConnectOptions::from_yaml_str(
///     "url: https://itop.example.com/webservices/rest.php\n\
///      user: admin\n\
///      password: secret\n\
///      api_version: 1.3\n\
///      auth_mode: body\n",
/// )
/// .unwrap();
/// assert_eq!(opts.api_version, "1.3");
/// assert_eq!(opts.auth_mode, AuthMode::Body);
/// assert_eq!(opts.comment, "iTop API client");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ConnectOptions {
    pub url: String,
    pub user: String,
    pub password: String,
    #[serde(default = "default_comment")]
    pub comment: String,
    #[serde(default = "default_api_version", deserialize_with = "api_version")]
    pub api_version: String,
    #[serde(default)]
    pub auth_mode: AuthMode,
}

fn default_comment() -> String {
    DEFAULT_COMMENT.to_string()
}

fn default_api_version() -> String {
    DEFAULT_API_VERSION.to_string()
}

/// Accepts `1.3` as well as `"1.3"`.
fn api_version<'de, D: Deserializer<'de>>(deserializer: D) -> std::result::Result<String, D::Error> {
    match Value::deserialize(deserializer)? {
        Value::String(s) => Ok(s),
        Value::Number(n) => Ok(n.to_string()),
        other => Err(serde::de::Error::custom(format!(
            "api_version must be a string or number, got {}",
            other
        ))),
    }
}

impl ConnectOptions {
    pub fn new(url: impl Into<String>, user: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            user: user.into(),
            password: password.into(),
            comment: default_comment(),
            api_version: default_api_version(),
            auth_mode: AuthMode::default(),
        }
    }

    pub fn from_yaml_str(s: &str) -> Result<Self> {
        serde_yaml::from_str(s).map_err(|e| {
            Error::configuration_with_context(
                "invalid connect options",
                ErrorContext::new()
                    .with_details(e.to_string())
                    .with_source("connect_options"),
            )
        })
    }

    pub fn from_json_str(s: &str) -> Result<Self> {
        serde_json::from_str(s).map_err(|e| {
            Error::configuration_with_context(
                "invalid connect options",
                ErrorContext::new()
                    .with_details(e.to_string())
                    .with_source("connect_options"),
            )
        })
    }
}
