//! Connection parameters shared by every call of one client.

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use serde::Deserialize;
use std::fmt;

/// Where the credentials travel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AuthMode {
    /// `Authorization: Basic ...` header.
    #[default]
    Header,
    /// `auth_user` / `auth_pwd` form members, for deployments that reject
    /// header-based auth.
    Body,
}

/// Immutable once the client is connected.
#[derive(Clone, PartialEq, Eq)]
pub struct Session {
    pub(crate) url: String,
    pub(crate) user: String,
    pub(crate) password: String,
    pub(crate) comment: String,
    pub(crate) api_version: String,
    pub(crate) auth_mode: AuthMode,
}

impl Session {
    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn user(&self) -> &str {
        &self.user
    }

    /// Change-log comment attached to every call.
    pub fn comment(&self) -> &str {
        &self.comment
    }

    pub fn api_version(&self) -> &str {
        &self.api_version
    }

    pub fn auth_mode(&self) -> AuthMode {
        self.auth_mode
    }

    /// `Basic base64(user:password)`.
    pub fn authorization_header(&self) -> String {
        let token = STANDARD.encode(format!("{}:{}", self.user, self.password));
        format!("Basic {}", token)
    }
}

impl fmt::Debug for Session {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Session")
            .field("url", &self.url)
            .field("user", &self.user)
            .field("password", &"***")
            .field("comment", &self.comment)
            .field("api_version", &self.api_version)
            .field("auth_mode", &self.auth_mode)
            .finish()
    }
}
