use super::config::{ConnectOptions, DEFAULT_COMMENT};
use super::core::ITopClient;
use super::session::{AuthMode, Session};
use crate::protocol::DEFAULT_API_VERSION;
use crate::telemetry::CallObserver;
use crate::transport::{HttpTransport, Transport};
use crate::{Error, ErrorContext, Result};
use std::sync::Arc;

/// Builder for connecting a client.
///
/// The only way to obtain an [`ITopClient`] is [`connect`](Self::connect),
/// which verifies the credentials first.
pub struct ITopClientBuilder {
    url: String,
    user: String,
    password: String,
    comment: String,
    api_version: String,
    auth_mode: AuthMode,
    transport: Option<Arc<dyn Transport>>,
    observer: Arc<dyn CallObserver>,
}

impl ITopClientBuilder {
    pub fn new(url: impl Into<String>, user: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            user: user.into(),
            password: password.into(),
            comment: DEFAULT_COMMENT.to_string(),
            api_version: DEFAULT_API_VERSION.to_string(),
            auth_mode: AuthMode::default(),
            transport: None,
            observer: crate::telemetry::noop_observer(),
        }
    }

    pub fn from_options(options: ConnectOptions) -> Self {
        Self::new(options.url, options.user, options.password)
            .comment(options.comment)
            .api_version(options.api_version)
            .auth_mode(options.auth_mode)
    }

    /// Comment recorded in iTop's change history for every write.
    pub fn comment(mut self, comment: impl Into<String>) -> Self {
        self.comment = comment.into();
        self
    }

    pub fn api_version(mut self, version: impl Into<String>) -> Self {
        self.api_version = version.into();
        self
    }

    pub fn auth_mode(mut self, mode: AuthMode) -> Self {
        self.auth_mode = mode;
        self
    }

    /// Replace the default reqwest transport.
    pub fn transport(mut self, transport: Arc<dyn Transport>) -> Self {
        self.transport = Some(transport);
        self
    }

    /// Inject a call observer. Default is a no-op observer.
    pub fn observer(mut self, observer: Arc<dyn CallObserver>) -> Self {
        self.observer = observer;
        self
    }

    /// Build the client and run `core/check_credentials`.
    ///
    /// Fails with [`Error::Authorization`] when the server answers
    /// `authorized: false`. Credential failures are not retried.
    pub async fn connect(self) -> Result<ITopClient> {
        let client = self.build()?;
        tracing::info!(
            url = client.session.url(),
            user = client.session.user(),
            comment = client.session.comment(),
            "connecting to iTop"
        );
        client.check_credentials().await?;
        tracing::info!(url = client.session.url(), "connected to iTop");
        Ok(client)
    }

    fn build(self) -> Result<ITopClient> {
        if self.url.trim().is_empty() {
            return Err(Error::configuration_with_context(
                "iTop REST endpoint is required",
                ErrorContext::new()
                    .with_field_path("url")
                    .with_source("client_builder"),
            ));
        }
        if self.api_version.trim().is_empty() {
            return Err(Error::configuration_with_context(
                "API version must not be empty",
                ErrorContext::new()
                    .with_field_path("api_version")
                    .with_details(format!("default is {}", DEFAULT_API_VERSION))
                    .with_source("client_builder"),
            ));
        }

        let transport: Arc<dyn Transport> = match self.transport {
            Some(t) => t,
            None => Arc::new(HttpTransport::new()?),
        };

        Ok(ITopClient {
            session: Arc::new(Session {
                url: self.url,
                user: self.user,
                password: self.password,
                comment: self.comment,
                api_version: self.api_version,
                auth_mode: self.auth_mode,
            }),
            transport,
            observer: self.observer,
        })
    }
}
