use super::builder::ITopClientBuilder;
use super::session::Session;
use crate::protocol::request::OP_CHECK_CREDENTIALS;
use crate::protocol::OperationRequest;
use crate::telemetry::CallObserver;
use crate::transport::Transport;
use crate::types::{OutputFields, ReturnMode};
use crate::{Error, Result};
use std::sync::Arc;

/// Connected iTop client.
///
/// Cheap to clone; clones share the same read-only session, so calls may run
/// concurrently without locking.
#[derive(Clone)]
pub struct ITopClient {
    pub(crate) session: Arc<Session>,
    pub(crate) transport: Arc<dyn Transport>,
    pub(crate) observer: Arc<dyn CallObserver>,
}

impl ITopClient {
    /// Connect with default comment, version 1.3 and header auth.
    pub async fn connect(
        url: impl Into<String>,
        user: impl Into<String>,
        password: impl Into<String>,
    ) -> Result<Self> {
        ITopClientBuilder::new(url, user, password).connect().await
    }

    pub fn builder(
        url: impl Into<String>,
        user: impl Into<String>,
        password: impl Into<String>,
    ) -> ITopClientBuilder {
        ITopClientBuilder::new(url, user, password)
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub(crate) async fn check_credentials(&self) -> Result<()> {
        let request = OperationRequest::new(OP_CHECK_CREDENTIALS)
            .with("user", self.session.user.clone())
            .with("password", self.session.password.clone());

        let envelope = self
            .dispatch(request, OutputFields::default(), ReturnMode::All, None)
            .await?
            .into_envelope()
            .ok_or_else(|| Error::Authorization {
                message: "credential check returned no envelope".into(),
            })?;

        if envelope.authorized() {
            Ok(())
        } else {
            Err(Error::Authorization {
                message: "Authorization failed! Check user credentials.".into(),
            })
        }
    }
}

impl std::fmt::Debug for ITopClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ITopClient")
            .field("session", &self.session)
            .finish_non_exhaustive()
    }
}
