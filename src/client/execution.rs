//! The single call path shared by every operation.

use super::core::ITopClient;
use super::error_classification::{check_envelope, check_http_status};
use super::session::AuthMode;
use crate::pipeline::{default_fields_only, normalize};
use crate::protocol::request::redacted;
use crate::protocol::{OperationRequest, WireRequest, FORM_CONTENT_TYPE};
use crate::telemetry::CallEvent;
use crate::types::{ApiResult, Envelope, OutputFields, ReturnMode};
use crate::Result;
use std::collections::HashMap;
use tracing::{debug, Instrument};
use uuid::Uuid;

impl ITopClient {
    /// Send one operation and normalize the answer.
    ///
    /// `fields_only` defaults to true when `output_fields` names concrete
    /// fields and to false for the wildcard. Nothing is retried here; wrap
    /// the call in [`RetryPolicy`](crate::resilience::RetryPolicy) if needed.
    pub async fn dispatch(
        &self,
        request: OperationRequest,
        output_fields: OutputFields,
        mode: ReturnMode,
        fields_only: Option<bool>,
    ) -> Result<ApiResult> {
        let fields_only = fields_only.unwrap_or_else(|| default_fields_only(&output_fields));
        let request_id = Uuid::new_v4().to_string();
        let span = tracing::debug_span!(
            "itop_call",
            request_id = %request_id,
            operation = %request.operation,
        );

        async move {
            let envelope = self.send(&request_id, &request, &output_fields).await?;
            Ok(normalize(envelope, mode, fields_only))
        }
        .instrument(span)
        .await
    }

    async fn send(
        &self,
        request_id: &str,
        request: &OperationRequest,
        output_fields: &OutputFields,
    ) -> Result<Envelope> {
        let session = &self.session;
        let payload = request.to_payload(output_fields, &session.comment)?;

        let safe_payload = redacted(&payload);
        debug!(payload = %safe_payload, "itop request");
        self.notify(CallEvent::RequestPrepared {
            request_id: request_id.to_string(),
            operation: request.operation.clone(),
            payload: safe_payload,
        })
        .await;

        let mut wire = WireRequest::new(session.api_version.as_str(), &payload)?;
        let mut headers = HashMap::new();
        headers.insert("Content-Type".to_string(), FORM_CONTENT_TYPE.to_string());
        match session.auth_mode {
            AuthMode::Header => {
                headers.insert("Authorization".to_string(), session.authorization_header());
            }
            AuthMode::Body => {
                wire = wire.with_body_credentials(&session.user, &session.password);
            }
        }

        let response = self
            .transport
            .post(&session.url, wire.encode(), &headers)
            .await?;
        debug!(status = response.status, status_text = %response.status_text, "itop response");
        self.notify(CallEvent::ResponseReceived {
            request_id: request_id.to_string(),
            status: response.status,
            status_text: response.status_text.clone(),
        })
        .await;
        check_http_status(&response)?;

        let envelope: Envelope = response.json()?;
        debug!(code = envelope.code, message = %envelope.message, "itop envelope");
        self.notify(CallEvent::EnvelopeDecoded {
            request_id: request_id.to_string(),
            code: envelope.code,
            message: envelope.message.clone(),
        })
        .await;
        check_envelope(&envelope)?;

        Ok(envelope)
    }

    /// Observer failures never change the outcome of a call.
    async fn notify(&self, event: CallEvent) {
        if let Err(e) = self.observer.observe(event).await {
            debug!(error = %e, "call observer failed");
        }
    }
}
