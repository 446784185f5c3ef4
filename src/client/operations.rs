//! One method per remote operation.
//!
//! Each method returns an [`OperationBuilder`]; optional knobs (output
//! fields, return mode, fields-only) are set on the builder and
//! [`execute`](OperationBuilder::execute) hands the payload to
//! [`ITopClient::dispatch`].

use super::core::ITopClient;
use crate::protocol::request::{
    OP_APPLY_STIMULUS, OP_CREATE, OP_DELETE, OP_GET, OP_LIST_OPERATIONS, OP_UPDATE,
};
use crate::protocol::OperationRequest;
use crate::transport::TransportError;
use crate::types::{ApiResult, Envelope, ObjectKey, OutputFields, ReturnMode};
use crate::{Error, Result};
use serde_json::Value;

impl ITopClient {
    /// `list_operations`: the whole envelope, including `operations`.
    pub async fn list_operations(&self) -> Result<Envelope> {
        let request = OperationRequest::new(OP_LIST_OPERATIONS).class("");
        self.dispatch(request, OutputFields::default(), ReturnMode::All, None)
            .await?
            .into_envelope()
            .ok_or_else(|| {
                Error::Transport(TransportError::Other(
                    "list_operations returned no envelope".into(),
                ))
            })
    }

    /// `core/get` by id, attribute filter or OQL query.
    pub fn get(&self, class: &str, key: impl Into<ObjectKey>) -> OperationBuilder<'_> {
        OperationBuilder::new(self, OperationRequest::new(OP_GET).class(class).key(key))
    }

    /// `core/create`.
    pub fn create(&self, class: &str, fields: Value) -> OperationBuilder<'_> {
        OperationBuilder::new(self, OperationRequest::new(OP_CREATE).class(class).fields(fields))
    }

    /// `core/update`.
    pub fn update(&self, class: &str, key: impl Into<ObjectKey>, fields: Value) -> OperationBuilder<'_> {
        OperationBuilder::new(
            self,
            OperationRequest::new(OP_UPDATE).class(class).key(key).fields(fields),
        )
    }

    /// `core/delete`. Simulation is on unless turned off with
    /// [`simulate(false)`](OperationBuilder::simulate).
    pub fn delete(&self, class: &str, key: impl Into<ObjectKey>) -> OperationBuilder<'_> {
        OperationBuilder::new(
            self,
            OperationRequest::new(OP_DELETE).class(class).key(key).simulate(true),
        )
    }

    /// `core/apply_stimulus`. The stimulus is sent as `ev_<stimulus>`.
    pub fn apply_stimulus(
        &self,
        class: &str,
        key: impl Into<ObjectKey>,
        stimulus: &str,
    ) -> OperationBuilder<'_> {
        OperationBuilder::new(
            self,
            OperationRequest::new(OP_APPLY_STIMULUS)
                .class(class)
                .key(key)
                .stimulus(stimulus),
        )
    }

    /// Any other operation, e.g. `core/get_related`.
    pub fn operation(&self, request: OperationRequest) -> OperationBuilder<'_> {
        OperationBuilder::new(self, request)
    }
}

/// Pending call; nothing is sent until [`execute`](Self::execute).
#[must_use = "operations do nothing until executed"]
pub struct OperationBuilder<'a> {
    client: &'a ITopClient,
    request: OperationRequest,
    output_fields: OutputFields,
    return_mode: ReturnMode,
    fields_only: Option<bool>,
}

impl<'a> OperationBuilder<'a> {
    fn new(client: &'a ITopClient, request: OperationRequest) -> Self {
        Self {
            client,
            request,
            output_fields: OutputFields::default(),
            return_mode: ReturnMode::default(),
            fields_only: None,
        }
    }

    pub fn output_fields(mut self, fields: impl Into<OutputFields>) -> Self {
        self.output_fields = fields.into();
        self
    }

    pub fn return_mode(mut self, mode: impl Into<ReturnMode>) -> Self {
        self.return_mode = mode.into();
        self
    }

    /// Override the fields-only default derived from the output fields.
    pub fn fields_only(mut self, fields_only: bool) -> Self {
        self.fields_only = Some(fields_only);
        self
    }

    /// Field values to write, e.g. alongside a stimulus.
    ///
    /// Only `core/create`, `core/update` and `core/apply_stimulus` read
    /// `fields`; other operations send it but iTop ignores it.
    pub fn fields(mut self, fields: Value) -> Self {
        self.request.fields = Some(fields);
        self
    }

    /// Dry-run switch for `core/delete`.
    ///
    /// Members are only sent when set; iTop ignores `simulate` on every
    /// other operation.
    pub fn simulate(mut self, simulate: bool) -> Self {
        self.request.simulate = Some(simulate);
        self
    }

    /// The payload as it stands.
    pub fn request(&self) -> &OperationRequest {
        &self.request
    }

    pub async fn execute(self) -> Result<ApiResult> {
        self.client
            .dispatch(self.request, self.output_fields, self.return_mode, self.fields_only)
            .await
    }
}
