//! Operation payloads and their url-encoded wire form.

use crate::types::{ObjectKey, OutputFields};
use crate::Result;
use serde::Serialize;
use serde_json::{Map, Value};

pub const OP_LIST_OPERATIONS: &str = "list_operations";
pub const OP_CHECK_CREDENTIALS: &str = "core/check_credentials";
pub const OP_GET: &str = "core/get";
pub const OP_CREATE: &str = "core/create";
pub const OP_UPDATE: &str = "core/update";
pub const OP_DELETE: &str = "core/delete";
pub const OP_APPLY_STIMULUS: &str = "core/apply_stimulus";

/// Literal iTop expects in front of every stimulus code.
pub const STIMULUS_PREFIX: &str = "ev_";

/// The `json_data` payload of one call, before the shared members are appended.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OperationRequest {
    pub operation: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub class: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub key: Option<ObjectKey>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fields: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stimulus: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub simulate: Option<bool>,
    /// Members not covered above (e.g. `user`/`password` of a credential check).
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl OperationRequest {
    pub fn new(operation: impl Into<String>) -> Self {
        Self {
            operation: operation.into(),
            class: None,
            key: None,
            fields: None,
            stimulus: None,
            simulate: None,
            extra: Map::new(),
        }
    }

    pub fn class(mut self, class: impl Into<String>) -> Self {
        self.class = Some(class.into());
        self
    }

    pub fn key(mut self, key: impl Into<ObjectKey>) -> Self {
        self.key = Some(key.into());
        self
    }

    pub fn fields(mut self, fields: Value) -> Self {
        self.fields = Some(fields);
        self
    }

    /// Sets the stimulus, adding the `ev_` prefix.
    pub fn stimulus(mut self, stimulus: &str) -> Self {
        self.stimulus = Some(format!("{}{}", STIMULUS_PREFIX, stimulus));
        self
    }

    pub fn simulate(mut self, simulate: bool) -> Self {
        self.simulate = Some(simulate);
        self
    }

    pub fn with(mut self, member: impl Into<String>, value: impl Into<Value>) -> Self {
        self.extra.insert(member.into(), value.into());
        self
    }

    /// Full `json_data` object: the operation members followed by
    /// `output_fields` and `comment`.
    pub fn to_payload(&self, output_fields: &OutputFields, comment: &str) -> Result<Value> {
        let mut payload = match serde_json::to_value(self)? {
            Value::Object(map) => map,
            _ => Map::new(),
        };
        payload.insert("output_fields".into(), Value::String(output_fields.to_wire()));
        payload.insert("comment".into(), Value::String(comment.to_string()));
        Ok(Value::Object(payload))
    }
}

/// Copy of a payload that is safe to log.
pub(crate) fn redacted(payload: &Value) -> Value {
    let mut copy = payload.clone();
    if let Some(map) = copy.as_object_mut() {
        if map.contains_key("password") {
            map.insert("password".into(), Value::String("***".into()));
        }
    }
    copy
}

pub const FORM_CONTENT_TYPE: &str = "application/x-www-form-urlencoded";

/// Form members posted to `rest.php`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WireRequest {
    pub version: String,
    pub json_data: String,
    /// `auth_user` / `auth_pwd`, only sent when credentials travel in the body.
    pub body_credentials: Option<(String, String)>,
}

impl WireRequest {
    pub fn new(version: impl Into<String>, payload: &Value) -> Result<Self> {
        Ok(Self {
            version: version.into(),
            json_data: serde_json::to_string(payload)?,
            body_credentials: None,
        })
    }

    pub fn with_body_credentials(mut self, user: &str, password: &str) -> Self {
        self.body_credentials = Some((user.to_string(), password.to_string()));
        self
    }

    /// `application/x-www-form-urlencoded` body.
    pub fn encode(&self) -> String {
        let mut form = url::form_urlencoded::Serializer::new(String::new());
        form.append_pair("version", &self.version);
        form.append_pair("json_data", &self.json_data);
        if let Some((user, password)) = &self.body_credentials {
            form.append_pair("auth_user", user);
            form.append_pair("auth_pwd", password);
        }
        form.finish()
    }
}
