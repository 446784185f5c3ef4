//! # Protocol Layer
//!
//! What a single iTop REST call looks like on the wire: the `json_data`
//! operation payload and the form that carries it (`version`, `json_data`,
//! and optionally `auth_user`/`auth_pwd`).

pub mod request;

pub use request::{OperationRequest, WireRequest, FORM_CONTENT_TYPE, STIMULUS_PREFIX};

/// Protocol version sent when none is configured.
pub const DEFAULT_API_VERSION: &str = "1.3";
