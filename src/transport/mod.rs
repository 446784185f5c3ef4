//! Transport boundary.
//!
//! The client only needs one primitive: POST a form body with some headers
//! and get back a status line and a body. [`HttpTransport`] provides it over
//! reqwest; tests and embedders can plug in their own [`Transport`].

pub mod http;

pub use http::HttpTransport;

use async_trait::async_trait;
use bytes::Bytes;
use serde::de::DeserializeOwned;
use std::collections::HashMap;

/// Raw response as seen by the transport.
#[derive(Debug, Clone)]
pub struct TransportResponse {
    pub status: u16,
    pub status_text: String,
    pub body: Bytes,
}

impl TransportResponse {
    pub fn new(status: u16, status_text: impl Into<String>, body: impl Into<Bytes>) -> Self {
        Self {
            status,
            status_text: status_text.into(),
            body: body.into(),
        }
    }

    /// 2xx statuses.
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// Decodes the body as JSON.
    pub fn json<T: DeserializeOwned>(&self) -> Result<T, TransportError> {
        serde_json::from_slice(&self.body).map_err(|e| TransportError::MalformedBody(e.to_string()))
    }
}

#[async_trait]
pub trait Transport: Send + Sync {
    async fn post(
        &self,
        url: &str,
        body: String,
        headers: &HashMap<String, String>,
    ) -> Result<TransportResponse, TransportError>;
}

#[derive(Debug, thiserror::Error)]
pub enum TransportError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("HTTP status {status}: {status_text}")]
    Status { status: u16, status_text: String },

    #[error("Malformed response body: {0}")]
    MalformedBody(String),

    #[error("Transport error: {0}")]
    Other(String),
}
