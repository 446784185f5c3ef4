//! Call observers.
//!
//! The dispatch pipeline reports what it sends and receives to a
//! [`CallObserver`] injected at build time. The default is
//! [`NoopObserver`]; nothing is registered process-wide.
//!
//! | Observer | Description |
//! |----------|-------------|
//! | [`NoopObserver`] | Default, drops every event |
//! | [`InMemoryObserver`] | Keeps events in memory, for tests |
//! | [`TracingObserver`] | Forwards events to `tracing` at debug level |

use crate::Result;
use async_trait::async_trait;
use serde_json::Value;
use std::sync::{Arc, RwLock};

/// Something the pipeline did during one call.
#[derive(Debug, Clone, PartialEq)]
pub enum CallEvent {
    /// Payload built, about to be sent. Passwords are already masked.
    RequestPrepared {
        request_id: String,
        operation: String,
        payload: Value,
    },
    /// Transport returned a status line.
    ResponseReceived {
        request_id: String,
        status: u16,
        status_text: String,
    },
    /// Body decoded into an envelope.
    EnvelopeDecoded {
        request_id: String,
        code: i64,
        message: String,
    },
}

impl CallEvent {
    pub fn request_id(&self) -> &str {
        match self {
            CallEvent::RequestPrepared { request_id, .. }
            | CallEvent::ResponseReceived { request_id, .. }
            | CallEvent::EnvelopeDecoded { request_id, .. } => request_id,
        }
    }
}

#[async_trait]
pub trait CallObserver: Send + Sync {
    async fn observe(&self, event: CallEvent) -> Result<()>;
}

pub struct NoopObserver;

#[async_trait]
impl CallObserver for NoopObserver {
    async fn observe(&self, _: CallEvent) -> Result<()> {
        Ok(())
    }
}

pub fn noop_observer() -> Arc<dyn CallObserver> {
    Arc::new(NoopObserver)
}

/// In-memory observer for testing.
#[derive(Default)]
pub struct InMemoryObserver {
    events: RwLock<Vec<CallEvent>>,
}

impl InMemoryObserver {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn events(&self) -> Vec<CallEvent> {
        self.events.read().map(|e| e.clone()).unwrap_or_default()
    }

    pub fn events_for(&self, request_id: &str) -> Vec<CallEvent> {
        self.events()
            .into_iter()
            .filter(|e| e.request_id() == request_id)
            .collect()
    }

    pub fn clear(&self) {
        if let Ok(mut events) = self.events.write() {
            events.clear();
        }
    }

    pub fn len(&self) -> usize {
        self.events.read().map(|e| e.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[async_trait]
impl CallObserver for InMemoryObserver {
    async fn observe(&self, event: CallEvent) -> Result<()> {
        if let Ok(mut events) = self.events.write() {
            events.push(event);
        }
        Ok(())
    }
}

/// Forwards events to `tracing`.
#[derive(Default)]
pub struct TracingObserver;

#[async_trait]
impl CallObserver for TracingObserver {
    async fn observe(&self, event: CallEvent) -> Result<()> {
        match &event {
            CallEvent::RequestPrepared {
                request_id,
                operation,
                payload,
            } => tracing::debug!(%request_id, %operation, %payload, "itop request prepared"),
            CallEvent::ResponseReceived {
                request_id,
                status,
                status_text,
            } => tracing::debug!(%request_id, status, %status_text, "itop response received"),
            CallEvent::EnvelopeDecoded {
                request_id,
                code,
                message,
            } => tracing::debug!(%request_id, code, %message, "itop envelope decoded"),
        }
        Ok(())
    }
}
