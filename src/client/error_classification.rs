//! Failure classification for transport responses and envelopes.

use crate::error_code::ApiStatusCode;
use crate::transport::{TransportError, TransportResponse};
use crate::types::Envelope;
use crate::{Error, Result};

/// Rejects non-2xx responses with the status line.
pub fn check_http_status(response: &TransportResponse) -> Result<()> {
    if response.is_success() {
        Ok(())
    } else {
        Err(Error::Transport(TransportError::Status {
            status: response.status,
            status_text: response.status_text.clone(),
        }))
    }
}

/// Rejects envelopes whose `code` is not zero.
pub fn check_envelope(envelope: &Envelope) -> Result<()> {
    let code = ApiStatusCode::from_code(envelope.code);
    if code.is_success() {
        Ok(())
    } else {
        Err(Error::Api {
            code,
            message: envelope.message.clone(),
        })
    }
}
