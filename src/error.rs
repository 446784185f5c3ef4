use crate::error_code::ApiStatusCode;
use crate::transport::TransportError;
use thiserror::Error;

/// Structured error context for configuration problems.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ErrorContext {
    /// Option or builder field that caused the error (e.g., "url", "api_version")
    pub field_path: Option<String>,
    /// Additional context about the error (e.g., expected format)
    pub details: Option<String>,
    /// Source of the error (e.g., "client_builder", "connect_options")
    pub source: Option<String>,
}

impl ErrorContext {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_field_path(mut self, path: impl Into<String>) -> Self {
        self.field_path = Some(path.into());
        self
    }

    pub fn with_details(mut self, details: impl Into<String>) -> Self {
        self.details = Some(details.into());
        self
    }

    pub fn with_source(mut self, source: impl Into<String>) -> Self {
        self.source = Some(source.into());
        self
    }
}

/// Unified error type for the iTop client.
///
/// Every failure reaches the caller as one of these variants; nothing is
/// logged and dropped inside the call path.
#[derive(Debug, Error)]
pub enum Error {
    /// Non-success HTTP status, unreachable host, or a body that is not an envelope.
    #[error("Transport error: {0}")]
    Transport(#[from] TransportError),

    /// The envelope carried a nonzero `code`.
    #[error("iTop API error {} ({}): {message}", .code.code(), .code.name())]
    Api { code: ApiStatusCode, message: String },

    /// The credential check answered with `authorized: false`.
    #[error("Authorization failed: {message}")]
    Authorization { message: String },

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Configuration error: {message}{}", format_context(.context))]
    Configuration {
        message: String,
        context: ErrorContext,
    },
}

fn format_context(ctx: &ErrorContext) -> String {
    let mut parts = Vec::new();
    if let Some(ref field) = ctx.field_path {
        parts.push(format!("field: {}", field));
    }
    if let Some(ref details) = ctx.details {
        parts.push(format!("details: {}", details));
    }
    if let Some(ref source) = ctx.source {
        parts.push(format!("source: {}", source));
    }
    if parts.is_empty() {
        String::new()
    } else {
        format!(" ({})", parts.join(", "))
    }
}

impl Error {
    pub fn api(code: i64, message: impl Into<String>) -> Self {
        Error::Api {
            code: ApiStatusCode::from_code(code),
            message: message.into(),
        }
    }

    pub fn configuration_with_context(msg: impl Into<String>, context: ErrorContext) -> Self {
        Error::Configuration {
            message: msg.into(),
            context,
        }
    }

    /// The documented API status code, when this is an [`Error::Api`].
    pub fn api_code(&self) -> Option<ApiStatusCode> {
        match self {
            Error::Api { code, .. } => Some(*code),
            _ => None,
        }
    }

    /// True for `UNAUTHORIZED` API failures (code 1).
    pub fn is_unauthorized(&self) -> bool {
        self.api_code() == Some(ApiStatusCode::Unauthorized)
    }

    pub fn context(&self) -> Option<&ErrorContext> {
        match self {
            Error::Configuration { context, .. } => Some(context),
            _ => None,
        }
    }
}
