//! iTop REST API status codes.
//!
//! Every envelope carries an integer `code`. Zero means success; the other
//! documented values are listed below. Values outside the table are kept
//! verbatim in [`ApiStatusCode::Other`].
//!
//! | Code | Name | Meaning |
//! |------|------|---------|
//! | 0   | OK                  | No issue has been encountered |
//! | 1   | UNAUTHORIZED        | Missing/wrong credentials or not enough rights |
//! | 2   | MISSING_VERSION     | The parameter 'version' is missing |
//! | 3   | MISSING_JSON        | The parameter 'json_data' is missing |
//! | 4   | INVALID_JSON        | The input structure is not a valid JSON string |
//! | 5   | MISSING_AUTH_USER   | The parameter 'auth_user' is missing |
//! | 6   | MISSING_AUTH_PWD    | The parameter 'auth_pwd' is missing |
//! | 10  | UNSUPPORTED_VERSION | No operation is available for the specified version |
//! | 11  | UNKNOWN_OPERATION   | The requested operation is not valid for the specified version |
//! | 12  | UNSAFE              | The operation could cause data (integrity) loss |
//! | 100 | INTERNAL_ERROR      | The operation could not be performed, see the message |
//!
//! ## Example
//!
//! ```rust
//! use itop_api_client::error_code::ApiStatusCode;
//!
//! let code = ApiStatusCode::from_code(11);
//! assert_eq!(code, ApiStatusCode::UnknownOperation);
//! assert_eq!(code.name(), "UNKNOWN_OPERATION");
//! assert!(!code.is_success());
//! ```

use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ApiStatusCode {
    /// 0: No issue has been encountered
    Ok,
    /// 1: Missing/wrong credentials or insufficient rights
    Unauthorized,
    /// 2: The parameter 'version' is missing
    MissingVersion,
    /// 3: The parameter 'json_data' is missing
    MissingJson,
    /// 4: The input structure is not a valid JSON string
    InvalidJson,
    /// 5: The parameter 'auth_user' is missing
    MissingAuthUser,
    /// 6: The parameter 'auth_pwd' is missing
    MissingAuthPwd,
    /// 10: No operation is available for the specified version
    UnsupportedVersion,
    /// 11: The requested operation is not valid for the specified version
    UnknownOperation,
    /// 12: The operation would cause data (integrity) loss
    Unsafe,
    /// 100: The operation could not be performed
    InternalError,
    /// Any value missing from the published table
    Other(i64),
}

impl ApiStatusCode {
    /// Maps a raw envelope `code` onto the table.
    pub fn from_code(code: i64) -> Self {
        match code {
            0 => Self::Ok,
            1 => Self::Unauthorized,
            2 => Self::MissingVersion,
            3 => Self::MissingJson,
            4 => Self::InvalidJson,
            5 => Self::MissingAuthUser,
            6 => Self::MissingAuthPwd,
            10 => Self::UnsupportedVersion,
            11 => Self::UnknownOperation,
            12 => Self::Unsafe,
            100 => Self::InternalError,
            other => Self::Other(other),
        }
    }

    /// Returns the raw integer code.
    #[inline]
    pub fn code(&self) -> i64 {
        match self {
            Self::Ok => 0,
            Self::Unauthorized => 1,
            Self::MissingVersion => 2,
            Self::MissingJson => 3,
            Self::InvalidJson => 4,
            Self::MissingAuthUser => 5,
            Self::MissingAuthPwd => 6,
            Self::UnsupportedVersion => 10,
            Self::UnknownOperation => 11,
            Self::Unsafe => 12,
            Self::InternalError => 100,
            Self::Other(code) => *code,
        }
    }

    /// Returns the published name (e.g., `"UNAUTHORIZED"`).
    #[inline]
    pub fn name(&self) -> &'static str {
        match self {
            Self::Ok => "OK",
            Self::Unauthorized => "UNAUTHORIZED",
            Self::MissingVersion => "MISSING_VERSION",
            Self::MissingJson => "MISSING_JSON",
            Self::InvalidJson => "INVALID_JSON",
            Self::MissingAuthUser => "MISSING_AUTH_USER",
            Self::MissingAuthPwd => "MISSING_AUTH_PWD",
            Self::UnsupportedVersion => "UNSUPPORTED_VERSION",
            Self::UnknownOperation => "UNKNOWN_OPERATION",
            Self::Unsafe => "UNSAFE",
            Self::InternalError => "INTERNAL_ERROR",
            Self::Other(_) => "UNDOCUMENTED",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Self::Ok => "No issue has been encountered",
            Self::Unauthorized => {
                "Missing/wrong credentials or the user does not have enough rights to perform the requested operation"
            }
            Self::MissingVersion => "The parameter 'version' is missing",
            Self::MissingJson => "The parameter 'json_data' is missing",
            Self::InvalidJson => "The input structure is not a valid JSON string",
            Self::MissingAuthUser => "The parameter 'auth_user' is missing",
            Self::MissingAuthPwd => "The parameter 'auth_pwd' is missing",
            Self::UnsupportedVersion => "No operation is available for the specified version",
            Self::UnknownOperation => {
                "The requested operation is not valid for the specified version"
            }
            Self::Unsafe => {
                "The requested operation cannot be performed because it can cause data (integrity) loss"
            }
            Self::InternalError => {
                "The operation could not be performed, see the message for troubleshooting"
            }
            Self::Other(_) => "Undocumented status code",
        }
    }

    #[inline]
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Ok)
    }
}

impl From<i64> for ApiStatusCode {
    fn from(code: i64) -> Self {
        Self::from_code(code)
    }
}

impl fmt::Display for ApiStatusCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.code(), self.name())
    }
}
