//! # Types Module
//!
//! Strongly-typed representations of what goes over the wire to iTop and
//! what comes back.
//!
//! ## Key Types
//!
//! | Type | Description |
//! |------|-------------|
//! | [`ObjectKey`] | Object identifier: id, name, attribute filter, or OQL query |
//! | [`OutputFields`] | Output field selector (`*` by default) |
//! | [`ReturnMode`] | Shape of the normalized result |
//! | [`Envelope`] | Top-level response body |
//! | [`ObjectRecord`] | One object inside the envelope's `objects` map |
//! | [`ApiResult`] | Normalized result handed to callers |
//!
//! ## Example
//!
//! ```rust
//! use itop_api_client::types::{ObjectKey, OutputFields, ReturnMode};
//!
//! let by_id = ObjectKey::from(42);
//! let by_oql = ObjectKey::query("SELECT Person WHERE email = 'jane@example.com'");
//! assert_eq!(serde_json::to_value(&by_id).unwrap(), serde_json::json!(42));
//! assert!(matches!(by_oql, ObjectKey::Query(_)));
//!
//! let fields = OutputFields::from(["id", "friendlyname"]);
//! assert_eq!(fields.to_wire(), "id,friendlyname");
//! assert!(OutputFields::default().is_wildcard());
//! assert_eq!("object".parse::<ReturnMode>().unwrap(), ReturnMode::Object);
//! ```

pub mod envelope;
pub mod key;
pub mod result;

pub use envelope::{Envelope, ObjectMap, ObjectRecord};
pub use key::{ObjectKey, OutputFields, ReturnMode};
pub use result::ApiResult;
