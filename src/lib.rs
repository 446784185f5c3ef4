//! # itop-api-client
//!
//! Async client for the iTop REST/JSON API.
//!
//! ## Overview
//!
//! Every remote operation funnels through one call path: build the operation
//! payload, attach authentication, POST it through a [`transport::Transport`],
//! classify HTTP and API failures, and normalize the nested object envelope
//! into the shape the caller asked for.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use itop_api_client::{ITopClientBuilder, ObjectKey};
//! use serde_json::json;
//!
//! #[tokio::main]
//! async fn main() -> itop_api_client::Result<()> {
//!     let client = ITopClientBuilder::new(
//!         "https://itop.example.com/webservices/rest.php",
//!         "admin",
//!         "secret",
//!     )
//!     .comment("inventory sync")
//!     .connect()
//!     .await?;
//!
//!     let created = client
//!         .create("Person", json!({ "name": "Doe", "first_name": "Jane", "org_id": 1 }))
//!         .output_fields(["id", "friendlyname"])
//!         .execute()
//!         .await?;
//!     let id = created.first_field("id").cloned();
//!
//!     let people = client
//!         .get("Person", ObjectKey::query("SELECT Person WHERE name = 'Doe'"))
//!         .execute()
//!         .await?;
//!     println!("{} record(s), created id {:?}", people.len(), id);
//!     Ok(())
//! }
//! ```
//!
//! ## Module Organization
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`client`] | Session, builder, operation methods and the dispatch pipeline |
//! | [`pipeline`] | Result normalization |
//! | [`protocol`] | Operation payloads and the url-encoded wire form |
//! | [`types`] | Object keys, output field selectors, envelopes and results |
//! | [`transport`] | Transport boundary and the reqwest-backed implementation |
//! | [`telemetry`] | Injectable call observers |
//! | [`resilience`] | Optional retry layer above the client |

pub mod client;
pub mod error_code;
pub mod pipeline;
pub mod protocol;
pub mod resilience;
pub mod telemetry;
pub mod transport;
pub mod types;

pub use client::{AuthMode, ConnectOptions, ITopClient, ITopClientBuilder, OperationBuilder, Session};
pub use error_code::ApiStatusCode;
pub use telemetry::{CallEvent, CallObserver};
pub use types::{
    ApiResult, Envelope, ObjectKey, ObjectMap, ObjectRecord, OutputFields, ReturnMode,
};

/// Result type alias for the library
pub type Result<T> = std::result::Result<T, Error>;

/// Error type for the library
pub mod error;
pub use error::{Error, ErrorContext};
