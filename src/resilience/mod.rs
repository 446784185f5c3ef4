//! # Resilience
//!
//! Opt-in retry layer that sits above the client. The dispatch path itself
//! never retries; callers who want another attempt wrap the call:
//!
//! ```rust,no_run
//! use itop_api_client::resilience::RetryPolicy;
//! # async fn demo(client: itop_api_client::ITopClient) -> itop_api_client::Result<()> {
//! let policy = RetryPolicy::default();
//! let people = policy
//!     .run(|| client.get("Person", 42).output_fields(["id", "friendlyname"]).execute())
//!     .await?;
//! # let _ = people;
//! # Ok(())
//! # }
//! ```
//!
//! The default policy makes two attempts two seconds apart, and only when
//! the API answered `UNAUTHORIZED`.

pub mod retry;

pub use retry::{RetryConfig, RetryPolicy};
