//! iTop client.
//!
//! Keep the public surface small: connect through [`ITopClientBuilder`], then
//! call one method per remote operation. Implementation details are split
//! into submodules under `src/client/`.

pub mod builder;
pub mod config;
pub mod core;
pub mod error_classification;
mod execution;
pub mod operations;
pub mod session;

pub use builder::ITopClientBuilder;
pub use config::ConnectOptions;
pub use core::ITopClient;
pub use operations::OperationBuilder;
pub use session::{AuthMode, Session};
