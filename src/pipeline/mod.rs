//! # Result Pipeline
//!
//! Turns a decoded [`Envelope`](crate::types::Envelope) into the shape the
//! caller selected.
//!
//! ```text
//! Envelope ──► objects: null → {} ──► ReturnMode ──► ApiResult
//!                                        │
//!                     array  ─► Fields | Records (wire order)
//!                     object ─► Objects (map as sent)
//!                     all    ─► Envelope
//! ```
//!
//! Normalization is pure: no I/O, no suspension points.

pub mod normalize;

pub use normalize::{default_fields_only, normalize};
