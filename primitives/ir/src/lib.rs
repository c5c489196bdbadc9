#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![deny(clippy::unwrap_used)]

//! Wlscan Intermediate Representation (IR)
//!
//! This crate defines the typed IR that a protocol description is converted
//! into before code generation. Every required schema attribute is a plain
//! field here, optional attributes are `Option`s, and request shapes are an
//! explicit enum, so the emitters never look anything up by string.

pub mod protocol_ir;

// Re-export the main IR types for convenience
pub use protocol_ir::*;
