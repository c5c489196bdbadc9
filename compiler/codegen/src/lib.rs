#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![deny(clippy::unwrap_used)]

//! Code generation for Wayland client proxy bindings.
//!
//! This crate turns a typed `Protocol` into Rust source: one opcode constant
//! per request, one function per request that marshals its arguments through
//! the native proxy API, and one `*_add_listener` function per interface that
//! has events.
//!
//! The generated code calls into an existing binding of the native client
//! library (`wl_proxy_marshal`, `wl_proxy_marshal_constructor`,
//! `wl_proxy_destroy`, `wl_proxy_add_listener` and the `Struct_*` types),
//! which it imports through the preamble.

pub mod generators;

use ir::Interface;
use thiserror::Error;

pub use generators::{ListenerGenerator, ModuleEmitter, OpcodeGenerator, RequestGenerator};

/// Module path the preamble glob-imports the native binding surface from.
pub const DEFAULT_RUNTIME_MODULE: &str = "client::wayland_client";

/// Error type for code generation operations in this crate.
#[derive(Debug, Error)]
pub enum CodegenError {
    /// Underlying I/O error while writing to the output sink.
    #[error(transparent)]
    Io(#[from] std::io::Error),
    /// The request's recorded shape disagrees with its arguments.
    #[error("request `{request}` is inconsistent: {reason}")]
    InconsistentShape {
        /// Qualified request name
        request: String,
        /// What disagrees
        reason: String,
    },
    /// Two parameters or locals of a generated function would share a name.
    #[error("generated function `{function}` would bind `{name}` twice")]
    DuplicateParameter {
        /// Generated function name
        function: String,
        /// Clashing name
        name: String,
    },
    /// A new_id argument was asked for a parameter type.
    #[error("new_id argument `{0}` has no parameter type")]
    NewIdParameter(String),
}

/// Convenient result type for codegen functions in this crate.
pub type Result<T> = std::result::Result<T, CodegenError>;

/// Options that shape the generated module.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmitOptions {
    /// Module whose items the preamble glob-imports
    pub runtime_module: String,
    /// Emit request summaries as doc comments
    pub emit_docs: bool,
}

impl Default for EmitOptions {
    fn default() -> Self {
        Self { runtime_module: DEFAULT_RUNTIME_MODULE.to_string(), emit_docs: false }
    }
}

/// A generator contributes one block of source per interface.
///
/// The module emitter runs its generators in a fixed order for every
/// interface, so each generator only ever sees one interface at a time.
pub trait CodeGenerator {
    /// Render this generator's block for `interface`; may be empty
    fn generate(&self, interface: &Interface) -> Result<String>;
}

/// Sub-crate: **`utils`**
///
/// Naming helpers shared by the generators.
pub mod utils;
