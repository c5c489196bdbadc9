#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![deny(clippy::unwrap_used)]

//! High-level pipeline that turns a protocol description into a bindings module.
//!
//! ## Module Organization
//!
//! - `output` - Where the generated module goes (stdout or a file)
//! - `protocol_compiler` - Adapter, code generation and sink wired together

use thiserror::Error;

/// Convenient result type for pipeline operations.
pub type Result<T> = std::result::Result<T, PipelineError>;

/// Errors that can occur while running the pipeline.
#[derive(Debug, Error)]
pub enum PipelineError {
    /// Generic message-based error.
    #[error("{0}")]
    Message(String),
    /// Error originating from the schema adapter.
    #[error(transparent)]
    Schema(#[from] adapters::SchemaError),
    /// Error propagated from the codegen crate.
    #[error(transparent)]
    Codegen(#[from] codegen::CodegenError),
    /// Error loading configuration.
    #[error(transparent)]
    Config(#[from] config::ConfigError),
    /// I/O error while writing output.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

// Module declarations
pub mod output;
pub mod protocol_compiler;

pub use output::OutputTarget;
pub use protocol_compiler::WlscanCompiler;
