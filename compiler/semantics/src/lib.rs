#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![deny(clippy::unwrap_used)]

//! Semantic analysis for protocol IR.
//!
//! Decides the shape of every request (plain, constructor or destructor)
//! and rejects the combinations code generation cannot express.

/// Request shape classification used by adapters while building the IR
pub mod request_shape;

pub use request_shape::{classify_request, DestructorArgsPolicy};

/// Errors that can occur during semantic analysis.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SemanticError {
    /// A request declares more than one new_id argument.
    #[error("request `{request}` declares {count} new_id arguments; at most one is supported")]
    MultipleNewIds {
        /// Qualified request name (`interface.request`)
        request: String,
        /// Number of new_id arguments found
        count: usize,
    },
    /// A destructor request also creates an object.
    #[error("destructor request `{request}` must not declare a new_id argument")]
    DestructorWithNewId {
        /// Qualified request name (`interface.request`)
        request: String,
    },
    /// A destructor request declares arguments.
    #[error(
        "destructor request `{request}` declares arguments ({args}); destructors are expected to be argument-free"
    )]
    DestructorWithArgs {
        /// Qualified request name (`interface.request`)
        request: String,
        /// Comma-separated argument names
        args: String,
    },
}

/// Result type for semantic analysis operations.
pub type Result<T> = std::result::Result<T, SemanticError>;
