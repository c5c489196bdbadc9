//! Schema Adapter Trait
//!
//! This module defines the SchemaAdapter trait that protocol description
//! readers implement to produce the typed IR.

use std::path::Path;

use ir::Protocol;
use thiserror::Error;

#[derive(Debug, Error)]
/// Errors that can occur while reading a protocol description
pub enum SchemaError {
    /// I/O error while reading files
    #[error(transparent)]
    Io(#[from] std::io::Error),
    /// The document is not well-formed XML
    #[error("malformed XML: {0}")]
    Xml(#[from] quick_xml::Error),
    /// The document structure is broken in a way the XML reader does not report
    #[error("malformed document: {0}")]
    Malformed(String),
    /// The root element is not the expected one
    #[error("expected root element <{expected}>, found <{found}>")]
    UnexpectedRoot {
        /// Expected tag name
        expected: &'static str,
        /// Tag name actually found
        found: String,
    },
    /// A required attribute is absent
    #[error("{element} is missing required attribute `{attribute}`")]
    MissingAttribute {
        /// Description of the element
        element: String,
        /// Attribute name
        attribute: String,
    },
    /// An attribute value could not be interpreted
    #[error("{element} has invalid `{attribute}` value `{value}`")]
    InvalidAttribute {
        /// Description of the element
        element: String,
        /// Attribute name
        attribute: String,
        /// Offending value
        value: String,
    },
    /// An argument type is not part of the vocabulary
    #[error("argument `{arg}` of `{request}` has unknown type `{ty}`")]
    UnknownArgType {
        /// Qualified request name
        request: String,
        /// Argument name
        arg: String,
        /// Type name found
        ty: String,
    },
    /// A request `type` tag other than "destructor"
    #[error("request `{request}` has unknown type tag `{tag}`")]
    UnknownRequestType {
        /// Qualified request name
        request: String,
        /// Tag found
        tag: String,
    },
    /// An object argument without an interface reference
    #[error("object argument `{arg}` of `{request}` does not name an interface")]
    MissingInterface {
        /// Qualified request name
        request: String,
        /// Argument name
        arg: String,
    },
    /// The request combines features code generation cannot express
    #[error(transparent)]
    Shape(#[from] semantics::SemanticError),
}

/// Result alias for schema adapter operations
pub type SchemaResult<T> = std::result::Result<T, SchemaError>;

/// Schema Adapter trait for translating protocol descriptions to the IR
pub trait SchemaAdapter {
    /// Get the name of this adapter
    ///
    /// Examples: "wayland-xml"
    fn name(&self) -> &'static str;

    /// Build the IR from the text of a protocol description
    fn parse_protocol(&self, source: &str) -> SchemaResult<Protocol>;

    /// Build the IR from a protocol description file
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the protocol description
    fn extract_protocol(&self, path: &Path) -> SchemaResult<Protocol> {
        let source = std::fs::read_to_string(path)?;
        self.parse_protocol(&source)
    }
}
