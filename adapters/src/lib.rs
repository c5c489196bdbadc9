#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![deny(clippy::unwrap_used)]

//! Protocol Adapter Library
//!
//! Adapters read a protocol description and translate it into the typed IR
//! understood by code generation. Attribute lookups, type names and request
//! shapes are all resolved here, so a description that gets through an
//! adapter is ready to emit.

pub mod protocol_adapter;
pub mod wayland_xml;
pub mod xml_tree;

// Re-export the main adapter types for convenience
pub use protocol_adapter::*;
pub use wayland_xml::WaylandXmlAdapter;
pub use xml_tree::{parse_document, XmlElement};
