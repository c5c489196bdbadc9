//! This module contains the code generators for Wayland client proxy bindings.
//!
//! Each generator renders one block of source for one interface; the module
//! emitter stitches them together in declaration order.

/// Sub-crate generates: **`doc_comment`**
///
/// Turns description summaries into triple-slash doc comments.
pub mod doc_comment;

/// Primitive and object argument types mapped to Rust FFI types
pub mod type_mapper;

pub mod opcodes;
pub use opcodes::OpcodeGenerator;

/// Request functions: plain, constructor and destructor shapes
pub mod request;
pub use request::RequestGenerator;

pub mod listener;
pub use listener::ListenerGenerator;

/// Whole-module emission: preamble, then every interface in order
pub mod module;
pub use module::ModuleEmitter;
