//! Argument types to Rust FFI types.
//!
//! The mapping is purely nominal: no conversion or range checking happens in
//! the generated code.

use ir::{ArgType, Primitive};

use crate::utils::struct_name;
use crate::{CodegenError, Result};

/// Fixed-point scalar type of the native binding.
pub const FIXED_TYPE: &str = "wl_fixed_t";

/// Rust type of a primitive argument
pub fn map_primitive(primitive: Primitive) -> &'static str {
    match primitive {
        Primitive::Int => "i32",
        Primitive::Uint => "u32",
        Primitive::Fixed => FIXED_TYPE,
        Primitive::Fd => "i32",
        Primitive::String => "&str",
        Primitive::Array => "*mut Struct_wl_array",
    }
}

/// Rust parameter type of an argument.
///
/// Objects become pointers to the referenced interface's opaque struct. A
/// new_id argument is never a parameter; asking for its type is an error.
pub fn param_type(arg_name: &str, ty: &ArgType) -> Result<String> {
    match ty {
        ArgType::Primitive(p) => Ok(map_primitive(*p).to_string()),
        ArgType::Object { interface } => Ok(format!("*const {}", struct_name(interface))),
        ArgType::NewId { .. } => Err(CodegenError::NewIdParameter(arg_name.to_string())),
    }
}
