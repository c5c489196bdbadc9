//! Opcode constants.
//!
//! A request's opcode is its position in the interface's declaration order,
//! so reordering requests in a protocol description breaks wire compatibility.

use ir::Interface;

use crate::utils::opcode_name;
use crate::{CodeGenerator, Result};

/// Generator for one `pub const` per request
#[derive(Debug, Clone, Copy, Default)]
pub struct OpcodeGenerator;

/// Render the opcode constants of `interface`, or nothing if it has no requests
pub fn render_opcodes(interface: &Interface) -> String {
    let mut out = String::new();
    for (opcode, request) in interface.opcodes() {
        out.push_str(&format!(
            "pub const {}: ::libc::c_uint = {};\n",
            opcode_name(&interface.name, &request.name),
            opcode
        ));
    }
    if !out.is_empty() {
        out.push('\n');
    }
    out
}

impl CodeGenerator for OpcodeGenerator {
    fn generate(&self, interface: &Interface) -> Result<String> { Ok(render_opcodes(interface)) }
}
