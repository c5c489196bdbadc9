//! Module emission.
//!
//! Writes the preamble once, then for every interface in declaration order:
//! opcode constants, request functions, and the listener registration if the
//! interface has events. The whole module is rendered before anything
//! reaches the sink, so a failing request never leaves half a module behind.

use std::io::Write;

use ir::Protocol;

use super::{ListenerGenerator, OpcodeGenerator, RequestGenerator};
use crate::{CodeGenerator, EmitOptions, Result};

/// Emits the bindings module for a whole protocol
pub struct ModuleEmitter {
    options: EmitOptions,
    generators: Vec<Box<dyn CodeGenerator>>,
}

impl ModuleEmitter {
    /// Create an emitter with the standard generator order
    pub fn new(options: EmitOptions) -> Self {
        let generators: Vec<Box<dyn CodeGenerator>> = vec![
            Box::new(OpcodeGenerator),
            Box::new(RequestGenerator::new(options.clone())),
            Box::new(ListenerGenerator),
        ];
        Self { options, generators }
    }

    /// The fixed text that precedes the first interface
    pub fn preamble(&self) -> String {
        format!(
            "// Generated by wlscan. Do not edit.\n\nuse {}::*;\n\n",
            self.options.runtime_module
        )
    }

    /// Render the whole module as a string
    pub fn render(&self, protocol: &Protocol) -> Result<String> {
        let mut out = self.preamble();
        for interface in &protocol.interfaces {
            out.push_str(&format!("// {}\n\n", interface.name));
            for generator in &self.generators {
                out.push_str(&generator.generate(interface)?);
            }
            logging::trace(
                "codegen",
                &format!("emitted {} ({} requests)", interface.name, interface.requests.len()),
            );
        }
        Ok(out)
    }

    /// Render the module and write it to `sink`
    pub fn emit<W: Write + ?Sized>(&self, protocol: &Protocol, sink: &mut W) -> Result<()> {
        let rendered = self.render(protocol)?;
        sink.write_all(rendered.as_bytes())?;
        sink.flush()?;
        Ok(())
    }
}

impl Default for ModuleEmitter {
    fn default() -> Self { Self::new(EmitOptions::default()) }
}
