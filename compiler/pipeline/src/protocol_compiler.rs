//! Wlscan Compiler
//!
//! Wires a schema adapter to the module emitter. The typed IR is built and
//! the whole module rendered before the output sink is opened, so schema
//! and shape errors never leave a truncated file behind.

use std::path::Path;

use adapters::{SchemaAdapter, WaylandXmlAdapter};
use codegen::{EmitOptions, ModuleEmitter};
use config::Config;
use ir::Protocol;

use crate::{OutputTarget, PipelineError, Result};

/// Wlscan Protocol Compiler
pub struct WlscanCompiler {
    adapter: Box<dyn SchemaAdapter>,
    emitter: ModuleEmitter,
}

impl Default for WlscanCompiler {
    fn default() -> Self { Self::from_config(&Config::default()) }
}

impl WlscanCompiler {
    /// Create a compiler from an adapter and emit options
    pub fn new<A: SchemaAdapter + 'static>(adapter: A, options: EmitOptions) -> Self {
        Self { adapter: Box::new(adapter), emitter: ModuleEmitter::new(options) }
    }

    /// Create a Wayland XML compiler configured from `config`
    pub fn from_config(config: &Config) -> Self {
        let adapter = WaylandXmlAdapter::with_destructor_args(config.validation.destructor_args);
        let options = EmitOptions {
            runtime_module: config.codegen.runtime_module.clone(),
            emit_docs: config.codegen.emit_docs,
        };
        Self::new(adapter, options)
    }

    /// Build the typed IR of the protocol description at `input`
    pub fn load(&self, input: &Path) -> Result<Protocol> {
        logging::debug(
            "pipeline",
            &format!("reading {} with {}", input.display(), self.adapter.name()),
        );
        let protocol = self.adapter.extract_protocol(input)?;
        logging::debug(
            "pipeline",
            &format!(
                "{} interfaces, {} requests",
                protocol.interfaces.len(),
                protocol.request_count()
            ),
        );
        Ok(protocol)
    }

    /// Render the bindings module for the protocol description at `input`
    pub fn render(&self, input: &Path) -> Result<String> {
        let protocol = self.load(input)?;
        Ok(self.emitter.render(&protocol)?)
    }

    /// Compile `input` and write the module to `target`
    pub fn compile(&self, input: &Path, target: &OutputTarget) -> Result<()> {
        let protocol = self.load(input)?;
        self.emit(&protocol, target)
    }

    /// Write the module of an already loaded protocol to `target`
    pub fn emit(&self, protocol: &Protocol, target: &OutputTarget) -> Result<()> {
        let rendered = self.emitter.render(protocol)?;
        target.write_all(&rendered)?;
        logging::debug("pipeline", &format!("wrote {} bytes to {}", rendered.len(), target));
        Ok(())
    }

    /// Write the typed IR of `input` as JSON to `path`
    pub fn dump_ir(&self, input: &Path, path: &Path) -> Result<()> {
        let protocol = self.load(input)?;
        self.write_ir(&protocol, path)
    }

    /// Write an already loaded protocol as JSON to `path`
    pub fn write_ir(&self, protocol: &Protocol, path: &Path) -> Result<()> {
        protocol.to_file(path).map_err(|e| {
            PipelineError::Message(format!("failed to write IR to {}: {}", path.display(), e))
        })
    }
}
