#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![deny(clippy::unwrap_used)]
//! Command-line front end for wlscan.

use std::path::PathBuf;

use clap::{ArgAction, Parser};
use config::Config;
use pipeline::{OutputTarget, WlscanCompiler};
use semantics::DestructorArgsPolicy;
use thiserror::Error;

/// Errors that can occur while running the CLI.
#[derive(Debug, Error)]
pub enum CliError {
    /// Configuration could not be loaded.
    #[error(transparent)]
    Config(#[from] config::ConfigError),
    /// The compilation pipeline failed.
    #[error(transparent)]
    Pipeline(#[from] pipeline::PipelineError),
}

/// Result type alias for CLI operations.
pub type Result<T> = std::result::Result<T, CliError>;

/// Generate Rust proxy bindings from a Wayland protocol XML description.
#[derive(Parser, Debug)]
#[command(name = "wlscan", version, about)]
pub struct Cli {
    /// Protocol XML file to compile
    pub input: PathBuf,
    /// Write the generated module to this file instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,
    /// Configuration file (defaults to the user config directory)
    #[arg(long)]
    pub config: Option<PathBuf>,
    /// Also write the typed protocol IR as JSON to this path
    #[arg(long, value_name = "PATH")]
    pub dump_ir: Option<PathBuf>,
    /// Emit `///` doc comments from request summaries
    #[arg(long)]
    pub emit_docs: bool,
    /// Accept destructors that declare arguments (they are not marshalled)
    #[arg(long)]
    pub allow_destructor_args: bool,
    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

impl Cli {
    /// Apply command-line overrides on top of a loaded configuration.
    pub fn apply(&self, mut config: Config) -> Config {
        if self.emit_docs {
            config.codegen.emit_docs = true;
        }
        if self.allow_destructor_args {
            config.validation.destructor_args = DestructorArgsPolicy::Ignore;
        }
        config
    }
}

/// Run one invocation of the CLI.
pub fn run(cli: &Cli) -> Result<()> {
    let config = cli.apply(Config::load(cli.config.as_deref())?);
    logging::init(logging::level_for_verbosity(&config.logging.level, cli.verbose));

    let compiler = WlscanCompiler::from_config(&config);
    let protocol = compiler.load(&cli.input)?;
    if let Some(ir_path) = &cli.dump_ir {
        compiler.write_ir(&protocol, ir_path)?;
    }
    compiler.emit(&protocol, &OutputTarget::from_arg(cli.output.clone()))?;
    Ok(())
}
