//! wlscan
//!
//! Compiles a Wayland protocol XML description into a Rust module of
//! client-side proxy bindings.

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![deny(clippy::unwrap_used)]

use std::error::Error;
use std::process::ExitCode;

use clap::Parser;
use wlscan_cli::{run, Cli};

fn main() -> ExitCode {
    let cli = Cli::parse();
    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {}", e);
            let mut source = e.source();
            while let Some(cause) = source {
                eprintln!("  caused by: {}", cause);
                source = cause.source();
            }
            ExitCode::FAILURE
        }
    }
}
