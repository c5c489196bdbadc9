#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![deny(clippy::unwrap_used)]

//! Simple logging utilities for the compiler.
//!
//! Everything goes to stderr: stdout may be carrying generated code.

use std::str::FromStr;

use tracing::Level;

/// Install a stderr subscriber at the given level ("trace", "debug", "info", "warn", "error").
///
/// Unknown levels fall back to `warn`. Calling this more than once is harmless;
/// only the first subscriber is installed.
pub fn init(level: &str) {
    let level = Level::from_str(level).unwrap_or(Level::WARN);
    let _ = tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

/// Level name for a `-v` count: 0 keeps the configured level.
pub fn level_for_verbosity(configured: &str, verbose: u8) -> &str {
    match verbose {
        0 => configured,
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

/// Emits a trace message tagged with its module.
pub fn trace(module: &str, msg: &str) {
    tracing::trace!(module, "{}", msg);
}

/// Emits a debug message tagged with its module.
pub fn debug(module: &str, msg: &str) {
    tracing::debug!(module, "{}", msg);
}

/// Emits a warning tagged with its module.
pub fn warn(module: &str, msg: &str) {
    tracing::warn!(module, "{}", msg);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_level_for_verbosity() {
        assert_eq!(level_for_verbosity("warn", 0), "warn");
        assert_eq!(level_for_verbosity("warn", 1), "info");
        assert_eq!(level_for_verbosity("error", 2), "debug");
        assert_eq!(level_for_verbosity("warn", 9), "trace");
    }

    #[test]
    fn test_init_is_idempotent() {
        init("debug");
        init("not-a-level");
        trace("tests", "still fine");
    }
}
