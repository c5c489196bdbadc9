//! Output sinks.
//!
//! The generated module is written to an explicit sink that lives only for
//! the duration of one write; the process-wide stdout is never swapped.

use std::fmt;
use std::fs::{self, File};
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;

use crate::Result;

/// Destination of the generated module
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum OutputTarget {
    /// Standard output
    #[default]
    Stdout,
    /// A file, created or truncated when opened
    File(PathBuf),
}

impl OutputTarget {
    /// `File` when a path is given, `Stdout` otherwise
    pub fn from_arg(path: Option<PathBuf>) -> Self {
        match path {
            Some(path) => OutputTarget::File(path),
            None => OutputTarget::Stdout,
        }
    }

    /// Open the sink, creating parent directories of a file target as needed
    pub fn open(&self) -> Result<Box<dyn Write>> {
        match self {
            OutputTarget::Stdout => Ok(Box::new(io::stdout().lock())),
            OutputTarget::File(path) => {
                if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
                    fs::create_dir_all(parent)?;
                }
                Ok(Box::new(BufWriter::new(File::create(path)?)))
            }
        }
    }

    /// Write `contents` to a freshly opened sink and flush it
    pub fn write_all(&self, contents: &str) -> Result<()> {
        let mut sink = self.open()?;
        sink.write_all(contents.as_bytes())?;
        sink.flush()?;
        Ok(())
    }
}

impl fmt::Display for OutputTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputTarget::Stdout => f.write_str("<stdout>"),
            OutputTarget::File(path) => write!(f, "{}", path.display()),
        }
    }
}
