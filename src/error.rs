//! Error types shared by the library.
//!
//! Every failure the core can produce is one of these variants. The library
//! never terminates the process; `main` decides what an error means for the
//! exit code.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    /// A required path argument is not absolute or does not exist on disk.
    #[error("invalid path: {} (must be absolute and exist)", .0.display())]
    InvalidPath(PathBuf),

    /// `ProjectConfig.txt` was not found directly under the project root.
    #[error("can't find 'ProjectConfig.txt' in {}", .0.display())]
    MissingDescriptorFile(PathBuf),

    /// A required descriptor key is missing or empty after parsing.
    #[error("'{key}' not set in ProjectConfig.txt")]
    IncompleteDescriptor { key: &'static str },

    /// A platform token outside the supported set.
    #[error("unsupported platform '{0}'")]
    UnsupportedPlatform(String),

    /// IO errors (file reads, directory walks, copies).
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for enkit operations.
pub type Result<T> = std::result::Result<T, Error>;
