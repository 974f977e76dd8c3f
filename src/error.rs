//! Error types for reflection section dumping.
//!
//! Every variant is fatal for a single invocation. The binary prints the
//! `Display` form to stderr and exits non-zero.

use crate::io::error::IoError;
use crate::sections::SectionRole;
use thiserror::Error;

/// Main error type for the dump pipeline.
#[derive(Debug, Error)]
pub enum DumpError {
    /// The input could not be opened, mapped or recognized as a binary.
    #[error("{path}: {message}")]
    Load { path: String, message: String },

    /// A universal binary has no slice for the requested architecture.
    #[error(
        "{path}: no slice for architecture '{arch}' (available: {})",
        .available.join(", ")
    )]
    ArchitectureNotFound {
        path: String,
        arch: String,
        available: Vec<String>,
    },

    /// A required reflection section is absent.
    #[error("{path} doesn't have {} section!", .role.description())]
    MissingSection { path: String, role: SectionRole },

    /// Configuration file could not be read or parsed.
    #[error("Invalid configuration: {0}")]
    Config(String),

    /// Writing the dump failed.
    #[error("failed to write dump")]
    Output(#[from] std::io::Error),
}

impl DumpError {
    pub fn load(path: impl Into<String>, message: impl Into<String>) -> Self {
        DumpError::Load {
            path: path.into(),
            message: message.into(),
        }
    }

    pub(crate) fn from_io(path: impl Into<String>, err: IoError) -> Self {
        DumpError::load(path, err.to_string())
    }
}

/// Result type alias for dump operations
pub type Result<T> = std::result::Result<T, DumpError>;
