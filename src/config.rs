//! Configuration for the dump pipeline.
//!
//! Defaults suit interactive use. A JSON file may override any subset of
//! fields; command line flags override the file.

use crate::error::{DumpError, Result};
use crate::io::IOLimits;
use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Master configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DumpConfig {
    /// Input file limits.
    pub io: IOConfig,
    /// Dump rendering options.
    pub output: OutputConfig,
}

impl DumpConfig {
    /// Load a configuration from a JSON file. Missing fields keep their defaults.
    pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)
            .map_err(|e| DumpError::Config(format!("{}: {}", path.display(), e)))?;
        Self::from_json_str(&text).map_err(|e| match e {
            DumpError::Config(msg) => DumpError::Config(format!("{}: {}", path.display(), msg)),
            other => other,
        })
    }

    pub fn from_json_str(text: &str) -> Result<Self> {
        serde_json::from_str(text).map_err(|e| DumpError::Config(e.to_string()))
    }
}

/// I/O configuration for loading the input binary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct IOConfig {
    /// Maximum file size to load (default: 1073741824 = 1GB).
    pub max_file_size: u64,
}

impl Default for IOConfig {
    fn default() -> Self {
        Self {
            max_file_size: IOLimits::default().max_file_size,
        }
    }
}

impl IOConfig {
    pub fn limits(&self) -> IOLimits {
        IOLimits {
            max_file_size: self.max_file_size,
        }
    }
}

/// Output rendering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// Dump rendering options.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Output format (default: text).
    pub format: OutputFormat,
    /// Number of leading bytes of each section shown as hex (default: 64).
    pub hex_preview_bytes: usize,
    /// Maximum number of reflection strings listed (default: 256).
    pub max_strings: usize,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: OutputFormat::Text,
            hex_preview_bytes: 64,
            max_strings: 256,
        }
    }
}
