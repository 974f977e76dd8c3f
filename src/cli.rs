//! Command line interface.

use crate::config::{DumpConfig, OutputFormat};
use crate::error::Result;
use crate::pipeline::DumpRequest;
use clap::{ArgAction, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "Dump reflection metadata sections of a binary",
    long_about = None
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Emit logs as JSON lines
    #[arg(long, global = true)]
    pub log_json: bool,

    /// JSON configuration file
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Output format
    #[arg(long, value_enum, global = true)]
    pub format: Option<OutputFormat>,

    /// Bytes of each section to show as hex
    #[arg(long, global = true)]
    pub hex_preview: Option<usize>,

    /// Maximum number of reflection strings to list
    #[arg(long, global = true)]
    pub max_strings: Option<usize>,

    /// Refuse input files larger than this many bytes
    #[arg(long, global = true)]
    pub max_file_size: Option<u64>,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Dump the reflection sections of a binary
    DumpReflectionSections {
        /// Filename of the binary file
        #[arg(long)]
        binary_filename: PathBuf,

        /// Architecture to inspect in the binary
        #[arg(long)]
        arch: String,
    },
}

impl Cli {
    /// Configuration from `--config` (or defaults) with flag overrides applied.
    pub fn resolve_config(&self) -> Result<DumpConfig> {
        let mut config = match &self.config {
            Some(path) => DumpConfig::from_json_file(path)?,
            None => DumpConfig::default(),
        };
        if let Some(format) = self.format {
            config.output.format = format;
        }
        if let Some(n) = self.hex_preview {
            config.output.hex_preview_bytes = n;
        }
        if let Some(n) = self.max_strings {
            config.output.max_strings = n;
        }
        if let Some(n) = self.max_file_size {
            config.io.max_file_size = n;
        }
        Ok(config)
    }

    pub fn request(&self) -> DumpRequest {
        match &self.command {
            Commands::DumpReflectionSections {
                binary_filename,
                arch,
            } => DumpRequest {
                binary_path: binary_filename.clone(),
                arch: arch.clone(),
            },
        }
    }
}
