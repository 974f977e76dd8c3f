//! Binary loading.
//!
//! A [`BinaryContainer`] owns the mapped input file and knows whether it is a
//! single object file or a universal (fat) Mach-O container. Slices and
//! sections are borrowed views into it.

pub mod arch;
pub mod slice;

pub use slice::ObjectSlice;

use crate::error::{DumpError, Result};
use crate::io::{IOLimits, MappedFile};
use object::read::macho::{MachOFatFile32, MachOFatFile64};
use object::FileKind;
use std::path::Path;
use tracing::debug;

/// Shape of the loaded file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContainerKind {
    /// A plain object file (ELF, Mach-O, COFF, PE, ...).
    Object,
    /// Universal Mach-O with 32-bit fat_arch records.
    Universal32,
    /// Universal Mach-O with 64-bit fat_arch records.
    Universal64,
}

impl ContainerKind {
    pub fn is_universal(self) -> bool {
        !matches!(self, ContainerKind::Object)
    }
}

/// An input binary and the memory backing it.
pub struct BinaryContainer {
    display_name: String,
    file: MappedFile,
    kind: ContainerKind,
}

impl BinaryContainer {
    /// Map `path` and check that it is a binary we can select a slice from.
    pub fn open<P: AsRef<Path>>(path: P, limits: &IOLimits) -> Result<Self> {
        let path = path.as_ref();
        let display_name = path.display().to_string();
        let file = MappedFile::open(path, limits)
            .map_err(|e| DumpError::from_io(display_name.clone(), e))?;
        let kind = detect_kind(file.bytes())
            .map_err(|m| DumpError::load(display_name.clone(), m))?;

        debug!(
            path = %display_name,
            size = file.size(),
            kind = ?kind,
            "Loaded binary container"
        );

        Ok(Self {
            display_name,
            file,
            kind,
        })
    }

    /// The name used in diagnostics: the path as given.
    pub fn display_name(&self) -> &str {
        &self.display_name
    }

    pub fn kind(&self) -> ContainerKind {
        self.kind
    }

    pub fn bytes(&self) -> &[u8] {
        self.file.bytes()
    }

    /// Select the object to inspect. See [`slice::select_slice`].
    pub fn select_slice(&self, arch: &str) -> Result<ObjectSlice<'_>> {
        slice::select_slice(self, arch)
    }
}

fn detect_kind(data: &[u8]) -> std::result::Result<ContainerKind, String> {
    if data.is_empty() {
        return Err("file is empty".to_string());
    }
    let kind = FileKind::parse(data)
        .map_err(|e| format!("unrecognized binary format ({e})"))?;
    match kind {
        FileKind::MachOFat32 => {
            MachOFatFile32::parse(data)
                .map_err(|e| format!("malformed universal binary ({e})"))?;
            Ok(ContainerKind::Universal32)
        }
        FileKind::MachOFat64 => {
            MachOFatFile64::parse(data)
                .map_err(|e| format!("malformed universal binary ({e})"))?;
            Ok(ContainerKind::Universal64)
        }
        FileKind::Archive => Err("static archives are not supported".to_string()),
        FileKind::DyldCache => Err("dyld shared caches are not supported".to_string()),
        _ => {
            parse_object(data)?;
            Ok(ContainerKind::Object)
        }
    }
}

/// Parse a single object file image. Only headers and tables are read.
pub(crate) fn parse_object(data: &[u8]) -> std::result::Result<object::File<'_>, String> {
    object::File::parse(data).map_err(|e| format!("malformed object file ({e})"))
}
