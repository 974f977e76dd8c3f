//! Architecture slice selection.

use super::arch;
use super::{BinaryContainer, ContainerKind};
use crate::error::{DumpError, Result};
use object::read::macho::{FatArch, MachOFatFile32, MachOFatFile64};
use object::{BinaryFormat, Object};
use tracing::debug;

/// The single object file that sections are looked up in: either the whole
/// container or one architecture's image inside a universal binary.
pub struct ObjectSlice<'a> {
    file: object::File<'a>,
    data: &'a [u8],
    offset: u64,
    arch_name: String,
}

impl<'a> ObjectSlice<'a> {
    fn parse(
        container: &BinaryContainer,
        data: &'a [u8],
        offset: u64,
        arch_name: String,
    ) -> Result<Self> {
        let file = object::File::parse(data).map_err(|e| {
            DumpError::load(
                container.display_name(),
                format!("slice '{arch_name}' is not a valid object file ({e})"),
            )
        })?;
        Ok(Self {
            file,
            data,
            offset,
            arch_name,
        })
    }

    /// Parsed view of the slice.
    pub fn file(&self) -> &object::File<'a> {
        &self.file
    }

    /// Raw bytes of the slice.
    pub fn data(&self) -> &'a [u8] {
        self.data
    }

    /// Offset of the slice within its container; 0 for plain object files.
    pub fn offset(&self) -> u64 {
        self.offset
    }

    pub fn arch_name(&self) -> &str {
        &self.arch_name
    }

    pub fn format_name(&self) -> &'static str {
        match self.file.format() {
            BinaryFormat::Coff => "COFF",
            BinaryFormat::Elf => "ELF",
            BinaryFormat::MachO => "Mach-O",
            BinaryFormat::Pe => "PE",
            BinaryFormat::Wasm => "Wasm",
            BinaryFormat::Xcoff => "XCOFF",
            _ => "unknown",
        }
    }
}

/// Pick the object to operate on.
///
/// A plain object file is used whole and `arch` is not checked against it.
/// A universal binary must contain a slice whose arch flag name equals `arch`.
pub fn select_slice<'a>(container: &'a BinaryContainer, arch: &str) -> Result<ObjectSlice<'a>> {
    let data = container.bytes();
    match container.kind() {
        ContainerKind::Object => {
            let file = super::parse_object(data)
                .map_err(|m| DumpError::load(container.display_name(), m))?;
            let arch_name = arch::object_arch_name(file.architecture());
            debug!(
                path = container.display_name(),
                requested = arch,
                actual = %arch_name,
                "Using whole object file"
            );
            Ok(ObjectSlice {
                file,
                data,
                offset: 0,
                arch_name,
            })
        }
        ContainerKind::Universal32 => {
            let fat = MachOFatFile32::parse(data)
                .map_err(|e| DumpError::load(container.display_name(), e.to_string()))?;
            select_fat_arch(container, fat.arches(), arch)
        }
        ContainerKind::Universal64 => {
            let fat = MachOFatFile64::parse(data)
                .map_err(|e| DumpError::load(container.display_name(), e.to_string()))?;
            select_fat_arch(container, fat.arches(), arch)
        }
    }
}

fn select_fat_arch<'a, A: FatArch>(
    container: &'a BinaryContainer,
    arches: &[A],
    arch: &str,
) -> Result<ObjectSlice<'a>> {
    let mut available = Vec::with_capacity(arches.len());
    for entry in arches {
        let name = arch::describe_cpu(entry.cputype(), entry.cpusubtype());
        if arch::arch_flag_name(entry.cputype(), entry.cpusubtype()) == Some(arch) {
            let (offset, size) = entry.file_range();
            let data = entry.data(container.bytes()).map_err(|e| {
                DumpError::load(
                    container.display_name(),
                    format!("slice '{name}' at {offset:#x} is out of bounds ({e})"),
                )
            })?;
            debug!(
                path = container.display_name(),
                arch = %name,
                offset = offset,
                size = size,
                "Selected universal binary slice"
            );
            return ObjectSlice::parse(container, data, offset, name);
        }
        available.push(name);
    }

    Err(DumpError::ArchitectureNotFound {
        path: container.display_name().to_string(),
        arch: arch.to_string(),
        available,
    })
}
