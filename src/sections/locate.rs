//! Section lookup by name alias.

use super::SectionRole;
use crate::binary::ObjectSlice;
use object::{Object, ObjectSection};
use tracing::{debug, trace, warn};

/// A reflection section's bytes, borrowed from the loaded container.
///
/// An absent optional section is represented by [`NamedSection::absent`]:
/// no name, no offset and an empty byte range.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NamedSection<'a> {
    role: SectionRole,
    name: Option<&'a str>,
    bytes: &'a [u8],
    file_offset: Option<u64>,
    address: u64,
}

impl<'a> NamedSection<'a> {
    pub fn absent(role: SectionRole) -> Self {
        Self {
            role,
            name: None,
            bytes: &[],
            file_offset: None,
            address: 0,
        }
    }

    pub fn role(&self) -> SectionRole {
        self.role
    }

    /// Name of the matched section, `None` when absent.
    pub fn name(&self) -> Option<&'a str> {
        self.name
    }

    pub fn bytes(&self) -> &'a [u8] {
        self.bytes
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    pub fn is_present(&self) -> bool {
        self.name.is_some()
    }

    /// Offset of the section contents within the container file.
    pub fn file_offset(&self) -> Option<u64> {
        self.file_offset
    }

    pub fn address(&self) -> u64 {
        self.address
    }

    /// `[begin, end)` of the contents within the container file; `(0, 0)`
    /// when the section is absent or has no file contents.
    pub fn file_range(&self) -> (u64, u64) {
        match self.file_offset {
            Some(begin) => (begin, begin + self.bytes.len() as u64),
            None => (0, 0),
        }
    }
}

/// Find the first section, in section table order, whose name equals any of
/// `aliases`. Absence is not an error.
pub fn locate_by_names<'a>(
    slice: &ObjectSlice<'a>,
    role: SectionRole,
    aliases: &[&str],
) -> Option<NamedSection<'a>> {
    for section in slice.file().sections() {
        let name = match section.name() {
            Ok(name) => name,
            Err(e) => {
                trace!(index = section.index().0, error = %e, "Skipping unnamed section");
                continue;
            }
        };
        if !aliases.iter().any(|alias| *alias == name) {
            continue;
        }

        let bytes = match section.data() {
            Ok(bytes) => bytes,
            Err(e) => {
                warn!(section = name, error = %e, "Section contents unreadable; using empty range");
                &[][..]
            }
        };
        let file_offset = section
            .file_range()
            .map(|(offset, _)| slice.offset() + offset);

        debug!(
            role = %role,
            section = name,
            offset = ?file_offset,
            size = bytes.len(),
            "Located reflection section"
        );
        return Some(NamedSection {
            role,
            name: Some(name),
            bytes,
            file_offset,
            address: section.address(),
        });
    }
    trace!(role = %role, "Reflection section not present");
    None
}

/// Find the section for `role` under any of its known names.
pub fn locate_section<'a>(slice: &ObjectSlice<'a>, role: SectionRole) -> Option<NamedSection<'a>> {
    locate_by_names(slice, role, role.aliases())
}
