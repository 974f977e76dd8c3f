//! Assembly of the five reflection sections into one bundle.

use super::locate::{locate_section, NamedSection};
use super::SectionRole;
use crate::binary::ObjectSlice;
use crate::error::{DumpError, Result};

/// The reflection sections of one object, plus where they came from.
///
/// Borrows from the container that produced the slice, so it cannot outlive
/// the mapped file.
#[derive(Debug, Clone)]
pub struct SectionBundle<'a> {
    display_name: &'a str,
    format: &'static str,
    arch_name: String,
    field: NamedSection<'a>,
    associated_type: NamedSection<'a>,
    builtin_type: NamedSection<'a>,
    type_ref: NamedSection<'a>,
    reflection_strings: NamedSection<'a>,
}

impl<'a> SectionBundle<'a> {
    /// Look up every reflection section in `slice`.
    ///
    /// Lookups run in the order field, associated type, builtin type,
    /// typeref, reflection strings; the first missing required section ends
    /// assembly. Missing optional sections become empty ranges.
    pub fn assemble(slice: &ObjectSlice<'a>, display_name: &'a str) -> Result<Self> {
        let field = required(slice, SectionRole::Field, display_name)?;
        let associated_type = optional(slice, SectionRole::AssociatedType);
        let builtin_type = optional(slice, SectionRole::BuiltinType);
        let type_ref = required(slice, SectionRole::TypeRef, display_name)?;
        let reflection_strings = required(slice, SectionRole::ReflectionStrings, display_name)?;

        Ok(Self {
            display_name,
            format: slice.format_name(),
            arch_name: slice.arch_name().to_string(),
            field,
            associated_type,
            builtin_type,
            type_ref,
            reflection_strings,
        })
    }

    pub fn display_name(&self) -> &'a str {
        self.display_name
    }

    /// Object format of the slice, e.g. `Mach-O`.
    pub fn format(&self) -> &'static str {
        self.format
    }

    pub fn arch_name(&self) -> &str {
        &self.arch_name
    }

    pub fn field(&self) -> &NamedSection<'a> {
        &self.field
    }

    pub fn associated_type(&self) -> &NamedSection<'a> {
        &self.associated_type
    }

    pub fn builtin_type(&self) -> &NamedSection<'a> {
        &self.builtin_type
    }

    pub fn type_ref(&self) -> &NamedSection<'a> {
        &self.type_ref
    }

    pub fn reflection_strings(&self) -> &NamedSection<'a> {
        &self.reflection_strings
    }

    pub fn get(&self, role: SectionRole) -> &NamedSection<'a> {
        match role {
            SectionRole::Field => &self.field,
            SectionRole::AssociatedType => &self.associated_type,
            SectionRole::BuiltinType => &self.builtin_type,
            SectionRole::TypeRef => &self.type_ref,
            SectionRole::ReflectionStrings => &self.reflection_strings,
        }
    }

    /// All five sections in lookup order.
    pub fn sections(&self) -> [&NamedSection<'a>; 5] {
        SectionRole::ALL.map(|role| self.get(role))
    }
}

fn required<'a>(
    slice: &ObjectSlice<'a>,
    role: SectionRole,
    display_name: &str,
) -> Result<NamedSection<'a>> {
    match locate_section(slice, role) {
        Some(section) => Ok(section),
        None => Err(DumpError::MissingSection {
            path: display_name.to_string(),
            role,
        }),
    }
}

fn optional<'a>(slice: &ObjectSlice<'a>, role: SectionRole) -> NamedSection<'a> {
    locate_section(slice, role).unwrap_or_else(|| NamedSection::absent(role))
}
