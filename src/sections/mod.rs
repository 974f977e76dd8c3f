//! Reflection metadata sections.
//!
//! Each logical section is identified by a [`SectionRole`] and may appear
//! under several names depending on the object format and on the naming
//! scheme the compiler used (the legacy `swift3` prefix or the current
//! `swift5` one).

pub mod bundle;
pub mod locate;

pub use bundle::SectionBundle;
pub use locate::{locate_section, NamedSection};

use serde::Serialize;
use std::fmt;

/// Logical role of a reflection section.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SectionRole {
    Field,
    AssociatedType,
    BuiltinType,
    TypeRef,
    ReflectionStrings,
}

impl SectionRole {
    /// All roles in the order the assembler looks them up.
    pub const ALL: [SectionRole; 5] = [
        SectionRole::Field,
        SectionRole::AssociatedType,
        SectionRole::BuiltinType,
        SectionRole::TypeRef,
        SectionRole::ReflectionStrings,
    ];

    /// Accepted section names: current Mach-O, ELF and COFF spellings, then
    /// the legacy Mach-O and ELF ones.
    pub fn aliases(self) -> &'static [&'static str] {
        match self {
            SectionRole::Field => &[
                "__swift5_fieldmd",
                "swift5_fieldmd",
                ".sw5flmd",
                "__swift3_fieldmd",
                ".swift3_fieldmd",
            ],
            SectionRole::AssociatedType => &[
                "__swift5_assocty",
                "swift5_assocty",
                ".sw5asty",
                "__swift3_assocty",
                ".swift3_assocty",
            ],
            SectionRole::BuiltinType => &[
                "__swift5_builtin",
                "swift5_builtin",
                ".sw5bltn",
                "__swift3_builtin",
                ".swift3_builtin",
            ],
            SectionRole::TypeRef => &[
                "__swift5_typeref",
                "swift5_typeref",
                ".sw5tyrf",
                "__swift3_typeref",
                ".swift3_typeref",
            ],
            SectionRole::ReflectionStrings => &[
                "__swift5_reflstr",
                "swift5_reflstr",
                ".sw5rfst",
                "__swift3_reflstr",
                ".swift3_reflstr",
            ],
        }
    }

    /// Whether absence of this section aborts the dump.
    pub fn is_required(self) -> bool {
        !matches!(self, SectionRole::AssociatedType | SectionRole::BuiltinType)
    }

    /// Phrase used in missing-section diagnostics.
    pub fn description(self) -> &'static str {
        match self {
            SectionRole::Field => "a field reflection",
            SectionRole::AssociatedType => "an associated type",
            SectionRole::BuiltinType => "a builtin type",
            SectionRole::TypeRef => "an associated typeref",
            SectionRole::ReflectionStrings => "an associated reflection strings",
        }
    }

    /// Short label used in dumps.
    pub fn label(self) -> &'static str {
        match self {
            SectionRole::Field => "field",
            SectionRole::AssociatedType => "associated-type",
            SectionRole::BuiltinType => "builtin-type",
            SectionRole::TypeRef => "typeref",
            SectionRole::ReflectionStrings => "reflection-strings",
        }
    }
}

impl fmt::Display for SectionRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
