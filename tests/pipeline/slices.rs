//! Architecture slice selection.

use object::Architecture;
use reflection_dump::sections::{locate_section, SectionRole};
use reflection_dump::DumpError;

use crate::common::fixtures::*;
use crate::common::load_container;

#[test]
fn test_single_object_ignores_requested_arch() {
    let (_file, container) = load_container(&elf_binary(Naming::ElfCurrent, "t", &[]));
    for arch in ["x86_64", "arm64", "not-an-architecture", ""] {
        let slice = container.select_slice(arch).unwrap();
        assert_eq!(slice.offset(), 0);
        assert_eq!(slice.data().len(), container.bytes().len());
        assert_eq!(slice.arch_name(), "x86_64");
        assert_eq!(slice.format_name(), "ELF");
    }
}

#[test]
fn test_single_macho_ignores_requested_arch() {
    let bytes = macho_binary(Architecture::Aarch64, Naming::MachOCurrent, "m", &[]);
    let (_file, container) = load_container(&bytes);
    let slice = container.select_slice("x86_64").unwrap();
    assert_eq!(slice.arch_name(), "arm64");
    assert_eq!(slice.format_name(), "Mach-O");
}

#[test]
fn test_fat_selects_requested_slice() {
    let slices = x86_arm_slices(Naming::MachOCurrent);
    let offsets = fat_slice_offsets(&slices, false);
    let (_file, container) = load_container(&fat_binary(&slices));

    let x86 = container.select_slice("x86_64").unwrap();
    assert_eq!(x86.arch_name(), "x86_64");
    assert_eq!(x86.offset(), offsets[0] as u64);
    assert_eq!(x86.data(), &slices[0].data[..]);
    let field = locate_section(&x86, SectionRole::Field).unwrap();
    assert_eq!(field.bytes(), &contents(SectionRole::Field, "x86")[..]);

    let arm = container.select_slice("arm64").unwrap();
    assert_eq!(arm.arch_name(), "arm64");
    assert_eq!(arm.offset(), offsets[1] as u64);
    let field = locate_section(&arm, SectionRole::Field).unwrap();
    assert_eq!(field.bytes(), &contents(SectionRole::Field, "arm")[..]);
}

#[test]
fn test_fat64_selects_requested_slice() {
    let slices = x86_arm_slices(Naming::MachOCurrent);
    let (_file, container) = load_container(&fat64_binary(&slices));
    let arm = container.select_slice("arm64").unwrap();
    let strings = locate_section(&arm, SectionRole::ReflectionStrings);
    let expected = contents(SectionRole::ReflectionStrings, "arm");
    assert_eq!(strings.unwrap().bytes(), &expected[..]);
}

#[test]
fn test_fat_arm64_v8_subtype_selected_as_arm64() {
    // CPU_SUBTYPE_ARM64_V8 rather than ARM64_ALL
    let slices = vec![FatSlice {
        cputype: CPU_TYPE_ARM64,
        cpusubtype: 1,
        data: macho_binary(Architecture::Aarch64, Naming::MachOCurrent, "v8", &[]),
    }];
    let (_file, container) = load_container(&fat_binary(&slices));
    let slice = container.select_slice("arm64").unwrap();
    assert_eq!(slice.arch_name(), "arm64");
    let field = locate_section(&slice, SectionRole::Field).unwrap();
    assert_eq!(field.bytes(), &contents(SectionRole::Field, "v8")[..]);
}

#[test]
fn test_fat_missing_arch() {
    let bytes = fat_binary(&x86_arm_slices(Naming::MachOCurrent));
    let (_file, container) = load_container(&bytes);
    let err = container.select_slice("ppc64").err().unwrap();
    assert!(err.to_string().contains("'ppc64'"), "{err}");
    match err {
        DumpError::ArchitectureNotFound { available, .. } => {
            assert_eq!(available, vec!["x86_64", "arm64"]);
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn test_fat_arch_names_are_exact() {
    let bytes = fat_binary(&x86_arm_slices(Naming::MachOCurrent));
    let (_file, container) = load_container(&bytes);
    // No prefix or case-insensitive matching.
    assert!(container.select_slice("x86").is_err());
    assert!(container.select_slice("ARM64").is_err());
    assert!(container.select_slice("arm64e").is_err());
}

#[test]
fn test_fat_slice_out_of_bounds() {
    let slices = x86_arm_slices(Naming::MachOCurrent);
    let mut bytes = fat_binary(&slices);
    let offsets = fat_slice_offsets(&slices, false);
    // Drop the tail of the arm64 slice.
    bytes.truncate(offsets[1] + 8);
    let (_file, container) = load_container(&bytes);

    assert!(container.select_slice("x86_64").is_ok());
    let err = container.select_slice("arm64").err().unwrap();
    assert!(matches!(err, DumpError::Load { .. }));
    assert!(err.to_string().contains("out of bounds"), "{err}");
}

#[test]
fn test_fat_slice_not_an_object() {
    let slices = vec![FatSlice {
        cputype: CPU_TYPE_X86_64,
        cpusubtype: CPU_SUBTYPE_X86_64_ALL,
        data: vec![0xab; 64],
    }];
    let (_file, container) = load_container(&fat_binary(&slices));
    let err = container.select_slice("x86_64").err().unwrap();
    assert!(err.to_string().contains("not a valid object file"), "{err}");
}
