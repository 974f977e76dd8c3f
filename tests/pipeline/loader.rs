//! Binary loading: recognized containers and load failures.

use reflection_dump::binary::{BinaryContainer, ContainerKind};
use reflection_dump::io::IOLimits;
use reflection_dump::DumpError;

use crate::common::fixtures::*;
use crate::common::{create_temp_file, load_container};

fn open_err(bytes: &[u8]) -> DumpError {
    let file = create_temp_file(bytes);
    BinaryContainer::open(file.path(), &IOLimits::default())
        .err()
        .unwrap()
}

#[test]
fn test_elf_is_plain_object() {
    let (_file, container) = load_container(&elf_binary(Naming::ElfCurrent, "t", &[]));
    assert_eq!(container.kind(), ContainerKind::Object);
    assert!(!container.bytes().is_empty());
}

#[test]
fn test_coff_is_plain_object() {
    let (_file, container) = load_container(&coff_binary("t", &[]));
    assert_eq!(container.kind(), ContainerKind::Object);
}

#[test]
fn test_fat32_is_universal() {
    let bytes = fat_binary(&x86_arm_slices(Naming::MachOCurrent));
    let (_file, container) = load_container(&bytes);
    assert_eq!(container.kind(), ContainerKind::Universal32);
}

#[test]
fn test_fat64_is_universal() {
    let bytes = fat64_binary(&x86_arm_slices(Naming::MachOCurrent));
    let (_file, container) = load_container(&bytes);
    assert_eq!(container.kind(), ContainerKind::Universal64);
}

#[test]
fn test_display_name_is_path() {
    let (file, container) = load_container(&elf_binary(Naming::ElfCurrent, "t", &[]));
    assert_eq!(container.display_name(), file.path().display().to_string());
}

#[test]
fn test_nonexistent_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("does-not-exist");
    let err = BinaryContainer::open(&path, &IOLimits::default())
        .err()
        .unwrap();
    match err {
        DumpError::Load { path: p, message } => {
            assert!(p.ends_with("does-not-exist"));
            assert!(message.starts_with("cannot open file"), "{message}");
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn test_unrecognized_format() {
    let err = open_err(b"this is a text file, not an object file\n");
    assert!(matches!(err, DumpError::Load { .. }));
    assert!(err.to_string().contains("unrecognized binary format"));
}

#[test]
fn test_empty_file() {
    let err = open_err(b"");
    assert!(err.to_string().contains("file is empty"));
}

#[test]
fn test_truncated_object() {
    let full = elf_binary(Naming::ElfCurrent, "t", &[]);
    let err = open_err(&full[..40]);
    assert!(matches!(err, DumpError::Load { .. }), "{err}");
    assert!(err.to_string().contains("malformed object file"), "{err}");
}

#[test]
fn test_size_limit() {
    let bytes = elf_binary(Naming::ElfCurrent, "t", &[]);
    let file = create_temp_file(&bytes);
    let limits = IOLimits { max_file_size: 16 };
    let err = BinaryContainer::open(file.path(), &limits).err().unwrap();
    assert!(matches!(err, DumpError::Load { .. }));
    assert!(err.to_string().contains("over the 16 byte input limit"));
}
