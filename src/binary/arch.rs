//! Mach-O architecture naming.
//!
//! Universal binaries identify their slices by `(cputype, cpusubtype)`. Users
//! name them with Darwin arch flags such as `x86_64` or `arm64e`; this table
//! maps between the two.

const CPU_ARCH_ABI64: u32 = 0x0100_0000;
const CPU_ARCH_ABI64_32: u32 = 0x0200_0000;
const CPU_SUBTYPE_MASK: u32 = 0xff00_0000; // capability bits

pub const CPU_TYPE_X86: u32 = 7;
pub const CPU_TYPE_X86_64: u32 = CPU_TYPE_X86 | CPU_ARCH_ABI64;
pub const CPU_TYPE_ARM: u32 = 12;
pub const CPU_TYPE_ARM64: u32 = CPU_TYPE_ARM | CPU_ARCH_ABI64;
pub const CPU_TYPE_ARM64_32: u32 = CPU_TYPE_ARM | CPU_ARCH_ABI64_32;
pub const CPU_TYPE_POWERPC: u32 = 18;
pub const CPU_TYPE_POWERPC64: u32 = CPU_TYPE_POWERPC | CPU_ARCH_ABI64;

/// (cputype, cpusubtype without capability bits, arch flag name)
const ARCH_FLAGS: &[(u32, u32, &str)] = &[
    (CPU_TYPE_X86, 3, "i386"),
    (CPU_TYPE_X86_64, 3, "x86_64"),
    (CPU_TYPE_X86_64, 8, "x86_64h"),
    (CPU_TYPE_ARM, 0, "arm"),
    (CPU_TYPE_ARM, 6, "armv6"),
    (CPU_TYPE_ARM, 9, "armv7"),
    (CPU_TYPE_ARM, 11, "armv7s"),
    (CPU_TYPE_ARM, 12, "armv7k"),
    (CPU_TYPE_ARM64, 0, "arm64"),
    (CPU_TYPE_ARM64, 1, "arm64"),
    (CPU_TYPE_ARM64, 2, "arm64e"),
    (CPU_TYPE_ARM64_32, 1, "arm64_32"),
    (CPU_TYPE_POWERPC, 0, "ppc"),
    (CPU_TYPE_POWERPC64, 0, "ppc64"),
];

/// Arch flag name for a Mach-O cpu type pair, if it is one we know.
pub fn arch_flag_name(cputype: u32, cpusubtype: u32) -> Option<&'static str> {
    let subtype = cpusubtype & !CPU_SUBTYPE_MASK;
    ARCH_FLAGS
        .iter()
        .find(|(t, s, _)| *t == cputype && *s == subtype)
        .map(|(_, _, name)| *name)
}

/// Name used for a slice in diagnostics, falling back to the raw cpu type.
pub fn describe_cpu(cputype: u32, cpusubtype: u32) -> String {
    match arch_flag_name(cputype, cpusubtype) {
        Some(name) => name.to_string(),
        None => format!(
            "cputype {:#x} subtype {:#x}",
            cputype,
            cpusubtype & !CPU_SUBTYPE_MASK
        ),
    }
}

/// Arch name for a parsed single-architecture object.
pub fn object_arch_name(arch: object::Architecture) -> String {
    match arch {
        object::Architecture::I386 => "i386".to_string(),
        object::Architecture::X86_64 => "x86_64".to_string(),
        object::Architecture::Arm => "arm".to_string(),
        object::Architecture::Aarch64 => "arm64".to_string(),
        object::Architecture::PowerPc => "ppc".to_string(),
        object::Architecture::PowerPc64 => "ppc64".to_string(),
        other => format!("{:?}", other).to_ascii_lowercase(),
    }
}
