//! The dump pipeline: load, select a slice, assemble sections, dump.

use crate::binary::BinaryContainer;
use crate::config::DumpConfig;
use crate::dump::ReflectionDumper;
use crate::error::Result;
use crate::sections::SectionBundle;
use std::io::Write;
use std::path::PathBuf;
use tracing::{debug, debug_span};

/// What to dump.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DumpRequest {
    pub binary_path: PathBuf,
    /// Only consulted for universal binaries.
    pub arch: String,
}

/// Run one dump. The container is dropped, and its mapping released, on
/// every return path.
pub fn run(
    request: &DumpRequest,
    config: &DumpConfig,
    dumper: &mut dyn ReflectionDumper,
    out: &mut dyn Write,
) -> Result<()> {
    let _span = debug_span!(
        "dump_reflection_sections",
        path = %request.binary_path.display(),
        arch = %request.arch
    )
    .entered();

    let container = BinaryContainer::open(&request.binary_path, &config.io.limits())?;
    let slice = container.select_slice(&request.arch)?;
    let bundle = SectionBundle::assemble(&slice, container.display_name())?;

    debug!(
        format = bundle.format(),
        arch = bundle.arch_name(),
        "Handing section bundle to dumper"
    );
    dumper.dump(&bundle, out)?;
    out.flush()?;
    Ok(())
}
