//! Human-readable section dump.

use super::{preview, split_strings, ReflectionDumper};
use crate::config::OutputConfig;
use crate::error::Result;
use crate::sections::{NamedSection, SectionBundle, SectionRole};
use std::io::Write;

const BYTES_PER_ROW: usize = 16;

pub struct TextDumper {
    config: OutputConfig,
}

impl TextDumper {
    pub fn new(config: OutputConfig) -> Self {
        Self { config }
    }

    fn write_section(&self, section: &NamedSection<'_>, out: &mut dyn Write) -> Result<()> {
        let Some(name) = section.name() else {
            writeln!(out, "{}: <absent>", section.role())?;
            return Ok(());
        };

        write!(
            out,
            "{}: {} size={:#x}",
            section.role(),
            name,
            section.len()
        )?;
        match section.file_offset() {
            Some(offset) => write!(out, " offset={:#x}", offset)?,
            None => write!(out, " offset=-")?,
        }
        writeln!(out, " address={:#x}", section.address())?;

        let shown = preview(section.bytes(), self.config.hex_preview_bytes);
        for (row, chunk) in shown.chunks(BYTES_PER_ROW).enumerate() {
            let words: Vec<String> = chunk.chunks(4).map(hex::encode).collect();
            writeln!(out, "  {:08x}  {}", row * BYTES_PER_ROW, words.join(" "))?;
        }
        if shown.len() < section.len() {
            writeln!(out, "  ... {} more bytes", section.len() - shown.len())?;
        }

        if section.role() == SectionRole::ReflectionStrings {
            let table = split_strings(section.bytes(), self.config.max_strings);
            writeln!(out, "  strings:")?;
            for s in &table.strings {
                writeln!(out, "    {:?}", s)?;
            }
            if table.omitted > 0 {
                writeln!(out, "    ... {} more", table.omitted)?;
            }
        }
        Ok(())
    }
}

impl ReflectionDumper for TextDumper {
    fn dump(&mut self, bundle: &SectionBundle<'_>, out: &mut dyn Write) -> Result<()> {
        writeln!(
            out,
            "{}: {} {}",
            bundle.display_name(),
            bundle.format(),
            bundle.arch_name()
        )?;
        for section in bundle.sections() {
            self.write_section(section, out)?;
        }
        Ok(())
    }
}
