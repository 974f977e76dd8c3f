//! JSON section dump.

use super::{preview, split_strings, ReflectionDumper};
use crate::config::OutputConfig;
use crate::error::Result;
use crate::sections::{NamedSection, SectionBundle, SectionRole};
use serde::Serialize;
use std::borrow::Cow;
use std::io::Write;

#[derive(Debug, Serialize)]
struct Report<'b> {
    binary: &'b str,
    format: &'b str,
    architecture: &'b str,
    sections: Vec<SectionReport<'b>>,
}

#[derive(Debug, Serialize)]
struct SectionReport<'b> {
    role: SectionRole,
    present: bool,
    name: Option<&'b str>,
    offset: Option<u64>,
    address: u64,
    size: usize,
    preview_hex: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    strings: Option<Vec<Cow<'b, str>>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    strings_omitted: Option<usize>,
}

pub struct JsonDumper {
    config: OutputConfig,
}

impl JsonDumper {
    pub fn new(config: OutputConfig) -> Self {
        Self { config }
    }

    fn section_report<'b>(&self, section: &NamedSection<'b>) -> SectionReport<'b> {
        let (strings, strings_omitted) = if section.role() == SectionRole::ReflectionStrings {
            let table = split_strings(section.bytes(), self.config.max_strings);
            (Some(table.strings), Some(table.omitted))
        } else {
            (None, None)
        };
        SectionReport {
            role: section.role(),
            present: section.is_present(),
            name: section.name(),
            offset: section.file_offset(),
            address: section.address(),
            size: section.len(),
            preview_hex: hex::encode(preview(section.bytes(), self.config.hex_preview_bytes)),
            strings,
            strings_omitted,
        }
    }
}

impl ReflectionDumper for JsonDumper {
    fn dump(&mut self, bundle: &SectionBundle<'_>, out: &mut dyn Write) -> Result<()> {
        let report = Report {
            binary: bundle.display_name(),
            format: bundle.format(),
            architecture: bundle.arch_name(),
            sections: bundle
                .sections()
                .into_iter()
                .map(|s| self.section_report(s))
                .collect(),
        };
        serde_json::to_writer_pretty(&mut *out, &report)
            .map_err(std::io::Error::from)?;
        writeln!(out)?;
        Ok(())
    }
}
