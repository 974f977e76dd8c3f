//! Reflection dump delegates.
//!
//! Decoding reflection records is the job of a [`ReflectionDumper`]. The
//! pipeline hands it a fully assembled [`SectionBundle`] and an output sink.
//! The built-in delegates describe where each section lives and preview its
//! contents; they do not interpret the records.

pub mod json;
pub mod text;

pub use json::JsonDumper;
pub use text::TextDumper;

use crate::config::{OutputConfig, OutputFormat};
use crate::error::Result;
use crate::sections::SectionBundle;
use std::borrow::Cow;
use std::io::Write;

/// Consumer of an assembled section bundle.
pub trait ReflectionDumper {
    /// Write a dump of `bundle` to `out`. Called once per invocation; the
    /// bundle's byte ranges stay valid for the duration of the call.
    fn dump(&mut self, bundle: &SectionBundle<'_>, out: &mut dyn Write) -> Result<()>;
}

/// The built-in dumper for the configured output format.
pub fn dumper_for(config: &OutputConfig) -> Box<dyn ReflectionDumper> {
    match config.format {
        OutputFormat::Text => Box::new(TextDumper::new(config.clone())),
        OutputFormat::Json => Box::new(JsonDumper::new(config.clone())),
    }
}

/// NUL-terminated strings from a reflection string table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StringTable<'a> {
    pub strings: Vec<Cow<'a, str>>,
    /// Non-empty strings beyond the listing limit.
    pub omitted: usize,
}

/// Split `bytes` on NUL, skipping padding, keeping at most `limit` strings.
pub fn split_strings(bytes: &[u8], limit: usize) -> StringTable<'_> {
    let mut strings = Vec::new();
    let mut omitted = 0;
    let mut rest = bytes;
    while !rest.is_empty() {
        let end = memchr::memchr(0, rest).unwrap_or(rest.len());
        let raw = &rest[..end];
        if !raw.is_empty() {
            if strings.len() < limit {
                strings.push(String::from_utf8_lossy(raw));
            } else {
                omitted += 1;
            }
        }
        rest = rest.get(end + 1..).unwrap_or(&[]);
    }
    StringTable { strings, omitted }
}

/// Leading `limit` bytes of a section.
pub(crate) fn preview(bytes: &[u8], limit: usize) -> &[u8] {
    &bytes[..bytes.len().min(limit)]
}
