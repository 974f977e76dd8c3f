//! Locate reflection metadata sections in object files and universal
//! binaries, and hand them to a dumper.
//!
//! The pipeline is linear: [`binary::BinaryContainer::open`] maps the input,
//! [`binary::slice::select_slice`] picks the object to inspect,
//! [`sections::SectionBundle::assemble`] finds the five reflection sections
//! and a [`dump::ReflectionDumper`] writes them out. [`pipeline::run`] ties
//! the steps together.

pub mod binary;
pub mod cli;
pub mod config;
pub mod dump;
pub mod error;
pub mod io;
pub mod logging;
pub mod pipeline;
pub mod sections;

pub use error::{DumpError, Result};
