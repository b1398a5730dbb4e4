//! Configuration of XML output.
//!
//! A [`Config`] is the base configuration of a builder; [`BuildOptions`]
//! override it for a single build.
mod format;
mod parameters;
mod xml_serializer;

pub(crate) use format::Format;
pub use parameters::{BuildOptions, Config, Declaration};
pub(crate) use xml_serializer::XmlSerializer;
