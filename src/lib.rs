#![forbid(unsafe_code)]

//! Build XML text from nested key/value trees.
//!
//! A tree is a [`Mapping`] from element names to [`Node`] values. Inside a
//! mapping, keys starting with `@` become attributes of the element, the key
//! `$value` holds its text content, and every other key is a child element.
//! A [`Node::Sequence`] repeats an element once per item.
//!
//! ```rust
//! use mapxml::{mapping, BuildOptions, Config, Declaration, Node, XmlBuilder};
//!
//! let tree = mapping([(
//!     "Reference",
//!     Node::mapping([
//!         ("@URI", Node::from("")),
//!         ("DigestValue", Node::from("amW4Bld=")),
//!         ("Transforms", Node::ForcedEmpty),
//!     ]),
//! )]);
//!
//! let builder = XmlBuilder::new(Config {
//!     suppress_empty_node: true,
//!     ..Default::default()
//! });
//!
//! assert_eq!(
//!     builder.build(&tree),
//!     "<Reference>\n <DigestValue>amW4Bld=</DigestValue>\n <Transforms/>\n</Reference>"
//! );
//!
//! let minified = builder.build_with(
//!     &tree,
//!     &BuildOptions {
//!         minify: Some(true),
//!         declaration: Some(Declaration::default()),
//!         ..Default::default()
//!     },
//! );
//! assert_eq!(
//!     minified,
//!     r#"<?xml version="1.0" encoding="UTF-8"?><Reference><DigestValue>amW4Bld=</DigestValue><Transforms/></Reference>"#
//! );
//! ```

mod builder;
mod encoding;
mod entity;
mod error;
#[cfg(feature = "serde")]
mod json;
mod node;
pub mod output;
#[cfg(feature = "proptest")]
pub mod proptest;
mod text;

pub use builder::XmlBuilder;
pub use error::Error;
#[cfg(feature = "serde")]
pub use json::{to_mapping, to_node};
pub use node::{mapping, Mapping, Node, ATTRIBUTE_PREFIX, VALUE_KEY};
pub use output::{BuildOptions, Config, Declaration};
