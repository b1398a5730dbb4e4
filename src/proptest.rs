//! Proptest support
//!
//! Strategies that generate arbitrary trees, so you can test properties of
//! the XML you build from them.
//!
//! This can be enabled by adding the `proptest` feature to your `Cargo.toml`:
//!
//! ```toml
//! [dependencies]
//! mapxml = { version = "0.1", features = ["proptest"] }
//! ```
//!
//! See the [`proptest`](https://docs.rs/proptest/latest/proptest/)
//! documentation for more information.

use chrono::{TimeZone, Utc};
use proptest::prelude::*;

use crate::node::{Mapping, Node, VALUE_KEY};

const ELEMENT_NAMES: &[&str] = &["a", "b", "c", "d", "e"];
const ATTRIBUTE_NAMES: &[&str] = &["@q", "@r", "@s"];
const XML_STRING: &str = "[\u{0009}\u{000a}\u{0020}-\u{D7FF}\u{E000}-\u{FFFD}]*";

/// Generate text that only contains characters allowed in XML.
pub fn arb_text() -> impl Strategy<Value = String> {
    XML_STRING
}

fn arb_scalar() -> impl Strategy<Value = Node> {
    prop_oneof![
        arb_text().prop_map(Node::Text),
        any::<i64>().prop_map(Node::Integer),
        any::<f64>().prop_map(Node::Float),
        any::<bool>().prop_map(Node::Boolean),
        (0i64..4_102_444_800).prop_filter_map("valid timestamp", |secs| {
            Utc.timestamp_opt(secs, 0).single().map(Node::Timestamp)
        }),
        Just(Node::Null),
        Just(Node::Absent),
        Just(Node::ForcedEmpty),
    ]
}

fn arb_element(inner: BoxedStrategy<Node>) -> impl Strategy<Value = Node> {
    (
        prop::collection::vec((prop::sample::select(ATTRIBUTE_NAMES), arb_text()), 0..3),
        prop::option::of(arb_text()),
        prop::collection::vec((prop::sample::select(ELEMENT_NAMES), inner), 0..5),
    )
        .prop_map(|(attributes, value, children)| {
            let mut mapping = Mapping::default();
            for (name, text) in attributes {
                mapping.insert(name.to_string(), Node::Text(text));
            }
            if let Some(value) = value {
                mapping.insert(VALUE_KEY.to_string(), Node::Text(value));
            }
            for (name, node) in children {
                mapping.insert(name.to_string(), node);
            }
            Node::Mapping(mapping)
        })
}

/// Generate an arbitrary node: scalars, mappings with attributes and text
/// content, sequences and forced-empty markers.
pub fn arb_node() -> impl Strategy<Value = Node> {
    arb_scalar().prop_recursive(
        4,  // levels deep
        64, // maximum size of 64 nodes
        5,  // up to 5 items per collection
        |inner| {
            prop_oneof![
                prop::collection::vec(inner.clone(), 0..4).prop_map(Node::Sequence),
                arb_element(inner),
            ]
        },
    )
}

/// Generate a tree with a single root element.
///
/// Example:
///
/// ```notrust
/// use mapxml::proptest::arb_mapping;
/// use mapxml::XmlBuilder;
///
/// proptest! {
///   #[test]
///   fn test_builds(tree in arb_mapping()) {
///     let xml = XmlBuilder::default().build(&tree);
///     prop_assert!(xml.starts_with('<'));
///   }
/// }
/// ```
pub fn arb_mapping() -> impl Strategy<Value = Mapping> {
    (
        prop::sample::select(ELEMENT_NAMES),
        arb_element(arb_node().boxed()),
    )
        .prop_map(|(name, root)| {
            let mut mapping = Mapping::default();
            mapping.insert(name.to_string(), root);
            mapping
        })
}
