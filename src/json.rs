//! Build trees from serde data.
//!
//! This can be enabled with the `serde` feature. Any value that implements
//! [`serde::Serialize`] can be turned into a [`Mapping`]; object keys keep
//! their order.
//!
//! ```toml
//! [dependencies]
//! mapxml = { version = "0.1", features = ["serde"] }
//! ```
use serde::Serialize;
use serde_json::Value;

use crate::error::Error;
use crate::node::{Mapping, Node};

impl From<Value> for Node {
    fn from(value: Value) -> Self {
        match value {
            Value::Null => Node::Null,
            Value::Bool(b) => Node::Boolean(b),
            Value::Number(n) => match n.as_i64() {
                Some(i) => Node::Integer(i),
                // u64 beyond i64, and floats
                None => Node::Float(n.as_f64().unwrap_or(f64::NAN)),
            },
            Value::String(s) => Node::Text(s),
            Value::Array(items) => Node::Sequence(items.into_iter().map(Node::from).collect()),
            Value::Object(map) => Node::Mapping(
                map.into_iter()
                    .map(|(key, value)| (key, Node::from(value)))
                    .collect(),
            ),
        }
    }
}

/// Convert a serializable value into a node.
pub fn to_node<T: Serialize + ?Sized>(value: &T) -> Result<Node, Error> {
    Ok(serde_json::to_value(value)?.into())
}

/// Convert a serializable value into a tree that can be built.
///
/// The value must serialize to a map or struct.
///
/// ```rust
/// use mapxml::{to_mapping, XmlBuilder};
/// use serde::Serialize;
///
/// #[derive(Serialize)]
/// #[serde(rename_all = "PascalCase")]
/// struct KeyInfo {
///     key_name: String,
/// }
///
/// #[derive(Serialize)]
/// #[serde(rename_all = "PascalCase")]
/// struct Document {
///     key_info: KeyInfo,
/// }
///
/// let tree = to_mapping(&Document {
///     key_info: KeyInfo { key_name: "A7C2".to_string() },
/// })?;
/// let xml = XmlBuilder::default().build(&tree);
/// assert_eq!(xml, "<KeyInfo>\n <KeyName>A7C2</KeyName>\n</KeyInfo>");
/// # Ok::<(), mapxml::Error>(())
/// ```
pub fn to_mapping<T: Serialize + ?Sized>(value: &T) -> Result<Mapping, Error> {
    match to_node(value)? {
        Node::Mapping(mapping) => Ok(mapping),
        _ => Err(Error::RootNotMapping),
    }
}
