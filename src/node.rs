use std::borrow::Cow;

use chrono::{DateTime, TimeZone, Utc};
use indexmap::IndexMap;

/// Prefix that marks a mapping key as an attribute of the current element.
pub const ATTRIBUTE_PREFIX: char = '@';

/// Reserved mapping key holding the text content of an element.
pub const VALUE_KEY: &str = "$value";

/// An insertion-ordered map from names to nodes.
///
/// Iteration order is emission order: attributes go on the start tag in the
/// order they were inserted, children follow in the same order.
pub type Mapping = IndexMap<String, Node, ahash::RandomState>;

/// A value in the input tree.
///
/// Every shape the serializer understands has its own variant, so rendering
/// is an exhaustive match. Values that have no XML rendering at all are
/// represented by [`Node::Opaque`] and produce no output.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Node {
    /// String content. Escaped on output.
    Text(String),
    /// Integer content.
    Integer(i64),
    /// Floating point content.
    Float(f64),
    /// `true` or `false`.
    Boolean(bool),
    /// A point in time, rendered as an RFC 3339 UTC timestamp with
    /// millisecond precision, i.e. `2024-01-02T03:04:05.000Z`.
    Timestamp(DateTime<Utc>),
    /// An explicit null, rendered as the text `null`.
    Null,
    /// An omitted value, rendered as empty text.
    #[default]
    Absent,
    /// A child element with its own attributes and children.
    Mapping(Mapping),
    /// Repeated sibling elements sharing one name.
    Sequence(Vec<Node>),
    /// Always rendered as a self-closing element, whatever the suppression
    /// settings are.
    ForcedEmpty,
    /// A value with no XML rendering (a callback or foreign handle in the
    /// source data). Always skipped.
    Opaque,
}

impl Node {
    /// Build a mapping node from `(name, node)` pairs.
    pub fn mapping<K, I>(entries: I) -> Self
    where
        K: Into<String>,
        I: IntoIterator<Item = (K, Node)>,
    {
        Node::Mapping(mapping(entries))
    }

    /// The textual form of a scalar node, without escaping.
    ///
    /// Returns `None` for nodes that have no text form: mappings, sequences,
    /// the forced-empty marker and opaque values.
    ///
    /// ```rust
    /// use mapxml::Node;
    ///
    /// assert_eq!(Node::from(1.0).text().unwrap(), "1");
    /// assert_eq!(Node::Null.text().unwrap(), "null");
    /// assert_eq!(Node::Absent.text().unwrap(), "");
    /// assert!(Node::ForcedEmpty.text().is_none());
    /// ```
    pub fn text(&self) -> Option<Cow<'_, str>> {
        crate::text::node_text(self)
    }

    /// Access the mapping, if this is a mapping node.
    pub fn as_mapping(&self) -> Option<&Mapping> {
        match self {
            Node::Mapping(mapping) => Some(mapping),
            _ => None,
        }
    }
}

/// Build a [`Mapping`] from `(name, node)` pairs.
///
/// ```rust
/// use mapxml::{mapping, Node};
///
/// let tree = mapping([("a", Node::from(1)), ("@b", Node::from("x"))]);
/// assert_eq!(tree.len(), 2);
/// ```
pub fn mapping<K, I>(entries: I) -> Mapping
where
    K: Into<String>,
    I: IntoIterator<Item = (K, Node)>,
{
    entries
        .into_iter()
        .map(|(key, node)| (key.into(), node))
        .collect()
}

impl<K: Into<String>> FromIterator<(K, Node)> for Node {
    fn from_iter<I: IntoIterator<Item = (K, Node)>>(iter: I) -> Self {
        Node::mapping(iter)
    }
}

impl From<Mapping> for Node {
    #[inline]
    fn from(mapping: Mapping) -> Self {
        Node::Mapping(mapping)
    }
}

impl From<&str> for Node {
    #[inline]
    fn from(s: &str) -> Self {
        Node::Text(s.to_string())
    }
}

impl From<String> for Node {
    #[inline]
    fn from(s: String) -> Self {
        Node::Text(s)
    }
}

impl From<Cow<'_, str>> for Node {
    #[inline]
    fn from(s: Cow<'_, str>) -> Self {
        Node::Text(s.into_owned())
    }
}

impl From<char> for Node {
    #[inline]
    fn from(c: char) -> Self {
        Node::Text(c.to_string())
    }
}

impl From<bool> for Node {
    #[inline]
    fn from(b: bool) -> Self {
        Node::Boolean(b)
    }
}

macro_rules! from_integer {
    ($($t:ty),*) => {
        $(
            impl From<$t> for Node {
                #[inline]
                fn from(i: $t) -> Self {
                    Node::Integer(i64::from(i))
                }
            }
        )*
    };
}

from_integer!(i8, i16, i32, i64, u8, u16, u32);

impl From<f32> for Node {
    #[inline]
    fn from(f: f32) -> Self {
        Node::Float(f64::from(f))
    }
}

impl From<f64> for Node {
    #[inline]
    fn from(f: f64) -> Self {
        Node::Float(f)
    }
}

impl<Tz: TimeZone> From<DateTime<Tz>> for Node {
    #[inline]
    fn from(dt: DateTime<Tz>) -> Self {
        Node::Timestamp(dt.with_timezone(&Utc))
    }
}

impl<T: Into<Node>> From<Vec<T>> for Node {
    fn from(items: Vec<T>) -> Self {
        Node::Sequence(items.into_iter().map(Into::into).collect())
    }
}

impl<T: Into<Node>> From<Option<T>> for Node {
    fn from(value: Option<T>) -> Self {
        match value {
            Some(value) => value.into(),
            None => Node::Absent,
        }
    }
}
