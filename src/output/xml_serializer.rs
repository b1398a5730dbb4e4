use crate::entity::escape;
use crate::node::{Mapping, Node, ATTRIBUTE_PREFIX, VALUE_KEY};

use super::Format;

// The entries of one element, split into attributes (marker stripped) and
// everything else. Text content stays among the properties under `$value`.
struct Content<'a> {
    attributes: Vec<(&'a str, &'a Node)>,
    properties: Vec<(&'a str, &'a Node)>,
}

impl<'a> Content<'a> {
    fn from_mapping(mapping: &'a Mapping) -> Self {
        let mut attributes = Vec::new();
        let mut properties = Vec::new();
        for (key, node) in mapping {
            match key.strip_prefix(ATTRIBUTE_PREFIX) {
                Some(attribute) => attributes.push((attribute, node)),
                None => properties.push((key.as_str(), node)),
            }
        }
        Content {
            attributes,
            properties,
        }
    }

    fn from_text(node: &'a Node) -> Self {
        Content {
            attributes: Vec::new(),
            properties: vec![(VALUE_KEY, node)],
        }
    }

    fn has_children(&self) -> bool {
        self.properties.iter().any(|(key, _)| *key != VALUE_KEY)
    }

    fn has_value(&self) -> bool {
        self.properties.iter().any(|(key, node)| {
            *key == VALUE_KEY && node.text().map_or(false, |text| !text.is_empty())
        })
    }
}

pub(crate) struct XmlSerializer<'a> {
    format: &'a Format,
}

impl<'a> XmlSerializer<'a> {
    pub(crate) fn new(format: &'a Format) -> Self {
        Self { format }
    }

    /// Render every entry of `mapping` as an element at `level`.
    pub(crate) fn serialize(&self, out: &mut String, mapping: &Mapping, level: usize) {
        for (name, node) in mapping {
            self.serialize_element(out, name, node, level);
        }
    }

    fn serialize_element(&self, out: &mut String, name: &str, node: &Node, level: usize) {
        match node {
            Node::Mapping(mapping) => {
                self.serialize_content(out, name, Content::from_mapping(mapping), level)
            }
            // an empty sequence is still one element, with empty text
            Node::Sequence(items) if items.is_empty() => {
                self.serialize_content(out, name, Content::from_text(&Node::Absent), level)
            }
            Node::Sequence(items) => {
                for item in items {
                    self.serialize_element(out, name, item, level);
                }
            }
            Node::ForcedEmpty => {
                self.format.indent(out, level);
                self.empty_tag(out, name, &[]);
            }
            Node::Opaque => {}
            Node::Text(_)
            | Node::Integer(_)
            | Node::Float(_)
            | Node::Boolean(_)
            | Node::Timestamp(_)
            | Node::Null
            | Node::Absent => self.serialize_content(out, name, Content::from_text(node), level),
        }
    }

    fn serialize_content(&self, out: &mut String, name: &str, content: Content, level: usize) {
        let has_children = content.has_children();
        let paired = has_children || content.has_value() || !self.format.suppress_empty_node;

        self.format.indent(out, level);
        if paired {
            self.start_tag(out, name, &content.attributes);
            if has_children {
                out.push_str(self.format.newline);
            }
        } else {
            self.empty_tag(out, name, &content.attributes);
        }

        for (key, node) in &content.properties {
            self.serialize_property(out, key, node, level + 1);
        }

        if paired {
            if has_children {
                self.format.indent(out, level);
            }
            self.end_tag(out, name);
        }
    }

    fn serialize_property(&self, out: &mut String, name: &str, node: &Node, level: usize) {
        if name == VALUE_KEY {
            // text content goes inline, without a tag of its own
            if let Some(text) = node.text() {
                out.push_str(&escape(text));
            }
            return;
        }
        match node {
            Node::ForcedEmpty => {
                self.format.indent(out, level);
                self.empty_tag(out, name, &[]);
            }
            Node::Text(_)
            | Node::Integer(_)
            | Node::Float(_)
            | Node::Boolean(_)
            | Node::Timestamp(_)
            | Node::Null => {
                if let Some(text) = node.text() {
                    self.format.indent(out, level);
                    self.tag_pair(out, name, &escape(text));
                }
            }
            Node::Absent | Node::Opaque => {}
            Node::Sequence(items) if items.is_empty() => {
                self.format.indent(out, level);
                self.tag_pair(out, name, "");
            }
            Node::Sequence(items) => {
                for item in items {
                    self.serialize_element(out, name, item, level);
                }
            }
            Node::Mapping(_) => self.serialize_element(out, name, node, level),
        }
    }

    fn name(&self, out: &mut String, name: &str) {
        out.push_str(&self.format.prefix);
        out.push_str(name);
    }

    fn attributes(&self, out: &mut String, attributes: &[(&str, &Node)]) {
        for (name, node) in attributes {
            let text = match node.text() {
                Some(text) => text,
                None => continue,
            };
            if text.is_empty() && self.format.drops_empty_attributes() {
                continue;
            }
            out.push(' ');
            out.push_str(name);
            out.push_str("=\"");
            out.push_str(&escape(text));
            out.push('"');
        }
    }

    fn start_tag(&self, out: &mut String, name: &str, attributes: &[(&str, &Node)]) {
        out.push('<');
        self.name(out, name);
        self.attributes(out, attributes);
        out.push('>');
    }

    fn end_tag(&self, out: &mut String, name: &str) {
        out.push_str("</");
        self.name(out, name);
        out.push('>');
        out.push_str(self.format.newline);
    }

    fn empty_tag(&self, out: &mut String, name: &str, attributes: &[(&str, &Node)]) {
        out.push('<');
        self.name(out, name);
        self.attributes(out, attributes);
        out.push_str("/>");
        out.push_str(self.format.newline);
    }

    fn tag_pair(&self, out: &mut String, name: &str, text: &str) {
        out.push('<');
        self.name(out, name);
        out.push('>');
        out.push_str(text);
        self.end_tag(out, name);
    }
}
