use std::borrow::Cow;

use chrono::SecondsFormat;

use crate::node::Node;

pub(crate) fn node_text(node: &Node) -> Option<Cow<'_, str>> {
    let text = match node {
        Node::Text(s) => Cow::Borrowed(s.as_str()),
        Node::Integer(i) => i.to_string().into(),
        Node::Float(f) => float_text(*f).into(),
        Node::Boolean(b) => Cow::Borrowed(if *b { "true" } else { "false" }),
        Node::Timestamp(dt) => dt.to_rfc3339_opts(SecondsFormat::Millis, true).into(),
        Node::Null => Cow::Borrowed("null"),
        Node::Absent => Cow::Borrowed(""),
        Node::Mapping(_) | Node::Sequence(_) | Node::ForcedEmpty | Node::Opaque => return None,
    };
    Some(text)
}

// integral values print without a fraction, and negative zero prints as 0.
// Magnitudes from 1e21 up and below 1e-6 use exponent form, i.e. `1e+21`.
fn float_text(f: f64) -> String {
    if f.is_nan() {
        "NaN".to_string()
    } else if f.is_infinite() {
        if f > 0.0 {
            "Infinity".to_string()
        } else {
            "-Infinity".to_string()
        }
    } else if f == 0.0 {
        "0".to_string()
    } else if f.abs() >= 1e21 || f.abs() < 1e-6 {
        exponent_text(f)
    } else {
        f.to_string()
    }
}

fn exponent_text(f: f64) -> String {
    let text = format!("{:e}", f);
    match text.split_once('e') {
        Some((mantissa, exponent)) if !exponent.starts_with('-') => {
            format!("{}e+{}", mantissa, exponent)
        }
        _ => text,
    }
}
