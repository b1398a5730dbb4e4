use std::borrow::Cow;

/// The five predefined XML entities, by the character they replace.
pub(crate) const PREDEFINED_ENTITIES: [(char, &str); 5] = [
    ('&', "&amp;"),
    ('<', "&lt;"),
    ('>', "&gt;"),
    ('"', "&quot;"),
    ('\'', "&apos;"),
];

fn entity_for(c: char) -> Option<&'static str> {
    PREDEFINED_ENTITIES
        .iter()
        .find(|(entity_char, _)| *entity_char == c)
        .map(|(_, entity)| *entity)
}

/// Replace each of `& < > " '` by its predefined entity.
///
/// Text without any of these characters is given back as is.
pub(crate) fn escape(content: Cow<str>) -> Cow<str> {
    if !content.chars().any(|c| entity_for(c).is_some()) {
        return content;
    }
    let mut result = String::with_capacity(content.len() + 8);
    for c in content.chars() {
        match entity_for(c) {
            Some(entity) => result.push_str(entity),
            None => result.push(c),
        }
    }
    result.into()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn unescape(content: &str) -> Option<String> {
        let mut result = String::new();
        let mut chars = content.chars();
        while let Some(c) = chars.next() {
            if c == '&' {
                let mut entity = String::new();
                for c in chars.by_ref() {
                    if c == ';' {
                        break;
                    }
                    entity.push(c);
                }
                let (c, _) = PREDEFINED_ENTITIES
                    .iter()
                    .find(|(_, e)| e[1..e.len() - 1] == entity)?;
                result.push(*c);
            } else {
                result.push(c);
            }
        }
        Some(result)
    }

    #[test]
    fn test_escape() {
        let text = "A & B";
        assert_eq!(escape(text.into()), "A &amp; B");
    }

    #[test]
    fn test_escape_multiple() {
        let text = "&'><\"";
        assert_eq!(escape(text.into()), "&amp;&apos;&gt;&lt;&quot;");
    }

    #[test]
    fn test_escape_no_entities() {
        let text = "hello";
        let result = escape(text.into());
        // this is the same slice
        assert!(std::ptr::eq(text, result.as_ref()));
    }

    #[test]
    fn test_escape_already_escaped() {
        assert_eq!(escape("&amp;".into()), "&amp;amp;");
    }

    #[test]
    fn test_unescape_recovers_text() {
        let text = "<a href=\"x\">Tom & Jerry's</a>";
        assert_eq!(unescape(&escape(text.into())).unwrap(), text);
    }
}
