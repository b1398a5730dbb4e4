use super::Config;

const NEWLINE: &str = "\n";
const SPACING_UNIT: usize = 1;

/// Formatting in effect for one build.
///
/// Resolved once from the merged [`Config`] and passed down the recursion;
/// it never changes while rendering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Format {
    pub(crate) newline: &'static str,
    pub(crate) spacing: usize,
    pub(crate) prefix: String,
    pub(crate) suppress_empty_node: bool,
    pub(crate) suppress_empty_attribute: bool,
}

impl Format {
    pub(crate) fn new(config: &Config) -> Self {
        let prefix = match config.namespace_prefix.as_deref() {
            Some(prefix) if !prefix.is_empty() => format!("{}:", prefix),
            _ => String::new(),
        };
        Format {
            newline: if config.minify { "" } else { NEWLINE },
            spacing: if config.minify { 0 } else { SPACING_UNIT },
            prefix,
            suppress_empty_node: config.suppress_empty_node,
            suppress_empty_attribute: config.suppress_empty_attribute,
        }
    }

    pub(crate) fn indent(&self, out: &mut String, level: usize) {
        out.extend(std::iter::repeat(' ').take(level * self.spacing));
    }

    pub(crate) fn drops_empty_attributes(&self) -> bool {
        self.suppress_empty_node && self.suppress_empty_attribute
    }
}
