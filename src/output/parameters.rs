/// Base configuration of an [`XmlBuilder`](crate::XmlBuilder).
///
/// ```rust
/// use mapxml::{Config, XmlBuilder};
///
/// let builder = XmlBuilder::new(Config {
///     minify: true,
///     suppress_empty_node: true,
///     ..Default::default()
/// });
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Emit no line feeds and no indentation.
    ///
    /// When false, a line feed follows every end tag and each nesting level
    /// is indented by a single space.
    pub minify: bool,
    /// Render elements without children and without text as `<x/>` rather
    /// than `<x></x>`.
    pub suppress_empty_node: bool,
    /// Together with `suppress_empty_node`, drop attributes whose value is
    /// empty or absent. Set to false to always emit them as `name=""`.
    ///
    /// Defaults to true.
    pub suppress_empty_attribute: bool,
    /// A prefix put in front of every tag name, separated by a colon. An empty
    /// prefix is the same as none.
    pub namespace_prefix: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            minify: false,
            suppress_empty_node: false,
            suppress_empty_attribute: true,
            namespace_prefix: None,
        }
    }
}

impl Config {
    /// This configuration with the overrides in `options` applied.
    pub fn merged(&self, options: &BuildOptions) -> Config {
        Config {
            minify: options.minify.unwrap_or(self.minify),
            suppress_empty_node: options
                .suppress_empty_node
                .unwrap_or(self.suppress_empty_node),
            suppress_empty_attribute: options
                .suppress_empty_attribute
                .unwrap_or(self.suppress_empty_attribute),
            namespace_prefix: options
                .namespace_prefix
                .clone()
                .or_else(|| self.namespace_prefix.clone()),
        }
    }
}

/// The XML declaration, i.e. `<?xml version="1.0" encoding="UTF-8"?>`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Declaration {
    /// The XML version.
    pub version: String,
    /// The encoding label. This is also the encoding used by
    /// [`XmlBuilder::build_encoded`](crate::XmlBuilder::build_encoded).
    pub encoding: String,
}

impl Declaration {
    /// Create a declaration.
    pub fn new(version: impl Into<String>, encoding: impl Into<String>) -> Self {
        Declaration {
            version: version.into(),
            encoding: encoding.into(),
        }
    }
}

impl Default for Declaration {
    fn default() -> Self {
        Declaration::new("1.0", "UTF-8")
    }
}

/// Options for a single build.
///
/// Each set field overrides the builder's [`Config`] for this call only.
/// `namespace_prefix: Some(String::new())` removes a configured prefix.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct BuildOptions {
    /// Overrides [`Config::minify`].
    pub minify: Option<bool>,
    /// Overrides [`Config::suppress_empty_node`].
    pub suppress_empty_node: Option<bool>,
    /// Overrides [`Config::suppress_empty_attribute`].
    pub suppress_empty_attribute: Option<bool>,
    /// Overrides [`Config::namespace_prefix`].
    pub namespace_prefix: Option<String>,
    /// Put an XML declaration in front of the output.
    pub declaration: Option<Declaration>,
}
