use std::io;

use encoding_rs::UTF_8;

use crate::encoding::{encode, encoding};
use crate::error::Error;
use crate::node::Mapping;
use crate::output::{BuildOptions, Config, Format, XmlSerializer};

/// Turns a [`Mapping`] into XML text.
///
/// The builder holds a base [`Config`]. Every build resolves its own
/// formatting from that configuration and the [`BuildOptions`] it is given,
/// so a builder can be shared freely and per-call options never affect other
/// calls.
///
/// ```rust
/// use mapxml::{mapping, Node, XmlBuilder};
///
/// let tree = mapping([(
///     "Signature",
///     Node::mapping([
///         ("@xmlns", Node::from("http://x")),
///         ("SignatureValue", Node::from("abc==")),
///     ]),
/// )]);
///
/// let xml = XmlBuilder::default().build(&tree);
/// assert_eq!(
///     xml,
///     "<Signature xmlns=\"http://x\">\n <SignatureValue>abc==</SignatureValue>\n</Signature>"
/// );
/// ```
#[derive(Debug, Clone, Default)]
pub struct XmlBuilder {
    config: Config,
}

impl XmlBuilder {
    /// Create a builder with a base configuration.
    pub fn new(config: Config) -> Self {
        XmlBuilder { config }
    }

    /// The base configuration.
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Build XML using the base configuration.
    pub fn build(&self, tree: &Mapping) -> String {
        self.build_with(tree, &BuildOptions::default())
    }

    /// Build XML with per-call options.
    ///
    /// Leading and trailing whitespace is trimmed from the rendered tree. If
    /// a declaration is requested it comes first, followed by a line feed
    /// unless output is minified.
    ///
    /// This never fails: nodes without an XML rendering are left out.
    pub fn build_with(&self, tree: &Mapping, options: &BuildOptions) -> String {
        let format = Format::new(&self.config.merged(options));
        let mut out = String::new();
        XmlSerializer::new(&format).serialize(&mut out, tree, 0);
        let root = out.trim();

        match &options.declaration {
            Some(declaration) => format!(
                "<?xml version=\"{}\" encoding=\"{}\"?>{}{}",
                declaration.version, declaration.encoding, format.newline, root
            ),
            None => root.to_string(),
        }
    }

    /// Build XML as bytes in the encoding named by the declaration.
    ///
    /// Without a declaration the output is UTF-8. Characters the encoding
    /// cannot represent are written as numeric character references.
    pub fn build_encoded(&self, tree: &Mapping, options: &BuildOptions) -> Result<Vec<u8>, Error> {
        let encoding = match &options.declaration {
            Some(declaration) => encoding(&declaration.encoding)?,
            None => UTF_8,
        };
        Ok(encode(&self.build_with(tree, options), encoding))
    }

    /// Write encoded XML to `w`. See [`XmlBuilder::build_encoded`].
    pub fn write<W: io::Write>(
        &self,
        tree: &Mapping,
        options: &BuildOptions,
        w: &mut W,
    ) -> Result<(), Error> {
        let data = self.build_encoded(tree, options)?;
        w.write_all(&data)?;
        Ok(())
    }
}
