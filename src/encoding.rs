use encoding_rs::Encoding;

use crate::error::Error;

/// Look up the encoding for a declaration label.
///
/// Labels follow the WHATWG encoding standard, so `iso-8859-1` and `us-ascii`
/// both resolve to `windows-1252`, which is a superset of them.
pub(crate) fn encoding(label: &str) -> Result<&'static Encoding, Error> {
    let encoding = Encoding::for_label(label.as_bytes())
        .ok_or_else(|| Error::UnknownEncoding(label.to_string()))?;
    // encoding_rs only encodes into encodings that are their own output
    // encoding; UTF-16 and replacement map to UTF-8 instead
    if encoding.output_encoding() != encoding {
        return Err(Error::UnsupportedEncoding(encoding.name()));
    }
    Ok(encoding)
}

/// Encode text. Characters the encoding cannot represent become numeric
/// character references.
pub(crate) fn encode(text: &str, encoding: &'static Encoding) -> Vec<u8> {
    let (bytes, _, _) = encoding.encode(text);
    bytes.into_owned()
}
