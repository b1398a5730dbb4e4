use std::fmt;

/// Errors that can occur when producing encoded output.
///
/// Building a string never fails; these only come up when encoding the
/// result, writing it out, or converting foreign data into a tree.
#[derive(Debug)]
pub enum Error {
    /// The declaration names an encoding label that is not known.
    UnknownEncoding(String),
    /// The encoding is known but output cannot be produced in it (UTF-16 and
    /// the replacement encoding).
    UnsupportedEncoding(&'static str),
    /// An I/O error while writing output.
    Io(std::io::Error),
    /// The value could not be converted to JSON data.
    #[cfg(feature = "serde")]
    Json(serde_json::Error),
    /// The value does not serialize to a mapping, so it cannot be a
    /// document root.
    #[cfg(feature = "serde")]
    RootNotMapping,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::UnknownEncoding(label) => write!(f, "unknown encoding: {}", label),
            Error::UnsupportedEncoding(name) => {
                write!(f, "cannot produce output in encoding {}", name)
            }
            Error::Io(e) => write!(f, "I/O error: {}", e),
            #[cfg(feature = "serde")]
            Error::Json(e) => write!(f, "JSON conversion error: {}", e),
            #[cfg(feature = "serde")]
            Error::RootNotMapping => write!(f, "root value is not a mapping"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Io(e) => Some(e),
            #[cfg(feature = "serde")]
            Error::Json(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for Error {
    #[inline]
    fn from(e: std::io::Error) -> Self {
        Error::Io(e)
    }
}

#[cfg(feature = "serde")]
impl From<serde_json::Error> for Error {
    #[inline]
    fn from(e: serde_json::Error) -> Self {
        Error::Json(e)
    }
}
