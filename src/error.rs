use std::fmt;
use std::path::PathBuf;

use crate::token::TokenizeError;

/// Everything that can cause [`crate::parse`]/[`crate::parse_slice`] to fail.
///
/// There is no partial-`Asset` variant: a partially built graph is never
/// returned to the caller, whether the failure happened during framing,
/// tokenizing, walking, or resolving references.
#[derive(Debug)]
pub enum ParseError {
    /// The given path could not be opened or read.
    Io {
        /// The path that could not be read.
        path: PathBuf,
        /// The underlying I/O error.
        source: std::io::Error,
    },
    /// The input was empty or smaller than the minimum valid container size.
    TooSmall,
    /// The input exceeded `ParseOptions::max_input_size`.
    TooLarge {
        /// The size of the input, in bytes.
        size: usize,
        /// The configured limit.
        limit: usize,
    },
    /// GLB container framing failed (bad magic, version, or chunk layout).
    Container(crate::container::ContainerError),
    /// The JSON tokenizer rejected the input.
    Tokenize(TokenizeError),
    /// The schema walker encountered a value of the wrong shape, or a
    /// required field was missing.
    Schema {
        /// Where in the document the problem was found.
        path: gltf_json::Path,
        /// What went wrong.
        message: String,
    },
    /// A reference (index) did not resolve during the fix-up pass.
    Reference {
        /// Where in the document the bad reference was found.
        path: gltf_json::Path,
        /// What went wrong.
        error: gltf_json::validation::Error,
    },
    /// The asset's declared `version` is missing or below `2.0`.
    UnsupportedVersion {
        /// The version string found, if any.
        found: Option<String>,
    },
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            ParseError::Io { path, source } => {
                write!(f, "failed to read {}: {}", path.display(), source)
            }
            ParseError::TooSmall => write!(f, "input is smaller than the minimum valid size"),
            ParseError::TooLarge { size, limit } => {
                write!(f, "input of {size} bytes exceeds the {limit} byte limit")
            }
            ParseError::Container(e) => write!(f, "{e}"),
            ParseError::Tokenize(e) => write!(f, "{e}"),
            ParseError::Schema { path, message } => {
                write!(f, "{}: {}", path.as_str(), message)
            }
            ParseError::Reference { path, error } => {
                write!(f, "{}: {}", path.as_str(), error)
            }
            ParseError::UnsupportedVersion { found } => match found {
                Some(version) => write!(f, "unsupported glTF version {version:?}"),
                None => write!(f, "missing asset.version"),
            },
        }
    }
}

impl std::error::Error for ParseError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ParseError::Io { source, .. } => Some(source),
            ParseError::Container(e) => Some(e),
            ParseError::Tokenize(e) => Some(e),
            _ => None,
        }
    }
}

impl From<crate::container::ContainerError> for ParseError {
    fn from(e: crate::container::ContainerError) -> Self {
        ParseError::Container(e)
    }
}

impl From<TokenizeError> for ParseError {
    fn from(e: TokenizeError) -> Self {
        ParseError::Tokenize(e)
    }
}
