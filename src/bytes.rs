//! Byte/string utilities.
//!
//! Rust's `Vec<u8>`/`&[u8]` already own their allocations and bounds-check
//! every access, so there is no need for custom `allocate`/`free`/
//! `reallocate`/bounded-`compare` primitives. This module keeps only the
//! operations that still do something: reading a whole file with a size
//! cap, and the byte search the tokenizer and walker use to scan for
//! delimiters.

use std::fs;
use std::path::Path;

use crate::error::ParseError;

/// Reads the entire contents of `path` into memory, failing if the file is
/// empty or exceeds `max_size`.
pub fn read_file(path: &Path, max_size: usize) -> Result<Vec<u8>, ParseError> {
    let bytes = fs::read(path).map_err(|source| ParseError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    if bytes.is_empty() {
        return Err(ParseError::TooSmall);
    }
    if bytes.len() > max_size {
        return Err(ParseError::TooLarge {
            size: bytes.len(),
            limit: max_size,
        });
    }
    Ok(bytes)
}

/// Returns `true` if `haystack` begins with `needle`.
pub fn starts_with(haystack: &[u8], needle: &[u8]) -> bool {
    haystack.len() >= needle.len() && &haystack[..needle.len()] == needle
}

/// Returns the index of the first occurrence of `byte` in `haystack`, if
/// any.
pub fn find_byte(haystack: &[u8], byte: u8) -> Option<usize> {
    haystack.iter().position(|&b| b == byte)
}
