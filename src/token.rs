//! JSON tokenizer.
//!
//! A flat, jsmn-style tokenizer: it never builds a DOM, only a `Vec<Token>`
//! of `(kind, start, end, size)` records naming byte ranges in the input.
//! The schema walker drives this token stream directly.

use std::fmt;

/// The kind of a token in the flat token stream.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum TokenKind {
    /// A JSON object `{ ... }`.
    Object,
    /// A JSON array `[ ... ]`.
    Array,
    /// A JSON string, including object keys.
    String,
    /// A bare number, `true`, `false`, or `null`.
    Primitive,
}

/// One entry in the flat token stream produced by [`tokenize`].
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Token {
    /// What kind of value this token describes.
    pub kind: TokenKind,
    /// Byte offset of the first byte of this token's content. For strings
    /// this is the byte after the opening quote.
    pub start: usize,
    /// Byte offset one past the last byte of this token's content. For
    /// strings this is the byte of the closing quote.
    pub end: usize,
    /// For objects, the number of key/value pairs. For arrays, the number
    /// of elements. For a string used as an object key, always `1` once
    /// its value has been parsed. Otherwise `0`.
    pub size: usize,
}

impl Token {
    /// Returns the source slice this token spans.
    pub fn slice<'a>(&self, bytes: &'a [u8]) -> &'a [u8] {
        &bytes[self.start..self.end]
    }
}

/// Why [`tokenize`] failed.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum TokenizeError {
    /// The token buffer's capacity was exhausted before the end of input.
    /// Only reachable when a caller supplies an explicit capacity via
    /// [`tokenize_with_capacity`]; the default [`tokenize`] grows without
    /// bound.
    NoMemory,
    /// The input contains an illegal byte or a malformed structure.
    Invalid,
    /// The input is a well-formed prefix of a JSON document; more bytes
    /// were expected.
    Partial,
}

impl fmt::Display for TokenizeError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let msg = match self {
            TokenizeError::NoMemory => "token buffer capacity exhausted",
            TokenizeError::Invalid => "malformed JSON",
            TokenizeError::Partial => "truncated JSON",
        };
        write!(f, "{msg}")
    }
}

impl std::error::Error for TokenizeError {}

/// Tokenizes `bytes` as a single JSON document, growing the token buffer as
/// needed.
pub fn tokenize(bytes: &[u8]) -> Result<Vec<Token>, TokenizeError> {
    tokenize_with_capacity(bytes, 0, usize::MAX)
}

/// Returns the number of tokens `tokenize` would produce for `bytes`,
/// without allocating a token buffer at all. Lets a caller pre-size a fixed
/// token buffer with a first, allocation-free pass before allocating and
/// tokenizing for real — mirrors the recursive descent in `parse_value` and
/// friends, but only ever advances a cursor and a counter.
pub fn count_tokens(bytes: &[u8]) -> Result<usize, TokenizeError> {
    let mut pos = 0usize;
    let mut count = 0usize;
    skip_ws(bytes, &mut pos);
    count_value(bytes, &mut pos, &mut count)?;
    skip_ws(bytes, &mut pos);
    if pos != bytes.len() {
        return Err(TokenizeError::Invalid);
    }
    Ok(count)
}

fn count_value(bytes: &[u8], pos: &mut usize, count: &mut usize) -> Result<(), TokenizeError> {
    skip_ws(bytes, pos);
    let Some(&byte) = bytes.get(*pos) else {
        return Err(TokenizeError::Partial);
    };
    match byte {
        b'{' => count_object(bytes, pos, count),
        b'[' => count_array(bytes, pos, count),
        b'"' => {
            count_string(bytes, pos)?;
            *count += 1;
            Ok(())
        }
        b't' | b'f' | b'n' | b'-' | b'0'..=b'9' => {
            count_primitive(bytes, pos)?;
            *count += 1;
            Ok(())
        }
        _ => Err(TokenizeError::Invalid),
    }
}

fn count_object(bytes: &[u8], pos: &mut usize, count: &mut usize) -> Result<(), TokenizeError> {
    *count += 1;
    *pos += 1;
    skip_ws(bytes, pos);
    if bytes.get(*pos) == Some(&b'}') {
        *pos += 1;
        return Ok(());
    }
    loop {
        skip_ws(bytes, pos);
        if bytes.get(*pos) != Some(&b'"') {
            return Err(TokenizeError::Invalid);
        }
        count_string(bytes, pos)?;
        *count += 1; // the key
        skip_ws(bytes, pos);
        if bytes.get(*pos) != Some(&b':') {
            return Err(TokenizeError::Invalid);
        }
        *pos += 1;
        count_value(bytes, pos, count)?;
        skip_ws(bytes, pos);
        match bytes.get(*pos) {
            Some(b',') => {
                *pos += 1;
            }
            Some(b'}') => {
                *pos += 1;
                break;
            }
            Some(_) => return Err(TokenizeError::Invalid),
            None => return Err(TokenizeError::Partial),
        }
    }
    Ok(())
}

fn count_array(bytes: &[u8], pos: &mut usize, count: &mut usize) -> Result<(), TokenizeError> {
    *count += 1;
    *pos += 1;
    skip_ws(bytes, pos);
    if bytes.get(*pos) == Some(&b']') {
        *pos += 1;
        return Ok(());
    }
    loop {
        count_value(bytes, pos, count)?;
        skip_ws(bytes, pos);
        match bytes.get(*pos) {
            Some(b',') => {
                *pos += 1;
            }
            Some(b']') => {
                *pos += 1;
                break;
            }
            Some(_) => return Err(TokenizeError::Invalid),
            None => return Err(TokenizeError::Partial),
        }
    }
    Ok(())
}

/// Advances `pos` past a string's closing quote without recording a token.
/// Shares the exact escape/unicode-escape rules `parse_string` enforces, so
/// the count from this pass and the tokens from a real pass never disagree.
fn count_string(bytes: &[u8], pos: &mut usize) -> Result<(), TokenizeError> {
    *pos += 1; // opening quote
    loop {
        let Some(&byte) = bytes.get(*pos) else {
            return Err(TokenizeError::Partial);
        };
        match byte {
            b'"' => {
                *pos += 1;
                return Ok(());
            }
            b'\\' => {
                *pos += 1;
                let Some(&escape) = bytes.get(*pos) else {
                    return Err(TokenizeError::Partial);
                };
                match escape {
                    b'"' | b'\\' | b'/' | b'b' | b'f' | b'n' | b'r' | b't' => {
                        *pos += 1;
                    }
                    b'u' => {
                        *pos += 1;
                        for _ in 0..4 {
                            match bytes.get(*pos) {
                                Some(h) if h.is_ascii_hexdigit() => *pos += 1,
                                Some(_) => return Err(TokenizeError::Invalid),
                                None => return Err(TokenizeError::Partial),
                            }
                        }
                    }
                    _ => return Err(TokenizeError::Invalid),
                }
            }
            0x00..=0x1F => return Err(TokenizeError::Invalid),
            _ => *pos += 1,
        }
    }
}

fn count_primitive(bytes: &[u8], pos: &mut usize) -> Result<(), TokenizeError> {
    let start = *pos;
    loop {
        match bytes.get(*pos) {
            None => break,
            Some(b' ' | b'\t' | b'\r' | b'\n' | b',' | b']' | b'}') => break,
            Some(_) => *pos += 1,
        }
    }
    if *pos == start {
        return Err(TokenizeError::Invalid);
    }
    if !is_valid_primitive(&bytes[start..*pos]) {
        return Err(TokenizeError::Invalid);
    }
    Ok(())
}

/// Tokenizes `bytes`, pre-allocating `initial_capacity` slots and failing
/// with [`TokenizeError::NoMemory`] if more than `max_tokens` would be
/// required.
pub fn tokenize_with_capacity(
    bytes: &[u8],
    initial_capacity: usize,
    max_tokens: usize,
) -> Result<Vec<Token>, TokenizeError> {
    let mut tokens = Vec::with_capacity(initial_capacity);
    let mut pos = 0usize;
    skip_ws(bytes, &mut pos);
    parse_value(bytes, &mut pos, &mut tokens, max_tokens)?;
    skip_ws(bytes, &mut pos);
    if pos != bytes.len() {
        return Err(TokenizeError::Invalid);
    }
    Ok(tokens)
}

fn skip_ws(bytes: &[u8], pos: &mut usize) {
    while *pos < bytes.len() && matches!(bytes[*pos], b' ' | b'\t' | b'\r' | b'\n') {
        *pos += 1;
    }
}

fn push_token(
    tokens: &mut Vec<Token>,
    max_tokens: usize,
    token: Token,
) -> Result<usize, TokenizeError> {
    if tokens.len() >= max_tokens {
        return Err(TokenizeError::NoMemory);
    }
    tokens.push(token);
    Ok(tokens.len() - 1)
}

fn parse_value(
    bytes: &[u8],
    pos: &mut usize,
    tokens: &mut Vec<Token>,
    max_tokens: usize,
) -> Result<(), TokenizeError> {
    skip_ws(bytes, pos);
    let Some(&byte) = bytes.get(*pos) else {
        return Err(TokenizeError::Partial);
    };
    match byte {
        b'{' => parse_object(bytes, pos, tokens, max_tokens),
        b'[' => parse_array(bytes, pos, tokens, max_tokens),
        b'"' => parse_string(bytes, pos, tokens, max_tokens).map(|_| ()),
        b't' | b'f' | b'n' | b'-' | b'0'..=b'9' => parse_primitive(bytes, pos, tokens, max_tokens),
        _ => Err(TokenizeError::Invalid),
    }
}

fn parse_object(
    bytes: &[u8],
    pos: &mut usize,
    tokens: &mut Vec<Token>,
    max_tokens: usize,
) -> Result<(), TokenizeError> {
    let index = push_token(
        tokens,
        max_tokens,
        Token {
            kind: TokenKind::Object,
            start: *pos,
            end: *pos,
            size: 0,
        },
    )?;
    *pos += 1;
    skip_ws(bytes, pos);
    let mut count = 0usize;
    if bytes.get(*pos) == Some(&b'}') {
        *pos += 1;
        tokens[index].end = *pos;
        return Ok(());
    }
    loop {
        skip_ws(bytes, pos);
        if bytes.get(*pos) != Some(&b'"') {
            return Err(TokenizeError::Invalid);
        }
        let key_index = parse_string(bytes, pos, tokens, max_tokens)?;
        skip_ws(bytes, pos);
        if bytes.get(*pos) != Some(&b':') {
            return Err(TokenizeError::Invalid);
        }
        *pos += 1;
        parse_value(bytes, pos, tokens, max_tokens)?;
        tokens[key_index].size = 1;
        count += 1;
        skip_ws(bytes, pos);
        match bytes.get(*pos) {
            Some(b',') => {
                *pos += 1;
            }
            Some(b'}') => {
                *pos += 1;
                break;
            }
            Some(_) => return Err(TokenizeError::Invalid),
            None => return Err(TokenizeError::Partial),
        }
    }
    tokens[index].end = *pos;
    tokens[index].size = count;
    Ok(())
}

fn parse_array(
    bytes: &[u8],
    pos: &mut usize,
    tokens: &mut Vec<Token>,
    max_tokens: usize,
) -> Result<(), TokenizeError> {
    let index = push_token(
        tokens,
        max_tokens,
        Token {
            kind: TokenKind::Array,
            start: *pos,
            end: *pos,
            size: 0,
        },
    )?;
    *pos += 1;
    skip_ws(bytes, pos);
    let mut count = 0usize;
    if bytes.get(*pos) == Some(&b']') {
        *pos += 1;
        tokens[index].end = *pos;
        return Ok(());
    }
    loop {
        parse_value(bytes, pos, tokens, max_tokens)?;
        count += 1;
        skip_ws(bytes, pos);
        match bytes.get(*pos) {
            Some(b',') => {
                *pos += 1;
            }
            Some(b']') => {
                *pos += 1;
                break;
            }
            Some(_) => return Err(TokenizeError::Invalid),
            None => return Err(TokenizeError::Partial),
        }
    }
    tokens[index].end = *pos;
    tokens[index].size = count;
    Ok(())
}

fn parse_string(
    bytes: &[u8],
    pos: &mut usize,
    tokens: &mut Vec<Token>,
    max_tokens: usize,
) -> Result<usize, TokenizeError> {
    *pos += 1; // opening quote
    let start = *pos;
    loop {
        let Some(&byte) = bytes.get(*pos) else {
            return Err(TokenizeError::Partial);
        };
        match byte {
            b'"' => {
                let end = *pos;
                *pos += 1;
                return push_token(
                    tokens,
                    max_tokens,
                    Token {
                        kind: TokenKind::String,
                        start,
                        end,
                        size: 0,
                    },
                );
            }
            b'\\' => {
                *pos += 1;
                let Some(&escape) = bytes.get(*pos) else {
                    return Err(TokenizeError::Partial);
                };
                match escape {
                    b'"' | b'\\' | b'/' | b'b' | b'f' | b'n' | b'r' | b't' => {
                        *pos += 1;
                    }
                    b'u' => {
                        *pos += 1;
                        for _ in 0..4 {
                            match bytes.get(*pos) {
                                Some(h) if h.is_ascii_hexdigit() => *pos += 1,
                                Some(_) => return Err(TokenizeError::Invalid),
                                None => return Err(TokenizeError::Partial),
                            }
                        }
                    }
                    _ => return Err(TokenizeError::Invalid),
                }
            }
            0x00..=0x1F => return Err(TokenizeError::Invalid),
            _ => *pos += 1,
        }
    }
}

fn parse_primitive(
    bytes: &[u8],
    pos: &mut usize,
    tokens: &mut Vec<Token>,
    max_tokens: usize,
) -> Result<(), TokenizeError> {
    let start = *pos;
    loop {
        match bytes.get(*pos) {
            None => break,
            Some(b' ' | b'\t' | b'\r' | b'\n' | b',' | b']' | b'}') => break,
            Some(_) => *pos += 1,
        }
    }
    if *pos == start {
        return Err(TokenizeError::Invalid);
    }
    let text = &bytes[start..*pos];
    if !is_valid_primitive(text) {
        return Err(TokenizeError::Invalid);
    }
    push_token(
        tokens,
        max_tokens,
        Token {
            kind: TokenKind::Primitive,
            start,
            end: *pos,
            size: 0,
        },
    )?;
    Ok(())
}

fn is_valid_primitive(text: &[u8]) -> bool {
    if text == b"true" || text == b"false" || text == b"null" {
        return true;
    }
    std::str::from_utf8(text)
        .ok()
        .and_then(|s| s.parse::<f64>().ok())
        .is_some()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_object() {
        let tokens = tokenize(b"{}").unwrap();
        assert_eq!(tokens.len(), 1);
        assert_eq!(tokens[0].kind, TokenKind::Object);
        assert_eq!(tokens[0].size, 0);
    }

    #[test]
    fn minimal_asset() {
        let tokens = tokenize(br#"{"asset":{"version":"2.0"}}"#).unwrap();
        assert_eq!(tokens[0].kind, TokenKind::Object);
        assert_eq!(tokens[0].size, 1);
        assert_eq!(tokens[1].slice(br#"{"asset":{"version":"2.0"}}"#), b"asset");
    }

    #[test]
    fn two_pass_sizing_matches() {
        let json = br#"{"a":[1,2,3],"b":"x"}"#;
        let n = count_tokens(json).unwrap();
        let tokens = tokenize_with_capacity(json, n, n).unwrap();
        assert_eq!(tokens.len(), n);
    }

    #[test]
    fn object_size_counts_pairs_not_tokens() {
        let json = br#"{"a":1,"b":2}"#;
        let tokens = tokenize(json).unwrap();
        assert_eq!(tokens[0].size, 2);
    }

    #[test]
    fn no_memory_when_capacity_exhausted() {
        let json = br#"{"a":1,"b":2}"#;
        let err = tokenize_with_capacity(json, 0, 2).unwrap_err();
        assert_eq!(err, TokenizeError::NoMemory);
    }

    #[test]
    fn unterminated_string_is_partial() {
        let err = tokenize(br#"{"a":"#).unwrap_err();
        assert_eq!(err, TokenizeError::Partial);
    }

    #[test]
    fn invalid_escape_is_rejected() {
        let err = tokenize(br#""\q""#).unwrap_err();
        assert_eq!(err, TokenizeError::Invalid);
    }

    #[test]
    fn unicode_escape_requires_four_hex_digits() {
        assert!(tokenize(br#""\u00""#).is_err());
        assert!(tokenize(br#""A""#).is_ok());
    }

    #[test]
    fn bare_primitives_accepted() {
        assert!(tokenize(b"true").is_ok());
        assert!(tokenize(b"false").is_ok());
        assert!(tokenize(b"null").is_ok());
        assert!(tokenize(b"42").is_ok());
        assert!(tokenize(b"-1.5e3").is_ok());
    }

    #[test]
    fn trailing_garbage_is_invalid() {
        assert!(tokenize(b"{}garbage").is_err());
    }
}
