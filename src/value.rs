//! JSON value helpers: pure functions over a `(bytes, &Token)` pair.
//!
//! Boolean parsing is strict — both `true` and `false` are validated, not
//! just `true` — and every parser here returns `Option` rather than a
//! sentinel value, since `Option` already distinguishes "absent/invalid"
//! from a real zero.

use crate::token::{Token, TokenKind};

/// Returns `true` if `token` is a string token whose content equals
/// `literal` byte-for-byte. Used by the walker to dispatch on object keys.
pub fn token_equals_key(bytes: &[u8], token: &Token, literal: &str) -> bool {
    token.kind == TokenKind::String && token.slice(bytes) == literal.as_bytes()
}

/// Parses a strict JSON boolean primitive.
pub fn to_bool(bytes: &[u8], token: &Token) -> Option<bool> {
    if token.kind != TokenKind::Primitive {
        return None;
    }
    match token.slice(bytes) {
        b"true" => Some(true),
        b"false" => Some(false),
        _ => None,
    }
}

/// Parses a JSON number primitive as an `i64`.
pub fn to_i64(bytes: &[u8], token: &Token) -> Option<i64> {
    if token.kind != TokenKind::Primitive {
        return None;
    }
    std::str::from_utf8(token.slice(bytes))
        .ok()?
        .parse()
        .ok()
}

/// Parses a JSON number primitive as a `u32` index/size, returning `None`
/// when the value cannot be represented rather than clamping a negative
/// value to zero.
pub fn to_u32(bytes: &[u8], token: &Token) -> Option<u32> {
    to_i64(bytes, token)?.try_into().ok()
}

/// Parses a JSON number primitive as an `f32`.
pub fn to_f32(bytes: &[u8], token: &Token) -> Option<f32> {
    if token.kind != TokenKind::Primitive {
        return None;
    }
    std::str::from_utf8(token.slice(bytes))
        .ok()?
        .parse()
        .ok()
}

/// Decodes a JSON string token's content into an owned `String`, resolving
/// escape sequences.
pub fn parse_string(bytes: &[u8], token: &Token) -> Option<String> {
    if token.kind != TokenKind::String {
        return None;
    }
    let raw = token.slice(bytes);
    let mut out = String::with_capacity(raw.len());
    let mut i = 0;
    while i < raw.len() {
        if raw[i] == b'\\' {
            i += 1;
            match raw.get(i)? {
                b'"' => out.push('"'),
                b'\\' => out.push('\\'),
                b'/' => out.push('/'),
                b'b' => out.push('\u{8}'),
                b'f' => out.push('\u{c}'),
                b'n' => out.push('\n'),
                b'r' => out.push('\r'),
                b't' => out.push('\t'),
                b'u' => {
                    let hex = std::str::from_utf8(raw.get(i + 1..i + 5)?).ok()?;
                    let code = u32::from_str_radix(hex, 16).ok()?;
                    out.push(char::from_u32(code)?);
                    i += 4;
                }
                _ => return None,
            }
            i += 1;
        } else {
            let start = i;
            while i < raw.len() && raw[i] != b'\\' {
                i += 1;
            }
            out.push_str(std::str::from_utf8(&raw[start..i]).ok()?);
        }
    }
    Some(out)
}

/// Returns the raw JSON source text spanning `token`, verbatim, used to
/// capture `extras`/unrecognized `extensions` payloads without building a
/// DOM for them.
pub fn raw_slice<'a>(bytes: &'a [u8], token: &Token) -> &'a str {
    let (start, end) = match token.kind {
        TokenKind::String => (token.start - 1, token.end + 1),
        _ => (token.start, token.end),
    };
    std::str::from_utf8(&bytes[start..end]).unwrap_or_default()
}

/// Parses a fixed-size float array from an array token, requiring an exact
/// length match against `N`.
pub fn parse_float_array_fixed<const N: usize>(
    bytes: &[u8],
    tokens: &[Token],
    array_index: usize,
) -> Option<[f32; N]> {
    let array = tokens.get(array_index)?;
    if array.kind != TokenKind::Array || array.size != N {
        return None;
    }
    let mut out = [0.0f32; N];
    for (i, slot) in out.iter_mut().enumerate() {
        *slot = to_f32(bytes, tokens.get(array_index + 1 + i)?)?;
    }
    Some(out)
}

/// Parses a float array of whatever length the array token declares. Used
/// for `weights` arrays, whose length varies with the number of morph
/// targets rather than being fixed in advance.
pub fn parse_float_array_dynamic(
    bytes: &[u8],
    tokens: &[Token],
    array_index: usize,
) -> Option<Vec<f32>> {
    let array = tokens.get(array_index)?;
    if array.kind != TokenKind::Array {
        return None;
    }
    (0..array.size)
        .map(|i| to_f32(bytes, tokens.get(array_index + 1 + i)?))
        .collect()
}

/// Returns the token index immediately following the subtree rooted at
/// `index`, i.e. "skip this key's value, whatever shape it is". Used by
/// the walker on unrecognized keys.
pub fn skip_subtree(tokens: &[Token], index: usize) -> usize {
    let token = tokens[index];
    match token.kind {
        TokenKind::Object => {
            let mut i = index + 1;
            for _ in 0..token.size {
                i += 1; // the key
                i = skip_subtree(tokens, i); // the value
            }
            i
        }
        TokenKind::Array => {
            let mut i = index + 1;
            for _ in 0..token.size {
                i = skip_subtree(tokens, i);
            }
            i
        }
        TokenKind::String | TokenKind::Primitive => index + 1,
    }
}
