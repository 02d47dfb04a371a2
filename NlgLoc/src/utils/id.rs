//! Rendering and parsing of hash identifiers as NLOCT tokens
//!
//! An identifier is written as `"plaintext"` when the plaintext registry
//! knows a string that hashes to it, and as 1-8 uppercase hex digits
//! otherwise. Inside quotes, `\"` and `\\` stand for a literal quote and
//! backslash; any other backslash is literal.

use crate::error::{Error, Result};
use crate::hash::{PlaintextRegistry, hash_str};

/// Render an identifier the way NLOCT files and diagnostics show it
#[must_use]
pub fn render_id(id: u32, registry: &PlaintextRegistry) -> String {
    match registry.lookup(id) {
        Some(plaintext) => quote(plaintext),
        None => display_id(id),
    }
}

/// Render an identifier as bare uppercase hex, without padding or `0x`
#[must_use]
pub fn display_id(id: u32) -> String {
    format!("{id:X}")
}

/// Wrap a plaintext in quotes, escaping quotes and backslashes
fn quote(plaintext: &str) -> String {
    let mut out = String::with_capacity(plaintext.len() + 2);
    out.push('"');
    for c in plaintext.chars() {
        if matches!(c, '"' | '\\') {
            out.push('\\');
        }
        out.push(c);
    }
    out.push('"');
    out
}

/// Parse an identifier token at the start of `s`
///
/// Returns the identifier and the rest of `s` after the token. A quoted
/// token ends at the next unescaped `"` and is hashed; anything else is hex
/// up to the first whitespace character.
///
/// # Errors
/// Returns [`Error::InvalidIdentifierLiteral`] for an unterminated quote or
/// invalid hex, and [`Error::EncodingError`] if a quoted literal isn't
/// Latin-1.
pub fn parse_id_token(s: &str, line: usize) -> Result<(u32, &str)> {
    if let Some(quoted) = s.strip_prefix('"') {
        let (literal, rest) = split_quoted(quoted).ok_or_else(|| Error::InvalidIdentifierLiteral {
            line,
            token: s.to_string(),
        })?;
        Ok((hash_str(&literal)?, rest))
    } else {
        let (token, rest) = s.split_once(char::is_whitespace).unwrap_or((s, ""));
        Ok((parse_hex(token, line)?, rest))
    }
}

/// Parse a hex identifier, with or without a `0x` prefix
///
/// # Errors
/// Returns [`Error::InvalidIdentifierLiteral`] if `token` isn't a 32-bit hex
/// number.
pub fn parse_hex(token: &str, line: usize) -> Result<u32> {
    let digits = token
        .strip_prefix("0x")
        .or_else(|| token.strip_prefix("0X"))
        .unwrap_or(token);

    u32::from_str_radix(digits, 16)
        .ok()
        .filter(|_| !digits.starts_with('+'))
        .ok_or_else(|| Error::InvalidIdentifierLiteral {
            line,
            token: token.to_string(),
        })
}

/// Split `"literal" rest` (opening quote already removed) at the closing quote
fn split_quoted(s: &str) -> Option<(String, &str)> {
    let mut literal = String::new();
    let mut chars = s.char_indices();

    while let Some((i, c)) = chars.next() {
        match c {
            '"' => return Some((literal, &s[i + 1..])),
            '\\' => match chars.clone().next() {
                Some((_, escaped @ ('"' | '\\'))) => {
                    literal.push(escaped);
                    chars.next();
                }
                _ => literal.push('\\'),
            },
            _ => literal.push(c),
        }
    }

    None
}
