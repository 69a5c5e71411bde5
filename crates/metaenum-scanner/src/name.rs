//! Member name extraction.
//!
//! A segment is one member exactly as written, for example
//! `  /// Docs\n #[doc = "x"] B = foo(1, 2) // note`. The name is the first
//! identifier after any leading whitespace, comments and `#[...]`
//! attributes. Because `=` is not an identifier character the scan stops at
//! the explicit-value separator on its own.

use crate::trivia::{skip_string, skip_trivia};

/// `[A-Za-z_]`
#[inline]
pub fn is_identifier_start(ch: u8) -> bool {
    ch.is_ascii_alphabetic() || ch == b'_'
}

/// `[A-Za-z0-9_]`
#[inline]
pub fn is_identifier_char(ch: u8) -> bool {
    ch.is_ascii_alphanumeric() || ch == b'_'
}

/// Extract the member name from one raw segment.
///
/// Returns `None` when the segment contains no identifier at all; callers
/// building a table treat that as a malformed declaration. Raw identifiers
/// (`r#type`) yield the bare name (`type`).
pub fn member_name(segment: &str) -> Option<&str> {
    member_name_span(segment).map(|(start, end)| &segment[start..end])
}

/// Byte range of the member name within `segment`. See [`member_name`].
pub fn member_name_span(segment: &str) -> Option<(usize, usize)> {
    let bytes = segment.as_bytes();
    let mut pos = skip_prelude(bytes);

    while pos < bytes.len() && !is_identifier_start(bytes[pos]) {
        pos += 1;
    }
    if pos == bytes.len() {
        return None;
    }

    let mut end = identifier_end(bytes, pos);
    if &bytes[pos..end] == b"r"
        && bytes.get(end) == Some(&b'#')
        && bytes.get(end + 1).is_some_and(|&ch| is_identifier_start(ch))
    {
        pos = end + 1;
        end = identifier_end(bytes, pos);
    }

    Some((pos, end))
}

fn identifier_end(bytes: &[u8], mut pos: usize) -> usize {
    while pos < bytes.len() && is_identifier_char(bytes[pos]) {
        pos += 1;
    }
    pos
}

/// Skip whitespace, comments and outer/inner attributes.
fn skip_prelude(bytes: &[u8]) -> usize {
    let mut pos = skip_trivia(bytes, 0);
    while bytes.get(pos) == Some(&b'#') {
        let mut open = skip_trivia(bytes, pos + 1);
        if bytes.get(open) == Some(&b'!') {
            open = skip_trivia(bytes, open + 1);
        }
        if bytes.get(open) != Some(&b'[') {
            break;
        }
        pos = skip_trivia(bytes, skip_brackets(bytes, open));
    }
    pos
}

/// Skip a `[...]` group opened at `pos`, honouring nested brackets and
/// string literals. Runs to the end of the text if it never closes.
fn skip_brackets(bytes: &[u8], pos: usize) -> usize {
    let mut depth = 0usize;
    let mut end = pos;
    while end < bytes.len() {
        match bytes[end] {
            b'"' => {
                end = skip_string(bytes, end);
                continue;
            }
            b'[' => depth += 1,
            b']' => {
                depth -= 1;
                if depth == 0 {
                    return end + 1;
                }
            }
            _ => {}
        }
        end += 1;
    }
    bytes.len()
}

#[cfg(test)]
#[path = "tests/name_tests.rs"]
mod tests;
