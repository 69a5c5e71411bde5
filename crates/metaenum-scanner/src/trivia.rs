//! Skipping of text that never contributes delimiters or names.
//!
//! All positions are byte offsets. Delimiters are ASCII, so every offset
//! returned here lands on a UTF-8 character boundary.

/// If a `//` or `/* */` comment starts at `pos`, return the position just
/// past it. Line comments stop before the newline; an unterminated block
/// comment runs to the end of the text.
pub(crate) fn skip_comment(bytes: &[u8], pos: usize) -> Option<usize> {
    if bytes.get(pos) != Some(&b'/') {
        return None;
    }
    match bytes.get(pos + 1) {
        Some(b'/') => {
            let mut end = pos + 2;
            while end < bytes.len() && bytes[end] != b'\n' && bytes[end] != b'\r' {
                end += 1;
            }
            Some(end)
        }
        Some(b'*') => {
            let mut end = pos + 2;
            while end + 1 < bytes.len() {
                if bytes[end] == b'*' && bytes[end + 1] == b'/' {
                    return Some(end + 2);
                }
                end += 1;
            }
            Some(bytes.len())
        }
        _ => None,
    }
}

/// Skip a double-quoted string whose opening quote is at `pos`.
///
/// A backslash escapes the following byte, so `\"` does not close the
/// string. Unterminated strings consume the rest of the text.
pub(crate) fn skip_string(bytes: &[u8], pos: usize) -> usize {
    let mut end = pos + 1;
    while end < bytes.len() {
        match bytes[end] {
            b'\\' => end += 2,
            b'"' => return end + 1,
            _ => end += 1,
        }
    }
    bytes.len()
}

/// Skip a character literal (`'x'`, `'\n'`, `'\u{1F600}'`) whose opening
/// quote is at `pos`.
///
/// A quote that does not open a well-formed literal (a lifetime, a stray
/// apostrophe) is consumed on its own.
pub(crate) fn skip_char_literal(text: &str, pos: usize) -> usize {
    let bytes = text.as_bytes();
    if bytes.get(pos + 1) == Some(&b'\\') {
        // The escaped byte itself never closes. Longest escape is `\u{10FFFF}`.
        let limit = (pos + 12).min(bytes.len());
        return (pos + 3..limit)
            .find(|&i| bytes[i] == b'\'')
            .map_or(pos + 1, |i| i + 1);
    }
    let Some(ch) = text.get(pos + 1..).and_then(|rest| rest.chars().next()) else {
        return pos + 1;
    };
    let close = pos + 1 + ch.len_utf8();
    if bytes.get(close) == Some(&b'\'') {
        close + 1
    } else {
        pos + 1
    }
}

/// Skip whitespace and comments starting at `pos`.
pub(crate) fn skip_trivia(bytes: &[u8], mut pos: usize) -> usize {
    while pos < bytes.len() {
        if bytes[pos].is_ascii_whitespace() {
            pos += 1;
        } else if let Some(end) = skip_comment(bytes, pos) {
            pos = end;
        } else {
            break;
        }
    }
    pos
}

/// Length in bytes of the whitespace and comments at the start of `text`.
pub fn trivia_len(text: &str) -> usize {
    skip_trivia(text.as_bytes(), 0)
}

/// Whether `text` holds nothing but whitespace and comments.
pub fn is_blank(text: &str) -> bool {
    let bytes = text.as_bytes();
    skip_trivia(bytes, 0) == bytes.len()
}
