//! Top-level comma splitting.
//!
//! A member list such as
//!
//! ```text
//! A = make(1, 2), B = Pair::<u8, u8>::LEN, C = b',', D
//! ```
//!
//! has four top-level segments. Commas nested inside parentheses, square
//! brackets, braces, angle brackets, string and character literals, or
//! comments never separate members.
//!
//! # Angle brackets
//!
//! `<` and `>` are counted as delimiters unless they touch another `<` or
//! `>` (`<<`, `>>`, `>>=`), which is read as a shift operator. This is an
//! approximation: `Vec<Vec<u8>>` closes only one level, and a comparison
//! such as `(a < b)` opens one that never closes. Nothing tries to resolve
//! the ambiguity beyond that.
//!
//! # Unbalanced input
//!
//! Delimiters still open at the end of the text make the scan run to the
//! end, so the remainder becomes one final segment. Malformed text is
//! mis-split rather than rejected.

use serde::Serialize;

use crate::trivia::{skip_char_literal, skip_comment, skip_string};

/// Return the byte offset of the next top-level comma at or after `start`,
/// or `text.len()` if there is none.
pub fn next_boundary(text: &str, start: usize) -> usize {
    let bytes = text.as_bytes();
    let len = bytes.len();
    let mut nesting: i32 = 0;
    let mut pos = start.min(len);

    while pos < len {
        let ch = bytes[pos];
        match ch {
            b',' if nesting <= 0 => return pos,
            b'"' => {
                pos = skip_string(bytes, pos);
                continue;
            }
            b'\'' => {
                pos = skip_char_literal(text, pos);
                continue;
            }
            b'/' => {
                if let Some(end) = skip_comment(bytes, pos) {
                    pos = end;
                    continue;
                }
            }
            b'(' | b'[' | b'{' => nesting += 1,
            b')' | b']' | b'}' => nesting -= 1,
            b'<' if !touches(bytes, pos, b'<') => nesting += 1,
            b'>' if !touches(bytes, pos, b'>') => nesting -= 1,
            _ => {}
        }
        pos += 1;
    }

    len
}

/// Whether the byte at `pos` has `ch` directly before or after it.
fn touches(bytes: &[u8], pos: usize, ch: u8) -> bool {
    (pos > 0 && bytes[pos - 1] == ch) || bytes.get(pos + 1) == Some(&ch)
}

/// One top-level segment of a member list.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct Segment<'a> {
    /// Start position (byte offset, inclusive)
    pub start: usize,
    /// End position (byte offset of the separating comma or end of text)
    pub end: usize,
    /// The verbatim segment text
    pub text: &'a str,
}

/// Iterator over all top-level segments of a member list.
///
/// Text with `n` top-level commas yields `n + 1` segments, so a trailing
/// comma produces an empty final segment and empty text yields one empty
/// segment. Use [`count_members`] for the number of actual members.
#[derive(Clone, Debug)]
pub struct Segments<'a> {
    text: &'a str,
    cursor: Option<usize>,
}

impl<'a> Iterator for Segments<'a> {
    type Item = Segment<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let start = self.cursor?;
        let end = next_boundary(self.text, start);
        self.cursor = (end < self.text.len()).then_some(end + 1);
        Some(Segment {
            start,
            end,
            text: &self.text[start..end],
        })
    }
}

impl std::iter::FusedIterator for Segments<'_> {}

/// Split `text` into its top-level segments.
pub fn segments(text: &str) -> Segments<'_> {
    Segments {
        text,
        cursor: Some(0),
    }
}

/// Number of members declared in `text`.
///
/// A single blank trailing segment (left by a trailing comma) is not a
/// member, and blank text declares none.
pub fn count_members(text: &str) -> usize {
    let mut count = 0;
    let mut last_blank = false;
    for segment in segments(text) {
        count += 1;
        last_blank = crate::is_blank(segment.text);
    }
    if last_blank { count - 1 } else { count }
}

#[cfg(test)]
#[path = "tests/split_tests.rs"]
mod tests;
