//! Explicit values from member list text.
//!
//! Declared enums get their explicit values from the compiler. Text given
//! on the command line has no compiler behind it, so the only initializers
//! accepted here are integer literals (`5`, `-0x10`, `0b1010_u8`). Anything
//! else is reported, never evaluated.

use anyhow::{Context, Result, bail};
use metaenum_scanner::{is_blank, member_name_span, segments, trivia_len};

/// One explicit-value slot per member of `text`, in declaration order.
///
/// A single trailing comma is allowed. Segments without a name are left for
/// the table builder to report.
pub fn explicit_values(text: &str) -> Result<Vec<Option<i128>>> {
    let count = metaenum_scanner::count_members(text);
    segments(text)
        .take(count)
        .enumerate()
        .map(|(index, segment)| {
            explicit_value(segment.text).with_context(|| {
                format!("member {index} ({:?}) has an unsupported initializer", segment.text.trim())
            })
        })
        .collect()
}

/// The explicit value of one segment, if it has an initializer.
pub fn explicit_value(segment: &str) -> Result<Option<i128>> {
    let Some((_, name_end)) = member_name_span(segment) else {
        return Ok(None);
    };
    let rest = &segment[name_end..];
    let rest = &rest[trivia_len(rest)..];
    let Some(initializer) = rest.strip_prefix('=') else {
        if !is_blank(rest) {
            bail!("expected `=` or end of member, found {:?}", rest.trim());
        }
        return Ok(None);
    };
    parse_integer_literal(initializer).map(Some)
}

/// Parse an optionally signed integer literal surrounded by trivia.
///
/// Accepts decimal, `0x`, `0o` and `0b` forms, `_` separators and an
/// integer type suffix such as `u8` or `_i64`.
pub fn parse_integer_literal(text: &str) -> Result<i128> {
    let mut rest = &text[trivia_len(text)..];
    let negative = match rest.as_bytes().first() {
        Some(b'-') => true,
        Some(b'+') => false,
        _ => return to_signed(parse_unsigned(rest, text)?, false, text),
    };
    rest = &rest[1..];
    rest = &rest[trivia_len(rest)..];
    to_signed(parse_unsigned(rest, text)?, negative, text)
}

fn to_signed(magnitude: u128, negative: bool, original: &str) -> Result<i128> {
    let limit = if negative {
        i128::MAX as u128 + 1
    } else {
        i128::MAX as u128
    };
    if magnitude > limit {
        bail!("{:?} is out of range", original.trim());
    }
    let value = magnitude as i128;
    Ok(if negative { value.wrapping_neg() } else { value })
}

const SUFFIXES: &[&str] = &[
    "i128", "isize", "i64", "i32", "i16", "i8", "u128", "usize", "u64", "u32", "u16", "u8",
];

fn parse_unsigned(rest: &str, original: &str) -> Result<u128> {
    let (radix, digits) = match rest.get(..2) {
        Some("0x" | "0X") => (16, &rest[2..]),
        Some("0o" | "0O") => (8, &rest[2..]),
        Some("0b" | "0B") => (2, &rest[2..]),
        _ => (10, rest),
    };

    let literal_len = digits
        .bytes()
        .position(|ch| {
            let digit = if radix == 16 {
                ch.is_ascii_hexdigit()
            } else {
                ch.is_ascii_digit()
            };
            !(digit || ch == b'_')
        })
        .unwrap_or(digits.len());
    let (literal, tail) = digits.split_at(literal_len);

    let tail = tail.strip_prefix('_').unwrap_or(tail);
    let tail = SUFFIXES
        .iter()
        .find_map(|suffix| tail.strip_prefix(suffix))
        .unwrap_or(tail);
    if !is_blank(tail) {
        bail!("{:?} is not an integer literal", original.trim());
    }

    let cleaned: String = literal.chars().filter(|&ch| ch != '_').collect();
    if cleaned.is_empty() {
        bail!("{:?} is not an integer literal", original.trim());
    }
    u128::from_str_radix(&cleaned, radix)
        .with_context(|| format!("{:?} is not a valid base-{radix} literal", original.trim()))
}

#[cfg(test)]
#[path = "tests/initializer_tests.rs"]
mod tests;
