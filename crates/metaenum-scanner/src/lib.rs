//! Lexical layer for enumeration declaration text.
//!
//! This crate works on the verbatim text of an enumeration's member list:
//! - `next_boundary` / `segments` - Top-level comma splitting
//! - `member_name` - Leading identifier extraction for one segment
//! - `is_blank` / `trivia_len` / `count_members` - Helpers for validating text
//!
//! Nothing here evaluates initializer expressions. A segment such as
//! `B = foo(1, 2)` only ever contributes its name `B`.

// Comment, string and character literal skipping shared by the scanners
mod trivia;
pub use trivia::{is_blank, trivia_len};

// Top-level comma splitting
pub mod split;
pub use split::{Segment, Segments, count_members, next_boundary, segments};

// Member name extraction
pub mod name;
pub use name::{is_identifier_char, is_identifier_start, member_name, member_name_span};
