//! Error types.
//!
//! `MetaEnumError` describes a declaration that cannot produce a table.
//! For declared enums it is never returned: the build panics with it,
//! because every lookup assumes a complete table. `ParseEnumError` is the
//! ordinary "no such member" outcome of parsing a name.

use std::fmt;

/// Error returned when member list text does not match its member count.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MetaEnumError {
    /// A segment contains no identifier.
    MissingIdentifier {
        /// Ordinal of the member being read
        index: usize,
        /// The verbatim segment text
        segment: String,
    },
    /// The text ran out before every member was found.
    MissingMember {
        /// Number of members the table was built for
        expected: usize,
        /// Number of segments actually present
        found: usize,
    },
    /// Text other than a trailing comma follows the last member.
    TrailingMembers {
        /// Number of members the table was built for
        expected: usize,
        /// The leftover text
        rest: String,
    },
}

impl fmt::Display for MetaEnumError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MetaEnumError::MissingIdentifier { index, segment } => {
                write!(f, "member {index} has no name in segment {segment:?}")
            }
            MetaEnumError::MissingMember { expected, found } => {
                write!(f, "expected {expected} members but the text has {found}")
            }
            MetaEnumError::TrailingMembers { expected, rest } => {
                write!(f, "text continues after {expected} members: {rest:?}")
            }
        }
    }
}

impl std::error::Error for MetaEnumError {}

/// Error returned when a string names no member of an enum.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseEnumError {
    /// Name of the enum type
    pub enum_name: &'static str,
    /// The string that failed to parse
    pub input: String,
}

impl fmt::Display for ParseEnumError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?} is not a member of {}", self.input, self.enum_name)
    }
}

impl std::error::Error for ParseEnumError {}
