//! Reflection tables for enumerations.
//!
//! Given the literal text of an enumeration's member list, this crate builds
//! an immutable table of every member's name, resolved value and ordinal,
//! once, and answers lookups in both directions:
//! - `resolve_values` - Sequential value resolution (explicit or previous + 1)
//! - `MetaEnumTable` - The member table and its lookup facade
//! - `LazyTable` - Build-once, process-wide storage for a table
//! - `meta_enum!` - Declares an enum together with its table
//!
//! ```
//! metaenum::meta_enum! {
//!     #[derive(Debug)]
//!     pub enum Level: u8 {
//!         Low,
//!         High = 10,
//!         Higher,
//!     }
//! }
//!
//! assert_eq!(metaenum::enum_to_string(Level::High), "High");
//! assert_eq!(metaenum::string_to_enum::<Level>("Higher"), Some(Level::Higher));
//! assert_eq!(Level::Higher as u8, 11);
//! ```

// Underlying integer types of declared enums
pub mod repr;
pub use repr::EnumRepr;

// Explicit-or-increment value resolution
pub mod resolve;
pub use resolve::resolve_values;

// Malformed declarations and failed name parses
pub mod error;
pub use error::{MetaEnumError, ParseEnumError};

// Member records, table builder and lookups
pub mod table;
pub use table::{INVALID_ENUM_NAME, MetaEnumMember, MetaEnumTable, Values};

// Build-once storage
pub mod lazy;
pub use lazy::LazyTable;

// Declared enums: trait, free functions and ranges
pub mod reflect;
pub use reflect::{
    MetaEnum, MetaEnumRange, build_enum_table, enum_from_repr, enum_to_index, enum_to_string,
    meta_enum, string_to_enum, string_to_enum_or,
};

mod macros;
