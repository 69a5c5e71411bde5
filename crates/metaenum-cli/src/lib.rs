//! Command-line inspection of enumeration member lists.
//!
//! This is the runtime registration path: the member list arrives as plain
//! text, integer-literal initializers are read from it, and the table is
//! built once for the query at hand.

pub mod args;
pub mod driver;
pub mod initializer;
pub mod tracing_config;
