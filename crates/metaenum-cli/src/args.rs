use clap::{ArgAction, Parser, ValueEnum};
use std::path::PathBuf;

/// CLI arguments for the metaenum binary.
#[derive(Parser, Debug)]
#[command(
    name = "metaenum",
    version,
    about = "Build and query the reflection table of an enumeration member list"
)]
pub struct CliArgs {
    /// File holding the member list, or `-` to read standard input.
    pub input: Option<PathBuf>,

    /// Member list given inline, e.g. "A, B = 5, C".
    #[arg(long, conflicts_with = "input")]
    pub text: Option<String>,

    /// Underlying integer type every resolved value must fit.
    #[arg(long, value_enum, default_value_t = ReprKind::I32)]
    pub repr: ReprKind,

    /// Output format.
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Raise the log level of the metaenum crates (`-v` debug, `-vv` trace).
    /// `METAENUM_LOG` and `RUST_LOG` take precedence.
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,

    // ==================== Queries ====================
    /// Print the top-level segments and the name read from each, without
    /// resolving values.
    #[arg(long, group = "query")]
    pub segments: bool,

    /// Print the name of the first member with this value.
    #[arg(long = "name-of", allow_hyphen_values = true, group = "query")]
    pub name_of: Option<i128>,

    /// Print the value of the member with this exact name.
    #[arg(long = "value-of", group = "query")]
    pub value_of: Option<String>,

    /// Print the ordinal of the first member with this value.
    #[arg(long = "index-of", allow_hyphen_values = true, group = "query")]
    pub index_of: Option<i128>,
}

/// Underlying integer type of the enumeration.
#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum ReprKind {
    I8,
    I16,
    I32,
    I64,
    U8,
    U16,
    U32,
    U64,
}

impl ReprKind {
    /// Inclusive range of representable values.
    pub fn bounds(self) -> (i128, i128) {
        match self {
            ReprKind::I8 => (i8::MIN.into(), i8::MAX.into()),
            ReprKind::I16 => (i16::MIN.into(), i16::MAX.into()),
            ReprKind::I32 => (i32::MIN.into(), i32::MAX.into()),
            ReprKind::I64 => (i64::MIN.into(), i64::MAX.into()),
            ReprKind::U8 => (0, u8::MAX.into()),
            ReprKind::U16 => (0, u16::MAX.into()),
            ReprKind::U32 => (0, u32::MAX.into()),
            ReprKind::U64 => (0, u64::MAX.into()),
        }
    }

    pub fn contains(self, value: i128) -> bool {
        let (min, max) = self.bounds();
        (min..=max).contains(&value)
    }

    pub fn name(self) -> &'static str {
        match self {
            ReprKind::I8 => "i8",
            ReprKind::I16 => "i16",
            ReprKind::I32 => "i32",
            ReprKind::I64 => "i64",
            ReprKind::U8 => "u8",
            ReprKind::U16 => "u16",
            ReprKind::U32 => "u32",
            ReprKind::U64 => "u64",
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Aligned, human-readable table.
    Text,
    /// JSON object with the declaration and every member.
    Json,
}

#[cfg(test)]
#[path = "tests/args_tests.rs"]
mod tests;
