//! Log output for the metaenum binary.
//!
//! Logging stays off unless asked for, through one of:
//!
//! - `METAENUM_LOG` or `RUST_LOG`: full `EnvFilter` directives. A bare level
//!   such as `trace` is narrowed to the metaenum crates, so dependencies stay
//!   quiet.
//! - `-v` / `-vv` on the command line: debug / trace for the metaenum crates.
//!
//! `METAENUM_LOG_FORMAT` picks `text` (default), `tree` or `json`. Output
//! always goes to stderr, never mixing with the table on stdout.
//!
//! ```bash
//! # Every member the table builder reads
//! METAENUM_LOG=trace metaenum members.txt
//!
//! # Table builds as JSON events
//! METAENUM_LOG_FORMAT=json metaenum -v --text "A, B = 5"
//! ```

use tracing_subscriber::prelude::*;
use tracing_subscriber::{EnvFilter, fmt};
use tracing_tree::HierarchicalLayer;

/// Crates whose events a bare level or `-v` enables.
const TARGETS: &[&str] = &["metaenum", "metaenum_scanner", "metaenum_cli"];

/// How log lines are written.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    Text,
    Tree,
    Json,
}

impl LogFormat {
    /// Parse a `METAENUM_LOG_FORMAT` value. Unknown values mean `Text`.
    pub fn parse(value: &str) -> Self {
        match value.to_lowercase().as_str() {
            "tree" => Self::Tree,
            "json" => Self::Json,
            _ => Self::Text,
        }
    }
}

/// Resolved logging setup: which directives to enable and how to print.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogConfig {
    pub directives: String,
    pub format: LogFormat,
}

impl LogConfig {
    /// Work out the setup from an environment lookup and the `-v` count.
    /// `None` means logging stays off.
    pub fn resolve(env: impl Fn(&str) -> Option<String>, verbose: u8) -> Option<Self> {
        let directives = match env("METAENUM_LOG").or_else(|| env("RUST_LOG")) {
            Some(value) => scoped_directives(&value),
            None => match verbose {
                0 => return None,
                1 => target_directives("debug"),
                _ => target_directives("trace"),
            },
        };
        let format = LogFormat::parse(&env("METAENUM_LOG_FORMAT").unwrap_or_default());
        Some(LogConfig { directives, format })
    }
}

/// `level` for every metaenum crate, e.g. `metaenum=debug,metaenum_cli=debug`.
fn target_directives(level: &str) -> String {
    TARGETS
        .iter()
        .map(|target| format!("{target}={level}"))
        .collect::<Vec<_>>()
        .join(",")
}

/// Narrow a bare level to the metaenum crates; pass real directives through.
fn scoped_directives(value: &str) -> String {
    let value = value.trim();
    let is_level = matches!(
        value.to_lowercase().as_str(),
        "trace" | "debug" | "info" | "warn" | "error"
    );
    if is_level {
        target_directives(value)
    } else {
        value.to_string()
    }
}

/// Install the global subscriber if the environment or `verbose` asks for
/// logging.
pub fn init_tracing(verbose: u8) -> anyhow::Result<()> {
    let Some(config) = LogConfig::resolve(|key| std::env::var(key).ok(), verbose) else {
        return Ok(());
    };
    let filter = EnvFilter::builder().parse_lossy(&config.directives);

    let output = match config.format {
        LogFormat::Text => fmt::layer()
            .without_time()
            .with_writer(std::io::stderr)
            .boxed(),
        LogFormat::Tree => HierarchicalLayer::new(2).with_targets(true).boxed(),
        LogFormat::Json => fmt::layer()
            .json()
            .flatten_event(true)
            .with_writer(std::io::stderr)
            .boxed(),
    };

    tracing_subscriber::registry()
        .with(output.with_filter(filter))
        .try_init()?;
    Ok(())
}

#[cfg(test)]
#[path = "tests/tracing_config_tests.rs"]
mod tests;
