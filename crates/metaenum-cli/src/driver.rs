//! Reading the member list, building its table and rendering the answer.

use std::fmt::Write as _;
use std::io::Read;
use std::path::Path;

use anyhow::{Context, Result, bail};
use metaenum::{MetaEnumTable, resolve_values};
use metaenum_scanner::{Segment, count_members, member_name, segments};
use rustc_hash::FxHashMap;
use serde::Serialize;
use tracing::{debug, info_span};

use crate::args::{CliArgs, OutputFormat, ReprKind};
use crate::initializer::explicit_values;

/// Everything a run produces. Warnings go to stderr, the rest to stdout.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Output {
    pub stdout: String,
    pub warnings: Vec<String>,
}

/// A single lookup against the table. Serializes as its key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum Query {
    NameOf(i128),
    ValueOf(String),
    IndexOf(i128),
}

impl Query {
    fn kind(&self) -> &'static str {
        match self {
            Query::NameOf(_) => "name_of",
            Query::ValueOf(_) => "value_of",
            Query::IndexOf(_) => "index_of",
        }
    }

    pub fn from_args(args: &CliArgs) -> Option<Self> {
        if let Some(value) = args.name_of {
            Some(Query::NameOf(value))
        } else if let Some(name) = &args.value_of {
            Some(Query::ValueOf(name.clone()))
        } else {
            args.index_of.map(Query::IndexOf)
        }
    }
}

/// Run the command described by `args`.
pub fn run(args: &CliArgs) -> Result<Output> {
    let _span = info_span!("metaenum", repr = args.repr.name()).entered();

    let text = read_input(args)?;
    if args.segments {
        let stdout = render_segments(&text, args.format)?;
        return Ok(Output {
            stdout,
            warnings: Vec::new(),
        });
    }

    let table = build_table(&text, args.repr)?;
    let warnings = duplicate_warnings(&table);

    let stdout = match Query::from_args(args) {
        Some(query) => render_query(&table, &query, args.format)?,
        None => render_table(&table, args.repr, args.format)?,
    };
    Ok(Output { stdout, warnings })
}

/// Read the member list from `--text`, standard input (`-`) or a file.
pub fn read_input(args: &CliArgs) -> Result<String> {
    if let Some(text) = &args.text {
        return Ok(text.clone());
    }
    match args.input.as_deref() {
        None => bail!("no member list given; pass a file, `-` for standard input, or --text"),
        Some(path) if path == Path::new("-") => {
            let mut text = String::new();
            std::io::stdin()
                .read_to_string(&mut text)
                .context("failed to read standard input")?;
            Ok(text)
        }
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display())),
    }
}

/// Build the table for `text`, checking every value against `repr`.
pub fn build_table(text: &str, repr: ReprKind) -> Result<MetaEnumTable<'_, i128>> {
    let explicit = explicit_values(text)?;
    let values = resolve_values(&explicit);
    let table = MetaEnumTable::parse(text, &values).context("malformed member list")?;

    for member in table.members() {
        if !repr.contains(member.value) {
            bail!(
                "member {} resolves to {}, which does not fit in {}",
                member.name,
                member.value,
                repr.name()
            );
        }
    }

    debug!(members = table.size(), "built table from text");
    Ok(table)
}

/// Describe repeated names and values. Lookups resolve both to the first
/// declared member, which is rarely what the author meant.
pub fn duplicate_warnings(table: &MetaEnumTable<'_, i128>) -> Vec<String> {
    let mut warnings = Vec::new();
    let mut names: FxHashMap<&str, usize> = FxHashMap::default();
    let mut values: FxHashMap<i128, usize> = FxHashMap::default();

    for member in table.members() {
        if let Some(&first) = names.get(member.name) {
            warnings.push(format!(
                "member {} repeats the name `{}` of member {first}; lookups by name find member {first}",
                member.index, member.name
            ));
        } else {
            names.insert(member.name, member.index);
        }

        if let Some(&first) = values.get(&member.value) {
            warnings.push(format!(
                "member {} (`{}`) repeats the value {} of member {first}; lookups by value find member {first}",
                member.index, member.name, member.value
            ));
        } else {
            values.insert(member.value, member.index);
        }
    }

    warnings
}

#[derive(Serialize)]
struct TableReport<'t, 'a> {
    repr: &'static str,
    size: usize,
    #[serde(flatten)]
    table: &'t MetaEnumTable<'a, i128>,
}

/// Render the whole table.
pub fn render_table(
    table: &MetaEnumTable<'_, i128>,
    repr: ReprKind,
    format: OutputFormat,
) -> Result<String> {
    match format {
        OutputFormat::Json => {
            let report = TableReport {
                repr: repr.name(),
                size: table.size(),
                table,
            };
            let mut out = serde_json::to_string_pretty(&report)?;
            out.push('\n');
            Ok(out)
        }
        OutputFormat::Text => {
            let index_width = table.size().saturating_sub(1).to_string().len();
            let value_width = table
                .members()
                .iter()
                .map(|member| member.value.to_string().len())
                .max()
                .unwrap_or(0);

            let mut out = String::new();
            writeln!(out, "{} members, repr {}", table.size(), repr.name())?;
            for member in table.members() {
                writeln!(
                    out,
                    "  {:>index_width$}  {:>value_width$}  {}",
                    member.index, member.value, member.name
                )?;
            }
            Ok(out)
        }
    }
}

#[derive(Serialize)]
#[serde(untagged)]
enum Answer<'a> {
    Name(&'a str),
    Value(Option<i128>),
    Index(usize),
}

#[derive(Serialize)]
struct QueryReport<'q, 'a> {
    query: &'static str,
    key: &'q Query,
    result: Answer<'a>,
}

/// Render the answer to one lookup. Absent keys produce the table's
/// sentinel results, not errors.
pub fn render_query(
    table: &MetaEnumTable<'_, i128>,
    query: &Query,
    format: OutputFormat,
) -> Result<String> {
    let result = match query {
        Query::NameOf(value) => Answer::Name(table.name_of(*value)),
        Query::ValueOf(name) => Answer::Value(table.value_of(name)),
        Query::IndexOf(value) => Answer::Index(table.index_of(*value)),
    };

    match format {
        OutputFormat::Json => {
            let report = QueryReport {
                query: query.kind(),
                key: query,
                result,
            };
            let mut out = serde_json::to_string(&report)?;
            out.push('\n');
            Ok(out)
        }
        OutputFormat::Text => Ok(match result {
            Answer::Name(name) => format!("{name}\n"),
            Answer::Value(Some(value)) => format!("{value}\n"),
            Answer::Value(None) => "none\n".to_string(),
            Answer::Index(index) => format!("{index}\n"),
        }),
    }
}

#[derive(Serialize)]
struct SegmentReport<'a> {
    #[serde(flatten)]
    segment: Segment<'a>,
    name: Option<&'a str>,
}

/// Render the top-level segments of `text` and the name read from each.
///
/// Values are not resolved, so this works on lists whose initializers the
/// table builder would reject.
pub fn render_segments(text: &str, format: OutputFormat) -> Result<String> {
    let reports: Vec<SegmentReport<'_>> = segments(text)
        .take(count_members(text))
        .map(|segment| SegmentReport {
            segment,
            name: member_name(segment.text),
        })
        .collect();
    debug!(segments = reports.len(), "split member list");

    match format {
        OutputFormat::Json => {
            let mut out = serde_json::to_string_pretty(&reports)?;
            out.push('\n');
            Ok(out)
        }
        OutputFormat::Text => {
            let width = text.len().to_string().len();
            let mut out = String::new();
            writeln!(out, "{} segments", reports.len())?;
            for report in &reports {
                writeln!(
                    out,
                    "  {:>width$}..{:<width$}  {:<12}  {:?}",
                    report.segment.start,
                    report.segment.end,
                    report.name.unwrap_or("<none>"),
                    report.segment.text
                )?;
            }
            Ok(out)
        }
    }
}

#[cfg(test)]
#[path = "tests/driver_tests.rs"]
mod tests;
