//! `metaenum` - build and query the reflection table of a member list.

use std::io::{self, Write};

use anyhow::Result;
use clap::Parser;
use colored::Colorize;
use metaenum_cli::args::CliArgs;
use metaenum_cli::{driver, tracing_config};

fn main() -> Result<()> {
    let args = CliArgs::parse();
    // Logging stays off unless METAENUM_LOG, RUST_LOG or -v asks for it.
    tracing_config::init_tracing(args.verbose)?;

    let output = driver::run(&args)?;

    let mut stderr = io::stderr().lock();
    for warning in &output.warnings {
        writeln!(stderr, "{}: {warning}", "warning".yellow().bold())?;
    }

    let mut stdout = io::stdout().lock();
    stdout.write_all(output.stdout.as_bytes())?;
    stdout.flush()?;
    Ok(())
}
