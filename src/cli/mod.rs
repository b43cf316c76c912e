//! Native CLI support for the tsguard binary.

pub mod args;
pub mod report;

use anyhow::{Context, Result};
use std::io::{Read, Write};
use std::path::Path;
use tracing::info_span;

use args::{CliArgs, OutputFormat};
use report::{ReportOptions, build_report, load_arena, render_json, render_text};

/// Every node was usable.
pub const EXIT_SUCCESS: i32 = 0;
/// At least one raw node was malformed and skipped.
pub const EXIT_MALFORMED_NODES: i32 = 1;

/// Load, classify and report. Returns the process exit status.
pub fn run(args: &CliArgs, out: &mut impl Write) -> Result<i32> {
    let _span = info_span!("run", input = %args.input.display()).entered();

    if args.no_color {
        colored::control::set_override(false);
    }

    let source = read_input(&args.input)?;
    let value: serde_json::Value = serde_json::from_str(&source)
        .with_context(|| format!("{} is not valid JSON", args.input.display()))?;
    let loaded = load_arena(value)
        .with_context(|| format!("failed to load node arena from {}", args.input.display()))?;

    let options = ReportOptions {
        only: args.only.clone(),
        include_unmatched: args.all,
    };
    let report = build_report(&loaded, &options);

    match args.format {
        OutputFormat::Text => render_text(&report, out, args.summary)?,
        OutputFormat::Json => render_json(&report, out)?,
    }

    Ok(if report.malformed.is_empty() {
        EXIT_SUCCESS
    } else {
        EXIT_MALFORMED_NODES
    })
}

fn read_input(path: &Path) -> Result<String> {
    if path.as_os_str() == "-" {
        let mut buf = String::new();
        std::io::stdin()
            .read_to_string(&mut buf)
            .context("failed to read stdin")?;
        return Ok(buf);
    }
    std::fs::read_to_string(path).with_context(|| format!("failed to read {}", path.display()))
}

#[cfg(test)]
#[path = "tests/args_tests.rs"]
mod args_tests;
#[cfg(test)]
#[path = "tests/report_tests.rs"]
mod report_tests;
