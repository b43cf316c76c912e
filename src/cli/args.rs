use clap::{Parser, ValueEnum};
use std::path::PathBuf;

use tsguard_classify::NodeShape;

/// CLI arguments for the tsguard binary.
#[derive(Parser, Debug)]
#[command(
    name = "tsguard",
    version,
    about = "Classify the nodes of a serialized TypeScript AST by syntactic shape"
)]
pub struct CliArgs {
    /// Serialized node arena (JSON). Use `-` to read from stdin.
    pub input: PathBuf,

    /// Output format for the report.
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Only report nodes matching this shape (repeatable).
    #[arg(long = "only", value_parser = parse_shape)]
    pub only: Vec<NodeShape>,

    /// Also list nodes that match no shape.
    #[arg(long)]
    pub all: bool,

    /// Print the number of nodes per shape after the report.
    #[arg(long)]
    pub summary: bool,

    /// Disable colored output.
    #[arg(long = "no-color")]
    pub no_color: bool,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

fn parse_shape(value: &str) -> Result<NodeShape, String> {
    value.parse()
}
