use anyhow::Result;
use clap::Parser;
use std::io::Write;

use tsguard::cli::args::CliArgs;
use tsguard::cli::{self, EXIT_SUCCESS};

fn main() -> Result<()> {
    // Initialize tracing if TSGUARD_LOG or RUST_LOG is set (zero cost otherwise).
    // Supports TSGUARD_LOG_FORMAT=tree|json|text (see src/tracing_config.rs).
    tsguard::tracing_config::init_tracing();

    let args = CliArgs::parse();

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    let status = cli::run(&args, &mut out)?;
    out.flush()?;

    if status != EXIT_SUCCESS {
        std::process::exit(status);
    }
    Ok(())
}
