//! Tracing configuration for the `tsguard` binary.
//!
//! Supports three output formats controlled by `TSGUARD_LOG_FORMAT`:
//!
//! - `text` (default): Standard `tracing-subscriber` flat output
//! - `tree`: Hierarchical indented output via `tracing-tree`
//! - `json`: One JSON object per span/event
//!
//! ```bash
//! # Why was node 17 reported as malformed?
//! TSGUARD_LOG=trace TSGUARD_LOG_FORMAT=tree tsguard tree.json
//!
//! # Only the raw-node guard
//! TSGUARD_LOG="tsguard_classify::node_guard=trace" tsguard tree.json
//! ```
//!
//! The subscriber is only initialised when `TSGUARD_LOG` (or `RUST_LOG`) is
//! set. All output goes to stderr so it never mixes with the report.

use tracing_subscriber::prelude::*;
use tracing_subscriber::{EnvFilter, Registry, fmt};
use tracing_tree::HierarchicalLayer;

/// Tracing output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    /// Standard flat text lines (default).
    Text,
    /// Hierarchical indented tree via `tracing-tree`.
    Tree,
    /// Newline-delimited JSON objects.
    Json,
}

impl LogFormat {
    /// Parse a `TSGUARD_LOG_FORMAT` value. Unknown values mean text.
    pub fn parse(value: &str) -> Self {
        match value.trim() {
            v if v.eq_ignore_ascii_case("tree") => Self::Tree,
            v if v.eq_ignore_ascii_case("json") => Self::Json,
            _ => Self::Text,
        }
    }

    fn from_env() -> Self {
        Self::parse(&std::env::var("TSGUARD_LOG_FORMAT").unwrap_or_default())
    }
}

const LOG_ENV: &str = "TSGUARD_LOG";

/// Filter from `TSGUARD_LOG`, or `RUST_LOG` when only that is set.
/// `None` means logging stays off.
fn env_filter() -> Option<EnvFilter> {
    match std::env::var(LOG_ENV) {
        Ok(directives) => Some(EnvFilter::builder().parse_lossy(directives)),
        Err(_) if std::env::var_os(EnvFilter::DEFAULT_ENV).is_some() => {
            Some(EnvFilter::from_default_env())
        }
        Err(_) => None,
    }
}

/// Install the global subscriber for the format named by
/// `TSGUARD_LOG_FORMAT`. A second call leaves the first subscriber in place.
pub fn init_tracing() {
    let Some(filter) = env_filter() else {
        return;
    };
    let registry = Registry::default().with(filter);

    let installed = match LogFormat::from_env() {
        LogFormat::Tree => registry
            .with(
                HierarchicalLayer::new(2)
                    .with_writer(std::io::stderr)
                    .with_indent_lines(true)
                    .with_targets(true),
            )
            .try_init(),
        LogFormat::Json => registry
            .with(fmt::layer().json().with_writer(std::io::stderr))
            .try_init(),
        LogFormat::Text => registry
            .with(fmt::layer().with_writer(std::io::stderr))
            .try_init(),
    };
    if installed.is_err() {
        tracing::debug!("tracing subscriber already installed");
    }
}

#[cfg(test)]
#[path = "tests/tracing_config_tests.rs"]
mod tracing_config_tests;
