//! Log setup for the `nibeans` binary.
//!
//! Nothing is installed unless `NIBEANS_LOG` (or, failing that, `RUST_LOG`)
//! holds a filter directive. `NIBEANS_LOG_FORMAT` picks the output:
//!
//! - `text` (default): flat `tracing-subscriber` lines
//! - `tree`: nested spans via `tracing-tree`
//! - `json`: one object per event
//!
//! ```bash
//! NIBEANS_LOG=nib_checker=trace NIBEANS_LOG_FORMAT=tree nibeans -c nibeans.json round1.json
//! ```

use tracing_subscriber::prelude::*;
use tracing_subscriber::{EnvFilter, Registry, fmt};

const LOG_VAR: &str = "NIBEANS_LOG";
const LOG_FORMAT_VAR: &str = "NIBEANS_LOG_FORMAT";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    Text,
    Tree,
    Json,
}

impl LogFormat {
    /// Unknown names fall back to `Text`.
    pub fn parse(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "tree" => LogFormat::Tree,
            "json" => LogFormat::Json,
            _ => LogFormat::Text,
        }
    }
}

/// Filter directive from the environment, `NIBEANS_LOG` first.
fn log_directive() -> Option<String> {
    std::env::var(LOG_VAR)
        .or_else(|_| std::env::var(EnvFilter::DEFAULT_ENV))
        .ok()
}

/// Install the global subscriber. Everything is written to stderr so
/// `--dry-run` output on stdout stays clean.
pub fn init_tracing() {
    let Some(directive) = log_directive() else {
        return;
    };
    let filter = EnvFilter::builder().parse_lossy(directive);
    let format = LogFormat::parse(&std::env::var(LOG_FORMAT_VAR).unwrap_or_default());

    let registry = Registry::default().with(filter);
    match format {
        LogFormat::Tree => registry
            .with(
                tracing_tree::HierarchicalLayer::default()
                    .with_indent_amount(2)
                    .with_indent_lines(true)
                    .with_deferred_spans(true)
                    .with_targets(true),
            )
            .init(),
        LogFormat::Json => registry
            .with(fmt::layer().json().with_writer(std::io::stderr))
            .init(),
        LogFormat::Text => registry
            .with(fmt::layer().with_writer(std::io::stderr))
            .init(),
    }
}
