#![allow(clippy::print_stderr, clippy::print_stdout)]

use anyhow::{Context, Result};
use clap::Parser;
use std::io::IsTerminal;

use nibeans::cli::args::CliArgs;
use nibeans::cli::{driver, reporter::Reporter};

const EXIT_SUCCESS: i32 = 0;
const EXIT_ISSUES_AS_ERRORS: i32 = 1;

fn main() -> Result<()> {
    // Supports NIBEANS_LOG_FORMAT=tree|json|text (see src/tracing_config.rs).
    nibeans::tracing_config::init_tracing();

    let args = CliArgs::parse();
    let cwd = std::env::current_dir().context("failed to resolve current directory")?;

    let result = driver::generate(&args, &cwd)?;

    if let Some(output) = result.output.as_ref().filter(|_| args.dry_run) {
        println!("// {}", output.source_path.display());
        print!("{}", output.source);
        println!("// {}", output.manifest_path.display());
        print!("{}", output.manifest);
    }

    let pretty = args.pretty.unwrap_or_else(|| std::io::stderr().is_terminal());
    eprint!("{}", Reporter::new(pretty).render(&result));
    for path in &result.written_files {
        eprintln!("wrote {}", path.display());
    }

    let status = if result.has_errors() {
        EXIT_ISSUES_AS_ERRORS
    } else {
        EXIT_SUCCESS
    };
    std::process::exit(status);
}
