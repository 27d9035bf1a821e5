use anyhow::{Context, Result, bail};
use std::path::{Path, PathBuf};
use tracing::{debug, info, info_span};

use crate::binder::{BinderState, SourceRound};
use crate::checker::BeanProcessor;
use crate::cli::args::CliArgs;
use crate::cli::config::{RunConfig, resolve_run_config};
use crate::common::{CollectingSink, ReportedIssue};
use crate::emitter::{EmitOutput, Emitter};
use crate::solver::TypeInterner;

/// Outcome of one generator run.
#[derive(Debug, Default)]
pub struct GenerationResult {
    pub issues: Vec<ReportedIssue>,
    /// The issue tree as printed to the user, empty when there are none.
    pub rendered_issues: String,
    /// Beans in the emitted container; zero when nothing was emitted.
    pub bean_count: usize,
    pub written_files: Vec<PathBuf>,
    /// Generated files, also kept when they were not written (`--dry-run`).
    pub output: Option<EmitOutput>,
    pub strict: bool,
}

impl GenerationResult {
    pub fn has_errors(&self) -> bool {
        self.issues.iter().any(|issue| issue.severity.is_error())
    }
}

pub fn generate(args: &CliArgs, cwd: &Path) -> Result<GenerationResult> {
    let config = resolve_run_config(args, cwd)?;
    generate_with_config(&config)
}

pub fn generate_with_config(config: &RunConfig) -> Result<GenerationResult> {
    if config.inputs.is_empty() {
        bail!("no declaration files given");
    }
    let options = &config.options;
    let _span = info_span!("generate", container = %options.target.qualified_name()).entered();

    let mut types = TypeInterner::new();
    let mut binder = BinderState::new();
    let mut processor = BeanProcessor::new(&options.scan_options());

    for input in &config.inputs {
        let text = std::fs::read_to_string(input)
            .with_context(|| format!("failed to read declarations {}", input.display()))?;
        let source = SourceRound::from_json(&text)
            .with_context(|| format!("failed to parse declarations {}", input.display()))?;
        let round = binder
            .bind_round(&mut types, &source)
            .with_context(|| format!("failed to bind declarations {}", input.display()))?;
        let claimed = processor.process_round(binder.symbols(), &types, &round);
        debug!(input = %input.display(), round = round.index, claimed, "round done");
    }

    let beans = processor.finish();
    let mut result = GenerationResult {
        strict: options.strict,
        ..GenerationResult::default()
    };

    let blocked = options.strict && processor.tracker().has_issues();
    if !blocked && !beans.is_empty() {
        let emitted = Emitter::new(&types, &options.target)
            .emit(&beans)
            .and_then(|output| {
                if !config.dry_run {
                    result.written_files = output.write_to(&config.out_dir)?;
                }
                Ok(output)
            });
        match emitted {
            Ok(output) => {
                result.bean_count = beans.len();
                result.output = Some(output);
            }
            // Emission and write failures are run-level issues.
            Err(err) => processor.tracker_mut().add_issue(err.to_string()),
        }
    }

    let tracker = processor.tracker();
    let mut rendered = Vec::new();
    let mut sink = CollectingSink::default();
    tracker
        .print_issues(&mut rendered, &mut sink)
        .context("failed to render issues")?;
    result.rendered_issues = String::from_utf8_lossy(&rendered).into_owned();
    result.issues = sink.issues;

    info!(
        beans = result.bean_count,
        issues = result.issues.len(),
        written = result.written_files.len(),
        "generation finished"
    );
    Ok(result)
}
