use colored::Colorize;

use crate::cli::driver::GenerationResult;
use crate::common::IssueSeverity;

/// Formats a run's issue tree and summary for the terminal.
pub struct Reporter {
    color: bool,
}

impl Reporter {
    pub fn new(color: bool) -> Self {
        Reporter { color }
    }

    /// Issue tree followed by a one-line summary.
    pub fn render(&self, result: &GenerationResult) -> String {
        let severity = IssueSeverity::for_mode(result.strict);
        let mut out = String::new();
        for line in result.rendered_issues.lines() {
            out.push_str(&self.format_line(line, severity));
            out.push('\n');
        }
        out.push_str(&self.summary(result, severity));
        out.push('\n');
        out
    }

    fn format_line(&self, line: &str, severity: IssueSeverity) -> String {
        if !self.color {
            return line.to_string();
        }
        let body = line.trim_start();
        let indent = &line[..line.len() - body.len()];
        if let Some(issue) = body.strip_prefix("# ") {
            let marker = match severity {
                IssueSeverity::Error => "#".red().bold(),
                IssueSeverity::Warning => "#".yellow().bold(),
            };
            format!("{indent}{marker} {issue}")
        } else if let Some(element) = body.strip_prefix("in ") {
            format!("{indent}{} {}", "in".dimmed(), element.cyan())
        } else {
            format!("{indent}{}", body.bold())
        }
    }

    fn summary(&self, result: &GenerationResult, severity: IssueSeverity) -> String {
        let issues = result.issues.len();
        let mut text = format!(
            "{} bean{} generated",
            result.bean_count,
            if result.bean_count == 1 { "" } else { "s" }
        );
        if issues > 0 {
            text.push_str(&format!(
                ", {issues} {severity}{}",
                if issues == 1 { "" } else { "s" }
            ));
        }
        if !self.color {
            return text;
        }
        match (issues, severity) {
            (0, _) => text.green().to_string(),
            (_, IssueSeverity::Error) => text.red().to_string(),
            (_, IssueSeverity::Warning) => text.yellow().to_string(),
        }
    }
}
