//! Hierarchical issue tracking.
//!
//! Issues are collected in a tree of scopes: the root stands for the whole
//! run, its children for interfaces and their children for methods. Scopes
//! live in an arena and are looked up by `(parent, key)`, so entering the
//! same element twice under the same parent (once while resolving, once while
//! linking) lands in the same frame.
//!
//! A scope that is left without issues and without surviving children is
//! detached from its parent right away, which keeps the final report limited
//! to the elements that actually have problems.

use crate::diagnostics::IssueSeverity;
use rustc_hash::FxHashMap;
use serde::Serialize;
use std::fmt::Write as _;
use std::hash::Hash;
use std::io;

/// Index of a scope frame in the tracker arena.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ScopeId(pub u32);

impl ScopeId {
    /// The run-level scope.
    pub const ROOT: ScopeId = ScopeId(0);
}

#[derive(Debug, Clone)]
struct ScopeFrame<K> {
    key: Option<K>,
    label: Option<String>,
    parent: Option<ScopeId>,
    issues: Vec<String>,
    /// Attached children, in creation order.
    children: Vec<ScopeId>,
}

/// Receives every issue of a run together with its severity, e.g. a
/// compiler diagnostic surface or a terminal reporter.
pub trait IssueSink {
    fn report(&mut self, severity: IssueSeverity, message: &str, scope: Option<&str>);
}

/// One issue as seen by a sink.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReportedIssue {
    pub severity: IssueSeverity,
    pub message: String,
    pub scope: Option<String>,
}

/// Sink that keeps everything it receives.
#[derive(Debug, Default, Clone)]
pub struct CollectingSink {
    pub issues: Vec<ReportedIssue>,
}

impl IssueSink for CollectingSink {
    fn report(&mut self, severity: IssueSeverity, message: &str, scope: Option<&str>) {
        self.issues.push(ReportedIssue {
            severity,
            message: message.to_string(),
            scope: scope.map(str::to_string),
        });
    }
}

/// Tracks issues with bean definitions during processing.
#[derive(Debug, Clone)]
pub struct IssueTracker<K> {
    frames: Vec<ScopeFrame<K>>,
    lookup: FxHashMap<(ScopeId, K), ScopeId>,
    stack: Vec<ScopeId>,
    severity: IssueSeverity,
}

impl<K> IssueTracker<K>
where
    K: Copy + Eq + Hash,
{
    pub fn new(strict: bool) -> Self {
        IssueTracker {
            frames: vec![ScopeFrame {
                key: None,
                label: None,
                parent: None,
                issues: Vec::new(),
                children: Vec::new(),
            }],
            lookup: FxHashMap::default(),
            stack: vec![ScopeId::ROOT],
            severity: IssueSeverity::for_mode(strict),
        }
    }

    pub fn severity(&self) -> IssueSeverity {
        self.severity
    }

    /// The innermost open scope.
    pub fn current_scope(&self) -> ScopeId {
        self.stack.last().copied().unwrap_or(ScopeId::ROOT)
    }

    /// Number of currently open scopes below the root.
    pub fn depth(&self) -> usize {
        self.stack.len().saturating_sub(1)
    }

    /// Enter the scope of `key` below the current scope, reusing the frame
    /// created by an earlier visit of the same element.
    pub fn enter_scope(&mut self, key: K, label: impl Into<String>) -> ScopeId {
        let parent = self.current_scope();
        let id = match self.lookup.get(&(parent, key)) {
            Some(&existing) => existing,
            None => {
                let id = ScopeId(self.frames.len() as u32);
                self.frames.push(ScopeFrame {
                    key: Some(key),
                    label: Some(label.into()),
                    parent: Some(parent),
                    issues: Vec::new(),
                    children: Vec::new(),
                });
                self.frames[parent.0 as usize].children.push(id);
                self.lookup.insert((parent, key), id);
                id
            }
        };
        self.stack.push(id);
        id
    }

    /// Leave the current scope, pruning it when nothing was reported in it.
    pub fn leave_scope(&mut self) {
        debug_assert!(
            self.stack.len() > 1,
            "leave_scope without matching enter_scope"
        );
        if self.stack.len() <= 1 {
            return;
        }
        let Some(closed) = self.stack.pop() else {
            return;
        };
        let frame = &self.frames[closed.0 as usize];
        if !frame.issues.is_empty() || !frame.children.is_empty() {
            return;
        }
        let (Some(parent), Some(key)) = (frame.parent, frame.key) else {
            return;
        };
        self.frames[parent.0 as usize]
            .children
            .retain(|&child| child != closed);
        self.lookup.remove(&(parent, key));
    }

    /// Record an issue in the current scope.
    pub fn add_issue(&mut self, message: impl Into<String>) {
        let message = message.into();
        let scope = self.current_scope();
        tracing::warn!(
            scope = self.label(scope).unwrap_or("<run>"),
            "{message}"
        );
        self.frames[scope.0 as usize].issues.push(message);
    }

    /// Find the attached child of `parent` registered for `key`.
    pub fn child_scope(&self, parent: ScopeId, key: K) -> Option<ScopeId> {
        self.lookup.get(&(parent, key)).copied()
    }

    /// Follow a path of keys from the root.
    pub fn find_scope(&self, path: &[K]) -> Option<ScopeId> {
        path.iter()
            .try_fold(ScopeId::ROOT, |scope, &key| self.child_scope(scope, key))
    }

    /// Issues recorded directly in `scope` (not in its children).
    pub fn issues(&self, scope: ScopeId) -> &[String] {
        self.frames
            .get(scope.0 as usize)
            .map(|frame| frame.issues.as_slice())
            .unwrap_or(&[])
    }

    pub fn children(&self, scope: ScopeId) -> &[ScopeId] {
        self.frames
            .get(scope.0 as usize)
            .map(|frame| frame.children.as_slice())
            .unwrap_or(&[])
    }

    pub fn label(&self, scope: ScopeId) -> Option<&str> {
        self.frames
            .get(scope.0 as usize)
            .and_then(|frame| frame.label.as_deref())
    }

    /// Issues in `scope` and all of its attached descendants.
    pub fn issue_count(&self, scope: ScopeId) -> usize {
        let mut total = 0;
        let mut pending = vec![scope];
        while let Some(next) = pending.pop() {
            total += self.issues(next).len();
            pending.extend_from_slice(self.children(next));
        }
        total
    }

    pub fn total_issue_count(&self) -> usize {
        self.issue_count(ScopeId::ROOT)
    }

    pub fn has_issues(&self) -> bool {
        self.total_issue_count() > 0
    }

    /// Visit every attached scope depth-first with its nesting depth
    /// (root = 0).
    fn walk(&self, mut visit: impl FnMut(ScopeId, usize)) {
        let mut pending = vec![(ScopeId::ROOT, 0usize)];
        while let Some((scope, depth)) = pending.pop() {
            visit(scope, depth);
            for &child in self.children(scope).iter().rev() {
                pending.push((child, depth + 1));
            }
        }
    }

    /// Render the issue tree. Returns an empty string when there is nothing
    /// to report.
    pub fn render(&self) -> String {
        let total = self.total_issue_count();
        if total == 0 {
            return String::new();
        }
        let mut out = String::new();
        let _ = writeln!(
            out,
            "some issues were detected while generating bean classes [{total} issues]"
        );
        self.walk(|scope, depth| {
            // The root has no element line, its issues still sit one level in.
            if let Some(label) = self.label(scope) {
                let _ = writeln!(out, "{:depth$}in {label}", "");
            }
            let sub_indent = depth + 1;
            for issue in self.issues(scope) {
                let _ = writeln!(out, "{:sub_indent$}# {issue}", "");
            }
        });
        out
    }

    /// Hand every issue to `sink`, tagged with the run severity.
    pub fn report(&self, sink: &mut dyn IssueSink) {
        self.walk(|scope, _| {
            let label = self.label(scope);
            for issue in self.issues(scope) {
                sink.report(self.severity, issue, label);
            }
        });
    }

    /// Write the rendered tree to `out` and forward every issue to `sink`.
    pub fn print_issues(&self, out: &mut dyn io::Write, sink: &mut dyn IssueSink) -> io::Result<()> {
        let rendered = self.render();
        if rendered.is_empty() {
            return Ok(());
        }
        out.write_all(rendered.as_bytes())?;
        self.report(sink);
        Ok(())
    }
}

#[cfg(test)]
#[path = "../tests/issues_tests.rs"]
mod tests;
