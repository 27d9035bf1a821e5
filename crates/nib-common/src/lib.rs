//! Common types and utilities for the nibeans bean generator.
//!
//! This crate provides foundational types used across all nib crates:
//! - String interning (`Atom`, `Interner`)
//! - Issue severities (`IssueSeverity`)
//! - The hierarchical issue tracker (`IssueTracker`, `IssueSink`)

// String interning for qualified names and property keys
pub mod interner;
pub use interner::{Atom, Interner};

// Severity of reported issues
pub mod diagnostics;
pub use diagnostics::IssueSeverity;

// Scoped, tree-shaped issue collection
pub mod issues;
pub use issues::{CollectingSink, IssueSink, IssueTracker, ReportedIssue, ScopeId};
