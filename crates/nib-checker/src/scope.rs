use nib_binder::SymbolId;
use nib_common::IssueTracker;

/// Structural element an issue scope is keyed by.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ScopeElement {
    Interface(SymbolId),
    /// A method of an interface, by declaration index.
    Method(SymbolId, u32),
}

pub type BeanIssueTracker = IssueTracker<ScopeElement>;
