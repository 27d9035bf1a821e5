//! Single-inheritance linking between bean interfaces.
//!
//! An interface stays valid only when its whole base chain consists of
//! valid, generated bean interfaces. Chains are walked iteratively with a
//! memo of decided outcomes and an explicit path, so a cycle is detected
//! instead of recursing forever.

use crate::model::{BaseRef, InterfaceModel};
use crate::scope::{BeanIssueTracker, ScopeElement};
use indexmap::IndexMap;
use nib_binder::SymbolId;
use rustc_hash::FxHashMap;
use tracing::debug;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LinkOutcome {
    Valid { base: Option<SymbolId> },
    /// The interface itself failed resolution.
    Unresolved,
    /// The named base is missing or not a valid bean.
    InvalidBase(String),
    /// The interface lies on an inheritance cycle through the named base.
    Cycle(String),
}

impl LinkOutcome {
    pub fn is_valid(&self) -> bool {
        matches!(self, LinkOutcome::Valid { .. })
    }

    fn issue(&self) -> Option<String> {
        match self {
            LinkOutcome::InvalidBase(base) => {
                Some(format!("base interface {base} is not a generated bean"))
            }
            LinkOutcome::Cycle(base) => {
                Some(format!("cyclic inheritance detected through {base}"))
            }
            LinkOutcome::Valid { .. } | LinkOutcome::Unresolved => None,
        }
    }
}

pub struct InheritanceLinker<'a> {
    tracker: &'a mut BeanIssueTracker,
    outcomes: FxHashMap<SymbolId, LinkOutcome>,
}

impl<'a> InheritanceLinker<'a> {
    pub fn new(tracker: &'a mut BeanIssueTracker) -> Self {
        InheritanceLinker {
            tracker,
            outcomes: FxHashMap::default(),
        }
    }

    #[cfg(test)]
    pub(crate) fn outcome(&self, symbol: SymbolId) -> Option<&LinkOutcome> {
        self.outcomes.get(&symbol)
    }

    /// Validate every model's base chain, set `resolved_base` on the valid
    /// ones and invalidate the rest. Issues are recorded in qualified-name
    /// order, each in the scope of the interface it concerns.
    pub fn link(&mut self, models: &mut IndexMap<SymbolId, InterfaceModel>) {
        let mut order: Vec<SymbolId> = models.keys().copied().collect();
        order.sort_by(|a, b| models[a].qualified_name.cmp(&models[b].qualified_name));
        {
            let by_name: FxHashMap<&str, SymbolId> = models
                .values()
                .map(|model| (model.qualified_name.as_str(), model.symbol))
                .collect();
            for &symbol in &order {
                self.validate(symbol, models, &by_name);
            }
        }

        for &symbol in &order {
            let Some(model) = models.get_mut(&symbol) else {
                continue;
            };
            match self.outcomes.get(&symbol) {
                Some(LinkOutcome::Valid { base }) => model.resolved_base = *base,
                Some(outcome) => {
                    model.valid = false;
                    model.resolved_base = None;
                    if let Some(message) = outcome.issue() {
                        self.tracker.enter_scope(
                            ScopeElement::Interface(symbol),
                            model.qualified_name.clone(),
                        );
                        self.tracker.add_issue(message);
                        self.tracker.leave_scope();
                    }
                }
                None => {}
            }
        }
        debug!(
            models = models.len(),
            valid = models.values().filter(|m| m.valid).count(),
            "linked bean interfaces"
        );
    }

    fn validate(
        &mut self,
        start: SymbolId,
        models: &IndexMap<SymbolId, InterfaceModel>,
        by_name: &FxHashMap<&str, SymbolId>,
    ) -> bool {
        // (interface, its base) pairs whose outcome is still open.
        let mut path: Vec<(SymbolId, SymbolId)> = Vec::new();
        let mut current = start;
        let mut cycle_start = None;
        loop {
            if self.outcomes.contains_key(&current) {
                break;
            }
            if let Some(pos) = path.iter().position(|&(id, _)| id == current) {
                cycle_start = Some(pos);
                break;
            }
            let Some(model) = models.get(&current) else {
                break;
            };
            if !model.valid {
                self.outcomes.insert(current, LinkOutcome::Unresolved);
                break;
            }
            let Some(base) = &model.base else {
                self.outcomes
                    .insert(current, LinkOutcome::Valid { base: None });
                break;
            };
            match find_base(base, models, by_name) {
                Some(base_symbol) => {
                    path.push((current, base_symbol));
                    current = base_symbol;
                }
                None => {
                    self.outcomes.insert(
                        current,
                        LinkOutcome::InvalidBase(base.qualified_name.clone()),
                    );
                    break;
                }
            }
        }

        if let Some(pos) = cycle_start {
            for &(member, base_symbol) in &path[pos..] {
                let base_name = models
                    .get(&base_symbol)
                    .map(|m| m.qualified_name.clone())
                    .unwrap_or_default();
                self.outcomes.insert(member, LinkOutcome::Cycle(base_name));
            }
            path.truncate(pos);
        }

        for &(symbol, base_symbol) in path.iter().rev() {
            let base_valid = self
                .outcomes
                .get(&base_symbol)
                .is_some_and(LinkOutcome::is_valid);
            let outcome = if base_valid {
                LinkOutcome::Valid {
                    base: Some(base_symbol),
                }
            } else {
                let base_name = models
                    .get(&base_symbol)
                    .map(|m| m.qualified_name.clone())
                    .unwrap_or_default();
                LinkOutcome::InvalidBase(base_name)
            };
            self.outcomes.insert(symbol, outcome);
        }

        self.outcomes
            .get(&start)
            .is_some_and(LinkOutcome::is_valid)
    }
}

/// The processed model a base reference points at, by symbol when the base
/// was bound and by qualified name otherwise.
fn find_base(
    base: &BaseRef,
    models: &IndexMap<SymbolId, InterfaceModel>,
    by_name: &FxHashMap<&str, SymbolId>,
) -> Option<SymbolId> {
    base.symbol
        .filter(|symbol| models.contains_key(symbol))
        .or_else(|| by_name.get(base.qualified_name.as_str()).copied())
}

#[cfg(test)]
#[path = "../tests/linker_tests.rs"]
mod tests;
