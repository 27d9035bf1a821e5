//! Multi-round bean processor.
//!
//! The host delivers declarations in rounds. Each round's bean candidates
//! are resolved once and kept; linking and model building run a single time
//! over everything accumulated, when the host signals the last round.

use crate::builder::{BeanModelSet, ModelBuilder};
use crate::linker::InheritanceLinker;
use crate::model::InterfaceModel;
use crate::resolver::PropertyResolver;
use crate::scope::BeanIssueTracker;
use indexmap::IndexMap;
use nib_binder::{BoundRound, SymbolId, SymbolTable};
use nib_solver::TypeInterner;
use rustc_hash::FxHashSet;
use tracing::{debug, info, warn};

/// Which declarations to scan and how strictly issues are treated.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScanOptions {
    pub source_packages: Vec<String>,
    pub strict: bool,
}

pub struct BeanProcessor {
    packages: FxHashSet<String>,
    models: IndexMap<SymbolId, InterfaceModel>,
    seen: FxHashSet<SymbolId>,
    tracker: BeanIssueTracker,
    finished: bool,
}

impl BeanProcessor {
    pub fn new(options: &ScanOptions) -> Self {
        BeanProcessor {
            packages: options.source_packages.iter().cloned().collect(),
            models: IndexMap::new(),
            seen: FxHashSet::default(),
            tracker: BeanIssueTracker::new(options.strict),
            finished: false,
        }
    }

    pub fn tracker(&self) -> &BeanIssueTracker {
        &self.tracker
    }

    pub fn tracker_mut(&mut self) -> &mut BeanIssueTracker {
        &mut self.tracker
    }

    /// Models resolved so far, valid or not, in processing order.
    pub fn models(&self) -> impl Iterator<Item = &InterfaceModel> {
        self.models.values()
    }

    /// Resolve the bean candidates of one round. Returns `true` when at
    /// least one valid model was produced by this round.
    pub fn process_round(
        &mut self,
        symbols: &SymbolTable,
        types: &TypeInterner,
        round: &BoundRound,
    ) -> bool {
        if self.finished {
            warn!(round = round.index, "round delivered after processing finished");
            return false;
        }
        if round.error_raised {
            debug!(round = round.index, "skipping round with host errors");
            return false;
        }

        let mut claimed = false;
        let mut resolver = PropertyResolver::new(symbols, types, &mut self.tracker);
        for &symbol in &round.symbols {
            let Some(decl) = symbols.get(symbol) else {
                continue;
            };
            if !decl.bean || !self.packages.contains(&decl.package) {
                continue;
            }
            if !self.seen.insert(symbol) {
                continue;
            }
            if let Some(model) = resolver.resolve(symbol) {
                claimed |= model.valid;
                self.models.insert(symbol, model);
            }
        }
        debug!(round = round.index, claimed, "processed round");
        claimed
    }

    /// Link and build the accumulated models. Later calls return an empty
    /// set.
    pub fn finish(&mut self) -> BeanModelSet {
        if self.finished {
            return BeanModelSet::default();
        }
        self.finished = true;

        let mut models = std::mem::take(&mut self.models);
        InheritanceLinker::new(&mut self.tracker).link(&mut models);
        let set = ModelBuilder::build(models.into_values());
        debug_assert_eq!(self.tracker.depth(), 0, "issue scopes left open");
        info!(
            beans = set.len(),
            issues = self.tracker.total_issue_count(),
            "bean models ready"
        );
        set
    }
}

#[cfg(test)]
#[path = "../tests/processor_tests.rs"]
mod tests;
