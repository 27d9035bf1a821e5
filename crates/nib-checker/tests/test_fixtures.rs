//! Shared helpers for checker tests: bind JSON declarations into a symbol
//! table and type table.

use crate::model::InterfaceModel;
use crate::resolver::PropertyResolver;
use crate::scope::BeanIssueTracker;
use nib_binder::{BinderState, BoundRound, SourceRound, SymbolId};
use nib_common::CollectingSink;
use nib_solver::TypeInterner;

pub(crate) struct Fixture {
    pub binder: BinderState,
    pub types: TypeInterner,
    pub rounds: Vec<BoundRound>,
}

impl Fixture {
    pub fn new() -> Self {
        Fixture {
            binder: BinderState::new(),
            types: TypeInterner::new(),
            rounds: Vec::new(),
        }
    }

    /// Bind one round given as a JSON array of declarations.
    pub fn round(mut self, declarations: &str) -> Self {
        let json = format!(r#"{{ "declarations": {declarations} }}"#);
        let source = SourceRound::from_json(&json).expect("fixture JSON should parse");
        let round = self
            .binder
            .bind_round(&mut self.types, &source)
            .expect("fixture round should bind");
        self.rounds.push(round);
        self
    }

    pub fn symbol(&self, name: &str) -> SymbolId {
        self.binder
            .symbols()
            .lookup(name)
            .unwrap_or_else(|| panic!("`{name}` should be bound"))
    }
}

impl Fixture {
    /// Resolve one interface with a fresh lenient tracker.
    pub fn resolve(&self, name: &str) -> (Option<InterfaceModel>, BeanIssueTracker) {
        let mut tracker = BeanIssueTracker::new(false);
        let model = PropertyResolver::new(self.binder.symbols(), &self.types, &mut tracker)
            .resolve(self.symbol(name));
        (model, tracker)
    }
}

/// Every issue message of `tracker`, depth-first.
pub(crate) fn messages(tracker: &BeanIssueTracker) -> Vec<String> {
    let mut sink = CollectingSink::default();
    tracker.report(&mut sink);
    sink.issues.into_iter().map(|issue| issue.message).collect()
}

pub(crate) const CAR: &str = r#"[
  {
    "name": "org.nibeans.example.Car",
    "methods": [
      { "name": "getMake", "returns": "java.lang.String" },
      { "name": "setMake", "parameters": ["java.lang.String"] },
      { "name": "withMake", "parameters": ["java.lang.String"], "returns": "org.nibeans.example.Car" },
      { "name": "isAutomatic", "returns": "boolean" },
      { "name": "setAutomatic", "parameters": ["java.lang.Boolean"] }
    ]
  }
]"#;
