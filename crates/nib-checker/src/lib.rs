//! Bean property inference and validation.
//!
//! This crate is organized into several modules:
//! - `classify` - pure method-name classification
//! - `model` - `Property` and `InterfaceModel`
//! - `resolver` - per-interface method-to-property matching
//! - `linker` - cross-interface single-inheritance resolution
//! - `builder` - ordering of the valid models into a `BeanModelSet`
//! - `processor` - multi-round driver over the passes above
//!
//! Data flows one way: resolver → linker → builder. Problems never abort a
//! run; they are recorded in a `BeanIssueTracker` and the offending
//! interface is left out of the result.

pub mod builder;
pub mod classify;
pub mod linker;
pub mod model;
pub mod processor;
pub mod resolver;
pub mod scope;

pub use builder::{BeanModelSet, ModelBuilder};
pub use classify::{MethodKind, classify_method_name};
pub use linker::{InheritanceLinker, LinkOutcome};
pub use model::{Accessor, AccessorKind, BaseRef, InterfaceModel, Property};
pub use processor::{BeanProcessor, ScanOptions};
pub use resolver::PropertyResolver;
pub use scope::{BeanIssueTracker, ScopeElement};

#[cfg(test)]
#[path = "../tests/test_fixtures.rs"]
pub(crate) mod test_fixtures;
