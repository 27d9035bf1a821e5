//! Declaration binder for the nibeans bean generator.
//!
//! The host compiler's element model is supplied as JSON, one document per
//! processing round. The binder turns each round into symbol-table entries
//! (`InterfaceDecl`) whose parameter, return and base types are interned in
//! the shared `TypeInterner`.

pub mod binder;
pub mod source;
pub mod symbols;
mod type_ref;

pub use binder::{BindError, BinderState, BoundRound};
pub use source::{DeclKind, DeclarationSource, MethodSource, SourceRound};
pub use symbols::{InterfaceDecl, MethodDescriptor, SymbolId, SymbolTable, split_qualified_name};
pub use type_ref::{TypeRefError, parse_type_ref};
