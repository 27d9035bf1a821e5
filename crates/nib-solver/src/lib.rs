//! Type table and type compatibility for bean property inference.
//!
//! - `TypeData` / `TypeId`: interned structural type descriptors; two types
//!   are identical exactly when their ids are equal
//! - `TypeInterner`: the type table, with primitives and their box classes
//!   pre-registered
//! - `TypeCompatibility`: the oracle answering exact-match and
//!   boxed/unboxed-equivalence queries
//! - `TypeFormatter`: renders types as source text
mod compat;
mod format;
mod intern;
pub mod types;

pub use compat::{TypeCompatibility, widen_for_boxing};
pub use format::TypeFormatter;
pub use intern::TypeInterner;
pub use types::{PrimitiveKind, TypeData, TypeId};
