//! Type compatibility oracle.
//!
//! Compatibility is deliberately strict: two types are compatible only when
//! they are identical, or when one is a primitive and the other its box
//! class. There is no numeric widening and no subtyping, so generated
//! accessors stay type-exact.

use crate::intern::TypeInterner;
use crate::types::{PrimitiveKind, TypeData, TypeId};

/// Queries the property resolver needs from the host type system.
pub trait TypeCompatibility {
    /// Exact type identity.
    fn is_same_type(&self, a: TypeId, b: TypeId) -> bool;

    /// The primitive kind of `t` when `t` is itself primitive.
    fn primitive_kind(&self, t: TypeId) -> Option<PrimitiveKind>;

    /// The primitive kind of `t` when `t` is primitive or a box class.
    fn unboxed(&self, t: TypeId) -> Option<PrimitiveKind>;

    /// The box class type of `kind`.
    fn boxed(&self, kind: PrimitiveKind) -> TypeId;

    fn is_void(&self, t: TypeId) -> bool;

    fn is_primitive(&self, t: TypeId) -> bool {
        self.primitive_kind(t).is_some()
    }

    fn is_compatible(&self, a: TypeId, b: TypeId) -> bool {
        if self.is_same_type(a, b) {
            return true;
        }
        matches!(
            (self.unboxed(a), self.unboxed(b)),
            (Some(x), Some(y)) if x == y
        )
    }
}

impl TypeCompatibility for TypeInterner {
    fn is_same_type(&self, a: TypeId, b: TypeId) -> bool {
        a == b
    }

    fn primitive_kind(&self, t: TypeId) -> Option<PrimitiveKind> {
        match self.lookup(t)? {
            TypeData::Primitive(kind) => Some(*kind),
            _ => None,
        }
    }

    fn unboxed(&self, t: TypeId) -> Option<PrimitiveKind> {
        match self.lookup(t)? {
            TypeData::Primitive(kind) => Some(*kind),
            TypeData::Declared { name, args } if args.is_empty() => {
                PrimitiveKind::from_box_class(self.resolve_atom(*name))
            }
            _ => None,
        }
    }

    fn boxed(&self, kind: PrimitiveKind) -> TypeId {
        self.boxed_type(kind)
    }

    fn is_void(&self, t: TypeId) -> bool {
        t == TypeId::VOID
    }
}

/// Boxing dominance: a primitive value type gives way to the boxed type of
/// a compatible accessor, so the field still accepts `null`.
pub fn widen_for_boxing(oracle: &dyn TypeCompatibility, value: TypeId, accessor: TypeId) -> TypeId {
    if oracle.is_primitive(value) && !oracle.is_primitive(accessor) {
        accessor
    } else {
        value
    }
}

#[cfg(test)]
#[path = "../tests/compat_tests.rs"]
mod tests;
