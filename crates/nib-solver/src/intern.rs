//! Type interning.
//!
//! Every `TypeData` is stored once and addressed by `TypeId`, so exact type
//! equality is an integer comparison. `void`, the primitives and their box
//! classes are registered up front.

use crate::types::{PrimitiveKind, TypeData, TypeId};
use nib_common::{Atom, Interner};
use rustc_hash::FxHashMap;
use smallvec::SmallVec;

/// The type table of one run.
#[derive(Debug, Clone)]
pub struct TypeInterner {
    names: Interner,
    types: Vec<TypeData>,
    map: FxHashMap<TypeData, TypeId>,
    /// Box class type per `PrimitiveKind`, in `PrimitiveKind::ALL` order.
    boxes: [TypeId; 8],
}

impl Default for TypeInterner {
    fn default() -> Self {
        Self::new()
    }
}

impl TypeInterner {
    pub fn new() -> Self {
        let mut names = Interner::new();
        names.intern_java_names();
        let mut interner = TypeInterner {
            names,
            types: Vec::with_capacity(64),
            map: FxHashMap::default(),
            boxes: [TypeId::VOID; 8],
        };

        interner.intern(TypeData::Void);
        for kind in PrimitiveKind::ALL {
            let id = interner.intern(TypeData::Primitive(kind));
            debug_assert_eq!(id, kind.type_id());
        }
        for (slot, kind) in PrimitiveKind::ALL.into_iter().enumerate() {
            interner.boxes[slot] = interner.declared(kind.box_class(), Vec::new());
        }
        interner
    }

    /// Intern a type, returning the existing id for a structurally equal one.
    pub fn intern(&mut self, data: TypeData) -> TypeId {
        if let Some(&id) = self.map.get(&data) {
            return id;
        }
        let id = TypeId(self.types.len() as u32);
        self.types.push(data.clone());
        self.map.insert(data, id);
        id
    }

    pub fn lookup(&self, id: TypeId) -> Option<&TypeData> {
        self.types.get(id.0 as usize)
    }

    pub fn resolve_atom(&self, atom: Atom) -> &str {
        self.names.resolve(atom)
    }

    pub fn void(&self) -> TypeId {
        TypeId::VOID
    }

    pub fn primitive(&self, kind: PrimitiveKind) -> TypeId {
        kind.type_id()
    }

    pub fn declared(&mut self, name: &str, args: Vec<TypeId>) -> TypeId {
        let name = self.names.intern(name);
        self.intern(TypeData::Declared {
            name,
            args: SmallVec::from_vec(args),
        })
    }

    pub fn array(&mut self, element: TypeId) -> TypeId {
        self.intern(TypeData::Array(element))
    }

    pub fn type_parameter(&mut self, name: &str) -> TypeId {
        let name = self.names.intern(name);
        self.intern(TypeData::TypeParameter(name))
    }

    /// The declared box class type of `kind`.
    pub fn boxed_type(&self, kind: PrimitiveKind) -> TypeId {
        self.boxes[kind as usize]
    }

    /// Qualified name of a declared type.
    pub fn declared_name(&self, id: TypeId) -> Option<&str> {
        match self.lookup(id)? {
            TypeData::Declared { name, .. } => Some(self.resolve_atom(*name)),
            _ => None,
        }
    }

    /// Number of interned types, intrinsics included.
    pub fn len(&self) -> usize {
        self.types.len()
    }

    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }
}

#[cfg(test)]
#[path = "../tests/intern_tests.rs"]
mod tests;
