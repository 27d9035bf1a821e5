//! Symbol table: every declaration seen so far, across rounds.

use crate::source::DeclKind;
use nib_solver::TypeId;
use rustc_hash::FxHashMap;
use serde::Serialize;
use smallvec::SmallVec;

/// Handle to a declaration in the symbol table.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct SymbolId(pub u32);

/// A directly declared method.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MethodDescriptor {
    pub name: String,
    pub params: SmallVec<[TypeId; 2]>,
    pub return_type: TypeId,
    /// Declares its own type parameters (`<T> T get()`).
    pub has_type_params: bool,
}

#[derive(Debug, Clone)]
pub struct InterfaceDecl {
    pub id: SymbolId,
    pub qualified_name: String,
    pub package: String,
    pub simple_name: String,
    pub kind: DeclKind,
    pub type_params: Vec<String>,
    /// Direct base types in declaration order.
    pub bases: Vec<TypeId>,
    pub methods: Vec<MethodDescriptor>,
    /// The declaration's own type, used for self-returning setters.
    pub declared_type: TypeId,
    pub bean: bool,
    /// Round in which the declaration was bound (0-based).
    pub round: u32,
}

impl InterfaceDecl {
    pub fn is_interface(&self) -> bool {
        self.kind == DeclKind::Interface
    }
}

#[derive(Debug, Clone, Default)]
pub struct SymbolTable {
    decls: Vec<InterfaceDecl>,
    by_name: FxHashMap<String, SymbolId>,
}

impl SymbolTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn insert(&mut self, mut decl: InterfaceDecl) -> SymbolId {
        let id = SymbolId(self.decls.len() as u32);
        decl.id = id;
        self.by_name.insert(decl.qualified_name.clone(), id);
        self.decls.push(decl);
        id
    }

    pub fn get(&self, id: SymbolId) -> Option<&InterfaceDecl> {
        self.decls.get(id.0 as usize)
    }

    pub fn lookup(&self, qualified_name: &str) -> Option<SymbolId> {
        self.by_name.get(qualified_name).copied()
    }

    pub fn contains(&self, qualified_name: &str) -> bool {
        self.by_name.contains_key(qualified_name)
    }

    pub fn iter(&self) -> impl Iterator<Item = &InterfaceDecl> {
        self.decls.iter()
    }

    pub fn len(&self) -> usize {
        self.decls.len()
    }

    pub fn is_empty(&self) -> bool {
        self.decls.is_empty()
    }
}

/// Split `a.b.C` into (`a.b`, `C`). A name without a dot lives in the
/// unnamed package.
pub fn split_qualified_name(name: &str) -> (&str, &str) {
    match name.rfind('.') {
        Some(dot) => (&name[..dot], &name[dot + 1..]),
        None => ("", name),
    }
}
