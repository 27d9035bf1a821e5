//! Name interning for the type table.
//!
//! Qualified names such as `java.lang.String` repeat in every method
//! descriptor of a batch; the type table stores them as `Atom`s so declared
//! types compare by integer.

use rustc_hash::FxHashMap;
use serde::Serialize;
use std::sync::Arc;

/// Handle to an interned name. `Atom::NONE` is the empty name.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Default, PartialOrd, Ord)]
pub struct Atom(pub u32);

impl Atom {
    pub const NONE: Atom = Atom(0);

    #[inline]
    pub fn is_none(self) -> bool {
        self == Atom::NONE
    }
}

/// Box classes and collection roots seen in nearly every bean batch.
const JAVA_NAMES: &[&str] = &[
    "java.lang.Object",
    "java.lang.String",
    "java.lang.Boolean",
    "java.lang.Byte",
    "java.lang.Short",
    "java.lang.Character",
    "java.lang.Integer",
    "java.lang.Long",
    "java.lang.Float",
    "java.lang.Double",
    "java.util.List",
    "java.util.Map",
    "java.util.Set",
];

/// Append-only name table. Slot 0 always holds the empty name.
#[derive(Debug, Clone)]
pub struct Interner {
    atoms: FxHashMap<Arc<str>, Atom>,
    names: Vec<Arc<str>>,
}

impl Default for Interner {
    fn default() -> Self {
        Self::new()
    }
}

impl Interner {
    pub fn new() -> Self {
        let empty: Arc<str> = Arc::from("");
        let mut atoms = FxHashMap::default();
        atoms.insert(Arc::clone(&empty), Atom::NONE);
        Interner {
            atoms,
            names: vec![empty],
        }
    }

    pub fn intern(&mut self, name: &str) -> Atom {
        if let Some(&atom) = self.atoms.get(name) {
            return atom;
        }
        let atom = Atom(self.names.len() as u32);
        let shared: Arc<str> = Arc::from(name);
        self.names.push(Arc::clone(&shared));
        self.atoms.insert(shared, atom);
        atom
    }

    /// Atom of `name` if it was interned before.
    pub fn get(&self, name: &str) -> Option<Atom> {
        self.atoms.get(name).copied()
    }

    /// Name of `atom`; unknown atoms resolve to the empty name.
    pub fn resolve(&self, atom: Atom) -> &str {
        self.try_resolve(atom).unwrap_or_default()
    }

    pub fn try_resolve(&self, atom: Atom) -> Option<&str> {
        self.names.get(atom.0 as usize).map(|name| &**name)
    }

    /// Number of names, the empty name included.
    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.len() == 1
    }

    pub fn intern_java_names(&mut self) {
        for name in JAVA_NAMES {
            self.intern(name);
        }
    }
}

#[cfg(test)]
#[path = "../tests/interner_tests.rs"]
mod tests;
