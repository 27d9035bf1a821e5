//! Bean property and interface models.

use nib_binder::{InterfaceDecl, SymbolId};
use nib_solver::TypeId;
use std::collections::BTreeMap;

/// Accessor role slot on a property.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum AccessorKind {
    Getter,
    BooleanGetter,
    Setter,
    ChainSetter,
}

impl AccessorKind {
    pub fn label(self) -> &'static str {
        match self {
            AccessorKind::Getter => "getter",
            AccessorKind::BooleanGetter => "boolean getter",
            AccessorKind::Setter => "setter",
            AccessorKind::ChainSetter => "chain setter",
        }
    }

    pub fn is_getter(self) -> bool {
        matches!(self, AccessorKind::Getter | AccessorKind::BooleanGetter)
    }

    /// Setters give way to the boxed type; getters never widen the value.
    pub fn widens_value_type(self) -> bool {
        !self.is_getter()
    }
}

/// A method playing one accessor role.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Accessor {
    pub name: String,
    /// Index of the method in its declaration.
    pub method_index: u32,
    /// Return type for getters, parameter type for setters.
    pub ty: TypeId,
    /// Returns the declaring interface's own type.
    pub returns_self: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Property {
    pub name: String,
    /// Field type; boxed when any setter takes the boxed form.
    pub value_type: TypeId,
    pub getter: Option<Accessor>,
    pub boolean_getter: Option<Accessor>,
    pub setter: Option<Accessor>,
    pub chain_setter: Option<Accessor>,
    /// Number of accessor roles attached so far.
    pub role_count: u32,
}

impl Property {
    pub fn new(name: impl Into<String>, value_type: TypeId) -> Self {
        Property {
            name: name.into(),
            value_type,
            getter: None,
            boolean_getter: None,
            setter: None,
            chain_setter: None,
            role_count: 0,
        }
    }

    pub fn slot(&self, kind: AccessorKind) -> Option<&Accessor> {
        match kind {
            AccessorKind::Getter => self.getter.as_ref(),
            AccessorKind::BooleanGetter => self.boolean_getter.as_ref(),
            AccessorKind::Setter => self.setter.as_ref(),
            AccessorKind::ChainSetter => self.chain_setter.as_ref(),
        }
    }

    pub fn slot_mut(&mut self, kind: AccessorKind) -> &mut Option<Accessor> {
        match kind {
            AccessorKind::Getter => &mut self.getter,
            AccessorKind::BooleanGetter => &mut self.boolean_getter,
            AccessorKind::Setter => &mut self.setter,
            AccessorKind::ChainSetter => &mut self.chain_setter,
        }
    }

    pub fn has_getter(&self) -> bool {
        self.getter.is_some() || self.boolean_getter.is_some()
    }

    pub fn has_setter(&self) -> bool {
        self.setter.is_some() || self.chain_setter.is_some()
    }

    /// At least one getter role and one setter role.
    pub fn is_complete(&self) -> bool {
        self.has_getter() && self.has_setter()
    }

    /// What a complete property still lacks, if anything.
    pub fn missing_role(&self) -> Option<&'static str> {
        match (self.has_getter(), self.has_setter()) {
            (true, true) => None,
            (false, _) => Some("getter"),
            (true, false) => Some("setter"),
        }
    }

    /// Attached accessors in role order.
    pub fn accessors(&self) -> impl Iterator<Item = (AccessorKind, &Accessor)> {
        [
            AccessorKind::Getter,
            AccessorKind::BooleanGetter,
            AccessorKind::Setter,
            AccessorKind::ChainSetter,
        ]
        .into_iter()
        .filter_map(|kind| self.slot(kind).map(|accessor| (kind, accessor)))
    }
}

/// Declared base interface of a model.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BaseRef {
    pub qualified_name: String,
    /// Symbol of the base when it is declared in the processed sources.
    pub symbol: Option<SymbolId>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InterfaceModel {
    pub symbol: SymbolId,
    pub qualified_name: String,
    pub package: String,
    pub simple_name: String,
    pub declared_type: TypeId,
    pub base: Option<BaseRef>,
    /// Own properties, ordered by name.
    pub properties: BTreeMap<String, Property>,
    pub valid: bool,
    /// Set by the linker once the base resolves to a valid model.
    pub resolved_base: Option<SymbolId>,
}

impl InterfaceModel {
    pub fn new(decl: &InterfaceDecl, base: Option<BaseRef>) -> Self {
        InterfaceModel {
            symbol: decl.id,
            qualified_name: decl.qualified_name.clone(),
            package: decl.package.clone(),
            simple_name: decl.simple_name.clone(),
            declared_type: decl.declared_type,
            base,
            properties: BTreeMap::new(),
            valid: true,
            resolved_base: None,
        }
    }

    pub fn property(&self, name: &str) -> Option<&Property> {
        self.properties.get(name)
    }

    /// Name of the generated implementation class.
    pub fn impl_class_name(&self) -> String {
        format!("{}_impl", self.simple_name)
    }
}
