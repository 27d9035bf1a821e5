//! Property resolution for a single interface.
//!
//! Every directly declared method is classified by name, its signature is
//! checked against the role, and it is attached to the property of that
//! name. A property's value type is fixed by the first accessor seen; later
//! accessors must be compatible with it, and setters may widen a primitive
//! value type to its box class.
//!
//! A failing method does not stop resolution: all methods are visited so
//! that every problem of an interface is reported in one pass.

use crate::classify::{MethodKind, classify_method_name};
use crate::model::{Accessor, AccessorKind, BaseRef, InterfaceModel, Property};
use crate::scope::{BeanIssueTracker, ScopeElement};
use nib_binder::{InterfaceDecl, MethodDescriptor, SymbolId, SymbolTable};
use nib_solver::{
    PrimitiveKind, TypeCompatibility, TypeFormatter, TypeId, TypeInterner, widen_for_boxing,
};
use tracing::{debug, trace};

pub struct PropertyResolver<'a> {
    symbols: &'a SymbolTable,
    types: &'a TypeInterner,
    oracle: &'a dyn TypeCompatibility,
    tracker: &'a mut BeanIssueTracker,
}

impl<'a> PropertyResolver<'a> {
    pub fn new(
        symbols: &'a SymbolTable,
        types: &'a TypeInterner,
        tracker: &'a mut BeanIssueTracker,
    ) -> Self {
        PropertyResolver {
            symbols,
            types,
            oracle: types,
            tracker,
        }
    }

    /// Use a different compatibility oracle than the type table itself.
    pub fn with_oracle(mut self, oracle: &'a dyn TypeCompatibility) -> Self {
        self.oracle = oracle;
        self
    }

    /// Resolve one interface inside its own issue scope.
    ///
    /// Returns `None` when the declaration cannot be a bean interface at
    /// all. A returned model with `valid == false` had method-level or
    /// completeness problems.
    pub fn resolve(&mut self, symbol: SymbolId) -> Option<InterfaceModel> {
        let symbols = self.symbols;
        let decl = symbols.get(symbol)?;
        self.tracker
            .enter_scope(ScopeElement::Interface(symbol), decl.qualified_name.clone());
        let model = self.resolve_declaration(decl);
        self.tracker.leave_scope();
        model
    }

    fn resolve_declaration(&mut self, decl: &InterfaceDecl) -> Option<InterfaceModel> {
        if !decl.is_interface() {
            self.tracker.add_issue("not an interface type");
            return None;
        }
        if decl.bases.len() > 1 {
            self.tracker.add_issue("there is more than one base interface");
            return None;
        }
        if !decl.type_params.is_empty() {
            self.tracker.add_issue("there are generic type arguments");
            return None;
        }
        let base = match decl.bases.first() {
            Some(&base_type) => Some(self.resolve_base(base_type)?),
            None => None,
        };

        let mut model = InterfaceModel::new(decl, base);
        let formatter = TypeFormatter::new(self.types);
        let mut good = true;
        for (index, method) in decl.methods.iter().enumerate() {
            let index = index as u32;
            let label = formatter.format_signature(&method.name, &method.params);
            self.tracker
                .enter_scope(ScopeElement::Method(decl.id, index), label.clone());
            good &= self.resolve_method(decl, index, method, &label, &mut model);
            self.tracker.leave_scope();
        }

        for property in model.properties.values() {
            if let Some(missing) = property.missing_role() {
                self.tracker.add_issue(format!(
                    "incomplete bean property `{}`: missing {missing}",
                    property.name
                ));
                good = false;
            }
        }

        model.valid = good;
        debug!(
            interface = %model.qualified_name,
            properties = model.properties.len(),
            valid = good,
            "resolved bean interface"
        );
        Some(model)
    }

    fn resolve_base(&mut self, base_type: TypeId) -> Option<BaseRef> {
        let (types, symbols) = (self.types, self.symbols);
        let Some(name) = types.declared_name(base_type) else {
            let text = TypeFormatter::new(types).format(base_type);
            self.tracker
                .add_issue(format!("base type {text} is not an interface"));
            return None;
        };
        let symbol = symbols.lookup(name);
        if let Some(decl) = symbol.and_then(|id| symbols.get(id))
            && !decl.is_interface()
        {
            self.tracker
                .add_issue(format!("base type {name} is not an interface"));
            return None;
        }
        Some(BaseRef {
            qualified_name: name.to_string(),
            symbol,
        })
    }

    fn resolve_method(
        &mut self,
        decl: &InterfaceDecl,
        index: u32,
        method: &MethodDescriptor,
        label: &str,
        model: &mut InterfaceModel,
    ) -> bool {
        if method.has_type_params {
            self.tracker
                .add_issue("there are member-level generic type arguments");
            return false;
        }
        let kind = classify_method_name(&method.name);
        trace!(method = %method.name, ?kind, "classified method");

        let oracle = self.oracle;
        match kind {
            MethodKind::Getter(property) => {
                if !method.params.is_empty() || oracle.is_void(method.return_type) {
                    self.tracker.add_issue("unsupported getter signature");
                    return false;
                }
                let accessor = self.accessor(index, method, method.return_type, false);
                self.attach(decl, model, property, AccessorKind::Getter, accessor)
            }
            MethodKind::BooleanGetter(property) => {
                if oracle.unboxed(method.return_type) != Some(PrimitiveKind::Boolean) {
                    let text = TypeFormatter::new(self.types).format(method.return_type);
                    self.tracker
                        .add_issue(format!("non-boolean return type {text}"));
                    return false;
                }
                if !method.params.is_empty() {
                    self.tracker.add_issue("unsupported getter signature");
                    return false;
                }
                let accessor = self.accessor(index, method, method.return_type, false);
                self.attach(decl, model, property, AccessorKind::BooleanGetter, accessor)
            }
            MethodKind::Setter(property) => {
                let returns_self = oracle.is_same_type(method.return_type, decl.declared_type);
                let Some(param) = self.single_value_param(method) else {
                    self.tracker.add_issue("unsupported setter signature");
                    return false;
                };
                if !oracle.is_void(method.return_type) && !returns_self {
                    self.tracker.add_issue("unsupported setter signature");
                    return false;
                }
                let accessor = self.accessor(index, method, param, returns_self);
                self.attach(decl, model, property, AccessorKind::Setter, accessor)
            }
            MethodKind::ChainSetter(property) => {
                let Some(param) = self.single_value_param(method) else {
                    self.tracker.add_issue("unsupported chain setter signature");
                    return false;
                };
                if !oracle.is_same_type(method.return_type, decl.declared_type) {
                    self.tracker.add_issue("unsupported chain setter signature");
                    return false;
                }
                let accessor = self.accessor(index, method, param, true);
                self.attach(decl, model, property, AccessorKind::ChainSetter, accessor)
            }
            MethodKind::Unsupported => {
                self.tracker.add_issue(format!("unsupported method {label}"));
                false
            }
        }
    }

    fn single_value_param(&self, method: &MethodDescriptor) -> Option<TypeId> {
        match method.params.as_slice() {
            [param] if !self.oracle.is_void(*param) => Some(*param),
            _ => None,
        }
    }

    fn accessor(
        &self,
        index: u32,
        method: &MethodDescriptor,
        ty: TypeId,
        returns_self: bool,
    ) -> Accessor {
        Accessor {
            name: method.name.clone(),
            method_index: index,
            ty,
            returns_self,
        }
    }

    /// Attach `accessor` to the property named `name`, creating it when
    /// this is the first accessor seen for it.
    fn attach(
        &mut self,
        decl: &InterfaceDecl,
        model: &mut InterfaceModel,
        name: String,
        kind: AccessorKind,
        accessor: Accessor,
    ) -> bool {
        let Some(property) = model.properties.get_mut(&name) else {
            let mut property = Property::new(name.clone(), accessor.ty);
            *property.slot_mut(kind) = Some(accessor);
            property.role_count = 1;
            model.properties.insert(name, property);
            return true;
        };

        if let Some(existing) = property.slot(kind) {
            let existing = self.describe(decl, existing);
            self.tracker.add_issue(format!(
                "conflict with already defined {} {existing}",
                kind.label()
            ));
            return false;
        }
        if !self.oracle.is_compatible(property.value_type, accessor.ty) {
            let formatter = TypeFormatter::new(self.types);
            self.tracker.add_issue(format!(
                "{} type {} isn't compatible with {}",
                kind.label(),
                formatter.format(accessor.ty),
                formatter.format(property.value_type)
            ));
            return false;
        }

        if kind.widens_value_type() {
            property.value_type = widen_for_boxing(self.oracle, property.value_type, accessor.ty);
        }
        *property.slot_mut(kind) = Some(accessor);
        property.role_count += 1;
        true
    }

    fn describe(&self, decl: &InterfaceDecl, accessor: &Accessor) -> String {
        let params = decl
            .methods
            .get(accessor.method_index as usize)
            .map(|method| method.params.as_slice())
            .unwrap_or_default();
        TypeFormatter::new(self.types).format_signature(&accessor.name, params)
    }
}

#[cfg(test)]
#[path = "../tests/resolver_tests.rs"]
mod tests;
