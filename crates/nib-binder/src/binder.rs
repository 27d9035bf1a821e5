//! Binds JSON declaration rounds into the symbol table.

use crate::source::{DeclarationSource, SourceRound};
use crate::symbols::{InterfaceDecl, MethodDescriptor, SymbolId, SymbolTable, split_qualified_name};
use crate::type_ref::{TypeRefError, parse_type_ref};
use nib_solver::{TypeId, TypeInterner};
use smallvec::SmallVec;
use thiserror::Error;
use tracing::debug;

#[derive(Debug, Error)]
pub enum BindError {
    #[error("invalid type `{text}` in {context}: {source}")]
    InvalidType {
        text: String,
        context: String,
        #[source]
        source: TypeRefError,
    },

    #[error("declaration `{0}` is declared more than once")]
    DuplicateDeclaration(String),

    #[error("invalid declaration name `{0}`")]
    InvalidName(String),
}

/// Declarations bound by one round.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BoundRound {
    pub index: u32,
    pub symbols: Vec<SymbolId>,
    pub error_raised: bool,
}

#[derive(Debug, Default)]
pub struct BinderState {
    symbols: SymbolTable,
    rounds: u32,
}

impl BinderState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn symbols(&self) -> &SymbolTable {
        &self.symbols
    }

    pub fn rounds_bound(&self) -> u32 {
        self.rounds
    }

    /// Bind one round. Nothing is added to the table when any declaration of
    /// the round fails to bind.
    pub fn bind_round(
        &mut self,
        types: &mut TypeInterner,
        round: &SourceRound,
    ) -> Result<BoundRound, BindError> {
        let index = self.rounds;
        let mut pending = Vec::with_capacity(round.declarations.len());
        for source in &round.declarations {
            if self.symbols.contains(&source.name)
                || pending
                    .iter()
                    .any(|decl: &InterfaceDecl| decl.qualified_name == source.name)
            {
                return Err(BindError::DuplicateDeclaration(source.name.clone()));
            }
            pending.push(bind_declaration(types, source, index)?);
        }

        let symbols = pending
            .into_iter()
            .map(|decl| self.symbols.insert(decl))
            .collect::<Vec<_>>();
        debug!(
            round = index,
            declarations = symbols.len(),
            "bound declaration round"
        );
        self.rounds += 1;
        Ok(BoundRound {
            index,
            symbols,
            error_raised: round.error_raised,
        })
    }
}

fn is_valid_name(name: &str) -> bool {
    !name.is_empty()
        && name.split('.').all(|part| {
            let mut chars = part.chars();
            matches!(chars.next(), Some(c) if c.is_alphabetic() || c == '_' || c == '$')
                && chars.all(|c| c.is_alphanumeric() || c == '_' || c == '$')
        })
}

fn bind_declaration(
    types: &mut TypeInterner,
    source: &DeclarationSource,
    round: u32,
) -> Result<InterfaceDecl, BindError> {
    if !is_valid_name(&source.name) {
        return Err(BindError::InvalidName(source.name.clone()));
    }
    let (package, simple_name) = split_qualified_name(&source.name);
    let scope: Vec<&str> = source.type_parameters.iter().map(String::as_str).collect();

    let parse = |types: &mut TypeInterner, text: &str, scope: &[&str], context: &str| {
        parse_type_ref(types, text, scope).map_err(|source| BindError::InvalidType {
            text: text.to_string(),
            context: context.to_string(),
            source,
        })
    };

    let declared_args = scope
        .iter()
        .map(|param| types.type_parameter(param))
        .collect::<Vec<TypeId>>();
    let declared_type = types.declared(&source.name, declared_args);

    let bases = source
        .bases
        .iter()
        .map(|base| parse(types, base, &scope, &source.name))
        .collect::<Result<Vec<_>, _>>()?;

    let mut methods = Vec::with_capacity(source.methods.len());
    for method in &source.methods {
        let context = format!("{}.{}", source.name, method.name);
        let mut method_scope = scope.clone();
        method_scope.extend(method.type_parameters.iter().map(String::as_str));
        let params = method
            .parameters
            .iter()
            .map(|param| parse(types, param, &method_scope, &context))
            .collect::<Result<SmallVec<[TypeId; 2]>, _>>()?;
        let return_type = parse(types, &method.returns, &method_scope, &context)?;
        methods.push(MethodDescriptor {
            name: method.name.clone(),
            params,
            return_type,
            has_type_params: !method.type_parameters.is_empty(),
        });
    }

    Ok(InterfaceDecl {
        id: SymbolId(u32::MAX),
        qualified_name: source.name.clone(),
        package: package.to_string(),
        simple_name: simple_name.to_string(),
        kind: source.kind,
        type_params: source.type_parameters.clone(),
        bases,
        methods,
        declared_type,
        bean: source.bean,
        round,
    })
}

#[cfg(test)]
#[path = "../tests/binder_tests.rs"]
mod tests;
