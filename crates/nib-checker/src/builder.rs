//! Final assembly of the valid bean models.

use crate::model::{InterfaceModel, Property};
use nib_binder::SymbolId;
use rustc_hash::FxHashMap;
use std::collections::BTreeMap;

/// Valid, linked bean models ordered by qualified name.
#[derive(Debug, Clone, Default)]
pub struct BeanModelSet {
    models: Vec<InterfaceModel>,
    index: FxHashMap<SymbolId, usize>,
}

impl BeanModelSet {
    pub fn len(&self) -> usize {
        self.models.len()
    }

    pub fn is_empty(&self) -> bool {
        self.models.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &InterfaceModel> {
        self.models.iter()
    }

    pub fn get(&self, symbol: SymbolId) -> Option<&InterfaceModel> {
        self.index.get(&symbol).map(|&i| &self.models[i])
    }

    pub fn find(&self, qualified_name: &str) -> Option<&InterfaceModel> {
        self.models
            .binary_search_by(|m| m.qualified_name.as_str().cmp(qualified_name))
            .ok()
            .map(|i| &self.models[i])
    }

    pub fn base_of(&self, model: &InterfaceModel) -> Option<&InterfaceModel> {
        model.resolved_base.and_then(|base| self.get(base))
    }

    /// `model` followed by its bases, nearest first.
    pub fn inheritance_chain<'s>(
        &'s self,
        model: &'s InterfaceModel,
    ) -> impl Iterator<Item = &'s InterfaceModel> + 's {
        std::iter::successors(Some(model), move |current| self.base_of(current))
            .take(self.models.len().max(1))
    }

    /// Own and inherited properties by name. Properties declared closer to
    /// `model` replace same-named ones of its bases.
    pub fn all_properties<'s>(&'s self, model: &'s InterfaceModel) -> Vec<&'s Property> {
        let chain: Vec<&InterfaceModel> = self.inheritance_chain(model).collect();
        let mut merged: BTreeMap<&str, &Property> = BTreeMap::new();
        for ancestor in chain.iter().rev() {
            for (name, property) in &ancestor.properties {
                merged.insert(name.as_str(), property);
            }
        }
        merged.into_values().collect()
    }
}

impl<'s> IntoIterator for &'s BeanModelSet {
    type Item = &'s InterfaceModel;
    type IntoIter = std::slice::Iter<'s, InterfaceModel>;

    fn into_iter(self) -> Self::IntoIter {
        self.models.iter()
    }
}

pub struct ModelBuilder;

impl ModelBuilder {
    /// Keep the valid models and order them by qualified name.
    pub fn build(models: impl IntoIterator<Item = InterfaceModel>) -> BeanModelSet {
        let mut models: Vec<InterfaceModel> = models.into_iter().filter(|m| m.valid).collect();
        models.sort_by(|a, b| a.qualified_name.cmp(&b.qualified_name));
        let index = models
            .iter()
            .enumerate()
            .map(|(i, m)| (m.symbol, i))
            .collect();
        BeanModelSet { models, index }
    }
}

#[cfg(test)]
#[path = "../tests/builder_tests.rs"]
mod tests;
