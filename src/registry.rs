//! Runtime provider registry.
//!
//! Every generated container registers one provider per bean interface. The
//! registry is an ordinary value built from an explicit list of providers;
//! there is no process-wide instance.

use rustc_hash::FxHashMap;
use std::any::Any;
use tracing::warn;

/// Creates instances of the implementation of one bean interface.
pub trait BeanProvider {
    /// Qualified name of the implemented bean interface.
    fn bean_interface(&self) -> &str;

    fn create_instance(&self) -> Box<dyn Any>;
}

#[derive(Default)]
pub struct ProviderRegistry {
    providers: Vec<Box<dyn BeanProvider>>,
    by_interface: FxHashMap<String, usize>,
}

impl ProviderRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_providers(providers: impl IntoIterator<Item = Box<dyn BeanProvider>>) -> Self {
        let mut registry = Self::new();
        for provider in providers {
            registry.register(provider);
        }
        registry
    }

    /// Register `provider`. The first provider of an interface wins; later
    /// ones and providers without an interface name are ignored.
    pub fn register(&mut self, provider: Box<dyn BeanProvider>) -> bool {
        let interface = provider.bean_interface();
        if interface.is_empty() {
            warn!("ignoring bean provider without a bean interface");
            return false;
        }
        if self.by_interface.contains_key(interface) {
            warn!(
                interface,
                "ignoring bean provider, the interface is already provided"
            );
            return false;
        }
        self.by_interface
            .insert(interface.to_string(), self.providers.len());
        self.providers.push(provider);
        true
    }

    pub fn provider(&self, interface: &str) -> Option<&dyn BeanProvider> {
        self.by_interface
            .get(interface)
            .and_then(|&index| self.providers.get(index))
            .map(|provider| provider.as_ref())
    }

    /// A new instance of the implementation of `interface`, or `None` when
    /// nothing provides it or the instance is not a `T`.
    pub fn create_bean<T: Any>(&self, interface: &str) -> Option<Box<T>> {
        self.provider(interface)?
            .create_instance()
            .downcast::<T>()
            .ok()
    }

    /// Accepted providers in registration order.
    pub fn providers(&self) -> impl Iterator<Item = &dyn BeanProvider> {
        self.providers.iter().map(|provider| provider.as_ref())
    }

    pub fn len(&self) -> usize {
        self.providers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.providers.is_empty()
    }
}

#[cfg(test)]
#[path = "tests/registry_tests.rs"]
mod tests;
