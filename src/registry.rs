//! Name-keyed registries for distributions and quantile methods.
//!
//! The registry is an explicitly constructed value with no global mutable
//! state: front-ends build one with `Registry::with_builtins()` and pass it
//! wherever name resolution is needed. Insertion order is preserved so
//! listings are reproducible.

use crate::error::{Error, Result};
use crate::models::Family;
use crate::quantiles::QuantileMethod;

#[derive(Debug, Clone, Default)]
pub struct Registry {
    distributions: Vec<(String, Family)>,
    methods: Vec<(String, QuantileMethod)>,
}

impl Registry {
    pub fn new() -> Self {
        Self::default()
    }

    /// A registry populated with the nine built-in families and the four
    /// plotting-position methods, keyed by their canonical labels.
    pub fn with_builtins() -> Self {
        let mut registry = Self::new();
        for family in Family::ALL {
            registry.register_distribution(family.label(), family);
        }
        for method in QuantileMethod::ALL {
            registry.register_method(method.key(), method);
        }
        registry
    }

    /// Register `family` under `name`. A duplicate name shadows the earlier
    /// entry for lookup but keeps its original listing position.
    pub fn register_distribution(&mut self, name: impl Into<String>, family: Family) {
        let name = name.into();
        if let Some(entry) = self.distributions.iter_mut().find(|(n, _)| *n == name) {
            entry.1 = family;
        } else {
            self.distributions.push((name, family));
        }
    }

    pub fn register_method(&mut self, name: impl Into<String>, method: QuantileMethod) {
        let name = name.into();
        if let Some(entry) = self.methods.iter_mut().find(|(n, _)| *n == name) {
            entry.1 = method;
        } else {
            self.methods.push((name, method));
        }
    }

    /// Resolve a distribution name.
    pub fn distribution(&self, name: &str) -> Result<Family> {
        self.distributions
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, f)| *f)
            .ok_or_else(|| Error::UnknownKey {
                kind: "distribution",
                name: name.to_string(),
            })
    }

    /// Resolve a quantile-method name.
    pub fn method(&self, name: &str) -> Result<QuantileMethod> {
        self.methods
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, m)| *m)
            .ok_or_else(|| Error::UnknownKey {
                kind: "quantile method",
                name: name.to_string(),
            })
    }

    /// Registered distribution names, in insertion order.
    pub fn distribution_names(&self) -> Vec<&str> {
        self.distributions.iter().map(|(n, _)| n.as_str()).collect()
    }

    /// Registered quantile-method names, in insertion order.
    pub fn method_names(&self) -> Vec<&str> {
        self.methods.iter().map(|(n, _)| n.as_str()).collect()
    }
}
