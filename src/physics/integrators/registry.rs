//! Name-based integrator lookup
//!
//! Integrators are self-describing (name, aliases, order); the registry
//! indexes instances by every name they answer to and hands out boxed
//! clones. All integrators are zero-sized, so a clone is just a fresh
//! `Box` allocation.

use super::{Integrator, VelocityVerlet, Yoshida4};
use std::collections::HashMap;

/// Registry mapping names and aliases to integrator instances.
pub struct IntegratorRegistry {
    integrators: HashMap<String, Box<dyn Integrator>>,
}

impl IntegratorRegistry {
    /// An empty registry.
    pub fn new() -> Self {
        Self {
            integrators: HashMap::new(),
        }
    }

    /// Register the integrators that ship with the crate.
    pub fn with_standard_integrators(mut self) -> Self {
        self.register(Box::new(VelocityVerlet));
        self.register(Box::new(Yoshida4));
        self
    }

    pub fn register(&mut self, integrator: Box<dyn Integrator>) {
        for alias in integrator.aliases() {
            self.integrators
                .insert((*alias).to_string(), integrator.clone_box());
        }
        self.integrators
            .insert(integrator.name().to_string(), integrator);
    }

    /// Instantiate by canonical name or alias.
    pub fn create(&self, name: &str) -> Result<Box<dyn Integrator>, String> {
        self.integrators
            .get(name)
            .map(|integrator| integrator.clone_box())
            .ok_or_else(|| {
                format!(
                    "unknown integrator '{}'; available: {}",
                    name,
                    self.list_available().join(", ")
                )
            })
    }

    /// Sorted canonical names (aliases excluded).
    pub fn list_available(&self) -> Vec<String> {
        let mut names: Vec<String> = self
            .integrators
            .iter()
            .filter(|(key, integrator)| key.as_str() == integrator.name())
            .map(|(key, _)| key.clone())
            .collect();
        names.sort();
        names
    }

    /// Sorted `(alias, canonical)` pairs.
    pub fn list_aliases(&self) -> Vec<(String, String)> {
        let mut aliases: Vec<(String, String)> = self
            .integrators
            .iter()
            .filter(|(key, integrator)| key.as_str() != integrator.name())
            .map(|(key, integrator)| (key.clone(), integrator.name().to_string()))
            .collect();
        aliases.sort();
        aliases
    }
}

impl Default for IntegratorRegistry {
    fn default() -> Self {
        Self::new().with_standard_integrators()
    }
}
