//! Revision-aware collection of loaded modules.

use crate::types::Module;
use std::collections::BTreeMap;

/// A set of modules keyed by name, holding only the newest revision of each.
#[derive(Debug, Clone, Default)]
pub struct ModuleSet {
    modules: BTreeMap<String, Module>,
}

impl ModuleSet {
    /// Creates a new empty module set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a module.
    ///
    /// When a module with the same name is already present, the one with the
    /// newer current revision is kept. On a tie the existing module stays.
    /// Returns true if `module` was stored.
    pub fn add(&mut self, module: Module) -> bool {
        match self.modules.get(&module.name) {
            Some(existing) if module.current() <= existing.current() => false,
            _ => {
                self.modules.insert(module.name.clone(), module);
                true
            }
        }
    }

    /// Looks up a module by name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Module> {
        self.modules.get(name)
    }

    /// Iterates over the modules in name order.
    pub fn iter(&self) -> impl Iterator<Item = &Module> {
        self.modules.values()
    }

    /// Returns the number of modules.
    #[must_use]
    pub fn len(&self) -> usize {
        self.modules.len()
    }

    /// Returns true if the set is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.modules.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn module(name: &str, revisions: &[&str]) -> Module {
        let mut module = Module::new(name);
        module.revisions = revisions.iter().map(|r| r.to_string()).collect();
        module
    }

    #[test]
    fn test_newer_revision_replaces() {
        let mut set = ModuleSet::new();
        assert!(set.add(module("acme", &["2023-01-01"])));
        assert!(set.add(module("acme", &["2023-01-01", "2024-02-02"])));

        assert_eq!(set.len(), 1);
        assert_eq!(set.get("acme").and_then(Module::current), Some("2024-02-02"));
    }

    #[test]
    fn test_older_revision_ignored() {
        let mut set = ModuleSet::new();
        assert!(set.add(module("acme", &["2024-02-02"])));
        assert!(!set.add(module("acme", &["2023-01-01"])));
        assert!(!set.add(module("acme", &[])));

        assert_eq!(set.get("acme").and_then(Module::current), Some("2024-02-02"));
    }

    #[test]
    fn test_unrevisioned_replaced_by_revisioned() {
        let mut set = ModuleSet::new();
        assert!(set.add(module("acme", &[])));
        assert!(set.add(module("acme", &["2020-01-01"])));
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn test_iter_in_name_order() {
        let mut set = ModuleSet::new();
        set.add(module("zeta", &[]));
        set.add(module("alpha", &[]));

        let names: Vec<_> = set.iter().map(|m| m.name.as_str()).collect();
        assert_eq!(names, vec!["alpha", "zeta"]);
        assert!(!set.is_empty());
    }
}
