//! Variable inventory across many interpolations

use std::collections::{BTreeMap, BTreeSet, btree_map};

use confref_domain::Variable;

use super::interpolation::{Interpolation, ValueSource};

/// The deduplicated set of variables referenced by a group of interpolations,
/// keyed by canonical key.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VariableInventory {
    variables: BTreeMap<String, Variable>,
}

impl VariableInventory {
    /// Creates an empty inventory.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds every variable `interpolation` depends on.
    pub fn insert(&mut self, interpolation: &Interpolation) {
        self.variables.extend(interpolation.variables());
    }

    /// Returns the number of distinct variables.
    #[must_use]
    pub fn len(&self) -> usize {
        self.variables.len()
    }

    /// Returns true if no variables have been recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.variables.is_empty()
    }

    /// Returns true if a variable with `key` has been recorded.
    #[must_use]
    pub fn contains(&self, key: &str) -> bool {
        self.variables.contains_key(key)
    }

    /// Returns the variable recorded under `key`.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Variable> {
        self.variables.get(key)
    }

    /// Returns the canonical keys in sorted order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.variables.keys().map(String::as_str)
    }

    /// Returns the recorded variables in key order.
    pub fn iter(&self) -> btree_map::Values<'_, String, Variable> {
        self.variables.values()
    }

    /// Returns the names of the user variables referenced, whether read whole
    /// or through a map element.
    #[must_use]
    pub fn user_variable_names(&self) -> BTreeSet<&str> {
        self.iter().filter_map(Variable::user_variable_name).collect()
    }

    /// Returns the `type.name` identifiers of every referenced resource.
    #[must_use]
    pub fn resource_ids(&self) -> BTreeSet<String> {
        self.iter()
            .filter_map(Variable::resource)
            .map(confref_domain::ResourceVariable::resource_id)
            .collect()
    }

    /// Returns the keys that have no entry in `values`.
    #[must_use]
    pub fn missing<V: ValueSource + ?Sized>(&self, values: &V) -> Vec<&str> {
        self.keys().filter(|key| values.lookup(key).is_none()).collect()
    }
}

impl<'a> IntoIterator for &'a VariableInventory {
    type Item = &'a Variable;
    type IntoIter = btree_map::Values<'a, String, Variable>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a> FromIterator<&'a Interpolation> for VariableInventory {
    fn from_iter<I: IntoIterator<Item = &'a Interpolation>>(iter: I) -> Self {
        let mut inventory = Self::new();
        inventory.extend(iter);
        inventory
    }
}

impl<'a> Extend<&'a Interpolation> for VariableInventory {
    fn extend<I: IntoIterator<Item = &'a Interpolation>>(&mut self, iter: I) {
        for interpolation in iter {
            self.insert(interpolation);
        }
    }
}
