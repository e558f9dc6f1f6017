//! Reference resolution engine
//!
//! Resolves many interpolations against one value source, collecting the
//! outcome of each instead of stopping at the first missing value.

use confref_domain::ReferenceResult;
use tracing::debug;

use super::factory::new_interpolation;
use super::interpolation::{Interpolation, ValueSource};

/// A reference that was resolved to a value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedReference {
    /// Canonical reference text.
    pub key: String,
    /// The resolved value.
    pub value: String,
}

impl ResolvedReference {
    /// Creates a new resolved reference.
    #[must_use]
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }
}

/// Outcome of resolving a batch of interpolations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolutionReport {
    /// References that resolved, in input order.
    pub resolved: Vec<ResolvedReference>,

    /// Keys that had no value, in input order.
    pub unresolved: Vec<String>,

    /// Whether every reference resolved.
    pub is_complete: bool,
}

impl ResolutionReport {
    /// Returns the count of resolved references.
    #[must_use]
    pub fn resolved_count(&self) -> usize {
        self.resolved.len()
    }

    /// Returns the count of unresolved references.
    #[must_use]
    pub fn unresolved_count(&self) -> usize {
        self.unresolved.len()
    }

    /// Returns the resolved value for `key`, if it was resolved.
    #[must_use]
    pub fn value_of(&self, key: &str) -> Option<&str> {
        self.resolved
            .iter()
            .find(|r| r.key == key)
            .map(|r| r.value.as_str())
    }
}

/// Resolves interpolations against a fixed value source.
#[derive(Debug, Clone)]
pub struct ReferenceResolver<V> {
    values: V,
}

impl<V: ValueSource> ReferenceResolver<V> {
    /// Creates a resolver over `values`.
    #[must_use]
    pub const fn new(values: V) -> Self {
        Self { values }
    }

    /// Returns the value source.
    #[must_use]
    pub const fn values(&self) -> &V {
        &self.values
    }

    /// Classifies `raw` and resolves it in one step.
    ///
    /// # Errors
    ///
    /// Returns any classification or parse error for `raw`, or
    /// [`confref_domain::ReferenceError::UnresolvedVariable`] if its variable
    /// has no value.
    pub fn resolve(&self, raw: &str) -> ReferenceResult<String> {
        new_interpolation(raw)?.interpolate(&self.values)
    }

    /// Resolves every interpolation, recording which ones had no value.
    pub fn resolve_all<'a, I>(&self, interpolations: I) -> ResolutionReport
    where
        I: IntoIterator<Item = &'a Interpolation>,
    {
        let mut resolved = Vec::new();
        let mut unresolved = Vec::new();

        for interpolation in interpolations {
            let key = interpolation.full_string();
            match interpolation.interpolate(&self.values) {
                Ok(value) => resolved.push(ResolvedReference::new(key, value)),
                Err(_) => unresolved.push(key.to_string()),
            }
        }

        debug!(
            resolved = resolved.len(),
            unresolved = unresolved.len(),
            "resolved interpolation batch"
        );

        let is_complete = unresolved.is_empty();
        ResolutionReport {
            resolved,
            unresolved,
            is_complete,
        }
    }

    /// Returns the keys of the interpolations that would not resolve.
    #[must_use]
    pub fn find_unresolved<'a, I>(&self, interpolations: I) -> Vec<String>
    where
        I: IntoIterator<Item = &'a Interpolation>,
    {
        interpolations
            .into_iter()
            .flat_map(Interpolation::variables)
            .map(|(key, _)| key)
            .filter(|key| self.values.lookup(key).is_none())
            .collect()
    }
}
