//! Interpolations over a single variable reference

use std::collections::{BTreeMap, HashMap};
use std::fmt;
use std::hash::BuildHasher;

use confref_domain::{ReferenceError, ReferenceResult, Variable};
use tracing::debug;

/// A read-only mapping from canonical variable keys to their values.
pub trait ValueSource {
    /// Returns the value stored under `key`, if any.
    fn lookup(&self, key: &str) -> Option<&str>;
}

impl<S: BuildHasher> ValueSource for HashMap<String, String, S> {
    fn lookup(&self, key: &str) -> Option<&str> {
        self.get(key).map(String::as_str)
    }
}

impl ValueSource for BTreeMap<String, String> {
    fn lookup(&self, key: &str) -> Option<&str> {
        self.get(key).map(String::as_str)
    }
}

/// An interpolation whose whole text is exactly one variable reference.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VariableInterpolation {
    variable: Variable,
}

impl VariableInterpolation {
    /// Wraps a parsed variable.
    #[must_use]
    pub const fn new(variable: Variable) -> Self {
        Self { variable }
    }

    /// Returns the referenced variable.
    #[must_use]
    pub const fn variable(&self) -> &Variable {
        &self.variable
    }

    /// Returns the canonical reference text.
    #[must_use]
    pub fn full_string(&self) -> &str {
        self.variable.full_key()
    }

    /// Returns the variables this interpolation depends on, keyed by their
    /// canonical key. Always holds exactly one entry.
    #[must_use]
    pub fn variables(&self) -> HashMap<String, Variable> {
        HashMap::from([(
            self.variable.full_key().to_string(),
            self.variable.clone(),
        )])
    }

    /// Looks the variable up in `values` and returns its value verbatim.
    ///
    /// # Errors
    ///
    /// Returns [`ReferenceError::UnresolvedVariable`] if `values` has no entry
    /// for the variable's key.
    pub fn interpolate<V: ValueSource + ?Sized>(&self, values: &V) -> ReferenceResult<String> {
        let key = self.variable.full_key();
        values.lookup(key).map(str::to_string).ok_or_else(|| {
            debug!(key, "variable has no known value");
            ReferenceError::unresolved(key)
        })
    }
}

/// A parsed interpolation.
///
/// Only bare variable references are supported; each variant owns the
/// variables it depends on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Interpolation {
    /// The whole string is one variable reference.
    Variable(VariableInterpolation),
}

impl Interpolation {
    /// Returns the variables this interpolation depends on, keyed by their
    /// canonical key.
    #[must_use]
    pub fn variables(&self) -> HashMap<String, Variable> {
        match self {
            Self::Variable(v) => v.variables(),
        }
    }

    /// Resolves the interpolation against `values`.
    ///
    /// # Errors
    ///
    /// Returns [`ReferenceError::UnresolvedVariable`] if a referenced variable
    /// has no value.
    pub fn interpolate<V: ValueSource + ?Sized>(&self, values: &V) -> ReferenceResult<String> {
        match self {
            Self::Variable(v) => v.interpolate(values),
        }
    }

    /// Returns the canonical text of the interpolation.
    #[must_use]
    pub fn full_string(&self) -> &str {
        match self {
            Self::Variable(v) => v.full_string(),
        }
    }
}

impl From<VariableInterpolation> for Interpolation {
    fn from(v: VariableInterpolation) -> Self {
        Self::Variable(v)
    }
}

impl fmt::Display for Interpolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.full_string())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
mod tests {
    use super::*;
    use confref_domain::{InstanceIndex, ResourceVariable, UserVariable};
    use pretty_assertions::assert_eq;

    fn user_interpolation(name: &str) -> VariableInterpolation {
        VariableInterpolation::new(UserVariable::new(name).into())
    }

    #[test]
    fn test_full_string() {
        let i = user_interpolation("foo");
        assert_eq!(i.full_string(), "var.foo");
    }

    #[test]
    fn test_variables_has_single_entry() {
        let i = user_interpolation("foo");
        let expected = HashMap::from([(
            "var.foo".to_string(),
            Variable::User(UserVariable::new("foo")),
        )]);
        assert_eq!(i.variables(), expected);
    }

    #[test]
    fn test_interpolate() {
        let i = user_interpolation("foo");
        let values = HashMap::from([("var.foo".to_string(), "bar".to_string())]);
        assert_eq!(i.interpolate(&values).unwrap(), "bar");
    }

    #[test]
    fn test_interpolate_missing_value() {
        let i = user_interpolation("foo");
        let values: HashMap<String, String> = HashMap::new();
        assert_eq!(
            i.interpolate(&values),
            Err(ReferenceError::unresolved("var.foo"))
        );
    }

    #[test]
    fn test_interpolate_returns_value_verbatim() {
        let i = user_interpolation("foo");
        let values = BTreeMap::from([("var.foo".to_string(), "  ${var.bar} ".to_string())]);
        assert_eq!(i.interpolate(&values).unwrap(), "  ${var.bar} ");
    }

    #[test]
    fn test_interpolate_uses_canonical_key() {
        let v = ResourceVariable::multi("aws_instance", "web", InstanceIndex::Position(3), "id");
        let i = Interpolation::from(VariableInterpolation::new(v.into()));
        let values = HashMap::from([("aws_instance.web.3.id".to_string(), "i-123".to_string())]);
        assert_eq!(i.interpolate(&values).unwrap(), "i-123");
        assert_eq!(i.to_string(), "aws_instance.web.3.id");
    }
}
