//! User-supplied input variables (`var.*`)

use std::fmt;

use serde::Serialize;

/// Prefix shared by every user variable key.
pub const USER_VARIABLE_PREFIX: &str = "var.";

/// A reference to a user-supplied input variable: `var.<name>`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct UserVariable {
    name: String,
    #[serde(rename = "full_key")]
    key: String,
}

impl UserVariable {
    /// Creates a user variable from an already validated name.
    ///
    /// The name must be non-empty and must not contain a dot.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        let name = name.into();
        let key = format!("{USER_VARIABLE_PREFIX}{name}");
        Self { name, key }
    }

    /// Returns the variable name without the `var.` prefix.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the canonical key, `var.<name>`.
    #[must_use]
    pub fn full_key(&self) -> &str {
        &self.key
    }
}

impl fmt::Display for UserVariable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.key)
    }
}

/// A reference to one element of a map-typed user variable: `var.<name>.<elem>`.
///
/// The split between `name` and `elem` is always the first dot after `var.`,
/// so `elem` may itself contain dots.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct UserMapVariable {
    name: String,
    elem: String,
    #[serde(rename = "full_key")]
    key: String,
}

impl UserMapVariable {
    /// Creates a user map variable from an already validated name and element.
    #[must_use]
    pub fn new(name: impl Into<String>, elem: impl Into<String>) -> Self {
        let name = name.into();
        let elem = elem.into();
        let key = format!("{USER_VARIABLE_PREFIX}{name}.{elem}");
        Self { name, elem, key }
    }

    /// Returns the name of the map variable.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the element key within the map.
    #[must_use]
    pub fn elem(&self) -> &str {
        &self.elem
    }

    /// Returns the canonical key, `var.<name>.<elem>`.
    #[must_use]
    pub fn full_key(&self) -> &str {
        &self.key
    }

    /// Returns the whole-map variable this element belongs to.
    #[must_use]
    pub fn map_variable(&self) -> UserVariable {
        UserVariable::new(self.name.clone())
    }
}

impl fmt::Display for UserMapVariable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_variable_key() {
        let v = UserVariable::new("region");
        assert_eq!(v.name(), "region");
        assert_eq!(v.full_key(), "var.region");
        assert_eq!(v.to_string(), "var.region");
    }

    #[test]
    fn test_user_map_variable_key() {
        let v = UserMapVariable::new("amis", "us-east-1");
        assert_eq!(v.name(), "amis");
        assert_eq!(v.elem(), "us-east-1");
        assert_eq!(v.full_key(), "var.amis.us-east-1");
        assert_eq!(v.map_variable(), UserVariable::new("amis"));
    }

    #[test]
    fn test_user_map_variable_nested_elem() {
        let v = UserMapVariable::new("settings", "db.port");
        assert_eq!(v.full_key(), "var.settings.db.port");
    }
}
