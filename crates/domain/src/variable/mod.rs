//! Variable descriptors
//!
//! A [`Variable`] is the typed form of one textual reference such as
//! `var.region` or `aws_instance.web.*.id`.

mod resource;
mod user;

use std::fmt;

use serde::Serialize;

pub use resource::{InstanceIndex, ResourceMapVariable, ResourceVariable};
pub use user::{USER_VARIABLE_PREFIX, UserMapVariable, UserVariable};

/// The kind of a [`Variable`], without its payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum VariableKind {
    /// `var.<name>`
    User,
    /// `var.<name>.<elem>`
    UserMap,
    /// `type.name[.index].field`
    Resource,
    /// `type.name[.index].field["key"]`
    ResourceMap,
}

impl VariableKind {
    /// Returns a short human-readable name.
    #[must_use]
    pub const fn display_name(&self) -> &'static str {
        match self {
            Self::User => "user variable",
            Self::UserMap => "user map variable",
            Self::Resource => "resource variable",
            Self::ResourceMap => "resource map variable",
        }
    }
}

/// A parsed variable reference.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Variable {
    /// A user-supplied input variable.
    User(UserVariable),
    /// One element of a map-typed user variable.
    UserMap(UserMapVariable),
    /// A resource attribute.
    Resource(ResourceVariable),
    /// One element of a map-typed resource attribute.
    ResourceMap(ResourceMapVariable),
}

impl Variable {
    /// Returns the canonical key that re-parses to an equal descriptor.
    #[must_use]
    pub fn full_key(&self) -> &str {
        match self {
            Self::User(v) => v.full_key(),
            Self::UserMap(v) => v.full_key(),
            Self::Resource(v) => v.full_key(),
            Self::ResourceMap(v) => v.full_key(),
        }
    }

    /// Returns the kind of this variable.
    #[must_use]
    pub const fn kind(&self) -> VariableKind {
        match self {
            Self::User(_) => VariableKind::User,
            Self::UserMap(_) => VariableKind::UserMap,
            Self::Resource(_) => VariableKind::Resource,
            Self::ResourceMap(_) => VariableKind::ResourceMap,
        }
    }

    /// Returns the name of the user variable this reference reads, if any.
    #[must_use]
    pub fn user_variable_name(&self) -> Option<&str> {
        match self {
            Self::User(v) => Some(v.name()),
            Self::UserMap(v) => Some(v.name()),
            Self::Resource(_) | Self::ResourceMap(_) => None,
        }
    }

    /// Returns the resource attribute reference underlying this variable, if any.
    #[must_use]
    pub const fn resource(&self) -> Option<&ResourceVariable> {
        match self {
            Self::Resource(v) => Some(v),
            Self::ResourceMap(v) => Some(v.resource()),
            Self::User(_) | Self::UserMap(_) => None,
        }
    }
}

impl fmt::Display for Variable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.full_key())
    }
}

impl From<UserVariable> for Variable {
    fn from(v: UserVariable) -> Self {
        Self::User(v)
    }
}

impl From<UserMapVariable> for Variable {
    fn from(v: UserMapVariable) -> Self {
        Self::UserMap(v)
    }
}

impl From<ResourceVariable> for Variable {
    fn from(v: ResourceVariable) -> Self {
        Self::Resource(v)
    }
}

impl From<ResourceMapVariable> for Variable {
    fn from(v: ResourceMapVariable) -> Self {
        Self::ResourceMap(v)
    }
}
