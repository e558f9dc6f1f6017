//! Resource attribute references (`type.name[.index].field`)

use std::fmt;

use serde::Serialize;

/// Selects which instance(s) of a multi-instance resource a reference addresses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum InstanceIndex {
    /// Every instance (`*`).
    Wildcard,
    /// A single zero-based instance position.
    Position(usize),
}

impl InstanceIndex {
    /// Segment text that selects all instances.
    pub const WILDCARD_MARKER: &'static str = "*";

    /// Returns the numeric form of the index: `-1` for the wildcard,
    /// otherwise the instance position.
    #[must_use]
    pub fn as_i64(self) -> i64 {
        match self {
            Self::Wildcard => -1,
            Self::Position(position) => i64::try_from(position).unwrap_or(i64::MAX),
        }
    }

    /// Returns true if this index selects every instance.
    #[must_use]
    pub const fn is_wildcard(self) -> bool {
        matches!(self, Self::Wildcard)
    }
}

impl fmt::Display for InstanceIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Wildcard => f.write_str(Self::WILDCARD_MARKER),
            Self::Position(position) => write!(f, "{position}"),
        }
    }
}

/// A reference to an attribute of a resource.
///
/// Single references look like `aws_instance.web.id`; multi references carry an
/// instance selector between the resource name and the field, e.g.
/// `aws_instance.web.*.id` or `aws_instance.web.2.id`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct ResourceVariable {
    #[serde(rename = "type")]
    resource_type: String,
    name: String,
    field: String,
    instance: Option<InstanceIndex>,
    #[serde(rename = "full_key")]
    key: String,
}

impl ResourceVariable {
    /// Creates a single (non-multi) resource reference from validated components.
    ///
    /// The field must not start with a segment that reads as an instance index
    /// unless that segment is the whole field; otherwise the key would re-parse
    /// as a multi reference.
    #[must_use]
    pub fn single(
        resource_type: impl Into<String>,
        name: impl Into<String>,
        field: impl Into<String>,
    ) -> Self {
        Self::build(resource_type.into(), name.into(), None, field.into())
    }

    /// Creates a multi-instance resource reference from validated components.
    #[must_use]
    pub fn multi(
        resource_type: impl Into<String>,
        name: impl Into<String>,
        index: InstanceIndex,
        field: impl Into<String>,
    ) -> Self {
        Self::build(resource_type.into(), name.into(), Some(index), field.into())
    }

    fn build(
        resource_type: String,
        name: String,
        instance: Option<InstanceIndex>,
        field: String,
    ) -> Self {
        let key = match instance {
            Some(index) => format!("{resource_type}.{name}.{index}.{field}"),
            None => format!("{resource_type}.{name}.{field}"),
        };
        Self {
            resource_type,
            name,
            field,
            instance,
            key,
        }
    }

    /// Returns the resource type, e.g. `aws_instance`.
    #[must_use]
    pub fn resource_type(&self) -> &str {
        &self.resource_type
    }

    /// Returns the resource name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the attribute path; nested attributes are joined with `.`.
    #[must_use]
    pub fn field(&self) -> &str {
        &self.field
    }

    /// Returns the instance selector, if this is a multi reference.
    #[must_use]
    pub const fn instance(&self) -> Option<InstanceIndex> {
        self.instance
    }

    /// Returns true if the reference carries an instance selector.
    #[must_use]
    pub const fn is_multi(&self) -> bool {
        self.instance.is_some()
    }

    /// Returns `-1` for a wildcard, the position for an indexed reference,
    /// and `0` for a single reference.
    #[must_use]
    pub fn index(&self) -> i64 {
        self.instance.map_or(0, InstanceIndex::as_i64)
    }

    /// Returns the `type.name` identifier of the referenced resource.
    #[must_use]
    pub fn resource_id(&self) -> String {
        format!("{}.{}", self.resource_type, self.name)
    }

    /// Returns the canonical key.
    #[must_use]
    pub fn full_key(&self) -> &str {
        &self.key
    }
}

impl fmt::Display for ResourceVariable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.key)
    }
}

/// A reference to one element of a map-typed resource attribute:
/// `type.name[.index].field["key"]`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct ResourceMapVariable {
    resource: ResourceVariable,
    map_key: String,
    #[serde(rename = "full_key")]
    key: String,
}

impl ResourceMapVariable {
    /// Creates a map element reference on top of a resource attribute reference.
    ///
    /// The map key must be non-empty and must not contain `"`.
    #[must_use]
    pub fn new(resource: ResourceVariable, map_key: impl Into<String>) -> Self {
        let map_key = map_key.into();
        let key = format!("{}[\"{map_key}\"]", resource.full_key());
        Self {
            resource,
            map_key,
            key,
        }
    }

    /// Returns the map-typed attribute reference.
    #[must_use]
    pub const fn resource(&self) -> &ResourceVariable {
        &self.resource
    }

    /// Returns the element key within the map.
    #[must_use]
    pub fn map_key(&self) -> &str {
        &self.map_key
    }

    /// Returns the canonical key.
    #[must_use]
    pub fn full_key(&self) -> &str {
        &self.key
    }
}

impl fmt::Display for ResourceMapVariable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.key)
    }
}
