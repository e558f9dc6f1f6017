//! Reference parser for dotted variable paths
//!
//! Turns a raw reference such as `var.region`, `aws_instance.web.id` or
//! `aws_instance.web.*.id` into a [`Variable`].
//!
//! Parsing runs an ordered list of shape matchers. Each matcher either
//! produces a variable, declines (`Ok(None)`), or rejects the input outright.
//! The first matcher that does not decline wins.

use std::sync::LazyLock;

use confref_domain::{
    InstanceIndex, ReferenceError, ReferenceResult, ResourceMapVariable, ResourceVariable,
    USER_VARIABLE_PREFIX, UserMapVariable, UserVariable, Variable,
};
use regex::Regex;
use tracing::{debug, trace};

type ShapeMatcher = fn(&str) -> ReferenceResult<Option<Variable>>;

/// Shape matchers in precedence order.
const SHAPES: [(&str, ShapeMatcher); 4] = [
    ("user", match_user),
    ("map element", match_map_element),
    ("multi resource", match_multi_resource),
    ("single resource", match_single_resource),
];

/// `<path>["<key>"]`, where the path holds no brackets or quotes.
#[allow(clippy::expect_used)]
static MAP_ELEMENT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"^(?P<path>[^\[\]"]+)\["(?P<key>[^"]*)"\]$"#).expect("valid regex")
});

/// Parses a single reference token into a [`Variable`].
///
/// The input must already be isolated from any surrounding interpolation
/// delimiters.
///
/// # Examples
///
/// ```
/// use confref_application::reference::parser::parse_variable;
///
/// let v = parse_variable("aws_instance.web.*.id").unwrap();
/// assert_eq!(v.full_key(), "aws_instance.web.*.id");
/// assert_eq!(v.resource().unwrap().index(), -1);
/// ```
///
/// # Errors
///
/// Returns [`ReferenceError::MalformedReference`] if the input has fewer than
/// two dot-separated segments or matches none of the reference shapes.
pub fn parse_variable(raw: &str) -> ReferenceResult<Variable> {
    if raw.split('.').count() < 2 {
        return Err(ReferenceError::malformed(
            raw,
            "expected at least two dot-separated segments",
        ));
    }

    for (shape, matcher) in SHAPES {
        if let Some(variable) = matcher(raw)? {
            debug!(input = raw, shape, kind = ?variable.kind(), "parsed reference");
            return Ok(variable);
        }
        trace!(input = raw, shape, "shape did not match");
    }

    Err(ReferenceError::malformed(
        raw,
        "expected `type.name.field` or `type.name.index.field`",
    ))
}

/// `var.<name>` or `var.<name>.<elem>`.
fn match_user(raw: &str) -> ReferenceResult<Option<Variable>> {
    let Some(remainder) = raw.strip_prefix(USER_VARIABLE_PREFIX) else {
        return Ok(None);
    };

    if remainder.is_empty() {
        return Err(ReferenceError::malformed(raw, "user variable name is empty"));
    }
    path_segments(remainder, raw)?;

    let variable: Variable = match remainder.split_once('.') {
        None => UserVariable::new(remainder).into(),
        Some((name, elem)) => UserMapVariable::new(name, elem).into(),
    };

    Ok(Some(variable))
}

/// `type.name[.index].field["key"]`.
fn match_map_element(raw: &str) -> ReferenceResult<Option<Variable>> {
    let Some(captures) = MAP_ELEMENT.captures(raw) else {
        return Ok(None);
    };

    let key = &captures["key"];
    if key.is_empty() {
        return Err(ReferenceError::malformed(raw, "map element key is empty"));
    }

    let segments = path_segments(&captures["path"], raw)?;
    let attribute = match multi_attribute(&segments) {
        Some(attribute) => attribute,
        None => single_attribute(&segments, raw)?.ok_or_else(|| {
            ReferenceError::malformed(raw, "map element must follow a resource attribute")
        })?,
    };

    Ok(Some(ResourceMapVariable::new(attribute, key).into()))
}

/// `type.name.*.field` or `type.name.<N>.field`.
fn match_multi_resource(raw: &str) -> ReferenceResult<Option<Variable>> {
    let segments = path_segments(raw, raw)?;
    Ok(multi_attribute(&segments).map(Variable::from))
}

/// `type.name.field`.
fn match_single_resource(raw: &str) -> ReferenceResult<Option<Variable>> {
    let segments = path_segments(raw, raw)?;
    Ok(single_attribute(&segments, raw)?.map(Variable::from))
}

fn multi_attribute(segments: &[&str]) -> Option<ResourceVariable> {
    let [resource_type, name, index, field @ ..] = segments else {
        return None;
    };
    // An index with nothing after it is not a multi reference.
    if field.is_empty() {
        return None;
    }
    let index = instance_index(index)?;
    Some(ResourceVariable::multi(
        *resource_type,
        *name,
        index,
        field.join("."),
    ))
}

fn single_attribute(segments: &[&str], raw: &str) -> ReferenceResult<Option<ResourceVariable>> {
    let [resource_type, name, field @ ..] = segments else {
        return Ok(None);
    };
    match field {
        [] => Ok(None),
        [InstanceIndex::WILDCARD_MARKER] => Err(ReferenceError::malformed(
            raw,
            "wildcard index must be followed by an attribute",
        )),
        _ => Ok(Some(ResourceVariable::single(
            *resource_type,
            *name,
            field.join("."),
        ))),
    }
}

/// Reads an index segment: `*` or a non-negative base-10 integer.
///
/// Anything else, including integers above `i64::MAX`, is not an index.
fn instance_index(segment: &str) -> Option<InstanceIndex> {
    if segment == InstanceIndex::WILDCARD_MARKER {
        return Some(InstanceIndex::Wildcard);
    }
    if segment.is_empty() || !segment.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    // Positions are bounded by i64 so that `index()` reports them exactly.
    let position: i64 = segment.parse().ok()?;
    usize::try_from(position).ok().map(InstanceIndex::Position)
}

fn path_segments<'a>(path: &'a str, raw: &str) -> ReferenceResult<Vec<&'a str>> {
    let segments: Vec<&str> = path.split('.').collect();
    for segment in &segments {
        if segment.is_empty() {
            return Err(ReferenceError::malformed(raw, "reference contains an empty segment"));
        }
        if segment.contains(['[', ']', '"']) {
            return Err(ReferenceError::malformed(
                raw,
                "unexpected bracket or quote in reference",
            ));
        }
        if segment.contains(char::is_whitespace) {
            return Err(ReferenceError::malformed(raw, "unexpected whitespace in reference"));
        }
    }
    Ok(segments)
}
