//! Interpolation factory
//!
//! Classifies raw strings as interpolations before handing them to the parser.

use std::sync::LazyLock;

use confref_domain::{ReferenceError, ReferenceResult, Variable};
use regex::Regex;
use tracing::debug;

use super::interpolation::{Interpolation, VariableInterpolation};
use super::parser::parse_variable;

/// Dotted segments of identifier characters, or a lone `*`, optionally
/// followed by a quoted map key. Empty segments after the first are allowed
/// here so that the parser can report them precisely.
#[allow(clippy::expect_used)]
static REFERENCE_TOKEN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"^[A-Za-z0-9_-]+(?:\.(?:[A-Za-z0-9_-]*|\*))+(?:\["[^"]*"\])?$"#)
        .expect("valid regex")
});

/// Returns true if `raw` has the outline of a bare dotted variable reference.
#[must_use]
pub fn is_bare_reference(raw: &str) -> bool {
    REFERENCE_TOKEN.is_match(raw.trim())
}

/// Classifies `raw` as an interpolation.
///
/// # Examples
///
/// ```
/// use std::collections::HashMap;
/// use confref_application::reference::new_interpolation;
///
/// let interpolation = new_interpolation("var.region").unwrap();
/// let values = HashMap::from([("var.region".to_string(), "eu-west-1".to_string())]);
/// assert_eq!(interpolation.interpolate(&values).unwrap(), "eu-west-1");
/// ```
///
/// # Errors
///
/// Returns [`ReferenceError::UnsupportedInterpolationSyntax`] if `raw` is not a
/// bare dotted reference, and [`ReferenceError::MalformedReference`] if it is
/// shaped like one but does not parse.
pub fn new_interpolation(raw: &str) -> ReferenceResult<Interpolation> {
    let trimmed = raw.trim();
    if !REFERENCE_TOKEN.is_match(trimmed) {
        debug!(input = raw, "not a bare variable reference");
        return Err(ReferenceError::unsupported(raw));
    }

    let variable = parse_variable(trimmed)?;
    Ok(VariableInterpolation::new(variable).into())
}

/// Parses `raw` as a single variable reference, without the interpolation
/// wrapper.
///
/// # Errors
///
/// Returns [`ReferenceError::MalformedReference`] if `raw` is empty after
/// trimming or does not parse.
pub fn new_interpolated_variable(raw: &str) -> ReferenceResult<Variable> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(ReferenceError::malformed(raw, "reference is empty"));
    }
    parse_variable(trimmed)
}
