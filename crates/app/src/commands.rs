//! Subcommand implementations
//!
//! Each command writes its normal output to `out` and returns whether the
//! run was fully successful.

use std::collections::BTreeMap;
use std::io::Write;

use anyhow::Context;
use confref_application::reference::{
    Interpolation, ReferenceResolver, VariableInventory, new_interpolated_variable,
    new_interpolation,
};
use serde::Serialize;
use tracing::warn;

/// Prints each reference as a JSON descriptor, one per line.
pub fn parse(references: &[String], out: &mut impl Write) -> anyhow::Result<bool> {
    for reference in references {
        let variable = new_interpolated_variable(reference)
            .with_context(|| format!("cannot parse '{reference}'"))?;
        writeln!(out, "{}", serde_json::to_string(&variable)?)?;
    }
    Ok(true)
}

/// Resolves each reference against `values`, printing `key<TAB>value` lines.
///
/// In strict mode the first unresolved reference is an error; otherwise
/// unresolved references are logged and reported through the return value.
pub fn resolve(
    references: &[String],
    values: BTreeMap<String, String>,
    strict: bool,
    out: &mut impl Write,
) -> anyhow::Result<bool> {
    let interpolations = classify(references)?;
    let resolver = ReferenceResolver::new(values);

    if strict {
        for interpolation in &interpolations {
            let value = interpolation.interpolate(resolver.values())?;
            writeln!(out, "{}\t{value}", interpolation.full_string())?;
        }
        return Ok(true);
    }

    let report = resolver.resolve_all(&interpolations);
    for resolved in &report.resolved {
        writeln!(out, "{}\t{}", resolved.key, resolved.value)?;
    }
    for key in &report.unresolved {
        warn!(key = key.as_str(), "unresolved reference");
    }
    Ok(report.is_complete)
}

#[derive(Debug, Serialize)]
struct InventorySummary<'a> {
    variables: Vec<&'a str>,
    user_variables: Vec<&'a str>,
    resources: Vec<String>,
}

/// Prints the variables, user variable names and resource ids referenced.
pub fn inventory(references: &[String], out: &mut impl Write) -> anyhow::Result<bool> {
    let interpolations = classify(references)?;
    let inventory: VariableInventory = interpolations.iter().collect();

    let summary = InventorySummary {
        variables: inventory.keys().collect(),
        user_variables: inventory.user_variable_names().into_iter().collect(),
        resources: inventory.resource_ids().into_iter().collect(),
    };
    writeln!(out, "{}", serde_json::to_string_pretty(&summary)?)?;
    Ok(true)
}

fn classify(references: &[String]) -> anyhow::Result<Vec<Interpolation>> {
    references
        .iter()
        .map(|reference| {
            new_interpolation(reference)
                .with_context(|| format!("cannot interpolate '{reference}'"))
        })
        .collect()
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn refs(raws: &[&str]) -> Vec<String> {
        raws.iter().map(ToString::to_string).collect()
    }

    fn values() -> BTreeMap<String, String> {
        BTreeMap::from([
            ("var.region".to_string(), "eu-west-1".to_string()),
            ("aws_instance.web.0.id".to_string(), "i-0".to_string()),
        ])
    }

    #[test]
    fn test_parse_prints_json() {
        let mut out = Vec::new();
        assert!(parse(&refs(&["var.foo", "foo.bar.*.baz"]), &mut out).unwrap());

        let lines: Vec<serde_json::Value> = String::from_utf8(out)
            .unwrap()
            .lines()
            .map(|line| serde_json::from_str(line).unwrap())
            .collect();
        assert_eq!(lines[0]["kind"], "user");
        assert_eq!(lines[0]["name"], "foo");
        assert_eq!(lines[1]["kind"], "resource");
        assert_eq!(lines[1]["instance"], "wildcard");
        assert_eq!(lines[1]["full_key"], "foo.bar.*.baz");
    }

    #[test]
    fn test_parse_reports_bad_reference() {
        let mut out = Vec::new();
        let err = parse(&refs(&["foo.bar"]), &mut out).unwrap_err();
        assert!(err.to_string().contains("cannot parse 'foo.bar'"));
    }

    #[test]
    fn test_resolve_complete() {
        let mut out = Vec::new();
        let complete = resolve(
            &refs(&["var.region", "aws_instance.web.00.id"]),
            values(),
            false,
            &mut out,
        )
        .unwrap();
        assert!(complete);
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "var.region\teu-west-1\naws_instance.web.0.id\ti-0\n"
        );
    }

    #[test]
    fn test_resolve_partial() {
        let mut out = Vec::new();
        let complete = resolve(&refs(&["var.zone", "var.region"]), values(), false, &mut out).unwrap();
        assert!(!complete);
        assert_eq!(String::from_utf8(out).unwrap(), "var.region\teu-west-1\n");
    }

    #[test]
    fn test_resolve_strict_fails_on_missing() {
        let mut out = Vec::new();
        let err = resolve(&refs(&["var.zone"]), values(), true, &mut out).unwrap_err();
        assert!(err.to_string().contains("var.zone"));
    }

    #[test]
    fn test_resolve_rejects_expression() {
        let mut out = Vec::new();
        let err = resolve(&refs(&["${var.region}"]), values(), false, &mut out).unwrap_err();
        assert!(err.to_string().contains("cannot interpolate"));
    }

    #[test]
    fn test_inventory_summary() {
        let mut out = Vec::new();
        inventory(
            &refs(&["var.amis.eu", "aws_instance.web.*.id", "var.region"]),
            &mut out,
        )
        .unwrap();

        let summary: serde_json::Value = serde_json::from_slice(&out).unwrap();
        assert_eq!(
            summary,
            serde_json::json!({
                "variables": ["aws_instance.web.*.id", "var.amis.eu", "var.region"],
                "user_variables": ["amis", "region"],
                "resources": ["aws_instance.web"]
            })
        );
    }
}
