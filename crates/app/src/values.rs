//! Values file loading
//!
//! A values file maps canonical reference keys to their values, e.g.
//!
//! ```yaml
//! var.region: eu-west-1
//! aws_instance.web.0.id: i-0abc
//! ```

use std::collections::BTreeMap;
use std::fmt;
use std::fs;
use std::path::Path;

use anyhow::{Context, bail};
use clap::ValueEnum;
use serde::Deserialize;

/// Supported values file formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ValuesFormat {
    /// A JSON object.
    Json,
    /// A YAML mapping.
    Yaml,
}

impl ValuesFormat {
    /// Picks the format from a file extension.
    pub fn from_path(path: &Path) -> anyhow::Result<Self> {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some("json") => Ok(Self::Json),
            Some("yaml" | "yml") => Ok(Self::Yaml),
            _ => bail!(
                "cannot infer values format from {}; pass --format",
                path.display()
            ),
        }
    }
}

impl fmt::Display for ValuesFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Json => f.write_str("json"),
            Self::Yaml => f.write_str("yaml"),
        }
    }
}

/// Scalars accepted as values. Non-string scalars are kept in their textual form.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum Scalar {
    String(String),
    Bool(bool),
    Number(serde_json::Number),
}

impl From<Scalar> for String {
    fn from(scalar: Scalar) -> Self {
        match scalar {
            Scalar::String(s) => s,
            Scalar::Bool(b) => b.to_string(),
            Scalar::Number(n) => n.to_string(),
        }
    }
}

/// Parses values from `content`.
pub fn parse_values(content: &str, format: ValuesFormat) -> anyhow::Result<BTreeMap<String, String>> {
    let raw: BTreeMap<String, Scalar> = match format {
        ValuesFormat::Json => serde_json::from_str(content)?,
        ValuesFormat::Yaml => serde_yaml::from_str(content)?,
    };
    Ok(raw.into_iter().map(|(k, v)| (k, v.into())).collect())
}

/// Reads and parses the values file at `path`.
pub fn load_values(
    path: &Path,
    format: Option<ValuesFormat>,
) -> anyhow::Result<BTreeMap<String, String>> {
    let format = match format {
        Some(format) => format,
        None => ValuesFormat::from_path(path)?,
    };
    let content = fs::read_to_string(path)
        .with_context(|| format!("failed to read values file {}", path.display()))?;
    let values = parse_values(&content, format)
        .with_context(|| format!("invalid {format} values file {}", path.display()))?;
    tracing::debug!(path = %path.display(), count = values.len(), "loaded values");
    Ok(values)
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
mod tests {
    use std::io::Write;

    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_parse_json_values() {
        let values = parse_values(r#"{"var.region": "eu-west-1", "var.count": 3}"#, ValuesFormat::Json)
            .unwrap();
        assert_eq!(values["var.region"], "eu-west-1");
        assert_eq!(values["var.count"], "3");
    }

    #[test]
    fn test_parse_yaml_values() {
        let content = "var.region: eu-west-1\nvar.enabled: true\n'aws_instance.web.*.id': i-1\n";
        let values = parse_values(content, ValuesFormat::Yaml).unwrap();
        assert_eq!(values.len(), 3);
        assert_eq!(values["var.enabled"], "true");
        assert_eq!(values["aws_instance.web.*.id"], "i-1");
    }

    #[test]
    fn test_parse_keeps_float_text() {
        let values =
            parse_values(r#"{"var.ratio": 1.0, "var.scale": 2.5}"#, ValuesFormat::Json).unwrap();
        assert_eq!(values["var.ratio"], "1.0");
        assert_eq!(values["var.scale"], "2.5");

        let values = parse_values("var.ratio: 1.0\nvar.count: -4\n", ValuesFormat::Yaml).unwrap();
        assert_eq!(values["var.ratio"], "1.0");
        assert_eq!(values["var.count"], "-4");
    }

    #[test]
    fn test_parse_rejects_nested_values() {
        let result = parse_values(r#"{"var.tags": {"a": "b"}}"#, ValuesFormat::Json);
        assert!(result.is_err());
    }

    #[test]
    fn test_format_from_path() {
        assert_eq!(ValuesFormat::from_path(Path::new("v.json")).unwrap(), ValuesFormat::Json);
        assert_eq!(ValuesFormat::from_path(Path::new("v.yml")).unwrap(), ValuesFormat::Yaml);
        assert!(ValuesFormat::from_path(Path::new("v.txt")).is_err());
    }

    #[test]
    fn test_load_values_from_file() {
        let mut file = tempfile::Builder::new().suffix(".yaml").tempfile().unwrap();
        writeln!(file, "var.foo: bar").unwrap();

        let values = load_values(file.path(), None).unwrap();
        assert_eq!(values, BTreeMap::from([("var.foo".to_string(), "bar".to_string())]));
    }

    #[test]
    fn test_load_values_missing_file() {
        let err = load_values(Path::new("/nonexistent/values.json"), None).unwrap_err();
        assert!(err.to_string().contains("failed to read values file"));
    }
}
