//! `gxconfig.json` loading.

use anyhow::{Context, Result};
use gx_checker::CheckerOptions;
use serde::{Deserialize, Deserializer};
use std::path::Path;

/// Accept `true` as well as `"true"` for boolean options.
fn deserialize_bool_or_string<'de, D>(deserializer: D) -> Result<Option<bool>, D::Error>
where
    D: Deserializer<'de>,
{
    use serde::de::Error;

    #[derive(Deserialize)]
    #[serde(untagged)]
    enum BoolOrString {
        Bool(bool),
        String(String),
    }

    match Option::<BoolOrString>::deserialize(deserializer)? {
        None => Ok(None),
        Some(BoolOrString::Bool(b)) => Ok(Some(b)),
        Some(BoolOrString::String(s)) => match s.trim().to_lowercase().as_str() {
            "true" | "1" | "yes" | "on" => Ok(Some(true)),
            "false" | "0" | "no" | "off" => Ok(Some(false)),
            _ => Err(Error::custom(format!(
                "invalid boolean value: '{s}'. Expected true, false, 'true', or 'false'"
            ))),
        },
    }
}

#[derive(Debug, Clone, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct GxConfig {
    #[serde(default)]
    pub compiler_options: Option<CompilerOptions>,
    /// Glob patterns, kept verbatim for the host to expand.
    #[serde(default)]
    pub include: Option<Vec<String>>,
    #[serde(default)]
    pub exclude: Option<Vec<String>>,
}

#[derive(Debug, Clone, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct CompilerOptions {
    #[serde(default, deserialize_with = "deserialize_bool_or_string")]
    pub strict_conditions: Option<bool>,
    #[serde(default, deserialize_with = "deserialize_bool_or_string")]
    pub report_duplicate_declarations: Option<bool>,
}

impl GxConfig {
    pub fn checker_options(&self) -> CheckerOptions {
        resolve_checker_options(self.compiler_options.as_ref())
    }
}

pub fn parse_config(source: &str) -> Result<GxConfig> {
    let config = serde_json::from_str(source).context("failed to parse gxconfig JSON")?;
    Ok(config)
}

pub fn load_config(path: &Path) -> Result<GxConfig> {
    let source = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read gxconfig: {}", path.display()))?;
    let config = parse_config(&source)
        .with_context(|| format!("failed to parse gxconfig: {}", path.display()))?;
    tracing::debug!(path = %path.display(), "loaded gxconfig");
    Ok(config)
}

/// Unset options keep the `CheckerOptions` defaults.
pub fn resolve_checker_options(options: Option<&CompilerOptions>) -> CheckerOptions {
    let mut resolved = CheckerOptions::default();
    let Some(options) = options else {
        return resolved;
    };
    if let Some(strict) = options.strict_conditions {
        resolved.strict_conditions = strict;
    }
    if let Some(report) = options.report_duplicate_declarations {
        resolved.report_duplicate_declarations = report;
    }
    resolved
}
