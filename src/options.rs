//! Generator options
//!
//! The host passes configuration as a comma-separated `key=value` parameter
//! string in the request envelope. Recognized keys are `runtime`, `suffix`,
//! `on_error` and `require_superclass`; unknown keys are ignored.

use crate::GeneratorError;

/// What a validation failure does to the rest of the pass
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FailurePolicy {
    /// Report every invalid class and still emit artifacts for the valid ones
    #[default]
    Collect,
    /// Abort discovery on the first invalid class; nothing is emitted
    Abort,
}

/// The supertype-conformance policy applied during validation
///
/// The always-pass default leaves the declared parent type recorded but
/// unchecked.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ConformancePolicy {
    /// Record the parent type without checking it
    #[default]
    AlwaysPass,
    /// Require every schema class to declare this qualified parent type
    RequireSuperclass(String),
}

/// Parsed generator configuration for one pass
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratorOptions {
    /// Module path of the document runtime referenced by generated code
    pub runtime_path: String,
    /// Trailing suffix stripped from schema class names
    pub schema_suffix: String,
    /// Batch behavior on validation failure
    pub on_error: FailurePolicy,
    /// Supertype-conformance policy
    pub conformance: ConformancePolicy,
}

impl Default for GeneratorOptions {
    fn default() -> Self {
        Self {
            runtime_path: "docwrap_gen::document".to_string(),
            schema_suffix: "Schema".to_string(),
            on_error: FailurePolicy::default(),
            conformance: ConformancePolicy::default(),
        }
    }
}

/// Parse the request's parameter string into [`GeneratorOptions`]
pub fn parse_parameter(parameter: Option<&str>) -> Result<GeneratorOptions, GeneratorError> {
    let mut options = GeneratorOptions::default();

    let Some(parameter) = parameter else {
        return Ok(options);
    };

    for part in parameter.split(',') {
        let part = part.trim();
        if part.is_empty() {
            continue;
        }

        let (key, value) = match part.split_once('=') {
            Some((k, v)) => (k.trim(), parse_quoted_string(v)),
            None => {
                return Err(GeneratorError::InvalidConfig(format!(
                    "expected key=value, got `{}`",
                    part
                )))
            }
        };

        match key {
            "runtime" => options.runtime_path = value,
            "suffix" => options.schema_suffix = value,
            "on_error" => {
                options.on_error = match value.as_str() {
                    "collect" => FailurePolicy::Collect,
                    "abort" => FailurePolicy::Abort,
                    other => {
                        return Err(GeneratorError::InvalidConfig(format!(
                            "on_error must be `collect` or `abort`, got `{}`",
                            other
                        )))
                    }
                }
            }
            "require_superclass" => {
                options.conformance = ConformancePolicy::RequireSuperclass(value)
            }
            _ => {}
        }
    }

    Ok(options)
}

/// Parse a quoted string value, removing quotes
fn parse_quoted_string(s: &str) -> String {
    let s = s.trim();
    if (s.starts_with('"') && s.ends_with('"')) || (s.starts_with('\'') && s.ends_with('\'')) {
        s[1..s.len() - 1].to_string()
    } else {
        s.to_string()
    }
}
