//! Property-type mapping
//!
//! Schema fields declare their value types with language-neutral names
//! (`string`, `long`, `list`, ...). This module maps those names to the Rust
//! types used in generated accessor signatures.

use crate::GeneratorError;
use once_cell::sync::Lazy;
use std::collections::HashMap;

/// A property type resolved to its Rust representation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MappedType {
    /// The Rust type for this property, as source text
    pub rust_type: String,
}

/// Mapping table from declared property-type names to Rust types
static PROPERTY_TYPES: Lazy<HashMap<&'static str, &'static str>> = Lazy::new(|| {
    HashMap::from([
        ("string", "String"),
        ("int", "i64"),
        ("integer", "i64"),
        ("long", "i64"),
        ("float", "f64"),
        ("double", "f64"),
        ("bool", "bool"),
        ("boolean", "bool"),
        ("list", "Vec<serde_json::Value>"),
        ("array", "Vec<serde_json::Value>"),
        ("map", "serde_json::Map<String, serde_json::Value>"),
        ("object", "serde_json::Map<String, serde_json::Value>"),
        ("any", "serde_json::Value"),
    ])
});

/// Resolve a declared property-type name to its Rust type
///
/// Names are matched case-insensitively. An unmapped name is an emission
/// error; the affected class produces no artifact.
pub fn map_property_type(name: &str) -> Result<MappedType, GeneratorError> {
    let key = name.trim().to_ascii_lowercase();
    PROPERTY_TYPES
        .get(key.as_str())
        .map(|rust_type| MappedType {
            rust_type: (*rust_type).to_string(),
        })
        .ok_or_else(|| GeneratorError::UnknownPropertyType(name.to_string()))
}
