//! Class descriptor metadata consumed by the generator
//!
//! The generator does not inspect source code itself; the host toolchain's
//! reflection facility hands it a set of language-neutral class descriptors.
//! This module defines those descriptors, the request/response envelope they
//! travel in, and the [`MetadataProvider`] interface a host implements to
//! expose them.

use crate::diagnostics::Diagnostic;
use serde::{Deserialize, Serialize};

/// Marker kinds the generator consumes
///
/// Exactly two markers are read; any other annotation carried by the input
/// metadata is ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MarkerKind {
    /// Marks a class as a schema descriptor to generate a wrapper for
    Schema,
    /// Marks a field with an explicit store-key override (single string argument)
    FieldKey,
}

/// A marker attached to a class or member
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MarkerDescriptor {
    /// Which marker this is
    pub kind: MarkerKind,
    /// The marker's single string argument, if it takes one
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
}

/// Kind of a described class-like element
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ClassKind {
    /// A concrete or abstract class
    #[default]
    Class,
    /// An interface / trait-like element
    Interface,
    /// An enumeration
    Enum,
}

/// Visibility of a class or member
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Visibility {
    /// Visible everywhere
    Public,
    /// Visible to subtypes
    Protected,
    /// Visible within the declaring package (the host default)
    #[default]
    Package,
    /// Visible only within the declaring class
    Private,
}

/// Kind of an enclosed member
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MemberKind {
    /// A declared field
    #[default]
    Field,
    /// A constructor
    Constructor,
    /// A method
    Method,
    /// A nested type declaration
    NestedType,
}

/// Qualified and simple names of a referenced type
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TypeName {
    /// Fully qualified name, e.g. `blog.BaseModel`
    pub qualified: String,
    /// Simple name, e.g. `BaseModel`
    pub simple: String,
}

/// One enclosed member of a class description
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct MemberDescriptor {
    /// Member name
    pub name: String,
    /// What kind of member this is
    #[serde(default)]
    pub kind: MemberKind,
    /// Member visibility
    #[serde(default)]
    pub visibility: Visibility,
    /// Declared value type, for fields
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value_type: Option<String>,
    /// Number of declared parameters, for constructors and methods
    #[serde(default)]
    pub parameter_count: usize,
    /// Markers attached to this member
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub markers: Vec<MarkerDescriptor>,
}

impl MemberDescriptor {
    /// Look up the single string argument of a marker on this member
    pub fn marker_value(&self, kind: MarkerKind) -> Option<&str> {
        self.markers
            .iter()
            .find(|m| m.kind == kind)
            .and_then(|m| m.value.as_deref())
    }
}

/// An opaque class description provided by the host's metadata facility
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ClassDescriptor {
    /// Simple class name, e.g. `ArticleSchema`
    pub name: String,
    /// Dotted package name; `None` means the unnamed/default package
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub package: Option<String>,
    /// Kind of the described element
    #[serde(default)]
    pub kind: ClassKind,
    /// Class visibility
    #[serde(default)]
    pub visibility: Visibility,
    /// Whether the class is abstract
    #[serde(default, rename = "abstract")]
    pub is_abstract: bool,
    /// The immediate declared parent type, if any
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub superclass: Option<TypeName>,
    /// Markers attached to the class itself
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub markers: Vec<MarkerDescriptor>,
    /// Enclosed members, in declaration order
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub members: Vec<MemberDescriptor>,
}

impl ClassDescriptor {
    /// The package-qualified class name, used as the accumulation key
    pub fn qualified_name(&self) -> String {
        match self.package.as_deref() {
            Some(pkg) if !pkg.is_empty() => format!("{}.{}", pkg, self.name),
            _ => self.name.clone(),
        }
    }

    /// Whether this class carries the given marker
    pub fn has_marker(&self, kind: MarkerKind) -> bool {
        self.markers.iter().any(|m| m.kind == kind)
    }
}

/// Interface through which the generator discovers host metadata
///
/// Hosts with their own compile-time or load-time introspection mechanism
/// implement this; the shipped [`GeneratorRequest`] envelope is the JSON
/// implementer used by the binary.
pub trait MetadataProvider {
    /// Enumerate all class descriptions carrying the given marker
    fn classes_with_marker(&self, kind: MarkerKind) -> Vec<&ClassDescriptor>;

    /// Describe one enclosed member of a class by name
    fn describe_member<'a>(
        &self,
        class: &'a ClassDescriptor,
        member: &str,
    ) -> Option<&'a MemberDescriptor>;
}

/// The request envelope read from stdin by the binary
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct GeneratorRequest {
    /// Generator parameter string, comma-separated `key=value` pairs
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parameter: Option<String>,
    /// All class descriptions visible to this pass
    #[serde(default)]
    pub classes: Vec<ClassDescriptor>,
}

impl MetadataProvider for GeneratorRequest {
    fn classes_with_marker(&self, kind: MarkerKind) -> Vec<&ClassDescriptor> {
        self.classes.iter().filter(|c| c.has_marker(kind)).collect()
    }

    fn describe_member<'a>(
        &self,
        class: &'a ClassDescriptor,
        member: &str,
    ) -> Option<&'a MemberDescriptor> {
        class.members.iter().find(|m| m.name == member)
    }
}

/// One generated source artifact
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneratedFile {
    /// File name relative to the host's generated-sources area
    pub name: String,
    /// Full file contents
    pub content: String,
}

/// The response envelope written to stdout by the binary
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct GeneratorResponse {
    /// Generated files, one per valid schema class
    #[serde(default)]
    pub files: Vec<GeneratedFile>,
    /// Diagnostics reported during the pass
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub diagnostics: Vec<Diagnostic>,
    /// Top-level failure that prevented the pass from running at all
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn marked_class(name: &str) -> ClassDescriptor {
        ClassDescriptor {
            name: name.to_string(),
            markers: vec![MarkerDescriptor {
                kind: MarkerKind::Schema,
                value: None,
            }],
            ..Default::default()
        }
    }

    #[test]
    fn test_qualified_name() {
        let mut class = marked_class("ArticleSchema");
        assert_eq!(class.qualified_name(), "ArticleSchema");

        class.package = Some("blog".to_string());
        assert_eq!(class.qualified_name(), "blog.ArticleSchema");
    }

    #[test]
    fn test_classes_with_marker_filters_unmarked() {
        let request = GeneratorRequest {
            parameter: None,
            classes: vec![
                marked_class("ArticleSchema"),
                ClassDescriptor {
                    name: "Unmarked".to_string(),
                    ..Default::default()
                },
            ],
        };

        let marked = request.classes_with_marker(MarkerKind::Schema);
        assert_eq!(marked.len(), 1);
        assert_eq!(marked[0].name, "ArticleSchema");
    }

    #[test]
    fn test_describe_member() {
        let mut class = marked_class("ArticleSchema");
        class.members.push(MemberDescriptor {
            name: "title".to_string(),
            value_type: Some("string".to_string()),
            ..Default::default()
        });

        let request = GeneratorRequest {
            parameter: None,
            classes: vec![class],
        };

        let class = &request.classes[0];
        let member = request.describe_member(class, "title").unwrap();
        assert_eq!(member.value_type.as_deref(), Some("string"));
        assert!(request.describe_member(class, "missing").is_none());
    }

    #[test]
    fn test_marker_value_lookup() {
        let member = MemberDescriptor {
            name: "content".to_string(),
            markers: vec![MarkerDescriptor {
                kind: MarkerKind::FieldKey,
                value: Some("text".to_string()),
            }],
            ..Default::default()
        };

        assert_eq!(member.marker_value(MarkerKind::FieldKey), Some("text"));
        assert_eq!(member.marker_value(MarkerKind::Schema), None);
    }

    #[test]
    fn test_request_round_trips_through_json() {
        let request = GeneratorRequest {
            parameter: Some("on_error=collect".to_string()),
            classes: vec![marked_class("ArticleSchema")],
        };

        let json = serde_json::to_string(&request).unwrap();
        let decoded: GeneratorRequest = serde_json::from_str(&json).unwrap();
        assert_eq!(decoded, request);
    }
}
