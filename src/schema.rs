//! Metadata extraction and validation
//!
//! Turns one marked [`ClassDescriptor`] into a validated [`SchemaDescriptor`]:
//! the parent type's names plus every declared field with its resolved store
//! key. Checks run in a fixed order and the first failure wins.

use crate::metadata::{ClassDescriptor, MarkerKind, MemberKind, TypeName, Visibility};
use crate::options::{ConformancePolicy, GeneratorOptions};
use thiserror::Error;

/// Structural preconditions a schema class can violate
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// The class is not publicly visible
    #[error("the class {class} is not public")]
    NotPublic {
        /// Qualified name of the offending class
        class: String,
    },

    /// The class is abstract
    #[error("the class {class} is abstract; abstract classes cannot carry the schema marker")]
    IsAbstract {
        /// Qualified name of the offending class
        class: String,
    },

    /// The class does not declare the parent type required by the
    /// conformance policy
    #[error("the class {class} must extend {expected}, found {found}")]
    SuperclassMismatch {
        /// Qualified name of the offending class
        class: String,
        /// The required qualified parent type
        expected: String,
        /// The declared qualified parent type, or `<none>`
        found: String,
    },

    /// The class declares no public zero-argument constructor
    #[error("the class {class} must provide a public zero-argument constructor")]
    MissingDefaultConstructor {
        /// Qualified name of the offending class
        class: String,
    },
}

/// One declared field of a schema class
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldDescriptor {
    /// Field name as declared
    pub name: String,
    /// Declared property-type name
    pub value_type: String,
    /// Explicit store-key override from the field-key marker
    pub key_override: Option<String>,
}

impl FieldDescriptor {
    /// The store key this field reads and writes: the explicit override if
    /// present, else the field's own name
    pub fn storage_key(&self) -> &str {
        self.key_override.as_deref().unwrap_or(&self.name)
    }
}

/// A validated schema class, ready for synthesis
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SchemaDescriptor {
    /// Simple name of the schema class
    pub name: String,
    /// Package of the schema class; `None` for the unnamed package
    pub package: Option<String>,
    /// The immediate declared parent type, if any
    pub superclass: Option<TypeName>,
    /// Declared fields, in declaration order
    pub fields: Vec<FieldDescriptor>,
}

impl SchemaDescriptor {
    /// Extract and validate a schema descriptor from a class description
    ///
    /// Checks run in order: visibility, abstractness, supertype conformance,
    /// default constructor. Construction has no side effects; the caller
    /// reports failures to the diagnostic sink.
    pub fn from_class(
        class: &ClassDescriptor,
        options: &GeneratorOptions,
    ) -> Result<Self, ValidationError> {
        let qualified = class.qualified_name();

        if class.visibility != Visibility::Public {
            return Err(ValidationError::NotPublic { class: qualified });
        }

        if class.is_abstract {
            return Err(ValidationError::IsAbstract { class: qualified });
        }

        if let ConformancePolicy::RequireSuperclass(expected) = &options.conformance {
            let found = class
                .superclass
                .as_ref()
                .map(|t| t.qualified.as_str())
                .unwrap_or("<none>");
            if found != expected {
                return Err(ValidationError::SuperclassMismatch {
                    class: qualified,
                    expected: expected.clone(),
                    found: found.to_string(),
                });
            }
        }

        let has_default_constructor = class.members.iter().any(|m| {
            m.kind == MemberKind::Constructor
                && m.parameter_count == 0
                && m.visibility == Visibility::Public
        });
        if !has_default_constructor {
            return Err(ValidationError::MissingDefaultConstructor { class: qualified });
        }

        let fields = class
            .members
            .iter()
            .filter(|m| m.kind == MemberKind::Field)
            .map(|m| FieldDescriptor {
                name: m.name.clone(),
                value_type: m.value_type.clone().unwrap_or_else(|| "any".to_string()),
                key_override: m.marker_value(MarkerKind::FieldKey).map(str::to_string),
            })
            .collect();

        Ok(SchemaDescriptor {
            name: class.name.clone(),
            package: class.package.clone(),
            superclass: class.superclass.clone(),
            fields,
        })
    }

    /// The package-qualified class name, used as the accumulation key
    pub fn qualified_name(&self) -> String {
        match self.package.as_deref() {
            Some(pkg) if !pkg.is_empty() => format!("{}.{}", pkg, self.name),
            _ => self.name.clone(),
        }
    }
}
