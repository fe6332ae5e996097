//! Code generation modules for document wrappers
//!
//! This module contains the code generation logic for creating typed
//! wrapper structs from validated schema descriptors.

pub mod accessor;
pub mod wrapper;

use crate::metadata::GeneratedFile;
use crate::options::GeneratorOptions;
use crate::schema::SchemaDescriptor;
use crate::GeneratorError;

/// Generate one wrapper source file from a validated schema descriptor
pub fn generate_wrapper(
    schema: &SchemaDescriptor,
    options: &GeneratorOptions,
) -> Result<GeneratedFile, GeneratorError> {
    wrapper::generate(schema, options)
}
