//! docwrap-gen library
//!
//! This crate provides the code generation logic for turning annotated schema
//! descriptors into strongly-typed wrapper structs over a string-keyed
//! document store.

#![deny(warnings)]
#![deny(missing_docs)]

pub mod codegen;
pub mod diagnostics;
pub mod document;
pub mod generator;
pub mod metadata;
pub mod options;
pub mod schema;
pub mod types;

use metadata::{GeneratorRequest, GeneratorResponse};
use thiserror::Error;

/// Errors that can occur during code generation
#[derive(Error, Debug)]
pub enum GeneratorError {
    /// Failed to decode the request envelope
    #[error("Decode error: {0}")]
    DecodeError(String),

    /// Invalid generator configuration or parameters
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// Encountered a property type with no Rust mapping
    #[error("Unknown property type: {0}")]
    UnknownPropertyType(String),

    /// General code generation failure
    #[error("Code generation failed: {0}")]
    CodeGenError(String),
}

/// Generate document wrappers from a [`GeneratorRequest`]
///
/// This is the main entry point for the code generator.
pub fn generate(request: GeneratorRequest) -> Result<GeneratorResponse, GeneratorError> {
    generator::generate(request)
}

/// Generate document wrappers from a JSON-encoded request
///
/// This is the entry point used by the binary, which receives the request
/// envelope on stdin.
pub fn generate_from_json(json: &str) -> Result<GeneratorResponse, GeneratorError> {
    let request: GeneratorRequest =
        serde_json::from_str(json).map_err(|e| GeneratorError::DecodeError(e.to_string()))?;
    generator::generate(request)
}
