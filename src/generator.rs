//! The generation driver
//!
//! One invocation per build pass: discover marked classes through the
//! metadata provider, validate each, accumulate the valid ones deduplicated
//! by qualified name, then synthesize one artifact per accumulated entry.
//! No state survives the invocation.

use crate::codegen;
use crate::diagnostics::Diagnostics;
use crate::metadata::{
    ClassKind, GeneratorRequest, GeneratorResponse, MarkerKind, MetadataProvider,
};
use crate::options::{self, FailurePolicy};
use crate::schema::SchemaDescriptor;
use crate::GeneratorError;
use std::collections::HashSet;

/// Run one full discovery + synthesis pass over the request
///
/// Validation and emission failures become ERROR diagnostics in the
/// response; `Err` is reserved for configuration and decoding problems that
/// prevent the pass from running at all.
pub fn generate(request: GeneratorRequest) -> Result<GeneratorResponse, GeneratorError> {
    let options = options::parse_parameter(request.parameter.as_deref())?;
    let mut diagnostics = Diagnostics::new();

    // Insertion-ordered accumulation, deduplicated by qualified class name.
    let mut accumulated: Vec<SchemaDescriptor> = Vec::new();
    let mut seen: HashSet<String> = HashSet::new();
    let mut aborted = false;

    for class in request.classes_with_marker(MarkerKind::Schema) {
        if class.kind != ClassKind::Class {
            diagnostics.error(
                Some(&class.qualified_name()),
                "only classes can carry the schema marker",
            );
            if options.on_error == FailurePolicy::Abort {
                aborted = true;
                break;
            }
            continue;
        }

        match SchemaDescriptor::from_class(class, &options) {
            Ok(schema) => {
                if seen.insert(schema.qualified_name()) {
                    accumulated.push(schema);
                }
            }
            Err(err) => {
                diagnostics.error(Some(&class.qualified_name()), err.to_string());
                if options.on_error == FailurePolicy::Abort {
                    aborted = true;
                    break;
                }
            }
        }
    }

    let mut files = Vec::new();
    if !aborted {
        for schema in &accumulated {
            match codegen::generate_wrapper(schema, &options) {
                Ok(file) => files.push(file),
                Err(err) => {
                    // An emission failure aborts the rest of the pass;
                    // artifacts already emitted stay in the response.
                    diagnostics.error(Some(&schema.qualified_name()), err.to_string());
                    break;
                }
            }
        }
    }

    // The accumulation table never outlives the pass.
    accumulated.clear();
    seen.clear();

    Ok(GeneratorResponse {
        files,
        diagnostics: diagnostics.into_items(),
        error: None,
    })
}
