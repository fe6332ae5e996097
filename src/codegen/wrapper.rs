//! Wrapper struct generation
//!
//! Synthesizes the full source artifact for one schema class: a struct
//! holding the backing document handle, a dirty flag and an in-memory
//! property map, with a snapshot-loading constructor, a `save` method and
//! one accessor pair per field. The shape is fixed regardless of input.

use crate::codegen::accessor;
use crate::metadata::GeneratedFile;
use crate::options::GeneratorOptions;
use crate::schema::SchemaDescriptor;
use crate::types::map_property_type;
use crate::GeneratorError;
use heck::ToSnakeCase;
use quote::{format_ident, quote};

/// Banner prepended to every generated file
const GENERATED_BANNER: &str = "// @generated by docwrap-gen. Do not edit.\n\n";

/// Generate the wrapper source file for one schema class
pub fn generate(
    schema: &SchemaDescriptor,
    options: &GeneratorOptions,
) -> Result<GeneratedFile, GeneratorError> {
    let struct_name = derive_struct_name(&schema.name, &options.schema_suffix);
    let struct_ident = format_ident!("{}", struct_name);

    let runtime: syn::Path = syn::parse_str(&options.runtime_path).map_err(|e| {
        GeneratorError::InvalidConfig(format!(
            "invalid runtime path `{}`: {}",
            options.runtime_path, e
        ))
    })?;

    let mut accessors = Vec::new();
    for field in &schema.fields {
        let mapped = map_property_type(&field.value_type)?;
        accessors.push(accessor::generate_accessors(field, &mapped)?);
    }

    // serde_json::Value is only referenced from accessor bodies.
    let value_use = if schema.fields.is_empty() {
        quote! {}
    } else {
        quote! { use serde_json::Value; }
    };

    let tokens = quote! {
        use #runtime::{Document, PropertyMap, StoreError};
        #value_use

        pub struct #struct_ident<D: Document> {
            doc: D,
            dirty: bool,
            properties: PropertyMap,
        }

        impl<D: Document> #struct_ident<D> {
            pub fn new(doc: D) -> Self {
                let properties = doc.get_properties();
                Self {
                    doc,
                    dirty: false,
                    properties,
                }
            }

            pub fn save(&mut self) -> Result<(), StoreError> {
                if self.dirty {
                    self.doc.put_properties(&self.properties)?;
                    self.dirty = false;
                }
                Ok(())
            }

            #(#accessors)*
        }

        impl<D: Document> std::ops::Deref for #struct_ident<D> {
            type Target = PropertyMap;

            fn deref(&self) -> &PropertyMap {
                &self.properties
            }
        }
    };

    let file: syn::File = syn::parse2(tokens).map_err(|e| {
        GeneratorError::CodeGenError(format!(
            "generated wrapper for {} does not parse: {}",
            schema.qualified_name(),
            e
        ))
    })?;
    let content = format!("{}{}", GENERATED_BANNER, prettyplease::unparse(&file));

    Ok(GeneratedFile {
        name: output_path(schema, &struct_name),
        content,
    })
}

/// Derive the wrapper struct name from the schema class name
///
/// Strips exactly one trailing occurrence of the suffix; names without the
/// suffix pass through unchanged, as does a name that is nothing but the
/// suffix.
pub fn derive_struct_name(schema_name: &str, suffix: &str) -> String {
    schema_name
        .strip_suffix(suffix)
        .filter(|stripped| !stripped.is_empty())
        .unwrap_or(schema_name)
        .to_string()
}

/// File name for the generated artifact, relative to the generated-sources
/// root: the dotted package becomes a directory path
fn output_path(schema: &SchemaDescriptor, struct_name: &str) -> String {
    let file = format!("{}.rs", struct_name.to_snake_case());
    match schema.package.as_deref() {
        Some(pkg) if !pkg.is_empty() => {
            format!("{}/{}", pkg.split('.').collect::<Vec<_>>().join("/"), file)
        }
        _ => file,
    }
}
