//! Accessor generation for document wrappers
//!
//! Each declared field becomes one getter/setter pair. Getters read the
//! field's resolved key live from the backing document; setters write the
//! in-memory map and raise the dirty flag. Nothing touches the store until
//! `save`.

use crate::schema::FieldDescriptor;
use crate::types::MappedType;
use crate::GeneratorError;
use heck::ToSnakeCase;
use proc_macro2::TokenStream;
use quote::{format_ident, quote};

/// Generate the getter/setter pair for one field
pub fn generate_accessors(
    field: &FieldDescriptor,
    mapped_type: &MappedType,
) -> Result<TokenStream, GeneratorError> {
    let key = field.storage_key();
    let method_stem = field.name.to_snake_case();
    let getter_ident = format_ident!("get_{}", method_stem);
    let setter_ident = format_ident!("set_{}", method_stem);

    let rust_type: syn::Type = syn::parse_str(&mapped_type.rust_type).map_err(|e| {
        GeneratorError::CodeGenError(format!(
            "cannot parse mapped type `{}` for field `{}`: {}",
            mapped_type.rust_type, field.name, e
        ))
    })?;

    Ok(quote! {
        pub fn #getter_ident(&self) -> Option<#rust_type> {
            self.doc
                .get_property(#key)
                .and_then(|value| serde_json::from_value(value).ok())
        }

        pub fn #setter_ident(&mut self, value: #rust_type) {
            self.properties.insert(#key.to_string(), Value::from(value));
            self.dirty = true;
        }
    })
}
