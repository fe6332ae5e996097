// @generated by docwrap-gen. Do not edit.

use docwrap_gen::document::{Document, PropertyMap, StoreError};
use serde_json::Value;
pub struct Article<D: Document> {
    doc: D,
    dirty: bool,
    properties: PropertyMap,
}
impl<D: Document> Article<D> {
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
    pub fn get_title(&self) -> Option<String> {
        self.doc
            .get_property("title")
            .and_then(|value| serde_json::from_value(value).ok())
    }
    pub fn set_title(&mut self, value: String) {
        self.properties.insert("title".to_string(), Value::from(value));
        self.dirty = true;
    }
    pub fn get_content(&self) -> Option<String> {
        self.doc
            .get_property("text")
            .and_then(|value| serde_json::from_value(value).ok())
    }
    pub fn set_content(&mut self, value: String) {
        self.properties.insert("text".to_string(), Value::from(value));
        self.dirty = true;
    }
}
impl<D: Document> std::ops::Deref for Article<D> {
    type Target = PropertyMap;
    fn deref(&self) -> &PropertyMap {
        &self.properties
    }
}
