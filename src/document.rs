//! The document-store contract consumed by generated wrappers
//!
//! The store itself is external; generated code only needs a property bag
//! that can be snapshotted, read by key, and written back atomically. An
//! in-memory implementation ships here for tests and demos.

use serde_json::Value;
use thiserror::Error;

/// The property bag a document exposes: string keys to loosely-typed values
pub type PropertyMap = serde_json::Map<String, Value>;

/// Errors surfaced by the underlying document store
#[derive(Error, Debug)]
pub enum StoreError {
    /// The store rejected a property write
    #[error("document store rejected the write: {0}")]
    WriteRejected(String),
}

/// A handle to one stored document
pub trait Document {
    /// Read a single property value by key
    fn get_property(&self, key: &str) -> Option<Value>;

    /// Snapshot all current properties
    fn get_properties(&self) -> PropertyMap;

    /// Replace the document's properties with the given map
    fn put_properties(&mut self, properties: &PropertyMap) -> Result<(), StoreError>;
}

/// An in-memory [`Document`] for tests and demos
#[derive(Debug, Clone, Default)]
pub struct MemoryDocument {
    properties: PropertyMap,
}

impl MemoryDocument {
    /// Create an empty document
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a document seeded with the given properties
    pub fn with_properties(properties: PropertyMap) -> Self {
        Self { properties }
    }

    /// The currently stored properties
    pub fn properties(&self) -> &PropertyMap {
        &self.properties
    }
}

impl Document for MemoryDocument {
    fn get_property(&self, key: &str) -> Option<Value> {
        self.properties.get(key).cloned()
    }

    fn get_properties(&self) -> PropertyMap {
        self.properties.clone()
    }

    fn put_properties(&mut self, properties: &PropertyMap) -> Result<(), StoreError> {
        self.properties = properties.clone();
        Ok(())
    }
}
