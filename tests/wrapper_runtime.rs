//! Runtime behavior of a generated wrapper
//!
//! Compiles the checked-in generated output for the ArticleSchema example
//! (tests/fixtures/article.rs) and exercises it against an in-memory
//! document store: dirty tracking, write-once save, failure propagation and
//! the live-read getter asymmetry.

use docwrap_gen::document::{Document, PropertyMap, StoreError};
use serde_json::{json, Value};
use std::cell::RefCell;
use std::rc::Rc;

mod article {
    include!("fixtures/article.rs");
}

use article::Article;

#[derive(Default)]
struct DocState {
    properties: PropertyMap,
    writes: usize,
    fail_writes: bool,
}

/// A document handle whose state the test can observe and mutate from the
/// outside while a wrapper owns a clone of the handle
#[derive(Clone, Default)]
struct SharedDocument {
    state: Rc<RefCell<DocState>>,
}

impl SharedDocument {
    fn seeded(entries: &[(&str, Value)]) -> Self {
        let doc = Self::default();
        {
            let mut state = doc.state.borrow_mut();
            for (key, value) in entries {
                state.properties.insert((*key).to_string(), value.clone());
            }
        }
        doc
    }

    fn writes(&self) -> usize {
        self.state.borrow().writes
    }

    fn property(&self, key: &str) -> Option<Value> {
        self.state.borrow().properties.get(key).cloned()
    }

    fn set_property(&self, key: &str, value: Value) {
        self.state
            .borrow_mut()
            .properties
            .insert(key.to_string(), value);
    }

    fn fail_writes(&self, fail: bool) {
        self.state.borrow_mut().fail_writes = fail;
    }
}

impl Document for SharedDocument {
    fn get_property(&self, key: &str) -> Option<Value> {
        self.state.borrow().properties.get(key).cloned()
    }

    fn get_properties(&self) -> PropertyMap {
        self.state.borrow().properties.clone()
    }

    fn put_properties(&mut self, properties: &PropertyMap) -> Result<(), StoreError> {
        let mut state = self.state.borrow_mut();
        if state.fail_writes {
            return Err(StoreError::WriteRejected("simulated outage".to_string()));
        }
        state.writes += 1;
        state.properties = properties.clone();
        Ok(())
    }
}

#[test]
fn test_save_when_clean_performs_no_write() {
    let doc = SharedDocument::default();
    let mut article = Article::new(doc.clone());

    article.save().expect("clean save should succeed");
    assert_eq!(doc.writes(), 0, "a clean wrapper must not touch the store");
}

#[test]
fn test_setter_defers_write_until_save() {
    let doc = SharedDocument::default();
    let mut article = Article::new(doc.clone());

    article.set_title("Hello".to_string());
    assert_eq!(doc.property("title"), None, "setters must not write the store");

    article.save().expect("save should succeed");
    assert_eq!(doc.writes(), 1);
    assert_eq!(doc.property("title"), Some(json!("Hello")));

    // The dirty flag was cleared; saving again writes nothing.
    article.save().expect("second save should succeed");
    assert_eq!(doc.writes(), 1, "a clean save after flush must not write again");
}

#[test]
fn test_failed_save_keeps_dirty_and_surfaces_the_error() {
    let doc = SharedDocument::default();
    let mut article = Article::new(doc.clone());

    article.set_title("Hello".to_string());
    doc.fail_writes(true);

    let err = article.save().expect_err("store failure must surface");
    assert!(matches!(err, StoreError::WriteRejected(_)));
    assert_eq!(doc.writes(), 0);
    assert_eq!(doc.property("title"), None);

    // Dirty stayed set, so a later save retries the write.
    doc.fail_writes(false);
    article.save().expect("retry should succeed");
    assert_eq!(doc.writes(), 1);
    assert_eq!(doc.property("title"), Some(json!("Hello")));
}

#[test]
fn test_getters_read_live_from_the_document() {
    let doc = SharedDocument::seeded(&[("title", json!("First"))]);
    let article = Article::new(doc.clone());

    assert_eq!(article.get_title(), Some("First".to_string()));

    // A value written to the store behind the wrapper's back is visible
    // without reloading.
    doc.set_property("title", json!("Second"));
    assert_eq!(article.get_title(), Some("Second".to_string()));
}

#[test]
fn test_override_key_is_used_for_reads_and_writes() {
    let doc = SharedDocument::seeded(&[("text", json!("stored body"))]);
    let mut article = Article::new(doc.clone());

    assert_eq!(article.get_content(), Some("stored body".to_string()));

    article.set_content("new body".to_string());
    article.save().expect("save should succeed");

    assert_eq!(doc.property("text"), Some(json!("new body")));
    assert_eq!(doc.property("content"), None);
}

#[test]
fn test_constructor_snapshots_the_property_map() {
    let doc = SharedDocument::seeded(&[("title", json!("seed")), ("text", json!("body"))]);
    let article = Article::new(doc.clone());

    // The wrapper derefs to its in-memory snapshot.
    assert_eq!(article.len(), 2);
    assert_eq!(article.get("title"), Some(&json!("seed")));

    // Later store writes do not alter the snapshot, only live getters.
    doc.set_property("title", json!("changed"));
    assert_eq!(article.get("title"), Some(&json!("seed")));
}

#[test]
fn test_mismatched_value_type_reads_as_none() {
    let doc = SharedDocument::seeded(&[("title", json!(42))]);
    let article = Article::new(doc.clone());

    assert_eq!(article.get_title(), None);
}

#[test]
fn test_fixture_matches_generator_output_shape() {
    use docwrap_gen::metadata::{
        ClassDescriptor, GeneratorRequest, MarkerDescriptor, MarkerKind, MemberDescriptor,
        MemberKind, Visibility,
    };

    let request = GeneratorRequest {
        parameter: None,
        classes: vec![ClassDescriptor {
            name: "ArticleSchema".to_string(),
            package: Some("blog".to_string()),
            visibility: Visibility::Public,
            markers: vec![MarkerDescriptor {
                kind: MarkerKind::Schema,
                value: None,
            }],
            members: vec![
                MemberDescriptor {
                    name: "<init>".to_string(),
                    kind: MemberKind::Constructor,
                    visibility: Visibility::Public,
                    ..Default::default()
                },
                MemberDescriptor {
                    name: "title".to_string(),
                    kind: MemberKind::Field,
                    value_type: Some("string".to_string()),
                    ..Default::default()
                },
                MemberDescriptor {
                    name: "content".to_string(),
                    kind: MemberKind::Field,
                    value_type: Some("string".to_string()),
                    markers: vec![MarkerDescriptor {
                        kind: MarkerKind::FieldKey,
                        value: Some("text".to_string()),
                    }],
                    ..Default::default()
                },
            ],
            ..Default::default()
        }],
    };

    let response = docwrap_gen::generate(request).expect("generation should succeed");
    let generated = &response.files[0].content;
    let fixture = include_str!("fixtures/article.rs");

    // Every signature the fixture exercises must be present in the live
    // generator output, so the fixture cannot silently drift.
    for signature in [
        "pub struct Article<D: Document>",
        "pub fn new(doc: D) -> Self",
        "pub fn save(&mut self) -> Result<(), StoreError>",
        "pub fn get_title(&self) -> Option<String>",
        "pub fn set_title(&mut self, value: String)",
        "pub fn get_content(&self) -> Option<String>",
        "pub fn set_content(&mut self, value: String)",
        "impl<D: Document> std::ops::Deref for Article<D>",
    ] {
        assert!(generated.contains(signature), "generator lost: {}", signature);
        assert!(fixture.contains(signature), "fixture lost: {}", signature);
    }
}
