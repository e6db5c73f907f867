//! Test fixtures for JSON:API payloads
//!
//! Builders for resource objects and documents with sensible defaults.
//! Import via `use crate::client::fixtures::*` in test modules.

#![allow(dead_code)] // Builder methods are available for future tests

use serde_json::{Map, Value, json};

use crate::jsonapi::{Document, RawResource};

// ============================================================================
// ResourceBuilder
// ============================================================================

/// Builder for resource objects.
///
/// # Example
/// ```ignore
/// let ws = ResourceBuilder::new("workspaces", "ws-1")
///     .attribute("name", json!("app"))
///     .to_one("organization", "organizations", "acme")
///     .build();
/// ```
#[derive(Debug, Clone)]
pub struct ResourceBuilder {
    kind: String,
    id: String,
    attributes: Map<String, Value>,
    relationships: Map<String, Value>,
}

impl ResourceBuilder {
    pub fn new(kind: impl Into<String>, id: impl Into<String>) -> Self {
        Self {
            kind: kind.into(),
            id: id.into(),
            attributes: Map::new(),
            relationships: Map::new(),
        }
    }

    pub fn attribute(mut self, name: &str, value: Value) -> Self {
        self.attributes.insert(name.to_string(), value);
        self
    }

    pub fn to_one(mut self, name: &str, kind: &str, id: &str) -> Self {
        self.relationships
            .insert(name.to_string(), json!({ "data": { "type": kind, "id": id } }));
        self
    }

    pub fn to_one_null(mut self, name: &str) -> Self {
        self.relationships
            .insert(name.to_string(), json!({ "data": null }));
        self
    }

    pub fn to_many(mut self, name: &str, kind: &str, ids: &[&str]) -> Self {
        let data: Vec<Value> = ids
            .iter()
            .map(|id| json!({ "type": kind, "id": id }))
            .collect();
        self.relationships
            .insert(name.to_string(), json!({ "data": data }));
        self
    }

    pub fn build(self) -> Value {
        json!({
            "type": self.kind,
            "id": self.id,
            "attributes": self.attributes,
            "relationships": self.relationships,
        })
    }

    pub fn build_raw(self) -> RawResource {
        serde_json::from_value(self.build()).expect("fixture resource must decode")
    }
}

// ============================================================================
// Documents
// ============================================================================

pub fn document(value: Value) -> Document {
    serde_json::from_value(value).expect("fixture document must decode")
}

/// `{ "data": resource, "included": [...] }`
pub fn single(resource: Value, included: Vec<Value>) -> Document {
    document(json!({ "data": resource, "included": included }))
}

/// A list document with pagination metadata.
pub fn page(resources: Vec<Value>, current_page: usize, total_pages: usize, total_count: usize) -> Document {
    document(json!({
        "data": resources,
        "meta": { "pagination": {
            "current-page": current_page,
            "prev-page": if current_page > 1 { json!(current_page - 1) } else { Value::Null },
            "next-page": if current_page < total_pages { json!(current_page + 1) } else { Value::Null },
            "total-pages": total_pages,
            "total-count": total_count,
        } }
    }))
}
