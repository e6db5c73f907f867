//! Request document construction

use serde::Serialize;
use serde_json::{Map, Value, json};

/// Relationship members of an outgoing resource object
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Relationships(Map<String, Value>);

impl Relationships {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a to-one linkage.
    pub fn to_one(mut self, name: &str, kind: &str, id: &str) -> Self {
        self.0.insert(
            name.to_string(),
            json!({ "data": { "type": kind, "id": id } }),
        );
        self
    }

    /// Add a to-one linkage when `id` is present.
    pub fn to_one_opt(self, name: &str, kind: &str, id: Option<&str>) -> Self {
        match id {
            Some(id) => self.to_one(name, kind, id),
            None => self,
        }
    }

    /// Add a to-many linkage.
    pub fn to_many<'a>(mut self, name: &str, kind: &str, ids: impl IntoIterator<Item = &'a str>) -> Self {
        self.0.insert(name.to_string(), identifiers(kind, ids));
        self
    }

    /// Add a to-many linkage built from already-encoded resource objects.
    pub fn to_many_resources(mut self, name: &str, resources: Vec<Value>) -> Self {
        self.0.insert(name.to_string(), json!({ "data": resources }));
        self
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Encode a single resource object, without the `data` wrapper.
pub fn resource_object<A: Serialize>(
    kind: &str,
    id: Option<&str>,
    attributes: &A,
    relationships: Relationships,
) -> Result<Value, serde_json::Error> {
    let mut object = Map::new();
    object.insert("type".to_string(), Value::String(kind.to_string()));
    if let Some(id) = id {
        object.insert("id".to_string(), Value::String(id.to_string()));
    }
    object.insert("attributes".to_string(), serde_json::to_value(attributes)?);
    if !relationships.is_empty() {
        object.insert("relationships".to_string(), Value::Object(relationships.0));
    }
    Ok(Value::Object(object))
}

/// `{ "data": <resource object> }`
pub fn resource<A: Serialize>(
    kind: &str,
    id: Option<&str>,
    attributes: &A,
    relationships: Relationships,
) -> Result<Value, serde_json::Error> {
    Ok(json!({ "data": resource_object(kind, id, attributes, relationships)? }))
}

/// `{ "data": [{ "type": kind, "id": id }, ...] }`
pub fn identifiers<'a>(kind: &str, ids: impl IntoIterator<Item = &'a str>) -> Value {
    let data: Vec<Value> = ids
        .into_iter()
        .map(|id| json!({ "type": kind, "id": id }))
        .collect();
    json!({ "data": data })
}
