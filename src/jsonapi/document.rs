//! JSON:API document envelope
//!
//! Responses from the service are JSON:API documents: a primary `data`
//! member holding one resource object, a list of them, or `null`, plus an
//! optional `included` array of side-loaded resources and a `meta` object
//! carrying pagination. Resource types implement [`Decode`] to map a
//! [`RawResource`] onto their typed representation.

use std::collections::BTreeMap;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::client::pagination::Pagination;
use crate::error::DecodeError;

/// `{ "type": ..., "id": ... }` linkage object
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ResourceIdentifier {
    #[serde(rename = "type")]
    pub kind: String,
    pub id: String,
}

impl ResourceIdentifier {
    pub fn new(kind: impl Into<String>, id: impl Into<String>) -> Self {
        Self {
            kind: kind.into(),
            id: id.into(),
        }
    }
}

/// Linkage carried by a relationship
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum RelationshipData {
    Many(Vec<ResourceIdentifier>),
    One(ResourceIdentifier),
}

/// A named relationship of a resource object
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Relationship {
    /// `None` when the member is missing or explicitly `null`
    #[serde(default)]
    pub data: Option<RelationshipData>,

    #[serde(default)]
    pub links: Option<Value>,
}

/// An undecoded resource object
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct RawResource {
    #[serde(rename = "type")]
    pub kind: String,

    #[serde(default)]
    pub id: String,

    #[serde(default)]
    pub attributes: Value,

    #[serde(default)]
    pub relationships: BTreeMap<String, Relationship>,

    #[serde(default)]
    pub links: BTreeMap<String, Value>,
}

impl RawResource {
    /// A resource known only by its linkage (not side-loaded).
    pub fn from_identifier(identifier: &ResourceIdentifier) -> Self {
        Self {
            kind: identifier.kind.clone(),
            id: identifier.id.clone(),
            attributes: Value::Null,
            relationships: BTreeMap::new(),
            links: BTreeMap::new(),
        }
    }

    pub fn identifier(&self) -> ResourceIdentifier {
        ResourceIdentifier::new(self.kind.clone(), self.id.clone())
    }

    /// Fail unless this resource has the given type.
    pub fn expect_type(&self, expected: &'static str) -> Result<(), DecodeError> {
        if self.kind == expected {
            Ok(())
        } else {
            Err(DecodeError::UnexpectedType {
                expected,
                found: self.kind.clone(),
            })
        }
    }

    /// Deserialize the attributes object. A missing object decodes as `{}`.
    pub fn attributes<T: DeserializeOwned>(&self, resource: &'static str) -> Result<T, DecodeError> {
        let value = match &self.attributes {
            Value::Null => Value::Object(serde_json::Map::new()),
            other => other.clone(),
        };
        serde_json::from_value(value).map_err(|source| DecodeError::Attributes { resource, source })
    }

    pub fn relationship(&self, name: &str) -> Option<&Relationship> {
        self.relationships.get(name)
    }

    /// Linkage of a to-one relationship, `None` if absent or null.
    pub fn to_one(&self, name: &str) -> Option<&ResourceIdentifier> {
        match self.relationship(name)?.data.as_ref()? {
            RelationshipData::One(identifier) => Some(identifier),
            RelationshipData::Many(_) => None,
        }
    }

    /// Linkage of a to-many relationship, empty if absent.
    pub fn to_many(&self, name: &str) -> Vec<&ResourceIdentifier> {
        match self.relationship(name).and_then(|r| r.data.as_ref()) {
            Some(RelationshipData::Many(identifiers)) => identifiers.iter().collect(),
            Some(RelationshipData::One(identifier)) => vec![identifier],
            None => Vec::new(),
        }
    }

    /// Id of a to-one relationship.
    pub fn to_one_id(&self, name: &str) -> Option<String> {
        self.to_one(name).map(|identifier| identifier.id.clone())
    }
}

/// Lookup over the `included` array of a document
#[derive(Debug, Clone, Copy)]
pub struct Included<'a> {
    resources: &'a [RawResource],
}

impl<'a> Included<'a> {
    pub fn new(resources: &'a [RawResource]) -> Self {
        Self { resources }
    }

    pub fn empty() -> Included<'static> {
        Included { resources: &[] }
    }

    pub fn get(&self, identifier: &ResourceIdentifier) -> Option<&'a RawResource> {
        self.resources
            .iter()
            .find(|r| r.kind == identifier.kind && r.id == identifier.id)
    }

    /// Decode the side-loaded resource behind a linkage, if present.
    pub fn decode<T: Decode>(&self, identifier: &ResourceIdentifier) -> Result<Option<T>, DecodeError> {
        match self.get(identifier) {
            Some(resource) if resource.kind == T::TYPE => T::decode(resource, self).map(Some),
            _ => Ok(None),
        }
    }
}

/// Explicit mapping from a resource object to a typed value.
pub trait Decode: Sized {
    /// The JSON:API `type` this value decodes from
    const TYPE: &'static str;

    fn decode(resource: &RawResource, included: &Included<'_>) -> Result<Self, DecodeError>;
}

/// `meta` member of a document
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Meta {
    #[serde(default)]
    pub pagination: Option<Pagination>,
}

/// A response document
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Document {
    #[serde(default)]
    pub data: Value,

    #[serde(default)]
    pub included: Vec<RawResource>,

    #[serde(default)]
    pub meta: Option<Meta>,
}

/// JSON type name of `value`, for error messages.
fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

impl Document {
    pub fn included(&self) -> Included<'_> {
        Included::new(&self.included)
    }

    pub fn pagination(&self) -> Option<&Pagination> {
        self.meta.as_ref().and_then(|m| m.pagination.as_ref())
    }

    /// The single primary resource, `None` when `data` is null.
    pub fn primary_resource(&self) -> Result<Option<RawResource>, DecodeError> {
        match &self.data {
            Value::Null => Ok(None),
            Value::Object(_) => Ok(Some(Self::raw(&self.data)?)),
            other => Err(DecodeError::UnexpectedType {
                expected: "single resource",
                found: json_kind(other).to_string(),
            }),
        }
    }

    /// The primary resource list; a single object is rejected.
    pub fn primary_resources(&self) -> Result<Vec<RawResource>, DecodeError> {
        match &self.data {
            Value::Null => Ok(Vec::new()),
            Value::Array(items) => items.iter().map(Self::raw).collect(),
            other => Err(DecodeError::UnexpectedType {
                expected: "resource list",
                found: json_kind(other).to_string(),
            }),
        }
    }

    pub fn decode_one<T: Decode>(&self) -> Result<T, DecodeError> {
        let resource = self.primary_resource()?.ok_or(DecodeError::MissingData)?;
        resource.expect_type(T::TYPE)?;
        T::decode(&resource, &self.included())
    }

    pub fn decode_many<T: Decode>(&self) -> Result<Vec<T>, DecodeError> {
        let included = self.included();
        self.primary_resources()?
            .iter()
            .map(|resource| {
                resource.expect_type(T::TYPE)?;
                T::decode(resource, &included)
            })
            .collect()
    }

    fn raw(value: &Value) -> Result<RawResource, DecodeError> {
        serde_json::from_value(value.clone()).map_err(|source| DecodeError::Attributes {
            resource: "resource object",
            source,
        })
    }
}
