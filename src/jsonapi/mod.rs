//! JSON:API wire format
//!
//! - [`document`] - response envelope and the [`Decode`] mapping trait
//! - [`encode`] - request bodies
//! - [`choice`] - polymorphic relationships decoded by discriminator
//! - [`nullable`] - tri-state attribute values

pub mod choice;
pub mod document;
pub mod encode;
pub mod nullable;

pub use choice::PolyRelation;
pub use document::{
    Decode, Document, Included, Meta, RawResource, Relationship, RelationshipData,
    ResourceIdentifier,
};
pub use encode::Relationships;
pub use nullable::Nullable;

/// Media type for request and response bodies
pub const MEDIA_TYPE: &str = "application/vnd.api+json";
