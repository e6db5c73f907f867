//! Polymorphic relationships
//!
//! Some relationships point at one of several resource types. The `type`
//! member of the linkage is the discriminator: it alone selects the variant,
//! the attributes are never inspected to guess a shape. A type this client
//! does not know is an error, so an unfamiliar shape is never reported as
//! an absent relationship.

use std::borrow::Cow;

use super::document::{Document, Included, RawResource};
use crate::error::DecodeError;

/// A closed set of resource shapes behind one relationship.
pub trait PolyRelation: Sized {
    /// Relationship member name on the parent resource
    const RELATION: &'static str;

    /// Discriminators this type knows how to decode
    const DISCRIMINATORS: &'static [&'static str];

    /// The value for an absent or null relationship.
    fn absent() -> Self;

    /// Decode the variant selected by `resource.kind`.
    ///
    /// Only called with a discriminator listed in [`Self::DISCRIMINATORS`].
    fn decode_variant(resource: &RawResource) -> Result<Self, DecodeError>;
}

/// Decode `C::RELATION` of `parent`, resolving the body from `included`
/// when the related resource was side-loaded.
pub fn decode<C: PolyRelation>(parent: &RawResource, included: &Included<'_>) -> Result<C, DecodeError> {
    match parent.to_one(C::RELATION) {
        None => Ok(C::absent()),
        Some(identifier) => {
            let body = match included.get(identifier) {
                Some(resource) => Cow::Borrowed(resource),
                None => Cow::Owned(RawResource::from_identifier(identifier)),
            };
            decode_resource(&body)
        }
    }
}

/// Decode a resource object that is itself one of the variants.
pub fn decode_resource<C: PolyRelation>(resource: &RawResource) -> Result<C, DecodeError> {
    if C::DISCRIMINATORS.contains(&resource.kind.as_str()) {
        C::decode_variant(resource)
    } else {
        Err(DecodeError::UnknownVariant {
            relation: C::RELATION,
            discriminator: resource.kind.clone(),
        })
    }
}

/// Decode the primary data of a relationship endpoint; null data is absent.
pub fn decode_primary<C: PolyRelation>(document: &Document) -> Result<C, DecodeError> {
    match document.primary_resource()? {
        None => Ok(C::absent()),
        Some(resource) => decode_resource(&resource),
    }
}

/// Error for a discriminator that passed the allow-list but has no arm.
pub fn unknown_variant(relation: &'static str, resource: &RawResource) -> DecodeError {
    DecodeError::UnknownVariant {
        relation,
        discriminator: resource.kind.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;
    use serde_json::json;

    #[derive(Debug, Clone, PartialEq)]
    enum Owner {
        None,
        User(String),
        Team { id: String, name: Option<String> },
    }

    #[derive(Deserialize)]
    struct TeamAttrs {
        #[serde(default)]
        name: Option<String>,
    }

    impl PolyRelation for Owner {
        const RELATION: &'static str = "owner";
        const DISCRIMINATORS: &'static [&'static str] = &["users", "teams"];

        fn absent() -> Self {
            Owner::None
        }

        fn decode_variant(resource: &RawResource) -> Result<Self, DecodeError> {
            match resource.kind.as_str() {
                "users" => Ok(Owner::User(resource.id.clone())),
                "teams" => {
                    let attrs: TeamAttrs = resource.attributes("team")?;
                    Ok(Owner::Team {
                        id: resource.id.clone(),
                        name: attrs.name,
                    })
                }
                _ => Err(unknown_variant(Self::RELATION, resource)),
            }
        }
    }

    fn parent(owner: serde_json::Value) -> RawResource {
        serde_json::from_value(json!({
            "type": "things",
            "id": "t-1",
            "relationships": { "owner": { "data": owner } }
        }))
        .unwrap()
    }

    #[test]
    fn test_absent_relationship() {
        let resource: RawResource =
            serde_json::from_value(json!({ "type": "things", "id": "t-1" })).unwrap();
        let owner: Owner = decode(&resource, &Included::empty()).unwrap();
        assert_eq!(owner, Owner::None);

        let owner: Owner = decode(&parent(json!(null)), &Included::empty()).unwrap();
        assert_eq!(owner, Owner::None);
    }

    #[test]
    fn test_discriminator_selects_variant() {
        let owner: Owner =
            decode(&parent(json!({ "type": "users", "id": "user-1" })), &Included::empty()).unwrap();
        assert_eq!(owner, Owner::User("user-1".to_string()));
    }

    #[test]
    fn test_side_loaded_body_is_used() {
        let included: Vec<RawResource> = serde_json::from_value(json!([
            { "type": "teams", "id": "team-1", "attributes": { "name": "ops" } }
        ]))
        .unwrap();

        let owner: Owner = decode(
            &parent(json!({ "type": "teams", "id": "team-1" })),
            &Included::new(&included),
        )
        .unwrap();
        assert_eq!(
            owner,
            Owner::Team {
                id: "team-1".to_string(),
                name: Some("ops".to_string())
            }
        );
    }

    #[test]
    fn test_unknown_discriminator_is_an_error() {
        let err = decode::<Owner>(
            &parent(json!({ "type": "robots", "id": "r-1" })),
            &Included::empty(),
        )
        .unwrap_err();

        match err {
            DecodeError::UnknownVariant {
                relation,
                discriminator,
            } => {
                assert_eq!(relation, "owner");
                assert_eq!(discriminator, "robots");
            }
            other => panic!("Expected UnknownVariant, got {:?}", other),
        }
    }

    #[test]
    fn test_decode_primary() {
        let doc: Document = serde_json::from_value(json!({ "data": null })).unwrap();
        assert_eq!(decode_primary::<Owner>(&doc).unwrap(), Owner::None);

        let doc: Document =
            serde_json::from_value(json!({ "data": { "type": "users", "id": "user-9" } })).unwrap();
        assert_eq!(
            decode_primary::<Owner>(&doc).unwrap(),
            Owner::User("user-9".to_string())
        );
    }
}
