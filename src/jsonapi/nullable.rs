//! Tri-state attribute values

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// An attribute that can be left out, sent as `null`, or sent with a value.
///
/// Fields of this type must be annotated with
/// `#[serde(default, skip_serializing_if = "Nullable::is_unset")]` so that
/// `Unset` is omitted on the wire and a missing member decodes as `Unset`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Nullable<T> {
    Unset,
    Null,
    Value(T),
}

impl<T> Default for Nullable<T> {
    fn default() -> Self {
        Nullable::Unset
    }
}

impl<T> Nullable<T> {
    pub fn is_unset(&self) -> bool {
        matches!(self, Nullable::Unset)
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Nullable::Null)
    }

    pub fn value(&self) -> Option<&T> {
        match self {
            Nullable::Value(value) => Some(value),
            _ => None,
        }
    }
}

impl<T> From<Option<T>> for Nullable<T> {
    fn from(value: Option<T>) -> Self {
        match value {
            Some(value) => Nullable::Value(value),
            None => Nullable::Null,
        }
    }
}

impl<T: Serialize> Serialize for Nullable<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Nullable::Value(value) => value.serialize(serializer),
            Nullable::Unset | Nullable::Null => serializer.serialize_none(),
        }
    }
}

impl<'de, T: Deserialize<'de>> Deserialize<'de> for Nullable<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Ok(Option::<T>::deserialize(deserializer)?.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[derive(Debug, Default, Serialize, Deserialize, PartialEq)]
    #[serde(rename_all = "kebab-case")]
    struct Attrs {
        #[serde(default, skip_serializing_if = "Nullable::is_unset")]
        auto_destroy_at: Nullable<String>,
    }

    #[test]
    fn test_unset_is_omitted() {
        let value = serde_json::to_value(Attrs::default()).unwrap();
        assert_eq!(value, json!({}));
    }

    #[test]
    fn test_null_is_sent_explicitly() {
        let attrs = Attrs {
            auto_destroy_at: Nullable::Null,
        };
        assert_eq!(
            serde_json::to_value(attrs).unwrap(),
            json!({ "auto-destroy-at": null })
        );
    }

    #[test]
    fn test_value_is_sent() {
        let attrs = Attrs {
            auto_destroy_at: Nullable::Value("2026-01-01T00:00:00Z".to_string()),
        };
        assert_eq!(
            serde_json::to_value(attrs).unwrap(),
            json!({ "auto-destroy-at": "2026-01-01T00:00:00Z" })
        );
    }

    #[test]
    fn test_deserialize_distinguishes_all_three_states() {
        let missing: Attrs = serde_json::from_value(json!({})).unwrap();
        assert!(missing.auto_destroy_at.is_unset());

        let null: Attrs = serde_json::from_value(json!({ "auto-destroy-at": null })).unwrap();
        assert!(null.auto_destroy_at.is_null());

        let set: Attrs = serde_json::from_value(json!({ "auto-destroy-at": "x" })).unwrap();
        assert_eq!(set.auto_destroy_at.value().map(String::as_str), Some("x"));
    }
}
