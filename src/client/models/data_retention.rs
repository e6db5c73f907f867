//! Data retention policies
//!
//! A workspace or organization points at its data retention policy through
//! the `data-retention-policy` relationship. The related resource is one of
//! three types:
//!
//! - `data-retention-policies` - the original shape, delete after N days
//! - `data-retention-policy-delete-olders` - delete after N days
//! - `data-retention-policy-dont-deletes` - keep everything
//!
//! [`DataRetentionPolicyChoice`] holds whichever one was returned. Parents
//! also keep the deprecated single-shape [`DataRetentionPolicy`] field,
//! filled only for the delete-older shapes via
//! [`DataRetentionPolicyChoice::to_legacy`].

use serde::{Deserialize, Serialize};

use crate::jsonapi::choice::{self, PolyRelation};
use crate::jsonapi::{Decode, Included, RawResource};
use crate::error::{DecodeError, ValidationError};

pub const LEGACY_TYPE: &str = "data-retention-policies";
pub const DELETE_OLDER_TYPE: &str = "data-retention-policy-delete-olders";
pub const DONT_DELETE_TYPE: &str = "data-retention-policy-dont-deletes";

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "kebab-case")]
struct DeleteOlderAttributes {
    #[serde(default)]
    delete_older_than_n_days: u32,
}

/// Deprecated single-shape policy.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DataRetentionPolicy {
    pub id: String,

    /// Zero when the policy body was not side-loaded
    pub delete_older_than_n_days: u32,
}

/// Delete data older than a number of days.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DataRetentionPolicyDeleteOlder {
    pub id: String,

    /// Zero when the policy body was not side-loaded
    pub delete_older_than_n_days: u32,
}

/// Never delete data.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DataRetentionPolicyDontDelete {
    pub id: String,
}

impl Decode for DataRetentionPolicyDeleteOlder {
    const TYPE: &'static str = DELETE_OLDER_TYPE;

    fn decode(resource: &RawResource, _included: &Included<'_>) -> Result<Self, DecodeError> {
        let attrs: DeleteOlderAttributes = resource.attributes("data retention policy")?;
        Ok(Self {
            id: resource.id.clone(),
            delete_older_than_n_days: attrs.delete_older_than_n_days,
        })
    }
}

impl Decode for DataRetentionPolicyDontDelete {
    const TYPE: &'static str = DONT_DELETE_TYPE;

    fn decode(resource: &RawResource, _included: &Included<'_>) -> Result<Self, DecodeError> {
        Ok(Self {
            id: resource.id.clone(),
        })
    }
}

/// The data retention policy relationship, at most one shape populated.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum DataRetentionPolicyChoice {
    /// No policy set
    #[default]
    Absent,
    Legacy(DataRetentionPolicy),
    DeleteOlder(DataRetentionPolicyDeleteOlder),
    DontDelete(DataRetentionPolicyDontDelete),
}

impl DataRetentionPolicyChoice {
    pub fn is_populated(&self) -> bool {
        !matches!(self, DataRetentionPolicyChoice::Absent)
    }

    pub fn legacy(&self) -> Option<&DataRetentionPolicy> {
        match self {
            DataRetentionPolicyChoice::Legacy(policy) => Some(policy),
            _ => None,
        }
    }

    pub fn delete_older(&self) -> Option<&DataRetentionPolicyDeleteOlder> {
        match self {
            DataRetentionPolicyChoice::DeleteOlder(policy) => Some(policy),
            _ => None,
        }
    }

    pub fn dont_delete(&self) -> Option<&DataRetentionPolicyDontDelete> {
        match self {
            DataRetentionPolicyChoice::DontDelete(policy) => Some(policy),
            _ => None,
        }
    }

    /// Value for the deprecated single-shape field. Only the delete-older
    /// shapes have a legacy equivalent; dont-delete and absent map to `None`.
    pub fn to_legacy(&self) -> Option<DataRetentionPolicy> {
        match self {
            DataRetentionPolicyChoice::Legacy(policy) => Some(policy.clone()),
            DataRetentionPolicyChoice::DeleteOlder(policy) => Some(DataRetentionPolicy {
                id: policy.id.clone(),
                delete_older_than_n_days: policy.delete_older_than_n_days,
            }),
            DataRetentionPolicyChoice::DontDelete(_) | DataRetentionPolicyChoice::Absent => None,
        }
    }
}

impl PolyRelation for DataRetentionPolicyChoice {
    const RELATION: &'static str = "data-retention-policy";
    const DISCRIMINATORS: &'static [&'static str] = &[LEGACY_TYPE, DELETE_OLDER_TYPE, DONT_DELETE_TYPE];

    fn absent() -> Self {
        DataRetentionPolicyChoice::Absent
    }

    fn decode_variant(resource: &RawResource) -> Result<Self, DecodeError> {
        let included = Included::empty();
        match resource.kind.as_str() {
            LEGACY_TYPE => {
                let attrs: DeleteOlderAttributes = resource.attributes("data retention policy")?;
                Ok(DataRetentionPolicyChoice::Legacy(DataRetentionPolicy {
                    id: resource.id.clone(),
                    delete_older_than_n_days: attrs.delete_older_than_n_days,
                }))
            }
            DELETE_OLDER_TYPE => Ok(DataRetentionPolicyChoice::DeleteOlder(
                DataRetentionPolicyDeleteOlder::decode(resource, &included)?,
            )),
            DONT_DELETE_TYPE => Ok(DataRetentionPolicyChoice::DontDelete(
                DataRetentionPolicyDontDelete::decode(resource, &included)?,
            )),
            _ => Err(choice::unknown_variant(Self::RELATION, resource)),
        }
    }
}

/// Decoded relationship plus the deprecated field derived from it.
pub(crate) fn decode_for_parent(
    parent: &RawResource,
    included: &Included<'_>,
) -> Result<(DataRetentionPolicyChoice, Option<DataRetentionPolicy>), DecodeError> {
    let choice: DataRetentionPolicyChoice = choice::decode(parent, included)?;
    let legacy = choice.to_legacy();
    Ok((choice, legacy))
}

/// Options for setting a delete-older policy.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub struct DataRetentionPolicyDeleteOlderSetOptions {
    pub delete_older_than_n_days: u32,
}

impl DataRetentionPolicyDeleteOlderSetOptions {
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.delete_older_than_n_days == 0 {
            return Err(ValidationError::InvalidValue("delete-older-than-n-days"));
        }
        Ok(())
    }
}

/// Options for setting a dont-delete policy. Carries no attributes.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct DataRetentionPolicyDontDeleteSetOptions {}
