//! Policy models (Sentinel and OPA)

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::common::wire_enum;
use crate::client::pagination::{ListOptions, QueryParams};
use crate::error::{DecodeError, ValidationError};
use crate::jsonapi::{Decode, Included, RawResource};
use crate::validation::{require_name, valid_string};

wire_enum! {
    /// Policy language
    PolicyKind("kind") {
        Sentinel => "sentinel",
        Opa => "opa",
    }
}

wire_enum! {
    /// What happens when a policy fails
    EnforcementLevel("enforcement-level") {
        Advisory => "advisory",
        SoftMandatory => "soft-mandatory",
        HardMandatory => "hard-mandatory",
        Mandatory => "mandatory",
    }
}

impl EnforcementLevel {
    /// Levels accepted for a policy of `kind`.
    pub fn allowed_for(kind: PolicyKind) -> &'static [EnforcementLevel] {
        match kind {
            PolicyKind::Sentinel => &[
                EnforcementLevel::Advisory,
                EnforcementLevel::SoftMandatory,
                EnforcementLevel::HardMandatory,
            ],
            PolicyKind::Opa => &[EnforcementLevel::Advisory, EnforcementLevel::Mandatory],
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Policy {
    pub id: String,
    pub name: String,
    pub kind: PolicyKind,
    pub query: Option<String>,
    pub description: Option<String>,
    pub enforcement_level: Option<EnforcementLevel>,
    pub policy_set_count: u32,
    pub updated_at: Option<DateTime<Utc>>,
    pub organization: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
struct Enforcement {
    mode: Option<EnforcementLevel>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "kebab-case")]
struct PolicyAttributes {
    name: String,
    #[serde(default)]
    kind: Option<PolicyKind>,
    #[serde(default)]
    query: Option<String>,
    #[serde(default)]
    description: Option<String>,
    #[serde(default)]
    enforcement_level: Option<EnforcementLevel>,
    #[serde(default)]
    enforce: Vec<Enforcement>,
    #[serde(default)]
    policy_set_count: u32,
    #[serde(default)]
    updated_at: Option<DateTime<Utc>>,
}

impl Decode for Policy {
    const TYPE: &'static str = "policies";

    fn decode(resource: &RawResource, _included: &Included<'_>) -> Result<Self, DecodeError> {
        let attrs: PolicyAttributes = resource.attributes("policy")?;
        // Older servers only report the level inside `enforce`.
        let enforcement_level = attrs
            .enforcement_level
            .or_else(|| attrs.enforce.first().and_then(|e| e.mode));

        Ok(Policy {
            id: resource.id.clone(),
            name: attrs.name,
            kind: attrs.kind.unwrap_or(PolicyKind::Sentinel),
            query: attrs.query,
            description: attrs.description,
            enforcement_level,
            policy_set_count: attrs.policy_set_count,
            updated_at: attrs.updated_at,
            organization: resource.to_one_id("organization"),
        })
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PolicyListOptions {
    pub list: ListOptions,
    pub search: Option<String>,
    pub kind: Option<PolicyKind>,
}

impl PolicyListOptions {
    pub fn to_query_params(&self) -> QueryParams {
        let mut params = self.list.to_query_params();
        if let Some(search) = &self.search {
            params.push(("search[name]".to_string(), search.clone()));
        }
        if let Some(kind) = self.kind {
            params.push(("filter[kind]".to_string(), kind.to_string()));
        }
        params
    }
}

/// Options for creating a policy. `kind` defaults to Sentinel.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub struct PolicyCreateOptions {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub kind: Option<PolicyKind>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub query: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enforcement_level: Option<EnforcementLevel>,
}

impl PolicyCreateOptions {
    pub fn new(name: impl Into<String>, enforcement_level: EnforcementLevel) -> Self {
        Self {
            name: name.into(),
            enforcement_level: Some(enforcement_level),
            ..Self::default()
        }
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        require_name(&self.name, "name")?;

        let kind = self.kind.unwrap_or(PolicyKind::Sentinel);
        if kind == PolicyKind::Opa && !self.query.as_deref().is_some_and(valid_string) {
            return Err(ValidationError::RequiredField("query"));
        }

        let Some(level) = self.enforcement_level else {
            return Err(ValidationError::RequiredField("enforcement-level"));
        };
        if !EnforcementLevel::allowed_for(kind).contains(&level) {
            return Err(ValidationError::InvalidEnumValue {
                field: "enforcement-level",
                value: level.to_string(),
            });
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub struct PolicyUpdateOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub query: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enforcement_level: Option<EnforcementLevel>,
}

impl PolicyUpdateOptions {
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.query.as_deref().is_some_and(|q| !valid_string(q)) {
            return Err(ValidationError::InvalidValue("query"));
        }
        Ok(())
    }
}
