//! Organization models

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::common::{AuthPolicy, ExecutionMode};
use super::data_retention::{self, DataRetentionPolicy, DataRetentionPolicyChoice};
use crate::client::pagination::{ListOptions, QueryParams};
use crate::error::{DecodeError, ValidationError};
use crate::jsonapi::{Decode, Included, RawResource};
use crate::validation::{require_name, valid_string, valid_string_id};

/// Organization resource. The organization name doubles as its id.
#[derive(Debug, Clone, PartialEq)]
pub struct Organization {
    pub name: String,
    pub email: String,
    pub external_id: Option<String>,
    pub created_at: Option<DateTime<Utc>>,
    pub trial_expires_at: Option<DateTime<Utc>>,
    pub collaborator_auth_policy: Option<AuthPolicy>,
    pub cost_estimation_enabled: bool,
    pub session_remember: Option<u32>,
    pub session_timeout: Option<u32>,
    pub two_factor_conformant: bool,
    pub saml_enabled: bool,
    pub owners_team_saml_role_id: Option<String>,
    pub assessments_enforced: bool,
    pub default_execution_mode: Option<ExecutionMode>,
    pub allow_force_delete_workspaces: bool,
    pub permissions: OrganizationPermissions,
    pub default_project_id: Option<String>,
    pub data_retention_policy_choice: DataRetentionPolicyChoice,

    /// Deprecated: read `data_retention_policy_choice` instead. Only set
    /// when the policy deletes data older than N days.
    pub data_retention_policy: Option<DataRetentionPolicy>,
}

/// What the token may do with the organization.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case", default)]
pub struct OrganizationPermissions {
    pub can_create_team: bool,
    pub can_create_workspace: bool,
    pub can_create_workspace_migration: bool,
    pub can_destroy: bool,
    pub can_manage_run_tasks: bool,
    pub can_traverse: bool,
    pub can_update: bool,
    pub can_update_api_token: bool,
    pub can_update_oauth: bool,
    pub can_update_sentinel: bool,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "kebab-case")]
struct OrganizationAttributes {
    name: String,
    #[serde(default)]
    email: String,
    #[serde(default)]
    external_id: Option<String>,
    #[serde(default)]
    created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    trial_expires_at: Option<DateTime<Utc>>,
    #[serde(default)]
    collaborator_auth_policy: Option<AuthPolicy>,
    #[serde(default)]
    cost_estimation_enabled: bool,
    #[serde(default)]
    session_remember: Option<u32>,
    #[serde(default)]
    session_timeout: Option<u32>,
    #[serde(default)]
    two_factor_conformant: bool,
    #[serde(default)]
    saml_enabled: bool,
    #[serde(default)]
    owners_team_saml_role_id: Option<String>,
    #[serde(default)]
    assessments_enforced: bool,
    #[serde(default)]
    default_execution_mode: Option<ExecutionMode>,
    #[serde(default)]
    allow_force_delete_workspaces: bool,
    #[serde(default)]
    permissions: OrganizationPermissions,
}

impl Decode for Organization {
    const TYPE: &'static str = "organizations";

    fn decode(resource: &RawResource, included: &Included<'_>) -> Result<Self, DecodeError> {
        let attrs: OrganizationAttributes = resource.attributes("organization")?;
        let (data_retention_policy_choice, data_retention_policy) =
            data_retention::decode_for_parent(resource, included)?;

        Ok(Organization {
            name: attrs.name,
            email: attrs.email,
            external_id: attrs.external_id,
            created_at: attrs.created_at,
            trial_expires_at: attrs.trial_expires_at,
            collaborator_auth_policy: attrs.collaborator_auth_policy,
            cost_estimation_enabled: attrs.cost_estimation_enabled,
            session_remember: attrs.session_remember,
            session_timeout: attrs.session_timeout,
            two_factor_conformant: attrs.two_factor_conformant,
            saml_enabled: attrs.saml_enabled,
            owners_team_saml_role_id: attrs.owners_team_saml_role_id,
            assessments_enforced: attrs.assessments_enforced,
            default_execution_mode: attrs.default_execution_mode,
            allow_force_delete_workspaces: attrs.allow_force_delete_workspaces,
            permissions: attrs.permissions,
            default_project_id: resource.to_one_id("default-project"),
            data_retention_policy_choice,
            data_retention_policy,
        })
    }
}

/// Options for listing organizations
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OrganizationListOptions {
    pub list: ListOptions,

    /// Search by name or notification email
    pub query: Option<String>,
}

impl OrganizationListOptions {
    pub fn to_query_params(&self) -> QueryParams {
        let mut params = self.list.to_query_params();
        if let Some(query) = &self.query {
            params.push(("q".to_string(), query.clone()));
        }
        params
    }
}

/// Options for creating an organization
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub struct OrganizationCreateOptions {
    pub name: String,
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub session_timeout: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub session_remember: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub collaborator_auth_policy: Option<AuthPolicy>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cost_estimation_enabled: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub owners_team_saml_role_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub assessments_enforced: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_execution_mode: Option<ExecutionMode>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub allow_force_delete_workspaces: Option<bool>,
}

impl OrganizationCreateOptions {
    pub fn new(name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            ..Self::default()
        }
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        require_name(&self.name, "name")?;
        if !valid_string(&self.email) {
            return Err(ValidationError::RequiredField("email"));
        }
        Ok(())
    }
}

/// Options for updating an organization. The default is a no-op update.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub struct OrganizationUpdateOptions {
    /// New name (renames the organization)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub session_timeout: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub session_remember: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub collaborator_auth_policy: Option<AuthPolicy>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cost_estimation_enabled: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub owners_team_saml_role_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub assessments_enforced: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_execution_mode: Option<ExecutionMode>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub allow_force_delete_workspaces: Option<bool>,
}

impl OrganizationUpdateOptions {
    pub fn validate(&self) -> Result<(), ValidationError> {
        if let Some(name) = &self.name {
            if !valid_string_id(name) {
                return Err(ValidationError::InvalidValue("name"));
            }
        }
        if let Some(email) = &self.email {
            if !valid_string(email) {
                return Err(ValidationError::InvalidValue("email"));
            }
        }
        Ok(())
    }
}
