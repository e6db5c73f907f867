//! Private and public registry modules

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::common::wire_enum;
use crate::client::pagination::{ListOptions, QueryParams};
use crate::error::{DecodeError, ValidationError};
use crate::jsonapi::{Decode, Included, RawResource};
use crate::validation::{require_id, require_name, valid_string, valid_string_id};

wire_enum! {
    RegistryName("registry-name") {
        Private => "private",
        Public => "public",
    }
}

impl Default for RegistryName {
    fn default() -> Self {
        RegistryName::Private
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegistryModule {
    pub id: String,
    pub name: String,
    pub provider: String,
    pub namespace: String,
    pub registry_name: RegistryName,
    pub status: Option<String>,
    pub version_statuses: Vec<ModuleVersionStatus>,
    pub vcs_repo: Option<RegistryModuleVcsRepo>,
    pub no_code: bool,
    pub publishing_mechanism: Option<String>,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
    pub permissions: RegistryModulePermissions,
    pub organization: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case", default)]
pub struct ModuleVersionStatus {
    pub version: String,
    pub status: String,
    pub error: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case", default)]
pub struct RegistryModuleVcsRepo {
    pub identifier: String,
    pub branch: Option<String>,
    pub display_identifier: Option<String>,
    pub oauth_token_id: Option<String>,
    #[serde(rename = "github-app-installation-id")]
    pub github_app_installation_id: Option<String>,
    pub repository_http_url: Option<String>,
    pub service_provider: Option<String>,
    pub tags: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case", default)]
pub struct RegistryModulePermissions {
    pub can_delete: bool,
    pub can_resync: bool,
    pub can_retry: bool,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "kebab-case")]
struct RegistryModuleAttributes {
    name: String,
    #[serde(default)]
    provider: String,
    #[serde(default)]
    namespace: String,
    #[serde(default)]
    registry_name: RegistryName,
    #[serde(default)]
    status: Option<String>,
    #[serde(default)]
    version_statuses: Vec<ModuleVersionStatus>,
    #[serde(default)]
    vcs_repo: Option<RegistryModuleVcsRepo>,
    #[serde(default)]
    no_code: bool,
    #[serde(default)]
    publishing_mechanism: Option<String>,
    #[serde(default)]
    created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    updated_at: Option<DateTime<Utc>>,
    #[serde(default)]
    permissions: RegistryModulePermissions,
}

impl Decode for RegistryModule {
    const TYPE: &'static str = "registry-modules";

    fn decode(resource: &RawResource, _included: &Included<'_>) -> Result<Self, DecodeError> {
        let attrs: RegistryModuleAttributes = resource.attributes("registry module")?;
        Ok(RegistryModule {
            id: resource.id.clone(),
            name: attrs.name,
            provider: attrs.provider,
            namespace: attrs.namespace,
            registry_name: attrs.registry_name,
            status: attrs.status,
            version_statuses: attrs.version_statuses,
            vcs_repo: attrs.vcs_repo,
            no_code: attrs.no_code,
            publishing_mechanism: attrs.publishing_mechanism,
            created_at: attrs.created_at,
            updated_at: attrs.updated_at,
            permissions: attrs.permissions,
            organization: resource.to_one_id("organization"),
        })
    }
}

/// Addresses one module by organization, registry, namespace, name and provider.
///
/// The namespace of a private module is its organization, so it may be
/// left unset there. Public modules must name their namespace.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RegistryModuleId {
    pub organization: String,
    pub name: String,
    pub provider: String,
    pub namespace: Option<String>,
    pub registry_name: RegistryName,
}

impl RegistryModuleId {
    pub fn private(
        organization: impl Into<String>,
        name: impl Into<String>,
        provider: impl Into<String>,
    ) -> Self {
        Self {
            organization: organization.into(),
            name: name.into(),
            provider: provider.into(),
            namespace: None,
            registry_name: RegistryName::Private,
        }
    }

    pub fn public(
        organization: impl Into<String>,
        namespace: impl Into<String>,
        name: impl Into<String>,
        provider: impl Into<String>,
    ) -> Self {
        Self {
            organization: organization.into(),
            name: name.into(),
            provider: provider.into(),
            namespace: Some(namespace.into()),
            registry_name: RegistryName::Public,
        }
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        require_id(&self.organization, "organization")?;
        if !valid_string_id(&self.name) {
            return Err(ValidationError::InvalidValue("name"));
        }
        if !valid_string_id(&self.provider) {
            return Err(ValidationError::InvalidValue("provider"));
        }
        match (&self.namespace, self.registry_name) {
            (None, RegistryName::Public) => Err(ValidationError::RequiredField("namespace")),
            (Some(ns), _) if !valid_string_id(ns) => Err(ValidationError::InvalidValue("namespace")),
            _ => Ok(()),
        }
    }

    pub fn namespace(&self) -> &str {
        self.namespace.as_deref().unwrap_or(&self.organization)
    }

    /// `organizations/{org}/registry-modules/{registry}/{namespace}/{name}`
    pub(crate) fn module_path(&self) -> String {
        format!(
            "organizations/{}/registry-modules/{}/{}/{}",
            self.organization,
            self.registry_name,
            self.namespace(),
            self.name
        )
    }

    pub(crate) fn provider_path(&self) -> String {
        format!("{}/{}", self.module_path(), self.provider)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RegistryModuleListOptions {
    pub list: ListOptions,
    pub query: Option<String>,
    pub registry_name: Option<RegistryName>,
    pub provider: Option<String>,
}

impl RegistryModuleListOptions {
    pub fn to_query_params(&self) -> QueryParams {
        let mut params = self.list.to_query_params();
        if let Some(query) = &self.query {
            params.push(("q".to_string(), query.clone()));
        }
        if let Some(registry_name) = self.registry_name {
            params.push(("filter[registry_name]".to_string(), registry_name.to_string()));
        }
        if let Some(provider) = &self.provider {
            params.push(("filter[provider]".to_string(), provider.clone()));
        }
        params
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub struct RegistryModuleCreateOptions {
    pub name: String,
    pub provider: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub registry_name: Option<RegistryName>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub namespace: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub no_code: Option<bool>,
}

impl RegistryModuleCreateOptions {
    pub fn new(name: impl Into<String>, provider: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            provider: provider.into(),
            ..Self::default()
        }
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        require_name(&self.name, "name")?;
        require_name(&self.provider, "provider")?;
        if self.registry_name == Some(RegistryName::Public)
            && !self.namespace.as_deref().is_some_and(valid_string)
        {
            return Err(ValidationError::RequiredField("namespace"));
        }
        Ok(())
    }
}

/// Repository to publish a module from.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub struct RegistryModuleVcsRepoOptions {
    /// `owner/repo` on the VCS provider
    pub identifier: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub oauth_token_id: Option<String>,
    #[serde(
        rename = "github-app-installation-id",
        skip_serializing_if = "Option::is_none"
    )]
    pub github_app_installation_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display_identifier: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub branch: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<bool>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub struct RegistryModuleCreateWithVcsOptions {
    pub vcs_repo: RegistryModuleVcsRepoOptions,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub initial_version: Option<String>,
}

impl RegistryModuleCreateWithVcsOptions {
    pub fn validate(&self) -> Result<(), ValidationError> {
        let repo = &self.vcs_repo;
        if !valid_string(&repo.identifier) {
            return Err(ValidationError::RequiredField("vcs-repo.identifier"));
        }

        let has_token = repo.oauth_token_id.as_deref().is_some_and(valid_string);
        let has_app = repo.github_app_installation_id.as_deref().is_some_and(valid_string);
        match (has_token, has_app) {
            (false, false) => {
                return Err(ValidationError::RequiredOneOf {
                    first: "vcs-repo.oauth-token-id",
                    second: "vcs-repo.github-app-installation-id",
                });
            }
            (true, true) => {
                return Err(ValidationError::MutuallyExclusive {
                    first: "vcs-repo.oauth-token-id",
                    second: "vcs-repo.github-app-installation-id",
                });
            }
            _ => {}
        }

        if has_app && !repo.display_identifier.as_deref().is_some_and(valid_string) {
            return Err(ValidationError::RequiredField("vcs-repo.display-identifier"));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub struct RegistryModuleVcsUpdateOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub branch: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<bool>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub struct RegistryModuleUpdateOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub no_code: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vcs_repo: Option<RegistryModuleVcsUpdateOptions>,
}
