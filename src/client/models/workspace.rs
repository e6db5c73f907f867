//! Workspace models

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Value, json};

use super::common::{ExecutionMode, include_param, wire_enum};
use super::data_retention::{self, DataRetentionPolicy, DataRetentionPolicyChoice};
use crate::client::pagination::{ListOptions, QueryParams};
use crate::error::{DecodeError, ValidationError};
use crate::jsonapi::choice::{self, PolyRelation};
use crate::jsonapi::{Decode, Included, Nullable, RawResource, Relationships};
use crate::validation::{require_id, require_list, require_name, valid_string, valid_string_id};

/// Workspace resource
#[derive(Debug, Clone, PartialEq)]
pub struct Workspace {
    pub id: String,
    pub name: String,
    pub description: Option<String>,
    pub allow_destroy_plan: bool,
    pub assessments_enabled: bool,
    pub auto_apply: bool,
    pub auto_destroy_at: Option<DateTime<Utc>>,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
    pub execution_mode: Option<ExecutionMode>,
    pub file_triggers_enabled: bool,
    pub global_remote_state: bool,
    pub locked: bool,
    pub queue_all_runs: bool,
    pub resource_count: u32,
    pub source_name: Option<String>,
    pub source_url: Option<String>,
    pub speculative_enabled: bool,
    pub terraform_version: Option<String>,
    pub trigger_prefixes: Vec<String>,
    pub trigger_patterns: Vec<String>,
    pub working_directory: Option<String>,
    pub tag_names: Vec<String>,
    pub vcs_repo: Option<VcsRepo>,
    pub permissions: WorkspacePermissions,

    /// Owning organization name
    pub organization: Option<String>,
    pub project_id: Option<String>,
    pub agent_pool_id: Option<String>,
    pub locked_by: LockedByChoice,
    pub data_retention_policy_choice: DataRetentionPolicyChoice,

    /// Deprecated: read `data_retention_policy_choice` instead. Only set
    /// when the policy deletes data older than N days.
    pub data_retention_policy: Option<DataRetentionPolicy>,
}

/// VCS connection of a workspace
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case", default)]
pub struct VcsRepo {
    pub identifier: String,
    pub branch: Option<String>,
    pub display_identifier: Option<String>,
    pub oauth_token_id: Option<String>,
    #[serde(rename = "github-app-installation-id")]
    pub github_app_installation_id: Option<String>,
    pub ingress_submodules: bool,
    pub repository_http_url: Option<String>,
    pub service_provider: Option<String>,
    pub tags_regex: Option<String>,
    pub webhook_url: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case", default)]
pub struct WorkspacePermissions {
    pub can_destroy: bool,
    pub can_force_unlock: bool,
    pub can_lock: bool,
    pub can_queue_apply: bool,
    pub can_queue_destroy: bool,
    pub can_queue_run: bool,
    pub can_read_settings: bool,
    pub can_unlock: bool,
    pub can_update: bool,
    pub can_update_variable: bool,
}

/// Who holds the workspace lock.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum LockedByChoice {
    #[default]
    Absent,
    /// Locked by a run (id)
    Run(String),
    /// Locked by a user (id)
    User(String),
    /// Locked by a team (id)
    Team(String),
}

impl LockedByChoice {
    pub fn is_populated(&self) -> bool {
        !matches!(self, LockedByChoice::Absent)
    }
}

impl PolyRelation for LockedByChoice {
    const RELATION: &'static str = "locked-by";
    const DISCRIMINATORS: &'static [&'static str] = &["runs", "users", "teams"];

    fn absent() -> Self {
        LockedByChoice::Absent
    }

    fn decode_variant(resource: &RawResource) -> Result<Self, DecodeError> {
        match resource.kind.as_str() {
            "runs" => Ok(LockedByChoice::Run(resource.id.clone())),
            "users" => Ok(LockedByChoice::User(resource.id.clone())),
            "teams" => Ok(LockedByChoice::Team(resource.id.clone())),
            _ => Err(choice::unknown_variant(Self::RELATION, resource)),
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "kebab-case")]
struct WorkspaceAttributes {
    name: String,
    #[serde(default)]
    description: Option<String>,
    #[serde(default)]
    allow_destroy_plan: bool,
    #[serde(default)]
    assessments_enabled: bool,
    #[serde(default)]
    auto_apply: bool,
    #[serde(default)]
    auto_destroy_at: Option<DateTime<Utc>>,
    #[serde(default)]
    created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    updated_at: Option<DateTime<Utc>>,
    #[serde(default)]
    execution_mode: Option<ExecutionMode>,
    #[serde(default)]
    file_triggers_enabled: bool,
    #[serde(default)]
    global_remote_state: bool,
    #[serde(default)]
    locked: bool,
    #[serde(default)]
    queue_all_runs: bool,
    #[serde(default)]
    resource_count: u32,
    #[serde(default)]
    source_name: Option<String>,
    #[serde(default)]
    source_url: Option<String>,
    #[serde(default)]
    speculative_enabled: bool,
    #[serde(default)]
    terraform_version: Option<String>,
    #[serde(default)]
    trigger_prefixes: Vec<String>,
    #[serde(default)]
    trigger_patterns: Vec<String>,
    #[serde(default)]
    working_directory: Option<String>,
    #[serde(default)]
    tag_names: Vec<String>,
    #[serde(default)]
    vcs_repo: Option<VcsRepo>,
    #[serde(default)]
    permissions: WorkspacePermissions,
}

impl Decode for Workspace {
    const TYPE: &'static str = "workspaces";

    fn decode(resource: &RawResource, included: &Included<'_>) -> Result<Self, DecodeError> {
        let attrs: WorkspaceAttributes = resource.attributes("workspace")?;
        let locked_by: LockedByChoice = choice::decode(resource, included)?;
        let (data_retention_policy_choice, data_retention_policy) =
            data_retention::decode_for_parent(resource, included)?;

        Ok(Workspace {
            id: resource.id.clone(),
            name: attrs.name,
            description: attrs.description,
            allow_destroy_plan: attrs.allow_destroy_plan,
            assessments_enabled: attrs.assessments_enabled,
            auto_apply: attrs.auto_apply,
            auto_destroy_at: attrs.auto_destroy_at,
            created_at: attrs.created_at,
            updated_at: attrs.updated_at,
            execution_mode: attrs.execution_mode,
            file_triggers_enabled: attrs.file_triggers_enabled,
            global_remote_state: attrs.global_remote_state,
            locked: attrs.locked,
            queue_all_runs: attrs.queue_all_runs,
            resource_count: attrs.resource_count,
            source_name: attrs.source_name,
            source_url: attrs.source_url,
            speculative_enabled: attrs.speculative_enabled,
            terraform_version: attrs.terraform_version,
            trigger_prefixes: attrs.trigger_prefixes,
            trigger_patterns: attrs.trigger_patterns,
            working_directory: attrs.working_directory,
            tag_names: attrs.tag_names,
            vcs_repo: attrs.vcs_repo,
            permissions: attrs.permissions,
            organization: resource.to_one_id("organization"),
            project_id: resource.to_one_id("project"),
            agent_pool_id: resource.to_one_id("agent-pool"),
            locked_by,
            data_retention_policy_choice,
            data_retention_policy,
        })
    }
}

wire_enum! {
    /// Related resources that can be side-loaded with a workspace
    WorkspaceIncludeOpt("include") {
        Organization => "organization",
        CurrentConfigVersion => "current_configuration_version",
        CurrentRun => "current_run",
        CurrentRunPlan => "current_run.plan",
        CurrentStateVersion => "current-state-version",
        LockedBy => "locked_by",
        Outputs => "outputs",
        Project => "project",
        Readme => "readme",
    }
}

/// `filter[tagged]` key/value pair
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TagBinding {
    pub key: String,
    pub value: Option<String>,
}

/// Options for listing workspaces
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WorkspaceListOptions {
    pub list: ListOptions,

    /// Substring match on the workspace name
    pub search: Option<String>,

    /// Comma-separated tag names every workspace must have
    pub tags: Option<String>,

    /// Comma-separated tag names no workspace may have
    pub exclude_tags: Option<String>,

    /// Wildcard name match (`*-prod`)
    pub wildcard_name: Option<String>,

    pub project_id: Option<String>,

    /// Status of the current run, e.g. `pending`
    pub current_run_status: Option<String>,

    pub tag_bindings: Vec<TagBinding>,

    pub include: Vec<WorkspaceIncludeOpt>,
}

impl WorkspaceListOptions {
    pub fn page(mut self, number: usize, size: usize) -> Self {
        self.list = ListOptions::new().page_number(number).page_size(size);
        self
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        if let Some(project_id) = &self.project_id {
            require_id(project_id, "project")?;
        }
        if self.tag_bindings.iter().any(|b| !valid_string(&b.key)) {
            return Err(ValidationError::RequiredField("tag binding key"));
        }
        Ok(())
    }

    pub fn to_query_params(&self) -> QueryParams {
        let mut params = self.list.to_query_params();
        let mut push = |key: &str, value: &Option<String>| {
            if let Some(value) = value {
                params.push((key.to_string(), value.clone()));
            }
        };
        push("search[name]", &self.search);
        push("search[tags]", &self.tags);
        push("search[exclude-tags]", &self.exclude_tags);
        push("search[wildcard-name]", &self.wildcard_name);
        push("filter[project][id]", &self.project_id);
        push("filter[current-run][status]", &self.current_run_status);

        for (i, binding) in self.tag_bindings.iter().enumerate() {
            params.push((format!("filter[tagged][{}][key]", i), binding.key.clone()));
            if let Some(value) = &binding.value {
                params.push((format!("filter[tagged][{}][value]", i), value.clone()));
            }
        }

        params.extend(include_param(&self.include));
        params
    }
}

/// Options for reading a single workspace
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WorkspaceReadOptions {
    pub include: Vec<WorkspaceIncludeOpt>,
}

impl WorkspaceReadOptions {
    pub fn to_query_params(&self) -> QueryParams {
        include_param(&self.include).into_iter().collect()
    }
}

/// VCS settings for create and update
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub struct VcsRepoOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub identifier: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub branch: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub oauth_token_id: Option<String>,
    #[serde(
        rename = "github-app-installation-id",
        skip_serializing_if = "Option::is_none"
    )]
    pub github_app_installation_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ingress_submodules: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags_regex: Option<String>,
}

impl VcsRepoOptions {
    fn validate(&self) -> Result<(), ValidationError> {
        match &self.identifier {
            Some(identifier) if valid_string(identifier) => {}
            _ => return Err(ValidationError::RequiredField("vcs-repo.identifier")),
        }
        if self.oauth_token_id.is_some() && self.github_app_installation_id.is_some() {
            return Err(ValidationError::MutuallyExclusive {
                first: "vcs-repo.oauth-token-id",
                second: "vcs-repo.github-app-installation-id",
            });
        }
        Ok(())
    }

    fn has_tags_regex(&self) -> bool {
        self.tags_regex.as_deref().is_some_and(valid_string)
    }
}

/// A tag to attach when creating a workspace
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorkspaceTagOption {
    pub name: String,
}

/// Options for creating a workspace
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub struct WorkspaceCreateOptions {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub agent_pool_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub allow_destroy_plan: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub assessments_enabled: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub auto_apply: Option<bool>,
    #[serde(default, skip_serializing_if = "Nullable::is_unset")]
    pub auto_destroy_at: Nullable<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub execution_mode: Option<ExecutionMode>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file_triggers_enabled: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub global_remote_state: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub queue_all_runs: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub speculative_enabled: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub terraform_version: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub trigger_prefixes: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub trigger_patterns: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vcs_repo: Option<VcsRepoOptions>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub working_directory: Option<String>,

    /// Project to create the workspace in (organization default if unset)
    #[serde(skip)]
    pub project_id: Option<String>,

    /// Tags to attach, created if they don't exist
    #[serde(skip)]
    pub tags: Vec<WorkspaceTagOption>,
}

impl WorkspaceCreateOptions {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        require_name(&self.name, "name")?;
        validate_agent_settings(self.agent_pool_id.as_deref(), self.execution_mode)?;
        validate_triggers(
            self.trigger_prefixes.as_deref(),
            self.trigger_patterns.as_deref(),
            self.vcs_repo.as_ref(),
        )?;
        if let Some(vcs_repo) = &self.vcs_repo {
            vcs_repo.validate()?;
        }
        if let Some(project_id) = &self.project_id {
            require_id(project_id, "project")?;
        }
        Ok(())
    }

    pub(crate) fn relationships(&self) -> Relationships {
        let tags: Vec<Value> = self
            .tags
            .iter()
            .map(|t| json!({ "type": "tags", "attributes": { "name": t.name } }))
            .collect();
        let relationships =
            Relationships::new().to_one_opt("project", "projects", self.project_id.as_deref());
        if tags.is_empty() {
            relationships
        } else {
            relationships.to_many_resources("tags", tags)
        }
    }
}

/// Options for updating a workspace. The default is a no-op update.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub struct WorkspaceUpdateOptions {
    /// New name (renames the workspace)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub agent_pool_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub allow_destroy_plan: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub assessments_enabled: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub auto_apply: Option<bool>,
    /// `Null` clears a scheduled auto-destroy
    #[serde(default, skip_serializing_if = "Nullable::is_unset")]
    pub auto_destroy_at: Nullable<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub execution_mode: Option<ExecutionMode>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file_triggers_enabled: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub global_remote_state: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub queue_all_runs: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub speculative_enabled: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub terraform_version: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub trigger_prefixes: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub trigger_patterns: Option<Vec<String>>,
    /// `Null` removes the VCS connection
    #[serde(default, skip_serializing_if = "Nullable::is_unset")]
    pub vcs_repo: Nullable<VcsRepoOptions>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub working_directory: Option<String>,

    /// Move the workspace to another project
    #[serde(skip)]
    pub project_id: Option<String>,
}

impl WorkspaceUpdateOptions {
    pub fn validate(&self) -> Result<(), ValidationError> {
        if let Some(name) = &self.name {
            if !valid_string_id(name) {
                return Err(ValidationError::InvalidValue("name"));
            }
        }
        if let Some(agent_pool_id) = &self.agent_pool_id {
            require_id(agent_pool_id, "agent pool")?;
            if matches!(self.execution_mode, Some(mode) if mode != ExecutionMode::Agent) {
                return Err(ValidationError::DependsOn {
                    field: "agent-pool-id",
                    requires: "execution-mode agent",
                });
            }
        }
        if self.execution_mode == Some(ExecutionMode::Agent) && self.agent_pool_id.is_none() {
            return Err(ValidationError::RequiredField("agent-pool-id"));
        }
        validate_triggers(
            self.trigger_prefixes.as_deref(),
            self.trigger_patterns.as_deref(),
            self.vcs_repo.value(),
        )?;
        if let Some(vcs_repo) = self.vcs_repo.value() {
            vcs_repo.validate()?;
        }
        if let Some(project_id) = &self.project_id {
            require_id(project_id, "project")?;
        }
        Ok(())
    }

    pub(crate) fn relationships(&self) -> Relationships {
        Relationships::new().to_one_opt("project", "projects", self.project_id.as_deref())
    }
}

fn validate_agent_settings(
    agent_pool_id: Option<&str>,
    execution_mode: Option<ExecutionMode>,
) -> Result<(), ValidationError> {
    if let Some(agent_pool_id) = agent_pool_id {
        require_id(agent_pool_id, "agent pool")?;
        if execution_mode != Some(ExecutionMode::Agent) {
            return Err(ValidationError::DependsOn {
                field: "agent-pool-id",
                requires: "execution-mode agent",
            });
        }
    }
    if execution_mode == Some(ExecutionMode::Agent) && agent_pool_id.is_none() {
        return Err(ValidationError::RequiredField("agent-pool-id"));
    }
    Ok(())
}

fn validate_triggers(
    prefixes: Option<&[String]>,
    patterns: Option<&[String]>,
    vcs_repo: Option<&VcsRepoOptions>,
) -> Result<(), ValidationError> {
    let has_prefixes = prefixes.is_some_and(|p| !p.is_empty());
    let has_patterns = patterns.is_some_and(|p| !p.is_empty());

    if has_prefixes && has_patterns {
        return Err(ValidationError::MutuallyExclusive {
            first: "trigger-prefixes",
            second: "trigger-patterns",
        });
    }
    if vcs_repo.is_some_and(VcsRepoOptions::has_tags_regex) {
        if has_patterns {
            return Err(ValidationError::MutuallyExclusive {
                first: "vcs-repo.tags-regex",
                second: "trigger-patterns",
            });
        }
        if has_prefixes {
            return Err(ValidationError::MutuallyExclusive {
                first: "vcs-repo.tags-regex",
                second: "trigger-prefixes",
            });
        }
    }
    Ok(())
}

/// Options for locking a workspace
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct WorkspaceLockOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
}

/// Reference to a tag by id or by name
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TagRef {
    pub id: Option<String>,
    pub name: Option<String>,
}

impl TagRef {
    pub fn by_id(id: impl Into<String>) -> Self {
        Self {
            id: Some(id.into()),
            name: None,
        }
    }

    pub fn by_name(name: impl Into<String>) -> Self {
        Self {
            id: None,
            name: Some(name.into()),
        }
    }

    fn validate(&self) -> Result<(), ValidationError> {
        let has_id = self.id.as_deref().is_some_and(valid_string);
        let has_name = self.name.as_deref().is_some_and(valid_string);
        if !has_id && !has_name {
            return Err(ValidationError::RequiredOneOf {
                first: "tag id",
                second: "tag name",
            });
        }
        Ok(())
    }

    fn to_resource(&self) -> Value {
        let mut object = json!({ "type": "tags" });
        if let Some(id) = &self.id {
            object["id"] = json!(id);
        }
        if let Some(name) = &self.name {
            object["attributes"] = json!({ "name": name });
        }
        object
    }
}

/// Options for adding or removing workspace tags
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WorkspaceTagsOptions {
    pub tags: Option<Vec<TagRef>>,
}

impl WorkspaceTagsOptions {
    pub fn new(tags: Vec<TagRef>) -> Self {
        Self { tags: Some(tags) }
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        for tag in require_list(self.tags.as_deref(), "tags")? {
            tag.validate()?;
        }
        Ok(())
    }

    pub(crate) fn to_body(&self) -> Value {
        let data: Vec<Value> = self.tags.iter().flatten().map(TagRef::to_resource).collect();
        json!({ "data": data })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::fixtures::{ResourceBuilder, single};
    use crate::client::models::data_retention::{DELETE_OLDER_TYPE, DONT_DELETE_TYPE};
    use crate::error::ValidationErrorKind;

    fn workspace_json(policy: Option<(&str, &str, Option<u32>)>) -> crate::jsonapi::Document {
        let mut builder = ResourceBuilder::new("workspaces", "ws-1")
            .attribute("name", json!("app-prod"))
            .attribute("execution-mode", json!("remote"))
            .attribute("locked", json!(true))
            .attribute("trigger-patterns", json!(["/modules/**/*"]))
            .attribute("vcs-repo", json!({ "identifier": "acme/app", "branch": "main" }))
            .to_one("organization", "organizations", "acme")
            .to_one("project", "projects", "prj-1")
            .to_one("locked-by", "users", "user-9");
        let mut included = vec![];
        if let Some((kind, id, days)) = policy {
            builder = builder.to_one("data-retention-policy", kind, id);
            let mut body = ResourceBuilder::new(kind, id);
            if let Some(days) = days {
                body = body.attribute("delete-older-than-n-days", json!(days));
            }
            included.push(body.build());
        }
        single(builder.build(), included)
    }

    #[test]
    fn test_decode_workspace() {
        let ws: Workspace = workspace_json(None).decode_one().unwrap();
        assert_eq!(ws.id, "ws-1");
        assert_eq!(ws.name, "app-prod");
        assert_eq!(ws.execution_mode, Some(ExecutionMode::Remote));
        assert!(ws.locked);
        assert_eq!(ws.trigger_patterns, vec!["/modules/**/*".to_string()]);
        assert_eq!(ws.vcs_repo.as_ref().map(|v| v.identifier.as_str()), Some("acme/app"));
        assert_eq!(ws.organization.as_deref(), Some("acme"));
        assert_eq!(ws.project_id.as_deref(), Some("prj-1"));
        assert_eq!(ws.locked_by, LockedByChoice::User("user-9".to_string()));
        assert!(!ws.data_retention_policy_choice.is_populated());
        assert!(ws.data_retention_policy.is_none());
    }

    #[test]
    fn test_decode_delete_older_fills_legacy_field() {
        let ws: Workspace = workspace_json(Some((DELETE_OLDER_TYPE, "drp-1", Some(33))))
            .decode_one()
            .unwrap();

        let policy = ws.data_retention_policy_choice.delete_older().unwrap();
        assert_eq!(policy.delete_older_than_n_days, 33);
        assert!(ws.data_retention_policy_choice.dont_delete().is_none());

        let legacy = ws.data_retention_policy.unwrap();
        assert_eq!(legacy.id, "drp-1");
        assert_eq!(legacy.delete_older_than_n_days, 33);
    }

    #[test]
    fn test_decode_dont_delete_leaves_legacy_field_empty() {
        let ws: Workspace = workspace_json(Some((DONT_DELETE_TYPE, "drp-2", None)))
            .decode_one()
            .unwrap();

        assert!(ws.data_retention_policy_choice.dont_delete().is_some());
        assert!(ws.data_retention_policy_choice.delete_older().is_none());
        assert!(ws.data_retention_policy.is_none());
    }

    #[test]
    fn test_unknown_locked_by_type_fails() {
        let doc = single(
            ResourceBuilder::new("workspaces", "ws-1")
                .attribute("name", json!("app"))
                .to_one("locked-by", "robots", "r-1")
                .build(),
            vec![],
        );
        assert!(matches!(
            doc.decode_one::<Workspace>(),
            Err(DecodeError::UnknownVariant { relation: "locked-by", .. })
        ));
    }

    #[test]
    fn test_create_requires_valid_name() {
        assert_eq!(
            WorkspaceCreateOptions::default().validate(),
            Err(ValidationError::RequiredField("name"))
        );
        assert_eq!(
            WorkspaceCreateOptions::new("has space").validate(),
            Err(ValidationError::InvalidValue("name"))
        );
        assert!(WorkspaceCreateOptions::new("app").validate().is_ok());
    }

    #[test]
    fn test_agent_pool_requires_agent_mode() {
        let options = WorkspaceCreateOptions {
            agent_pool_id: Some("apool-1".to_string()),
            ..WorkspaceCreateOptions::new("app")
        };
        assert_eq!(
            options.validate(),
            Err(ValidationError::DependsOn {
                field: "agent-pool-id",
                requires: "execution-mode agent"
            })
        );

        let options = WorkspaceCreateOptions {
            execution_mode: Some(ExecutionMode::Agent),
            ..WorkspaceCreateOptions::new("app")
        };
        assert_eq!(
            options.validate(),
            Err(ValidationError::RequiredField("agent-pool-id"))
        );

        let options = WorkspaceCreateOptions {
            execution_mode: Some(ExecutionMode::Agent),
            agent_pool_id: Some("apool-1".to_string()),
            ..WorkspaceCreateOptions::new("app")
        };
        assert!(options.validate().is_ok());
    }

    #[test]
    fn test_trigger_prefixes_and_patterns_are_exclusive() {
        let options = WorkspaceCreateOptions {
            trigger_prefixes: Some(vec!["/modules".to_string()]),
            trigger_patterns: Some(vec!["/modules/**".to_string()]),
            ..WorkspaceCreateOptions::new("app")
        };
        let err = options.validate().unwrap_err();
        assert_eq!(err.kind(), ValidationErrorKind::MutuallyExclusive);

        // Empty lists do not count as set.
        let options = WorkspaceCreateOptions {
            trigger_prefixes: Some(vec![]),
            trigger_patterns: Some(vec!["/modules/**".to_string()]),
            ..WorkspaceCreateOptions::new("app")
        };
        assert!(options.validate().is_ok());
    }

    #[test]
    fn test_tags_regex_excludes_trigger_patterns() {
        let options = WorkspaceCreateOptions {
            trigger_patterns: Some(vec!["/modules/**".to_string()]),
            vcs_repo: Some(VcsRepoOptions {
                identifier: Some("acme/app".to_string()),
                tags_regex: Some(r"\d+\.\d+\.\d+".to_string()),
                ..Default::default()
            }),
            ..WorkspaceCreateOptions::new("app")
        };
        assert_eq!(
            options.validate(),
            Err(ValidationError::MutuallyExclusive {
                first: "vcs-repo.tags-regex",
                second: "trigger-patterns"
            })
        );
    }

    #[test]
    fn test_vcs_repo_requires_identifier() {
        let options = WorkspaceCreateOptions {
            vcs_repo: Some(VcsRepoOptions::default()),
            ..WorkspaceCreateOptions::new("app")
        };
        assert_eq!(
            options.validate(),
            Err(ValidationError::RequiredField("vcs-repo.identifier"))
        );
    }

    #[test]
    fn test_create_body_attributes_and_relationships() {
        let options = WorkspaceCreateOptions {
            auto_apply: Some(false),
            project_id: Some("prj-1".to_string()),
            tags: vec![WorkspaceTagOption {
                name: "prod".to_string(),
            }],
            ..WorkspaceCreateOptions::new("app")
        };

        assert_eq!(
            serde_json::to_value(&options).unwrap(),
            json!({ "name": "app", "auto-apply": false })
        );

        let body = crate::jsonapi::encode::resource(
            "workspaces",
            None,
            &options,
            options.relationships(),
        )
        .unwrap();
        assert_eq!(
            body["data"]["relationships"]["project"]["data"]["id"],
            json!("prj-1")
        );
        assert_eq!(
            body["data"]["relationships"]["tags"]["data"][0]["attributes"]["name"],
            json!("prod")
        );
    }

    #[test]
    fn test_update_default_is_no_op() {
        let options = WorkspaceUpdateOptions::default();
        assert!(options.validate().is_ok());
        assert_eq!(serde_json::to_value(&options).unwrap(), json!({}));
    }

    #[test]
    fn test_update_tri_state_fields() {
        let options = WorkspaceUpdateOptions {
            auto_destroy_at: Nullable::Null,
            vcs_repo: Nullable::Null,
            ..Default::default()
        };
        assert_eq!(
            serde_json::to_value(&options).unwrap(),
            json!({ "auto-destroy-at": null, "vcs-repo": null })
        );
    }

    #[test]
    fn test_update_agent_pool_with_remote_mode_fails() {
        let options = WorkspaceUpdateOptions {
            agent_pool_id: Some("apool-1".to_string()),
            execution_mode: Some(ExecutionMode::Remote),
            ..Default::default()
        };
        assert_eq!(options.validate().unwrap_err().kind(), ValidationErrorKind::RequiredField);

        // Agent pool alone keeps the current execution mode.
        let options = WorkspaceUpdateOptions {
            agent_pool_id: Some("apool-1".to_string()),
            ..Default::default()
        };
        assert!(options.validate().is_ok());
    }

    #[test]
    fn test_tags_options() {
        assert_eq!(
            WorkspaceTagsOptions::default().validate(),
            Err(ValidationError::RequiredField("tags"))
        );
        assert_eq!(
            WorkspaceTagsOptions::new(vec![]).validate(),
            Err(ValidationError::MinCount {
                field: "tags",
                min: 1
            })
        );
        assert_eq!(
            WorkspaceTagsOptions::new(vec![TagRef::default()]).validate(),
            Err(ValidationError::RequiredOneOf {
                first: "tag id",
                second: "tag name"
            })
        );

        let options = WorkspaceTagsOptions::new(vec![TagRef::by_id("tag-1"), TagRef::by_name("prod")]);
        assert!(options.validate().is_ok());
        assert_eq!(
            options.to_body(),
            json!({ "data": [
                { "type": "tags", "id": "tag-1" },
                { "type": "tags", "attributes": { "name": "prod" } }
            ] })
        );
    }

    #[test]
    fn test_list_query_params() {
        let options = WorkspaceListOptions {
            search: Some("app".to_string()),
            project_id: Some("prj-1".to_string()),
            tag_bindings: vec![TagBinding {
                key: "env".to_string(),
                value: Some("prod".to_string()),
            }],
            include: vec![WorkspaceIncludeOpt::CurrentRun, WorkspaceIncludeOpt::Project],
            ..Default::default()
        }
        .page(2, 50);

        let params = options.to_query_params();
        let has = |k: &str, v: &str| params.contains(&(k.to_string(), v.to_string()));
        assert!(has("page[number]", "2"));
        assert!(has("page[size]", "50"));
        assert!(has("search[name]", "app"));
        assert!(has("filter[project][id]", "prj-1"));
        assert!(has("filter[tagged][0][key]", "env"));
        assert!(has("filter[tagged][0][value]", "prod"));
        assert!(has("include", "current_run,project"));
    }

    #[test]
    fn test_include_opt_from_str() {
        assert_eq!(
            "locked_by".parse::<WorkspaceIncludeOpt>().unwrap(),
            WorkspaceIncludeOpt::LockedBy
        );
        assert_eq!(
            "bogus".parse::<WorkspaceIncludeOpt>().unwrap_err().kind(),
            ValidationErrorKind::InvalidEnumValue
        );
    }
}
