//! Workspace API trait
//!
//! Workspaces are addressed either by organization and name or by id. Both
//! forms exist for read, update, delete and safe delete.

use async_trait::async_trait;

use crate::client::models::{
    DataRetentionPolicy, DataRetentionPolicyChoice, DataRetentionPolicyDeleteOlder,
    DataRetentionPolicyDeleteOlderSetOptions, DataRetentionPolicyDontDelete,
    DataRetentionPolicyDontDeleteSetOptions, Tag, Workspace, WorkspaceCreateOptions,
    WorkspaceListOptions, WorkspaceLockOptions, WorkspaceReadOptions, WorkspaceTagsOptions,
    WorkspaceUpdateOptions,
};
use crate::client::pagination::{ListOptions, PagedResponse};
use crate::error::Result;

/// Workspace operations
#[async_trait]
pub trait WorkspacesApi: Send + Sync {
    // ========================================================================
    // Read Operations
    // ========================================================================

    async fn list_workspaces(
        &self,
        organization: &str,
        options: Option<&WorkspaceListOptions>,
    ) -> Result<PagedResponse<Workspace>>;

    /// Every workspace matching `options`, ignoring its page settings.
    async fn list_all_workspaces(
        &self,
        organization: &str,
        options: Option<&WorkspaceListOptions>,
    ) -> Result<Vec<Workspace>>;

    async fn read_workspace(&self, organization: &str, workspace: &str) -> Result<Workspace>;

    /// Read with side-loaded relations. `None` is the same as a plain read.
    async fn read_workspace_with_options(
        &self,
        organization: &str,
        workspace: &str,
        options: Option<&WorkspaceReadOptions>,
    ) -> Result<Workspace>;

    async fn read_workspace_by_id(&self, workspace_id: &str) -> Result<Workspace>;

    // ========================================================================
    // Write Operations
    // ========================================================================

    async fn create_workspace(
        &self,
        organization: &str,
        options: &WorkspaceCreateOptions,
    ) -> Result<Workspace>;

    async fn update_workspace(
        &self,
        organization: &str,
        workspace: &str,
        options: &WorkspaceUpdateOptions,
    ) -> Result<Workspace>;

    async fn update_workspace_by_id(
        &self,
        workspace_id: &str,
        options: &WorkspaceUpdateOptions,
    ) -> Result<Workspace>;

    async fn delete_workspace(&self, organization: &str, workspace: &str) -> Result<()>;

    async fn delete_workspace_by_id(&self, workspace_id: &str) -> Result<()>;

    /// Delete only if the workspace manages no resources.
    async fn safe_delete_workspace(&self, organization: &str, workspace: &str) -> Result<()>;

    async fn safe_delete_workspace_by_id(&self, workspace_id: &str) -> Result<()>;

    // ========================================================================
    // Locking
    // ========================================================================

    async fn lock_workspace(
        &self,
        workspace_id: &str,
        options: &WorkspaceLockOptions,
    ) -> Result<Workspace>;

    async fn unlock_workspace(&self, workspace_id: &str) -> Result<Workspace>;

    /// Unlock a workspace locked by another user or run.
    async fn force_unlock_workspace(&self, workspace_id: &str) -> Result<Workspace>;

    // ========================================================================
    // Tags
    // ========================================================================

    async fn list_workspace_tags(
        &self,
        workspace_id: &str,
        options: Option<&ListOptions>,
    ) -> Result<PagedResponse<Tag>>;

    async fn add_workspace_tags(&self, workspace_id: &str, options: &WorkspaceTagsOptions) -> Result<()>;

    async fn remove_workspace_tags(
        &self,
        workspace_id: &str,
        options: &WorkspaceTagsOptions,
    ) -> Result<()>;

    // ========================================================================
    // Data retention
    // ========================================================================

    /// Deprecated single-shape read. Fails with `DecodeError::UnexpectedType`
    /// when the policy is not a delete-older policy; prefer
    /// [`read_workspace_data_retention_policy_choice`](Self::read_workspace_data_retention_policy_choice).
    async fn read_workspace_data_retention_policy(
        &self,
        workspace_id: &str,
    ) -> Result<Option<DataRetentionPolicy>>;

    async fn read_workspace_data_retention_policy_choice(
        &self,
        workspace_id: &str,
    ) -> Result<DataRetentionPolicyChoice>;

    async fn set_workspace_data_retention_policy_delete_older(
        &self,
        workspace_id: &str,
        options: &DataRetentionPolicyDeleteOlderSetOptions,
    ) -> Result<DataRetentionPolicyDeleteOlder>;

    async fn set_workspace_data_retention_policy_dont_delete(
        &self,
        workspace_id: &str,
        options: &DataRetentionPolicyDontDeleteSetOptions,
    ) -> Result<DataRetentionPolicyDontDelete>;

    async fn delete_workspace_data_retention_policy(&self, workspace_id: &str) -> Result<()>;
}
