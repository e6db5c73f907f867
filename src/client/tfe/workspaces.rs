use async_trait::async_trait;
use log::debug;
use reqwest::Method;
use serde_json::Value;

use super::http::Body;
use super::{TfeClient, organization_segment};
use crate::client::api::WorkspacesApi;
use crate::client::models::data_retention::{DELETE_OLDER_TYPE, DONT_DELETE_TYPE, LEGACY_TYPE};
use crate::client::models::{
    DataRetentionPolicy, DataRetentionPolicyChoice, DataRetentionPolicyDeleteOlder,
    DataRetentionPolicyDeleteOlderSetOptions, DataRetentionPolicyDontDelete,
    DataRetentionPolicyDontDeleteSetOptions, Tag, Workspace, WorkspaceCreateOptions,
    WorkspaceListOptions, WorkspaceLockOptions, WorkspaceReadOptions, WorkspaceTagsOptions,
    WorkspaceUpdateOptions,
};
use crate::client::pagination::{ListOptions, PagedResponse, QueryParams};
use crate::client::parallel::{DEFAULT_MAX_CONCURRENT, collect_all_pages};
use crate::error::{DecodeError, Result};
use crate::jsonapi::choice::decode_primary;
use crate::jsonapi::{Relationships, encode};
use crate::validation::require_id;

fn workspace_id_path(workspace_id: &str) -> Result<String> {
    require_id(workspace_id, "workspace")?;
    Ok(format!("workspaces/{}", workspace_id))
}

fn workspace_name_path(organization: &str, workspace: &str) -> Result<String> {
    let org = organization_segment(organization)?;
    require_id(workspace, "workspace")?;
    Ok(format!("organizations/{}/workspaces/{}", org, workspace))
}

impl TfeClient {
    async fn workspace_action(
        &self,
        workspace_id: &str,
        action: &str,
        body: Option<Value>,
    ) -> Result<Workspace> {
        let path = format!("{}/actions/{}", workspace_id_path(workspace_id)?, action);
        let body = body.map(Body::Document);
        let document = self
            .document(Method::POST, &path, &QueryParams::new(), body)
            .await?;
        Ok(document.decode_one()?)
    }
}

#[async_trait]
impl WorkspacesApi for TfeClient {
    async fn list_workspaces(
        &self,
        organization: &str,
        options: Option<&WorkspaceListOptions>,
    ) -> Result<PagedResponse<Workspace>> {
        let org = organization_segment(organization)?;
        let query = match options {
            Some(options) => {
                options.validate()?;
                options.to_query_params()
            }
            None => QueryParams::new(),
        };
        self.get_page(&format!("organizations/{}/workspaces", org), &query)
            .await
    }

    async fn list_all_workspaces(
        &self,
        organization: &str,
        options: Option<&WorkspaceListOptions>,
    ) -> Result<Vec<Workspace>> {
        let base = options.cloned().unwrap_or_default();
        let page = |number: usize| WorkspaceListOptions {
            list: ListOptions::new().page_number(number).page_size(self.page_size),
            ..base.clone()
        };

        let first = self.list_workspaces(organization, Some(&page(1))).await?;
        debug!(
            "Listing all workspaces of {}: {} across {} pages",
            organization,
            first.total_count(),
            first.remaining_pages().len() + 1
        );
        collect_all_pages(
            first,
            |number| {
                let options = page(number);
                async move { Ok(self.list_workspaces(organization, Some(&options)).await?.items) }
            },
            DEFAULT_MAX_CONCURRENT,
        )
        .await
    }

    async fn read_workspace(&self, organization: &str, workspace: &str) -> Result<Workspace> {
        self.read_workspace_with_options(organization, workspace, None)
            .await
    }

    async fn read_workspace_with_options(
        &self,
        organization: &str,
        workspace: &str,
        options: Option<&WorkspaceReadOptions>,
    ) -> Result<Workspace> {
        let path = workspace_name_path(organization, workspace)?;
        let query = options.map(|o| o.to_query_params()).unwrap_or_default();
        self.get_one(&path, &query).await
    }

    async fn read_workspace_by_id(&self, workspace_id: &str) -> Result<Workspace> {
        let path = workspace_id_path(workspace_id)?;
        self.get_one(&path, &QueryParams::new()).await
    }

    async fn create_workspace(
        &self,
        organization: &str,
        options: &WorkspaceCreateOptions,
    ) -> Result<Workspace> {
        let org = organization_segment(organization)?;
        options.validate()?;
        let body = encode::resource("workspaces", None, options, options.relationships())?;
        self.post_one(&format!("organizations/{}/workspaces", org), body)
            .await
    }

    async fn update_workspace(
        &self,
        organization: &str,
        workspace: &str,
        options: &WorkspaceUpdateOptions,
    ) -> Result<Workspace> {
        let path = workspace_name_path(organization, workspace)?;
        options.validate()?;
        let body = encode::resource("workspaces", None, options, options.relationships())?;
        self.patch_one(&path, body).await
    }

    async fn update_workspace_by_id(
        &self,
        workspace_id: &str,
        options: &WorkspaceUpdateOptions,
    ) -> Result<Workspace> {
        let path = workspace_id_path(workspace_id)?;
        options.validate()?;
        let body = encode::resource("workspaces", None, options, options.relationships())?;
        self.patch_one(&path, body).await
    }

    async fn delete_workspace(&self, organization: &str, workspace: &str) -> Result<()> {
        let path = workspace_name_path(organization, workspace)?;
        self.delete(&path).await
    }

    async fn delete_workspace_by_id(&self, workspace_id: &str) -> Result<()> {
        let path = workspace_id_path(workspace_id)?;
        self.delete(&path).await
    }

    async fn safe_delete_workspace(&self, organization: &str, workspace: &str) -> Result<()> {
        let path = workspace_name_path(organization, workspace)?;
        self.execute(Method::POST, &format!("{}/actions/safe-delete", path), None)
            .await
    }

    async fn safe_delete_workspace_by_id(&self, workspace_id: &str) -> Result<()> {
        let path = workspace_id_path(workspace_id)?;
        self.execute(Method::POST, &format!("{}/actions/safe-delete", path), None)
            .await
    }

    async fn lock_workspace(
        &self,
        workspace_id: &str,
        options: &WorkspaceLockOptions,
    ) -> Result<Workspace> {
        let body = serde_json::to_value(options)?;
        self.workspace_action(workspace_id, "lock", Some(body)).await
    }

    async fn unlock_workspace(&self, workspace_id: &str) -> Result<Workspace> {
        self.workspace_action(workspace_id, "unlock", None).await
    }

    async fn force_unlock_workspace(&self, workspace_id: &str) -> Result<Workspace> {
        self.workspace_action(workspace_id, "force-unlock", None).await
    }

    async fn list_workspace_tags(
        &self,
        workspace_id: &str,
        options: Option<&ListOptions>,
    ) -> Result<PagedResponse<Tag>> {
        let path = format!("{}/relationships/tags", workspace_id_path(workspace_id)?);
        let query = options.map(|o| o.to_query_params()).unwrap_or_default();
        self.get_page(&path, &query).await
    }

    async fn add_workspace_tags(&self, workspace_id: &str, options: &WorkspaceTagsOptions) -> Result<()> {
        let path = format!("{}/relationships/tags", workspace_id_path(workspace_id)?);
        options.validate()?;
        self.execute(Method::POST, &path, Some(options.to_body())).await
    }

    async fn remove_workspace_tags(
        &self,
        workspace_id: &str,
        options: &WorkspaceTagsOptions,
    ) -> Result<()> {
        let path = format!("{}/relationships/tags", workspace_id_path(workspace_id)?);
        options.validate()?;
        self.execute(Method::DELETE, &path, Some(options.to_body())).await
    }

    async fn read_workspace_data_retention_policy(
        &self,
        workspace_id: &str,
    ) -> Result<Option<DataRetentionPolicy>> {
        let choice = self
            .read_workspace_data_retention_policy_choice(workspace_id)
            .await?;
        match choice {
            DataRetentionPolicyChoice::DontDelete(_) => Err(DecodeError::UnexpectedType {
                expected: LEGACY_TYPE,
                found: DONT_DELETE_TYPE.to_string(),
            }
            .into()),
            choice => Ok(choice.to_legacy()),
        }
    }

    async fn read_workspace_data_retention_policy_choice(
        &self,
        workspace_id: &str,
    ) -> Result<DataRetentionPolicyChoice> {
        let path = format!(
            "{}/relationships/data-retention-policy",
            workspace_id_path(workspace_id)?
        );
        let document = self
            .document(Method::GET, &path, &QueryParams::new(), None)
            .await?;
        Ok(decode_primary(&document)?)
    }

    async fn set_workspace_data_retention_policy_delete_older(
        &self,
        workspace_id: &str,
        options: &DataRetentionPolicyDeleteOlderSetOptions,
    ) -> Result<DataRetentionPolicyDeleteOlder> {
        let path = format!(
            "{}/relationships/data-retention-policy",
            workspace_id_path(workspace_id)?
        );
        options.validate()?;
        let body = encode::resource(DELETE_OLDER_TYPE, None, options, Relationships::new())?;
        self.post_one(&path, body).await
    }

    async fn set_workspace_data_retention_policy_dont_delete(
        &self,
        workspace_id: &str,
        options: &DataRetentionPolicyDontDeleteSetOptions,
    ) -> Result<DataRetentionPolicyDontDelete> {
        let path = format!(
            "{}/relationships/data-retention-policy",
            workspace_id_path(workspace_id)?
        );
        let body = encode::resource(DONT_DELETE_TYPE, None, options, Relationships::new())?;
        self.post_one(&path, body).await
    }

    async fn delete_workspace_data_retention_policy(&self, workspace_id: &str) -> Result<()> {
        let path = format!(
            "{}/relationships/data-retention-policy",
            workspace_id_path(workspace_id)?
        );
        self.delete(&path).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_workspace_paths() {
        assert_eq!(workspace_id_path("ws-123").unwrap(), "workspaces/ws-123");
        assert_eq!(
            workspace_name_path("acme", "app-prod").unwrap(),
            "organizations/acme/workspaces/app-prod"
        );
        assert!(workspace_id_path("").unwrap_err().as_validation().is_some());
        assert!(workspace_name_path("acme", "../etc").is_err());
    }

    #[test]
    fn test_lock_body() {
        let options = WorkspaceLockOptions {
            reason: Some("maintenance".to_string()),
        };
        assert_eq!(
            serde_json::to_value(&options).unwrap(),
            json!({ "reason": "maintenance" })
        );
    }
}
