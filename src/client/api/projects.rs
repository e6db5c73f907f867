//! Project API trait

use async_trait::async_trait;

use crate::client::models::{Project, ProjectCreateOptions, ProjectListOptions, ProjectUpdateOptions};
use crate::client::pagination::PagedResponse;
use crate::error::Result;

#[async_trait]
pub trait ProjectsApi: Send + Sync {
    async fn list_projects(
        &self,
        organization: &str,
        options: Option<&ProjectListOptions>,
    ) -> Result<PagedResponse<Project>>;

    async fn create_project(&self, organization: &str, options: &ProjectCreateOptions) -> Result<Project>;

    async fn read_project(&self, project_id: &str) -> Result<Project>;

    async fn update_project(&self, project_id: &str, options: &ProjectUpdateOptions) -> Result<Project>;

    /// Fails with a conflict while the project still holds workspaces.
    async fn delete_project(&self, project_id: &str) -> Result<()>;
}
