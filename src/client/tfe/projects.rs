use async_trait::async_trait;

use super::{TfeClient, organization_segment};
use crate::client::api::ProjectsApi;
use crate::client::models::{Project, ProjectCreateOptions, ProjectListOptions, ProjectUpdateOptions};
use crate::client::pagination::{PagedResponse, QueryParams};
use crate::error::Result;
use crate::jsonapi::{Relationships, encode};
use crate::validation::require_id;

fn project_path(project_id: &str) -> Result<String> {
    require_id(project_id, "project")?;
    Ok(format!("projects/{}", project_id))
}

#[async_trait]
impl ProjectsApi for TfeClient {
    async fn list_projects(
        &self,
        organization: &str,
        options: Option<&ProjectListOptions>,
    ) -> Result<PagedResponse<Project>> {
        let org = organization_segment(organization)?;
        let query = options.map(|o| o.to_query_params()).unwrap_or_default();
        self.get_page(&format!("organizations/{}/projects", org), &query)
            .await
    }

    async fn create_project(&self, organization: &str, options: &ProjectCreateOptions) -> Result<Project> {
        let org = organization_segment(organization)?;
        options.validate()?;
        let body = encode::resource("projects", None, options, Relationships::new())?;
        self.post_one(&format!("organizations/{}/projects", org), body)
            .await
    }

    async fn read_project(&self, project_id: &str) -> Result<Project> {
        self.get_one(&project_path(project_id)?, &QueryParams::new())
            .await
    }

    async fn update_project(&self, project_id: &str, options: &ProjectUpdateOptions) -> Result<Project> {
        let path = project_path(project_id)?;
        options.validate()?;
        let body = encode::resource("projects", None, options, Relationships::new())?;
        self.patch_one(&path, body).await
    }

    async fn delete_project(&self, project_id: &str) -> Result<()> {
        self.delete(&project_path(project_id)?).await
    }
}
