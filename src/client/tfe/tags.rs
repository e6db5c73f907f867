use async_trait::async_trait;
use reqwest::Method;

use super::{TfeClient, organization_segment};
use crate::client::api::OrganizationTagsApi;
use crate::client::models::{
    AddWorkspacesToTagOptions, OrganizationTagsDeleteOptions, OrganizationTagsListOptions, Tag,
};
use crate::client::pagination::{PagedResponse, QueryParams};
use crate::error::Result;
use crate::validation::require_id;

#[async_trait]
impl OrganizationTagsApi for TfeClient {
    async fn list_organization_tags(
        &self,
        organization: &str,
        options: Option<&OrganizationTagsListOptions>,
    ) -> Result<PagedResponse<Tag>> {
        let org = organization_segment(organization)?;
        let query = match options {
            Some(options) => {
                options.validate()?;
                options.to_query_params()
            }
            None => QueryParams::new(),
        };
        self.get_page(&format!("organizations/{}/tags", org), &query)
            .await
    }

    async fn delete_organization_tags(
        &self,
        organization: &str,
        options: &OrganizationTagsDeleteOptions,
    ) -> Result<()> {
        let org = organization_segment(organization)?;
        options.validate()?;
        self.execute(
            Method::DELETE,
            &format!("organizations/{}/tags", org),
            Some(options.to_body()),
        )
        .await
    }

    async fn add_workspaces_to_tag(
        &self,
        tag_id: &str,
        options: &AddWorkspacesToTagOptions,
    ) -> Result<()> {
        require_id(tag_id, "tag")?;
        options.validate()?;
        self.execute(
            Method::POST,
            &format!("tags/{}/relationships/workspaces", tag_id),
            Some(options.to_body()),
        )
        .await
    }
}
