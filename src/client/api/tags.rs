//! Organization tag API trait

use async_trait::async_trait;

use crate::client::models::{
    AddWorkspacesToTagOptions, OrganizationTagsDeleteOptions, OrganizationTagsListOptions, Tag,
};
use crate::client::pagination::PagedResponse;
use crate::error::Result;

#[async_trait]
pub trait OrganizationTagsApi: Send + Sync {
    async fn list_organization_tags(
        &self,
        organization: &str,
        options: Option<&OrganizationTagsListOptions>,
    ) -> Result<PagedResponse<Tag>>;

    /// Delete tags from the organization and every workspace carrying them.
    async fn delete_organization_tags(
        &self,
        organization: &str,
        options: &OrganizationTagsDeleteOptions,
    ) -> Result<()>;

    async fn add_workspaces_to_tag(
        &self,
        tag_id: &str,
        options: &AddWorkspacesToTagOptions,
    ) -> Result<()>;
}
