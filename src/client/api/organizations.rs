//! Organization API trait

use async_trait::async_trait;

use crate::client::models::{
    DataRetentionPolicyChoice, DataRetentionPolicyDeleteOlder,
    DataRetentionPolicyDeleteOlderSetOptions, DataRetentionPolicyDontDelete,
    DataRetentionPolicyDontDeleteSetOptions, Organization, OrganizationCreateOptions,
    OrganizationListOptions, OrganizationUpdateOptions,
};
use crate::client::pagination::PagedResponse;
use crate::error::Result;

/// Organization operations
#[async_trait]
pub trait OrganizationsApi: Send + Sync {
    /// List organizations the token can access.
    async fn list_organizations(
        &self,
        options: Option<&OrganizationListOptions>,
    ) -> Result<PagedResponse<Organization>>;

    /// Every organization, fetching the pages after the first concurrently.
    async fn list_all_organizations(&self) -> Result<Vec<Organization>>;

    async fn create_organization(&self, options: &OrganizationCreateOptions) -> Result<Organization>;

    async fn read_organization(&self, organization: &str) -> Result<Organization>;

    async fn update_organization(
        &self,
        organization: &str,
        options: &OrganizationUpdateOptions,
    ) -> Result<Organization>;

    async fn delete_organization(&self, organization: &str) -> Result<()>;

    // ========================================================================
    // Data retention
    // ========================================================================

    /// Read the organization's data retention policy, whichever shape it has.
    async fn read_organization_data_retention_policy_choice(
        &self,
        organization: &str,
    ) -> Result<DataRetentionPolicyChoice>;

    async fn set_organization_data_retention_policy_delete_older(
        &self,
        organization: &str,
        options: &DataRetentionPolicyDeleteOlderSetOptions,
    ) -> Result<DataRetentionPolicyDeleteOlder>;

    async fn set_organization_data_retention_policy_dont_delete(
        &self,
        organization: &str,
        options: &DataRetentionPolicyDontDeleteSetOptions,
    ) -> Result<DataRetentionPolicyDontDelete>;

    async fn delete_organization_data_retention_policy(&self, organization: &str) -> Result<()>;
}
