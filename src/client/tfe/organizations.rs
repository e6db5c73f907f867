use async_trait::async_trait;
use reqwest::Method;

use super::{TfeClient, organization_segment};
use crate::client::api::OrganizationsApi;
use crate::client::models::data_retention::{DELETE_OLDER_TYPE, DONT_DELETE_TYPE};
use crate::client::models::{
    DataRetentionPolicyChoice, DataRetentionPolicyDeleteOlder,
    DataRetentionPolicyDeleteOlderSetOptions, DataRetentionPolicyDontDelete,
    DataRetentionPolicyDontDeleteSetOptions, Organization, OrganizationCreateOptions,
    OrganizationListOptions, OrganizationUpdateOptions,
};
use crate::client::pagination::{ListOptions, PagedResponse, QueryParams};
use crate::client::parallel::{DEFAULT_MAX_CONCURRENT, collect_all_pages};
use crate::error::Result;
use crate::jsonapi::choice::decode_primary;
use crate::jsonapi::{Relationships, encode};

#[async_trait]
impl OrganizationsApi for TfeClient {
    async fn list_organizations(
        &self,
        options: Option<&OrganizationListOptions>,
    ) -> Result<PagedResponse<Organization>> {
        let query = options.map(|o| o.to_query_params()).unwrap_or_default();
        self.get_page("organizations", &query).await
    }

    async fn list_all_organizations(&self) -> Result<Vec<Organization>> {
        let page = |number: usize| OrganizationListOptions {
            list: ListOptions::new().page_number(number).page_size(self.page_size),
            query: None,
        };

        let first = self.list_organizations(Some(&page(1))).await?;
        collect_all_pages(
            first,
            |number| {
                let options = page(number);
                async move { Ok(self.list_organizations(Some(&options)).await?.items) }
            },
            DEFAULT_MAX_CONCURRENT,
        )
        .await
    }

    async fn create_organization(&self, options: &OrganizationCreateOptions) -> Result<Organization> {
        options.validate()?;
        let body = encode::resource("organizations", None, options, Relationships::new())?;
        self.post_one("organizations", body).await
    }

    async fn read_organization(&self, organization: &str) -> Result<Organization> {
        let org = organization_segment(organization)?;
        self.get_one(&format!("organizations/{}", org), &QueryParams::new())
            .await
    }

    async fn update_organization(
        &self,
        organization: &str,
        options: &OrganizationUpdateOptions,
    ) -> Result<Organization> {
        let org = organization_segment(organization)?;
        options.validate()?;
        let body = encode::resource("organizations", None, options, Relationships::new())?;
        self.patch_one(&format!("organizations/{}", org), body).await
    }

    async fn delete_organization(&self, organization: &str) -> Result<()> {
        let org = organization_segment(organization)?;
        self.delete(&format!("organizations/{}", org)).await
    }

    async fn read_organization_data_retention_policy_choice(
        &self,
        organization: &str,
    ) -> Result<DataRetentionPolicyChoice> {
        let org = organization_segment(organization)?;
        let path = format!("organizations/{}/relationships/data-retention-policy", org);
        let document = self
            .document(Method::GET, &path, &QueryParams::new(), None)
            .await?;
        Ok(decode_primary(&document)?)
    }

    async fn set_organization_data_retention_policy_delete_older(
        &self,
        organization: &str,
        options: &DataRetentionPolicyDeleteOlderSetOptions,
    ) -> Result<DataRetentionPolicyDeleteOlder> {
        let org = organization_segment(organization)?;
        options.validate()?;
        let path = format!("organizations/{}/relationships/data-retention-policy", org);
        let body = encode::resource(DELETE_OLDER_TYPE, None, options, Relationships::new())?;
        self.post_one(&path, body).await
    }

    async fn set_organization_data_retention_policy_dont_delete(
        &self,
        organization: &str,
        options: &DataRetentionPolicyDontDeleteSetOptions,
    ) -> Result<DataRetentionPolicyDontDelete> {
        let org = organization_segment(organization)?;
        let path = format!("organizations/{}/relationships/data-retention-policy", org);
        let body = encode::resource(DONT_DELETE_TYPE, None, options, Relationships::new())?;
        self.post_one(&path, body).await
    }

    async fn delete_organization_data_retention_policy(&self, organization: &str) -> Result<()> {
        let org = organization_segment(organization)?;
        self.delete(&format!("organizations/{}/relationships/data-retention-policy", org))
            .await
    }
}
