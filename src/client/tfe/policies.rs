use async_trait::async_trait;

use super::{TfeClient, organization_segment};
use crate::client::api::PoliciesApi;
use crate::client::models::{Policy, PolicyCreateOptions, PolicyListOptions, PolicyUpdateOptions};
use crate::client::pagination::{PagedResponse, QueryParams};
use crate::error::Result;
use crate::jsonapi::{Relationships, encode};
use crate::validation::require_id;

fn policy_path(policy_id: &str) -> Result<String> {
    require_id(policy_id, "policy")?;
    Ok(format!("policies/{}", policy_id))
}

#[async_trait]
impl PoliciesApi for TfeClient {
    async fn list_policies(
        &self,
        organization: &str,
        options: Option<&PolicyListOptions>,
    ) -> Result<PagedResponse<Policy>> {
        let org = organization_segment(organization)?;
        let query = options.map(|o| o.to_query_params()).unwrap_or_default();
        self.get_page(&format!("organizations/{}/policies", org), &query)
            .await
    }

    async fn create_policy(&self, organization: &str, options: &PolicyCreateOptions) -> Result<Policy> {
        let org = organization_segment(organization)?;
        options.validate()?;
        let body = encode::resource("policies", None, options, Relationships::new())?;
        self.post_one(&format!("organizations/{}/policies", org), body)
            .await
    }

    async fn read_policy(&self, policy_id: &str) -> Result<Policy> {
        self.get_one(&policy_path(policy_id)?, &QueryParams::new())
            .await
    }

    async fn update_policy(&self, policy_id: &str, options: &PolicyUpdateOptions) -> Result<Policy> {
        let path = policy_path(policy_id)?;
        options.validate()?;
        let body = encode::resource("policies", None, options, Relationships::new())?;
        self.patch_one(&path, body).await
    }

    async fn delete_policy(&self, policy_id: &str) -> Result<()> {
        self.delete(&policy_path(policy_id)?).await
    }

    async fn upload_policy(&self, policy_id: &str, content: Vec<u8>) -> Result<()> {
        let path = format!("{}/upload", policy_path(policy_id)?);
        self.put_bytes(&path, content).await
    }

    async fn download_policy(&self, policy_id: &str) -> Result<Vec<u8>> {
        let path = format!("{}/download", policy_path(policy_id)?);
        self.get_bytes(&path).await
    }
}
