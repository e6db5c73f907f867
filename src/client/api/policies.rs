//! Policy API trait

use async_trait::async_trait;

use crate::client::models::{Policy, PolicyCreateOptions, PolicyListOptions, PolicyUpdateOptions};
use crate::client::pagination::PagedResponse;
use crate::error::Result;

#[async_trait]
pub trait PoliciesApi: Send + Sync {
    async fn list_policies(
        &self,
        organization: &str,
        options: Option<&PolicyListOptions>,
    ) -> Result<PagedResponse<Policy>>;

    async fn create_policy(&self, organization: &str, options: &PolicyCreateOptions) -> Result<Policy>;

    async fn read_policy(&self, policy_id: &str) -> Result<Policy>;

    async fn update_policy(&self, policy_id: &str, options: &PolicyUpdateOptions) -> Result<Policy>;

    async fn delete_policy(&self, policy_id: &str) -> Result<()>;

    /// Replace the policy source code.
    async fn upload_policy(&self, policy_id: &str, content: Vec<u8>) -> Result<()>;

    async fn download_policy(&self, policy_id: &str) -> Result<Vec<u8>>;
}
