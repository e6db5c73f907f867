//! OAuth client API trait

use async_trait::async_trait;

use crate::client::models::{
    OAuthClient, OAuthClientCreateOptions, OAuthClientListOptions, OAuthClientProjectsOptions,
    OAuthClientUpdateOptions,
};
use crate::client::pagination::PagedResponse;
use crate::error::Result;

#[async_trait]
pub trait OAuthClientsApi: Send + Sync {
    async fn list_oauth_clients(
        &self,
        organization: &str,
        options: Option<&OAuthClientListOptions>,
    ) -> Result<PagedResponse<OAuthClient>>;

    async fn create_oauth_client(
        &self,
        organization: &str,
        options: &OAuthClientCreateOptions,
    ) -> Result<OAuthClient>;

    async fn read_oauth_client(&self, oauth_client_id: &str) -> Result<OAuthClient>;

    async fn update_oauth_client(
        &self,
        oauth_client_id: &str,
        options: &OAuthClientUpdateOptions,
    ) -> Result<OAuthClient>;

    async fn delete_oauth_client(&self, oauth_client_id: &str) -> Result<()>;

    async fn add_oauth_client_projects(
        &self,
        oauth_client_id: &str,
        options: &OAuthClientProjectsOptions,
    ) -> Result<()>;

    async fn remove_oauth_client_projects(
        &self,
        oauth_client_id: &str,
        options: &OAuthClientProjectsOptions,
    ) -> Result<()>;
}
