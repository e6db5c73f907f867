use async_trait::async_trait;
use reqwest::Method;

use super::{TfeClient, organization_segment};
use crate::client::api::OAuthClientsApi;
use crate::client::models::{
    OAuthClient, OAuthClientCreateOptions, OAuthClientListOptions, OAuthClientProjectsOptions,
    OAuthClientUpdateOptions,
};
use crate::client::pagination::{PagedResponse, QueryParams};
use crate::error::Result;
use crate::jsonapi::{Relationships, encode};
use crate::validation::require_id;

fn oauth_client_path(oauth_client_id: &str) -> Result<String> {
    require_id(oauth_client_id, "OAuth client")?;
    Ok(format!("oauth-clients/{}", oauth_client_id))
}

#[async_trait]
impl OAuthClientsApi for TfeClient {
    async fn list_oauth_clients(
        &self,
        organization: &str,
        options: Option<&OAuthClientListOptions>,
    ) -> Result<PagedResponse<OAuthClient>> {
        let org = organization_segment(organization)?;
        let query = options.map(|o| o.to_query_params()).unwrap_or_default();
        self.get_page(&format!("organizations/{}/oauth-clients", org), &query)
            .await
    }

    async fn create_oauth_client(
        &self,
        organization: &str,
        options: &OAuthClientCreateOptions,
    ) -> Result<OAuthClient> {
        let org = organization_segment(organization)?;
        options.validate()?;
        let body = encode::resource("oauth-clients", None, options, options.relationships())?;
        self.post_one(&format!("organizations/{}/oauth-clients", org), body)
            .await
    }

    async fn read_oauth_client(&self, oauth_client_id: &str) -> Result<OAuthClient> {
        self.get_one(&oauth_client_path(oauth_client_id)?, &QueryParams::new())
            .await
    }

    async fn update_oauth_client(
        &self,
        oauth_client_id: &str,
        options: &OAuthClientUpdateOptions,
    ) -> Result<OAuthClient> {
        let path = oauth_client_path(oauth_client_id)?;
        let body = encode::resource("oauth-clients", None, options, Relationships::new())?;
        self.patch_one(&path, body).await
    }

    async fn delete_oauth_client(&self, oauth_client_id: &str) -> Result<()> {
        self.delete(&oauth_client_path(oauth_client_id)?).await
    }

    async fn add_oauth_client_projects(
        &self,
        oauth_client_id: &str,
        options: &OAuthClientProjectsOptions,
    ) -> Result<()> {
        let path = format!("{}/relationships/projects", oauth_client_path(oauth_client_id)?);
        options.validate()?;
        self.execute(Method::POST, &path, Some(options.to_body())).await
    }

    async fn remove_oauth_client_projects(
        &self,
        oauth_client_id: &str,
        options: &OAuthClientProjectsOptions,
    ) -> Result<()> {
        let path = format!("{}/relationships/projects", oauth_client_path(oauth_client_id)?);
        options.validate()?;
        self.execute(Method::DELETE, &path, Some(options.to_body())).await
    }
}
