use async_trait::async_trait;

use super::{TfeClient, organization_segment};
use crate::client::api::TeamsApi;
use crate::client::models::{
    Team, TeamCreateOptions, TeamListOptions, TeamReadOptions, TeamUpdateOptions,
};
use crate::client::pagination::{PagedResponse, QueryParams};
use crate::error::Result;
use crate::jsonapi::{Relationships, encode};
use crate::validation::require_id;

fn team_path(team_id: &str) -> Result<String> {
    require_id(team_id, "team")?;
    Ok(format!("teams/{}", team_id))
}

#[async_trait]
impl TeamsApi for TfeClient {
    async fn list_teams(
        &self,
        organization: &str,
        options: Option<&TeamListOptions>,
    ) -> Result<PagedResponse<Team>> {
        let org = organization_segment(organization)?;
        let query = match options {
            Some(options) => {
                options.validate()?;
                options.to_query_params()
            }
            None => QueryParams::new(),
        };
        self.get_page(&format!("organizations/{}/teams", org), &query)
            .await
    }

    async fn create_team(&self, organization: &str, options: &TeamCreateOptions) -> Result<Team> {
        let org = organization_segment(organization)?;
        options.validate()?;
        let body = encode::resource("teams", None, options, Relationships::new())?;
        self.post_one(&format!("organizations/{}/teams", org), body)
            .await
    }

    async fn read_team(&self, team_id: &str) -> Result<Team> {
        self.read_team_with_options(team_id, None).await
    }

    async fn read_team_with_options(
        &self,
        team_id: &str,
        options: Option<&TeamReadOptions>,
    ) -> Result<Team> {
        let path = team_path(team_id)?;
        let query = options.map(|o| o.to_query_params()).unwrap_or_default();
        self.get_one(&path, &query).await
    }

    async fn update_team(&self, team_id: &str, options: &TeamUpdateOptions) -> Result<Team> {
        let path = team_path(team_id)?;
        options.validate()?;
        let body = encode::resource("teams", None, options, Relationships::new())?;
        self.patch_one(&path, body).await
    }

    async fn delete_team(&self, team_id: &str) -> Result<()> {
        self.delete(&team_path(team_id)?).await
    }
}
