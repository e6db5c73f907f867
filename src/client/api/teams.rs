//! Team API trait for CRUD operations

use async_trait::async_trait;

use crate::client::models::{
    Team, TeamCreateOptions, TeamListOptions, TeamReadOptions, TeamUpdateOptions,
};
use crate::client::pagination::PagedResponse;
use crate::error::Result;

/// Team management operations
#[async_trait]
pub trait TeamsApi: Send + Sync {
    async fn list_teams(
        &self,
        organization: &str,
        options: Option<&TeamListOptions>,
    ) -> Result<PagedResponse<Team>>;

    async fn create_team(&self, organization: &str, options: &TeamCreateOptions) -> Result<Team>;

    async fn read_team(&self, team_id: &str) -> Result<Team>;

    /// Read with side-loaded users or memberships. `None` is a plain read.
    async fn read_team_with_options(
        &self,
        team_id: &str,
        options: Option<&TeamReadOptions>,
    ) -> Result<Team>;

    async fn update_team(&self, team_id: &str, options: &TeamUpdateOptions) -> Result<Team>;

    /// Members stay in the organization; only the team goes away.
    async fn delete_team(&self, team_id: &str) -> Result<()>;
}
