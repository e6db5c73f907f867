//! Account API trait

use async_trait::async_trait;

use crate::client::models::{User, UserUpdateOptions};
use crate::error::Result;

/// Operations on the user that owns the API token
#[async_trait]
pub trait UsersApi: Send + Sync {
    async fn read_current_user(&self) -> Result<User>;

    async fn update_current_user(&self, options: &UserUpdateOptions) -> Result<User>;
}
