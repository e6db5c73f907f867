use async_trait::async_trait;

use super::TfeClient;
use crate::client::api::UsersApi;
use crate::client::models::{User, UserUpdateOptions};
use crate::client::pagination::QueryParams;
use crate::error::Result;
use crate::jsonapi::{Relationships, encode};

#[async_trait]
impl UsersApi for TfeClient {
    async fn read_current_user(&self) -> Result<User> {
        self.get_one("account/details", &QueryParams::new()).await
    }

    async fn update_current_user(&self, options: &UserUpdateOptions) -> Result<User> {
        options.validate()?;
        let body = encode::resource("users", None, options, Relationships::new())?;
        self.patch_one("account/update", body).await
    }
}
