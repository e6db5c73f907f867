//! No-code module API trait

use async_trait::async_trait;

use crate::client::models::{
    NoCodeModule, NoCodeModuleCreateOptions, NoCodeModuleReadOptions, NoCodeModuleUpdateOptions,
};
use crate::error::Result;

#[async_trait]
pub trait NoCodeModulesApi: Send + Sync {
    async fn create_no_code_module(
        &self,
        organization: &str,
        options: &NoCodeModuleCreateOptions,
    ) -> Result<NoCodeModule>;

    async fn read_no_code_module(
        &self,
        no_code_module_id: &str,
        options: Option<&NoCodeModuleReadOptions>,
    ) -> Result<NoCodeModule>;

    async fn update_no_code_module(
        &self,
        no_code_module_id: &str,
        options: &NoCodeModuleUpdateOptions,
    ) -> Result<NoCodeModule>;

    async fn delete_no_code_module(&self, no_code_module_id: &str) -> Result<()>;
}
