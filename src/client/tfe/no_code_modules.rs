use async_trait::async_trait;

use super::{TfeClient, organization_segment};
use crate::client::api::NoCodeModulesApi;
use crate::client::models::{
    NoCodeModule, NoCodeModuleCreateOptions, NoCodeModuleReadOptions, NoCodeModuleUpdateOptions,
};
use crate::error::Result;
use crate::jsonapi::encode;
use crate::validation::require_id;

fn no_code_module_path(no_code_module_id: &str) -> Result<String> {
    require_id(no_code_module_id, "no-code module")?;
    Ok(format!("no-code-modules/{}", no_code_module_id))
}

#[async_trait]
impl NoCodeModulesApi for TfeClient {
    async fn create_no_code_module(
        &self,
        organization: &str,
        options: &NoCodeModuleCreateOptions,
    ) -> Result<NoCodeModule> {
        let org = organization_segment(organization)?;
        options.validate()?;
        let body = encode::resource("no-code-modules", None, options, options.relationships())?;
        self.post_one(&format!("organizations/{}/no-code-modules", org), body)
            .await
    }

    async fn read_no_code_module(
        &self,
        no_code_module_id: &str,
        options: Option<&NoCodeModuleReadOptions>,
    ) -> Result<NoCodeModule> {
        let path = no_code_module_path(no_code_module_id)?;
        let query = options.map(|o| o.to_query_params()).unwrap_or_default();
        self.get_one(&path, &query).await
    }

    async fn update_no_code_module(
        &self,
        no_code_module_id: &str,
        options: &NoCodeModuleUpdateOptions,
    ) -> Result<NoCodeModule> {
        let path = no_code_module_path(no_code_module_id)?;
        options.validate()?;
        let body = encode::resource("no-code-modules", None, options, options.relationships())?;
        self.patch_one(&path, body).await
    }

    async fn delete_no_code_module(&self, no_code_module_id: &str) -> Result<()> {
        self.delete(&no_code_module_path(no_code_module_id)?).await
    }
}
