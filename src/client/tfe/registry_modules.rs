use async_trait::async_trait;

use super::{TfeClient, organization_segment};
use crate::client::api::RegistryModulesApi;
use crate::client::models::{
    RegistryModule, RegistryModuleCreateOptions, RegistryModuleCreateWithVcsOptions,
    RegistryModuleId, RegistryModuleListOptions, RegistryModuleUpdateOptions,
};
use crate::client::pagination::{PagedResponse, QueryParams};
use crate::error::{Result, ValidationError};
use crate::jsonapi::{Relationships, encode};
use crate::validation::valid_string_id;

#[async_trait]
impl RegistryModulesApi for TfeClient {
    async fn list_registry_modules(
        &self,
        organization: &str,
        options: Option<&RegistryModuleListOptions>,
    ) -> Result<PagedResponse<RegistryModule>> {
        let org = organization_segment(organization)?;
        let query = options.map(|o| o.to_query_params()).unwrap_or_default();
        self.get_page(&format!("organizations/{}/registry-modules", org), &query)
            .await
    }

    async fn create_registry_module(
        &self,
        organization: &str,
        options: &RegistryModuleCreateOptions,
    ) -> Result<RegistryModule> {
        let org = organization_segment(organization)?;
        options.validate()?;
        let body = encode::resource("registry-modules", None, options, Relationships::new())?;
        self.post_one(&format!("organizations/{}/registry-modules", org), body)
            .await
    }

    async fn create_registry_module_with_vcs_connection(
        &self,
        organization: &str,
        options: &RegistryModuleCreateWithVcsOptions,
    ) -> Result<RegistryModule> {
        let org = organization_segment(organization)?;
        options.validate()?;
        let body = encode::resource("registry-modules", None, options, Relationships::new())?;
        self.post_one(&format!("organizations/{}/registry-modules/vcs", org), body)
            .await
    }

    async fn read_registry_module(&self, id: &RegistryModuleId) -> Result<RegistryModule> {
        id.validate()?;
        self.get_one(&id.provider_path(), &QueryParams::new()).await
    }

    async fn update_registry_module(
        &self,
        id: &RegistryModuleId,
        options: &RegistryModuleUpdateOptions,
    ) -> Result<RegistryModule> {
        id.validate()?;
        let body = encode::resource("registry-modules", None, options, Relationships::new())?;
        self.patch_one(&id.provider_path(), body).await
    }

    async fn delete_registry_module(&self, id: &RegistryModuleId) -> Result<()> {
        id.validate()?;
        self.delete(&id.module_path()).await
    }

    async fn delete_registry_module_provider(&self, id: &RegistryModuleId) -> Result<()> {
        id.validate()?;
        self.delete(&id.provider_path()).await
    }

    async fn delete_registry_module_version(&self, id: &RegistryModuleId, version: &str) -> Result<()> {
        id.validate()?;
        if !valid_string_id(version) {
            return Err(ValidationError::InvalidValue("version").into());
        }
        self.delete(&format!("{}/{}", id.provider_path(), version))
            .await
    }
}
