//! Registry module API trait

use async_trait::async_trait;

use crate::client::models::{
    RegistryModule, RegistryModuleCreateOptions, RegistryModuleCreateWithVcsOptions,
    RegistryModuleId, RegistryModuleListOptions, RegistryModuleUpdateOptions,
};
use crate::client::pagination::PagedResponse;
use crate::error::Result;

/// Registry module operations. Single modules are addressed by
/// [`RegistryModuleId`].
#[async_trait]
pub trait RegistryModulesApi: Send + Sync {
    async fn list_registry_modules(
        &self,
        organization: &str,
        options: Option<&RegistryModuleListOptions>,
    ) -> Result<PagedResponse<RegistryModule>>;

    /// Create a module whose versions are uploaded through the API.
    async fn create_registry_module(
        &self,
        organization: &str,
        options: &RegistryModuleCreateOptions,
    ) -> Result<RegistryModule>;

    /// Create a module published from a VCS repository.
    async fn create_registry_module_with_vcs_connection(
        &self,
        organization: &str,
        options: &RegistryModuleCreateWithVcsOptions,
    ) -> Result<RegistryModule>;

    async fn read_registry_module(&self, id: &RegistryModuleId) -> Result<RegistryModule>;

    async fn update_registry_module(
        &self,
        id: &RegistryModuleId,
        options: &RegistryModuleUpdateOptions,
    ) -> Result<RegistryModule>;

    /// Delete the module with every provider and version.
    async fn delete_registry_module(&self, id: &RegistryModuleId) -> Result<()>;

    /// Delete one provider of the module and its versions.
    async fn delete_registry_module_provider(&self, id: &RegistryModuleId) -> Result<()>;

    async fn delete_registry_module_version(&self, id: &RegistryModuleId, version: &str) -> Result<()>;
}
