//! Client for the Terraform Cloud / Enterprise API

pub mod api;
#[cfg(test)]
pub(crate) mod fixtures;
pub mod models;
pub mod pagination;
pub mod parallel;
pub mod rate_limit;
pub mod tfe;

pub use api::{
    NoCodeModulesApi, OAuthClientsApi, OrganizationTagsApi, OrganizationsApi, PoliciesApi,
    ProjectsApi, RegistryModulesApi, TeamsApi, UsersApi, WorkspacesApi,
};
pub use pagination::{ListOptions, MAX_PAGE_SIZE, PagedResponse, Pagination};
pub use parallel::{collect_all_pages, fetch_remaining_pages};
pub use tfe::TfeClient;

/// The whole API surface.
///
/// Implemented for every type that implements each resource trait.
pub trait TfeApi:
    OrganizationsApi
    + WorkspacesApi
    + ProjectsApi
    + TeamsApi
    + UsersApi
    + OAuthClientsApi
    + OrganizationTagsApi
    + PoliciesApi
    + RegistryModulesApi
    + NoCodeModulesApi
{
}

impl<T> TfeApi for T where
    T: OrganizationsApi
        + WorkspacesApi
        + ProjectsApi
        + TeamsApi
        + UsersApi
        + OAuthClientsApi
        + OrganizationTagsApi
        + PoliciesApi
        + RegistryModulesApi
        + NoCodeModulesApi
{
}
