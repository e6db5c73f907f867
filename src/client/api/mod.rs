//! API trait definitions split by resource
//!
//! Each resource gets a focused trait. The [`TfeApi`](super::TfeApi)
//! super-trait combines all of them, so code that needs the whole surface
//! can take `&dyn TfeApi`.

mod no_code_modules;
mod oauth_clients;
mod organizations;
mod policies;
mod projects;
mod registry_modules;
mod tags;
mod teams;
mod users;
mod workspaces;

pub use no_code_modules::NoCodeModulesApi;
pub use oauth_clients::OAuthClientsApi;
pub use organizations::OrganizationsApi;
pub use policies::PoliciesApi;
pub use projects::ProjectsApi;
pub use registry_modules::RegistryModulesApi;
pub use tags::OrganizationTagsApi;
pub use teams::TeamsApi;
pub use users::UsersApi;
pub use workspaces::WorkspacesApi;
