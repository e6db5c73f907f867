//! Typed client for the HCP Terraform / Terraform Enterprise API.
//!
//! Resources are reached through per-resource traits implemented by
//! [`TfeClient`]:
//!
//! ```no_run
//! use tfe_client::{Config, OrganizationsApi, TfeClient};
//!
//! # async fn run() -> tfe_client::Result<()> {
//! let client = TfeClient::new(Config::new("https://app.terraform.io", "token"))?;
//! let org = client.read_organization("acme").await?;
//! println!("{}", org.name);
//! # Ok(())
//! # }
//! ```
//!
//! Every operation validates its inputs before any request is sent and
//! returns [`error::ValidationError`] on rejection.

pub mod client;
pub mod config;
pub mod error;
pub mod jsonapi;
pub mod validation;

pub use client::models;
pub use client::{
    ListOptions, NoCodeModulesApi, OAuthClientsApi, OrganizationTagsApi, OrganizationsApi,
    PagedResponse, Pagination, PoliciesApi, ProjectsApi, RegistryModulesApi, TeamsApi, TfeApi,
    TfeClient, UsersApi, WorkspacesApi,
};
pub use config::Config;
pub use error::{Error, Result};
pub use jsonapi::Nullable;
