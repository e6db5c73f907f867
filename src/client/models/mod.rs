//! Resource models
//!
//! One module per resource: the decoded resource struct, its option
//! structs, and the pre-flight validation of those options.

mod common;
pub mod data_retention;
mod no_code_module;
mod oauth_client;
mod organization;
mod policy;
mod project;
mod registry_module;
mod tag;
mod team;
mod user;
mod workspace;

pub use common::{AuthPolicy, ExecutionMode};
pub use data_retention::{
    DataRetentionPolicy, DataRetentionPolicyChoice, DataRetentionPolicyDeleteOlder,
    DataRetentionPolicyDeleteOlderSetOptions, DataRetentionPolicyDontDelete,
    DataRetentionPolicyDontDeleteSetOptions,
};
pub use no_code_module::{
    NoCodeModule, NoCodeModuleCreateOptions, NoCodeModuleIncludeOpt, NoCodeModuleReadOptions,
    NoCodeModuleUpdateOptions, NoCodeVariableOption, VariableOption,
};
pub use oauth_client::{
    OAuthClient, OAuthClientCreateOptions, OAuthClientListOptions, OAuthClientProjectsOptions,
    OAuthClientUpdateOptions, ServiceProviderType,
};
pub use organization::{
    Organization, OrganizationCreateOptions, OrganizationListOptions, OrganizationPermissions,
    OrganizationUpdateOptions,
};
pub use policy::{
    EnforcementLevel, Policy, PolicyCreateOptions, PolicyKind, PolicyListOptions,
    PolicyUpdateOptions,
};
pub use project::{Project, ProjectCreateOptions, ProjectListOptions, ProjectUpdateOptions};
pub use registry_module::{
    ModuleVersionStatus, RegistryModule, RegistryModuleCreateOptions,
    RegistryModuleCreateWithVcsOptions, RegistryModuleId, RegistryModuleListOptions,
    RegistryModulePermissions, RegistryModuleUpdateOptions, RegistryModuleVcsRepo,
    RegistryModuleVcsRepoOptions, RegistryModuleVcsUpdateOptions, RegistryName,
};
pub use tag::{
    AddWorkspacesToTagOptions, OrganizationTagsDeleteOptions, OrganizationTagsListOptions, Tag,
};
pub use team::{
    Team, TeamCreateOptions, TeamIncludeOpt, TeamListOptions, TeamOrganizationAccess,
    TeamPermissions, TeamReadOptions, TeamUpdateOptions, TeamVisibility,
};
pub use user::{TwoFactor, User, UserUpdateOptions};
pub use workspace::{
    LockedByChoice, TagBinding, TagRef, VcsRepo, VcsRepoOptions, Workspace,
    WorkspaceCreateOptions, WorkspaceIncludeOpt, WorkspaceListOptions, WorkspaceLockOptions,
    WorkspacePermissions, WorkspaceReadOptions, WorkspaceTagOption, WorkspaceTagsOptions,
    WorkspaceUpdateOptions,
};
