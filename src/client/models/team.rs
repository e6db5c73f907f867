//! Team models

use serde::{Deserialize, Serialize};

use super::common::{include_param, wire_enum};
use super::user::User;
use crate::client::pagination::{ListOptions, QueryParams};
use crate::error::{DecodeError, ValidationError};
use crate::jsonapi::{Decode, Included, RawResource};
use crate::validation::valid_string;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Team {
    pub id: String,
    pub name: String,
    pub is_unified: bool,
    pub organization_access: TeamOrganizationAccess,
    pub permissions: TeamPermissions,
    pub users_count: u32,
    pub visibility: Option<TeamVisibility>,
    pub sso_team_id: Option<String>,
    pub allow_member_token_management: bool,
    pub organization: Option<String>,
    pub user_ids: Vec<String>,

    /// Side-loaded members, only when read with `TeamIncludeOpt::Users`
    pub users: Vec<User>,
}

wire_enum! {
    TeamVisibility("visibility") {
        Secret => "secret",
        Organization => "organization",
    }
}

wire_enum! {
    /// Related resources that can be side-loaded with a team
    TeamIncludeOpt("include") {
        Users => "users",
        OrganizationMemberships => "organization-memberships",
    }
}

/// Organization-level permissions granted to team members
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case", default)]
pub struct TeamOrganizationAccess {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub manage_policies: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub manage_policy_overrides: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub manage_workspaces: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub manage_vcs_settings: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub manage_providers: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub manage_modules: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub manage_run_tasks: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub manage_projects: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub read_workspaces: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub read_projects: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub manage_membership: Option<bool>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case", default)]
pub struct TeamPermissions {
    pub can_destroy: bool,
    pub can_update_membership: bool,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "kebab-case")]
struct TeamAttributes {
    name: String,
    #[serde(default)]
    is_unified: bool,
    #[serde(default)]
    organization_access: TeamOrganizationAccess,
    #[serde(default)]
    permissions: TeamPermissions,
    #[serde(default)]
    users_count: u32,
    #[serde(default)]
    visibility: Option<TeamVisibility>,
    #[serde(default)]
    sso_team_id: Option<String>,
    #[serde(default)]
    allow_member_token_management: bool,
}

impl Decode for Team {
    const TYPE: &'static str = "teams";

    fn decode(resource: &RawResource, included: &Included<'_>) -> Result<Self, DecodeError> {
        let attrs: TeamAttributes = resource.attributes("team")?;

        let related = resource.to_many("users");
        let user_ids = related.iter().map(|u| u.id.clone()).collect();
        let mut users = Vec::new();
        for identifier in related {
            if let Some(user) = included.decode::<User>(identifier)? {
                users.push(user);
            }
        }

        Ok(Team {
            id: resource.id.clone(),
            name: attrs.name,
            is_unified: attrs.is_unified,
            organization_access: attrs.organization_access,
            permissions: attrs.permissions,
            users_count: attrs.users_count,
            visibility: attrs.visibility,
            sso_team_id: attrs.sso_team_id,
            allow_member_token_management: attrs.allow_member_token_management,
            organization: resource.to_one_id("organization"),
            user_ids,
            users,
        })
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TeamListOptions {
    pub list: ListOptions,

    /// Exact team names to return
    pub names: Vec<String>,

    /// Substring search on the name
    pub query: Option<String>,

    pub include: Vec<TeamIncludeOpt>,
}

impl TeamListOptions {
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.names.iter().any(|n| !valid_string(n)) {
            return Err(ValidationError::InvalidValue("team name filter"));
        }
        Ok(())
    }

    pub fn to_query_params(&self) -> QueryParams {
        let mut params = self.list.to_query_params();
        if !self.names.is_empty() {
            params.push(("filter[names]".to_string(), self.names.join(",")));
        }
        if let Some(query) = &self.query {
            params.push(("q".to_string(), query.clone()));
        }
        params.extend(include_param(&self.include));
        params
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TeamReadOptions {
    pub include: Vec<TeamIncludeOpt>,
}

impl TeamReadOptions {
    pub fn to_query_params(&self) -> QueryParams {
        include_param(&self.include).into_iter().collect()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub struct TeamCreateOptions {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sso_team_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub organization_access: Option<TeamOrganizationAccess>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub visibility: Option<TeamVisibility>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub allow_member_token_management: Option<bool>,
}

impl TeamCreateOptions {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        if !valid_string(&self.name) {
            return Err(ValidationError::RequiredField("name"));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub struct TeamUpdateOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sso_team_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub organization_access: Option<TeamOrganizationAccess>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub visibility: Option<TeamVisibility>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub allow_member_token_management: Option<bool>,
}

impl TeamUpdateOptions {
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.name.as_deref().is_some_and(|n| !valid_string(n)) {
            return Err(ValidationError::InvalidValue("name"));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::fixtures::{ResourceBuilder, single};
    use crate::error::ValidationErrorKind;
    use serde_json::json;

    #[test]
    fn test_decode_team_with_included_users() {
        let doc = single(
            ResourceBuilder::new("teams", "team-1")
                .attribute("name", json!("owners"))
                .attribute("users-count", json!(2))
                .attribute("visibility", json!("secret"))
                .attribute("organization-access", json!({ "manage-workspaces": true }))
                .to_many("users", "users", &["user-1", "user-2"])
                .build(),
            vec![
                ResourceBuilder::new("users", "user-1")
                    .attribute("username", json!("alice"))
                    .build(),
            ],
        );

        let team: Team = doc.decode_one().unwrap();
        assert_eq!(team.name, "owners");
        assert_eq!(team.visibility, Some(TeamVisibility::Secret));
        assert_eq!(team.organization_access.manage_workspaces, Some(true));
        assert_eq!(team.organization_access.manage_policies, None);
        assert_eq!(team.user_ids, vec!["user-1".to_string(), "user-2".to_string()]);
        assert_eq!(team.users.len(), 1);
        assert_eq!(team.users[0].username, "alice");
    }

    #[test]
    fn test_create_requires_name() {
        let err = TeamCreateOptions::default().validate().unwrap_err();
        assert_eq!(err.kind(), ValidationErrorKind::RequiredField);
        assert!(TeamCreateOptions::new("devs").validate().is_ok());
    }

    #[test]
    fn test_list_rejects_blank_name_filter() {
        let options = TeamListOptions {
            names: vec!["owners".to_string(), String::new()],
            ..Default::default()
        };
        assert_eq!(
            options.validate(),
            Err(ValidationError::InvalidValue("team name filter"))
        );
    }

    #[test]
    fn test_list_query_params() {
        let options = TeamListOptions {
            names: vec!["owners".to_string(), "devs".to_string()],
            include: vec![TeamIncludeOpt::Users],
            ..Default::default()
        };
        assert_eq!(
            options.to_query_params(),
            vec![
                ("filter[names]".to_string(), "owners,devs".to_string()),
                ("include".to_string(), "users".to_string()),
            ]
        );
    }

    #[test]
    fn test_organization_access_serializes_set_fields_only() {
        let options = TeamCreateOptions {
            organization_access: Some(TeamOrganizationAccess {
                manage_projects: Some(true),
                ..Default::default()
            }),
            ..TeamCreateOptions::new("devs")
        };
        assert_eq!(
            serde_json::to_value(&options).unwrap(),
            json!({ "name": "devs", "organization-access": { "manage-projects": true } })
        );
    }
}
