//! User models

use serde::{Deserialize, Serialize};

use crate::error::{DecodeError, ValidationError};
use crate::jsonapi::{Decode, Included, RawResource};
use crate::validation::valid_string;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub id: String,
    pub username: String,
    pub email: Option<String>,
    pub avatar_url: Option<String>,
    pub is_service_account: bool,
    pub is_site_admin: bool,
    pub two_factor: TwoFactor,
    pub unconfirmed_email: Option<String>,
    pub v2_only: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TwoFactor {
    pub enabled: bool,
    pub verified: bool,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "kebab-case")]
struct UserAttributes {
    #[serde(default)]
    username: String,
    #[serde(default)]
    email: Option<String>,
    #[serde(default)]
    avatar_url: Option<String>,
    #[serde(default)]
    is_service_account: bool,
    #[serde(default)]
    is_site_admin: bool,
    #[serde(default)]
    two_factor: TwoFactor,
    #[serde(default)]
    unconfirmed_email: Option<String>,
    #[serde(default)]
    v2_only: bool,
}

impl Decode for User {
    const TYPE: &'static str = "users";

    fn decode(resource: &RawResource, _included: &Included<'_>) -> Result<Self, DecodeError> {
        let attrs: UserAttributes = resource.attributes("user")?;
        Ok(User {
            id: resource.id.clone(),
            username: attrs.username,
            email: attrs.email,
            avatar_url: attrs.avatar_url,
            is_service_account: attrs.is_service_account,
            is_site_admin: attrs.is_site_admin,
            two_factor: attrs.two_factor,
            unconfirmed_email: attrs.unconfirmed_email,
            v2_only: attrs.v2_only,
        })
    }
}

/// Changes to the authenticated user's account
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub struct UserUpdateOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}

impl UserUpdateOptions {
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.username.as_deref().is_some_and(|u| !valid_string(u)) {
            return Err(ValidationError::InvalidValue("username"));
        }
        if self.email.as_deref().is_some_and(|e| !valid_string(e)) {
            return Err(ValidationError::InvalidValue("email"));
        }
        Ok(())
    }
}
