//! Organization tags

use serde::Deserialize;
use serde_json::Value;

use crate::client::pagination::{ListOptions, QueryParams};
use crate::error::{DecodeError, ValidationError};
use crate::jsonapi::encode;
use crate::jsonapi::{Decode, Included, RawResource};
use crate::validation::{require_id, require_list};

/// A workspace tag as listed at the organization or workspace level.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tag {
    pub id: String,
    pub name: String,

    /// Number of workspaces carrying the tag
    pub instance_count: u32,
    pub organization: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "kebab-case")]
struct TagAttributes {
    #[serde(default)]
    name: String,
    #[serde(default)]
    instance_count: u32,
}

impl Decode for Tag {
    const TYPE: &'static str = "tags";

    fn decode(resource: &RawResource, _included: &Included<'_>) -> Result<Self, DecodeError> {
        let attrs: TagAttributes = resource.attributes("tag")?;
        Ok(Tag {
            id: resource.id.clone(),
            name: attrs.name,
            instance_count: attrs.instance_count,
            organization: resource.to_one_id("organization"),
        })
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OrganizationTagsListOptions {
    pub list: ListOptions,

    /// Leave out tags already on this workspace
    pub exclude_taggable_id: Option<String>,

    /// Substring search on the tag name
    pub query: Option<String>,
}

impl OrganizationTagsListOptions {
    pub fn validate(&self) -> Result<(), ValidationError> {
        if let Some(id) = &self.exclude_taggable_id {
            require_id(id, "taggable")?;
        }
        Ok(())
    }

    pub fn to_query_params(&self) -> QueryParams {
        let mut params = self.list.to_query_params();
        if let Some(id) = &self.exclude_taggable_id {
            params.push(("filter[exclude][taggable][id]".to_string(), id.clone()));
        }
        if let Some(query) = &self.query {
            params.push(("q".to_string(), query.clone()));
        }
        params
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OrganizationTagsDeleteOptions {
    pub ids: Option<Vec<String>>,
}

impl OrganizationTagsDeleteOptions {
    pub fn new(ids: Vec<String>) -> Self {
        Self { ids: Some(ids) }
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        let ids = require_list(self.ids.as_deref(), "tag ids")?;
        for id in ids {
            require_id(id, "tag")?;
        }
        Ok(())
    }

    pub(crate) fn to_body(&self) -> Value {
        encode::identifiers("tags", self.ids.iter().flatten().map(String::as_str))
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AddWorkspacesToTagOptions {
    pub workspace_ids: Option<Vec<String>>,
}

impl AddWorkspacesToTagOptions {
    pub fn new(workspace_ids: Vec<String>) -> Self {
        Self {
            workspace_ids: Some(workspace_ids),
        }
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        let ids = require_list(self.workspace_ids.as_deref(), "workspace ids")?;
        for id in ids {
            require_id(id, "workspace")?;
        }
        Ok(())
    }

    pub(crate) fn to_body(&self) -> Value {
        let ids = self.workspace_ids.iter().flatten().map(String::as_str);
        encode::identifiers("workspaces", ids)
    }
}
