//! Project models

use serde::{Deserialize, Serialize};

use crate::client::pagination::{ListOptions, QueryParams};
use crate::error::{DecodeError, ValidationError};
use crate::jsonapi::{Decode, Included, RawResource};
use crate::validation::valid_string;

/// A project groups workspaces inside an organization.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Project {
    pub id: String,
    pub name: String,
    pub description: Option<String>,
    pub organization: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "kebab-case")]
struct ProjectAttributes {
    name: String,
    #[serde(default)]
    description: Option<String>,
}

impl Decode for Project {
    const TYPE: &'static str = "projects";

    fn decode(resource: &RawResource, _included: &Included<'_>) -> Result<Self, DecodeError> {
        let attrs: ProjectAttributes = resource.attributes("project")?;
        Ok(Project {
            id: resource.id.clone(),
            name: attrs.name,
            description: attrs.description,
            organization: resource.to_one_id("organization"),
        })
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProjectListOptions {
    pub list: ListOptions,

    /// Exact name filter
    pub name: Option<String>,

    /// Substring search on the name
    pub query: Option<String>,
}

impl ProjectListOptions {
    pub fn to_query_params(&self) -> QueryParams {
        let mut params = self.list.to_query_params();
        if let Some(name) = &self.name {
            params.push(("filter[names]".to_string(), name.clone()));
        }
        if let Some(query) = &self.query {
            params.push(("q".to_string(), query.clone()));
        }
        params
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub struct ProjectCreateOptions {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl ProjectCreateOptions {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: None,
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
pub struct ProjectUpdateOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl ProjectUpdateOptions {
    pub fn validate(&self) -> Result<(), ValidationError> {
        if let Some(name) = &self.name {
            if !valid_string(name) {
                return Err(ValidationError::InvalidValue("name"));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::fixtures::{ResourceBuilder, page};
    use serde_json::json;

    #[test]
    fn test_decode_project_page() {
        let doc = page(
            vec![
                ResourceBuilder::new("projects", "prj-1")
                    .attribute("name", json!("Default Project"))
                    .to_one("organization", "organizations", "acme")
                    .build(),
                ResourceBuilder::new("projects", "prj-2")
                    .attribute("name", json!("Networking"))
                    .attribute("description", json!("VPCs"))
                    .build(),
            ],
            1,
            1,
            2,
        );

        let projects: Vec<Project> = doc.decode_many().unwrap();
        assert_eq!(projects.len(), 2);
        assert_eq!(projects[0].organization.as_deref(), Some("acme"));
        assert_eq!(projects[1].description.as_deref(), Some("VPCs"));
        assert_eq!(doc.pagination().map(|p| p.total_count), Some(2));
    }

    #[test]
    fn test_create_requires_name() {
        assert_eq!(
            ProjectCreateOptions::new("  ").validate(),
            Err(ValidationError::RequiredField("name"))
        );
        // Project names may contain spaces.
        assert!(ProjectCreateOptions::new("Default Project").validate().is_ok());
    }

    #[test]
    fn test_update_default_is_valid() {
        assert!(ProjectUpdateOptions::default().validate().is_ok());
    }

    #[test]
    fn test_list_query_params() {
        let options = ProjectListOptions {
            name: Some("Networking".to_string()),
            ..Default::default()
        };
        assert_eq!(
            options.to_query_params(),
            vec![("filter[names]".to_string(), "Networking".to_string())]
        );
    }
}
