//! No-code provisioning modules

use serde::{Deserialize, Serialize};
use serde_json::{Value, json};

use super::common::{include_param, wire_enum};
use crate::client::pagination::QueryParams;
use crate::error::{DecodeError, ValidationError};
use crate::jsonapi::{Decode, Included, RawResource, Relationships};
use crate::validation::{require_id, valid_string};

/// A registry module published for no-code provisioning.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NoCodeModule {
    pub id: String,
    pub enabled: bool,
    pub follow_latest_version: bool,
    pub version_pin: Option<String>,
    pub organization: Option<String>,
    pub registry_module_id: Option<String>,

    /// Filled when read with `NoCodeModuleIncludeOpt::VariableOptions`
    pub variable_options: Vec<VariableOption>,
}

/// Allowed values for one module input
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VariableOption {
    pub id: String,
    pub variable_name: String,
    pub variable_type: String,
    pub options: Vec<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "kebab-case")]
struct VariableOptionAttributes {
    #[serde(default)]
    variable_name: String,
    #[serde(default)]
    variable_type: String,
    #[serde(default)]
    options: Vec<String>,
}

impl Decode for VariableOption {
    const TYPE: &'static str = "variable-options";

    fn decode(resource: &RawResource, _included: &Included<'_>) -> Result<Self, DecodeError> {
        let attrs: VariableOptionAttributes = resource.attributes("variable option")?;
        Ok(VariableOption {
            id: resource.id.clone(),
            variable_name: attrs.variable_name,
            variable_type: attrs.variable_type,
            options: attrs.options,
        })
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "kebab-case")]
struct NoCodeModuleAttributes {
    #[serde(default)]
    enabled: bool,
    #[serde(default)]
    follow_latest_version: bool,
    #[serde(default)]
    version_pin: Option<String>,
}

impl Decode for NoCodeModule {
    const TYPE: &'static str = "no-code-modules";

    fn decode(resource: &RawResource, included: &Included<'_>) -> Result<Self, DecodeError> {
        let attrs: NoCodeModuleAttributes = resource.attributes("no-code module")?;

        let mut variable_options = Vec::new();
        for identifier in resource.to_many("variable-options") {
            if let Some(option) = included.decode::<VariableOption>(identifier)? {
                variable_options.push(option);
            }
        }

        Ok(NoCodeModule {
            id: resource.id.clone(),
            enabled: attrs.enabled,
            follow_latest_version: attrs.follow_latest_version,
            version_pin: attrs.version_pin.filter(|v| !v.is_empty()),
            organization: resource.to_one_id("organization"),
            registry_module_id: resource.to_one_id("registry-module"),
            variable_options,
        })
    }
}

wire_enum! {
    NoCodeModuleIncludeOpt("include") {
        VariableOptions => "variable_options",
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NoCodeModuleReadOptions {
    pub include: Vec<NoCodeModuleIncludeOpt>,
}

impl NoCodeModuleReadOptions {
    /// Build from raw include names, rejecting anything off the allow-list.
    pub fn from_include_names<S: AsRef<str>>(names: &[S]) -> Result<Self, ValidationError> {
        let include = names
            .iter()
            .map(|name| name.as_ref().parse())
            .collect::<Result<Vec<NoCodeModuleIncludeOpt>, _>>()?;
        Ok(Self { include })
    }

    pub fn to_query_params(&self) -> QueryParams {
        include_param(&self.include).into_iter().collect()
    }
}

/// Input restriction for one module variable
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NoCodeVariableOption {
    pub variable_name: String,
    pub variable_type: String,
    pub options: Vec<String>,
}

impl NoCodeVariableOption {
    fn validate(&self) -> Result<(), ValidationError> {
        if !valid_string(&self.variable_name) {
            return Err(ValidationError::RequiredField("variable-name"));
        }
        if !valid_string(&self.variable_type) {
            return Err(ValidationError::RequiredField("variable-type"));
        }
        Ok(())
    }

    fn to_resource(&self) -> Value {
        json!({
            "type": "variable-options",
            "attributes": {
                "variable-name": self.variable_name,
                "variable-type": self.variable_type,
                "options": self.options,
            }
        })
    }
}

/// Version selection shared by create and update
fn validate_version_choice(
    follow_latest_version: Option<bool>,
    version_pin: Option<&str>,
    required: bool,
) -> Result<(), ValidationError> {
    let follows = follow_latest_version == Some(true);
    let pinned = version_pin.is_some_and(valid_string);
    if follows && pinned {
        return Err(ValidationError::MutuallyExclusive {
            first: "follow-latest-version",
            second: "version-pin",
        });
    }
    if required && !follows && !pinned {
        return Err(ValidationError::RequiredOneOf {
            first: "follow-latest-version",
            second: "version-pin",
        });
    }
    Ok(())
}

fn variable_option_relationships(
    relationships: Relationships,
    variable_options: &[NoCodeVariableOption],
) -> Relationships {
    if variable_options.is_empty() {
        return relationships;
    }
    let resources = variable_options.iter().map(NoCodeVariableOption::to_resource).collect();
    relationships.to_many_resources("variable-options", resources)
}

/// Options for publishing a module for no-code provisioning.
///
/// The registry module is required and checked before anything else.
/// Exactly one of `follow_latest_version = Some(true)` or `version_pin`
/// must be given.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub struct NoCodeModuleCreateOptions {
    #[serde(skip)]
    pub registry_module_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub follow_latest_version: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub version_pin: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enabled: Option<bool>,
    #[serde(skip)]
    pub variable_options: Vec<NoCodeVariableOption>,
}

impl NoCodeModuleCreateOptions {
    pub fn new(registry_module_id: impl Into<String>) -> Self {
        Self {
            registry_module_id: Some(registry_module_id.into()),
            ..Self::default()
        }
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        let Some(registry_module_id) = &self.registry_module_id else {
            return Err(ValidationError::RequiredRelation("registry-module"));
        };
        require_id(registry_module_id, "registry module")?;
        validate_version_choice(self.follow_latest_version, self.version_pin.as_deref(), true)?;
        for option in &self.variable_options {
            option.validate()?;
        }
        Ok(())
    }

    pub(crate) fn relationships(&self) -> Relationships {
        let relationships = Relationships::new().to_one_opt(
            "registry-module",
            "registry-modules",
            self.registry_module_id.as_deref(),
        );
        variable_option_relationships(relationships, &self.variable_options)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub struct NoCodeModuleUpdateOptions {
    /// Point at a different registry module
    #[serde(skip)]
    pub registry_module_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub follow_latest_version: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub version_pin: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enabled: Option<bool>,
    #[serde(skip)]
    pub variable_options: Vec<NoCodeVariableOption>,
}

impl NoCodeModuleUpdateOptions {
    pub fn validate(&self) -> Result<(), ValidationError> {
        if let Some(registry_module_id) = &self.registry_module_id {
            require_id(registry_module_id, "registry module")?;
        }
        validate_version_choice(self.follow_latest_version, self.version_pin.as_deref(), false)?;
        for option in &self.variable_options {
            option.validate()?;
        }
        Ok(())
    }

    pub(crate) fn relationships(&self) -> Relationships {
        let relationships = Relationships::new().to_one_opt(
            "registry-module",
            "registry-modules",
            self.registry_module_id.as_deref(),
        );
        variable_option_relationships(relationships, &self.variable_options)
    }
}
