//! Error types for the TFE client

use std::time::Duration;
use thiserror::Error;

/// Result type alias for client operations
pub type Result<T> = std::result::Result<T, Error>;

/// Top-level error type returned by every client operation
#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Api(#[from] ApiError),

    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Decode(#[from] DecodeError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl Error {
    /// True when the remote service reported the resource as absent.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Error::Api(ApiError::NotFound(_)))
    }

    /// The validation failure, if the operation was rejected before sending.
    pub fn as_validation(&self) -> Option<&ValidationError> {
        match self {
            Error::Validation(err) => Some(err),
            _ => None,
        }
    }
}

/// Errors reported by the remote service or the HTTP layer
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Unauthorized. Check that the API token is valid.")]
    Unauthorized,

    #[error("Access denied. The token does not have permission for this resource.")]
    Forbidden,

    #[error("Resource not found: {0}")]
    NotFound(String),

    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("Rate limit exceeded. Retry after {0:?}")]
    RateLimit(Duration),

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Unprocessable entity: {0}")]
    Unprocessable(String),

    #[error("Server error: {0}")]
    ServerError(String),

    #[error("Network error: {0}")]
    Network(String),

    #[error("Request timed out")]
    Timeout,

    #[error("Invalid API response: {0}")]
    InvalidResponse(String),
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            ApiError::Timeout
        } else if err.is_connect() {
            ApiError::Network("Failed to connect to API".to_string())
        } else {
            ApiError::Network(err.to_string())
        }
    }
}

/// Broad classification of a [`ValidationError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationErrorKind {
    RequiredField,
    RequiredRelation,
    MutuallyExclusive,
    InvalidValue,
    InvalidEnumValue,
    MinCount,
}

/// Pre-flight rejection of operation inputs. Never involves network I/O.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("{0} is required")]
    RequiredField(&'static str),

    #[error("one of {first} or {second} is required")]
    RequiredOneOf {
        first: &'static str,
        second: &'static str,
    },

    #[error("{field} requires {requires}")]
    DependsOn {
        field: &'static str,
        requires: &'static str,
    },

    #[error("{0} relation is required")]
    RequiredRelation(&'static str),

    #[error("{first} and {second} cannot both be set")]
    MutuallyExclusive {
        first: &'static str,
        second: &'static str,
    },

    #[error("invalid value for {0}")]
    InvalidValue(&'static str),

    #[error("invalid value for {0} ID")]
    InvalidId(&'static str),

    #[error("invalid value {value:?} for {field}")]
    InvalidEnumValue { field: &'static str, value: String },

    #[error("{field} must contain at least {min} item(s)")]
    MinCount { field: &'static str, min: usize },
}

impl ValidationError {
    pub fn kind(&self) -> ValidationErrorKind {
        match self {
            ValidationError::RequiredField(_)
            | ValidationError::RequiredOneOf { .. }
            | ValidationError::DependsOn { .. } => ValidationErrorKind::RequiredField,
            ValidationError::RequiredRelation(_) => ValidationErrorKind::RequiredRelation,
            ValidationError::MutuallyExclusive { .. } => ValidationErrorKind::MutuallyExclusive,
            ValidationError::InvalidValue(_) | ValidationError::InvalidId(_) => {
                ValidationErrorKind::InvalidValue
            }
            ValidationError::InvalidEnumValue { .. } => ValidationErrorKind::InvalidEnumValue,
            ValidationError::MinCount { .. } => ValidationErrorKind::MinCount,
        }
    }
}

/// Failures turning a JSON:API document into typed resources
#[derive(Debug, Error)]
pub enum DecodeError {
    #[error("unknown variant {discriminator:?} for relationship {relation}")]
    UnknownVariant {
        relation: &'static str,
        discriminator: String,
    },

    #[error("expected resource of type {expected}, found {found}")]
    UnexpectedType {
        expected: &'static str,
        found: String,
    },

    #[error("document has no primary data")]
    MissingData,

    #[error("failed to decode {resource} attributes: {source}")]
    Attributes {
        resource: &'static str,
        #[source]
        source: serde_json::Error,
    },
}

/// Configuration-related errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration file not found")]
    NotFound,

    #[error("Failed to parse configuration: {0}")]
    ParseError(String),

    #[error("Invalid configuration: {0}")]
    Invalid(String),

    #[error("API token not configured. Set TFE_TOKEN or add `token` to the config file.")]
    MissingToken,

    #[error("Invalid address: {0}")]
    InvalidAddress(String),
}

impl From<serde_yaml::Error> for ConfigError {
    fn from(err: serde_yaml::Error) -> Self {
        ConfigError::ParseError(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_error_not_found() {
        let err = ApiError::NotFound("workspaces/ws-123".to_string());
        assert!(err.to_string().contains("ws-123"));
    }

    #[test]
    fn test_api_error_rate_limit() {
        let err = ApiError::RateLimit(Duration::from_secs(30));
        let msg = err.to_string();
        assert!(msg.contains("Rate limit"));
        assert!(msg.contains("30"));
    }

    #[test]
    fn test_api_error_unprocessable() {
        let err = ApiError::Unprocessable("Name has already been taken".to_string());
        assert!(err.to_string().contains("already been taken"));
    }

    #[test]
    fn test_is_not_found() {
        let err: Error = ApiError::NotFound("x".to_string()).into();
        assert!(err.is_not_found());

        let err: Error = ApiError::Forbidden.into();
        assert!(!err.is_not_found());
    }

    #[test]
    fn test_validation_error_kinds() {
        assert_eq!(
            ValidationError::RequiredField("name").kind(),
            ValidationErrorKind::RequiredField
        );
        assert_eq!(
            ValidationError::RequiredOneOf {
                first: "follow-latest-version",
                second: "version-pin"
            }
            .kind(),
            ValidationErrorKind::RequiredField
        );
        assert_eq!(
            ValidationError::RequiredRelation("registry-module").kind(),
            ValidationErrorKind::RequiredRelation
        );
        assert_eq!(
            ValidationError::MinCount {
                field: "projects",
                min: 1
            }
            .kind(),
            ValidationErrorKind::MinCount
        );
        assert_eq!(
            ValidationError::InvalidId("workspace").kind(),
            ValidationErrorKind::InvalidValue
        );
    }

    #[test]
    fn test_validation_error_messages() {
        let err = ValidationError::MutuallyExclusive {
            first: "trigger-prefixes",
            second: "trigger-patterns",
        };
        assert_eq!(
            err.to_string(),
            "trigger-prefixes and trigger-patterns cannot both be set"
        );

        let err = ValidationError::InvalidEnumValue {
            field: "include",
            value: "bogus".to_string(),
        };
        assert!(err.to_string().contains("bogus"));
    }

    #[test]
    fn test_error_from_validation_error() {
        let err: Error = ValidationError::RequiredField("name").into();
        assert_eq!(
            err.as_validation(),
            Some(&ValidationError::RequiredField("name"))
        );
    }

    #[test]
    fn test_decode_error_unknown_variant() {
        let err = DecodeError::UnknownVariant {
            relation: "data-retention-policy",
            discriminator: "data-retention-policy-archives".to_string(),
        };
        assert!(err.to_string().contains("data-retention-policy-archives"));
    }

    #[test]
    fn test_config_error_missing_token() {
        let err = ConfigError::MissingToken;
        assert!(err.to_string().contains("TFE_TOKEN"));
    }

    #[test]
    fn test_config_error_from_yaml_error() {
        let yaml_err = serde_yaml::from_str::<serde_yaml::Value>("invalid: [yaml: content")
            .unwrap_err();
        let config_err: ConfigError = yaml_err.into();

        match config_err {
            ConfigError::ParseError(_) => (),
            _ => panic!("Expected ConfigError::ParseError"),
        }
    }
}
