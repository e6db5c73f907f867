//! Shared enumerations and helpers for resource models

/// Declare a closed set of wire strings as an enum.
///
/// Generates serde renames, `as_str`, `Display`, and a `FromStr` that
/// rejects unknown strings with `ValidationError::InvalidEnumValue`.
macro_rules! wire_enum {
    (
        $(#[$meta:meta])*
        $name:ident ($field:literal) {
            $($(#[$vmeta:meta])* $variant:ident => $wire:literal),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
        pub enum $name {
            $($(#[$vmeta])* #[serde(rename = $wire)] $variant),+
        }

        impl $name {
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            pub fn as_str(&self) -> &'static str {
                match self {
                    $($name::$variant => $wire),+
                }
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl std::str::FromStr for $name {
            type Err = $crate::error::ValidationError;

            fn from_str(value: &str) -> Result<Self, Self::Err> {
                match value {
                    $($wire => Ok($name::$variant),)+
                    other => Err($crate::error::ValidationError::InvalidEnumValue {
                        field: $field,
                        value: other.to_string(),
                    }),
                }
            }
        }
    };
}

pub(crate) use wire_enum;

wire_enum! {
    /// Where runs of a workspace execute
    ExecutionMode("execution-mode") {
        Remote => "remote",
        Local => "local",
        Agent => "agent",
    }
}

wire_enum! {
    /// Organization-wide authentication requirement
    AuthPolicy("collaborator-auth-policy") {
        Password => "password",
        TwoFactorMandatory => "two_factor_mandatory",
    }
}

/// Comma-joined `include` query parameter, `None` when nothing is requested.
pub(crate) fn include_param<T: std::fmt::Display>(include: &[T]) -> Option<(String, String)> {
    if include.is_empty() {
        return None;
    }
    let joined = include
        .iter()
        .map(|i| i.to_string())
        .collect::<Vec<_>>()
        .join(",");
    Some(("include".to_string(), joined))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{ValidationError, ValidationErrorKind};

    #[test]
    fn test_execution_mode_round_trip() {
        for mode in ExecutionMode::ALL {
            assert_eq!(mode.as_str().parse::<ExecutionMode>().unwrap(), *mode);
        }
        assert_eq!(
            serde_json::to_value(ExecutionMode::Agent).unwrap(),
            serde_json::json!("agent")
        );
    }

    #[test]
    fn test_unknown_value_is_invalid_enum() {
        let err = "cloud".parse::<ExecutionMode>().unwrap_err();
        assert_eq!(
            err,
            ValidationError::InvalidEnumValue {
                field: "execution-mode",
                value: "cloud".to_string()
            }
        );
        assert_eq!(err.kind(), ValidationErrorKind::InvalidEnumValue);
    }

    #[test]
    fn test_auth_policy_wire_value() {
        assert_eq!(AuthPolicy::TwoFactorMandatory.to_string(), "two_factor_mandatory");
    }

    #[test]
    fn test_include_param() {
        assert_eq!(include_param::<ExecutionMode>(&[]), None);
        assert_eq!(
            include_param(&[ExecutionMode::Remote, ExecutionMode::Agent]),
            Some(("include".to_string(), "remote,agent".to_string()))
        );
    }
}
