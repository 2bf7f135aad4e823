//! # Error Module
//!
//! Error taxonomy for the dispatch layer.
//!
//! Every variant of [`DispatchError`] is caught at the dispatcher boundary and
//! turned into a uniform `{"errorMessage": ...}` body with a server-error
//! status. The `Display` text of each variant is exactly what the caller sees.
//!
//! Handlers report failures through the narrower [`ActionError`], which the
//! lifecycle runner converts into a [`DispatchError`].

use std::fmt;

/// Malformed or incomplete route declarations.
///
/// Raised while loading or compiling the route table. Fatal for the registry
/// build: no route table is cached when this is returned.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigurationError {
    /// The route declaration file could not be read
    Io {
        /// Path of the file
        path: String,
        /// Underlying I/O error text
        message: String,
    },
    /// The route declaration file is not valid YAML/JSON/TOML
    Parse {
        /// Path of the file (or `<inline>` for in-memory sources)
        path: String,
        /// Parser error text
        message: String,
    },
    /// A route entry is missing one of its required fields
    MissingField {
        /// Zero-based position of the entry in the declaration
        index: usize,
        /// Name of the missing field (`path`, `method` or `handler`)
        field: &'static str,
    },
    /// A route entry names a verb outside GET/POST/PUT/DELETE
    UnsupportedMethod {
        /// Zero-based position of the entry in the declaration
        index: usize,
        /// The verb as written in the declaration
        method: String,
    },
    /// A path pattern could not be compiled into a matcher
    InvalidPattern {
        /// Zero-based position of the entry in the declaration
        index: usize,
        /// The pattern as written
        pattern: String,
        /// Regex engine error text
        message: String,
    },
}

impl fmt::Display for ConfigurationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigurationError::Io { path, message } => {
                write!(f, "Unable to read route configuration '{path}': {message}")
            }
            ConfigurationError::Parse { path, message } => {
                write!(
                    f,
                    "Error occurred when parsing configuration file '{path}': {message}"
                )
            }
            ConfigurationError::MissingField { index, field } => {
                write!(
                    f,
                    "Route entry #{index} is missing required value: '{field}'"
                )
            }
            ConfigurationError::UnsupportedMethod { index, method } => {
                write!(
                    f,
                    "Route entry #{index} has unsupported method '{method}' \
                    (expected one of GET, POST, PUT, DELETE)"
                )
            }
            ConfigurationError::InvalidPattern {
                index,
                pattern,
                message,
            } => {
                write!(
                    f,
                    "Route entry #{index} has an invalid path pattern '{pattern}': {message}"
                )
            }
        }
    }
}

impl std::error::Error for ConfigurationError {}

/// Failure reported by a handler from `validate` or `execute`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ActionError {
    /// A handler-specific precondition did not hold
    Validation(String),
    /// Any other business failure
    Application(String),
}

impl ActionError {
    /// Shorthand for [`ActionError::Validation`]
    pub fn validation(message: impl Into<String>) -> Self {
        ActionError::Validation(message.into())
    }

    /// Shorthand for [`ActionError::Application`]
    pub fn application(message: impl Into<String>) -> Self {
        ActionError::Application(message.into())
    }

    /// The human-readable message carried by this error
    #[must_use]
    pub fn message(&self) -> &str {
        match self {
            ActionError::Validation(m) | ActionError::Application(m) => m,
        }
    }
}

impl fmt::Display for ActionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

impl std::error::Error for ActionError {}

impl From<serde_json::Error> for ActionError {
    fn from(err: serde_json::Error) -> Self {
        ActionError::Application(err.to_string())
    }
}

/// Every way a single dispatch can fail.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DispatchError {
    /// The route table could not be built
    Configuration(ConfigurationError),
    /// No registered route matches method+path
    ActionNotFound {
        /// Path relative to the base path
        path: String,
        /// Request method
        method: String,
    },
    /// The request path is not under the application's base path
    InvalidRequest {
        /// Full request path
        path: String,
        /// Expected base path
        base_path: String,
    },
    /// Handler validation failed
    Validation(String),
    /// Catch-all: unknown handler id, construction failure, execute failure,
    /// handler panic
    Application(String),
}

impl DispatchError {
    /// Short machine-oriented name of the error kind, used in log records
    #[must_use]
    pub fn kind(&self) -> &'static str {
        match self {
            DispatchError::Configuration(_) => "configuration",
            DispatchError::ActionNotFound { .. } => "action_not_found",
            DispatchError::InvalidRequest { .. } => "invalid_request",
            DispatchError::Validation(_) => "validation",
            DispatchError::Application(_) => "application",
        }
    }
}

impl fmt::Display for DispatchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DispatchError::Configuration(err) => write!(f, "{err}"),
            DispatchError::ActionNotFound { path, method } => {
                write!(
                    f,
                    "No action found for the path '{path}' and method '{method}'"
                )
            }
            DispatchError::InvalidRequest { path, .. } => {
                write!(f, "URL is invalid. URL: '{path}'")
            }
            DispatchError::Validation(message) | DispatchError::Application(message) => {
                f.write_str(message)
            }
        }
    }
}

impl std::error::Error for DispatchError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            DispatchError::Configuration(err) => Some(err),
            _ => None,
        }
    }
}

impl From<ConfigurationError> for DispatchError {
    fn from(err: ConfigurationError) -> Self {
        DispatchError::Configuration(err)
    }
}

impl From<ActionError> for DispatchError {
    fn from(err: ActionError) -> Self {
        match err {
            ActionError::Validation(m) => DispatchError::Validation(m),
            ActionError::Application(m) => DispatchError::Application(m),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_message_names_path_and_method() {
        let err = DispatchError::ActionNotFound {
            path: "/view/planet/x".to_string(),
            method: "GET".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "No action found for the path '/view/planet/x' and method 'GET'"
        );
        assert_eq!(err.kind(), "action_not_found");
    }

    #[test]
    fn test_action_error_keeps_kind_through_conversion() {
        let err: DispatchError = ActionError::validation("id must be positive").into();
        assert_eq!(err, DispatchError::Validation("id must be positive".into()));
        assert_eq!(err.to_string(), "id must be positive");
    }

    #[test]
    fn test_missing_field_message() {
        let err = ConfigurationError::MissingField {
            index: 2,
            field: "method",
        };
        assert_eq!(
            err.to_string(),
            "Route entry #2 is missing required value: 'method'"
        );
    }
}
