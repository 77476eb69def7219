//! Error taxonomy shared by every TJD-Toolkit crate.
//!
//! One enum covers configuration, file, validation and platform failures.
//! Callers that only care about the family use the `is_*` classifiers.

use std::io;
use std::path::PathBuf;

use tjd_types::Platform;

pub type Result<T, E = ToolkitError> = std::result::Result<T, E>;

#[derive(Debug, thiserror::Error)]
pub enum ToolkitError {
    #[error("{message}")]
    Configuration { message: String },

    /// Invalid JSON on disk or a value that cannot be serialized.
    #[error("{message}")]
    JsonParsing {
        message: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("{operation} failed: {message}")]
    FileOperation {
        operation: &'static str,
        message: String,
        path: Option<PathBuf>,
        #[source]
        source: io::Error,
    },

    #[error("{message}")]
    Validation {
        message: String,
        field: Option<&'static str>,
        value: Option<String>,
    },

    #[error("{message}")]
    Platform {
        message: String,
        platform: Platform,
        operation: &'static str,
        #[source]
        source: Option<io::Error>,
    },
}

impl ToolkitError {
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }

    pub fn validation(
        message: impl Into<String>,
        field: &'static str,
        value: impl Into<String>,
    ) -> Self {
        Self::Validation {
            message: message.into(),
            field: Some(field),
            value: Some(value.into()),
        }
    }

    pub fn file_operation(
        operation: &'static str,
        message: impl Into<String>,
        path: impl Into<PathBuf>,
        source: io::Error,
    ) -> Self {
        Self::FileOperation {
            operation,
            message: message.into(),
            path: Some(path.into()),
            source,
        }
    }

    pub fn platform(
        message: impl Into<String>,
        operation: &'static str,
        source: Option<io::Error>,
    ) -> Self {
        Self::Platform {
            message: message.into(),
            platform: Platform::current(),
            operation,
            source,
        }
    }

    /// True for configuration failures, including JSON parse/serialize errors.
    #[must_use]
    pub fn is_configuration(&self) -> bool {
        matches!(self, Self::Configuration { .. } | Self::JsonParsing { .. })
    }

    #[must_use]
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation { .. })
    }

    /// The operation name for file and platform failures.
    #[must_use]
    pub fn operation(&self) -> Option<&'static str> {
        match self {
            Self::FileOperation { operation, .. } | Self::Platform { operation, .. } => {
                Some(*operation)
            }
            _ => None,
        }
    }

    #[must_use]
    pub fn path(&self) -> Option<&PathBuf> {
        match self {
            Self::FileOperation { path, .. } => path.as_ref(),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use std::error::Error as _;
    use std::io;

    use super::ToolkitError;

    #[test]
    fn file_operation_display_names_the_operation() {
        let err = ToolkitError::file_operation(
            "save",
            "Cannot write configuration file",
            "/tmp/config.json",
            io::Error::new(io::ErrorKind::PermissionDenied, "denied"),
        );
        assert_eq!(err.to_string(), "save failed: Cannot write configuration file");
        assert_eq!(err.operation(), Some("save"));
        assert_eq!(
            err.path().map(|p| p.display().to_string()).as_deref(),
            Some("/tmp/config.json")
        );
        assert!(err.source().is_some());
    }

    #[test]
    fn json_errors_are_configuration_errors() {
        let source = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err = ToolkitError::JsonParsing {
            message: "Invalid JSON syntax in configuration file".to_string(),
            source,
        };
        assert!(err.is_configuration());
        assert!(ToolkitError::configuration("bad").is_configuration());
        assert!(!ToolkitError::validation("bad key", "key", "").is_configuration());
    }

    #[test]
    fn validation_carries_field_and_value() {
        let err = ToolkitError::validation("Configuration key cannot be empty", "key", "<empty>");
        assert!(err.is_validation());
        match err {
            ToolkitError::Validation { field, value, .. } => {
                assert_eq!(field, Some("key"));
                assert_eq!(value.as_deref(), Some("<empty>"));
            }
            other => panic!("unexpected variant: {other:?}"),
        }
    }

    #[test]
    fn platform_error_records_current_platform() {
        let err = ToolkitError::platform("Failed to elevate privileges", "privilege_elevation", None);
        assert_eq!(err.operation(), Some("privilege_elevation"));
        match err {
            ToolkitError::Platform { platform, .. } => {
                assert_eq!(platform, tjd_types::Platform::current());
            }
            other => panic!("unexpected variant: {other:?}"),
        }
    }
}
