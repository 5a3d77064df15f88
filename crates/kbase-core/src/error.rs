//! Error types for the KBase application.

use serde::Serialize;
use thiserror::Error;

/// Error shared by every KBase crate.
///
/// The answering path only ever produces [`KbaseError::ServiceUnavailable`];
/// the remaining variants come from configuration and file handling.
#[derive(Error, Debug, Clone, PartialEq, Serialize)]
pub enum KbaseError {
    /// The answering backend could not be reached. Displays the bare message
    /// so it can be shown to the user as-is.
    #[error("{0}")]
    ServiceUnavailable(String),

    /// A session, document or citation lookup missed
    #[error("{entity} '{id}' not found")]
    NotFound { entity: &'static str, id: String },

    #[error("IO error: {message}")]
    Io { message: String },

    /// Serialization/deserialization error
    #[error("Serialization error: {format} - {message}")]
    Serialization {
        format: &'static str, // "TOML", "JSON"
        message: String,
    },

    /// Invalid or unreadable configuration
    #[error("Configuration error: {0}")]
    Config(String),

    /// Internal error (should not happen in normal operation)
    #[error("Internal error: {0}")]
    Internal(String),
}

impl KbaseError {
    // ============================================================================
    // Constructor helpers
    // ============================================================================

    pub fn service_unavailable(message: impl Into<String>) -> Self {
        Self::ServiceUnavailable(message.into())
    }

    pub fn not_found(entity: &'static str, id: impl Into<String>) -> Self {
        Self::NotFound {
            entity,
            id: id.into(),
        }
    }

    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal(message.into())
    }

    fn serialization(format: &'static str, err: impl std::fmt::Display) -> Self {
        Self::Serialization {
            format,
            message: err.to_string(),
        }
    }

    // ============================================================================
    // Type checking methods
    // ============================================================================

    /// Whether the failure is transient and worth retrying.
    pub fn is_service_unavailable(&self) -> bool {
        matches!(self, Self::ServiceUnavailable(_))
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    pub fn is_config(&self) -> bool {
        matches!(self, Self::Config(_))
    }

    pub fn is_serialization(&self) -> bool {
        matches!(self, Self::Serialization { .. })
    }
}

// ============================================================================
// From implementations for automatic conversion
// ============================================================================

impl From<std::io::Error> for KbaseError {
    fn from(err: std::io::Error) -> Self {
        Self::Io {
            message: format!("{} (kind: {:?})", err, err.kind()),
        }
    }
}

impl From<serde_json::Error> for KbaseError {
    fn from(err: serde_json::Error) -> Self {
        Self::serialization("JSON", err)
    }
}

impl From<toml::de::Error> for KbaseError {
    fn from(err: toml::de::Error) -> Self {
        Self::serialization("TOML", err)
    }
}

impl From<toml::ser::Error> for KbaseError {
    fn from(err: toml::ser::Error) -> Self {
        Self::serialization("TOML", err)
    }
}

/// A type alias for `Result<T, KbaseError>`.
pub type Result<T> = std::result::Result<T, KbaseError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_service_unavailable_displays_bare_message() {
        let err = KbaseError::service_unavailable("Failed to connect");
        assert_eq!(err.to_string(), "Failed to connect");
        assert!(err.is_service_unavailable());
        assert!(!err.is_not_found());
    }

    #[test]
    fn test_not_found_names_entity() {
        let err = KbaseError::not_found("session", "session-123");
        assert_eq!(err.to_string(), "session 'session-123' not found");
        assert!(err.is_not_found());
    }

    #[test]
    fn test_toml_error_converts_to_serialization() {
        let parse_err = toml::from_str::<toml::Value>("not = [valid").unwrap_err();
        let err: KbaseError = parse_err.into();
        assert!(err.is_serialization());
        assert!(err.to_string().starts_with("Serialization error: TOML"));
    }

    #[test]
    fn test_io_error_keeps_kind() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "missing");
        let err: KbaseError = io.into();
        assert_eq!(err.to_string(), "IO error: missing (kind: NotFound)");
    }
}
