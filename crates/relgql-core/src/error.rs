use thiserror::Error;

/// Core error types for schema description handling
#[derive(Debug, Error)]
pub enum CoreError {
    #[error("Duplicate entity: {0}")]
    DuplicateEntity(String),

    #[error("Relationship {entity}.{relationship} targets unknown entity {target}")]
    UnknownRelationshipTarget {
        entity: String,
        relationship: String,
        target: String,
    },

    #[error("Invalid schema description: {message}")]
    InvalidDescription { message: String },

    #[error("JSON serialization error: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error("TOML parsing error: {0}")]
    TomlError(#[from] toml::de::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl CoreError {
    /// Create a new DuplicateEntity error
    pub fn duplicate_entity(name: impl Into<String>) -> Self {
        Self::DuplicateEntity(name.into())
    }

    /// Create a new UnknownRelationshipTarget error
    pub fn unknown_relationship_target(
        entity: impl Into<String>,
        relationship: impl Into<String>,
        target: impl Into<String>,
    ) -> Self {
        Self::UnknownRelationshipTarget {
            entity: entity.into(),
            relationship: relationship.into(),
            target: target.into(),
        }
    }

    /// Create a new InvalidDescription error
    pub fn invalid_description(message: impl Into<String>) -> Self {
        Self::InvalidDescription {
            message: message.into(),
        }
    }

    /// Get error category for logging
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::DuplicateEntity(_)
            | Self::UnknownRelationshipTarget { .. }
            | Self::InvalidDescription { .. } => ErrorCategory::Validation,
            Self::JsonError(_) | Self::TomlError(_) => ErrorCategory::Serialization,
            Self::Io(_) => ErrorCategory::System,
        }
    }
}

/// Error categories for classification
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    Serialization,
    System,
}

impl std::fmt::Display for ErrorCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Validation => write!(f, "validation"),
            Self::Serialization => write!(f, "serialization"),
            Self::System => write!(f, "system"),
        }
    }
}

/// Convenience result type for core operations
pub type Result<T> = std::result::Result<T, CoreError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_target_message() {
        let err = CoreError::unknown_relationship_target("post", "author", "person");
        assert_eq!(
            err.to_string(),
            "Relationship post.author targets unknown entity person"
        );
        assert_eq!(err.category(), ErrorCategory::Validation);
    }

    #[test]
    fn test_json_error_conversion() {
        let json_err: serde_json::Error =
            serde_json::from_str::<serde_json::Value>("{ invalid json }").unwrap_err();
        let core_err: CoreError = json_err.into();

        assert!(matches!(core_err, CoreError::JsonError(_)));
        assert_eq!(core_err.category(), ErrorCategory::Serialization);
    }

    #[test]
    fn test_toml_error_conversion() {
        let toml_err = toml::from_str::<toml::Value>("entities = [").unwrap_err();
        let core_err: CoreError = toml_err.into();

        assert!(matches!(core_err, CoreError::TomlError(_)));
        assert_eq!(core_err.category(), ErrorCategory::Serialization);
    }

    #[test]
    fn test_error_categories_display() {
        assert_eq!(ErrorCategory::Validation.to_string(), "validation");
        assert_eq!(ErrorCategory::Serialization.to_string(), "serialization");
        assert_eq!(ErrorCategory::System.to_string(), "system");
    }
}
