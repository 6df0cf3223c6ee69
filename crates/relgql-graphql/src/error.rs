//! Error types for input type generation.
//!
//! Every error aborts the generation pass; nothing here is retryable.

use std::fmt;

use crate::schema::TypeOrigin;

/// Errors that can occur while generating the input type graph.
#[derive(Debug)]
pub enum GraphQLError {
    /// A column's native type has no scalar mapping.
    UnmappedColumnType {
        /// Entity owning the column.
        entity: String,
        /// Column name.
        column: String,
        /// Native type as written in the description.
        column_type: String,
    },

    /// Category string outside the closed set.
    UnknownCategory(String),

    /// Two different subjects were given the same type name.
    NamingCollision {
        /// The shared type name.
        name: String,
        /// Origin of the node already registered under `name`.
        existing: String,
        /// Origin of the request that collided with it.
        requested: String,
    },

    /// Entity is not part of the catalog.
    UnknownEntity(String),

    /// Generator configuration rejected by validation.
    InvalidConfig(String),

    /// async-graphql rejected the exported types.
    SchemaExport(String),

    /// The pass already failed; holds the message of the first error.
    PassAborted(String),
}

impl fmt::Display for GraphQLError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnmappedColumnType {
                entity,
                column,
                column_type,
            } => {
                write!(
                    f,
                    "Column {entity}.{column} has type '{column_type}' with no GraphQL scalar mapping"
                )
            }
            Self::UnknownCategory(category) => {
                write!(f, "Unknown input type category: {category}")
            }
            Self::NamingCollision {
                name,
                existing,
                requested,
            } => {
                write!(
                    f,
                    "Type name '{name}' is already used by {existing}, cannot reuse it for {requested}"
                )
            }
            Self::UnknownEntity(name) => {
                write!(f, "Entity '{name}' not found in schema catalog")
            }
            Self::InvalidConfig(msg) => {
                write!(f, "Invalid generator configuration: {msg}")
            }
            Self::SchemaExport(msg) => {
                write!(f, "Failed to export GraphQL schema: {msg}")
            }
            Self::PassAborted(cause) => {
                write!(f, "Generation pass aborted by an earlier error: {cause}")
            }
        }
    }
}

impl std::error::Error for GraphQLError {}

impl GraphQLError {
    pub(crate) fn naming_collision(name: &str, existing: &TypeOrigin, requested: &TypeOrigin) -> Self {
        Self::NamingCollision {
            name: name.to_string(),
            existing: existing.to_string(),
            requested: requested.to_string(),
        }
    }

    /// Returns a stable code for logs and machine-readable output.
    #[must_use]
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::UnmappedColumnType { .. } => "UNMAPPED_COLUMN_TYPE",
            Self::UnknownCategory(_) => "UNKNOWN_CATEGORY",
            Self::NamingCollision { .. } => "NAMING_COLLISION",
            Self::UnknownEntity(_) => "UNKNOWN_ENTITY",
            Self::InvalidConfig(_) => "INVALID_CONFIG",
            Self::SchemaExport(_) => "SCHEMA_EXPORT_FAILED",
            Self::PassAborted(_) => "PASS_ABORTED",
        }
    }
}
