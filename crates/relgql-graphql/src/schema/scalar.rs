//! Column type to GraphQL scalar mapping.

use std::fmt;

use async_graphql::dynamic::TypeRef;
use relgql_core::{Column, ColumnType};
use serde::{Deserialize, Serialize};

use crate::error::GraphQLError;

/// Built-in GraphQL scalars that columns map onto.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ScalarKind {
    Int,
    Float,
    Boolean,
    String,
}

impl ScalarKind {
    /// The scalar's GraphQL type name.
    pub fn graphql_name(&self) -> &'static str {
        match self {
            ScalarKind::Int => TypeRef::INT,
            ScalarKind::Float => TypeRef::FLOAT,
            ScalarKind::Boolean => TypeRef::BOOLEAN,
            ScalarKind::String => TypeRef::STRING,
        }
    }

    /// Only textual scalars get pattern matching operators.
    pub fn is_textual(&self) -> bool {
        matches!(self, ScalarKind::String)
    }

    /// Maps a native column type to its scalar.
    ///
    /// Date, time and UUID columns travel as strings. Types without a mapping
    /// (`ColumnType::Other`) are rejected.
    pub fn from_column_type(column_type: &ColumnType) -> Option<Self> {
        match column_type {
            ColumnType::SmallInteger | ColumnType::Integer | ColumnType::BigInteger => {
                Some(ScalarKind::Int)
            }
            ColumnType::Float | ColumnType::Numeric => Some(ScalarKind::Float),
            ColumnType::Boolean => Some(ScalarKind::Boolean),
            ColumnType::String
            | ColumnType::Text
            | ColumnType::Date
            | ColumnType::DateTime
            | ColumnType::Time
            | ColumnType::Uuid => Some(ScalarKind::String),
            ColumnType::Other(_) => None,
        }
    }

    /// Maps a column of `entity`, failing with [`GraphQLError::UnmappedColumnType`].
    pub fn for_column(entity: &str, column: &Column) -> Result<Self, GraphQLError> {
        Self::from_column_type(&column.column_type).ok_or_else(|| {
            GraphQLError::UnmappedColumnType {
                entity: entity.to_string(),
                column: column.name.clone(),
                column_type: column.column_type.to_string(),
            }
        })
    }
}

impl fmt::Display for ScalarKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.graphql_name())
    }
}
