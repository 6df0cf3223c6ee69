//! Input type categories.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::GraphQLError;

/// The derived input shapes generated per entity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    /// Filter predicates (`post_bool_exp`).
    Where,
    /// Ordering (`post_order_by`).
    OrderBy,
    /// Insert payload (`post_insert_input`).
    InsertInput,
    /// Numeric increment payload (`post_inc_input`).
    IncInput,
    /// Update payload (`post_set_input`).
    SetInput,
    /// Conflict resolution (`post_on_conflict`).
    OnConflict,
}

impl Category {
    pub const ALL: [Category; 6] = [
        Category::Where,
        Category::OrderBy,
        Category::InsertInput,
        Category::IncInput,
        Category::SetInput,
        Category::OnConflict,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Where => "where",
            Category::OrderBy => "order_by",
            Category::InsertInput => "insert_input",
            Category::IncInput => "inc_input",
            Category::SetInput => "set_input",
            Category::OnConflict => "on_conflict",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = GraphQLError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Category::ALL
            .into_iter()
            .find(|c| c.as_str() == s)
            .ok_or_else(|| GraphQLError::UnknownCategory(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_all() {
        for category in Category::ALL {
            assert_eq!(category.as_str().parse::<Category>().unwrap(), category);
        }
    }

    #[test]
    fn test_unknown_category_rejected() {
        let err = "delete".parse::<Category>().unwrap_err();
        assert!(matches!(err, GraphQLError::UnknownCategory(ref c) if c == "delete"));
    }

    #[test]
    fn test_serde_names_match_display() {
        let json = serde_json::to_string(&Category::InsertInput).unwrap();
        assert_eq!(json, "\"insert_input\"");
        let parsed: Category = serde_json::from_str("\"on_conflict\"").unwrap();
        assert_eq!(parsed, Category::OnConflict);
    }
}
