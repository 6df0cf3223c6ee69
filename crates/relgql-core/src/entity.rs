use crate::column::{Column, ColumnType};
use serde::{Deserialize, Serialize};

/// Cardinality of a relationship. Carried for consumers; type wiring only
/// looks at the target entity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum RelationshipKind {
    #[default]
    ManyToOne,
    OneToMany,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Relationship {
    pub name: String,
    /// Name of the target entity in the same catalog.
    pub target: String,
    #[serde(default)]
    pub kind: RelationshipKind,
}

impl Relationship {
    pub fn new(name: impl Into<String>, target: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            target: target.into(),
            kind: RelationshipKind::default(),
        }
    }

    pub fn with_kind(mut self, kind: RelationshipKind) -> Self {
        self.kind = kind;
        self
    }
}

/// A table: ordered columns plus relationships to other entities.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entity {
    pub name: String,
    #[serde(default)]
    pub columns: Vec<Column>,
    #[serde(default)]
    pub relationships: Vec<Relationship>,
}

impl Entity {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            columns: Vec::new(),
            relationships: Vec::new(),
        }
    }

    pub fn column(mut self, name: impl Into<String>, column_type: impl Into<ColumnType>) -> Self {
        self.columns.push(Column::new(name, column_type));
        self
    }

    pub fn relationship(mut self, name: impl Into<String>, target: impl Into<String>) -> Self {
        self.relationships.push(Relationship::new(name, target));
        self
    }

    pub fn with_relationship(mut self, relationship: Relationship) -> Self {
        self.relationships.push(relationship);
        self
    }

    pub fn numeric_columns(&self) -> impl Iterator<Item = &Column> {
        self.columns.iter().filter(|c| c.is_numeric())
    }
}
