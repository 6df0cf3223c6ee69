pub mod catalog;
pub mod column;
pub mod entity;
pub mod error;

pub use catalog::{SchemaCatalog, SchemaDescription};
pub use column::{Column, ColumnType};
pub use entity::{Entity, Relationship, RelationshipKind};
pub use error::{CoreError, ErrorCategory, Result};
