//! Entity catalog.
//!
//! The catalog is the introspection side of input type generation: it owns
//! every entity descriptor and resolves relationship targets by name.
//! Descriptions can be built in code or loaded from TOML/JSON files:
//!
//! ```toml
//! [[entities]]
//! name = "post"
//! columns = [
//!     { name = "id", type = "integer" },
//!     { name = "title", type = "varchar(255)" },
//! ]
//! relationships = [{ name = "author", target = "user" }]
//! ```

use std::collections::HashSet;
use std::path::Path;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::entity::Entity;
use crate::error::{CoreError, Result};

/// On-disk shape of a schema description.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SchemaDescription {
    #[serde(default)]
    pub entities: Vec<Entity>,
}

/// Entities keyed by name, in declaration order.
#[derive(Debug, Clone, Default)]
pub struct SchemaCatalog {
    entities: IndexMap<String, Entity>,
}

impl SchemaCatalog {
    /// Builds a catalog, rejecting duplicate entity names and relationships
    /// whose target is not part of the catalog.
    ///
    /// Columns and relationships of one entity share a namespace, since both
    /// become fields of the same input types.
    pub fn from_entities(entities: impl IntoIterator<Item = Entity>) -> Result<Self> {
        let mut map = IndexMap::new();
        for entity in entities {
            check_field_names(&entity)?;
            if map.contains_key(&entity.name) {
                return Err(CoreError::duplicate_entity(entity.name));
            }
            map.insert(entity.name.clone(), entity);
        }

        for entity in map.values() {
            for rel in &entity.relationships {
                if !map.contains_key(&rel.target) {
                    return Err(CoreError::unknown_relationship_target(
                        &entity.name,
                        &rel.name,
                        &rel.target,
                    ));
                }
            }
        }

        debug!(count = map.len(), "Schema catalog built");
        Ok(Self { entities: map })
    }

    pub fn from_description(description: SchemaDescription) -> Result<Self> {
        Self::from_entities(description.entities)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let description: SchemaDescription = toml::from_str(content)?;
        Self::from_description(description)
    }

    pub fn from_json_str(content: &str) -> Result<Self> {
        let description: SchemaDescription = serde_json::from_str(content)?;
        Self::from_description(description)
    }

    /// Loads a description file; `.json` files are parsed as JSON, anything
    /// else as TOML.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)?;
        debug!(path = %path.display(), "Loading schema description");

        match path.extension().and_then(|e| e.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("json") => Self::from_json_str(&content),
            _ => Self::from_toml_str(&content),
        }
    }

    pub fn entity(&self, name: &str) -> Option<&Entity> {
        self.entities.get(name)
    }

    pub fn entities(&self) -> impl Iterator<Item = &Entity> {
        self.entities.values()
    }

    pub fn len(&self) -> usize {
        self.entities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }

    pub fn to_description(&self) -> SchemaDescription {
        SchemaDescription {
            entities: self.entities.values().cloned().collect(),
        }
    }
}

fn check_field_names(entity: &Entity) -> Result<()> {
    if entity.name.is_empty() {
        return Err(CoreError::invalid_description("entity name must not be empty"));
    }

    let names = entity
        .columns
        .iter()
        .map(|c| c.name.as_str())
        .chain(entity.relationships.iter().map(|r| r.name.as_str()));

    let mut seen = HashSet::new();
    for name in names {
        if name.is_empty() {
            return Err(CoreError::invalid_description(format!(
                "entity {} has a column or relationship without a name",
                entity.name
            )));
        }
        if !seen.insert(name) {
            return Err(CoreError::invalid_description(format!(
                "entity {} declares field {} more than once",
                entity.name, name
            )));
        }
    }

    Ok(())
}
