//! Per-category field synthesis.
//!
//! | category       | boolean ops        | column field         | relationship field   |
//! |----------------|--------------------|----------------------|----------------------|
//! | `where`        | `_and` `_or` `_not`| scalar comparison    | target `where`       |
//! | `order_by`     |                    | ordering enum        | target `order_by`    |
//! | `insert_input` |                    | scalar               |                      |
//! | `inc_input`    |                    | scalar, numeric only |                      |
//! | `set_input`    |                    | scalar               |                      |
//! | `on_conflict`  | `merge: Boolean!`  |                      |                      |

use relgql_core::Entity;
use tracing::trace;

use super::category::Category;
use super::generator::InputTypeGenerator;
use super::node::{FieldMap, InputField, InputTypeRef, NodeId};
use super::scalar::ScalarKind;
use crate::error::GraphQLError;

impl<'a> InputTypeGenerator<'a> {
    /// Computes the field map of `entity`'s `category` type.
    ///
    /// `self_id` is the already registered placeholder of that type; the
    /// boolean composition fields point at it directly.
    pub(super) fn synthesize_fields(
        &mut self,
        entity: &'a Entity,
        category: Category,
        self_id: NodeId,
    ) -> Result<FieldMap, GraphQLError> {
        let mut fields = FieldMap::new();

        match category {
            Category::Where => {
                fields.insert(
                    "_and".to_string(),
                    InputField::new(InputTypeRef::input(self_id).list()),
                );
                fields.insert(
                    "_or".to_string(),
                    InputField::new(InputTypeRef::input(self_id).list()),
                );
                fields.insert("_not".to_string(), InputField::new(InputTypeRef::input(self_id)));
            }
            Category::OnConflict => {
                fields.insert(
                    "merge".to_string(),
                    InputField::new(InputTypeRef::scalar(ScalarKind::Boolean).non_null()),
                );
            }
            Category::OrderBy | Category::InsertInput | Category::IncInput | Category::SetInput => {}
        }

        for column in &entity.columns {
            let scalar = ScalarKind::for_column(&entity.name, column)?;

            let type_ref = match category {
                Category::Where => Some(InputTypeRef::input(self.comparison(scalar)?)),
                Category::OrderBy => Some(InputTypeRef::order_by()),
                Category::InsertInput | Category::SetInput => Some(InputTypeRef::scalar(scalar)),
                Category::IncInput => column.is_numeric().then(|| InputTypeRef::scalar(scalar)),
                Category::OnConflict => None,
            };

            match type_ref {
                Some(type_ref) => {
                    fields.insert(column.name.clone(), InputField::new(type_ref));
                }
                None => {
                    trace!(entity = %entity.name, column = %column.name, %category, "Column skipped");
                }
            }
        }

        for relationship in &entity.relationships {
            let target_category = match category {
                Category::Where | Category::OrderBy => category,
                Category::InsertInput
                | Category::IncInput
                | Category::SetInput
                | Category::OnConflict => continue,
            };

            let target = self.build(&relationship.target, target_category)?;
            fields.insert(relationship.name.clone(), InputField::new(InputTypeRef::input(target)));
        }

        Ok(fields)
    }
}

#[cfg(test)]
mod tests {
    use crate::config::GeneratorConfig;
    use crate::schema::{Category, InputTypeGenerator, InputTypeRef, NamedType, ScalarKind};
    use relgql_core::{ColumnType, Entity, SchemaCatalog};

    fn catalog() -> SchemaCatalog {
        SchemaCatalog::from_entities([
            Entity::new("post")
                .column("id", ColumnType::Integer)
                .column("title", ColumnType::Text)
                .column("rating", ColumnType::Float)
                .relationship("author", "user"),
            Entity::new("user").column("id", ColumnType::BigInteger),
        ])
        .unwrap()
    }

    #[test]
    fn test_insert_and_set_use_plain_scalars() {
        let catalog = catalog();
        let mut generator = InputTypeGenerator::new(&catalog, GeneratorConfig::default());

        for category in [Category::InsertInput, Category::SetInput] {
            let id = generator.build("post", category).unwrap();
            let node = generator.node(id);
            let names: Vec<_> = node.fields().keys().map(String::as_str).collect();
            assert_eq!(names, vec!["id", "title", "rating"]);
            assert_eq!(
                node.field("rating").unwrap().type_ref,
                InputTypeRef::scalar(ScalarKind::Float)
            );
        }
    }

    #[test]
    fn test_inc_input_includes_float() {
        let catalog = catalog();
        let mut generator = InputTypeGenerator::new(&catalog, GeneratorConfig::default());
        let id = generator.build("post", Category::IncInput).unwrap();

        let names: Vec<_> = generator.node(id).fields().keys().cloned().collect();
        assert_eq!(names, vec!["id", "rating"]);
    }

    #[test]
    fn test_where_fields_order() {
        let catalog = catalog();
        let mut generator = InputTypeGenerator::new(&catalog, GeneratorConfig::default());
        let id = generator.build("post", Category::Where).unwrap();

        let node = generator.node(id);
        let names: Vec<_> = node.fields().keys().map(String::as_str).collect();
        assert_eq!(names, vec!["_and", "_or", "_not", "id", "title", "rating", "author"]);

        assert_eq!(node.field("_not").unwrap().type_ref.named(), NamedType::Input(id));
    }

    #[test]
    fn test_insert_skips_relationships() {
        let catalog = catalog();
        let mut generator = InputTypeGenerator::new(&catalog, GeneratorConfig::default());
        let id = generator.build("post", Category::InsertInput).unwrap();

        assert!(generator.node(id).field("author").is_none());
        // no other entity types were requested
        assert_eq!(generator.registry().len(), 1);
    }

    #[test]
    fn test_order_by_uses_enum() {
        let catalog = catalog();
        let mut generator = InputTypeGenerator::new(&catalog, GeneratorConfig::default());
        let id = generator.build("post", Category::OrderBy).unwrap();

        assert_eq!(
            generator.node(id).field("title").unwrap().type_ref,
            InputTypeRef::order_by()
        );
    }

    #[test]
    fn test_unmapped_column_aborts() {
        let catalog =
            SchemaCatalog::from_entities([Entity::new("event").column("payload", "jsonb")]).unwrap();
        let mut generator = InputTypeGenerator::new(&catalog, GeneratorConfig::default());

        let err = generator.build("event", Category::Where).unwrap_err();
        assert_eq!(err.error_code(), "UNMAPPED_COLUMN_TYPE");
    }
}
