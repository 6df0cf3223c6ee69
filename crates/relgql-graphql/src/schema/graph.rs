//! The finished input type graph.
//!
//! An `InputTypeGraph` is what a generation pass hands to its consumer. It is
//! immutable; lookups return the same node for the same name every time.
//! The graph can be rendered as SDL, summarised as JSON, or registered into an
//! async-graphql dynamic schema.

use std::collections::HashMap;
use std::fmt::Write as _;

use async_graphql::dynamic::{
    Enum, EnumItem, InputObject, InputValue, Object, Schema, SchemaBuilder, TypeRef,
};
use serde_json::{Value, json};
use tracing::{debug, trace};

use super::category::Category;
use super::node::{InputField, InputTypeNode, InputTypeRef, NamedType, NodeId, OrderingEnum, TypeOrigin};
use super::registry::TypeRegistry;
use super::scalar::ScalarKind;
use crate::error::GraphQLError;

/// Field name used for input objects that ended up without fields.
pub const PLACEHOLDER_FIELD: &str = "_placeholder";

/// Generated input types of one pass.
#[derive(Debug)]
pub struct InputTypeGraph {
    registry: TypeRegistry,
    ordering: OrderingEnum,
    by_origin: HashMap<TypeOrigin, NodeId>,
}

impl InputTypeGraph {
    pub(crate) fn new(registry: TypeRegistry, ordering: OrderingEnum) -> Self {
        let by_origin = registry
            .iter()
            .map(|(id, node)| (node.origin().clone(), id))
            .collect();

        Self {
            registry,
            ordering,
            by_origin,
        }
    }

    /// Returns the node for `id`.
    pub fn node(&self, id: NodeId) -> &InputTypeNode {
        self.registry.node(id)
    }

    /// Looks up a node by type name.
    pub fn get(&self, name: &str) -> Option<&InputTypeNode> {
        self.registry.lookup(name).map(|id| self.registry.node(id))
    }

    pub fn lookup(&self, name: &str) -> Option<NodeId> {
        self.registry.lookup(name)
    }

    /// Id of the `category` type of `entity`, if it was generated.
    pub fn entity_type(&self, entity: &str, category: Category) -> Option<NodeId> {
        self.by_origin
            .get(&TypeOrigin::Entity {
                entity: entity.to_string(),
                category,
            })
            .copied()
    }

    /// Id of the comparison type of `scalar`, if it was generated.
    pub fn comparison_type(&self, scalar: ScalarKind) -> Option<NodeId> {
        self.by_origin
            .get(&TypeOrigin::Comparison { scalar })
            .copied()
    }

    /// Iterates nodes in creation order.
    pub fn nodes(&self) -> impl Iterator<Item = (NodeId, &InputTypeNode)> {
        self.registry.iter()
    }

    pub fn len(&self) -> usize {
        self.registry.len()
    }

    pub fn is_empty(&self) -> bool {
        self.registry.is_empty()
    }

    pub fn ordering_enum(&self) -> &OrderingEnum {
        &self.ordering
    }

    /// GraphQL name of a named type.
    pub fn named_type_name(&self, named: NamedType) -> &str {
        match named {
            NamedType::Scalar(scalar) => scalar.graphql_name(),
            NamedType::OrderBy => self.ordering.name(),
            NamedType::Input(id) => self.registry.node(id).name(),
        }
    }

    /// Renders a field type in SDL notation, e.g. `[Int!]`.
    pub fn type_ref_string(&self, type_ref: &InputTypeRef) -> String {
        match type_ref {
            InputTypeRef::Named(named) => self.named_type_name(*named).to_string(),
            InputTypeRef::List(inner) => format!("[{}]", self.type_ref_string(inner)),
            InputTypeRef::NonNull(inner) => format!("{}!", self.type_ref_string(inner)),
        }
    }

    /// Renders the ordering enum and every input type as SDL.
    pub fn to_sdl(&self) -> String {
        let mut sdl = String::new();

        write_description(&mut sdl, Some("column ordering options"), "");
        let _ = writeln!(sdl, "enum {} {{", self.ordering.name());
        for value in self.ordering.values() {
            let _ = writeln!(sdl, "  {value}");
        }
        sdl.push_str("}\n");

        for (_, node) in self.nodes() {
            sdl.push('\n');
            self.write_node_sdl(&mut sdl, node);
        }

        sdl
    }

    /// Renders one node as SDL.
    pub fn node_sdl(&self, id: NodeId) -> String {
        let mut sdl = String::new();
        self.write_node_sdl(&mut sdl, self.node(id));
        sdl
    }

    fn write_node_sdl(&self, sdl: &mut String, node: &InputTypeNode) {
        write_description(sdl, node.description(), "");

        if node.fields().is_empty() {
            let _ = writeln!(sdl, "input {}", node.name());
            return;
        }

        let _ = writeln!(sdl, "input {} {{", node.name());
        for (name, field) in node.fields() {
            write_description(sdl, field.description.as_deref(), "  ");
            let _ = writeln!(sdl, "  {}: {}", name, self.type_ref_string(&field.type_ref));
        }
        sdl.push_str("}\n");
    }

    /// Summarises the graph as JSON.
    pub fn to_json(&self) -> Value {
        let inputs: Vec<Value> = self
            .nodes()
            .map(|(_, node)| {
                let fields: Vec<Value> = node
                    .fields()
                    .iter()
                    .map(|(name, field)| {
                        json!({
                            "name": name,
                            "type": self.type_ref_string(&field.type_ref),
                            "description": field.description,
                        })
                    })
                    .collect();

                json!({
                    "name": node.name(),
                    "origin": node.origin().to_string(),
                    "description": node.description(),
                    "fields": fields,
                })
            })
            .collect();

        json!({
            "enums": [{
                "name": self.ordering.name(),
                "values": self.ordering.values(),
            }],
            "inputs": inputs,
        })
    }

    /// Converts the ordering enum to an async-graphql dynamic type.
    pub fn dynamic_enum(&self) -> Enum {
        Enum::new(self.ordering.name())
            .description("column ordering options")
            .item(EnumItem::new(OrderingEnum::ASC).description("in ascending order"))
            .item(EnumItem::new(OrderingEnum::DESC).description("in descending order"))
    }

    /// Converts one node to an async-graphql dynamic input object.
    ///
    /// GraphQL requires at least one field per input object, so nodes without
    /// fields get a nullable `_placeholder` field.
    pub fn dynamic_input(&self, id: NodeId) -> InputObject {
        let node = self.node(id);
        let mut input = InputObject::new(node.name());
        if let Some(description) = node.description() {
            input = input.description(description);
        }

        for (name, field) in node.fields() {
            input = input.field(self.dynamic_field(name, field));
        }

        if node.fields().is_empty() {
            trace!(type_name = %node.name(), "No fields, adding placeholder field");
            input = input.field(
                InputValue::new(PLACEHOLDER_FIELD, TypeRef::named(TypeRef::BOOLEAN))
                    .description("Placeholder field - type has no defined fields"),
            );
        }

        input
    }

    fn dynamic_field(&self, name: &str, field: &InputField) -> InputValue {
        let value = InputValue::new(name, self.dynamic_type_ref(&field.type_ref));
        match &field.description {
            Some(description) => value.description(description),
            None => value,
        }
    }

    fn dynamic_type_ref(&self, type_ref: &InputTypeRef) -> TypeRef {
        match type_ref {
            InputTypeRef::Named(named) => TypeRef::named(self.named_type_name(*named).to_string()),
            InputTypeRef::List(inner) => TypeRef::List(Box::new(self.dynamic_type_ref(inner))),
            InputTypeRef::NonNull(inner) => {
                TypeRef::NonNull(Box::new(self.dynamic_type_ref(inner)))
            }
        }
    }

    /// Registers the ordering enum and all input types with a dynamic schema
    /// builder.
    pub fn register(&self, builder: SchemaBuilder) -> SchemaBuilder {
        debug!(types = self.len(), "Registering input types with dynamic schema");

        let mut builder = builder.register(self.dynamic_enum());
        for (id, _) in self.nodes() {
            builder = builder.register(self.dynamic_input(id));
        }
        builder
    }

    /// Builds a finished dynamic schema around `query`, with every generated
    /// type registered.
    ///
    /// # Errors
    ///
    /// Returns `SchemaExport` if async-graphql rejects the type set.
    pub fn build_schema(&self, query: Object) -> Result<Schema, GraphQLError> {
        let query_name = query.type_name().to_string();
        self.register(Schema::build(&query_name, None, None))
            .register(query)
            .finish()
            .map_err(|e| GraphQLError::SchemaExport(e.to_string()))
    }
}

fn write_description(sdl: &mut String, description: Option<&str>, indent: &str) {
    if let Some(description) = description {
        let _ = writeln!(sdl, "{indent}\"\"\"");
        let _ = writeln!(sdl, "{indent}{}", description.replace("\"\"\"", "\\\"\"\""));
        let _ = writeln!(sdl, "{indent}\"\"\"");
    }
}
