//! Entity input type factory.
//!
//! This module provides `InputTypeGenerator`, the entry point of a generation
//! pass. Every requested (entity, category) pair resolves to exactly one node:
//!
//! 1. derive the type name from the namer;
//! 2. look the name up in the registry, inserting an empty placeholder on a miss;
//! 3. for a fresh placeholder, synthesize its fields, which may request other
//!    entities' types or the same type again (resolved to the placeholder);
//! 4. return the node id.
//!
//! Because insertion precedes population, self-referential (`_and`, `_or`,
//! `_not`) and mutually recursive relationship graphs terminate.

use relgql_core::SchemaCatalog;
use tracing::{debug, info, warn};

use super::category::Category;
use super::comparison::comparison_type;
use super::graph::InputTypeGraph;
use super::naming::{ConventionNamer, TypeNamer};
use super::node::{InputTypeNode, NodeId, OrderingEnum, TypeOrigin};
use super::registry::{Lookup, TypeRegistry};
use super::scalar::ScalarKind;
use crate::config::GeneratorConfig;
use crate::error::GraphQLError;

/// Generator for entity input types.
///
/// One generator is one generation pass: the registry it owns starts empty,
/// grows monotonically, and is handed over as an [`InputTypeGraph`] by
/// [`finish`](Self::finish). The first error aborts the pass: later `build`
/// and `comparison` calls and `finish` fail with `PassAborted`, so a partially
/// populated graph never reaches the consumer.
///
/// # Example
///
/// ```ignore
/// let mut generator = InputTypeGenerator::new(&catalog, GeneratorConfig::default());
/// let filter = generator.build("post", Category::Where)?;
/// let graph = generator.finish()?;
/// println!("{}", graph.node(filter).name()); // post_bool_exp
/// ```
pub struct InputTypeGenerator<'a> {
    /// Entity descriptors.
    pub(super) catalog: &'a SchemaCatalog,
    /// Type name derivation.
    pub(super) namer: Box<dyn TypeNamer>,
    /// Memoized nodes of this pass.
    pub(super) registry: TypeRegistry,
    /// The single ordering enum of this pass.
    pub(super) ordering: OrderingEnum,
    /// Configuration options.
    pub(super) config: GeneratorConfig,
    /// Message of the error that aborted this pass.
    aborted: Option<String>,
}

impl<'a> InputTypeGenerator<'a> {
    /// Creates a generator using [`ConventionNamer`] over `config.naming`.
    pub fn new(catalog: &'a SchemaCatalog, config: GeneratorConfig) -> Self {
        let namer = ConventionNamer::new(config.naming.clone());
        Self::with_namer(catalog, config, namer)
    }

    /// Creates a generator with a custom naming scheme.
    pub fn with_namer(
        catalog: &'a SchemaCatalog,
        config: GeneratorConfig,
        namer: impl TypeNamer + 'static,
    ) -> Self {
        let ordering = OrderingEnum::new(namer.ordering_enum_name());
        let mut registry = TypeRegistry::new();
        registry.reserve(ordering.name(), "the ordering enum");

        Self {
            catalog,
            namer: Box::new(namer),
            registry,
            ordering,
            config,
            aborted: None,
        }
    }

    /// Returns the `category` input type of `entity`, generating it on first
    /// request.
    ///
    /// # Errors
    ///
    /// - `UnknownEntity` if the entity (or a relationship target) is missing
    /// - `UnmappedColumnType` if a column has no scalar mapping
    /// - `NamingCollision` if the namer reuses a name for another subject
    /// - `PassAborted` if an earlier call of this pass failed
    pub fn build(&mut self, entity: &str, category: Category) -> Result<NodeId, GraphQLError> {
        self.ensure_live()?;
        let result = self.build_entity_type(entity, category);
        self.record(result)
    }

    fn build_entity_type(
        &mut self,
        entity: &str,
        category: Category,
    ) -> Result<NodeId, GraphQLError> {
        let catalog = self.catalog;
        let entity = catalog
            .entity(entity)
            .ok_or_else(|| GraphQLError::UnknownEntity(entity.to_string()))?;

        let type_name = self.namer.entity_type_name(&entity.name, category);
        let origin = TypeOrigin::Entity {
            entity: entity.name.clone(),
            category,
        };
        let description = self
            .config
            .descriptions
            .then(|| entity_description(&entity.name, category));

        let lookup = self.registry.get_or_create(&type_name, origin, |name, origin| {
            InputTypeNode::placeholder(name, origin).with_description(description)
        })?;

        let Lookup::Created(id) = lookup else {
            return Ok(lookup.id());
        };

        debug!(
            entity = %entity.name,
            %category,
            type_name = %type_name,
            "Generating input type"
        );
        let fields = self.synthesize_fields(entity, category, id)?;
        self.registry.populate(id, fields);

        Ok(id)
    }

    /// Returns the comparison input type of `scalar`.
    pub fn comparison(&mut self, scalar: ScalarKind) -> Result<NodeId, GraphQLError> {
        self.ensure_live()?;
        let result = comparison_type(
            &mut self.registry,
            self.namer.as_ref(),
            scalar,
            self.config.descriptions,
        );
        self.record(result)
    }

    /// Returns true once an error has aborted this pass.
    pub fn is_aborted(&self) -> bool {
        self.aborted.is_some()
    }

    fn ensure_live(&self) -> Result<(), GraphQLError> {
        match &self.aborted {
            Some(cause) => Err(GraphQLError::PassAborted(cause.clone())),
            None => Ok(()),
        }
    }

    /// Marks the pass aborted on the first error. Nested builds record the
    /// innermost failure, so outer frames keep that message.
    fn record<T>(&mut self, result: Result<T, GraphQLError>) -> Result<T, GraphQLError> {
        if let Err(e) = &result
            && self.aborted.is_none()
        {
            warn!(error = %e, code = e.error_code(), "Input type generation aborted");
            self.aborted = Some(e.to_string());
        }
        result
    }

    /// Builds every configured category for every entity in catalog order.
    pub fn build_all(&mut self) -> Result<(), GraphQLError> {
        let catalog = self.catalog;
        let categories = self.config.categories.clone();

        debug!(
            entities = catalog.len(),
            categories = categories.len(),
            "Building all input types"
        );

        for entity in catalog.entities() {
            for &category in &categories {
                self.build(&entity.name, category)?;
            }
        }

        info!(types = self.registry.len(), "Input type generation complete");
        Ok(())
    }

    /// Returns the node for `id`.
    pub fn node(&self, id: NodeId) -> &InputTypeNode {
        self.registry.node(id)
    }

    pub fn registry(&self) -> &TypeRegistry {
        &self.registry
    }

    pub fn ordering_enum(&self) -> &OrderingEnum {
        &self.ordering
    }

    /// Ends the pass and hands the generated types to the consumer.
    ///
    /// # Errors
    ///
    /// Returns `PassAborted` if any call of this pass failed or a registered
    /// type was left without its fields.
    pub fn finish(self) -> Result<InputTypeGraph, GraphQLError> {
        if let Some(cause) = self.aborted {
            return Err(GraphQLError::PassAborted(cause));
        }
        if let Some((_, node)) = self.registry.iter().find(|(_, n)| !n.is_populated()) {
            return Err(GraphQLError::PassAborted(format!(
                "input type {} was never populated",
                node.name()
            )));
        }

        Ok(InputTypeGraph::new(self.registry, self.ordering))
    }
}

fn entity_description(entity: &str, category: Category) -> String {
    match category {
        Category::Where => format!(
            "Boolean expression to filter rows from the table \"{entity}\". All fields are combined with a logical 'AND'."
        ),
        Category::OrderBy => format!("Ordering options when selecting data from \"{entity}\"."),
        Category::InsertInput => format!("input type for inserting data into table \"{entity}\""),
        Category::IncInput => {
            format!("input type for incrementing numeric columns in table \"{entity}\"")
        }
        Category::SetInput => format!("input type for updating data in table \"{entity}\""),
        Category::OnConflict => format!("on_conflict condition type for table \"{entity}\""),
    }
}
