//! Memoization store for generated input types.

use std::collections::HashMap;

use tracing::trace;

use super::node::{FieldMap, InputTypeNode, NodeId, TypeOrigin};
use crate::error::GraphQLError;

/// Result of [`TypeRegistry::get_or_create`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Lookup {
    /// The name was already registered; the node may still be a placeholder
    /// if its population is in progress further up the call stack.
    Existing(NodeId),
    /// A placeholder was inserted and the caller must populate it.
    Created(NodeId),
}

impl Lookup {
    /// Node id, whether found or inserted.
    pub fn id(&self) -> NodeId {
        match self {
            Lookup::Existing(id) | Lookup::Created(id) => *id,
        }
    }

    /// Returns true if the caller must populate the node.
    pub fn is_created(&self) -> bool {
        matches!(self, Lookup::Created(_))
    }
}

/// Registry of generated input types, keyed by type name.
///
/// Nodes live in an arena and are addressed by [`NodeId`]. A name is bound to
/// its node at insertion time, before the node's fields are computed, so a
/// recursive request for the same name during population sees the placeholder
/// instead of recursing. Entries are never removed or replaced.
#[derive(Debug, Default)]
pub struct TypeRegistry {
    /// Name to node lookup.
    by_name: HashMap<String, NodeId>,
    /// Nodes in creation order.
    nodes: Vec<InputTypeNode>,
    /// Names owned by non-input types (the ordering enum).
    reserved: HashMap<String, String>,
}

impl TypeRegistry {
    /// Creates a new empty type registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Claims `name` for a type that is not an input object.
    pub fn reserve(&mut self, name: impl Into<String>, owner: impl Into<String>) {
        self.reserved.insert(name.into(), owner.into());
    }

    /// Returns the node registered under `name`, or inserts the node produced
    /// by `placeholder`.
    ///
    /// `placeholder` only runs on a miss. A hit whose recorded origin differs
    /// from `origin` means the namer mapped two subjects to one name, which is
    /// reported as [`GraphQLError::NamingCollision`].
    pub fn get_or_create(
        &mut self,
        name: &str,
        origin: TypeOrigin,
        placeholder: impl FnOnce(String, TypeOrigin) -> InputTypeNode,
    ) -> Result<Lookup, GraphQLError> {
        if let Some(owner) = self.reserved.get(name) {
            return Err(GraphQLError::NamingCollision {
                name: name.to_string(),
                existing: owner.clone(),
                requested: origin.to_string(),
            });
        }

        if let Some(&id) = self.by_name.get(name) {
            let existing = self.nodes[id.0].origin();
            if *existing != origin {
                return Err(GraphQLError::naming_collision(name, existing, &origin));
            }
            return Ok(Lookup::Existing(id));
        }

        let id = NodeId(self.nodes.len());
        self.nodes.push(placeholder(name.to_string(), origin));
        self.by_name.insert(name.to_string(), id);
        trace!(type_name = %name, id = id.0, "Registered placeholder input type");

        Ok(Lookup::Created(id))
    }

    /// Stores the computed fields of a placeholder.
    pub fn populate(&mut self, id: NodeId, fields: FieldMap) {
        let node = &mut self.nodes[id.0];
        debug_assert!(!node.is_populated(), "input type populated twice");
        trace!(type_name = %node.name(), fields = fields.len(), "Populated input type");
        node.set_fields(fields);
    }

    /// Looks up a node id by type name.
    pub fn lookup(&self, name: &str) -> Option<NodeId> {
        self.by_name.get(name).copied()
    }

    /// Returns the node for `id`.
    ///
    /// Ids are only handed out by this registry, so indexing cannot fail for
    /// ids obtained from it.
    pub fn node(&self, id: NodeId) -> &InputTypeNode {
        &self.nodes[id.0]
    }

    /// Iterates nodes in creation order.
    pub fn iter(&self) -> impl Iterator<Item = (NodeId, &InputTypeNode)> {
        self.nodes.iter().enumerate().map(|(i, n)| (NodeId(i), n))
    }

    /// Returns the number of registered nodes.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Returns true if no node has been registered.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}
