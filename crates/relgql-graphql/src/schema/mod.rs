//! Input type graph construction.
//!
//! This module turns entity descriptors into the input types a
//! Hasura-style GraphQL API needs: filters, ordering, and mutation payloads.
//!
//! ## Components
//!
//! - [`TypeRegistry`] - Name to node store with placeholder-then-populate
//! - [`InputTypeGenerator`] - Builds (entity, category) types on demand
//! - [`InputTypeGraph`] - Finished graph handed to the consumer
//! - [`TypeNamer`] - Type name derivation
//!
//! ## Architecture
//!
//! One generator is one pass:
//! 1. The consumer requests (entity, category) pairs, or all of them
//! 2. Each miss registers a placeholder node before computing its fields
//! 3. Field synthesis requests comparison types and related entities' types
//! 4. `finish()` turns the registry into an immutable `InputTypeGraph`, unless
//!    an earlier error aborted the pass

mod category;
mod comparison;
mod generator;
mod graph;
mod naming;
mod node;
mod registry;
mod scalar;
mod synthesizer;

pub use category::Category;
pub use comparison::comparison_type;
pub use generator::InputTypeGenerator;
pub use graph::{InputTypeGraph, PLACEHOLDER_FIELD};
pub use naming::{ConventionNamer, TypeNamer};
pub use node::{
    FieldMap, InputField, InputTypeNode, InputTypeRef, NamedType, NodeId, OrderingEnum, TypeOrigin,
};
pub use registry::{Lookup, TypeRegistry};
pub use scalar::ScalarKind;
