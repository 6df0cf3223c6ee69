//! # relgql-graphql
//!
//! GraphQL input type generation for relational schemas.
//!
//! Given a [`SchemaCatalog`](relgql_core::SchemaCatalog) of entities, this
//! crate produces the input types of a Hasura-style API for every entity:
//!
//! - `where` - boolean filter expressions (`post_bool_exp`)
//! - `order_by` - ordering options (`post_order_by`)
//! - `insert_input`, `inc_input`, `set_input` - mutation payloads
//! - `on_conflict` - upsert conflict handling
//!
//! plus one comparison type per scalar (`Int_comparison_exp`) and the shared
//! `order_by` enum.
//!
//! ## Overview
//!
//! Generated types reference themselves (`_and`, `_or`, `_not`) and each
//! other through relationships. Generation registers every type before
//! computing its fields, so cyclic schemas terminate and each type exists
//! exactly once.
//!
//! ## Configuration
//!
//! ```toml
//! categories = ["where", "order_by", "insert_input"]
//! descriptions = true
//!
//! [naming]
//! where_suffix = "_bool_exp"
//! ```
//!
//! ## Modules
//!
//! - [`config`] - Configuration options
//! - [`schema`] - Registry, generator and the finished graph
//! - [`error`] - Error types for generation

pub mod config;
pub mod error;
pub mod schema;

// Re-export main types
pub use config::{GeneratorConfig, NamingConfig};
pub use error::GraphQLError;
pub use schema::{Category, InputTypeGenerator, InputTypeGraph, NodeId, ScalarKind};

/// Result type for input type generation.
pub type Result<T> = std::result::Result<T, GraphQLError>;
