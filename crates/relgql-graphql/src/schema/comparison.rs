//! Scalar comparison input types.
//!
//! Every scalar used by a filtered column gets one `{Scalar}_comparison_exp`
//! type, shared by all entities:
//!
//! ```graphql
//! input String_comparison_exp {
//!   _eq: String
//!   _neq: String
//!   _in: [String!]
//!   _nin: [String!]
//!   _lt: String
//!   _gt: String
//!   _gte: String
//!   _lte: String
//!   _is_null: Boolean
//!   _like: String
//!   _nlike: String
//! }
//! ```

use tracing::trace;

use super::naming::TypeNamer;
use super::node::{FieldMap, InputField, InputTypeNode, InputTypeRef, NodeId, TypeOrigin};
use super::registry::{Lookup, TypeRegistry};
use super::scalar::ScalarKind;
use crate::error::GraphQLError;

const OPERATORS: [(&str, &str); 8] = [
    ("_eq", "equal to"),
    ("_neq", "not equal to"),
    ("_in", "in the given list"),
    ("_nin", "not in the given list"),
    ("_lt", "less than"),
    ("_gt", "greater than"),
    ("_gte", "greater than or equal to"),
    ("_lte", "less than or equal to"),
];

/// Returns the comparison type for `scalar`, creating it on first request.
pub fn comparison_type(
    registry: &mut TypeRegistry,
    namer: &dyn TypeNamer,
    scalar: ScalarKind,
    descriptions: bool,
) -> Result<NodeId, GraphQLError> {
    let name = namer.comparison_type_name(scalar);
    let lookup = registry.get_or_create(&name, TypeOrigin::Comparison { scalar }, |name, origin| {
        let description = descriptions.then(|| {
            format!(
                "Boolean expression to compare columns of type \"{}\". All fields are combined with logical 'AND'.",
                scalar.graphql_name()
            )
        });
        InputTypeNode::placeholder(name, origin).with_description(description)
    })?;

    if let Lookup::Created(id) = lookup {
        trace!(type_name = %name, %scalar, "Creating comparison input type");
        registry.populate(id, comparison_fields(scalar, descriptions));
    }

    Ok(lookup.id())
}

fn comparison_fields(scalar: ScalarKind, descriptions: bool) -> FieldMap {
    let mut fields = FieldMap::new();

    for (name, meaning) in OPERATORS {
        let type_ref = match name {
            "_in" | "_nin" => InputTypeRef::scalar(scalar).non_null().list(),
            _ => InputTypeRef::scalar(scalar),
        };
        fields.insert(name.to_string(), described(type_ref, descriptions, meaning));
    }

    fields.insert(
        "_is_null".to_string(),
        described(
            InputTypeRef::scalar(ScalarKind::Boolean),
            descriptions,
            "null (true) or not null (false)",
        ),
    );

    if scalar.is_textual() {
        fields.insert(
            "_like".to_string(),
            described(
                InputTypeRef::scalar(ScalarKind::String),
                descriptions,
                "matching the given LIKE pattern",
            ),
        );
        fields.insert(
            "_nlike".to_string(),
            described(
                InputTypeRef::scalar(ScalarKind::String),
                descriptions,
                "not matching the given LIKE pattern",
            ),
        );
    }

    fields
}

fn described(type_ref: InputTypeRef, descriptions: bool, meaning: &str) -> InputField {
    let field = InputField::new(type_ref);
    if descriptions {
        field.description(format!("Value is {meaning}"))
    } else {
        field
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::ConventionNamer;

    fn field_names(registry: &TypeRegistry, id: NodeId) -> Vec<String> {
        registry.node(id).fields().keys().cloned().collect()
    }

    #[test]
    fn test_int_comparison_fields() {
        let mut registry = TypeRegistry::new();
        let id = comparison_type(&mut registry, &ConventionNamer::default(), ScalarKind::Int, false)
            .unwrap();

        assert_eq!(registry.node(id).name(), "Int_comparison_exp");
        assert_eq!(
            field_names(&registry, id),
            vec!["_eq", "_neq", "_in", "_nin", "_lt", "_gt", "_gte", "_lte", "_is_null"]
        );
        assert_eq!(
            registry.node(id).field("_in").unwrap().type_ref,
            InputTypeRef::scalar(ScalarKind::Int).non_null().list()
        );
        assert_eq!(
            registry.node(id).field("_is_null").unwrap().type_ref,
            InputTypeRef::scalar(ScalarKind::Boolean)
        );
    }

    #[test]
    fn test_string_comparison_has_like() {
        let mut registry = TypeRegistry::new();
        let id = comparison_type(
            &mut registry,
            &ConventionNamer::default(),
            ScalarKind::String,
            true,
        )
        .unwrap();

        let node = registry.node(id);
        assert!(node.field("_like").is_some());
        assert!(node.field("_nlike").is_some());
        assert_eq!(node.fields().len(), 11);
        assert!(node.description().unwrap().contains("\"String\""));
    }

    #[test]
    fn test_comparison_memoized() {
        let mut registry = TypeRegistry::new();
        let namer = ConventionNamer::default();
        let first = comparison_type(&mut registry, &namer, ScalarKind::Float, false).unwrap();
        let second = comparison_type(&mut registry, &namer, ScalarKind::Float, false).unwrap();

        assert_eq!(first, second);
        assert_eq!(registry.len(), 1);
    }
}
