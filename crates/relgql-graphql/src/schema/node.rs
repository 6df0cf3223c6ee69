//! Input type nodes and field type references.

use std::fmt;

use indexmap::IndexMap;

use super::category::Category;
use super::scalar::ScalarKind;

/// Stable handle to a node in the type registry.
///
/// Two handles are equal exactly when they name the same node, so a
/// `NodeId` stands in for reference identity across the graph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(pub(crate) usize);

impl NodeId {
    pub fn index(&self) -> usize {
        self.0
    }
}

/// What a node was generated for.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum TypeOrigin {
    /// One category of an entity.
    Entity { entity: String, category: Category },
    /// Comparison predicates for a scalar.
    Comparison { scalar: ScalarKind },
}

impl fmt::Display for TypeOrigin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TypeOrigin::Entity { entity, category } => write!(f, "{entity}/{category}"),
            TypeOrigin::Comparison { scalar } => write!(f, "{scalar}/comparison"),
        }
    }
}

/// A named type a field can point at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NamedType {
    Scalar(ScalarKind),
    /// The pass-wide ordering enum.
    OrderBy,
    Input(NodeId),
}

/// Field type, wrapped in list and non-null modifiers as needed.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum InputTypeRef {
    Named(NamedType),
    List(Box<InputTypeRef>),
    NonNull(Box<InputTypeRef>),
}

impl InputTypeRef {
    pub fn scalar(kind: ScalarKind) -> Self {
        Self::Named(NamedType::Scalar(kind))
    }

    pub fn order_by() -> Self {
        Self::Named(NamedType::OrderBy)
    }

    pub fn input(id: NodeId) -> Self {
        Self::Named(NamedType::Input(id))
    }

    pub fn list(self) -> Self {
        Self::List(Box::new(self))
    }

    pub fn non_null(self) -> Self {
        Self::NonNull(Box::new(self))
    }

    /// The innermost named type.
    pub fn named(&self) -> NamedType {
        match self {
            Self::Named(named) => *named,
            Self::List(inner) | Self::NonNull(inner) => inner.named(),
        }
    }

    /// Node referenced by this field, if any.
    pub fn node(&self) -> Option<NodeId> {
        match self.named() {
            NamedType::Input(id) => Some(id),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InputField {
    pub type_ref: InputTypeRef,
    pub description: Option<String>,
}

impl InputField {
    pub fn new(type_ref: InputTypeRef) -> Self {
        Self {
            type_ref,
            description: None,
        }
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}

/// Ordered field map of an input type.
pub type FieldMap = IndexMap<String, InputField>;

/// A generated input object type.
///
/// Nodes are created empty and populated once; see
/// [`TypeRegistry`](super::TypeRegistry).
#[derive(Debug, Clone)]
pub struct InputTypeNode {
    name: String,
    origin: TypeOrigin,
    description: Option<String>,
    fields: FieldMap,
    populated: bool,
}

impl InputTypeNode {
    /// Creates an unpopulated node.
    pub fn placeholder(name: impl Into<String>, origin: TypeOrigin) -> Self {
        Self {
            name: name.into(),
            origin,
            description: None,
            fields: FieldMap::new(),
            populated: false,
        }
    }

    pub fn with_description(mut self, description: Option<String>) -> Self {
        self.description = description;
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn origin(&self) -> &TypeOrigin {
        &self.origin
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn fields(&self) -> &FieldMap {
        &self.fields
    }

    pub fn field(&self, name: &str) -> Option<&InputField> {
        self.fields.get(name)
    }

    pub fn is_populated(&self) -> bool {
        self.populated
    }

    pub(crate) fn set_fields(&mut self, fields: FieldMap) {
        self.fields = fields;
        self.populated = true;
    }
}

/// The two-valued ordering enum shared by every order-by type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderingEnum {
    name: String,
}

impl OrderingEnum {
    pub const ASC: &'static str = "asc";
    pub const DESC: &'static str = "desc";

    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn values(&self) -> [&'static str; 2] {
        [Self::ASC, Self::DESC]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_type_ref_named() {
        let id = NodeId(3);
        let type_ref = InputTypeRef::input(id).list().non_null();
        assert_eq!(type_ref.named(), NamedType::Input(id));
        assert_eq!(type_ref.node(), Some(id));
        assert_eq!(InputTypeRef::order_by().node(), None);
    }

    #[test]
    fn test_placeholder_is_unpopulated() {
        let mut node = InputTypeNode::placeholder(
            "post_bool_exp",
            TypeOrigin::Entity {
                entity: "post".into(),
                category: Category::Where,
            },
        );
        assert!(!node.is_populated());
        assert!(node.fields().is_empty());

        node.set_fields(FieldMap::new());
        assert!(node.is_populated());
    }

    #[test]
    fn test_origin_display() {
        let origin = TypeOrigin::Comparison {
            scalar: ScalarKind::Int,
        };
        assert_eq!(origin.to_string(), "Int/comparison");
    }
}
