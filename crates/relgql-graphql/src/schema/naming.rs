//! Type name derivation.

use super::category::Category;
use super::scalar::ScalarKind;
use crate::config::NamingConfig;

/// Derives GraphQL type names for generated input types.
///
/// Implementations must be injective over the subjects they are asked about:
/// distinct (entity, category) or (scalar, comparison) pairs must get distinct
/// names, none equal to the ordering enum name. The registry reports a
/// violation as a naming collision.
pub trait TypeNamer: Send + Sync {
    /// Name of the `category` input type of `entity`.
    fn entity_type_name(&self, entity: &str, category: Category) -> String;

    /// Name of the comparison input type of `scalar`.
    fn comparison_type_name(&self, scalar: ScalarKind) -> String;

    /// Name of the shared ordering enum.
    fn ordering_enum_name(&self) -> String;
}

/// Suffix-based naming (`post_bool_exp`, `Int_comparison_exp`, ...).
#[derive(Debug, Clone, Default)]
pub struct ConventionNamer {
    config: NamingConfig,
}

impl ConventionNamer {
    pub fn new(config: NamingConfig) -> Self {
        Self { config }
    }

    fn suffix(&self, category: Category) -> &str {
        match category {
            Category::Where => &self.config.where_suffix,
            Category::OrderBy => &self.config.order_by_suffix,
            Category::InsertInput => &self.config.insert_input_suffix,
            Category::IncInput => &self.config.inc_input_suffix,
            Category::SetInput => &self.config.set_input_suffix,
            Category::OnConflict => &self.config.on_conflict_suffix,
        }
    }
}

impl TypeNamer for ConventionNamer {
    fn entity_type_name(&self, entity: &str, category: Category) -> String {
        format!("{}{}", entity, self.suffix(category))
    }

    fn comparison_type_name(&self, scalar: ScalarKind) -> String {
        format!("{}{}", scalar.graphql_name(), self.config.comparison_suffix)
    }

    fn ordering_enum_name(&self) -> String {
        self.config.order_by_enum.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_names() {
        let namer = ConventionNamer::default();
        assert_eq!(namer.entity_type_name("post", Category::Where), "post_bool_exp");
        assert_eq!(namer.entity_type_name("post", Category::OrderBy), "post_order_by");
        assert_eq!(
            namer.entity_type_name("post", Category::InsertInput),
            "post_insert_input"
        );
        assert_eq!(namer.entity_type_name("post", Category::IncInput), "post_inc_input");
        assert_eq!(namer.entity_type_name("post", Category::SetInput), "post_set_input");
        assert_eq!(
            namer.entity_type_name("post", Category::OnConflict),
            "post_on_conflict"
        );
        assert_eq!(
            namer.comparison_type_name(ScalarKind::String),
            "String_comparison_exp"
        );
        assert_eq!(namer.ordering_enum_name(), "order_by");
    }

    #[test]
    fn test_custom_suffix() {
        let config = NamingConfig {
            where_suffix: "Filter".into(),
            ..NamingConfig::default()
        };
        let namer = ConventionNamer::new(config);
        assert_eq!(namer.entity_type_name("Post", Category::Where), "PostFilter");
    }
}
