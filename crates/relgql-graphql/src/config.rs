//! Generator configuration.
//!
//! Configuration can be specified in TOML, usually under a `[generator]`
//! section of the CLI config file.
//!
//! # Example Configuration
//!
//! ```toml
//! [generator]
//! categories = ["where", "order_by"]
//! descriptions = true
//!
//! [generator.naming]
//! where_suffix = "_bool_exp"
//! order_by_enum = "order_by"
//! ```

use serde::{Deserialize, Serialize};

use crate::error::GraphQLError;
use crate::schema::Category;

/// Type name suffixes and the ordering enum name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NamingConfig {
    /// Suffix of filter types.
    /// Default: "_bool_exp"
    #[serde(default = "default_where_suffix")]
    pub where_suffix: String,

    /// Suffix of ordering types.
    /// Default: "_order_by"
    #[serde(default = "default_order_by_suffix")]
    pub order_by_suffix: String,

    /// Default: "_insert_input"
    #[serde(default = "default_insert_input_suffix")]
    pub insert_input_suffix: String,

    /// Default: "_inc_input"
    #[serde(default = "default_inc_input_suffix")]
    pub inc_input_suffix: String,

    /// Default: "_set_input"
    #[serde(default = "default_set_input_suffix")]
    pub set_input_suffix: String,

    /// Default: "_on_conflict"
    #[serde(default = "default_on_conflict_suffix")]
    pub on_conflict_suffix: String,

    /// Suffix of scalar comparison types.
    /// Default: "_comparison_exp"
    #[serde(default = "default_comparison_suffix")]
    pub comparison_suffix: String,

    /// Name of the asc/desc enum.
    /// Default: "order_by"
    #[serde(default = "default_order_by_enum")]
    pub order_by_enum: String,
}

fn default_where_suffix() -> String {
    "_bool_exp".into()
}

fn default_order_by_suffix() -> String {
    "_order_by".into()
}

fn default_insert_input_suffix() -> String {
    "_insert_input".into()
}

fn default_inc_input_suffix() -> String {
    "_inc_input".into()
}

fn default_set_input_suffix() -> String {
    "_set_input".into()
}

fn default_on_conflict_suffix() -> String {
    "_on_conflict".into()
}

fn default_comparison_suffix() -> String {
    "_comparison_exp".into()
}

fn default_order_by_enum() -> String {
    "order_by".into()
}

impl Default for NamingConfig {
    fn default() -> Self {
        Self {
            where_suffix: default_where_suffix(),
            order_by_suffix: default_order_by_suffix(),
            insert_input_suffix: default_insert_input_suffix(),
            inc_input_suffix: default_inc_input_suffix(),
            set_input_suffix: default_set_input_suffix(),
            on_conflict_suffix: default_on_conflict_suffix(),
            comparison_suffix: default_comparison_suffix(),
            order_by_enum: default_order_by_enum(),
        }
    }
}

impl NamingConfig {
    fn suffixes(&self) -> [(&'static str, &str); 7] {
        [
            ("where_suffix", &self.where_suffix),
            ("order_by_suffix", &self.order_by_suffix),
            ("insert_input_suffix", &self.insert_input_suffix),
            ("inc_input_suffix", &self.inc_input_suffix),
            ("set_input_suffix", &self.set_input_suffix),
            ("on_conflict_suffix", &self.on_conflict_suffix),
            ("comparison_suffix", &self.comparison_suffix),
        ]
    }
}

/// Input type generator configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneratorConfig {
    /// Type naming.
    #[serde(default)]
    pub naming: NamingConfig,

    /// Categories built for every entity by a full pass.
    /// Default: all six
    #[serde(default = "default_categories")]
    pub categories: Vec<Category>,

    /// Attach descriptions to generated types and fields.
    /// Default: true
    #[serde(default = "default_descriptions")]
    pub descriptions: bool,
}

fn default_categories() -> Vec<Category> {
    Category::ALL.to_vec()
}

fn default_descriptions() -> bool {
    true
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            naming: NamingConfig::default(),
            categories: default_categories(),
            descriptions: default_descriptions(),
        }
    }
}

impl GeneratorConfig {
    /// Parses a configuration from TOML.
    ///
    /// # Errors
    ///
    /// Returns `InvalidConfig` on syntax errors, unknown categories, or
    /// values rejected by [`validate`](Self::validate).
    pub fn from_toml_str(content: &str) -> Result<Self, GraphQLError> {
        let config: Self =
            toml::from_str(content).map_err(|e| GraphQLError::InvalidConfig(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration values are invalid.
    pub fn validate(&self) -> Result<(), GraphQLError> {
        let suffixes = self.naming.suffixes();
        for (i, (key, suffix)) in suffixes.iter().enumerate() {
            if suffix.is_empty() {
                return Err(GraphQLError::InvalidConfig(format!(
                    "naming.{key} must not be empty"
                )));
            }
            if let Some((other, _)) = suffixes[i + 1..].iter().find(|(_, s)| s == suffix) {
                return Err(GraphQLError::InvalidConfig(format!(
                    "naming.{key} and naming.{other} must differ"
                )));
            }
        }

        if !is_valid_graphql_name(&self.naming.order_by_enum) {
            return Err(GraphQLError::InvalidConfig(format!(
                "naming.order_by_enum '{}' is not a valid GraphQL name",
                self.naming.order_by_enum
            )));
        }

        if self.categories.is_empty() {
            return Err(GraphQLError::InvalidConfig(
                "categories must list at least one category".into(),
            ));
        }

        Ok(())
    }
}

/// GraphQL names match `[_A-Za-z][_0-9A-Za-z]*`.
pub(crate) fn is_valid_graphql_name(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = GeneratorConfig::default();
        assert_eq!(config.categories.len(), 6);
        assert!(config.descriptions);
        assert_eq!(config.naming.where_suffix, "_bool_exp");
        assert_eq!(config.naming.order_by_enum, "order_by");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_empty_suffix_rejected() {
        let mut config = GeneratorConfig::default();
        config.naming.set_input_suffix = String::new();
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("set_input_suffix"));
    }

    #[test]
    fn test_duplicate_suffix_rejected() {
        let mut config = GeneratorConfig::default();
        config.naming.order_by_suffix = "_bool_exp".into();
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("where_suffix and naming.order_by_suffix"));
    }

    #[test]
    fn test_invalid_enum_name() {
        let mut config = GeneratorConfig::default();
        config.naming.order_by_enum = "order-by".into();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_no_categories_rejected() {
        let mut config = GeneratorConfig::default();
        config.categories.clear();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_deserialize_from_toml() {
        let toml = r#"
            categories = ["where", "order_by"]
            descriptions = false

            [naming]
            where_suffix = "Filter"
        "#;

        let config = GeneratorConfig::from_toml_str(toml).unwrap();
        assert_eq!(config.categories, vec![Category::Where, Category::OrderBy]);
        assert!(!config.descriptions);
        assert_eq!(config.naming.where_suffix, "Filter");
        assert_eq!(config.naming.order_by_suffix, "_order_by");
    }

    #[test]
    fn test_unknown_category_in_toml() {
        let err = GeneratorConfig::from_toml_str(r#"categories = ["delete"]"#).unwrap_err();
        assert_eq!(err.error_code(), "INVALID_CONFIG");
    }

    #[test]
    fn test_graphql_names() {
        assert!(is_valid_graphql_name("order_by"));
        assert!(is_valid_graphql_name("_x1"));
        assert!(!is_valid_graphql_name("1abc"));
        assert!(!is_valid_graphql_name(""));
    }
}
