use anyhow::{Result, bail};
use relgql_core::SchemaCatalog;
use relgql_graphql::{GeneratorConfig, InputTypeGenerator};
use tabled::builder::Builder;
use tabled::settings::Style;

use crate::cli::{OutputFormat, ShowArgs};
use crate::output;

pub fn show(args: &ShowArgs, config: &GeneratorConfig, format: OutputFormat) -> Result<()> {
    let catalog = super::load_catalog(&args.schema)?;
    let content = render(&catalog, args, config, format)?;
    output::emit(&content, None)
}

/// Generates only what the requested type needs and renders that one type.
fn render(
    catalog: &SchemaCatalog,
    args: &ShowArgs,
    config: &GeneratorConfig,
    format: OutputFormat,
) -> Result<String> {
    if catalog.entity(&args.entity).is_none() {
        let known: Vec<&str> = catalog.entities().map(|e| e.name.as_str()).collect();
        bail!(
            "Unknown entity: {}. Known entities: {}",
            args.entity,
            known.join(", ")
        );
    }

    let mut generator = InputTypeGenerator::new(catalog, config.clone());
    let id = generator.build(&args.entity, args.category)?;
    let graph = generator.finish()?;
    let node = graph.node(id);

    match format {
        OutputFormat::Sdl => Ok(graph.node_sdl(id)),
        OutputFormat::Json => {
            let fields: Vec<serde_json::Value> = node
                .fields()
                .iter()
                .map(|(name, field)| {
                    serde_json::json!({
                        "name": name,
                        "type": graph.type_ref_string(&field.type_ref),
                    })
                })
                .collect();
            output::to_pretty_json(&serde_json::json!({
                "name": node.name(),
                "origin": node.origin().to_string(),
                "description": node.description(),
                "fields": fields,
            }))
        }
        OutputFormat::Table => {
            let mut builder = Builder::default();
            builder.push_record(["Field", "Type"]);
            for (name, field) in node.fields() {
                builder.push_record([name.clone(), graph.type_ref_string(&field.type_ref)]);
            }
            let table = builder.build().with(Style::rounded()).to_string();
            Ok(format!("{}\n{table}\n", node.name()))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use relgql_graphql::Category;

    fn catalog() -> SchemaCatalog {
        SchemaCatalog::from_toml_str(crate::commands::test_support::BLOG_TOML).unwrap()
    }

    fn args(entity: &str, category: Category) -> ShowArgs {
        ShowArgs {
            schema: "blog.toml".into(),
            entity: entity.to_string(),
            category,
        }
    }

    #[test]
    fn test_show_inc_input_sdl() {
        let config = GeneratorConfig {
            descriptions: false,
            ..GeneratorConfig::default()
        };
        let sdl = render(&catalog(), &args("post", Category::IncInput), &config, OutputFormat::Sdl)
            .unwrap();

        assert_eq!(sdl, "input post_inc_input {\n  id: Int\n  views: Int\n}\n");
    }

    #[test]
    fn test_show_where_json() {
        let json = render(
            &catalog(),
            &args("user", Category::Where),
            &GeneratorConfig::default(),
            OutputFormat::Json,
        )
        .unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(value["name"], "user_bool_exp");
        assert_eq!(value["fields"][0]["type"], "[user_bool_exp]");
        assert_eq!(value["fields"][3]["type"], "Int_comparison_exp");
        assert_eq!(value["fields"][5]["name"], "posts");
        assert_eq!(value["fields"][5]["type"], "post_bool_exp");
    }

    #[test]
    fn test_show_unknown_entity() {
        let err = render(
            &catalog(),
            &args("comment", Category::Where),
            &GeneratorConfig::default(),
            OutputFormat::Sdl,
        )
        .unwrap_err();
        assert!(err.to_string().contains("Known entities: post, user"));
    }
}
