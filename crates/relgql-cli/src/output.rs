use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use colored::Colorize;
use relgql_graphql::InputTypeGraph;
use tabled::builder::Builder;
use tabled::settings::Style;

pub fn print_success(msg: &str) {
    eprintln!("{} {}", "✓".green(), msg);
}

pub fn print_error(msg: &str) {
    eprintln!("{} {}", "✗".red(), msg);
}

/// Writes `content` to `path`, or to stdout when no path is given.
pub fn emit(content: &str, path: Option<&Path>) -> Result<()> {
    match path {
        Some(path) => {
            fs::write(path, content)
                .with_context(|| format!("Cannot write {}", path.display()))?;
            print_success(&format!("Wrote {}", path.display()));
        }
        None => print!("{content}"),
    }
    Ok(())
}

pub fn to_pretty_json(value: &serde_json::Value) -> Result<String> {
    let mut json = serde_json::to_string_pretty(value)?;
    json.push('\n');
    Ok(json)
}

/// Renders one row per generated type: name, origin, and field count.
pub fn types_table(graph: &InputTypeGraph) -> String {
    if graph.is_empty() {
        return "No input types generated.\n".to_string();
    }

    let mut builder = Builder::default();
    builder.push_record(["Type", "Kind", "Origin", "Fields"]);

    let ordering = graph.ordering_enum();
    builder.push_record([
        ordering.name().to_string(),
        "enum".to_string(),
        "-".to_string(),
        ordering.values().len().to_string(),
    ]);

    for (_, node) in graph.nodes() {
        builder.push_record([
            node.name().to_string(),
            "input".to_string(),
            node.origin().to_string(),
            node.fields().len().to_string(),
        ]);
    }

    let table = builder.build().with(Style::rounded()).to_string();
    format!("{table}\nTotal: {} input types\n", graph.len())
}

#[cfg(test)]
mod tests {
    use super::*;
    use relgql_core::{ColumnType, Entity, SchemaCatalog};
    use relgql_graphql::{Category, GeneratorConfig, InputTypeGenerator};

    #[test]
    fn test_types_table() {
        let catalog =
            SchemaCatalog::from_entities([Entity::new("post").column("id", ColumnType::Integer)])
                .unwrap();
        let mut generator = InputTypeGenerator::new(&catalog, GeneratorConfig::default());
        generator.build("post", Category::Where).unwrap();
        let graph = generator.finish().unwrap();

        let table = types_table(&graph);
        assert!(table.contains("post_bool_exp"));
        assert!(table.contains("post/where"));
        assert!(table.contains("Int_comparison_exp"));
        assert!(table.contains("order_by"));
        assert!(table.ends_with("Total: 2 input types\n"));
    }

    #[test]
    fn test_emit_to_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("schema.graphql");

        emit("enum order_by {\n  asc\n  desc\n}\n", Some(&path)).unwrap();
        assert!(fs::read_to_string(&path).unwrap().starts_with("enum order_by"));
    }
}
