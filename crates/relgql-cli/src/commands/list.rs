use anyhow::Result;
use relgql_graphql::GeneratorConfig;

use crate::cli::{ListArgs, OutputFormat};
use crate::output;

pub fn list(args: &ListArgs, config: &GeneratorConfig, format: OutputFormat) -> Result<()> {
    let content = render(args, config, format)?;
    output::emit(&content, None)
}

fn render(args: &ListArgs, config: &GeneratorConfig, format: OutputFormat) -> Result<String> {
    let catalog = super::load_catalog(&args.schema)?;
    let graph = super::generate_all(&catalog, config)?;

    match format {
        OutputFormat::Table => Ok(output::types_table(&graph)),
        OutputFormat::Json => {
            let names: Vec<&str> = graph.nodes().map(|(_, node)| node.name()).collect();
            output::to_pretty_json(&serde_json::json!({
                "enums": [graph.ordering_enum().name()],
                "inputs": names,
            }))
        }
        OutputFormat::Sdl => {
            let mut names = String::new();
            for (_, node) in graph.nodes() {
                names.push_str(node.name());
                names.push('\n');
            }
            Ok(names)
        }
    }
}
