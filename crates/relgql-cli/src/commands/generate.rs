use anyhow::Result;
use async_graphql::Value;
use async_graphql::dynamic::{Field, FieldFuture, Object, TypeRef};
use relgql_graphql::{GeneratorConfig, InputTypeGraph};
use tracing::info;

use crate::cli::{GenerateArgs, OutputFormat};
use crate::output;

pub fn generate(args: &GenerateArgs, config: &GeneratorConfig, format: OutputFormat) -> Result<()> {
    let content = render(args, config, format)?;
    output::emit(&content, args.output.as_deref())
}

fn render(args: &GenerateArgs, config: &GeneratorConfig, format: OutputFormat) -> Result<String> {
    let catalog = super::load_catalog(&args.schema)?;
    let graph = super::generate_all(&catalog, config)?;

    if args.check {
        check_schema(&graph)?;
    }

    info!(
        entities = catalog.len(),
        types = graph.len(),
        "Generated input types"
    );

    match format {
        OutputFormat::Sdl => Ok(graph.to_sdl()),
        OutputFormat::Json => output::to_pretty_json(&graph.to_json()),
        OutputFormat::Table => Ok(output::types_table(&graph)),
    }
}

/// Registers the generated types with a throwaway async-graphql schema so
/// that anything the server would reject fails here instead.
fn check_schema(graph: &InputTypeGraph) -> Result<()> {
    let query = Object::new("Query").field(Field::new(
        "_generated",
        TypeRef::named(TypeRef::BOOLEAN),
        |_ctx| FieldFuture::new(async { Ok(None::<Value>) }),
    ));
    graph.build_schema(query)?;
    info!("async-graphql accepted the generated types");
    Ok(())
}
