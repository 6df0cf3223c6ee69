pub mod generate;
pub mod list;
pub mod show;

use std::path::Path;

use anyhow::{Context, Result};
use relgql_core::SchemaCatalog;
use relgql_graphql::{GeneratorConfig, InputTypeGenerator, InputTypeGraph};
use tracing::{debug, warn};

fn load_catalog(path: &Path) -> Result<SchemaCatalog> {
    let catalog = SchemaCatalog::load(path)
        .inspect_err(|e| warn!(category = %e.category(), error = %e, "Schema description rejected"))
        .with_context(|| format!("Cannot load schema description {}", path.display()))?;
    debug!(path = %path.display(), entities = catalog.len(), "Loaded schema description");
    Ok(catalog)
}

/// Runs a full generation pass over every entity in `catalog`.
fn generate_all(catalog: &SchemaCatalog, config: &GeneratorConfig) -> Result<InputTypeGraph> {
    let mut generator = InputTypeGenerator::new(catalog, config.clone());
    generator.build_all()?;
    Ok(generator.finish()?)
}
