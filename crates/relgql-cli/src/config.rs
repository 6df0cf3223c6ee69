use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use relgql_graphql::GeneratorConfig;
use serde::Deserialize;

/// Contents of the CLI config file.
///
/// ```toml
/// log_level = "debug"
///
/// [generator]
/// descriptions = false
/// categories = ["where", "order_by"]
///
/// [generator.naming]
/// where_suffix = "_filter"
/// ```
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct CliConfig {
    pub log_level: Option<String>,
    pub generator: GeneratorConfig,
}

impl CliConfig {
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: CliConfig = toml::from_str(content)?;
        config.generator.validate()?;
        Ok(config)
    }
}

fn default_config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|home| home.join(".relgql").join("config.toml"))
}

/// Loads the config from `explicit` if given, otherwise from the default
/// location. A missing default file yields the default config; a missing
/// explicit file is an error.
pub fn load(explicit: Option<&Path>) -> Result<CliConfig> {
    let path = match explicit {
        Some(path) => path.to_path_buf(),
        None => match default_config_path() {
            Some(path) if path.exists() => path,
            _ => return Ok(CliConfig::default()),
        },
    };

    let content = fs::read_to_string(&path)
        .with_context(|| format!("Cannot read config file {}", path.display()))?;
    CliConfig::from_toml_str(&content)
        .with_context(|| format!("Invalid config file {}", path.display()))
}
