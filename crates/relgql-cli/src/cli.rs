use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use relgql_graphql::Category;

#[derive(Parser)]
#[command(name = "relgql")]
#[command(about = "relgql: GraphQL filter, ordering and mutation input types for relational schemas")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Config file (defaults to ~/.relgql/config.toml)
    #[arg(short, long, global = true, env = "RELGQL_CONFIG")]
    pub config: Option<PathBuf>,

    /// Log level or filter directive (overrides the config file; RUST_LOG wins over both)
    #[arg(short, long, global = true)]
    pub log_level: Option<String>,

    /// Output format
    #[arg(short, long, global = true)]
    pub format: Option<OutputFormat>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// GraphQL schema definition language
    Sdl,
    Json,
    Table,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Generate every configured input type for a schema description
    Generate(GenerateArgs),
    /// List the input types a schema description produces
    List(ListArgs),
    /// Show a single entity input type
    Show(ShowArgs),
}

#[derive(clap::Args)]
pub struct GenerateArgs {
    /// Schema description file (.toml or .json)
    pub schema: PathBuf,
    /// Write output to a file instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,
    /// Also build an async-graphql schema from the generated types
    #[arg(long)]
    pub check: bool,
}

#[derive(clap::Args)]
pub struct ListArgs {
    /// Schema description file (.toml or .json)
    pub schema: PathBuf,
}

#[derive(clap::Args)]
pub struct ShowArgs {
    /// Schema description file (.toml or .json)
    pub schema: PathBuf,
    /// Entity name
    pub entity: String,
    /// Input type category (where, order_by, insert_input, inc_input, set_input, on_conflict)
    #[arg(value_parser = parse_category)]
    pub category: Category,
}

fn parse_category(value: &str) -> Result<Category, String> {
    value.parse().map_err(|e: relgql_graphql::GraphQLError| e.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_definition() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_show() {
        let cli = Cli::try_parse_from([
            "relgql", "show", "blog.toml", "post", "order_by", "--format", "json",
        ])
        .unwrap();

        assert_eq!(cli.format, Some(OutputFormat::Json));
        match cli.command {
            Commands::Show(args) => {
                assert_eq!(args.entity, "post");
                assert_eq!(args.category, Category::OrderBy);
            }
            _ => panic!("expected show"),
        }
    }

    #[test]
    fn test_unknown_category_rejected() {
        let result = Cli::try_parse_from(["relgql", "show", "blog.toml", "post", "group_by"]);
        assert!(result.is_err());
    }
}
