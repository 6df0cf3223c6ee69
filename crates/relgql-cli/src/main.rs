mod cli;
mod commands;
mod config;
mod observability;
mod output;

use anyhow::Result;
use clap::Parser;
use tracing::debug;

use cli::{Cli, Commands, OutputFormat};
use output::print_error;

fn main() {
    if let Err(e) = run() {
        print_error(&format!("{e:#}"));
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    observability::init_tracing(cli.log_level.as_deref());
    let cfg = config::load(cli.config.as_deref())?;
    if let (None, Some(level)) = (&cli.log_level, &cfg.log_level) {
        observability::apply_logging_level(level);
    }
    debug!(categories = ?cfg.generator.categories, "Loaded configuration");

    let generator = &cfg.generator;
    match &cli.command {
        Commands::Generate(args) => {
            let format = cli.format.unwrap_or(OutputFormat::Sdl);
            commands::generate::generate(args, generator, format)?;
        }
        Commands::List(args) => {
            let format = cli.format.unwrap_or(OutputFormat::Table);
            commands::list::list(args, generator, format)?;
        }
        Commands::Show(args) => {
            let format = cli.format.unwrap_or(OutputFormat::Sdl);
            commands::show::show(args, generator, format)?;
        }
    }

    Ok(())
}
