//! Permalink - resolve output paths and urls of static site pages.

mod cli;

use anyhow::Result;
use clap::{ColorChoice, Parser};
use cli::{Cli, Commands};
use tola_permalink::config::PermalinkConfig;

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Set global color override based on CLI option
    match cli.color {
        ColorChoice::Always => owo_colors::set_override(true),
        ColorChoice::Never => owo_colors::set_override(false),
        ColorChoice::Auto => {} // owo-colors auto-detects TTY
    }
    tola_permalink::logger::set_verbose(cli.verbose);

    let config = PermalinkConfig::load(cli.config_path(), cli.config_is_explicit())?;

    match &cli.command {
        Commands::Resolve { args } => cli::resolve::run_resolve(args, &config),
        Commands::Generate { args } => cli::resolve::run_generate(args, &config),
        Commands::Routes { args } => cli::routes::run_routes(args, &config),
    }
}
