//! Quill - a content resolution and derivation pipeline for blogs.

#![allow(dead_code)]

mod cli;
mod config;
mod derive;
mod document;
mod logger;
mod markup;
mod matter;
mod related;
mod resolve;
mod utils;

use anyhow::Result;
use clap::{ColorChoice, Parser};
use cli::{Cli, Commands};
use config::SiteConfig;

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Set global color override based on CLI option
    match cli.color {
        ColorChoice::Always => owo_colors::set_override(true),
        ColorChoice::Never => owo_colors::set_override(false),
        ColorChoice::Auto => {} // owo-colors auto-detects TTY
    }

    logger::set_verbose(cli.verbose);

    let config = SiteConfig::load(&cli.config)?;

    match &cli.command {
        Commands::List { args } => cli::list::run_list(args, &config),
        Commands::Show {
            slug,
            toc,
            toc_depth,
            pretty,
        } => cli::show::run_show(slug, *toc, *toc_depth, *pretty, &config),
        Commands::Categories { pretty } => cli::categories::run_categories(*pretty, &config),
        Commands::Related {
            slug,
            limit,
            pretty,
        } => cli::related::run_related(slug, *limit, *pretty, &config),
        Commands::Render { path } => cli::render::run_render(path),
    }
}
