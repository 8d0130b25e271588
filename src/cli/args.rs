//! Command-line interface definitions.

use clap::{ColorChoice, Parser, Subcommand};
use std::path::PathBuf;

/// Quill content pipeline CLI
#[derive(Parser, Debug, Clone)]
#[command(version, about, long_about = None, arg_required_else_help = true)]
pub struct Cli {
    /// Control colored output (auto, always, never)
    #[arg(long, global = true, default_value = "auto")]
    pub color: ColorChoice,

    /// Config file path (default: quill.toml)
    #[arg(short = 'C', long, global = true, default_value = "quill.toml", value_hint = clap::ValueHint::FilePath)]
    pub config: PathBuf,

    /// Enable verbose output for debugging
    #[arg(short = 'V', long, global = true)]
    pub verbose: bool,

    /// subcommands
    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// List published documents
    #[command(visible_alias = "l")]
    List {
        #[command(flatten)]
        args: ListArgs,
    },

    /// Show a single document by slug
    #[command(visible_alias = "s")]
    Show {
        /// Document slug (a display label is accepted and normalized)
        slug: String,

        /// Include a table of contents built from the document body
        #[arg(short, long)]
        toc: bool,

        /// Maximum heading depth to include in the table of contents
        #[arg(long, default_value_t = 3, value_parser = clap::value_parser!(u8).range(1..=6))]
        toc_depth: u8,

        /// Pretty-print JSON output
        #[arg(short, long)]
        pretty: bool,
    },

    /// List categories with document counts
    #[command(visible_alias = "c")]
    Categories {
        /// Pretty-print JSON output
        #[arg(short, long)]
        pretty: bool,
    },

    /// Rank documents related to the given one by shared tags
    #[command(visible_alias = "r")]
    Related {
        /// Reference document slug
        slug: String,

        /// Maximum number of related documents to return
        #[arg(short, long, default_value_t = 3)]
        limit: usize,

        /// Pretty-print JSON output
        #[arg(short, long)]
        pretty: bool,
    },

    /// Render a raw document to HTML (metadata block stripped)
    Render {
        /// File to render. Use `-` to read from stdin.
        #[arg(value_hint = clap::ValueHint::FilePath)]
        path: PathBuf,
    },
}

/// List command arguments.
#[derive(clap::Args, Debug, Clone)]
pub struct ListArgs {
    /// Only documents in this category (slug or label)
    #[arg(short, long)]
    pub category: Option<String>,

    /// Only documents carrying this tag (slug or label)
    #[arg(short, long)]
    pub tag: Option<String>,

    /// Only documents flagged as featured
    #[arg(short, long)]
    pub featured: bool,

    /// Pretty-print JSON output
    #[arg(short, long)]
    pub pretty: bool,
}
