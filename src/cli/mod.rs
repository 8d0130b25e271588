//! Command-line interface module.

mod args;
pub mod categories;
pub mod list;
pub mod related;
pub mod render;
pub mod show;

pub use args::{Cli, Commands, ListArgs};

use anyhow::Result;
use serde::Serialize;
use serde_json::{Value, json};

use crate::document::Document;

/// Serialize a value to stdout, compact or pretty.
fn print_json<T: Serialize>(value: &T, pretty: bool) -> Result<()> {
    let formatted = if pretty {
        serde_json::to_string_pretty(value)?
    } else {
        serde_json::to_string(value)?
    };
    println!("{formatted}");
    Ok(())
}

/// Listing-shaped view of a document: identity and derived fields, no body.
fn summarize(doc: &Document) -> Value {
    json!({
        "slug": doc.slug,
        "title": doc.title,
        "date": doc.date,
        "category": doc.category,
        "tags": doc.tags,
        "excerpt": doc.excerpt,
        "reading_time_minutes": doc.reading_time_minutes,
    })
}
