//! Render command implementation.

use std::fs;
use std::io::Read;
use std::path::Path;

use anyhow::{Context, Result};

use crate::markup;
use crate::matter;

/// Execute render command
///
/// Strips the metadata block, renders the body, prints the HTML fragment.
pub fn run_render(path: &Path) -> Result<()> {
    let raw = if path == Path::new("-") {
        let mut buffer = String::new();
        std::io::stdin()
            .read_to_string(&mut buffer)
            .context("reading stdin")?;
        buffer
    } else {
        fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?
    };

    let parsed = matter::parse(&raw);
    println!("{}", markup::render(parsed.body.trim()));
    Ok(())
}
