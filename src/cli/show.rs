//! Show command implementation.

use anyhow::Result;
use serde_json::Value;

use super::print_json;
use crate::config::SiteConfig;
use crate::derive::{build_toc, extract_headings};
use crate::log;
use crate::resolve::{Resolution, Resolver};

/// Execute show command
///
/// Not-found and malformed are reported, not fatal; the process only fails
/// on config or IO errors.
pub fn run_show(slug: &str, toc: bool, toc_depth: u8, pretty: bool, config: &SiteConfig) -> Result<()> {
    let resolver = Resolver::new(config);

    let doc = match resolver.by_slug(slug) {
        Resolution::Found(doc) => doc,
        Resolution::NotFound => {
            log!("show"; "no document `{slug}`");
            return Ok(());
        }
        Resolution::Malformed(reason) => {
            log!("error"; "document `{slug}` is malformed: {reason}");
            return Ok(());
        }
    };

    let mut output = serde_json::to_value(&doc)?;
    if toc {
        let tree = build_toc(&extract_headings(&doc.body_raw), toc_depth);
        if let Value::Object(map) = &mut output {
            map.insert("toc".to_string(), serde_json::to_value(tree)?);
        }
    }

    print_json(&output, pretty)
}
