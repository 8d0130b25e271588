//! Related command implementation.

use anyhow::Result;

use super::{print_json, summarize};
use crate::config::SiteConfig;
use crate::log;
use crate::resolve::Resolver;
use crate::utils::plural_count;

/// Execute related command
pub fn run_related(slug: &str, limit: usize, pretty: bool, config: &SiteConfig) -> Result<()> {
    let resolver = Resolver::new(config);
    let related = resolver.related(slug, limit);

    log!("related"; "found {}", plural_count(related.len(), "related document"));

    let summaries: Vec<_> = related.iter().map(summarize).collect();
    print_json(&summaries, pretty)
}
