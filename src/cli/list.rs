//! List command implementation.

use anyhow::Result;

use super::{ListArgs, print_json, summarize};
use crate::config::SiteConfig;
use crate::log;
use crate::resolve::Resolver;
use crate::utils::plural_count;
use crate::utils::slug::slugify;

/// Execute list command
pub fn run_list(args: &ListArgs, config: &SiteConfig) -> Result<()> {
    let resolver = Resolver::new(config);

    // Start from the most selective query, then compose remaining filters
    let mut docs = if let Some(category) = &args.category {
        resolver.by_category(category)
    } else if let Some(tag) = &args.tag {
        resolver.by_tag(tag)
    } else if args.featured {
        resolver.featured()
    } else {
        resolver.documents()
    };
    if args.category.is_some()
        && let Some(tag) = &args.tag
    {
        let tag_slug = slugify(tag);
        docs.retain(|d| d.tags.iter().any(|t| slugify(t) == tag_slug));
    }
    if args.featured {
        docs.retain(|d| d.featured);
    }

    log!("list"; "found {}", plural_count(docs.len(), "document"));

    let summaries: Vec<_> = docs.iter().map(summarize).collect();
    print_json(&summaries, args.pretty)
}
