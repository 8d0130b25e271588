//! Categories command implementation.

use anyhow::Result;
use serde_json::json;

use super::print_json;
use crate::config::SiteConfig;
use crate::resolve::Resolver;

/// Execute categories command
pub fn run_categories(pretty: bool, config: &SiteConfig) -> Result<()> {
    let resolver = Resolver::new(config);

    let categories: Vec<_> = resolver
        .categories()
        .into_iter()
        .map(|(category, count)| {
            json!({
                "name": category.name,
                "slug": category.slug,
                "count": count,
            })
        })
        .collect();

    print_json(&categories, pretty)
}
