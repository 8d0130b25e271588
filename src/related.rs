//! Tag-overlap relatedness ranking.
//!
//! A similarity heuristic, not a nearest-neighbor guarantee: score is the
//! shared-tag count over the larger of the two tag sets, zero-overlap
//! candidates are dropped, and ties keep their enumeration order (the sort
//! is stable), which keeps output reproducible.

use std::collections::BTreeSet;

use crate::document::Document;
use crate::utils::slug::slugify;

/// Overlap score between two tag sets.
///
/// `shared / max(|reference|, |candidate|)`, with tags compared in
/// normalized form so display-case variants still overlap. Returns 0.0
/// when either set is empty.
pub fn relatedness(reference: &[String], candidate: &[String]) -> f64 {
    let reference: BTreeSet<String> = reference.iter().map(|t| slugify(t)).collect();
    let candidate: BTreeSet<String> = candidate.iter().map(|t| slugify(t)).collect();

    let denominator = reference.len().max(candidate.len());
    if denominator == 0 {
        return 0.0;
    }

    let shared = reference.intersection(&candidate).count();
    shared as f64 / denominator as f64
}

/// Rank a candidate pool against a reference document.
///
/// The reference itself and zero-overlap candidates are excluded; the rest
/// sort by descending score, stable on ties, truncated to `limit`.
pub fn rank(reference: &Document, pool: &[Document], limit: usize) -> Vec<Document> {
    let mut scored: Vec<(f64, &Document)> = pool
        .iter()
        .filter(|candidate| candidate.slug != reference.slug)
        .filter_map(|candidate| {
            let score = relatedness(&reference.tags, &candidate.tags);
            (score > 0.0).then_some((score, candidate))
        })
        .collect();

    // Vec::sort_by is stable: equal scores keep pool order
    scored.sort_by(|a, b| b.0.partial_cmp(&a.0).unwrap_or(std::cmp::Ordering::Equal));
    scored.truncate(limit);

    scored.into_iter().map(|(_, doc)| doc.clone()).collect()
}
