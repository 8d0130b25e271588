//! Reading time estimation.

use crate::utils::html::strip_tags;

/// Words per minute assumed for the estimate.
const WORDS_PER_MINUTE: usize = 200;

/// Estimate reading time in minutes from rendered or raw body text.
///
/// Markup tags are stripped before counting. Always at least 1, always
/// recomputed, never read from a stored value.
pub fn reading_time_minutes(body: &str) -> u32 {
    let words = strip_tags(body).split_whitespace().count();
    words.div_ceil(WORDS_PER_MINUTE).max(1) as u32
}
