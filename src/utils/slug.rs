//! The one shared slug normalizer.
//!
//! Document slugs, category/tag URL segments, and heading anchors all go
//! through [`slugify`] so two occurrences of the same visible label always
//! resolve to the same identifier.

use deunicode::deunicode;

/// Normalize a human-readable label to a URL-safe identifier.
///
/// Transliterates Unicode to ASCII, lowercases, maps whitespace runs to a
/// single hyphen, drops everything that is not alphanumeric or a hyphen,
/// and trims leading/trailing hyphens.
///
/// The function is idempotent: `slugify(slugify(x)) == slugify(x)`.
///
/// # Example
/// ```ignore
/// assert_eq!(slugify("Hello, Wörld!"), "hello-world");
/// ```
pub fn slugify(label: &str) -> String {
    let ascii = deunicode(label);
    let mut slug = String::with_capacity(ascii.len());
    let mut pending_hyphen = false;

    for c in ascii.chars() {
        if c.is_ascii_alphanumeric() {
            if pending_hyphen && !slug.is_empty() {
                slug.push('-');
            }
            pending_hyphen = false;
            slug.push(c.to_ascii_lowercase());
        } else if c.is_whitespace() || c == '-' {
            pending_hyphen = true;
        }
        // Everything else (punctuation, symbols) is dropped without
        // becoming a separator
    }

    slug
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic() {
        assert_eq!(slugify("Hello World"), "hello-world");
        assert_eq!(slugify("Rust 2024"), "rust-2024");
    }

    #[test]
    fn test_punctuation_dropped() {
        assert_eq!(slugify("Hello, World!"), "hello-world");
        assert_eq!(slugify("C'est la vie"), "cest-la-vie");
    }

    #[test]
    fn test_whitespace_collapsed() {
        assert_eq!(slugify("a   b\t c"), "a-b-c");
        assert_eq!(slugify("  padded  "), "padded");
    }

    #[test]
    fn test_existing_hyphens_kept() {
        assert_eq!(slugify("already-a-slug"), "already-a-slug");
        assert_eq!(slugify("--edge--case--"), "edge-case");
    }

    #[test]
    fn test_unicode_transliterated() {
        assert_eq!(slugify("Wörld Café"), "world-cafe");
    }

    #[test]
    fn test_idempotent() {
        for label in ["Hello, World!", "Wörld Café", "a   b", "MiXeD CaSe", ""] {
            let once = slugify(label);
            assert_eq!(slugify(&once), once, "not idempotent for {label:?}");
        }
    }

    #[test]
    fn test_empty_and_symbol_only() {
        assert_eq!(slugify(""), "");
        assert_eq!(slugify("!!!"), "");
    }
}
