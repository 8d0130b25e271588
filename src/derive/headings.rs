//! Heading extraction from body text.

use std::sync::LazyLock;

use regex::Regex;
use serde::Serialize;

use crate::utils::slug::slugify;

static HEADING: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?m)^(#{1,6})[ \t]+(.+)$").unwrap());

/// One heading in a document's outline.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Heading {
    /// Anchor id, derived with the shared slug rule.
    pub id: String,
    pub title: String,
    /// Nesting level, 1 for `#` through 6 for `######`.
    pub level: u8,
}

/// Scan body text line-by-line and collect headings in document order.
pub fn extract_headings(text: &str) -> Vec<Heading> {
    HEADING
        .captures_iter(text)
        .map(|caps| {
            let title = caps[2].trim().to_string();
            Heading {
                id: slugify(&title),
                level: caps[1].len() as u8,
                title,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_in_order() {
        let headings = extract_headings("# One\ntext\n## Two\n### Three");
        assert_eq!(headings.len(), 3);
        assert_eq!(headings[0], Heading { id: "one".into(), title: "One".into(), level: 1 });
        assert_eq!(headings[1].level, 2);
        assert_eq!(headings[2].level, 3);
    }

    #[test]
    fn test_ids_slugged() {
        let headings = extract_headings("## Getting Started, Fast!");
        assert_eq!(headings[0].id, "getting-started-fast");
    }

    #[test]
    fn test_non_heading_lines_ignored() {
        assert!(extract_headings("plain text\nno # heading here").is_empty());
        assert!(extract_headings("#nospace").is_empty());
    }

    #[test]
    fn test_empty_input() {
        assert!(extract_headings("").is_empty());
    }
}
