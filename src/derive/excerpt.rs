//! Excerpt derivation for documents without an explicit description.

use crate::config::ExcerptConfig;
use crate::markup::plain_text;

/// Derive an excerpt from raw body text.
///
/// A manual separator (`<!-- more -->` by default) found verbatim in the
/// body wins: the text before its first occurrence becomes the excerpt.
/// Otherwise the first non-empty, non-heading paragraph is used. Either way
/// the result is reduced to plain text and truncated on a word boundary to
/// the configured maximum, with the ellipsis marker appended when cut.
pub fn derive_excerpt(body: &str, config: &ExcerptConfig) -> String {
    let candidate = match manual_split(body, &config.separator) {
        Some(before) => before.to_string(),
        None => first_paragraph(body).unwrap_or_default(),
    };

    let plain = plain_text(&candidate);
    truncate_on_word(&plain, config.max_length, &config.marker)
}

/// Split at the manual excerpt separator, if present.
fn manual_split<'a>(body: &'a str, separator: &str) -> Option<&'a str> {
    if separator.is_empty() {
        return None;
    }
    body.split_once(separator).map(|(before, _)| before)
}

/// First blank-line separated block that still has text once heading lines
/// are dropped.
fn first_paragraph(body: &str) -> Option<String> {
    for block in body.split("\n\n") {
        let text: Vec<&str> = block
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty() && !is_heading(line))
            .collect();
        if !text.is_empty() {
            return Some(text.join(" "));
        }
    }
    None
}

/// Heading lines in either body shape: `#`-prefixed dialect headings, or
/// already-rendered `<h1>`..`<h6>` elements from a remote body.
#[inline]
fn is_heading(line: &str) -> bool {
    if line.starts_with('#') {
        return true;
    }
    line.strip_prefix("<h")
        .or_else(|| line.strip_prefix("<H"))
        .and_then(|rest| rest.as_bytes().first())
        .is_some_and(|b| (b'1'..=b'6').contains(b))
}

/// Truncate to `max_length` characters on a word boundary, appending
/// `marker` when anything was cut. Never leaves a partial word behind.
fn truncate_on_word(s: &str, max_length: usize, marker: &str) -> String {
    if s.chars().count() <= max_length {
        return s.to_string();
    }

    let cut: String = s.chars().take(max_length).collect();
    let head = match cut.rfind(char::is_whitespace) {
        Some(idx) => cut[..idx].trim_end(),
        None => cut.as_str(),
    };
    format!("{head}{marker}")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(max_length: usize) -> ExcerptConfig {
        ExcerptConfig {
            max_length,
            ..ExcerptConfig::default()
        }
    }

    #[test]
    fn test_first_paragraph_skips_headings() {
        let body = "# Title\n\n## Section\n\nThe real opening paragraph.\n\nSecond one.";
        assert_eq!(
            derive_excerpt(body, &config(200)),
            "The real opening paragraph."
        );
    }

    #[test]
    fn test_heading_and_text_in_one_block() {
        let body = "# Hi\nSome text.";
        assert_eq!(derive_excerpt(body, &config(200)), "Some text.");
    }

    #[test]
    fn test_html_heading_elements_skipped() {
        // Remote bodies arrive pre-rendered; their heading elements must
        // not leak into the excerpt any more than `#` lines do
        let body = "<h1>Title</h1>\n<p>Body text.</p>";
        assert_eq!(derive_excerpt(body, &config(200)), "Body text.");

        let body = "<h2 id=\"intro\">Intro</h2>\n\n<p>The opening.</p>";
        assert_eq!(derive_excerpt(body, &config(200)), "The opening.");

        // Non-heading elements starting with `<h` survive
        let body = "<header>kept</header>";
        assert_eq!(derive_excerpt(body, &config(200)), "kept");
    }

    #[test]
    fn test_inline_syntax_stripped() {
        let body = "Read **this** and *that* with `code` via [a link](https://x.io).";
        assert_eq!(
            derive_excerpt(body, &config(200)),
            "Read this and that with code via a link."
        );
    }

    #[test]
    fn test_manual_separator_wins() {
        let body = "Short teaser here.\n<!-- more -->\nThe rest of a very long article.";
        assert_eq!(derive_excerpt(body, &config(200)), "Short teaser here.");
    }

    #[test]
    fn test_truncated_on_word_boundary() {
        let body = "alpha beta gamma delta epsilon";
        let excerpt = derive_excerpt(body, &config(12));
        assert_eq!(excerpt, "alpha beta…");
    }

    #[test]
    fn test_truncation_length_bound() {
        let body = "word ".repeat(100);
        let excerpt = derive_excerpt(&body, &config(50));
        // max length plus the marker itself
        assert!(excerpt.chars().count() <= 50 + 1);
        assert!(excerpt.ends_with('…'));
    }

    #[test]
    fn test_no_partial_markup_in_excerpt() {
        let body = format!("Intro with a [link]({}) inside.", "https://example.com");
        let excerpt = derive_excerpt(&body, &config(200));
        assert!(!excerpt.contains('<'));
        assert!(!excerpt.contains('['));
    }

    #[test]
    fn test_empty_body() {
        assert_eq!(derive_excerpt("", &config(200)), "");
    }
}
