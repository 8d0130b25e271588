//! Metadata block extraction for raw text documents.
//!
//! A well-formed document opens with a `---` delimiter line, carries
//! `key: value` metadata lines, and closes with a matching `---` line; the
//! body is everything after. Documents without that shape pass through
//! untouched with no metadata, never as an error.
//!
//! The parser is deliberately minimal: line-oriented, one level of lists,
//! no nesting, no recursion. Malformed lines are skipped, not fatal.

mod value;

pub use value::{coerce_scalar, unquote};

use serde_json::Value;

use crate::document::JsonMap;

const DELIMITER: &str = "---";

/// A raw document split into its metadata block and body.
#[derive(Debug, Clone)]
pub struct RawDocument {
    /// Parsed metadata, `None` when the document has no block.
    pub metadata: Option<JsonMap>,
    /// Body text with the metadata block removed.
    pub body: String,
}

/// Split a raw document into metadata block and body.
///
/// Returns `{metadata: None, body: input}` when the delimiter shape is
/// absent (identity fallback).
pub fn parse(input: &str) -> RawDocument {
    let Some(after_open) = strip_opening_delimiter(input) else {
        return RawDocument {
            metadata: None,
            body: input.to_string(),
        };
    };

    // Scan for the closing delimiter line
    let mut offset = 0;
    for line in after_open.split_inclusive('\n') {
        if is_delimiter(line) {
            let block = &after_open[..offset];
            let body = &after_open[offset + line.len()..];
            return RawDocument {
                metadata: Some(parse_block(block)),
                body: body.to_string(),
            };
        }
        offset += line.len();
    }

    // Opening delimiter without a closing one: not a metadata block
    RawDocument {
        metadata: None,
        body: input.to_string(),
    }
}

/// Consume the opening delimiter line, returning the remainder.
fn strip_opening_delimiter(input: &str) -> Option<&str> {
    let (first, rest) = match input.split_once('\n') {
        Some(pair) => pair,
        None => (input, ""),
    };
    is_delimiter(first).then_some(rest)
}

#[inline]
fn is_delimiter(line: &str) -> bool {
    line.trim_end() == DELIMITER
}

/// Parse the metadata lines between the delimiters.
///
/// `key: value` becomes a coerced scalar; a bare `key:` starts a list fed by
/// subsequent `- item` lines; `[a, b]` is an inline list. Lines without a
/// colon are skipped.
fn parse_block(block: &str) -> JsonMap {
    let mut map = JsonMap::new();
    let mut lines = block.lines().peekable();

    while let Some(line) = lines.next() {
        let line = line.trim_end();
        if line.trim().is_empty() {
            continue;
        }

        let Some((key, rest)) = line.split_once(':') else {
            continue;
        };
        let key = key.trim();
        if key.is_empty() {
            continue;
        }
        let raw_value = rest.trim();

        let value = if raw_value.is_empty() {
            // Bare colon: collect the `- item` lines that follow
            let mut items = Vec::new();
            while let Some(next) = lines.peek() {
                let Some(item) = next.trim_start().strip_prefix("- ") else {
                    break;
                };
                items.push(coerce_scalar(item));
                lines.next();
            }
            Value::Array(items)
        } else if raw_value.starts_with('[') && raw_value.ends_with(']') {
            let inner = &raw_value[1..raw_value.len() - 1];
            let items = inner
                .split(',')
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .map(coerce_scalar)
                .collect();
            Value::Array(items)
        } else {
            coerce_scalar(raw_value)
        };

        map.insert(key.to_string(), value);
    }

    map
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_well_formed_block() {
        let doc = parse("---\ntitle: Hello\ndraft: false\n---\nbody here");
        let meta = doc.metadata.unwrap();
        assert_eq!(meta["title"], json!("Hello"));
        assert_eq!(meta["draft"], json!(false));
        assert_eq!(doc.body, "body here");
    }

    #[test]
    fn test_no_block_is_identity() {
        let input = "# Just a heading\n\nNo metadata here.";
        let doc = parse(input);
        assert!(doc.metadata.is_none());
        assert_eq!(doc.body, input);
    }

    #[test]
    fn test_unclosed_block_is_identity() {
        let input = "---\ntitle: Oops\nno closing line";
        let doc = parse(input);
        assert!(doc.metadata.is_none());
        assert_eq!(doc.body, input);
    }

    #[test]
    fn test_delimiter_not_on_first_line() {
        let input = "intro\n---\ntitle: Hidden\n---\n";
        assert!(parse(input).metadata.is_none());
    }

    #[test]
    fn test_dash_list() {
        let doc = parse("---\ntags:\n- a\n- b\n---\n");
        let meta = doc.metadata.unwrap();
        assert_eq!(meta["tags"], json!(["a", "b"]));
    }

    #[test]
    fn test_dash_list_stops_at_next_key() {
        let doc = parse("---\ntags:\n- a\ntitle: After\n---\n");
        let meta = doc.metadata.unwrap();
        assert_eq!(meta["tags"], json!(["a"]));
        assert_eq!(meta["title"], json!("After"));
    }

    #[test]
    fn test_inline_list() {
        let doc = parse("---\ntags: [rust, 'web dev', \"cli\"]\n---\n");
        let meta = doc.metadata.unwrap();
        assert_eq!(meta["tags"], json!(["rust", "web dev", "cli"]));
    }

    #[test]
    fn test_empty_list_forms() {
        let doc = parse("---\ntags: []\nalso:\n---\n");
        let meta = doc.metadata.unwrap();
        assert_eq!(meta["tags"], json!([]));
        assert_eq!(meta["also"], json!([]));
    }

    #[test]
    fn test_value_with_colon() {
        let doc = parse("---\nurl: https://example.com/page\n---\n");
        let meta = doc.metadata.unwrap();
        assert_eq!(meta["url"], json!("https://example.com/page"));
    }

    #[test]
    fn test_malformed_lines_skipped() {
        let doc = parse("---\ntitle: Ok\nthis line has no colon\n: no key\n---\nbody");
        let meta = doc.metadata.unwrap();
        assert_eq!(meta.len(), 1);
        assert_eq!(meta["title"], json!("Ok"));
        assert_eq!(doc.body, "body");
    }

    #[test]
    fn test_crlf_tolerated() {
        let doc = parse("---\r\ntitle: Windows\r\n---\r\nbody");
        let meta = doc.metadata.unwrap();
        assert_eq!(meta["title"], json!("Windows"));
        assert_eq!(doc.body, "body");
    }

    #[test]
    fn test_end_to_end_example() {
        let doc = parse("---\ntitle: Hello\ntags:\n- a\n- b\n---\n# Hi\nSome text.");
        let meta = doc.metadata.as_ref().unwrap();
        assert_eq!(meta["title"], json!("Hello"));
        assert_eq!(meta["tags"], json!(["a", "b"]));
        assert_eq!(doc.body, "# Hi\nSome text.");
    }

    #[test]
    fn test_empty_input() {
        let doc = parse("");
        assert!(doc.metadata.is_none());
        assert_eq!(doc.body, "");
    }

    #[test]
    fn test_delimiter_only() {
        // "---" alone has no closing delimiter
        assert!(parse("---").metadata.is_none());
        assert!(parse("---\n").metadata.is_none());
    }

    #[test]
    fn test_empty_block() {
        let doc = parse("---\n---\nbody");
        assert_eq!(doc.metadata.unwrap().len(), 0);
        assert_eq!(doc.body, "body");
    }
}
