//! Inline markup rendering for the platform's constrained dialect.
//!
//! Supported constructs: `#`/`##`/`###` line-prefix headings, `**strong**`,
//! `*emphasis*`, `` `inline code` ``, `[text](url)` links, and blank-line
//! separated paragraphs. Everything else passes through literally; the
//! renderer never fails.
//!
//! Rendering is a sequence of ordered substitution passes over escaped
//! text: headings, then emphasis, then inline code, then links, then
//! paragraph wrapping. The order keeps later passes from corrupting tags an
//! earlier pass already generated.

use std::sync::LazyLock;

use regex::{Captures, Regex};

use crate::utils::{html::escape, slug::slugify};

static H3: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?m)^###[ \t]+(.+)$").unwrap());
static H2: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?m)^##[ \t]+(.+)$").unwrap());
static H1: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?m)^#[ \t]+(.+)$").unwrap());
static STRONG: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\*\*([^*]+)\*\*").unwrap());
static EM: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\*([^*]+)\*").unwrap());
static CODE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"`([^`]+)`").unwrap());
static LINK: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\[([^\]]+)\]\(([^)]+)\)").unwrap());

/// Render body text to an HTML-safe fragment.
///
/// Literal `<`, `>`, `&` and quotes are escaped before any construct is
/// substituted, so document bodies cannot inject markup.
pub fn render(text: &str) -> String {
    let mut html = escape(text).into_owned();

    for (re, level) in [(&H3, 3u8), (&H2, 2), (&H1, 1)] {
        html = re
            .replace_all(&html, |caps: &Captures<'_>| {
                let title = caps[1].trim();
                format!("<h{level} id=\"{}\">{title}</h{level}>", slugify(title))
            })
            .into_owned();
    }

    html = STRONG.replace_all(&html, "<strong>$1</strong>").into_owned();
    html = EM.replace_all(&html, "<em>$1</em>").into_owned();
    html = CODE.replace_all(&html, "<code>$1</code>").into_owned();
    html = LINK
        .replace_all(&html, "<a href=\"$2\">$1</a>")
        .into_owned();

    wrap_paragraphs(&html)
}

/// Reduce body text to plain text.
///
/// Inline constructs are unwrapped to their visible text, then any markup
/// tags (and entities) are stripped. Used by excerpt derivation and word
/// counting.
pub fn plain_text(text: &str) -> String {
    let mut s = LINK.replace_all(text, "$1").into_owned();
    s = STRONG.replace_all(&s, "$1").into_owned();
    s = EM.replace_all(&s, "$1").into_owned();
    s = CODE.replace_all(&s, "$1").into_owned();
    crate::utils::html::strip_tags(&s)
}

/// Group blank-line separated runs of text into `<p>` blocks.
///
/// Heading lines stand alone and are never wrapped.
fn wrap_paragraphs(html: &str) -> String {
    let mut blocks: Vec<String> = Vec::new();
    let mut paragraph: Vec<&str> = Vec::new();

    let mut flush = |paragraph: &mut Vec<&str>, blocks: &mut Vec<String>| {
        if !paragraph.is_empty() {
            blocks.push(format!("<p>{}</p>", paragraph.join(" ")));
            paragraph.clear();
        }
    };

    for line in html.lines() {
        let line = line.trim();
        if line.is_empty() {
            flush(&mut paragraph, &mut blocks);
        } else if is_heading_line(line) {
            flush(&mut paragraph, &mut blocks);
            blocks.push(line.to_string());
        } else {
            paragraph.push(line);
        }
    }
    flush(&mut paragraph, &mut blocks);

    blocks.join("\n")
}

#[inline]
fn is_heading_line(line: &str) -> bool {
    line.starts_with("<h1") || line.starts_with("<h2") || line.starts_with("<h3")
}
