//! Table of contents construction.
//!
//! A flat, ordered heading list becomes a tree through an explicit
//! (node, level) stack instead of recursive descent, so arbitrarily deep or
//! skip-level outlines (an `#` directly followed by an `###`) nest
//! correctly without relying on call-stack depth.

use serde::Serialize;

use super::headings::Heading;

/// A node in the table of contents tree.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TocNode {
    #[serde(flatten)]
    pub heading: Heading,
    pub children: Vec<TocNode>,
}

impl TocNode {
    fn new(heading: Heading) -> Self {
        Self {
            heading,
            children: Vec::new(),
        }
    }

    fn level(&self) -> u8 {
        self.heading.level
    }
}

/// Build a TOC tree from an ordered heading list.
///
/// Headings deeper than `max_depth` are excluded. For each heading, the
/// stack is popped while its top is at the same or a deeper level, then the
/// heading attaches under the new top (or as a root when the stack is
/// empty).
pub fn build_toc(headings: &[Heading], max_depth: u8) -> Vec<TocNode> {
    let mut roots: Vec<TocNode> = Vec::new();
    let mut stack: Vec<TocNode> = Vec::new();

    for heading in headings {
        if heading.level > max_depth {
            continue;
        }

        while let Some(top) = stack.pop() {
            if top.level() < heading.level {
                stack.push(top);
                break;
            }
            attach(top, &mut stack, &mut roots);
        }
        stack.push(TocNode::new(heading.clone()));
    }

    while let Some(done) = stack.pop() {
        attach(done, &mut stack, &mut roots);
    }

    roots
}

/// Attach a finished node to the current stack top, or as a root.
fn attach(node: TocNode, stack: &mut [TocNode], roots: &mut Vec<TocNode>) {
    match stack.last_mut() {
        Some(parent) => parent.children.push(node),
        None => roots.push(node),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn h(title: &str, level: u8) -> Heading {
        Heading {
            id: crate::utils::slug::slugify(title),
            title: title.to_string(),
            level,
        }
    }

    #[test]
    fn test_flat_siblings() {
        let toc = build_toc(&[h("a", 2), h("b", 2), h("c", 2)], 3);
        assert_eq!(toc.len(), 3);
        assert!(toc.iter().all(|n| n.children.is_empty()));
    }

    #[test]
    fn test_simple_nesting() {
        let toc = build_toc(&[h("root", 1), h("child", 2), h("grand", 3)], 3);
        assert_eq!(toc.len(), 1);
        assert_eq!(toc[0].children.len(), 1);
        assert_eq!(toc[0].children[0].children.len(), 1);
        assert_eq!(toc[0].children[0].children[0].heading.title, "grand");
    }

    #[test]
    fn test_skip_level_handling() {
        // Levels [1, 3, 2]: the h3 nests under the h1 as its first child,
        // and the h2 becomes a sibling of the h3 (both under the h1)
        let toc = build_toc(&[h("one", 1), h("three", 3), h("two", 2)], 3);
        assert_eq!(toc.len(), 1);
        let root = &toc[0];
        assert_eq!(root.heading.title, "one");
        assert_eq!(root.children.len(), 2);
        assert_eq!(root.children[0].heading.title, "three");
        assert_eq!(root.children[1].heading.title, "two");
        assert!(root.children[1].children.is_empty());
    }

    #[test]
    fn test_max_depth_filters() {
        let toc = build_toc(&[h("one", 1), h("two", 2), h("three", 3)], 2);
        assert_eq!(toc.len(), 1);
        assert_eq!(toc[0].children.len(), 1);
        assert!(toc[0].children[0].children.is_empty());
    }

    #[test]
    fn test_level_reset_to_new_root() {
        let toc = build_toc(&[h("a", 1), h("a-child", 2), h("b", 1)], 3);
        assert_eq!(toc.len(), 2);
        assert_eq!(toc[0].children.len(), 1);
        assert!(toc[1].children.is_empty());
    }

    #[test]
    fn test_empty() {
        assert!(build_toc(&[], 3).is_empty());
    }
}
