//! `[authors.<key>]` tables: the injected author directory.
//!
//! A fixed, read-only lookup table. It is passed into the normalizer
//! rather than read from a module-level constant so tests can substitute
//! fixtures.

use std::collections::BTreeMap;

use serde::Deserialize;

use crate::document::Author;

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(transparent)]
pub struct AuthorDirectory {
    entries: BTreeMap<String, Author>,
}

impl AuthorDirectory {
    #[cfg(test)]
    pub fn from_entries(entries: impl IntoIterator<Item = (String, Author)>) -> Self {
        Self {
            entries: entries.into_iter().collect(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Resolve a metadata author key to a full author record.
    ///
    /// Unknown keys degrade to a name-only author; a missing key falls back
    /// to the first directory entry, or an anonymous placeholder when the
    /// directory is empty.
    pub fn resolve(&self, key: Option<&str>) -> Author {
        match key {
            Some(key) => self
                .entries
                .get(key)
                .cloned()
                .unwrap_or_else(|| Author::named(key)),
            None => self
                .entries
                .values()
                .next()
                .cloned()
                .unwrap_or_else(|| Author::named("Anonymous")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::test_parse_config;

    #[test]
    fn test_parsing() {
        let config = test_parse_config(
            "[authors.jane]\nname = \"Jane Doe\"\nbio = \"Writes things\"\n\n[authors.jane.links]\ngithub = \"https://github.com/jane\"",
        );
        let jane = config.authors.resolve(Some("jane"));
        assert_eq!(jane.name, "Jane Doe");
        assert_eq!(jane.bio.as_deref(), Some("Writes things"));
        assert_eq!(
            jane.links.get("github").map(String::as_str),
            Some("https://github.com/jane")
        );
    }

    #[test]
    fn test_unknown_key_degrades_to_name() {
        let directory = AuthorDirectory::default();
        let author = directory.resolve(Some("ghost"));
        assert_eq!(author.name, "ghost");
        assert!(author.bio.is_none());
    }

    #[test]
    fn test_missing_key_falls_back() {
        let directory = AuthorDirectory::from_entries([(
            "a".to_string(),
            Author::named("First Author"),
        )]);
        assert_eq!(directory.resolve(None).name, "First Author");

        let empty = AuthorDirectory::default();
        assert_eq!(empty.resolve(None).name, "Anonymous");
    }
}
