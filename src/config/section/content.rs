//! `[content]` section: local document source.

use std::path::PathBuf;

use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ContentConfig {
    /// Directory holding raw text documents (relative to project root).
    pub dir: PathBuf,
    /// File extension treated as content.
    pub extension: String,
}

impl Default for ContentConfig {
    fn default() -> Self {
        Self {
            dir: PathBuf::from("content"),
            extension: "md".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::test_parse_config;

    #[test]
    fn test_defaults() {
        let config = test_parse_config("");
        assert_eq!(config.content.dir, PathBuf::from("content"));
        assert_eq!(config.content.extension, "md");
    }

    #[test]
    fn test_parsing() {
        let config = test_parse_config("[content]\ndir = \"posts\"\nextension = \"txt\"");
        assert_eq!(config.content.dir, PathBuf::from("posts"));
        assert_eq!(config.content.extension, "txt");
    }
}
