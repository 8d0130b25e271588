//! `[site]` section: site identity.

use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SiteSectionConfig {
    /// Site title, used by `show` output headers.
    pub title: String,
    /// Canonical base URL of the public site.
    pub url: Option<String>,
}

impl Default for SiteSectionConfig {
    fn default() -> Self {
        Self {
            title: "quill site".to_string(),
            url: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::config::test_parse_config;

    #[test]
    fn test_defaults() {
        let config = test_parse_config("");
        assert_eq!(config.site.title, "quill site");
        assert!(config.site.url.is_none());
    }

    #[test]
    fn test_parsing() {
        let config = test_parse_config("[site]\ntitle = \"My Blog\"\nurl = \"https://blog.example\"");
        assert_eq!(config.site.title, "My Blog");
        assert_eq!(config.site.url.as_deref(), Some("https://blog.example"));
    }
}
