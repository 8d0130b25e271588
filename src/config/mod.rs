//! Site configuration management for `quill.toml`.
//!
//! # Sections
//!
//! | Section          | Purpose                                         |
//! |------------------|-------------------------------------------------|
//! | `[site]`         | Site identity (title, base url)                 |
//! | `[content]`      | Local document directory and extension          |
//! | `[remote]`       | Remote content service endpoint                 |
//! | `[excerpt]`      | Derived excerpt length/marker/separator         |
//! | `[authors.<k>]`  | Injected read-only author directory             |

mod error;
mod section;

pub use error::ConfigError;
pub use section::{AuthorDirectory, ContentConfig, ExcerptConfig, RemoteConfig, SiteSectionConfig};

use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::Result;
use serde::Deserialize;

use crate::log;

/// Root configuration structure representing quill.toml
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    /// Project root directory - parent of config file (internal use only)
    #[serde(skip)]
    pub root: PathBuf,

    pub site: SiteSectionConfig,
    pub content: ContentConfig,
    pub remote: RemoteConfig,
    pub excerpt: ExcerptConfig,
    pub authors: AuthorDirectory,
}

impl SiteConfig {
    /// Load configuration, searching upward from cwd for the config file.
    ///
    /// A missing file yields the default configuration rooted at cwd, so
    /// the CLI works in a bare content directory without ceremony.
    pub fn load(config_name: &Path) -> Result<Self> {
        let Some(path) = find_config_file(config_name) else {
            let mut config = Self::default();
            config.root = std::env::current_dir().unwrap_or_default();
            return Ok(config);
        };

        let mut config = Self::from_path(&path)?;
        config.root = path.parent().map(Path::to_path_buf).unwrap_or_default();
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from file path with unknown field detection.
    fn from_path(path: &Path) -> Result<Self> {
        let content =
            fs::read_to_string(path).map_err(|err| ConfigError::Io(path.to_path_buf(), err))?;

        let (config, ignored) = Self::parse_with_ignored(&content)?;

        if !ignored.is_empty() {
            log!("warning"; "unknown fields in {}, ignoring:", path.display());
            for field in &ignored {
                eprintln!("- {field}");
            }
        }

        Ok(config)
    }

    /// Parse TOML content, collecting any unknown fields.
    fn parse_with_ignored(content: &str) -> Result<(Self, Vec<String>), ConfigError> {
        let mut ignored = Vec::new();
        let deserializer = toml::Deserializer::new(content);
        let config = serde_ignored::deserialize(deserializer, |path: serde_ignored::Path| {
            ignored.push(path.to_string());
        })?;
        Ok((config, ignored))
    }

    /// Validate loaded values.
    fn validate(&self) -> Result<(), ConfigError> {
        if let Some(url) = &self.remote.api_url
            && url::Url::parse(url).is_err()
        {
            return Err(ConfigError::Validation(format!(
                "[remote] api_url is not a valid URL: {url}"
            )));
        }
        if self.excerpt.max_length == 0 {
            return Err(ConfigError::Validation(
                "[excerpt] max_length must be at least 1".to_string(),
            ));
        }
        Ok(())
    }

    /// Absolute path to the local content directory.
    pub fn content_dir(&self) -> PathBuf {
        self.root.join(&self.content.dir)
    }
}

/// Find config file by searching upward from current directory
///
/// Starts from cwd and walks up parent directories until finding
/// `config_name`. Returns the absolute path to the config file if found.
fn find_config_file(config_name: &Path) -> Option<PathBuf> {
    if config_name.is_absolute() {
        return config_name.exists().then(|| config_name.to_path_buf());
    }

    let cwd = std::env::current_dir().ok()?;
    let mut current = cwd.as_path();
    loop {
        let candidate = current.join(config_name);
        if candidate.exists() {
            return Some(candidate);
        }
        match current.parent() {
            Some(parent) => current = parent,
            None => return None, // Reached filesystem root
        }
    }
}

/// Parse a config snippet for section tests.
#[cfg(test)]
pub fn test_parse_config(extra: &str) -> SiteConfig {
    let (parsed, ignored) = SiteConfig::parse_with_ignored(extra).unwrap();
    assert!(ignored.is_empty(), "unexpected unknown fields: {ignored:?}");
    parsed
}
