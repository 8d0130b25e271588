//! External data providers.
//!
//! Two sources of record feed the resolver: a fetch-style remote content
//! service and a local directory of raw text documents. Both sit behind
//! traits so tests substitute fixtures; the resolver itself never touches
//! a socket or the filesystem directly.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use jwalk::WalkDir;
use serde_json::Value;

use crate::config::SiteConfig;
use crate::debug;
use crate::utils::slug::slugify;

/// Fetch-style access to the remote content service.
///
/// Any failure (transport error, non-success status, unparseable body) is
/// an `Err`; the resolver treats it as an empty result and falls back.
pub trait RemoteProvider {
    /// Fetch the JSON payload for an endpoint, e.g. `posts` or
    /// `posts/my-slug`.
    fn fetch(&self, endpoint: &str) -> Result<Value>;
}

/// Remote provider over HTTP.
///
/// Timeouts are the transport's business: whatever `ureq` enforces is the
/// deadline; past it the call errors and the resolver falls back.
pub struct HttpRemote {
    base_url: String,
}

impl HttpRemote {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
        }
    }
}

impl RemoteProvider for HttpRemote {
    fn fetch(&self, endpoint: &str) -> Result<Value> {
        let url = format!("{}/{}", self.base_url.trim_end_matches('/'), endpoint);
        // ureq surfaces 4xx/5xx as Err(StatusCode), which is exactly the
        // failure signal the resolver wants
        let response = ureq::get(&url)
            .call()
            .with_context(|| format!("GET {url}"))?;
        let body = response
            .into_body()
            .read_to_string()
            .with_context(|| format!("reading body of {url}"))?;
        serde_json::from_str(&body).with_context(|| format!("parsing body of {url}"))
    }
}

/// One raw local document, keyed by its filename-derived slug.
#[derive(Debug, Clone)]
pub struct LocalDocument {
    pub slug: String,
    pub raw: String,
}

/// Enumeration of raw text documents in the content directory.
pub trait LocalProvider {
    fn documents(&self) -> Result<Vec<LocalDocument>>;

    /// Single document by slug. The default scans the enumeration.
    fn document(&self, slug: &str) -> Result<Option<LocalDocument>> {
        Ok(self.documents()?.into_iter().find(|d| d.slug == slug))
    }
}

/// Local provider over a content directory on disk.
pub struct FsProvider {
    dir: PathBuf,
    extension: String,
}

impl FsProvider {
    pub fn new(dir: impl Into<PathBuf>, extension: impl Into<String>) -> Self {
        Self {
            dir: dir.into(),
            extension: extension.into(),
        }
    }

    pub fn from_config(config: &SiteConfig) -> Self {
        Self::new(config.content_dir(), config.content.extension.clone())
    }

    fn content_files(&self) -> Vec<PathBuf> {
        let mut files: Vec<PathBuf> = WalkDir::new(&self.dir)
            .into_iter()
            .filter_map(Result::ok)
            .filter(|e| e.file_type().is_file())
            .map(|e| e.path())
            .filter(|p| {
                p.extension()
                    .and_then(|e| e.to_str())
                    .is_some_and(|e| e.eq_ignore_ascii_case(&self.extension))
            })
            .collect();
        // Deterministic enumeration order regardless of walk parallelism
        files.sort();
        files
    }
}

impl LocalProvider for FsProvider {
    fn documents(&self) -> Result<Vec<LocalDocument>> {
        // A missing content directory means zero documents, not an error
        if !self.dir.is_dir() {
            return Ok(Vec::new());
        }

        let mut documents = Vec::new();
        for path in self.content_files() {
            let Some(slug) = slug_from_path(&path) else {
                continue;
            };
            match fs::read_to_string(&path) {
                Ok(raw) => documents.push(LocalDocument { slug, raw }),
                Err(err) => {
                    // Unreadable file: skip it, keep the batch alive
                    debug!("local"; "skipping {}: {}", path.display(), err);
                }
            }
        }
        Ok(documents)
    }
}

/// Filename-derived slug: the stem run through the shared slug rule.
fn slug_from_path(path: &Path) -> Option<String> {
    let stem = path.file_stem()?.to_str()?;
    let slug = slugify(stem);
    (!slug.is_empty()).then_some(slug)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn write_doc(dir: &Path, name: &str, content: &str) {
        fs::write(dir.join(name), content).unwrap();
    }

    #[test]
    fn test_missing_directory_is_empty() {
        let provider = FsProvider::new("/definitely/not/a/real/dir", "md");
        assert!(provider.documents().unwrap().is_empty());
    }

    #[test]
    fn test_enumerates_matching_extension() {
        let temp = TempDir::new().unwrap();
        write_doc(temp.path(), "first-post.md", "---\ntitle: A\n---\nbody");
        write_doc(temp.path(), "notes.txt", "not content");
        write_doc(temp.path(), "second-post.md", "body only");

        let provider = FsProvider::new(temp.path(), "md");
        let docs = provider.documents().unwrap();
        assert_eq!(docs.len(), 2);
        // Sorted by path: deterministic order
        assert_eq!(docs[0].slug, "first-post");
        assert_eq!(docs[1].slug, "second-post");
    }

    #[test]
    fn test_slug_from_filename_is_normalized() {
        let temp = TempDir::new().unwrap();
        write_doc(temp.path(), "My Fancy Post.md", "body");

        let provider = FsProvider::new(temp.path(), "md");
        let docs = provider.documents().unwrap();
        assert_eq!(docs[0].slug, "my-fancy-post");
    }

    #[test]
    fn test_recurses_into_subdirectories() {
        let temp = TempDir::new().unwrap();
        fs::create_dir(temp.path().join("2024")).unwrap();
        write_doc(&temp.path().join("2024"), "nested.md", "body");

        let provider = FsProvider::new(temp.path(), "md");
        assert_eq!(provider.documents().unwrap().len(), 1);
    }

    #[test]
    fn test_document_by_slug() {
        let temp = TempDir::new().unwrap();
        write_doc(temp.path(), "hello.md", "body");

        let provider = FsProvider::new(temp.path(), "md");
        assert!(provider.document("hello").unwrap().is_some());
        assert!(provider.document("missing").unwrap().is_none());
    }
}
