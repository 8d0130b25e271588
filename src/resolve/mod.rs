//! Remote-first, local-fallback document resolution.
//!
//! Each query attempts the remote content service first; any failure or
//! empty payload falls back to the local content directory, silently. Both
//! paths converge on the [`Normalizer`], so published-only filtering and
//! date-descending order apply identically regardless of source. Nothing
//! is cached across calls; every resolution recomputes derived fields.

mod normalize;
mod provider;

pub use normalize::{NormalizeError, Normalizer};
pub use provider::{FsProvider, HttpRemote, LocalDocument, LocalProvider, RemoteProvider};

use serde_json::Value;

use crate::config::SiteConfig;
use crate::document::{Category, Document, sort_by_date_desc};
use crate::utils::slug::slugify;
use crate::{debug, log};

/// Outcome of a single-document lookup.
///
/// "Not found" and "malformed" are ordinary outcomes here, not errors;
/// modeling them as variants keeps every call site's handling explicit.
#[derive(Debug)]
pub enum Resolution {
    Found(Box<Document>),
    NotFound,
    Malformed(String),
}

impl Resolution {
    pub fn found(self) -> Option<Document> {
        match self {
            Self::Found(doc) => Some(*doc),
            _ => None,
        }
    }
}

/// The source resolver.
pub struct Resolver<'a> {
    config: &'a SiteConfig,
    remote: Option<Box<dyn RemoteProvider + 'a>>,
    local: Box<dyn LocalProvider + 'a>,
}

impl<'a> Resolver<'a> {
    /// Build from configuration: HTTP remote when `[remote]` is active,
    /// filesystem walk of the content directory as the local source.
    pub fn new(config: &'a SiteConfig) -> Self {
        let remote: Option<Box<dyn RemoteProvider>> = if config.remote.is_active() {
            config
                .remote
                .api_url
                .as_ref()
                .map(|url| Box::new(HttpRemote::new(url.clone())) as Box<dyn RemoteProvider>)
        } else {
            None
        };
        Self {
            config,
            remote,
            local: Box::new(FsProvider::from_config(config)),
        }
    }

    /// Build with explicit providers (fixtures in tests).
    pub fn with_providers(
        config: &'a SiteConfig,
        remote: Option<Box<dyn RemoteProvider + 'a>>,
        local: Box<dyn LocalProvider + 'a>,
    ) -> Self {
        Self {
            config,
            remote,
            local,
        }
    }

    fn normalizer(&self) -> Normalizer<'a> {
        Normalizer::new(self.config)
    }

    // ------------------------------------------------------------------
    // Queries
    // ------------------------------------------------------------------

    /// All published documents, newest first.
    pub fn documents(&self) -> Vec<Document> {
        let mut docs = self
            .remote_documents()
            .unwrap_or_else(|| self.local_documents());
        docs.retain(|d| d.published);
        sort_by_date_desc(&mut docs);
        docs
    }

    /// One document by slug.
    ///
    /// Accepts a raw label too; the query is normalized before matching.
    /// Unpublished documents resolve as not found, never as a partial
    /// record.
    pub fn by_slug(&self, slug: &str) -> Resolution {
        let slug = slugify(slug);

        if let Some(remote) = &self.remote {
            match remote.fetch(&format!("posts/{slug}")) {
                Ok(record) if !record.is_null() => match self.normalizer().from_remote(&record) {
                    Ok(doc) if doc.published => return Resolution::Found(Box::new(doc)),
                    Ok(_) => return Resolution::NotFound,
                    Err(err) => {
                        debug!("remote"; "unusable record for `{slug}`: {err}, falling back")
                    }
                },
                Ok(_) => debug!("remote"; "no record for `{slug}`, falling back"),
                Err(err) => debug!("remote"; "fetch failed: {err:#}, falling back"),
            }
        }

        match self.local.document(&slug) {
            Ok(Some(local)) => match self.normalizer().from_local(&local) {
                Ok(doc) if doc.published => Resolution::Found(Box::new(doc)),
                Ok(_) => Resolution::NotFound,
                Err(err) => Resolution::Malformed(err.to_string()),
            },
            Ok(None) => Resolution::NotFound,
            Err(err) => {
                log!("local"; "enumeration failed: {err:#}");
                Resolution::NotFound
            }
        }
    }

    /// Published documents in a category, addressed by slug.
    ///
    /// A document matches on its category slug, its label's normalized
    /// form, or the literal label, in that order.
    pub fn by_category(&self, category_slug: &str) -> Vec<Document> {
        let mut docs = self.documents();
        docs.retain(|d| d.category.matches(category_slug));
        docs
    }

    /// Published documents carrying a tag, addressed by slug.
    pub fn by_tag(&self, tag_slug: &str) -> Vec<Document> {
        let tag_slug = slugify(tag_slug);
        let mut docs = self.documents();
        docs.retain(|d| d.tags.iter().any(|t| slugify(t) == tag_slug));
        docs
    }

    /// Published documents flagged as featured, newest first.
    pub fn featured(&self) -> Vec<Document> {
        let mut docs = self.documents();
        docs.retain(|d| d.featured);
        docs
    }

    /// Categories with document counts.
    ///
    /// Counts come from filtering the resolved set, never from a stored
    /// counter, so they cannot drift. Distinct labels that collapse to one
    /// slug are reported, since matching would then be ambiguous.
    pub fn categories(&self) -> Vec<(Category, usize)> {
        let mut categories: Vec<(Category, usize)> = Vec::new();

        for doc in self.documents() {
            match categories
                .iter_mut()
                .find(|(cat, _)| cat.slug == doc.category.slug)
            {
                Some((cat, count)) => {
                    if cat.name != doc.category.name {
                        log!(
                            "warning";
                            "categories `{}` and `{}` both normalize to `{}`",
                            cat.name, doc.category.name, cat.slug
                        );
                    }
                    *count += 1;
                }
                None => categories.push((doc.category.clone(), 1)),
            }
        }

        categories
    }

    /// Documents related to the one at `slug`, best matches first.
    pub fn related(&self, slug: &str, limit: usize) -> Vec<Document> {
        let pool = self.documents();
        let slug = slugify(slug);
        let Some(reference) = pool.iter().find(|d| d.slug == slug) else {
            return Vec::new();
        };
        crate::related::rank(reference, &pool, limit)
    }

    // ------------------------------------------------------------------
    // Sources
    // ------------------------------------------------------------------

    /// Remote document list, `None` on any failure or empty payload so the
    /// local fallback can proceed.
    fn remote_documents(&self) -> Option<Vec<Document>> {
        let remote = self.remote.as_ref()?;

        let records = match remote.fetch("posts") {
            Ok(Value::Array(records)) => records,
            Ok(_) => {
                debug!("remote"; "posts payload is not an array, falling back");
                return None;
            }
            Err(err) => {
                debug!("remote"; "fetch failed: {err:#}, falling back");
                return None;
            }
        };
        if records.is_empty() {
            debug!("remote"; "posts payload is empty, falling back");
            return None;
        }

        let normalizer = self.normalizer();
        let docs: Vec<Document> = records
            .iter()
            .filter_map(|record| match normalizer.from_remote(record) {
                Ok(doc) => Some(doc),
                Err(err) => {
                    debug!("remote"; "skipping record: {err}");
                    None
                }
            })
            .collect();

        (!docs.is_empty()).then_some(docs)
    }

    /// Local document list; malformed documents are skipped, a failed
    /// enumeration yields an empty set.
    fn local_documents(&self) -> Vec<Document> {
        let raw = match self.local.documents() {
            Ok(raw) => raw,
            Err(err) => {
                log!("local"; "enumeration failed: {err:#}");
                return Vec::new();
            }
        };

        let normalizer = self.normalizer();
        raw.iter()
            .filter_map(|local| match normalizer.from_local(local) {
                Ok(doc) => Some(doc),
                Err(err) => {
                    debug!("local"; "skipping `{}`: {err}", local.slug);
                    None
                }
            })
            .collect()
    }
}
