//! The canonical document model.
//!
//! Every query returns [`Document`] values regardless of whether the record
//! came from the remote service or a local file; callers cannot tell the
//! sources apart. Documents are never mutated after normalization.

mod meta;

pub use meta::DocMeta;

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::utils::{date::DateTimeUtc, slug::slugify};

/// A JSON object map for storing arbitrary metadata fields.
pub type JsonMap = serde_json::Map<String, serde_json::Value>;

/// Document author from the injected author directory.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Author {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bio: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
    /// Social links, label to URL.
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub links: BTreeMap<String, String>,
}

impl Author {
    /// Fallback author carrying only a display name.
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }
}

/// Free-text category label with its normalized slug.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Category {
    pub name: String,
    pub slug: String,
}

impl Category {
    pub fn from_label(label: &str) -> Self {
        Self {
            name: label.to_string(),
            slug: slugify(label),
        }
    }

    pub fn new(name: impl Into<String>, slug: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            slug: slug.into(),
        }
    }

    /// Match a query slug against this category.
    ///
    /// Three checks in order, first match wins: the stored slug, the
    /// normalized form of the raw label, the literal label itself. This
    /// keeps queries resilient to label/slug drift between the two sources.
    pub fn matches(&self, query: &str) -> bool {
        self.slug == query || slugify(&self.name) == query || self.name == query
    }
}

/// Optional per-document SEO overrides.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Seo {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl Seo {
    pub fn is_empty(&self) -> bool {
        self.title.is_none() && self.description.is_none()
    }
}

/// The canonical in-memory document record.
#[derive(Debug, Clone, Serialize)]
pub struct Document {
    /// Unique, URL-safe identifier (lowercase, alphanumeric and hyphens).
    pub slug: String,
    pub title: String,
    /// Explicit description, or the derived excerpt.
    pub excerpt: String,
    /// Safe rendered markup.
    pub body_html: String,
    /// Pre-render text, retained for re-derivation.
    pub body_raw: String,
    /// Publish date as it arrived (ISO shaped); parsed lazily for sorting.
    pub date: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated: Option<String>,
    pub published: bool,
    pub featured: bool,
    pub author: Author,
    pub category: Category,
    pub tags: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cover_image: Option<String>,
    /// Derived at resolution time, never persisted.
    pub reading_time_minutes: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seo: Option<Seo>,
}

impl Document {
    /// Publish date parsed for ordering; `None` sorts last.
    pub fn sort_date(&self) -> Option<DateTimeUtc> {
        DateTimeUtc::parse(&self.date)
    }
}

/// Sort newest first; undated documents go last. The sort is stable, so
/// same-date documents keep their enumeration order.
pub fn sort_by_date_desc(documents: &mut [Document]) {
    documents.sort_by(|a, b| b.sort_date().cmp(&a.sort_date()));
}
