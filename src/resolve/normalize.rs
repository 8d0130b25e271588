//! Shape mapping into the canonical document record.
//!
//! Two explicit mapping functions, one per source shape, behind one entry
//! point. Remote records arrive pre-rendered (their `content` is opaque
//! HTML); local documents carry a metadata block plus raw body text that
//! goes through the markup renderer. Both paths recompute reading time and
//! excerpt, so callers cannot tell which source produced a document.

use serde_json::Value;
use thiserror::Error;

use crate::config::SiteConfig;
use crate::derive::{derive_excerpt, reading_time_minutes};
use crate::document::{Author, Category, DocMeta, Document, Seo};
use crate::matter;
use crate::resolve::provider::LocalDocument;
use crate::markup;
use crate::utils::slug::slugify;

/// Why a single record could not be normalized. The batch survives; the
/// record is skipped.
#[derive(Debug, Error)]
pub enum NormalizeError {
    #[error("record is not a JSON object")]
    NotAnObject,

    #[error("record is missing `{0}`")]
    MissingField(&'static str),

    #[error("metadata block is unusable: {0}")]
    Meta(#[from] serde_json::Error),
}

/// Normalization entry point, carrying the config-injected author
/// directory and excerpt settings.
pub struct Normalizer<'a> {
    config: &'a SiteConfig,
}

impl<'a> Normalizer<'a> {
    pub fn new(config: &'a SiteConfig) -> Self {
        Self { config }
    }

    /// Map a remote-service record into the canonical shape.
    ///
    /// Every field access tolerates absence; only a record with neither
    /// slug nor title is rejected.
    pub fn from_remote(&self, record: &Value) -> Result<Document, NormalizeError> {
        let obj = record.as_object().ok_or(NormalizeError::NotAnObject)?;

        let title = str_field(record, &["title"])
            .ok_or(NormalizeError::MissingField("title"))?
            .to_string();
        let slug = match str_field(record, &["slug"]) {
            Some(s) => slugify(s),
            None => slugify(&title),
        };
        if slug.is_empty() {
            return Err(NormalizeError::MissingField("slug"));
        }

        // Remote content is treated as already-rendered markup
        let body_html = str_field(record, &["content", "body"])
            .unwrap_or_default()
            .to_string();
        let body_raw = str_field(record, &["rawContent", "raw"])
            .unwrap_or(&body_html)
            .to_string();

        let excerpt = match str_field(record, &["description", "excerpt"]) {
            Some(explicit) => explicit.to_string(),
            None => derive_excerpt(&body_raw, &self.config.excerpt),
        };

        let author = match obj.get("author") {
            Some(Value::String(key)) => self.config.authors.resolve(Some(key)),
            Some(value @ Value::Object(_)) => {
                serde_json::from_value(value.clone()).unwrap_or_default()
            }
            _ => self.config.authors.resolve(None),
        };

        let category = match obj.get("category") {
            Some(Value::String(label)) => Category::from_label(label),
            Some(Value::Object(map)) => {
                let name = map.get("name").and_then(Value::as_str).unwrap_or_default();
                match map.get("slug").and_then(Value::as_str) {
                    Some(slug) => Category::new(name, slugify(slug)),
                    None => Category::from_label(name),
                }
            }
            _ => Category::from_label("Uncategorized"),
        };

        let seo = obj.get("seo").and_then(|v| {
            let seo: Seo = serde_json::from_value(v.clone()).ok()?;
            (!seo.is_empty()).then_some(seo)
        });

        Ok(Document {
            slug,
            title,
            excerpt,
            reading_time_minutes: reading_time_minutes(&body_html),
            date: str_field(record, &["publishDate", "date", "publishedAt"])
                .unwrap_or_default()
                .to_string(),
            updated: str_field(record, &["updateDate", "updatedAt"]).map(str::to_string),
            published: obj
                .get("published")
                .and_then(Value::as_bool)
                .unwrap_or(true),
            featured: obj.get("featured").and_then(Value::as_bool).unwrap_or(false),
            author,
            category,
            tags: tags_field(obj.get("tags")),
            cover_image: str_field(record, &["coverImage", "cover_image", "image"])
                .map(str::to_string),
            seo,
            body_html,
            body_raw,
        })
    }

    /// Map a parsed local document into the canonical shape.
    ///
    /// The metadata block is consumed here and not retained on the
    /// document; the body goes through the markup renderer.
    pub fn from_local(&self, local: &LocalDocument) -> Result<Document, NormalizeError> {
        let parsed = matter::parse(&local.raw);
        let meta = match parsed.metadata {
            Some(block) => DocMeta::from_block(block)?,
            None => DocMeta::default(),
        };

        let body_raw = parsed.body.trim().to_string();
        let body_html = markup::render(&body_raw);

        let excerpt = match &meta.description {
            Some(explicit) => explicit.clone(),
            None => derive_excerpt(&body_raw, &self.config.excerpt),
        };

        let seo = Seo {
            title: meta.seo_title,
            description: meta.seo_description,
        };

        Ok(Document {
            slug: local.slug.clone(),
            title: meta.title.unwrap_or_else(|| local.slug.clone()),
            excerpt,
            reading_time_minutes: reading_time_minutes(&body_html),
            date: meta.date.unwrap_or_default(),
            updated: meta.updated,
            published: meta.published,
            featured: meta.featured,
            author: self.config.authors.resolve(meta.author.as_deref()),
            category: Category::from_label(
                meta.category.as_deref().unwrap_or("Uncategorized"),
            ),
            tags: meta.tags,
            cover_image: meta.cover_image,
            seo: (!seo.is_empty()).then_some(seo),
            body_html,
            body_raw,
        })
    }
}

/// First present string field among the given names.
fn str_field<'v>(record: &'v Value, names: &[&str]) -> Option<&'v str> {
    names.iter().find_map(|name| record.get(name)?.as_str())
}

/// Tag list from a remote payload, tolerating absence and non-string
/// entries.
fn tags_field(value: Option<&Value>) -> Vec<String> {
    let Some(Value::Array(items)) = value else {
        return Vec::new();
    };
    items
        .iter()
        .filter_map(|v| match v {
            Value::String(s) => Some(s.clone()),
            Value::Number(n) => Some(n.to_string()),
            _ => None,
        })
        .collect()
}
