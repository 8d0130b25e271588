//! Typed view of a parsed metadata block.

use serde::Deserialize;
use serde_json::Value;

use super::JsonMap;

/// Deserialize tags tolerantly: `null` becomes empty, scalar entries are
/// stringified rather than rejecting the whole document.
fn deserialize_tags<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let value: Option<Vec<Value>> = Option::deserialize(deserializer)?;
    Ok(value
        .unwrap_or_default()
        .into_iter()
        .filter_map(|v| match v {
            Value::String(s) => Some(s),
            Value::Number(n) => Some(n.to_string()),
            Value::Bool(b) => Some(b.to_string()),
            _ => None,
        })
        .collect())
}

/// Deserialize a date field tolerantly: scalar coercion turns a bare year
/// (`date: 2024`) into a number, which is still a usable string value, not
/// grounds for dropping the document.
fn deserialize_date<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let value: Option<Value> = Option::deserialize(deserializer)?;
    Ok(value.and_then(|v| match v {
        Value::String(s) => Some(s),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }))
}

/// Document metadata from a frontmatter block.
///
/// | Field         | Type          | Description                          |
/// |---------------|---------------|--------------------------------------|
/// | `title`       | `String`      | Document title                       |
/// | `description` | `String`      | Explicit excerpt (optional)          |
/// | `date`        | `String`      | Publication date                     |
/// | `updated`     | `String`      | Last update date                     |
/// | `published`   | `bool`        | Public visibility (default: true)    |
/// | `featured`    | `bool`        | Featured flag (default: false)       |
/// | `author`      | `String`      | Author directory key                 |
/// | `category`    | `String`      | Free-text category label             |
/// | `tags`        | `Vec<String>` | Categorization tags                  |
/// | `cover_image` | `String`      | Cover image URL (alias `coverImage`) |
///
/// Unknown fields are captured in `extra` and otherwise ignored.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct DocMeta {
    pub title: Option<String>,
    pub description: Option<String>,
    #[serde(deserialize_with = "deserialize_date")]
    pub date: Option<String>,
    #[serde(alias = "updatedAt", deserialize_with = "deserialize_date")]
    pub updated: Option<String>,
    pub published: bool,
    pub featured: bool,
    pub author: Option<String>,
    pub category: Option<String>,
    #[serde(deserialize_with = "deserialize_tags")]
    pub tags: Vec<String>,
    #[serde(alias = "coverImage", alias = "cover")]
    pub cover_image: Option<String>,
    #[serde(alias = "seoTitle")]
    pub seo_title: Option<String>,
    #[serde(alias = "seoDescription")]
    pub seo_description: Option<String>,
    #[serde(flatten)]
    pub extra: JsonMap,
}

impl Default for DocMeta {
    fn default() -> Self {
        Self {
            title: None,
            description: None,
            date: None,
            updated: None,
            published: true, // Absent key means visible
            featured: false,
            author: None,
            category: None,
            tags: Vec::new(),
            cover_image: None,
            seo_title: None,
            seo_description: None,
            extra: JsonMap::new(),
        }
    }
}

impl DocMeta {
    /// Build from a parsed metadata block.
    ///
    /// Fails only when a known field has an unusable shape (a list where a
    /// scalar belongs); the caller treats that as a malformed document.
    pub fn from_block(block: JsonMap) -> Result<Self, serde_json::Error> {
        serde_json::from_value(Value::Object(block))
    }
}
