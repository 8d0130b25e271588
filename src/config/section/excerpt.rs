//! `[excerpt]` section: derived excerpt settings.

use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ExcerptConfig {
    /// Maximum excerpt length in characters (word-boundary truncated).
    pub max_length: usize,
    /// Marker appended when the excerpt was truncated.
    pub marker: String,
    /// Manual excerpt separator; text before its first occurrence in a body
    /// wins over paragraph-based derivation.
    pub separator: String,
}

impl Default for ExcerptConfig {
    fn default() -> Self {
        Self {
            max_length: 200,
            marker: "…".to_string(),
            separator: "<!-- more -->".to_string(),
        }
    }
}
