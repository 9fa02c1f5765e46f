//! Core types for rankfuse

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// One source's ranked output for a single query. Index 0 is the source's
/// top-ranked hit.
pub type ResultList = Vec<ScoredChunk>;

/// Attribute value types
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum AttributeValue {
    String(String),
    Integer(i64),
    Float(f64),
    Boolean(bool),
    StringArray(Vec<String>),
}

/// A single retrieved chunk together with its source-assigned score
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ScoredChunk {
    /// Textual payload. Chunks with identical text are the same logical
    /// result during fusion, regardless of which source produced them.
    /// A chunk without text cannot be fused and is rejected.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    /// Relevance score assigned by the originating source. Sources that do
    /// not score their hits leave it unset; rank derivation treats it as 0.0.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub score: Option<f32>,
    /// Per-chunk metadata (source name, document id, page, ...) carried
    /// through fusion untouched.
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub attributes: HashMap<String, AttributeValue>,
}

impl ScoredChunk {
    pub fn new(text: impl Into<String>, score: Option<f32>) -> Self {
        Self {
            text: Some(text.into()),
            score,
            attributes: HashMap::new(),
        }
    }
}
