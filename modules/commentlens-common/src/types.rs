use serde::{Deserialize, Serialize};

/// A comment the model picked as representative, scored 0-5 for ordering.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RankedComment {
    #[serde(default)]
    pub text: String,
    #[serde(default)]
    pub sentiment: i64,
}

/// A personal-story excerpt the model extracted, rated 0-5 stars.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Anecdote {
    #[serde(default)]
    pub story: String,
    #[serde(default)]
    pub stars: i64,
}

/// The model-derived curation result. `Default` is the degraded digest
/// substituted whenever the model call fails or its output can't be parsed;
/// the struct-level `serde(default)` lets a partial model answer fill in
/// the rest from the same defaults.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CommentDigest {
    pub top_comments: Vec<RankedComment>,
    pub anecdotes: Vec<Anecdote>,
    pub summary: String,
}

pub const DEGRADED_SUMMARY: &str = "No data.";

impl Default for CommentDigest {
    fn default() -> Self {
        Self {
            top_comments: Vec::new(),
            anecdotes: Vec::new(),
            summary: DEGRADED_SUMMARY.to_string(),
        }
    }
}

/// Engagement statistics computed from metadata and the heuristic
/// classification, independent of whether the summarizer succeeded.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DigestStats {
    /// Thousands-formatted view count, e.g. "1,234,567".
    pub total_views: String,
    pub total_comments: u64,
    pub high_value_count: usize,
    /// One-decimal percentage, e.g. "12.3%"; "0%" when there are no comments.
    pub high_value_ratio: String,
}
