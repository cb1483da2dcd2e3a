use serde::Deserialize;

// --- Normalized types ---

/// Public metadata for a single video, built once per request.
#[derive(Debug, Clone)]
pub struct VideoMetadata {
    pub title: String,
    pub view_count: u64,
    pub comment_count: u64,
}

/// A normalized top-level comment. Missing optional fields are filled with
/// documented defaults ("Anonymous", 0, empty string) during conversion.
#[derive(Debug, Clone)]
pub struct RawComment {
    pub text: String,
    pub author: String,
    pub likes: u64,
    /// RFC 3339 timestamp as reported by the API, empty when absent.
    pub published_at: String,
}

// --- videos.list wire types ---

#[derive(Debug, Clone, Deserialize)]
pub(crate) struct VideoListResponse {
    #[serde(default)]
    pub items: Vec<VideoItem>,
}

#[derive(Debug, Clone, Deserialize)]
pub(crate) struct VideoItem {
    pub snippet: VideoSnippet,
    #[serde(default)]
    pub statistics: VideoStatistics,
}

#[derive(Debug, Clone, Deserialize)]
pub(crate) struct VideoSnippet {
    pub title: String,
}

/// Statistics counters come back as JSON strings; a hidden counter is simply
/// omitted from the payload.
#[derive(Debug, Clone, Default, Deserialize)]
pub(crate) struct VideoStatistics {
    #[serde(rename = "viewCount")]
    pub view_count: Option<String>,
    #[serde(rename = "commentCount")]
    pub comment_count: Option<String>,
}

impl VideoItem {
    pub(crate) fn into_metadata(self) -> VideoMetadata {
        VideoMetadata {
            title: self.snippet.title,
            view_count: parse_counter(self.statistics.view_count.as_deref()),
            comment_count: parse_counter(self.statistics.comment_count.as_deref()),
        }
    }
}

fn parse_counter(raw: Option<&str>) -> u64 {
    raw.and_then(|s| s.parse().ok()).unwrap_or(0)
}

// --- commentThreads.list wire types ---

#[derive(Debug, Clone, Deserialize)]
pub(crate) struct CommentThreadListResponse {
    #[serde(default)]
    pub items: Vec<CommentThread>,
}

#[derive(Debug, Clone, Deserialize)]
pub(crate) struct CommentThread {
    pub snippet: CommentThreadSnippet,
}

#[derive(Debug, Clone, Deserialize)]
pub(crate) struct CommentThreadSnippet {
    #[serde(rename = "topLevelComment")]
    pub top_level_comment: TopLevelComment,
}

#[derive(Debug, Clone, Deserialize)]
pub(crate) struct TopLevelComment {
    pub snippet: CommentSnippet,
}

#[derive(Debug, Clone, Deserialize)]
pub(crate) struct CommentSnippet {
    #[serde(rename = "textDisplay", default)]
    pub text_display: String,
    #[serde(rename = "authorDisplayName")]
    pub author_display_name: Option<String>,
    #[serde(rename = "likeCount")]
    pub like_count: Option<u64>,
    #[serde(rename = "publishedAt")]
    pub published_at: Option<String>,
}

impl CommentThread {
    pub(crate) fn into_raw_comment(self) -> RawComment {
        let snippet = self.snippet.top_level_comment.snippet;
        RawComment {
            text: snippet.text_display,
            author: snippet
                .author_display_name
                .unwrap_or_else(|| "Anonymous".to_string()),
            likes: snippet.like_count.unwrap_or(0),
            published_at: snippet.published_at.unwrap_or_default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn video_item_parses_statistics_strings() {
        let json = r#"{
            "items": [{
                "snippet": {"title": "Ginger tea cured me"},
                "statistics": {"viewCount": "1234567", "commentCount": "321"}
            }]
        }"#;
        let resp: VideoListResponse = serde_json::from_str(json).unwrap();
        let meta = resp.items.into_iter().next().unwrap().into_metadata();
        assert_eq!(meta.title, "Ginger tea cured me");
        assert_eq!(meta.view_count, 1_234_567);
        assert_eq!(meta.comment_count, 321);
    }

    #[test]
    fn missing_statistics_default_to_zero() {
        let json = r#"{"items": [{"snippet": {"title": "t"}}]}"#;
        let resp: VideoListResponse = serde_json::from_str(json).unwrap();
        let meta = resp.items.into_iter().next().unwrap().into_metadata();
        assert_eq!(meta.view_count, 0);
        assert_eq!(meta.comment_count, 0);
    }

    #[test]
    fn unparsable_counter_defaults_to_zero() {
        let json = r#"{
            "items": [{
                "snippet": {"title": "t"},
                "statistics": {"viewCount": "not-a-number"}
            }]
        }"#;
        let resp: VideoListResponse = serde_json::from_str(json).unwrap();
        let meta = resp.items.into_iter().next().unwrap().into_metadata();
        assert_eq!(meta.view_count, 0);
    }

    #[test]
    fn comment_thread_normalizes_full_snippet() {
        let json = r#"{
            "items": [{
                "snippet": {
                    "topLevelComment": {
                        "snippet": {
                            "textDisplay": "My mom swears by this tea",
                            "authorDisplayName": "jane",
                            "likeCount": 12,
                            "publishedAt": "2024-05-01T12:00:00Z"
                        }
                    }
                }
            }]
        }"#;
        let resp: CommentThreadListResponse = serde_json::from_str(json).unwrap();
        let comment = resp.items.into_iter().next().unwrap().into_raw_comment();
        assert_eq!(comment.text, "My mom swears by this tea");
        assert_eq!(comment.author, "jane");
        assert_eq!(comment.likes, 12);
        assert_eq!(comment.published_at, "2024-05-01T12:00:00Z");
    }

    #[test]
    fn missing_optional_comment_fields_get_defaults() {
        let json = r#"{
            "items": [{
                "snippet": {
                    "topLevelComment": {
                        "snippet": {"textDisplay": "hello"}
                    }
                }
            }]
        }"#;
        let resp: CommentThreadListResponse = serde_json::from_str(json).unwrap();
        let comment = resp.items.into_iter().next().unwrap().into_raw_comment();
        assert_eq!(comment.author, "Anonymous");
        assert_eq!(comment.likes, 0);
        assert_eq!(comment.published_at, "");
    }

    #[test]
    fn empty_comment_page_deserializes() {
        let resp: CommentThreadListResponse = serde_json::from_str("{}").unwrap();
        assert!(resp.items.is_empty());
    }
}
