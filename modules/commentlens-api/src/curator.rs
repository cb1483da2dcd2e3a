use commentlens_common::{CommentDigest, DigestStats};
use youtube_client::{RawComment, VideoMetadata};

use crate::classifier::is_high_value;

/// Merge the heuristic pass with the model digest: engagement stats from the
/// heuristic count, anecdote-vs-comment dedup on the digest. The ratio
/// denominator is the video's reported comment count, not the fetched page.
pub fn curate(
    video: &VideoMetadata,
    comments: &[RawComment],
    mut digest: CommentDigest,
) -> (CommentDigest, DigestStats) {
    let high_value_count = comments.iter().filter(|c| is_high_value(&c.text)).count();

    // Anecdotes take precedence: a ranked comment whose text matches a story
    // (case-insensitive) is dropped, never the anecdote.
    let stories: Vec<String> = digest
        .anecdotes
        .iter()
        .map(|a| a.story.to_lowercase())
        .collect();
    digest
        .top_comments
        .retain(|c| !stories.contains(&c.text.to_lowercase()));

    let stats = DigestStats {
        total_views: format_thousands(video.view_count),
        total_comments: video.comment_count,
        high_value_count,
        high_value_ratio: format_ratio(high_value_count, video.comment_count),
    };

    (digest, stats)
}

fn format_ratio(high_value: usize, total: u64) -> String {
    if total == 0 {
        return "0%".to_string();
    }
    format!("{:.1}%", high_value as f64 / total as f64 * 100.0)
}

/// Group digits in threes, e.g. 1234567 -> "1,234,567".
pub fn format_thousands(n: u64) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use commentlens_common::{Anecdote, RankedComment};

    fn comment(text: &str) -> RawComment {
        RawComment {
            text: text.to_string(),
            author: "Anonymous".to_string(),
            likes: 0,
            published_at: String::new(),
        }
    }

    fn video(view_count: u64, comment_count: u64) -> VideoMetadata {
        VideoMetadata {
            title: "t".to_string(),
            view_count,
            comment_count,
        }
    }

    #[test]
    fn ratio_is_zero_percent_without_comments() {
        let (_, stats) = curate(&video(10, 0), &[], CommentDigest::default());
        assert_eq!(stats.high_value_ratio, "0%");
        assert_eq!(stats.total_comments, 0);
    }

    #[test]
    fn ratio_one_of_three() {
        let comments = vec![comment("my pills"), comment("lol"), comment("nice")];
        let (_, stats) = curate(&video(10, 3), &comments, CommentDigest::default());
        assert_eq!(stats.high_value_count, 1);
        assert_eq!(stats.high_value_ratio, "33.3%");
    }

    #[test]
    fn ratio_uses_reported_count_not_page_size() {
        // One fetched comment, but the video reports 4 total.
        let comments = vec![comment("green tea helped")];
        let (_, stats) = curate(&video(10, 4), &comments, CommentDigest::default());
        assert_eq!(stats.high_value_count, 1);
        assert_eq!(stats.high_value_ratio, "25.0%");
    }

    #[test]
    fn dedup_drops_comment_matching_anecdote_case_insensitive() {
        let digest = CommentDigest {
            top_comments: vec![
                RankedComment {
                    text: "Grandma's TEA cured me".to_string(),
                    sentiment: 5,
                },
                RankedComment {
                    text: "unrelated".to_string(),
                    sentiment: 3,
                },
            ],
            anecdotes: vec![Anecdote {
                story: "grandma's tea cured me".to_string(),
                stars: 4,
            }],
            summary: "s".to_string(),
        };
        let (digest, _) = curate(&video(1, 1), &[], digest);
        assert_eq!(digest.top_comments.len(), 1);
        assert_eq!(digest.top_comments[0].text, "unrelated");
        assert_eq!(digest.anecdotes.len(), 1);
    }

    #[test]
    fn thousands_grouping() {
        assert_eq!(format_thousands(0), "0");
        assert_eq!(format_thousands(999), "999");
        assert_eq!(format_thousands(1000), "1,000");
        assert_eq!(format_thousands(1234567), "1,234,567");
    }
}
