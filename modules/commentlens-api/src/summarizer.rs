use commentlens_common::{CommentDigest, DEGRADED_SUMMARY};
use openai_client::{strip_code_fences, OpenAi};
use tracing::warn;
use youtube_client::RawComment;

/// Ranked comments are truncated to this many entries after sorting.
const MAX_TOP_COMMENTS: usize = 20;

/// Low temperature: the answer is machine-parsed, not read by a human.
const SUMMARY_TEMPERATURE: f32 = 0.3;

const SYSTEM_PROMPT: &str = r#"You are a health comment analyst.
Return ONLY valid JSON (no markdown, no code blocks):
{
  "topComments": [{"text": "...", "sentiment": 5}],
  "anecdotes": [{"story": "...", "stars": 5}],
  "summary": "..."
}
"#;

/// Why the model step produced no usable digest. Both arms collapse to the
/// same degraded default; the distinction only reaches the logs.
enum SummarizeFailure {
    Service(anyhow::Error),
    Parse(String),
}

/// Ask the model for a curated digest of the comment set. Never fails: any
/// service or parse problem yields the degraded default digest.
pub async fn summarize_comments(agent: &OpenAi, comments: &[RawComment]) -> CommentDigest {
    match try_summarize(agent, comments).await {
        Ok(digest) => digest,
        Err(SummarizeFailure::Service(e)) => {
            warn!(error = %e, "Summarizer call failed, using degraded digest");
            CommentDigest::default()
        }
        Err(SummarizeFailure::Parse(e)) => {
            warn!(error = %e, "Summarizer output unparsable, using degraded digest");
            CommentDigest::default()
        }
    }
}

async fn try_summarize(
    agent: &OpenAi,
    comments: &[RawComment],
) -> Result<CommentDigest, SummarizeFailure> {
    let user = numbered_comment_list(comments);
    let raw = agent
        .complete(SYSTEM_PROMPT, &user, SUMMARY_TEMPERATURE)
        .await
        .map_err(SummarizeFailure::Service)?;
    parse_digest(&raw).map_err(SummarizeFailure::Parse)
}

fn numbered_comment_list(comments: &[RawComment]) -> String {
    let list = comments
        .iter()
        .enumerate()
        .map(|(i, c)| format!("[{}] {}", i + 1, c.text))
        .collect::<Vec<_>>()
        .join("\n");
    format!("Comments:\n{list}")
}

/// Parse the model's answer into a digest, tolerating fenced output and
/// missing keys. Sort is stable, so equal sentiments keep the model's order.
fn parse_digest(raw: &str) -> Result<CommentDigest, String> {
    let cleaned = strip_code_fences(raw);
    if cleaned.is_empty() {
        return Err("empty response".to_string());
    }

    let mut digest: CommentDigest = serde_json::from_str(cleaned).map_err(|e| e.to_string())?;

    digest.top_comments.sort_by(|a, b| b.sentiment.cmp(&a.sentiment));
    digest.top_comments.truncate(MAX_TOP_COMMENTS);
    for comment in &mut digest.top_comments {
        comment.sentiment = comment.sentiment.clamp(0, 5);
    }
    for anecdote in &mut digest.anecdotes {
        anecdote.stars = anecdote.stars.clamp(0, 5);
    }
    if digest.summary.trim().is_empty() {
        digest.summary = DEGRADED_SUMMARY.to_string();
    }

    Ok(digest)
}
