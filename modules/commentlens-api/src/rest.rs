use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Json},
};
use serde::Deserialize;
use tracing::warn;

use commentlens_common::{CommentDigest, DigestError, DigestStats};
use youtube_client::{VideoMetadata, YouTubeError};

use crate::{curator, summarizer, video_id, AppState};

#[derive(Deserialize)]
pub struct DigestRequest {
    url: String,
}

pub async fn api_digest(
    State(state): State<Arc<AppState>>,
    Json(body): Json<DigestRequest>,
) -> impl IntoResponse {
    match run_digest(&state, &body.url).await {
        Ok(payload) => Json(payload).into_response(),
        Err(err) => {
            let status = match err {
                DigestError::InvalidUrl => StatusCode::BAD_REQUEST,
                DigestError::VideoNotFound => StatusCode::NOT_FOUND,
                DigestError::Upstream(_) => StatusCode::INTERNAL_SERVER_ERROR,
            };
            if status == StatusCode::INTERNAL_SERVER_ERROR {
                warn!(error = %err, "Digest request failed");
            }
            (
                status,
                Json(serde_json::json!({"error": err.client_message()})),
            )
                .into_response()
        }
    }
}

async fn run_digest(state: &AppState, url: &str) -> Result<serde_json::Value, DigestError> {
    let video_id = video_id::extract_video_id(url).ok_or(DigestError::InvalidUrl)?;

    let (video, comments) = state
        .youtube
        .fetch_digest_inputs(&video_id)
        .await
        .map_err(|e| match e {
            YouTubeError::VideoNotFound => DigestError::VideoNotFound,
            other => DigestError::Upstream(other.to_string()),
        })?;

    // Best-effort enrichment: a failed model call degrades the digest but
    // never the request.
    let digest = summarizer::summarize_comments(&state.agent, &comments).await;
    let (digest, stats) = curator::curate(&video, &comments, digest);

    Ok(digest_payload(&video, &stats, &digest))
}

/// Shape the outbound contract. No logic beyond assembly.
fn digest_payload(
    video: &VideoMetadata,
    stats: &DigestStats,
    digest: &CommentDigest,
) -> serde_json::Value {
    serde_json::json!({
        "video": { "title": video.title },
        "stats": stats,
        "topComments": digest.top_comments,
        "anecdotes": digest.anecdotes,
        "summary": digest.summary,
    })
}
