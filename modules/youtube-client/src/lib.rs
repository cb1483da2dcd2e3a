pub mod error;
pub mod types;

pub use error::{Result, YouTubeError};
pub use types::{RawComment, VideoMetadata};

use serde::de::DeserializeOwned;
use types::{CommentThreadListResponse, VideoListResponse};

const BASE_URL: &str = "https://www.googleapis.com/youtube/v3";

/// Comments are fetched as a single bounded page; the API caps maxResults at 100.
const COMMENT_PAGE_SIZE: u32 = 100;

pub struct YouTubeClient {
    client: reqwest::Client,
    api_key: String,
}

impl YouTubeClient {
    pub fn new(api_key: String) -> Self {
        Self {
            client: reqwest::Client::new(),
            api_key,
        }
    }

    async fn get_json<T: DeserializeOwned>(&self, url: &str) -> Result<T> {
        let resp = self.client.get(url).send().await?;

        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            return Err(YouTubeError::Api {
                status: status.as_u16(),
                message: body,
            });
        }

        let body = resp.text().await?;
        Ok(serde_json::from_str(&body)?)
    }

    /// Fetch title and statistics for a video. `VideoNotFound` when the API
    /// returns an empty item list for the id.
    pub async fn fetch_video(&self, video_id: &str) -> Result<VideoMetadata> {
        let url = format!(
            "{}/videos?part=snippet,statistics&id={}&key={}",
            BASE_URL, video_id, self.api_key
        );
        let resp: VideoListResponse = self.get_json(&url).await?;
        resp.items
            .into_iter()
            .next()
            .map(|item| item.into_metadata())
            .ok_or(YouTubeError::VideoNotFound)
    }

    /// Fetch up to one page of top-level comments, normalized.
    pub async fn fetch_comments(&self, video_id: &str) -> Result<Vec<RawComment>> {
        let url = format!(
            "{}/commentThreads?part=snippet&videoId={}&maxResults={}&key={}",
            BASE_URL, video_id, COMMENT_PAGE_SIZE, self.api_key
        );
        let resp: CommentThreadListResponse = self.get_json(&url).await?;
        Ok(resp
            .items
            .into_iter()
            .map(|thread| thread.into_raw_comment())
            .collect())
    }

    /// Fetch metadata and the comment page concurrently. Both calls must
    /// succeed; a failure in either aborts the pair.
    pub async fn fetch_digest_inputs(
        &self,
        video_id: &str,
    ) -> Result<(VideoMetadata, Vec<RawComment>)> {
        tracing::info!(video_id, "Fetching video metadata and comments");

        let (video, comments) =
            tokio::try_join!(self.fetch_video(video_id), self.fetch_comments(video_id))?;

        tracing::info!(
            title = %video.title,
            count = comments.len(),
            "Fetched video and comment page"
        );

        Ok((video, comments))
    }
}
