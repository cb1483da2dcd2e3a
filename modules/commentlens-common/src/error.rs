use thiserror::Error;

/// Request-level failure taxonomy for the digest endpoint.
///
/// Summarizer failures are deliberately absent: they degrade to a default
/// digest and never surface as request errors.
#[derive(Debug, Error)]
pub enum DigestError {
    #[error("No video id found in URL")]
    InvalidUrl,

    #[error("Video not found upstream")]
    VideoNotFound,

    #[error("Upstream error: {0}")]
    Upstream(String),
}

impl DigestError {
    /// Message safe to return to the caller. Upstream detail stays in the
    /// server logs.
    pub fn client_message(&self) -> &'static str {
        match self {
            DigestError::InvalidUrl => "Invalid URL",
            DigestError::VideoNotFound => "Video not found",
            DigestError::Upstream(_) => "Processing failed",
        }
    }
}
