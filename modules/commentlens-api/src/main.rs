use std::sync::Arc;

use anyhow::Result;
use axum::{
    routing::{get, post},
    Router,
};
use tracing::info;
use tracing_subscriber::EnvFilter;

use commentlens_common::Config;
use openai_client::OpenAi;
use youtube_client::YouTubeClient;

mod classifier;
mod curator;
mod rest;
mod summarizer;
mod video_id;

pub struct AppState {
    pub youtube: YouTubeClient,
    pub agent: OpenAi,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("commentlens_api=info".parse()?))
        .init();

    let config = Config::from_env();

    let state = Arc::new(AppState {
        youtube: YouTubeClient::new(config.youtube_api_key.clone()),
        agent: OpenAi::new(config.openai_api_key.clone(), config.openai_model.clone()),
    });

    let app = Router::new()
        // Health check
        .route("/", get(|| async { "ok" }))
        // Digest endpoint
        .route("/api/digest", post(rest::api_digest))
        .with_state(state)
        // CORS
        .layer(
            tower_http::cors::CorsLayer::new()
                .allow_origin(tower_http::cors::Any)
                .allow_methods(tower_http::cors::Any)
                .allow_headers(tower_http::cors::Any),
        )
        // Logging layer: method + path only (no query params, no body)
        .layer(
            tower_http::trace::TraceLayer::new_for_http().make_span_with(
                |request: &axum::http::Request<_>| {
                    tracing::info_span!(
                        "http_request",
                        method = %request.method(),
                        path = %request.uri().path(),
                    )
                },
            ),
        );

    let addr = format!("{}:{}", config.web_host, config.web_port);
    info!("CommentLens API starting on {addr}");

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
