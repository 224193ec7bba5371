// Copyright (c) 2024-2026 Martin Schröder <info@swedishembedded.com>
//
// SPDX-License-Identifier: MIT
//!
//! HTTP endpoint hosting a [`Skill`].
//!
//! The voice platform `POST`s a request envelope as JSON to the configured
//! path and expects a `200` with the response envelope.  Envelopes that do
//! not parse are answered with `400`; everything that parses is answered
//! with speech, including failures inside the skill.
//!
//! Request signature verification is left to the fronting platform
//! (e.g. the function host or an API gateway).

use std::sync::Arc;

use anyhow::Context;
use axum::{
    body::Bytes,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use mealmaker_config::HttpConfig;
use tower_http::limit::RequestBodyLimitLayer;
use tracing::{info, warn};

use crate::{RequestEnvelope, Skill};

#[derive(Clone)]
struct AppState {
    skill: Arc<Skill>,
}

/// Build the router: `POST {config.path}` for envelopes and `GET /healthz`.
pub fn router(skill: Arc<Skill>, config: &HttpConfig) -> Router {
    let path = if config.path.starts_with('/') {
        config.path.clone()
    } else {
        format!("/{}", config.path)
    };

    Router::new()
        .route(&path, post(skill_handler))
        .route("/healthz", get(health_handler))
        .layer(RequestBodyLimitLayer::new(config.max_body_bytes))
        .with_state(AppState { skill })
}

/// Bind `config.bind` and serve until Ctrl-C.
pub async fn serve(config: &HttpConfig, skill: Arc<Skill>) -> anyhow::Result<()> {
    let app = router(skill, config);
    let listener = tokio::net::TcpListener::bind(&config.bind)
        .await
        .with_context(|| format!("binding {}", config.bind))?;

    info!(bind = %config.bind, path = %config.path, "skill endpoint listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(async {
            let _ = tokio::signal::ctrl_c().await;
            info!("shutting down skill endpoint");
        })
        .await
        .context("HTTP server error")
}

async fn skill_handler(State(state): State<AppState>, body: Bytes) -> Response {
    let envelope = match RequestEnvelope::from_json(&body) {
        Ok(e) => e,
        Err(e) => {
            warn!("rejecting request: {e}");
            return (StatusCode::BAD_REQUEST, e.to_string()).into_response();
        }
    };

    let reply = state.skill.dispatch(&envelope).await;
    (StatusCode::OK, Json(reply)).into_response()
}

async fn health_handler() -> &'static str {
    "ok"
}
