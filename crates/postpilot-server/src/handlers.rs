//! HTTP request handlers for the backend proxy.
//!
//! Implements the content generation, scheduling, extension message, and
//! health check endpoints using axum.

use crate::message::{dispatch, ExtensionMessage, MessageResponse};
use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Json, Response},
    routing::{get, post},
    Router as AxumRouter,
};
use chrono::{DateTime, Utc};
use postpilot_content::{ContentEngine, ContentError};
use postpilot_domain::traits::{ScheduleStore, TextGenerator};
use postpilot_domain::GenerationRequest;
use postpilot_store::{PersistenceError, SqliteStore};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use tracing::error;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    /// Generation orchestrator
    pub engine: Arc<ContentEngine>,
    /// Raw generator for free-form prompts from the extension
    pub generator: Arc<dyn TextGenerator>,
    /// Scheduling store (rusqlite connections are not thread-safe)
    pub store: Arc<Mutex<SqliteStore>>,
    /// Process-local key-value storage for the extension
    pub storage: Arc<Mutex<HashMap<String, serde_json::Value>>>,
}

/// Response body for idea generation
#[derive(Debug, Serialize, Deserialize)]
pub struct IdeasResponse {
    /// Generated content ideas
    pub ideas: Vec<String>,
}

/// Response body for post generation
#[derive(Debug, Serialize, Deserialize)]
pub struct PostResponse {
    /// The generated post text
    pub post: String,
}

/// Scheduling request body
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScheduleRequest {
    /// Owner of the post
    pub user_id: String,
    /// Post text to publish later
    pub content: String,
    /// When to publish
    pub scheduled_time: DateTime<Utc>,
}

/// Scheduling response body
#[derive(Debug, Serialize, Deserialize)]
pub struct ScheduleResponse {
    /// Human-readable confirmation
    pub message: String,
    /// Identifier of the stored post
    #[serde(rename = "postId")]
    pub post_id: String,
}

/// Health check response
#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Always "ok" while the process is serving
    pub status: String,
}

/// Error response
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    /// Error message
    pub error: String,
}

/// Application error type
#[derive(Debug)]
pub enum AppError {
    /// Idea generation failed
    Ideas(ContentError),
    /// Post generation failed
    Post(ContentError),
    /// Scheduling failed
    Schedule(PersistenceError),
    /// Internal server error
    Internal(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        // Client mistakes get the cause; upstream failures get a fixed
        // message and the detail goes to the log.
        let (status, message) = match self {
            AppError::Ideas(ContentError::Validation(e)) => {
                (StatusCode::BAD_REQUEST, e.to_string())
            }
            AppError::Ideas(e) => {
                error!("Idea generation failed: {}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Failed to generate content ideas".to_string(),
                )
            }
            AppError::Post(ContentError::Validation(e)) => {
                (StatusCode::BAD_REQUEST, e.to_string())
            }
            AppError::Post(e) => {
                error!("Post generation failed: {}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Failed to generate post".to_string(),
                )
            }
            AppError::Schedule(e) => {
                error!("Scheduling failed: {}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Failed to schedule post".to_string(),
                )
            }
            AppError::Internal(msg) => {
                error!("Internal error: {}", msg);
                (StatusCode::INTERNAL_SERVER_ERROR, msg)
            }
        };

        let body = Json(ErrorResponse { error: message });
        (status, body).into_response()
    }
}

/// POST /api/content/generate-ideas
async fn generate_ideas(
    State(state): State<AppState>,
    Json(request): Json<GenerationRequest>,
) -> Result<Json<IdeasResponse>, AppError> {
    let ideas = state
        .engine
        .generate_ideas(&request)
        .await
        .map_err(AppError::Ideas)?;

    Ok(Json(IdeasResponse { ideas }))
}

/// POST /api/content/generate-post
async fn generate_post(
    State(state): State<AppState>,
    Json(request): Json<GenerationRequest>,
) -> Result<Json<PostResponse>, AppError> {
    let post = state
        .engine
        .generate_post(&request)
        .await
        .map_err(AppError::Post)?;

    Ok(Json(PostResponse { post }))
}

/// POST /api/content/schedule
async fn schedule_post(
    State(state): State<AppState>,
    Json(request): Json<ScheduleRequest>,
) -> Result<Json<ScheduleResponse>, AppError> {
    let mut store = state
        .store
        .lock()
        .map_err(|_| AppError::Internal("Failed to schedule post".to_string()))?;

    let post = store
        .create_scheduled_post(&request.user_id, &request.content, request.scheduled_time)
        .map_err(AppError::Schedule)?;

    Ok(Json(ScheduleResponse {
        message: "Post scheduled successfully".to_string(),
        post_id: post.id,
    }))
}

/// POST /api/extension/message
async fn extension_message(
    State(state): State<AppState>,
    Json(message): Json<ExtensionMessage>,
) -> Json<MessageResponse> {
    Json(dispatch(&state, message).await)
}

/// GET /health
async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
    })
}

/// Create the axum router with all routes
pub fn create_router(state: AppState) -> AxumRouter {
    AxumRouter::new()
        .route("/api/content/generate-ideas", post(generate_ideas))
        .route("/api/content/generate-post", post(generate_post))
        .route("/api/content/schedule", post(schedule_post))
        .route("/api/extension/message", post(extension_message))
        .route("/health", get(health_check))
        .with_state(state)
}
