//! HTTP server for the virtual TA.
//!
//! Exposes the question-answering endpoint as a JSON HTTP API.
//!
//! # Endpoints
//!
//! | Method | Path | Description |
//! |--------|------|-------------|
//! | `POST` | `/api/` | Answer a question from the loaded corpora |
//! | `GET`  | `/health` | Health check (returns version) |
//!
//! # Error Contract
//!
//! Error responses carry a single human-readable field:
//!
//! ```json
//! { "detail": "No relevant answer found." }
//! ```
//!
//! A question with no match is a 404; an oversized question is a 400.
//! Malformed request bodies are rejected by the JSON extractor (422 for
//! shape errors, 400 for syntax errors).
//!
//! # CORS
//!
//! All origins, methods, and headers are permitted to support browser-based
//! clients.

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tracing::{debug, info};

use crate::answer::{answer_question, AnswerError};
use crate::config::Config;
use crate::models::Answer;
use crate::store::CorpusStore;

/// Shared application state passed to all route handlers via Axum's `State`
/// extractor.
#[derive(Clone)]
struct AppState {
    /// Application configuration (wrapped in `Arc` for cheap cloning across handlers).
    config: Arc<Config>,
    /// Immutable corpus snapshot, loaded before the listener binds.
    store: Arc<CorpusStore>,
}

/// Starts the HTTP server.
///
/// Binds to the address configured in `[server].bind` and registers all
/// route handlers. The corpus store must already be loaded; the server runs
/// indefinitely until the process is terminated.
pub async fn run_server(config: &Config, store: Arc<CorpusStore>) -> anyhow::Result<()> {
    let bind_addr = config.server.bind.clone();

    let state = AppState {
        config: Arc::new(config.clone()),
        store,
    };

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let app = Router::new()
        .route("/api/", post(handle_answer))
        .route("/health", get(handle_health))
        .layer(cors)
        .with_state(state);

    info!(addr = %bind_addr, "virtual TA listening");

    let listener = tokio::net::TcpListener::bind(&bind_addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

// ============ Error response ============

/// JSON error response body.
#[derive(Serialize)]
struct ErrorBody {
    /// Human-readable error message.
    detail: String,
}

/// Internal error type that converts into an Axum HTTP response.
struct AppError {
    status: StatusCode,
    detail: String,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let body = ErrorBody {
            detail: self.detail,
        };
        (self.status, Json(body)).into_response()
    }
}

/// Constructs a 400 Bad Request error.
fn bad_request(detail: impl Into<String>) -> AppError {
    AppError {
        status: StatusCode::BAD_REQUEST,
        detail: detail.into(),
    }
}

/// Constructs a 404 Not Found error.
fn not_found(detail: impl Into<String>) -> AppError {
    AppError {
        status: StatusCode::NOT_FOUND,
        detail: detail.into(),
    }
}

// ============ GET /health ============

/// JSON response body for `GET /health`.
#[derive(Serialize)]
struct HealthResponse {
    /// Always `"ok"` when the server is running.
    status: String,
    /// The crate version from `Cargo.toml`.
    version: String,
}

/// Handler for `GET /health`.
///
/// Used by load balancers, monitoring tools, and the test harness's
/// readiness poll.
async fn handle_health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

// ============ POST /api/ ============

/// JSON request body for `POST /api/`.
#[derive(Deserialize)]
struct QuestionRequest {
    question: String,
    /// Optional base64-encoded image. Accepted for forward compatibility;
    /// never used by the matching logic.
    #[serde(default)]
    image: Option<String>,
}

/// Handler for `POST /api/`.
///
/// Runs the query handler over the corpus store. Returns `404` when neither
/// corpus matches and `400` when the question exceeds the configured length
/// cap.
async fn handle_answer(
    State(state): State<AppState>,
    Json(req): Json<QuestionRequest>,
) -> Result<Json<Answer>, AppError> {
    let answer_config = &state.config.answer;

    if req.question.chars().count() > answer_config.max_question_chars {
        return Err(bad_request(format!(
            "question exceeds {} characters",
            answer_config.max_question_chars
        )));
    }

    if req.image.is_some() {
        debug!("image attachment present; images are not used for matching");
    }

    let answer = answer_question(&state.store, answer_config, &req.question).map_err(
        |err| match err {
            AnswerError::NoMatch => not_found(err.to_string()),
        },
    )?;

    Ok(Json(answer))
}
