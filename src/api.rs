//! HTTP API endpoints for prompts, players, and service health.
//!
//! Flat handlers over the shared [`AppState`]; every failure renders as
//! `{"error": "<message>"}` via [`ApiError`].

use axum::{
    extract::{rejection::JsonRejection, Query, State},
    routing::{get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::ApiError;
use crate::state::AppState;

/// Query parameters for the question endpoint
#[derive(Debug, Deserialize)]
pub struct QuestionParams {
    #[serde(default = "default_difficulty")]
    pub difficulty: String,
    #[serde(default = "default_choice")]
    pub choice: String,
}

/// Query parameters for the choice listing
#[derive(Debug, Deserialize)]
pub struct ChoicesParams {
    #[serde(default = "default_difficulty")]
    pub difficulty: String,
}

fn default_difficulty() -> String {
    "kids".to_string()
}

fn default_choice() -> String {
    "truth".to_string()
}

/// Response structure for a question draw
#[derive(Debug, Clone, Serialize)]
pub struct QuestionResponse {
    pub question: String,
    pub difficulty: String,
    pub choice: String,
}

/// Response structure for the difficulty listing
#[derive(Debug, Clone, Serialize)]
pub struct DifficultiesResponse {
    pub difficulties: Vec<String>,
}

/// Response structure for the choice listing
#[derive(Debug, Clone, Serialize)]
pub struct ChoicesResponse {
    pub choices: Vec<String>,
}

/// Response structure for a player draw
#[derive(Debug, Clone, Serialize)]
pub struct PlayerResponse {
    pub selected: String,
}

/// Response structure for the health probe
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
}

/// Draw a random question.
///
/// GET /api/question?difficulty=kids&choice=truth
///
/// Both parameters are optional and default to "kids" and "truth".
pub async fn get_question(
    State(state): State<AppState>,
    Query(params): Query<QuestionParams>,
) -> Result<Json<QuestionResponse>, ApiError> {
    let question = state.random_question(&params.difficulty, &params.choice)?;
    Ok(Json(QuestionResponse {
        question,
        difficulty: params.difficulty,
        choice: params.choice,
    }))
}

/// List all difficulty levels.
///
/// GET /api/difficulties
pub async fn get_difficulties(State(state): State<AppState>) -> Json<DifficultiesResponse> {
    Json(DifficultiesResponse {
        difficulties: state.difficulties(),
    })
}

/// List the choices available under one difficulty.
///
/// GET /api/choices?difficulty=kids
pub async fn get_choices(
    State(state): State<AppState>,
    Query(params): Query<ChoicesParams>,
) -> Result<Json<ChoicesResponse>, ApiError> {
    let choices = state.choices(&params.difficulty)?;
    Ok(Json(ChoicesResponse { choices }))
}

/// Pick one player at random from a submitted name list.
///
/// POST /api/players with body `{"names": ["Alice", "Bob"]}`
///
/// Non-string entries are dropped and the rest trimmed before the 2-to-4
/// player range is enforced. A missing or unparsable body counts as a
/// missing name list, so the error shape stays uniform.
pub async fn post_players(
    State(state): State<AppState>,
    body: Result<Json<Value>, JsonRejection>,
) -> Result<Json<PlayerResponse>, ApiError> {
    let Ok(Json(body)) = body else {
        return Err(ApiError::MissingNames);
    };
    let names = body.get("names").ok_or(ApiError::MissingNames)?;
    let names = names.as_array().ok_or(ApiError::NamesNotArray)?;

    let cleaned = clean_names(names);
    let selected = state.select_player(&cleaned)?;
    Ok(Json(PlayerResponse { selected }))
}

/// Liveness probe.
///
/// GET /api/health
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse { status: "ok" })
}

/// All /api routes. State is supplied by the caller.
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/api/question", get(get_question))
        .route("/api/difficulties", get(get_difficulties))
        .route("/api/choices", get(get_choices))
        .route("/api/players", post(post_players))
        .route("/api/health", get(health))
}

/// Keep string entries, trimmed, dropping any that end up empty. Order and
/// duplicates survive.
fn clean_names(names: &[Value]) -> Vec<String> {
    names
        .iter()
        .filter_map(|value| value.as_str())
        .filter_map(|name| {
            let trimmed = name.trim();
            (!trimmed.is_empty()).then(|| trimmed.to_string())
        })
        .collect()
}
