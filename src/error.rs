//! Client-facing error taxonomy for the HTTP API.
//!
//! Every failure an endpoint can report is a variant here; the display
//! string is the exact message clients see. Handlers return these with `?`
//! and the IntoResponse impl turns them into `{"error": msg}` bodies.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ApiError {
    #[error("Invalid category. Choose: kids or adult")]
    InvalidCategory,

    #[error("Invalid choice. Choose: truth or dare")]
    InvalidChoice,

    #[error("No questions available")]
    NoQuestionsAvailable,

    #[error("Invalid difficulty")]
    InvalidDifficulty,

    #[error("Request body must include a 'names' array")]
    MissingNames,

    #[error("'names' must be an array")]
    NamesNotArray,

    #[error("Provide between 2 and 4 player names")]
    InvalidPlayerCount,
}

impl ApiError {
    /// HTTP status for this error.
    ///
    /// An empty prompt list reports as 404; all validation failures are 400.
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::NoQuestionsAvailable => StatusCode::NOT_FOUND,
            _ => StatusCode::BAD_REQUEST,
        }
    }
}

/// Wire shape for all error responses.
#[derive(Debug, Serialize)]
struct ErrorBody {
    error: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = ErrorBody {
            error: self.to_string(),
        };
        (self.status(), Json(body)).into_response()
    }
}
