use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};
use thiserror::Error;

use polls_core::error::PollsError;

use crate::views::templates;

/// Error returned by page handlers.
///
/// Renders as an HTML page. The not-found page is identical for unknown and
/// unpublished questions.
#[derive(Debug, Error)]
pub enum PageError {
    #[error("not found")]
    NotFound,

    #[error("internal error: {0}")]
    Internal(String),
}

impl PageError {
    /// Get HTTP status code for this error.
    pub fn status_code(&self) -> StatusCode {
        match self {
            PageError::NotFound => StatusCode::NOT_FOUND,
            PageError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for PageError {
    fn into_response(self) -> Response {
        let body = match &self {
            PageError::NotFound => templates::not_found_page(),
            PageError::Internal(msg) => {
                tracing::error!(error = %msg, "Request failed");
                templates::error_page()
            }
        };
        (self.status_code(), Html(body)).into_response()
    }
}

impl From<PollsError> for PageError {
    fn from(err: PollsError) -> Self {
        match err {
            PollsError::NotFound(_) => Self::NotFound,
            other => Self::Internal(other.to_string()),
        }
    }
}
