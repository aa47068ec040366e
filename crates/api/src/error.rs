use axum::{
    Json,
    extract::rejection::{JsonRejection, PathRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    /// A store call failed; `context` is the message the client sees.
    #[error("{context}")]
    Store {
        context: &'static str,
        #[source]
        source: sqlx::Error,
    },

    #[error("database error")]
    Db(#[from] sqlx::Error),

    #[error("{0}")]
    BadRequest(String),

    /// The booking collides with an existing one.
    #[error("{0}")]
    Conflict(String),

    #[error("{0}")]
    NotFound(String),
}

impl AppError {
    /// Wrap a store failure with the endpoint's client-facing message.
    pub fn store(context: &'static str) -> impl FnOnce(sqlx::Error) -> Self {
        move |source| AppError::Store { context, source }
    }
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::BadRequest(rejection.body_text())
    }
}

impl From<PathRejection> for AppError {
    fn from(rejection: PathRejection) -> Self {
        AppError::BadRequest(rejection.body_text())
    }
}

#[derive(Serialize)]
struct ErrorBody {
    message: String,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = match &self {
            AppError::Store { context, source } => {
                tracing::error!(error = %source, "{context}");
                StatusCode::INTERNAL_SERVER_ERROR
            }
            AppError::Db(source) => {
                tracing::error!(error = %source, "Database error");
                StatusCode::INTERNAL_SERVER_ERROR
            }
            AppError::BadRequest(_) | AppError::Conflict(_) => StatusCode::BAD_REQUEST,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
        };
        (
            status,
            Json(ErrorBody {
                message: self.to_string(),
            }),
        )
            .into_response()
    }
}
