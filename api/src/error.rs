use axum::{Json, http::StatusCode, response::IntoResponse};
use quill_common::views::ErrorResponse;
use quill_db::storage::StoreError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("{0}")]
    Validation(&'static str),

    /// Bad credentials at login. Same status as validation failures, but
    /// the message tells the caller which step failed.
    #[error("{0}")]
    InvalidCredentials(&'static str),

    #[error("{0}")]
    Unauthorized(&'static str),

    #[error(transparent)]
    Storage(#[from] StoreError),

    #[error(transparent)]
    Internal(#[from] anyhow::Error),
}

impl From<ApiError> for ErrorResponse {
    fn from(err: ApiError) -> Self {
        ErrorResponse {
            error: match &err {
                ApiError::Validation(msg) => (*msg).into(),
                ApiError::InvalidCredentials(msg) => (*msg).into(),
                ApiError::Unauthorized(msg) => (*msg).into(),
                ApiError::Storage(se) => match se {
                    StoreError::UsernameTaken => "username already taken".into(),
                    StoreError::NotFound => "article not found".into(),
                    StoreError::PermissionDenied => {
                        "you are not allowed to delete this article".into()
                    }
                    _ => "something went wrong on our end, please try again later".into(),
                },
                ApiError::Internal(_) => {
                    "something went wrong on our end, please try again later".into()
                }
            },

            #[cfg(debug_assertions)]
            details: Some(err.to_string()),

            #[cfg(not(debug_assertions))]
            details: None,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> axum::response::Response {
        tracing::error!("Error returned by handler: {self}");

        let status_code = match &self {
            Self::Validation(_) => StatusCode::BAD_REQUEST,
            Self::InvalidCredentials(_) => StatusCode::BAD_REQUEST,
            Self::Unauthorized(_) => StatusCode::UNAUTHORIZED,
            Self::Storage(se) => match se {
                StoreError::UsernameTaken => StatusCode::BAD_REQUEST,
                StoreError::NotFound => StatusCode::NOT_FOUND,
                StoreError::PermissionDenied => StatusCode::FORBIDDEN,
                _ => StatusCode::INTERNAL_SERVER_ERROR,
            },
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        (status_code, Json(Into::<ErrorResponse>::into(self))).into_response()
    }
}
