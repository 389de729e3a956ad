//! Error and message bodies shared by all endpoints.
//!
//! Successful responses carry the raw JSON rows; failures carry
//! `{"error": "..."}` (400/500) or `{"message": "..."}` (404). Store errors
//! are logged with their driver text and surface only a generic string.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use sea_orm::DbErr;
use serde::Serialize;

/// `{"error": "..."}` body used by 400 and 500 responses.
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub error: String,
}

/// `{"message": "..."}` body used by 404 responses and mutation results.
#[derive(Debug, Serialize)]
pub struct MessageBody {
    pub message: String,
}

/// Failure taxonomy of every handler.
#[derive(Debug)]
pub enum ApiError {
    /// Required parameter/field absent or malformed.
    BadRequest(String),
    /// Query returned zero rows where the semantics require at least one.
    NotFound(String),
    /// Underlying query/connection failure.
    Db(DbErr),
}

impl ApiError {
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::BadRequest(message.into())
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::NotFound(message.into())
    }
}

impl From<DbErr> for ApiError {
    fn from(err: DbErr) -> Self {
        Self::Db(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::BadRequest(error) => {
                (StatusCode::BAD_REQUEST, Json(ErrorBody { error })).into_response()
            }
            ApiError::NotFound(message) => {
                (StatusCode::NOT_FOUND, Json(MessageBody { message })).into_response()
            }
            ApiError::Db(err) => {
                tracing::error!("database error: {err}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(ErrorBody {
                        error: "Error interno del servidor".to_string(),
                    }),
                )
                    .into_response()
            }
        }
    }
}
