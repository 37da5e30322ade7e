use axum::{http::StatusCode, response::IntoResponse};

use crate::docjson::{DocJson, ErrorDocument, FieldErrors};

#[derive(Debug)]
pub enum ApiError {
    Validation(FieldErrors),
    BadRequest(String),
    Db(sqlx::Error),
    NotFound,
}

pub type ApiResult<T> = Result<T, ApiError>;

impl From<sqlx::Error> for ApiError {
    fn from(e: sqlx::Error) -> Self {
        ApiError::Db(e)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> axum::response::Response {
        match self {
            ApiError::Validation(errors) => (
                StatusCode::BAD_REQUEST,
                DocJson(ErrorDocument::from_field_errors(&errors)),
            )
                .into_response(),
            ApiError::BadRequest(msg) => {
                (StatusCode::BAD_REQUEST, DocJson(ErrorDocument::new(msg))).into_response()
            }
            ApiError::Db(e) => {
                tracing::error!("db error: {e}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    DocJson(ErrorDocument::new("Internal server error")),
                )
                    .into_response()
            }
            ApiError::NotFound => (
                StatusCode::NOT_FOUND,
                DocJson(ErrorDocument::new("Not found.")),
            )
                .into_response(),
        }
    }
}
