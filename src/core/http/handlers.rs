use axum::extract::State;

use crate::{
    AppState,
    error::{ApiError, ApiResult},
};

#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Service is alive", body = String, content_type = "text/plain")
    ),
    tag = "Core"
)]
pub async fn health() -> &'static str {
    "ok"
}

#[utoipa::path(
    get,
    path = "/db-health",
    responses(
        (status = 200, description = "Database is alive", body = String, content_type = "text/plain"),
        (status = 400, description = "Unexpected db result", body = crate::docjson::ErrorDocument),
        (status = 500, description = "Internal server error", body = crate::docjson::ErrorDocument)
    ),
    tag = "Core"
)]
pub async fn db_health(State(state): State<AppState>) -> ApiResult<&'static str> {
    let one: i64 = sqlx::query_scalar("SELECT 1")
        .fetch_one(&state.db)
        .await
        .map_err(ApiError::Db)?;

    if one == 1 {
        Ok("ok")
    } else {
        Err(ApiError::BadRequest("unexpected db result".to_string()))
    }
}
