use axum::{Router, routing::get};

use crate::AppState;

pub(crate) mod handlers;

pub use handlers::{db_health, health};

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(health))
        .route("/db-health", get(db_health))
}
