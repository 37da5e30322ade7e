use axum::{
    Router,
    routing::{get, patch},
};

use crate::AppState;

mod dto;
pub(crate) mod handlers;

pub use dto::{DocumentQuery, NotePayload};
pub use handlers::{create_note, delete_note, get_document, list_fragment, update_note};

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(get_document).post(create_note))
        .route(
            "/{id}/",
            patch(update_note).put(update_note).delete(delete_note),
        )
        .route("/list/", get(list_fragment))
}
