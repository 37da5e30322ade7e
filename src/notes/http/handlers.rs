use axum::{
    body::Bytes,
    extract::{Path, State},
    http::HeaderMap,
};

use crate::{
    AppState,
    config::DocumentProfile,
    docjson::{Assembler, DocJson, Document, NoteList},
    error::{ApiError, ApiResult},
    extractors::request_context::RequestContext,
    notes::{repo, service, validate},
};

use super::dto::{DocumentQuery, NotePayload, parse_payload};

async fn render_document(state: &AppState, ctx: &RequestContext) -> ApiResult<DocJson<Document>> {
    let view = service::load_view(&state.db, &state.docs, &ctx.query).await?;
    let doc = Assembler::new(state.docs.profile, &ctx.query, &ctx.links).document(&view);
    Ok(DocJson(doc))
}

/// Ids are digits only; anything else cannot name a note.
fn parse_note_id(raw: &str) -> ApiResult<i64> {
    if raw.is_empty() || !raw.bytes().all(|b| b.is_ascii_digit()) {
        return Err(ApiError::NotFound);
    }
    raw.parse().map_err(|_| ApiError::NotFound)
}

#[utoipa::path(
    get,
    path = "/",
    params(DocumentQuery),
    responses(
        (status = 200, description = "ToDo document", body = Document, content_type = "vnd.document+json"),
        (status = 500, description = "Internal server error", body = crate::docjson::ErrorDocument)
    ),
    tag = "Notes"
)]
pub async fn get_document(
    State(state): State<AppState>,
    ctx: RequestContext,
) -> ApiResult<DocJson<Document>> {
    render_document(&state, &ctx).await
}

#[utoipa::path(
    post,
    path = "/",
    params(DocumentQuery),
    request_body = NotePayload,
    responses(
        (status = 200, description = "Note created, refreshed document", body = Document, content_type = "vnd.document+json"),
        (status = 400, description = "Invalid note payload", body = crate::docjson::ErrorDocument),
        (status = 500, description = "Internal server error", body = crate::docjson::ErrorDocument)
    ),
    tag = "Notes"
)]
pub async fn create_note(
    State(state): State<AppState>,
    ctx: RequestContext,
    headers: HeaderMap,
    body: Bytes,
) -> ApiResult<DocJson<Document>> {
    let payload = parse_payload(&headers, &body)?;
    let new_note = validate::validate_new_note(&payload).map_err(ApiError::Validation)?;

    let note = repo::create_note(&state.db, new_note).await?;
    tracing::info!(note_id = note.id, completed = note.completed, "note created");

    render_document(&state, &ctx).await
}

#[utoipa::path(
    patch,
    path = "/{id}/",
    description = "Partial update. `PUT` is routed to the same handler with the same semantics.",
    params(
        ("id" = i64, Path, description = "Note id"),
        DocumentQuery
    ),
    request_body = NotePayload,
    responses(
        (status = 200, description = "Note updated, refreshed document", body = Document, content_type = "vnd.document+json"),
        (status = 400, description = "Invalid note payload", body = crate::docjson::ErrorDocument),
        (status = 404, description = "Note not found", body = crate::docjson::ErrorDocument),
        (status = 500, description = "Internal server error", body = crate::docjson::ErrorDocument)
    ),
    tag = "Notes"
)]
pub async fn update_note(
    State(state): State<AppState>,
    Path(note_id): Path<String>,
    ctx: RequestContext,
    headers: HeaderMap,
    body: Bytes,
) -> ApiResult<DocJson<Document>> {
    let note_id = parse_note_id(&note_id)?;
    // unknown ids are reported before payload problems
    repo::get_note(&state.db, note_id)
        .await?
        .ok_or(ApiError::NotFound)?;

    let payload = parse_payload(&headers, &body)?;
    let changes = validate::validate_note_changes(&payload).map_err(ApiError::Validation)?;

    let note = repo::update_note(&state.db, note_id, changes)
        .await?
        .ok_or(ApiError::NotFound)?;
    tracing::info!(note_id = note.id, completed = note.completed, "note updated");

    render_document(&state, &ctx).await
}

#[utoipa::path(
    delete,
    path = "/{id}/",
    params(
        ("id" = i64, Path, description = "Note id"),
        DocumentQuery
    ),
    responses(
        (status = 200, description = "Note deleted, refreshed document", body = Document, content_type = "vnd.document+json"),
        (status = 404, description = "Note not found", body = crate::docjson::ErrorDocument),
        (status = 500, description = "Internal server error", body = crate::docjson::ErrorDocument)
    ),
    tag = "Notes"
)]
pub async fn delete_note(
    State(state): State<AppState>,
    Path(note_id): Path<String>,
    ctx: RequestContext,
) -> ApiResult<DocJson<Document>> {
    let note_id = parse_note_id(&note_id)?;
    let deleted = repo::delete_note(&state.db, note_id).await?;

    if !deleted {
        return Err(ApiError::NotFound);
    }
    tracing::info!(note_id, "note deleted");

    render_document(&state, &ctx).await
}

#[utoipa::path(
    get,
    path = "/list/",
    params(DocumentQuery),
    responses(
        (status = 200, description = "One page of notes", body = NoteList, content_type = "vnd.document+json"),
        (status = 500, description = "Internal server error", body = crate::docjson::ErrorDocument)
    ),
    tag = "Notes"
)]
pub async fn list_fragment(
    State(state): State<AppState>,
    ctx: RequestContext,
) -> ApiResult<DocJson<NoteList>> {
    // `/list/` belongs to the paginated layout whatever profile serves `/`
    let view = service::load_page(&state.db, &ctx.query, state.docs.page_size).await?;
    let list =
        Assembler::new(DocumentProfile::Paginated, &ctx.query, &ctx.links).note_list(&view);
    Ok(DocJson(list))
}
