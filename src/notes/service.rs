use sqlx::SqlitePool;

use crate::config::{DocSettings, DocumentProfile};

use super::{
    pagination::{Page, Paginator},
    query::QueryState,
    repo::{self, Note},
};

/// Snapshot of the notes one document is built from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NoteView {
    /// Notes matching the active filters, across all pages.
    pub count: usize,
    pub notes: Vec<Note>,
    pub page: Option<Page>,
}

pub async fn load_view(
    db: &SqlitePool,
    settings: &DocSettings,
    query: &QueryState,
) -> Result<NoteView, sqlx::Error> {
    match settings.profile {
        DocumentProfile::Flat => load_all(db, query).await,
        DocumentProfile::Paginated => load_page(db, query, settings.page_size).await,
    }
}

pub async fn load_all(db: &SqlitePool, query: &QueryState) -> Result<NoteView, sqlx::Error> {
    let notes = repo::list_notes(db, &query.filter(), None).await?;

    Ok(NoteView {
        count: notes.len(),
        notes,
        page: None,
    })
}

pub async fn load_page(
    db: &SqlitePool,
    query: &QueryState,
    per_page: usize,
) -> Result<NoteView, sqlx::Error> {
    let filter = query.filter();
    let count = repo::count_notes(db, &filter).await?.max(0) as usize;
    let page = Paginator::new(per_page, count).page(query.page);
    let notes = repo::list_notes(db, &filter, Some(page.window())).await?;

    Ok(NoteView {
        count,
        notes,
        page: Some(page),
    })
}
