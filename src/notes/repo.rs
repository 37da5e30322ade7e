use sqlx::SqlitePool;

#[derive(Debug, Clone, PartialEq, Eq, sqlx::FromRow)]
pub struct Note {
    pub id: i64,
    pub text: String,
    pub completed: bool,
}

#[derive(Debug, Clone)]
pub struct NewNote {
    pub text: String,
    pub completed: bool,
}

/// Partial update: `None` leaves the column untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NoteChanges {
    pub text: Option<String>,
    pub completed: Option<bool>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NoteFilter {
    pub completed: Option<bool>,
    /// Case-insensitive substring of `text`.
    pub term: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Window {
    pub limit: i64,
    pub offset: i64,
}

pub async fn create_note(db: &SqlitePool, note: NewNote) -> Result<Note, sqlx::Error> {
    sqlx::query_as::<_, Note>(
        r#"
        INSERT INTO notes (text, completed)
        VALUES (?1, ?2)
        RETURNING id, text, completed
        "#,
    )
    .bind(note.text)
    .bind(note.completed)
    .fetch_one(db)
    .await
}

pub async fn get_note(db: &SqlitePool, note_id: i64) -> Result<Option<Note>, sqlx::Error> {
    sqlx::query_as::<_, Note>(
        r#"
        SELECT id, text, completed
        FROM notes
        WHERE id = ?1
        "#,
    )
    .bind(note_id)
    .fetch_optional(db)
    .await
}

pub async fn count_notes(db: &SqlitePool, filter: &NoteFilter) -> Result<i64, sqlx::Error> {
    sqlx::query_scalar::<_, i64>(
        r#"
        SELECT COUNT(*)
        FROM notes
        WHERE (?1 IS NULL OR completed = ?1)
          AND (?2 IS NULL OR instr(lower(text), lower(?2)) > 0)
        "#,
    )
    .bind(filter.completed)
    .bind(filter.term.as_deref())
    .fetch_one(db)
    .await
}

/// Notes matching `filter`, most recently created first. Without a window
/// every matching note is returned.
pub async fn list_notes(
    db: &SqlitePool,
    filter: &NoteFilter,
    window: Option<Window>,
) -> Result<Vec<Note>, sqlx::Error> {
    // sqlite treats a negative LIMIT as "no limit"
    let Window { limit, offset } = window.unwrap_or(Window {
        limit: -1,
        offset: 0,
    });

    sqlx::query_as::<_, Note>(
        r#"
        SELECT id, text, completed
        FROM notes
        WHERE (?1 IS NULL OR completed = ?1)
          AND (?2 IS NULL OR instr(lower(text), lower(?2)) > 0)
        ORDER BY id DESC
        LIMIT ?3 OFFSET ?4
        "#,
    )
    .bind(filter.completed)
    .bind(filter.term.as_deref())
    .bind(limit)
    .bind(offset)
    .fetch_all(db)
    .await
}

pub async fn update_note(
    db: &SqlitePool,
    note_id: i64,
    changes: NoteChanges,
) -> Result<Option<Note>, sqlx::Error> {
    sqlx::query_as::<_, Note>(
        r#"
        UPDATE notes
        SET text = COALESCE(?2, text),
            completed = COALESCE(?3, completed)
        WHERE id = ?1
        RETURNING id, text, completed
        "#,
    )
    .bind(note_id)
    .bind(changes.text)
    .bind(changes.completed)
    .fetch_optional(db)
    .await
}

pub async fn delete_note(db: &SqlitePool, note_id: i64) -> Result<bool, sqlx::Error> {
    let res = sqlx::query(
        r#"
        DELETE FROM notes
        WHERE id = ?1
        "#,
    )
    .bind(note_id)
    .execute(db)
    .await?;

    Ok(res.rows_affected() == 1)
}
