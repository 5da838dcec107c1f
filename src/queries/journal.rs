use crate::{
    DbConn,
    error::{Error, Result},
    models::journal::{JournalEntry, NewJournalEntry},
};

/// Persists a new journal entry with its analysis results.
pub async fn create_entry(conn: &mut DbConn, new_entry: NewJournalEntry) -> Result<JournalEntry> {
    let entry = sqlx::query_as::<_, JournalEntry>(
        r#"
        INSERT INTO journal_entries (user_id, content, score, explanation, recommendation)
        VALUES ($1, $2, $3, $4, $5)
        RETURNING id, user_id, content, score, explanation, recommendation, created_at
        "#,
    )
    .bind(new_entry.user_id)
    .bind(&new_entry.content)
    .bind(new_entry.score)
    .bind(&new_entry.explanation)
    .bind(&new_entry.recommendation)
    .fetch_one(conn)
    .await
    .map_err(Error::Sqlx)?;

    Ok(entry)
}

/// Lists a user's journal entries, newest first.
pub async fn list_by_user(conn: &mut DbConn, user_id: i64) -> Result<Vec<JournalEntry>> {
    let entries = sqlx::query_as::<_, JournalEntry>(
        r#"
        SELECT id, user_id, content, score, explanation, recommendation, created_at
        FROM journal_entries
        WHERE user_id = $1
        ORDER BY created_at DESC
        "#,
    )
    .bind(user_id)
    .fetch_all(conn)
    .await
    .map_err(Error::Sqlx)?;

    Ok(entries)
}

/// Gets a single journal entry by its ID. The entry may not exist.
pub async fn get_entry(conn: &mut DbConn, id: i64) -> Result<Option<JournalEntry>> {
    let entry = sqlx::query_as::<_, JournalEntry>(
        r#"
        SELECT id, user_id, content, score, explanation, recommendation, created_at
        FROM journal_entries
        WHERE id = $1
        "#,
    )
    .bind(id)
    .fetch_optional(conn)
    .await
    .map_err(Error::Sqlx)?;

    Ok(entry)
}

/// Deletes a journal entry by its ID.
pub async fn delete_entry(conn: &mut DbConn, id: i64) -> Result<()> {
    sqlx::query("DELETE FROM journal_entries WHERE id = $1")
        .bind(id)
        .execute(conn)
        .await
        .map_err(Error::Sqlx)?;

    Ok(())
}

/// Gets the user's most recently created journal entry, if any.
pub async fn latest_for_user(conn: &mut DbConn, user_id: i64) -> Result<Option<JournalEntry>> {
    let entry = sqlx::query_as::<_, JournalEntry>(
        r#"
        SELECT id, user_id, content, score, explanation, recommendation, created_at
        FROM journal_entries
        WHERE user_id = $1
        ORDER BY created_at DESC
        LIMIT 1
        "#,
    )
    .bind(user_id)
    .fetch_optional(conn)
    .await
    .map_err(Error::Sqlx)?;

    Ok(entry)
}
