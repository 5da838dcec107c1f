use crate::{
    DbConn,
    error::{Error, Result},
    models::mood::{MoodEntry, NewMoodEntry},
};
use sqlx::types::Json;

/// Persists a new mood questionnaire entry with its analysis scores.
pub async fn create_entry(conn: &mut DbConn, new_entry: NewMoodEntry) -> Result<MoodEntry> {
    let entry = sqlx::query_as::<_, MoodEntry>(
        r#"
        INSERT INTO mood_entries (user_id, responses, mental_score, eq_score, self_awareness_score)
        VALUES ($1, $2, $3, $4, $5)
        RETURNING id, user_id, responses, mental_score, eq_score, self_awareness_score, created_at
        "#,
    )
    .bind(new_entry.user_id)
    .bind(Json(&new_entry.responses))
    .bind(new_entry.mental_score)
    .bind(new_entry.eq_score)
    .bind(new_entry.self_awareness_score)
    .fetch_one(conn)
    .await
    .map_err(Error::Sqlx)?;

    Ok(entry)
}

/// Lists a user's mood entries, newest first.
pub async fn list_by_user(conn: &mut DbConn, user_id: i64) -> Result<Vec<MoodEntry>> {
    let entries = sqlx::query_as::<_, MoodEntry>(
        r#"
        SELECT id, user_id, responses, mental_score, eq_score, self_awareness_score, created_at
        FROM mood_entries
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

/// Gets the user's most recently created mood entry, if any.
pub async fn latest_for_user(conn: &mut DbConn, user_id: i64) -> Result<Option<MoodEntry>> {
    let entry = sqlx::query_as::<_, MoodEntry>(
        r#"
        SELECT id, user_id, responses, mental_score, eq_score, self_awareness_score, created_at
        FROM mood_entries
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
