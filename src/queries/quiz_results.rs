use crate::{
    DbConn,
    error::{Error, Result},
    models::quiz::{NewQuizResult, QuizResult},
};
use sqlx::types::Json;

/// Persists a completed quiz attempt.
pub async fn create_result(conn: &mut DbConn, new_result: NewQuizResult) -> Result<QuizResult> {
    let result = sqlx::query_as::<_, QuizResult>(
        r#"
        INSERT INTO quiz_results (user_id, quiz_id, title, answers, total_score, result_text)
        VALUES ($1, $2, $3, $4, $5, $6)
        RETURNING id, user_id, quiz_id, title, answers, total_score, result_text, created_at
        "#,
    )
    .bind(new_result.user_id)
    .bind(new_result.quiz_id)
    .bind(&new_result.title)
    .bind(Json(&new_result.answers))
    .bind(new_result.total_score)
    .bind(&new_result.result_text)
    .fetch_one(conn)
    .await
    .map_err(Error::Sqlx)?;

    Ok(result)
}

/// Lists a user's quiz results, newest first.
pub async fn list_by_user(conn: &mut DbConn, user_id: i64) -> Result<Vec<QuizResult>> {
    let results = sqlx::query_as::<_, QuizResult>(
        r#"
        SELECT id, user_id, quiz_id, title, answers, total_score, result_text, created_at
        FROM quiz_results
        WHERE user_id = $1
        ORDER BY created_at DESC
        "#,
    )
    .bind(user_id)
    .fetch_all(conn)
    .await
    .map_err(Error::Sqlx)?;

    Ok(results)
}

/// Gets the user's most recently created quiz result, if any.
pub async fn latest_for_user(conn: &mut DbConn, user_id: i64) -> Result<Option<QuizResult>> {
    let result = sqlx::query_as::<_, QuizResult>(
        r#"
        SELECT id, user_id, quiz_id, title, answers, total_score, result_text, created_at
        FROM quiz_results
        WHERE user_id = $1
        ORDER BY created_at DESC
        LIMIT 1
        "#,
    )
    .bind(user_id)
    .fetch_optional(conn)
    .await
    .map_err(Error::Sqlx)?;

    Ok(result)
}
