use sqlx::SqlitePool;

use crate::models::{Outcome, StatRow};

/// Fetch the statistics row for a user, if one exists
pub async fn fetch_for_user(
    pool: &SqlitePool,
    user_id: i64,
) -> Result<Option<StatRow>, sqlx::Error> {
    sqlx::query_as::<_, StatRow>(
        "SELECT id, user_id, victories, defeats FROM statistics WHERE user_id = ?",
    )
    .bind(user_id)
    .fetch_optional(pool)
    .await
}

/// Record an outcome for a user and return the updated row
///
/// Single upsert: creates the row with the recorded counter at 1 when the
/// user has no statistics yet, otherwise increments exactly that counter.
/// Atomic, so concurrent recordings for the same user cannot lose updates.
pub async fn record_outcome(
    pool: &SqlitePool,
    user_id: i64,
    outcome: Outcome,
) -> Result<StatRow, sqlx::Error> {
    sqlx::query_as::<_, StatRow>(
        "INSERT INTO statistics (user_id, victories, defeats) VALUES (?, ?, ?) \
         ON CONFLICT(user_id) DO UPDATE SET \
             victories = victories + excluded.victories, \
             defeats = defeats + excluded.defeats \
         RETURNING id, user_id, victories, defeats",
    )
    .bind(user_id)
    .bind(outcome.victory_delta())
    .bind(outcome.defeat_delta())
    .fetch_one(pool)
    .await
}
