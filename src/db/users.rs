use sqlx::SqlitePool;

use crate::models::User;

/// Look up a user by gamertag
///
/// Exact, case-sensitive equality match; no normalization is applied.
pub async fn find_by_gamertag(
    pool: &SqlitePool,
    gamertag: &str,
) -> Result<Option<User>, sqlx::Error> {
    sqlx::query_as::<_, User>("SELECT id, gamertag FROM users WHERE gamertag = ?")
        .bind(gamertag)
        .fetch_optional(pool)
        .await
}
