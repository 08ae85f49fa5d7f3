use serde::Serialize;

/// User row: numeric id plus the human-chosen gamertag
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct User {
    pub id: i64,
    pub gamertag: String,
}
