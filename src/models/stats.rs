use serde::Serialize;
use std::fmt;

use crate::constants::{
    MSG_DEFEAT_FAILED, MSG_DEFEAT_RECORDED, MSG_VICTORY_FAILED, MSG_VICTORY_RECORDED,
};

/// A user's statistics row
///
/// Serializes with the wire field names the game client expects
/// (the read endpoint predates this rewrite and uses Spanish names).
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct StatRow {
    pub id: i64,
    #[serde(rename = "idUsuario")]
    pub user_id: i64,
    #[serde(rename = "victorias")]
    pub victories: i64,
    #[serde(rename = "derrotas")]
    pub defeats: i64,
}

/// Match outcome being recorded for a user
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Victory,
    Defeat,
}

impl Outcome {
    /// Amount added to the victories counter (1 or 0)
    pub fn victory_delta(self) -> i64 {
        match self {
            Outcome::Victory => 1,
            Outcome::Defeat => 0,
        }
    }

    /// Amount added to the defeats counter (1 or 0)
    pub fn defeat_delta(self) -> i64 {
        match self {
            Outcome::Victory => 0,
            Outcome::Defeat => 1,
        }
    }

    /// Success message for the record response
    pub fn recorded_message(self) -> &'static str {
        match self {
            Outcome::Victory => MSG_VICTORY_RECORDED,
            Outcome::Defeat => MSG_DEFEAT_RECORDED,
        }
    }

    /// Error message when the store fails mid-record
    pub fn failure_message(self) -> &'static str {
        match self {
            Outcome::Victory => MSG_VICTORY_FAILED,
            Outcome::Defeat => MSG_DEFEAT_FAILED,
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::Victory => write!(f, "victory"),
            Outcome::Defeat => write!(f, "defeat"),
        }
    }
}
