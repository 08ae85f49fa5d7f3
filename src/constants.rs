//! Wire-format message strings.
//!
//! The game client matches on these literals, so they are frozen here
//! rather than scattered through the handlers. The Spanish strings are
//! the read endpoint's original contract.

pub const MSG_GAMERTAG_REQUIRED: &str = "Gamertag is required";
pub const MSG_USER_NOT_FOUND: &str = "User not found";
pub const MSG_STATS_NOT_FOUND: &str = "Usuario no encontrado";
pub const MSG_INTERNAL_ERROR: &str = "Error interno del servidor";

pub const MSG_VICTORY_RECORDED: &str = "Victory recorded";
pub const MSG_DEFEAT_RECORDED: &str = "Defeat recorded";
pub const MSG_VICTORY_FAILED: &str = "Error recording victory";
pub const MSG_DEFEAT_FAILED: &str = "Error recording defeat";
