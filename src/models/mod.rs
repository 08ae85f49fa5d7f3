pub mod stats;
pub mod user;

pub use stats::{Outcome, StatRow};
pub use user::User;
