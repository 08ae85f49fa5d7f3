pub mod health;
pub mod stats;

pub use health::health_check;
pub use stats::{get_stat, record_defeat, record_victory};
