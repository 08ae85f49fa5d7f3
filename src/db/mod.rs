pub mod pool;
pub mod stats;
pub mod users;

pub use pool::create_pool;
