//! Dragons Treasure Stats Server Library
//!
//! This module exports the core types and the router for testing and reuse.

pub mod config;
pub mod constants;
pub mod db;
pub mod error;
pub mod models;
pub mod routes;

pub use config::Config;
pub use error::{AppError, Result};

use axum::{
    routing::{get, post},
    Router,
};

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub pool: sqlx::SqlitePool,
    pub config: Config,
}

/// Build the application router
///
/// Kept in the library so integration tests drive the exact routing
/// table the server runs.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(routes::health_check))
        .route("/stats/:id_user", get(routes::get_stat))
        .route("/stats/victory", post(routes::record_victory))
        .route("/stats/defeat", post(routes::record_defeat))
        .with_state(state)
}
