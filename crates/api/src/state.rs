use std::sync::Arc;

use robostage_core::clock::SystemClock;
use robostage_core::setup::SetupValidator;
use robostage_db::repositories::DbNameYearLookup;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc` or is already `Clone`).
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub pool: robostage_db::DbPool,
    /// Server configuration.
    pub config: Arc<ServerConfig>,
    /// Competition setup wizard validator.
    pub validator: Arc<SetupValidator>,
}

impl AppState {
    /// Wire up the validator with the production collaborators: the real
    /// clock and the database-backed uniqueness lookup.
    pub fn new(pool: robostage_db::DbPool, config: ServerConfig) -> Self {
        let validator = SetupValidator::new(
            Arc::new(SystemClock),
            Arc::new(DbNameYearLookup::new(pool.clone())),
        );
        Self {
            pool,
            config: Arc::new(config),
            validator: Arc::new(validator),
        }
    }
}
