pub mod competitions;
pub mod health;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /competitions                         list (GET), create from wizard (POST)
/// /competitions/{id}                    fetch one (GET)
/// /competitions/setup/validate-step     validate a single wizard step (POST)
/// /competitions/setup/validate          validate a full wizard submission (POST)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new().nest("/competitions", competitions::router())
}
