//! Route definitions for the `/competitions` resource.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::competitions;
use crate::state::AppState;

/// Routes mounted at `/competitions`.
///
/// ```text
/// GET  /                      -> list_competitions
/// POST /                      -> create_competition   (validates first)
/// GET  /{id}                  -> get_competition
/// POST /setup/validate-step   -> validate_step        (dry-run, one step)
/// POST /setup/validate        -> validate_setup       (dry-run, full wizard)
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/",
            get(competitions::list_competitions).post(competitions::create_competition),
        )
        .route("/{id}", get(competitions::get_competition))
        .route("/setup/validate-step", post(competitions::validate_step))
        .route("/setup/validate", post(competitions::validate_setup))
}
