//! Handlers for the `/competitions` resource.
//!
//! Setup wizard validation (single step and full submission), creation
//! from a validated submission, and read access.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Deserialize;
use serde_json::{Map, Value};

use robostage_core::error::CoreError;
use robostage_core::types::DbId;
use robostage_db::models::competition::CreateCompetition;
use robostage_db::repositories::CompetitionRepo;

use crate::error::{AppError, AppResult};
use crate::response::DataResponse;
use crate::state::AppState;

// ── Setup wizard validation ──────────────────────────────────────────

/// Request body for single-step validation.
#[derive(Debug, Deserialize)]
pub struct ValidateStepRequest {
    /// 1-based wizard step number.
    pub step: u8,
    /// The step payload; defaults to empty, which fails the step's
    /// required-field checks rather than erroring.
    #[serde(default)]
    pub data: Value,
}

/// POST /api/v1/competitions/setup/validate-step
///
/// Validate one wizard step. A rule violation is data (200 with the
/// error map); an out-of-range step number is a 400.
pub async fn validate_step(
    State(state): State<AppState>,
    Json(request): Json<ValidateStepRequest>,
) -> AppResult<Json<DataResponse<robostage_core::setup::ValidationResult>>> {
    let result = state
        .validator
        .validate_step(request.step, &request.data)
        .await?;
    Ok(Json(DataResponse { data: result }))
}

/// POST /api/v1/competitions/setup/validate
///
/// Validate a complete wizard submission (all six steps plus cross-step
/// checks).
pub async fn validate_setup(
    State(state): State<AppState>,
    Json(wizard): Json<Map<String, Value>>,
) -> AppResult<Json<DataResponse<robostage_core::setup::ValidationResult>>> {
    let result = state.validator.validate_setup(&wizard).await?;
    Ok(Json(DataResponse { data: result }))
}

// ── Competition CRUD ─────────────────────────────────────────────────

/// POST /api/v1/competitions
///
/// Validate the wizard submission and, when it passes, persist the
/// competition. Returns 422 with the error map when validation fails,
/// 201 with the created row otherwise.
pub async fn create_competition(
    State(state): State<AppState>,
    Json(wizard): Json<Map<String, Value>>,
) -> AppResult<Response> {
    let result = state.validator.validate_setup(&wizard).await?;
    if !result.valid {
        let body = serde_json::json!({
            "error": "Competition setup failed validation",
            "code": "VALIDATION_FAILED",
            "errors": result.errors,
        });
        return Ok((StatusCode::UNPROCESSABLE_ENTITY, Json(body)).into_response());
    }

    let input = CreateCompetition::from_validated_setup(&wizard).ok_or_else(|| {
        AppError::InternalError("Validated setup is missing persisted step 1 fields".to_string())
    })?;
    let competition = CompetitionRepo::create(&state.pool, &input).await?;

    Ok((StatusCode::CREATED, Json(DataResponse { data: competition })).into_response())
}

/// GET /api/v1/competitions
pub async fn list_competitions(State(state): State<AppState>) -> AppResult<Response> {
    let competitions = CompetitionRepo::list(&state.pool).await?;
    Ok(Json(DataResponse { data: competitions }).into_response())
}

/// GET /api/v1/competitions/{id}
pub async fn get_competition(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Response> {
    let competition = CompetitionRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Competition",
            id,
        }))?;
    Ok(Json(DataResponse { data: competition }).into_response())
}
