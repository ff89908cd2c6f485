//! Repository for the `competitions` table.

use async_trait::async_trait;
use sqlx::PgPool;

use robostage_core::setup::{LookupError, NameYearLookup};
use robostage_core::types::DbId;

use crate::models::competition::{Competition, CreateCompetition};
use crate::DbPool;

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, name, year, competition_type, geographic_scope, start_date, end_date, \
                       registration_opening, registration_closing, contact_email, description, \
                       created_at, updated_at";

/// Provides CRUD operations for competitions.
pub struct CompetitionRepo;

impl CompetitionRepo {
    /// Insert a new competition, returning the created row.
    ///
    /// The `uq_competitions_name_year` constraint backstops the wizard's
    /// uniqueness check against concurrent submissions.
    pub async fn create(
        pool: &PgPool,
        input: &CreateCompetition,
    ) -> Result<Competition, sqlx::Error> {
        let query = format!(
            "INSERT INTO competitions
                (name, year, competition_type, geographic_scope, start_date, end_date,
                 registration_opening, registration_closing, contact_email, description)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Competition>(&query)
            .bind(&input.name)
            .bind(input.year)
            .bind(&input.competition_type)
            .bind(&input.geographic_scope)
            .bind(input.start_date)
            .bind(input.end_date)
            .bind(input.registration_opening)
            .bind(input.registration_closing)
            .bind(&input.contact_email)
            .bind(&input.description)
            .fetch_one(pool)
            .await
    }

    /// Find a competition by its internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Competition>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM competitions WHERE id = $1");
        sqlx::query_as::<_, Competition>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all competitions, most recent year first.
    pub async fn list(pool: &PgPool) -> Result<Vec<Competition>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM competitions ORDER BY year DESC, name ASC");
        sqlx::query_as::<_, Competition>(&query)
            .fetch_all(pool)
            .await
    }

    /// Whether a competition with this name already exists for the year.
    pub async fn name_year_exists(
        pool: &PgPool,
        name: &str,
        year: i32,
    ) -> Result<bool, sqlx::Error> {
        sqlx::query_scalar::<_, bool>(
            "SELECT EXISTS(SELECT 1 FROM competitions WHERE name = $1 AND year = $2)",
        )
        .bind(name)
        .bind(year)
        .fetch_one(pool)
        .await
    }
}

/// Database-backed implementation of the setup validator's uniqueness
/// seam.
#[derive(Clone)]
pub struct DbNameYearLookup {
    pool: DbPool,
}

impl DbNameYearLookup {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl NameYearLookup for DbNameYearLookup {
    async fn name_year_exists(&self, name: &str, year: i32) -> Result<bool, LookupError> {
        CompetitionRepo::name_year_exists(&self.pool, name, year)
            .await
            .map_err(|err| {
                tracing::error!(error = %err, "Name/year uniqueness query failed");
                LookupError(err.to_string())
            })
    }
}
