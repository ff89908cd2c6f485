//! Competition entity model and DTOs.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use sqlx::FromRow;

use robostage_core::types::{DbId, Timestamp};

/// A competition row from the `competitions` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Competition {
    pub id: DbId,
    pub name: String,
    pub year: i32,
    pub competition_type: String,
    pub geographic_scope: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub registration_opening: Option<NaiveDate>,
    pub registration_closing: Option<NaiveDate>,
    pub contact_email: Option<String>,
    pub description: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for inserting a competition from a validated wizard submission.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateCompetition {
    pub name: String,
    pub year: i32,
    pub competition_type: String,
    pub geographic_scope: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub registration_opening: Option<NaiveDate>,
    pub registration_closing: Option<NaiveDate>,
    pub contact_email: Option<String>,
    pub description: Option<String>,
}

fn text(step: &Value, key: &str) -> Option<String> {
    step.get(key)?.as_str().map(str::to_string)
}

fn date(step: &Value, key: &str) -> Option<NaiveDate> {
    step.get(key)?
        .as_str()
        .and_then(|s| NaiveDate::parse_from_str(s, "%Y-%m-%d").ok())
}

impl CreateCompetition {
    /// Extract the persisted fields from step 1 of a wizard submission.
    ///
    /// Intended for submissions that already passed setup validation;
    /// returns `None` if a required field is absent or malformed anyway,
    /// so a caller bug cannot turn into a panic.
    pub fn from_validated_setup(wizard: &Map<String, Value>) -> Option<Self> {
        let step1 = wizard.get("step_1")?;
        Some(Self {
            name: text(step1, "name")?,
            year: step1.get("year")?.as_i64()? as i32,
            competition_type: text(step1, "type")?,
            geographic_scope: text(step1, "geographic_scope")?,
            start_date: date(step1, "start_date")?,
            end_date: date(step1, "end_date")?,
            registration_opening: date(step1, "registration_opening"),
            registration_closing: date(step1, "registration_closing"),
            contact_email: text(step1, "contact_email"),
            description: text(step1, "description"),
        })
    }
}
