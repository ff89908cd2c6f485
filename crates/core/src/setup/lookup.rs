//! Uniqueness lookup seam for step 1.
//!
//! Competition names must be unique per year. The check requires a data
//! store, which this crate does not touch, so it is modelled as an async
//! trait implemented by the repository layer. Tests supply doubles that
//! simulate "taken", "free", and transport failure.

use async_trait::async_trait;

/// Transport-level failure of the uniqueness lookup (connection refused,
/// query error, timeout). Never produced for "name not found".
#[derive(Debug, thiserror::Error)]
#[error("Name/year uniqueness lookup failed: {0}")]
pub struct LookupError(pub String);

/// Answers "does a competition with this name already exist for this year?".
#[async_trait]
pub trait NameYearLookup: Send + Sync {
    async fn name_year_exists(&self, name: &str, year: i32) -> Result<bool, LookupError>;
}
