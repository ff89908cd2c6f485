//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async CRUD methods
//! that accept `&PgPool` as the first argument.

pub mod competition_repo;

pub use competition_repo::{CompetitionRepo, DbNameYearLookup};
