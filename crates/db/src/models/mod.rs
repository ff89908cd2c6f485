//! Entity models and DTOs.

pub mod competition;
