use crate::setup::lookup::LookupError;
use crate::types::DbId;

#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Entity not found: {entity} with id {id}")]
    NotFound { entity: &'static str, id: DbId },

    #[error("Validation failed: {0}")]
    Validation(String),

    /// The name/year uniqueness lookup failed at the transport level.
    ///
    /// Deliberately distinct from a rule violation: a broken database
    /// connection must never be reported as "name is unique".
    #[error(transparent)]
    Lookup(#[from] LookupError),

    #[error("Internal error: {0}")]
    Internal(String),
}
