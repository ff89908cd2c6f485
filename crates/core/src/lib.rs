//! RoboStage domain logic.
//!
//! Pure business rules for the competition-management platform. The main
//! export is the competition setup wizard validator ([`setup`]), which the
//! API and repository layers drive. Nothing in this crate touches the
//! database or HTTP directly; external collaborators (uniqueness lookup,
//! clock) enter through traits.

pub mod clock;
pub mod error;
pub mod setup;
pub mod types;
