//! Competition setup wizard validation.
//!
//! The setup wizard collects a competition configuration over six steps
//! (basic info, phases, categories, registration rules, competition rules,
//! review & deploy). Payloads arrive as free-form JSON objects from the
//! frontend; this module checks them field by field, step by step, and
//! across steps, accumulating every violation into a path-keyed error map
//! instead of failing fast.
//!
//! Entry points live on [`validator::SetupValidator`]. Everything else is
//! pure logic with no database or HTTP dependencies; the name/year
//! uniqueness check enters through the [`lookup::NameYearLookup`] trait
//! and the current date through [`crate::clock::Clock`].

mod chronology;
mod cross;
mod fields;
mod steps;

pub mod lookup;
pub mod result;
pub mod rules;
pub mod validator;

pub use lookup::{LookupError, NameYearLookup};
pub use result::{ErrorMap, SetupStep, ValidationResult};
pub use validator::SetupValidator;
