//! Validation aggregator: the public entry points of the setup wizard
//! validator.
//!
//! Each call builds its own fresh [`ErrorMap`], so concurrent requests
//! never share accumulator state. Rule violations are collected, not
//! raised; the only `Err` outcomes are an out-of-range step number and a
//! transport failure of the uniqueness lookup.

use std::sync::Arc;

use serde_json::{Map, Value};

use crate::clock::Clock;
use crate::error::CoreError;

use super::chronology::CHRONOLOGY_PATH;
use super::cross;
use super::lookup::NameYearLookup;
use super::result::{ErrorMap, SetupStep, ValidationResult};
use super::steps;

/// Validates competition setup wizard submissions.
///
/// Holds the two external collaborators the rules need: a clock (year
/// window checks) and the name/year uniqueness lookup.
pub struct SetupValidator {
    clock: Arc<dyn Clock>,
    lookup: Arc<dyn NameYearLookup>,
}

impl SetupValidator {
    pub fn new(clock: Arc<dyn Clock>, lookup: Arc<dyn NameYearLookup>) -> Self {
        Self { clock, lookup }
    }

    /// Validate a single wizard step.
    ///
    /// Returns `Err` for a step number outside 1..=6 (the caller sent a
    /// step the wizard does not have) or when the uniqueness lookup fails
    /// at the transport level.
    pub async fn validate_step(
        &self,
        step_number: u8,
        data: &Value,
    ) -> Result<ValidationResult, CoreError> {
        let step = SetupStep::from_number(step_number)?;
        let mut errors = ErrorMap::new();
        let candidate = self.run_step(step, data, &mut errors);
        if let Some((name, year)) = candidate {
            self.check_name_year_unique(&mut errors, "name", &name, year)
                .await?;
        }
        Ok(ValidationResult::from_errors(errors))
    }

    /// Validate the complete wizard submission.
    ///
    /// All six steps run (missing step data is treated as an empty record,
    /// which fails that step's required-field checks), then the cross-step
    /// checks run regardless of per-step outcomes. Per-step error paths
    /// are prefixed with `step_N.`; `phases_chronology` and
    /// `cross_validation` stay flat.
    pub async fn validate_setup(
        &self,
        wizard: &Map<String, Value>,
    ) -> Result<ValidationResult, CoreError> {
        let empty = Value::Object(Map::new());
        let mut errors = ErrorMap::new();
        let mut candidate = None;

        for step in SetupStep::ALL {
            let data = wizard.get(step.data_key()).unwrap_or(&empty);
            let mut step_errors = ErrorMap::new();
            if let Some(found) = self.run_step(step, data, &mut step_errors) {
                candidate = Some(found);
            }
            merge_step(&mut errors, step.data_key(), step_errors);
        }

        if let Some((name, year)) = candidate {
            self.check_name_year_unique(&mut errors, "step_1.name", &name, year)
                .await?;
        }

        cross::validate_cross_step(&mut errors, wizard);

        Ok(ValidationResult::from_errors(errors))
    }

    /// Dispatch to the one step validator. Only step 1 yields a lookup
    /// candidate.
    fn run_step(
        &self,
        step: SetupStep,
        data: &Value,
        errors: &mut ErrorMap,
    ) -> Option<(String, i32)> {
        match step {
            SetupStep::BasicInfo => {
                return steps::validate_basic_info(errors, data, self.clock.today());
            }
            SetupStep::Phases => steps::validate_phases(errors, data),
            SetupStep::Categories => steps::validate_categories(errors, data),
            SetupStep::RegistrationRules => steps::validate_registration_rules(errors, data),
            SetupStep::CompetitionRules => steps::validate_competition_rules(errors, data),
            SetupStep::ReviewDeploy => steps::validate_review(errors, data),
        }
        None
    }

    /// A taken name/year is a rule violation on the name field; a failed
    /// lookup propagates as an error so it can never masquerade as
    /// "unique".
    async fn check_name_year_unique(
        &self,
        errors: &mut ErrorMap,
        path: &str,
        name: &str,
        year: i32,
    ) -> Result<(), CoreError> {
        if self.lookup.name_year_exists(name, year).await? {
            errors.add(
                path,
                format!("A competition named '{name}' already exists for {year}"),
            );
        }
        Ok(())
    }
}

/// Merge one step's errors into the submission-wide map, prefixing field
/// paths with the step key. Chronology errors keep their flat top-level
/// path.
fn merge_step(errors: &mut ErrorMap, step_key: &str, step_errors: ErrorMap) {
    for (path, messages) in step_errors {
        let target = if path == CHRONOLOGY_PATH {
            path
        } else {
            format!("{step_key}.{path}")
        };
        for message in messages {
            errors.add(&target, message);
        }
    }
}
