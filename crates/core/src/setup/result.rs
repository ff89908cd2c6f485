//! Validation output types and the wizard step enumeration.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::error::CoreError;

// ---------------------------------------------------------------------------
// Wizard steps
// ---------------------------------------------------------------------------

/// The six steps of the competition setup wizard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SetupStep {
    BasicInfo,
    Phases,
    Categories,
    RegistrationRules,
    CompetitionRules,
    ReviewDeploy,
}

/// Minimum step number (1-based).
pub const MIN_STEP: u8 = 1;

/// Maximum step number (1-based).
pub const MAX_STEP: u8 = 6;

impl SetupStep {
    /// All steps in wizard order.
    pub const ALL: [SetupStep; 6] = [
        Self::BasicInfo,
        Self::Phases,
        Self::Categories,
        Self::RegistrationRules,
        Self::CompetitionRules,
        Self::ReviewDeploy,
    ];

    /// Convert a 1-based step number to a `SetupStep`.
    ///
    /// An out-of-range number is an error, not a silent pass: treating an
    /// unknown step as "valid" would let a buggy caller deploy an
    /// unvalidated configuration.
    pub fn from_number(n: u8) -> Result<Self, CoreError> {
        match n {
            1 => Ok(Self::BasicInfo),
            2 => Ok(Self::Phases),
            3 => Ok(Self::Categories),
            4 => Ok(Self::RegistrationRules),
            5 => Ok(Self::CompetitionRules),
            6 => Ok(Self::ReviewDeploy),
            _ => Err(CoreError::Validation(format!(
                "Invalid wizard step {n}. Must be between {MIN_STEP} and {MAX_STEP}"
            ))),
        }
    }

    /// Convert to a 1-based step number.
    pub fn to_number(self) -> u8 {
        match self {
            Self::BasicInfo => 1,
            Self::Phases => 2,
            Self::Categories => 3,
            Self::RegistrationRules => 4,
            Self::CompetitionRules => 5,
            Self::ReviewDeploy => 6,
        }
    }

    /// Wizard data key for this step (`step_1` .. `step_6`).
    pub fn data_key(self) -> &'static str {
        match self {
            Self::BasicInfo => "step_1",
            Self::Phases => "step_2",
            Self::Categories => "step_3",
            Self::RegistrationRules => "step_4",
            Self::CompetitionRules => "step_5",
            Self::ReviewDeploy => "step_6",
        }
    }

    /// Human-readable label for the step.
    pub fn label(self) -> &'static str {
        match self {
            Self::BasicInfo => "Basic Information",
            Self::Phases => "Phase Configuration",
            Self::Categories => "Category Setup",
            Self::RegistrationRules => "Registration Rules",
            Self::CompetitionRules => "Competition Rules",
            Self::ReviewDeploy => "Review & Deploy",
        }
    }
}

// ---------------------------------------------------------------------------
// Error map
// ---------------------------------------------------------------------------

/// Accumulated rule violations, keyed by dot-delimited field path
/// (e.g. `phases.phase1.start_date`).
///
/// A path may carry several independent messages; messages are kept in
/// the order they were recorded and never deduplicated. One fresh map is
/// created per validation pass, so concurrent passes cannot observe each
/// other's state.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ErrorMap(BTreeMap<String, Vec<String>>);

impl ErrorMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append one message under the given field path.
    pub fn add(&mut self, path: impl Into<String>, message: impl Into<String>) {
        self.0.entry(path.into()).or_default().push(message.into());
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Number of field paths carrying at least one message.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Messages recorded under a path (empty slice if none).
    pub fn messages(&self, path: &str) -> &[String] {
        self.0.get(path).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn contains(&self, path: &str) -> bool {
        self.0.contains_key(path)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &Vec<String>)> {
        self.0.iter()
    }
}

impl IntoIterator for ErrorMap {
    type Item = (String, Vec<String>);
    type IntoIter = std::collections::btree_map::IntoIter<String, Vec<String>>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

// ---------------------------------------------------------------------------
// Validation result
// ---------------------------------------------------------------------------

/// Outcome of one validation pass. Immutable once returned.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationResult {
    pub valid: bool,
    pub errors: ErrorMap,
}

impl ValidationResult {
    pub fn from_errors(errors: ErrorMap) -> Self {
        Self {
            valid: errors.is_empty(),
            errors,
        }
    }
}
