//! Rule vocabulary: domain enumerations, the grade set, and numeric limits
//! shared by the step validators.

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Enumerations
// ---------------------------------------------------------------------------

/// Competition type (step 1).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CompetitionType {
    Pilot,
    Full,
    Special,
}

/// Accepted wire values for [`CompetitionType`].
pub const COMPETITION_TYPES: [&str; 3] = ["pilot", "full", "special"];

impl CompetitionType {
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "pilot" => Some(Self::Pilot),
            "full" => Some(Self::Full),
            "special" => Some(Self::Special),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Pilot => "pilot",
            Self::Full => "full",
            Self::Special => "special",
        }
    }
}

/// Geographic scopes accepted for a competition (step 1). Pure
/// membership check; no rule branches on the scope.
pub const GEOGRAPHIC_SCOPES: [&str; 4] = ["district", "provincial", "national", "international"];

/// How teams advance out of a phase (step 2).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AdvancementType {
    TopScores,
    Percentage,
    QualifiedOnly,
    AllParticipants,
}

/// Accepted wire values for [`AdvancementType`].
pub const ADVANCEMENT_TYPES: [&str; 4] = [
    "top_scores",
    "percentage",
    "qualified_only",
    "all_participants",
];

impl AdvancementType {
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "top_scores" => Some(Self::TopScores),
            "percentage" => Some(Self::Percentage),
            "qualified_only" => Some(Self::QualifiedOnly),
            "all_participants" => Some(Self::AllParticipants),
            _ => None,
        }
    }

    /// Whether this advancement rule needs a numeric threshold
    /// (`advancement_value`) to be meaningful.
    pub fn requires_value(self) -> bool {
        matches!(self, Self::TopScores | Self::Percentage)
    }
}

/// Scoring methods (step 5).
pub const SCORING_METHODS: [&str; 4] = [
    "best_attempt",
    "average_attempts",
    "last_attempt",
    "cumulative",
];

/// Deploy modes (step 6).
pub const DEPLOY_MODES: [&str; 2] = ["test", "production"];

/// Documents that may be required from registrants (step 4).
pub const REQUIRED_DOCUMENTS: [&str; 4] = [
    "consent_form",
    "school_letter",
    "participant_list",
    "emergency_contacts",
];

/// School grades eligible for a category: reception plus grades 1 to 11.
pub const GRADES: [&str; 12] = [
    "R", "1", "2", "3", "4", "5", "6", "7", "8", "9", "10", "11",
];

pub fn is_valid_grade(s: &str) -> bool {
    GRADES.contains(&s)
}

// ---------------------------------------------------------------------------
// Limits
// ---------------------------------------------------------------------------

/// Numeric bounds enforced by the step validators.
pub mod limits {
    /// Competition name length (characters).
    pub const NAME_MIN_LEN: usize = 3;
    pub const NAME_MAX_LEN: usize = 200;

    /// Optional description length (characters).
    pub const DESCRIPTION_MAX_LEN: usize = 2000;

    /// How far into the future a competition year may lie.
    pub const YEAR_HORIZON: i32 = 5;

    /// Longest allowed competition span, in days.
    pub const MAX_SPAN_DAYS: i64 = 365;

    /// Enabled phase count.
    pub const MAX_ENABLED_PHASES: usize = 10;

    /// Phase capacity bounds.
    pub const CAPACITY_MIN: i64 = 1;
    pub const CAPACITY_MAX: i64 = 1000;

    /// Category list size.
    pub const MAX_CATEGORIES: usize = 20;

    /// Category count ceiling for pilot competitions.
    pub const PILOT_MAX_CATEGORIES: usize = 5;

    /// Per-category bounds.
    pub const TEAM_SIZE_MIN: i64 = 1;
    pub const TEAM_SIZE_MAX: i64 = 10;
    pub const MAX_TEAMS_PER_SCHOOL_MIN: i64 = 1;
    pub const MAX_TEAMS_PER_SCHOOL_MAX: i64 = 20;
    pub const TIME_LIMIT_MIN: i64 = 5;
    pub const TIME_LIMIT_MAX: i64 = 120;
    pub const MAX_ATTEMPTS_MIN: i64 = 1;
    pub const MAX_ATTEMPTS_MAX: i64 = 10;

    /// Registration fee bounds (step 4).
    pub const FEE_MIN: f64 = 0.0;
    pub const FEE_MAX: f64 = 10_000.0;

    /// Appeal deadline bounds in hours (step 5). 168 hours = 7 days.
    pub const APPEAL_HOURS_MIN: i64 = 1;
    pub const APPEAL_HOURS_MAX: i64 = 168;
}
