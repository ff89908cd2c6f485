//! Cross-step consistency checks.
//!
//! Run after all per-step validators, regardless of their outcome. These
//! rules span more than one wizard step, so their errors are keyed under
//! a flat `cross_validation` path instead of a step-scoped one.

use serde_json::{Map, Value};

use super::chronology::{phase_dates, phase_enabled, phase_label};
use super::fields::{field, parse_date};
use super::result::ErrorMap;
use super::rules::limits::PILOT_MAX_CATEGORIES;
use super::rules::CompetitionType;

/// Top-level error path for cross-step violations.
pub(crate) const CROSS_PATH: &str = "cross_validation";

pub(crate) fn validate_cross_step(errors: &mut ErrorMap, wizard: &Map<String, Value>) {
    let empty = Value::Object(Map::new());
    let step1 = wizard.get("step_1").unwrap_or(&empty);
    let step2 = wizard.get("step_2").unwrap_or(&empty);
    let step3 = wizard.get("step_3").unwrap_or(&empty);

    check_phase_containment(errors, step1, step2);
    check_pilot_category_limit(errors, step1, step3);
}

/// Every enabled phase with valid dates must fit inside the overall
/// competition window from step 1. One message per violating phase.
fn check_phase_containment(errors: &mut ErrorMap, step1: &Value, step2: &Value) {
    let comp_start = field(step1, "start_date")
        .and_then(Value::as_str)
        .and_then(parse_date);
    let comp_end = field(step1, "end_date")
        .and_then(Value::as_str)
        .and_then(parse_date);
    let (Some(comp_start), Some(comp_end)) = (comp_start, comp_end) else {
        return;
    };

    let Some(phases) = field(step2, "phases").and_then(Value::as_object) else {
        return;
    };

    for (key, phase) in phases {
        if !phase_enabled(phase) {
            continue;
        }
        let (Some(start), Some(end)) = phase_dates(phase) else {
            continue;
        };
        let name = phase_label(key, phase);
        if start < comp_start {
            errors.add(
                CROSS_PATH,
                format!("Phase '{name}' starts before the competition start date"),
            );
        }
        if end > comp_end {
            errors.add(
                CROSS_PATH,
                format!("Phase '{name}' ends after the competition end date"),
            );
        }
    }
}

/// Pilot competitions are capped at a reduced category count.
fn check_pilot_category_limit(errors: &mut ErrorMap, step1: &Value, step3: &Value) {
    let competition_type = field(step1, "type")
        .and_then(Value::as_str)
        .and_then(CompetitionType::parse);
    if competition_type != Some(CompetitionType::Pilot) {
        return;
    }
    let count = field(step3, "categories")
        .and_then(Value::as_array)
        .map_or(0, Vec::len);
    if count > PILOT_MAX_CATEGORIES {
        errors.add(
            CROSS_PATH,
            format!(
                "Pilot competitions are limited to {PILOT_MAX_CATEGORIES} categories ({count} configured)"
            ),
        );
    }
}
