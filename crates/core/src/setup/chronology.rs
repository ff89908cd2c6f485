//! Phase chronology check.
//!
//! Enabled phases with parseable dates are sorted by start date (stable,
//! so identical starts keep their map order) and adjacent pairs are
//! scanned for overlap. Phase counts are capped at 10, so the sort is
//! never a cost concern.

use chrono::NaiveDate;
use serde_json::{Map, Value};

use super::fields;
use super::result::ErrorMap;

/// Top-level error path for chronology violations. Kept flat (never
/// prefixed with `step_2.`) so the UI can render these on the phase
/// overview rather than a single field.
pub(crate) const CHRONOLOGY_PATH: &str = "phases_chronology";

/// Whether a phase record is flagged enabled.
pub(crate) fn phase_enabled(phase: &Value) -> bool {
    fields::is_truthy(fields::field(phase, "enabled"))
}

/// Extract a phase's start/end dates, if present and parseable.
pub(crate) fn phase_dates(phase: &Value) -> (Option<NaiveDate>, Option<NaiveDate>) {
    let start = fields::field(phase, "start_date")
        .and_then(Value::as_str)
        .and_then(fields::parse_date);
    let end = fields::field(phase, "end_date")
        .and_then(Value::as_str)
        .and_then(fields::parse_date);
    (start, end)
}

/// Display name for a phase, falling back to its map key.
pub(crate) fn phase_label<'a>(key: &'a str, phase: &'a Value) -> &'a str {
    fields::field(phase, "name")
        .and_then(Value::as_str)
        .unwrap_or(key)
}

struct PhaseSpan {
    name: String,
    start: NaiveDate,
    end: NaiveDate,
}

/// Emit one overlap error per adjacent pair whose earlier phase ends
/// strictly after the later phase starts. Phases missing a parseable
/// date are skipped; their date errors were already recorded per field.
pub(crate) fn check_chronology(
    errors: &mut ErrorMap,
    phases: &Map<String, Value>,
    enabled: &[&String],
) {
    let mut spans: Vec<PhaseSpan> = Vec::new();
    for key in enabled {
        let phase = &phases[key.as_str()];
        if let (Some(start), Some(end)) = phase_dates(phase) {
            spans.push(PhaseSpan {
                name: phase_label(key, phase).to_string(),
                start,
                end,
            });
        }
    }

    spans.sort_by_key(|span| span.start);

    for pair in spans.windows(2) {
        let (earlier, later) = (&pair[0], &pair[1]);
        if earlier.end > later.start {
            errors.add(
                CHRONOLOGY_PATH,
                format!(
                    "Phases '{}' and '{}' overlap: '{}' ends after '{}' starts",
                    earlier.name, later.name, earlier.name, later.name
                ),
            );
        }
    }
}
