//! Per-step validators for the six wizard steps.
//!
//! Each validator receives the (possibly empty) step payload and appends
//! zero or more errors under paths scoped to that step. None of them
//! short-circuit: every detectable violation in a pass is recorded.

use chrono::{Datelike, NaiveDate};
use serde_json::Value;

use super::chronology::{self, phase_enabled};
use super::fields::{
    check_email, check_length, check_max_length, field, is_truthy, optional_bool, optional_date,
    optional_enum, optional_int_in_range, optional_number_in_range, optional_str, required_date,
    required_enum, required_str,
};
use super::result::ErrorMap;
use super::rules::{
    limits, AdvancementType, ADVANCEMENT_TYPES, COMPETITION_TYPES, DEPLOY_MODES,
    GEOGRAPHIC_SCOPES, REQUIRED_DOCUMENTS, SCORING_METHODS,
};
use super::rules::is_valid_grade;

// ---------------------------------------------------------------------------
// Step 1: Basic Information
// ---------------------------------------------------------------------------

/// Validate step 1 fields.
///
/// Returns the `(name, year)` pair for the uniqueness lookup when both
/// passed their local checks; the caller performs the lookup because it
/// needs the external collaborator.
pub(crate) fn validate_basic_info(
    errors: &mut ErrorMap,
    data: &Value,
    today: NaiveDate,
) -> Option<(String, i32)> {
    let name = required_str(errors, "name", field(data, "name"), "Competition name");
    if let Some(name) = name {
        check_length(
            errors,
            "name",
            name,
            limits::NAME_MIN_LEN,
            limits::NAME_MAX_LEN,
            "Competition name",
        );
    }

    let current_year = today.year();
    let max_year = current_year + limits::YEAR_HORIZON;
    let year = match field(data, "year") {
        None => {
            errors.add("year", "Year is required");
            None
        }
        Some(v) => match v.as_i64() {
            Some(y) if (i64::from(current_year)..=i64::from(max_year)).contains(&y) => {
                Some(y as i32)
            }
            _ => {
                errors.add(
                    "year",
                    format!("Year must be between {current_year} and {max_year}"),
                );
                None
            }
        },
    };

    required_enum(
        errors,
        "type",
        field(data, "type"),
        &COMPETITION_TYPES,
        "Competition type",
    );
    required_enum(
        errors,
        "geographic_scope",
        field(data, "geographic_scope"),
        &GEOGRAPHIC_SCOPES,
        "Geographic scope",
    );

    let start = required_date(errors, "start_date", field(data, "start_date"), "Start date");
    let end = required_date(errors, "end_date", field(data, "end_date"), "End date");
    if let (Some(start), Some(end)) = (start, end) {
        if end <= start {
            errors.add("end_date", "End date must be after start date");
        } else if (end - start).num_days() > limits::MAX_SPAN_DAYS {
            errors.add(
                "end_date",
                format!("Competition cannot span more than {} days", limits::MAX_SPAN_DAYS),
            );
        }
    }

    let reg_open = optional_date(
        errors,
        "registration_opening",
        field(data, "registration_opening"),
        "Registration opening",
    );
    let reg_close = optional_date(
        errors,
        "registration_closing",
        field(data, "registration_closing"),
        "Registration closing",
    );
    if let (Some(open), Some(close)) = (reg_open, reg_close) {
        if close <= open {
            errors.add(
                "registration_closing",
                "Registration closing must be after registration opening",
            );
        }
        if let Some(start) = start {
            if close > start {
                errors.add(
                    "registration_closing",
                    "Registration must close on or before the competition start date",
                );
            }
        }
    }

    if let Some(email) = optional_str(
        errors,
        "contact_email",
        field(data, "contact_email"),
        "Contact email",
    ) {
        check_email(errors, "contact_email", email, "Contact email");
    }

    if let Some(description) = optional_str(
        errors,
        "description",
        field(data, "description"),
        "Description",
    ) {
        check_max_length(
            errors,
            "description",
            description,
            limits::DESCRIPTION_MAX_LEN,
            "Description",
        );
    }

    // Only offer a lookup candidate when both fields passed locally, so a
    // malformed submission never triggers a pointless database roundtrip.
    match (name, year) {
        (Some(name), Some(year)) if !errors.contains("name") => Some((name.to_string(), year)),
        _ => None,
    }
}

// ---------------------------------------------------------------------------
// Step 2: Phase Configuration
// ---------------------------------------------------------------------------

pub(crate) fn validate_phases(errors: &mut ErrorMap, data: &Value) {
    let phases = match field(data, "phases").and_then(Value::as_object) {
        Some(map) if !map.is_empty() => map,
        _ => {
            errors.add("phases", "At least one phase is required");
            return;
        }
    };

    let enabled: Vec<&String> = phases
        .iter()
        .filter(|(_, phase)| phase_enabled(phase))
        .map(|(key, _)| key)
        .collect();

    if enabled.is_empty() {
        errors.add("phases", "At least one phase must be enabled");
    }
    if enabled.len() > limits::MAX_ENABLED_PHASES {
        errors.add(
            "phases",
            format!(
                "At most {} phases can be enabled",
                limits::MAX_ENABLED_PHASES
            ),
        );
    }

    let mut seen_names: Vec<&str> = Vec::new();
    for key in &enabled {
        let phase = &phases[key.as_str()];
        let prefix = format!("phases.{key}");

        let name = required_str(
            errors,
            &format!("{prefix}.name"),
            field(phase, "name"),
            "Phase name",
        );
        if let Some(name) = name {
            if seen_names.contains(&name) {
                errors.add(
                    format!("{prefix}.name"),
                    "Phase name must be unique among enabled phases",
                );
            } else {
                seen_names.push(name);
            }
        }

        let start = required_date(
            errors,
            &format!("{prefix}.start_date"),
            field(phase, "start_date"),
            "Phase start date",
        );
        let end = required_date(
            errors,
            &format!("{prefix}.end_date"),
            field(phase, "end_date"),
            "Phase end date",
        );
        if let (Some(start), Some(end)) = (start, end) {
            if end <= start {
                errors.add(
                    format!("{prefix}.end_date"),
                    "Phase end date must be after phase start date",
                );
            }
        }

        optional_int_in_range(
            errors,
            &format!("{prefix}.capacity"),
            field(phase, "capacity"),
            limits::CAPACITY_MIN,
            limits::CAPACITY_MAX,
            "Capacity",
        );

        if let Some(advancement) = optional_enum(
            errors,
            &format!("{prefix}.advancement_type"),
            field(phase, "advancement_type"),
            &ADVANCEMENT_TYPES,
            "Advancement type",
        ) {
            let needs_value = AdvancementType::parse(advancement)
                .is_some_and(AdvancementType::requires_value);
            if needs_value {
                match field(phase, "advancement_value").and_then(Value::as_f64) {
                    Some(v) if v > 0.0 => {}
                    _ => errors.add(
                        format!("{prefix}.advancement_value"),
                        format!(
                            "Advancement value must be greater than 0 when advancement type is '{advancement}'"
                        ),
                    ),
                }
            }
        }
    }

    chronology::check_chronology(errors, phases, &enabled);
}

// ---------------------------------------------------------------------------
// Step 3: Category Setup
// ---------------------------------------------------------------------------

pub(crate) fn validate_categories(errors: &mut ErrorMap, data: &Value) {
    let categories = match field(data, "categories").and_then(Value::as_array) {
        Some(list) if !list.is_empty() => list,
        _ => {
            errors.add("categories", "At least one category is required");
            return;
        }
    };

    if categories.len() > limits::MAX_CATEGORIES {
        errors.add(
            "categories",
            format!("At most {} categories are allowed", limits::MAX_CATEGORIES),
        );
    }

    let mut seen_names: Vec<&str> = Vec::new();
    let mut seen_codes: Vec<&str> = Vec::new();
    for (i, category) in categories.iter().enumerate() {
        let prefix = format!("categories.{i}");

        let name = required_str(
            errors,
            &format!("{prefix}.name"),
            field(category, "name"),
            "Category name",
        );
        if let Some(name) = name {
            if seen_names.contains(&name) {
                errors.add(format!("{prefix}.name"), "Category name must be unique");
            } else {
                seen_names.push(name);
            }
        }

        let code = required_str(
            errors,
            &format!("{prefix}.category_code"),
            field(category, "category_code"),
            "Category code",
        );
        if let Some(code) = code {
            if seen_codes.contains(&code) {
                errors.add(
                    format!("{prefix}.category_code"),
                    "Category code must be unique",
                );
            } else {
                seen_codes.push(code);
            }
        }

        optional_int_in_range(
            errors,
            &format!("{prefix}.team_size"),
            field(category, "team_size"),
            limits::TEAM_SIZE_MIN,
            limits::TEAM_SIZE_MAX,
            "Team size",
        );
        optional_int_in_range(
            errors,
            &format!("{prefix}.max_teams_per_school"),
            field(category, "max_teams_per_school"),
            limits::MAX_TEAMS_PER_SCHOOL_MIN,
            limits::MAX_TEAMS_PER_SCHOOL_MAX,
            "Max teams per school",
        );
        optional_int_in_range(
            errors,
            &format!("{prefix}.time_limit_minutes"),
            field(category, "time_limit_minutes"),
            limits::TIME_LIMIT_MIN,
            limits::TIME_LIMIT_MAX,
            "Time limit",
        );
        optional_int_in_range(
            errors,
            &format!("{prefix}.max_attempts"),
            field(category, "max_attempts"),
            limits::MAX_ATTEMPTS_MIN,
            limits::MAX_ATTEMPTS_MAX,
            "Max attempts",
        );

        if let Some(grades) = field(category, "grades") {
            let path = format!("{prefix}.grades");
            match grades.as_array() {
                // One message per invalid entry, not a single aggregate.
                Some(list) => {
                    for grade in list {
                        match grade.as_str() {
                            Some(g) if is_valid_grade(g) => {}
                            Some(g) => errors.add(&path, format!("'{g}' is not a valid grade")),
                            None => errors.add(&path, format!("'{grade}' is not a valid grade")),
                        }
                    }
                }
                None => errors.add(&path, "Grades must be a list"),
            }
        }
    }
}

// ---------------------------------------------------------------------------
// Step 4: Registration Rules
// ---------------------------------------------------------------------------

pub(crate) fn validate_registration_rules(errors: &mut ErrorMap, data: &Value) {
    optional_bool(
        errors,
        "auto_approval",
        field(data, "auto_approval"),
        "Auto approval",
    );
    optional_bool(
        errors,
        "allow_late_registration",
        field(data, "allow_late_registration"),
        "Allow late registration",
    );
    optional_number_in_range(
        errors,
        "registration_fee",
        field(data, "registration_fee"),
        limits::FEE_MIN,
        limits::FEE_MAX,
        "Registration fee",
    );

    if let Some(documents) = field(data, "required_documents") {
        match documents.as_array() {
            Some(list) => {
                for document in list {
                    let recognized = document
                        .as_str()
                        .is_some_and(|d| REQUIRED_DOCUMENTS.contains(&d));
                    if !recognized {
                        let shown = document
                            .as_str()
                            .map_or_else(|| document.to_string(), str::to_string);
                        errors.add(
                            "required_documents",
                            format!(
                                "'{shown}' is not a recognized document type. Must be one of: {}",
                                REQUIRED_DOCUMENTS.join(", ")
                            ),
                        );
                    }
                }
            }
            None => errors.add("required_documents", "Required documents must be a list"),
        }
    }
}

// ---------------------------------------------------------------------------
// Step 5: Competition Rules
// ---------------------------------------------------------------------------

pub(crate) fn validate_competition_rules(errors: &mut ErrorMap, data: &Value) {
    optional_enum(
        errors,
        "scoring_method",
        field(data, "scoring_method"),
        &SCORING_METHODS,
        "Scoring method",
    );
    optional_bool(
        errors,
        "judge_training_required",
        field(data, "judge_training_required"),
        "Judge training required",
    );
    optional_bool(
        errors,
        "safety_briefing_required",
        field(data, "safety_briefing_required"),
        "Safety briefing required",
    );
    optional_int_in_range(
        errors,
        "appeal_deadline_hours",
        field(data, "appeal_deadline_hours"),
        limits::APPEAL_HOURS_MIN,
        limits::APPEAL_HOURS_MAX,
        "Appeal deadline",
    );
}

// ---------------------------------------------------------------------------
// Step 6: Review & Deploy
// ---------------------------------------------------------------------------

pub(crate) fn validate_review(errors: &mut ErrorMap, data: &Value) {
    optional_enum(
        errors,
        "deploy_mode",
        field(data, "deploy_mode"),
        &DEPLOY_MODES,
        "Deploy mode",
    );

    // Each confirmation fails independently under its own field name.
    let confirmations = [
        ("terms_accepted", "You must accept the terms and conditions"),
        ("data_reviewed", "You must confirm the entered data has been reviewed"),
        ("ready_to_deploy", "You must confirm the competition is ready to deploy"),
    ];
    for (key, message) in confirmations {
        if !is_truthy(field(data, key)) {
            errors.add(key, message);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 1, 15).unwrap()
    }

    fn run_basic_info(data: Value) -> ErrorMap {
        let mut errors = ErrorMap::new();
        validate_basic_info(&mut errors, &data, today());
        errors
    }

    fn run(f: fn(&mut ErrorMap, &Value), data: Value) -> ErrorMap {
        let mut errors = ErrorMap::new();
        f(&mut errors, &data);
        errors
    }

    // -- Step 1 --

    #[test]
    fn basic_info_accepts_a_complete_valid_payload() {
        let errors = run_basic_info(json!({
            "name": "Robo Cup",
            "year": 2025,
            "type": "pilot",
            "geographic_scope": "district",
            "start_date": "2025-03-01",
            "end_date": "2025-03-02",
        }));
        assert!(errors.is_empty(), "unexpected errors: {errors:?}");
    }

    #[test]
    fn basic_info_empty_payload_reports_every_required_field() {
        let errors = run_basic_info(json!({}));
        for path in ["name", "year", "type", "geographic_scope", "start_date", "end_date"] {
            assert!(errors.contains(path), "missing error for {path}");
        }
    }

    #[test]
    fn basic_info_name_length_bounds() {
        let errors = run_basic_info(json!({ "name": "ab" }));
        assert_eq!(errors.messages("name").len(), 1);

        let errors = run_basic_info(json!({ "name": "a".repeat(201) }));
        assert_eq!(errors.messages("name").len(), 1);
    }

    #[test]
    fn basic_info_year_window() {
        for (year, ok) in [(2024, false), (2025, true), (2030, true), (2031, false)] {
            let errors = run_basic_info(json!({ "year": year }));
            assert_eq!(!errors.contains("year"), ok, "year = {year}");
        }
    }

    #[test]
    fn basic_info_end_must_follow_start() {
        let errors = run_basic_info(json!({
            "start_date": "2025-03-02",
            "end_date": "2025-03-01",
        }));
        assert!(errors.messages("end_date")[0].contains("after"));

        let errors = run_basic_info(json!({
            "start_date": "2025-03-01",
            "end_date": "2025-03-01",
        }));
        assert!(errors.contains("end_date"));
    }

    #[test]
    fn basic_info_span_capped_at_one_year() {
        let errors = run_basic_info(json!({
            "start_date": "2025-01-01",
            "end_date": "2026-01-01",
        }));
        assert!(!errors.contains("end_date"), "365 days exactly is fine");

        let errors = run_basic_info(json!({
            "start_date": "2025-01-01",
            "end_date": "2026-01-02",
        }));
        assert!(errors.messages("end_date")[0].contains("365"));
    }

    #[test]
    fn basic_info_registration_window_rules() {
        let errors = run_basic_info(json!({
            "start_date": "2025-03-01",
            "end_date": "2025-03-10",
            "registration_opening": "2025-02-10",
            "registration_closing": "2025-02-01",
        }));
        assert!(errors.contains("registration_closing"));

        // Closing after competition start.
        let errors = run_basic_info(json!({
            "start_date": "2025-03-01",
            "end_date": "2025-03-10",
            "registration_opening": "2025-02-01",
            "registration_closing": "2025-03-05",
        }));
        assert!(errors.messages("registration_closing")[0].contains("before the competition start"));

        // Closing exactly on the start date is allowed.
        let errors = run_basic_info(json!({
            "start_date": "2025-03-01",
            "end_date": "2025-03-10",
            "registration_opening": "2025-02-01",
            "registration_closing": "2025-03-01",
        }));
        assert!(!errors.contains("registration_closing"));
    }

    #[test]
    fn basic_info_only_one_registration_bound_is_unconstrained() {
        let errors = run_basic_info(json!({
            "registration_opening": "2025-02-01",
        }));
        assert!(!errors.contains("registration_closing"));
        assert!(!errors.contains("registration_opening"));
    }

    #[test]
    fn basic_info_optional_email_and_description() {
        let errors = run_basic_info(json!({ "contact_email": "nope" }));
        assert!(errors.contains("contact_email"));

        let errors = run_basic_info(json!({ "description": "d".repeat(2001) }));
        assert!(errors.contains("description"));

        let errors = run_basic_info(json!({
            "contact_email": "org@robostage.example",
            "description": "A short description.",
        }));
        assert!(!errors.contains("contact_email"));
        assert!(!errors.contains("description"));
    }

    #[test]
    fn basic_info_returns_lookup_candidate_only_when_name_and_year_pass() {
        let mut errors = ErrorMap::new();
        let candidate = validate_basic_info(
            &mut errors,
            &json!({ "name": "Robo Cup", "year": 2025 }),
            today(),
        );
        assert_eq!(candidate, Some(("Robo Cup".to_string(), 2025)));

        let mut errors = ErrorMap::new();
        let candidate =
            validate_basic_info(&mut errors, &json!({ "name": "ab", "year": 2025 }), today());
        assert_eq!(candidate, None);

        let mut errors = ErrorMap::new();
        let candidate = validate_basic_info(
            &mut errors,
            &json!({ "name": "Robo Cup", "year": 1999 }),
            today(),
        );
        assert_eq!(candidate, None);
    }

    // -- Step 2 --

    #[test]
    fn phases_missing_mapping_is_required() {
        let errors = run(validate_phases, json!({}));
        assert!(errors.messages("phases")[0].contains("required"));

        let errors = run(validate_phases, json!({ "phases": {} }));
        assert!(errors.contains("phases"));
    }

    #[test]
    fn phases_must_have_at_least_one_enabled() {
        let errors = run(
            validate_phases,
            json!({ "phases": {
                "p1": { "enabled": false, "name": "A" },
            }}),
        );
        assert!(errors.messages("phases")[0].contains("enabled"));
    }

    #[test]
    fn phases_enabled_count_capped_at_ten() {
        let mut phases = serde_json::Map::new();
        for i in 0..11 {
            phases.insert(
                format!("p{i:02}"),
                json!({
                    "enabled": true,
                    "name": format!("Phase {i}"),
                    "start_date": format!("2025-03-{:02}", i + 1),
                    "end_date": format!("2025-03-{:02}", i + 1),
                }),
            );
        }
        let errors = run(validate_phases, json!({ "phases": phases }));
        assert!(errors
            .messages("phases")
            .iter()
            .any(|m| m.contains("At most 10")));
    }

    #[test]
    fn disabled_phases_are_not_validated() {
        let errors = run(
            validate_phases,
            json!({ "phases": {
                "p1": { "enabled": true, "name": "A", "start_date": "2025-03-01", "end_date": "2025-03-02" },
                "junk": { "enabled": false },
            }}),
        );
        assert!(errors.is_empty(), "unexpected errors: {errors:?}");
    }

    #[test]
    fn enabled_phase_requires_name_and_dates() {
        let errors = run(
            validate_phases,
            json!({ "phases": { "p1": { "enabled": true } } }),
        );
        assert!(errors.contains("phases.p1.name"));
        assert!(errors.contains("phases.p1.start_date"));
        assert!(errors.contains("phases.p1.end_date"));
    }

    #[test]
    fn duplicate_enabled_phase_names_are_rejected() {
        let errors = run(
            validate_phases,
            json!({ "phases": {
                "p1": { "enabled": true, "name": "Finals", "start_date": "2025-03-01", "end_date": "2025-03-02" },
                "p2": { "enabled": true, "name": "Finals", "start_date": "2025-03-03", "end_date": "2025-03-04" },
            }}),
        );
        assert!(errors.contains("phases.p2.name"));
        assert!(!errors.contains("phases.p1.name"));
    }

    #[test]
    fn phase_capacity_bounds() {
        let errors = run(
            validate_phases,
            json!({ "phases": {
                "p1": { "enabled": true, "name": "A", "start_date": "2025-03-01", "end_date": "2025-03-02", "capacity": 0 },
            }}),
        );
        assert!(errors.contains("phases.p1.capacity"));

        let errors = run(
            validate_phases,
            json!({ "phases": {
                "p1": { "enabled": true, "name": "A", "start_date": "2025-03-01", "end_date": "2025-03-02", "capacity": 1000 },
            }}),
        );
        assert!(!errors.contains("phases.p1.capacity"));
    }

    #[test]
    fn advancement_value_required_for_top_scores_and_percentage() {
        for advancement in ["top_scores", "percentage"] {
            let errors = run(
                validate_phases,
                json!({ "phases": {
                    "p1": { "enabled": true, "name": "A", "start_date": "2025-03-01", "end_date": "2025-03-02", "advancement_type": advancement },
                }}),
            );
            assert!(
                errors.contains("phases.p1.advancement_value"),
                "advancement_type = {advancement}"
            );
        }

        let errors = run(
            validate_phases,
            json!({ "phases": {
                "p1": { "enabled": true, "name": "A", "start_date": "2025-03-01", "end_date": "2025-03-02", "advancement_type": "qualified_only" },
            }}),
        );
        assert!(!errors.contains("phases.p1.advancement_value"));
    }

    #[test]
    fn advancement_value_must_be_positive() {
        let errors = run(
            validate_phases,
            json!({ "phases": {
                "p1": { "enabled": true, "name": "A", "start_date": "2025-03-01", "end_date": "2025-03-02", "advancement_type": "top_scores", "advancement_value": 0 },
            }}),
        );
        assert!(errors.contains("phases.p1.advancement_value"));
    }

    #[test]
    fn overlapping_enabled_phases_surface_under_chronology_path() {
        let errors = run(
            validate_phases,
            json!({ "phases": {
                "p1": { "enabled": true, "name": "Phase A", "start_date": "2025-03-01", "end_date": "2025-03-10" },
                "p2": { "enabled": true, "name": "Phase B", "start_date": "2025-03-05", "end_date": "2025-03-15" },
            }}),
        );
        let messages = errors.messages("phases_chronology");
        assert_eq!(messages.len(), 1);
        assert!(messages[0].contains("Phase A") && messages[0].contains("Phase B"));
    }

    // -- Step 3 --

    #[test]
    fn categories_required_and_capped() {
        let errors = run(validate_categories, json!({}));
        assert!(errors.contains("categories"));

        let errors = run(validate_categories, json!({ "categories": [] }));
        assert!(errors.contains("categories"));

        let categories: Vec<_> = (0..21)
            .map(|i| json!({ "name": format!("Cat {i}"), "category_code": format!("C{i}") }))
            .collect();
        let errors = run(validate_categories, json!({ "categories": categories }));
        assert!(errors.messages("categories")[0].contains("20"));
    }

    #[test]
    fn category_name_and_code_must_be_unique() {
        let errors = run(
            validate_categories,
            json!({ "categories": [
                { "name": "Sumo", "category_code": "SUMO" },
                { "name": "Sumo", "category_code": "SUMO" },
            ]}),
        );
        assert!(errors.contains("categories.1.name"));
        assert!(errors.contains("categories.1.category_code"));
        assert!(!errors.contains("categories.0.name"));
    }

    #[test]
    fn category_team_size_boundaries() {
        for (team_size, ok) in [(0, false), (1, true), (10, true), (11, false)] {
            let errors = run(
                validate_categories,
                json!({ "categories": [
                    { "name": "Sumo", "category_code": "SUMO", "team_size": team_size },
                ]}),
            );
            assert_eq!(
                !errors.contains("categories.0.team_size"),
                ok,
                "team_size = {team_size}"
            );
        }
    }

    #[test]
    fn category_numeric_bounds() {
        let errors = run(
            validate_categories,
            json!({ "categories": [{
                "name": "Sumo",
                "category_code": "SUMO",
                "max_teams_per_school": 21,
                "time_limit_minutes": 4,
                "max_attempts": 11,
            }]}),
        );
        assert!(errors.contains("categories.0.max_teams_per_school"));
        assert!(errors.contains("categories.0.time_limit_minutes"));
        assert!(errors.contains("categories.0.max_attempts"));
    }

    #[test]
    fn invalid_grades_get_one_message_each() {
        let errors = run(
            validate_categories,
            json!({ "categories": [{
                "name": "Sumo",
                "category_code": "SUMO",
                "grades": ["R", "12", "banana", "7"],
            }]}),
        );
        let messages = errors.messages("categories.0.grades");
        assert_eq!(messages.len(), 2);
        assert!(messages.iter().any(|m| m.contains("12")));
        assert!(messages.iter().any(|m| m.contains("banana")));
    }

    // -- Step 4 --

    #[test]
    fn registration_rules_empty_payload_is_valid() {
        assert!(run(validate_registration_rules, json!({})).is_empty());
    }

    #[test]
    fn registration_rules_type_and_range_checks() {
        let errors = run(
            validate_registration_rules,
            json!({
                "auto_approval": "yes",
                "allow_late_registration": 1,
                "registration_fee": 10001,
            }),
        );
        assert!(errors.contains("auto_approval"));
        assert!(errors.contains("allow_late_registration"));
        assert!(errors.contains("registration_fee"));
    }

    #[test]
    fn registration_fee_boundaries() {
        for (fee, ok) in [(-0.01, false), (0.0, true), (10_000.0, true), (10_000.5, false)] {
            let errors = run(
                validate_registration_rules,
                json!({ "registration_fee": fee }),
            );
            assert_eq!(!errors.contains("registration_fee"), ok, "fee = {fee}");
        }
    }

    #[test]
    fn unknown_required_documents_are_reported_individually() {
        let errors = run(
            validate_registration_rules,
            json!({ "required_documents": ["consent_form", "passport", "visa"] }),
        );
        assert_eq!(errors.messages("required_documents").len(), 2);
    }

    // -- Step 5 --

    #[test]
    fn competition_rules_empty_payload_is_valid() {
        assert!(run(validate_competition_rules, json!({})).is_empty());
    }

    #[test]
    fn competition_rules_checks() {
        let errors = run(
            validate_competition_rules,
            json!({
                "scoring_method": "highest",
                "judge_training_required": "no",
                "appeal_deadline_hours": 169,
            }),
        );
        assert!(errors.contains("scoring_method"));
        assert!(errors.contains("judge_training_required"));
        assert!(errors.contains("appeal_deadline_hours"));
    }

    #[test]
    fn competition_rules_valid_payload() {
        let errors = run(
            validate_competition_rules,
            json!({
                "scoring_method": "best_attempt",
                "judge_training_required": true,
                "safety_briefing_required": false,
                "appeal_deadline_hours": 48,
            }),
        );
        assert!(errors.is_empty());
    }

    // -- Step 6 --

    #[test]
    fn review_requires_all_three_confirmations() {
        let errors = run(validate_review, json!({}));
        assert!(errors.contains("terms_accepted"));
        assert!(errors.contains("data_reviewed"));
        assert!(errors.contains("ready_to_deploy"));
    }

    #[test]
    fn review_single_missing_confirmation_fails_alone() {
        let errors = run(
            validate_review,
            json!({
                "terms_accepted": false,
                "data_reviewed": true,
                "ready_to_deploy": true,
            }),
        );
        assert_eq!(errors.len(), 1);
        assert_eq!(errors.messages("terms_accepted").len(), 1);
    }

    #[test]
    fn review_deploy_mode_enum() {
        let errors = run(
            validate_review,
            json!({
                "deploy_mode": "staging",
                "terms_accepted": true,
                "data_reviewed": true,
                "ready_to_deploy": true,
            }),
        );
        assert_eq!(errors.len(), 1);
        assert!(errors.contains("deploy_mode"));
    }

    #[test]
    fn review_accepts_integer_one_as_truthy() {
        let errors = run(
            validate_review,
            json!({
                "terms_accepted": 1,
                "data_reviewed": true,
                "ready_to_deploy": true,
            }),
        );
        assert!(errors.is_empty());
    }
}
