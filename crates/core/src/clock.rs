//! Injectable clock source.
//!
//! The setup validator checks the competition year against "this year",
//! so the current date must come from a collaborator rather than an
//! ambient global read. Production uses [`SystemClock`]; tests pin a
//! [`FixedClock`] for deterministic year-window assertions.

use chrono::NaiveDate;

/// Supplies today's date to validation rules.
pub trait Clock: Send + Sync {
    fn today(&self) -> NaiveDate;
}

/// Reads the real UTC date.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> NaiveDate {
        chrono::Utc::now().date_naive()
    }
}

/// Always reports the same date. Test double.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub NaiveDate);

impl Clock for FixedClock {
    fn today(&self) -> NaiveDate {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Datelike;

    #[test]
    fn fixed_clock_reports_pinned_date() {
        let date = NaiveDate::from_ymd_opt(2025, 6, 1).unwrap();
        assert_eq!(FixedClock(date).today(), date);
    }

    #[test]
    fn system_clock_reports_a_plausible_year() {
        let year = SystemClock.today().year();
        assert!((2020..3000).contains(&year));
    }
}
