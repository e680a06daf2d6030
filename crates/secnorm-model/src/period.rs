//! Period-type and period-key derivation (spec §4.3).

use std::fmt;

/// Whether a fact is a point-in-time measurement or a range measurement.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PeriodType {
    /// Point-in-time fact (balance sheet items). No `start_date`.
    Instant,
    /// Range fact (income statement, cash flow items). Has a `start_date`.
    Duration,
}

impl PeriodType {
    /// `duration` if `start_date` is non-empty, else `instant` (spec
    /// invariant: `period_type = duration` ⇔ `start_date` non-empty).
    pub fn from_start_date(start_date: &str) -> Self {
        if start_date.is_empty() {
            Self::Instant
        } else {
            Self::Duration
        }
    }

    /// The string stored in output tables.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Instant => "instant",
            Self::Duration => "duration",
        }
    }
}

impl fmt::Display for PeriodType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Stable, human-readable period label: prefer fiscal-year/period, fall back
/// to a date range, fall back to the bare end date.
pub fn compute_period_key(fy: Option<i32>, fp: &str, start_date: &str, end_date: &str) -> String {
    if let Some(fy) = fy
        && !fp.is_empty()
    {
        return format!("{fy}-{fp}");
    }
    if !start_date.is_empty() {
        return format!("{start_date}:{end_date}");
    }
    end_date.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn instant_when_no_start_date() {
        assert_eq!(PeriodType::from_start_date(""), PeriodType::Instant);
    }

    #[test]
    fn duration_when_start_date_present() {
        assert_eq!(
            PeriodType::from_start_date("2021-01-01"),
            PeriodType::Duration
        );
    }

    #[test]
    fn period_key_prefers_fiscal_year_and_period() {
        let key = compute_period_key(Some(2022), "FY", "2022-01-01", "2022-12-31");
        assert_eq!(key, "2022-FY");
    }

    #[test]
    fn period_key_falls_back_to_date_range() {
        let key = compute_period_key(None, "", "2021-01-01", "2021-12-31");
        assert_eq!(key, "2021-01-01:2021-12-31");
    }

    #[test]
    fn period_key_falls_back_to_end_date_only() {
        let key = compute_period_key(None, "", "", "2021-12-31");
        assert_eq!(key, "2021-12-31");
    }

    #[test]
    fn period_key_ignores_fy_without_fp() {
        let key = compute_period_key(Some(2022), "", "2022-01-01", "2022-12-31");
        assert_eq!(key, "2022-01-01:2022-12-31");
    }
}
