//! Certification status derivation.
//!
//! Status is never stored. It is recomputed from a certification's expiry date
//! and the date the caller considers "today", so the functions here take both
//! explicitly and stay free of I/O and clocks.
//!
//! ```rust
//! use certrack::libs::status::CertificationStatus;
//! use chrono::NaiveDate;
//!
//! let today = NaiveDate::from_ymd_opt(2025, 6, 1).unwrap();
//! let expiry = NaiveDate::from_ymd_opt(2025, 6, 15);
//! assert_eq!(CertificationStatus::classify(expiry, today), CertificationStatus::ExpiringSoon);
//! ```

use crate::db::error::{TrackerError, TrackerResult};
use chrono::{Duration, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Days ahead of today during which a certification counts as expiring soon.
pub const EXPIRING_SOON_DAYS: i64 = 30;

/// Calendar date format accepted at every input boundary.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CertificationStatus {
    NoExpiry,
    Expired,
    ExpiringSoon,
    Valid,
}

impl CertificationStatus {
    /// Classifies an expiry date relative to `today`.
    ///
    /// Both ends of the expiring-soon window are inclusive: a certification
    /// expiring today or exactly [`EXPIRING_SOON_DAYS`] from now is expiring soon.
    pub fn classify(expiry_date: Option<NaiveDate>, today: NaiveDate) -> Self {
        match days_to_expiry(expiry_date, today) {
            None => CertificationStatus::NoExpiry,
            Some(days) if days < 0 => CertificationStatus::Expired,
            Some(days) if days <= EXPIRING_SOON_DAYS => CertificationStatus::ExpiringSoon,
            Some(_) => CertificationStatus::Valid,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            CertificationStatus::NoExpiry => "No Expiry",
            CertificationStatus::Expired => "Expired",
            CertificationStatus::ExpiringSoon => "Expiring Soon",
            CertificationStatus::Valid => "Valid",
        }
    }

    /// Whether the expiry overview report includes this status.
    pub fn needs_attention(&self) -> bool {
        matches!(self, CertificationStatus::Expired | CertificationStatus::ExpiringSoon)
    }
}

impl fmt::Display for CertificationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Signed number of days from `today` until expiry; negative once expired.
pub fn days_to_expiry(expiry_date: Option<NaiveDate>, today: NaiveDate) -> Option<i64> {
    expiry_date.map(|expiry| (expiry - today).num_days())
}

pub fn is_expired(expiry_date: Option<NaiveDate>, today: NaiveDate) -> bool {
    matches!(expiry_date, Some(expiry) if expiry < today)
}

/// Last day still inside the expiring-soon window.
pub fn expiring_soon_cutoff(today: NaiveDate) -> NaiveDate {
    today + Duration::days(EXPIRING_SOON_DAYS)
}

/// Parses a strict `YYYY-MM-DD` calendar date.
pub fn parse_date(input: &str) -> TrackerResult<NaiveDate> {
    let trimmed = input.trim();
    NaiveDate::parse_from_str(trimmed, DATE_FORMAT)
        .ok()
        // chrono accepts unpadded fields; require the canonical ten-character form
        .filter(|_| trimmed.len() == 10)
        .ok_or_else(|| TrackerError::validation(format!("'{}' is not a valid date, use YYYY-MM-DD (e.g., 2025-01-31)", trimmed)))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 6, 1).unwrap()
    }

    fn in_days(days: i64) -> Option<NaiveDate> {
        Some(today() + Duration::days(days))
    }

    #[test]
    fn no_expiry_date_means_no_expiry() {
        assert_eq!(CertificationStatus::classify(None, today()), CertificationStatus::NoExpiry);
    }

    #[test]
    fn yesterday_is_expired() {
        assert_eq!(CertificationStatus::classify(in_days(-1), today()), CertificationStatus::Expired);
        assert!(is_expired(in_days(-1), today()));
    }

    #[test]
    fn window_bounds_are_inclusive() {
        assert_eq!(CertificationStatus::classify(in_days(0), today()), CertificationStatus::ExpiringSoon);
        assert_eq!(CertificationStatus::classify(in_days(30), today()), CertificationStatus::ExpiringSoon);
        assert_eq!(CertificationStatus::classify(in_days(31), today()), CertificationStatus::Valid);
        assert!(!is_expired(in_days(0), today()));
    }

    #[test]
    fn window_crosses_month_and_year_ends() {
        let new_years_eve = NaiveDate::from_ymd_opt(2024, 12, 31).unwrap();
        let expiry = NaiveDate::from_ymd_opt(2025, 1, 30);
        assert_eq!(CertificationStatus::classify(expiry, new_years_eve), CertificationStatus::ExpiringSoon);
        assert_eq!(expiring_soon_cutoff(new_years_eve), NaiveDate::from_ymd_opt(2025, 1, 30).unwrap());
    }

    #[test]
    fn days_to_expiry_is_signed() {
        assert_eq!(days_to_expiry(in_days(-5), today()), Some(-5));
        assert_eq!(days_to_expiry(in_days(12), today()), Some(12));
        assert_eq!(days_to_expiry(None, today()), None);
    }

    #[test]
    fn labels() {
        assert_eq!(CertificationStatus::NoExpiry.to_string(), "No Expiry");
        assert_eq!(CertificationStatus::ExpiringSoon.to_string(), "Expiring Soon");
        assert!(CertificationStatus::Expired.needs_attention());
        assert!(!CertificationStatus::Valid.needs_attention());
    }

    #[test]
    fn parse_date_accepts_iso_only() {
        assert_eq!(parse_date("2025-06-15").unwrap(), NaiveDate::from_ymd_opt(2025, 6, 15).unwrap());
        assert_eq!(parse_date(" 2025-01-31 ").unwrap(), NaiveDate::from_ymd_opt(2025, 1, 31).unwrap());
        for bad in ["2025-02-30", "15/06/2025", "2025-6-5", "", "tomorrow"] {
            assert!(matches!(parse_date(bad), Err(TrackerError::Validation(_))), "accepted {bad}");
        }
    }
}
