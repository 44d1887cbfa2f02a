//! Field checks applied by the repositories before anything is written.

use crate::db::error::{TrackerError, TrackerResult};

/// Rejects blank required text, returning the trimmed value.
pub fn require_text(field: &str, value: &str) -> TrackerResult<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(TrackerError::validation(format!("{} cannot be empty", field)));
    }
    Ok(trimmed.to_string())
}

/// Optional text on create: blank collapses to `None`.
pub fn optional_text(value: Option<&str>) -> Option<String> {
    value.map(str::trim).filter(|v| !v.is_empty()).map(str::to_string)
}

/// Replacement text on update. `None` keeps the stored value, so a blank
/// replacement is a caller mistake rather than a request to clear the field.
pub fn replacement_text(field: &str, value: Option<&str>) -> TrackerResult<Option<String>> {
    value.map(|v| require_text(field, v)).transpose()
}

pub fn validate_year(year: Option<i32>) -> TrackerResult<Option<i32>> {
    match year {
        Some(y) if !(1..=9999).contains(&y) => Err(TrackerError::validation(format!("year {} is out of range", y))),
        other => Ok(other),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_text_is_rejected() {
        assert!(matches!(require_text("name", "   "), Err(TrackerError::Validation(_))));
        assert_eq!(require_text("name", "  Moringa ").unwrap(), "Moringa");
    }

    #[test]
    fn optional_text_drops_blanks() {
        assert_eq!(optional_text(Some("  ")), None);
        assert_eq!(optional_text(Some(" Nairobi ")), Some("Nairobi".to_string()));
        assert_eq!(optional_text(None), None);
    }

    #[test]
    fn replacement_text_keeps_none_and_rejects_blank() {
        assert_eq!(replacement_text("location", None).unwrap(), None);
        assert!(replacement_text("location", Some("")).is_err());
        assert_eq!(replacement_text("location", Some("Mombasa")).unwrap(), Some("Mombasa".to_string()));
    }

    #[test]
    fn year_range() {
        assert_eq!(validate_year(Some(2014)).unwrap(), Some(2014));
        assert_eq!(validate_year(None).unwrap(), None);
        assert!(validate_year(Some(-3)).is_err());
        assert!(validate_year(Some(0)).is_err());
    }
}
