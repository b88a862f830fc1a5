//! Error types for chart calculations.

use thiserror::Error;

use crate::lunar::LunarError;

/// Errors from chart input validation or the lunar collaborator.
#[derive(Debug, Clone, PartialEq, Error)]
#[non_exhaustive]
pub enum GanzhiError {
    /// Year, month, day, hour or minute out of range.
    #[error("invalid date: {0}")]
    InvalidDate(String),
    /// Unrecognised gender token.
    #[error("invalid gender: {0:?} (expected male or female)")]
    InvalidGender(String),
    /// Not a stem+branch pair of the sexagenary cycle.
    #[error("invalid pillar: {0:?}")]
    InvalidPillar(String),
    /// Lunar calendar conversion failed.
    #[error("lunar conversion failed: {0}")]
    ExternalConversion(#[from] LunarError),
}

/// Result alias for chart calculations.
pub type Result<T> = std::result::Result<T, GanzhiError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_field() {
        let e = GanzhiError::InvalidDate("month 13 outside 1..=12".into());
        assert_eq!(e.to_string(), "invalid date: month 13 outside 1..=12");
    }

    #[test]
    fn lunar_error_converts() {
        let e: GanzhiError = LunarError::OutOfRange {
            year: 1900,
            month: 1,
            day: 1,
        }
        .into();
        assert!(matches!(e, GanzhiError::ExternalConversion(_)));
        assert!(e.to_string().contains("1900-01-01"), "got: {e}");
    }
}
