//! Error types for the metrics view model
//!
//! Errors fall in two groups:
//! - Selection: a sort key, zone or tab outside the closed option set
//! - Integrity: a dataset whose zone references do not line up

use thiserror::Error;

/// Errors raised at the boundary of the view model
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MetricsError {
    // Selection errors
    #[error("Invalid sort key: {0} (expected revenue, quantity, showPct or pincodes)")]
    InvalidSortKey(String),

    #[error("Unknown zone: {0}")]
    UnknownZone(String),

    #[error("Invalid tab: {0}")]
    InvalidTab(String),

    // Integrity errors
    #[error("Duplicate zone name: {0}")]
    DuplicateZone(String),

    #[error("Clinic {clinic} references missing zone {zone}")]
    DanglingZoneReference { clinic: String, zone: String },
}

impl MetricsError {
    /// Returns true if the error came from a user-facing selection
    pub fn is_selection_error(&self) -> bool {
        matches!(
            self,
            MetricsError::InvalidSortKey(_)
                | MetricsError::UnknownZone(_)
                | MetricsError::InvalidTab(_)
        )
    }
}

pub type Result<T> = std::result::Result<T, MetricsError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_classification() {
        assert!(MetricsError::InvalidSortKey("x".into()).is_selection_error());
        assert!(MetricsError::UnknownZone("Mars".into()).is_selection_error());
        assert!(!MetricsError::DuplicateZone("East".into()).is_selection_error());

        let dangling = MetricsError::DanglingZoneReference {
            clinic: "Baner".into(),
            zone: "West 9".into(),
        };
        assert!(!dangling.is_selection_error());
        assert_eq!(
            dangling.to_string(),
            "Clinic Baner references missing zone West 9"
        );
    }
}
