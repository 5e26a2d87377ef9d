use thiserror::Error;
use uuid::Uuid;

/// Typed failures raised by the metrics core.
///
/// Uses thiserror to derive Display and Error traits automatically.
/// Most call sites propagate these through the crate-wide `anyhow`
/// Result; the typed variants exist so callers can distinguish
/// programming-error-class faults from transient store failures.
#[derive(Debug, Error)]
pub enum MetricsError {
    /// Aggregated counters failed their consistency check. This is a
    /// taxonomy-reconciliation bug, not a data quality issue, and is
    /// never silently corrected.
    #[error("metrics invariant violated: {details}")]
    InvariantViolation { details: String },

    /// A last-occurrence touch was requested for a component that has
    /// no snapshot row yet.
    #[error("no metrics snapshot recorded for component {component}")]
    NoSnapshotRecorded { component: Uuid },

    /// A configured risk weight is outside the accepted range.
    #[error("risk weight '{name}' must be a finite, non-negative number (got {value})")]
    InvalidRiskWeight { name: &'static str, value: f64 },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invariant_violation_display() {
        let error = MetricsError::InvariantViolation {
            details: "audited (2) + unaudited (1) != findings total (2)".to_string(),
        };
        let display = format!("{}", error);
        assert!(display.contains("metrics invariant violated"));
        assert!(display.contains("audited (2)"));
    }

    #[test]
    fn test_no_snapshot_recorded_display() {
        let component = Uuid::new_v4();
        let error = MetricsError::NoSnapshotRecorded { component };
        let display = format!("{}", error);
        assert!(display.contains("no metrics snapshot recorded"));
        assert!(display.contains(&component.to_string()));
    }

    #[test]
    fn test_invalid_risk_weight_display() {
        let error = MetricsError::InvalidRiskWeight {
            name: "critical",
            value: -1.0,
        };
        let display = format!("{}", error);
        assert!(display.contains("risk weight 'critical'"));
        assert!(display.contains("-1"));
    }
}
