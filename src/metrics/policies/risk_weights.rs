use serde::{Deserialize, Serialize};

use crate::shared::{MetricsError, Result};

/// RiskWeights policy for deriving the inherited risk score
///
/// This policy encodes the business rule that turns severity-bucketed
/// finding counts into a single comparable scalar. Suppressed findings
/// never reach the weighting; the aggregator filters them first.
///
/// The defaults are load-bearing: downstream consumers compare scores
/// across components and over time, so deployments that tune the
/// weights accept that their scores are no longer comparable with the
/// canonical ones.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RiskWeights {
    pub critical: f64,
    pub high: f64,
    pub medium: f64,
    pub low: f64,
    /// Unassigned findings carry the same weight as high-severity ones:
    /// an unrated vulnerability is unknown, not harmless.
    pub unassigned: f64,
}

impl Default for RiskWeights {
    fn default() -> Self {
        Self {
            critical: 10.0,
            high: 5.0,
            medium: 3.0,
            low: 1.0,
            unassigned: 5.0,
        }
    }
}

impl RiskWeights {
    /// Computes the weighted score for a set of severity bucket counts
    ///
    /// # Arguments
    /// * `critical`, `high`, `medium`, `low`, `unassigned` - counts of
    ///   non-suppressed findings per severity bucket
    ///
    /// # Returns
    /// The inherited risk score; zero when every bucket is empty
    pub fn score(&self, critical: u32, high: u32, medium: u32, low: u32, unassigned: u32) -> f64 {
        f64::from(critical) * self.critical
            + f64::from(high) * self.high
            + f64::from(medium) * self.medium
            + f64::from(low) * self.low
            + f64::from(unassigned) * self.unassigned
    }

    /// Validates that every weight is finite and non-negative
    ///
    /// # Errors
    /// Returns `MetricsError::InvalidRiskWeight` naming the offending
    /// weight.
    pub fn validate(&self) -> Result<()> {
        for (name, value) in [
            ("critical", self.critical),
            ("high", self.high),
            ("medium", self.medium),
            ("low", self.low),
            ("unassigned", self.unassigned),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(MetricsError::InvalidRiskWeight { name, value }.into());
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_weights_match_canonical_values() {
        let weights = RiskWeights::default();
        assert_eq!(weights.critical, 10.0);
        assert_eq!(weights.high, 5.0);
        assert_eq!(weights.medium, 3.0);
        assert_eq!(weights.low, 1.0);
        assert_eq!(weights.unassigned, 5.0);
    }

    #[test]
    fn test_score_empty_buckets_is_zero() {
        assert_eq!(RiskWeights::default().score(0, 0, 0, 0, 0), 0.0);
    }

    #[test]
    fn test_score_one_high_one_medium() {
        // The reference scenario: 1 HIGH + 1 MEDIUM -> 5 + 3.
        assert_eq!(RiskWeights::default().score(0, 1, 1, 0, 0), 8.0);
    }

    #[test]
    fn test_score_weighs_every_bucket() {
        let score = RiskWeights::default().score(2, 1, 1, 3, 1);
        assert_eq!(score, 2.0 * 10.0 + 5.0 + 3.0 + 3.0 * 1.0 + 5.0);
    }

    #[test]
    fn test_custom_weights() {
        let weights = RiskWeights {
            critical: 100.0,
            ..Default::default()
        };
        assert_eq!(weights.score(1, 0, 0, 0, 0), 100.0);
    }

    #[test]
    fn test_validate_accepts_defaults() {
        assert!(RiskWeights::default().validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_negative_weight() {
        let weights = RiskWeights {
            medium: -3.0,
            ..Default::default()
        };
        let err = weights.validate().unwrap_err();
        assert!(err.to_string().contains("'medium'"));
    }

    #[test]
    fn test_validate_rejects_non_finite_weight() {
        let weights = RiskWeights {
            low: f64::NAN,
            ..Default::default()
        };
        assert!(weights.validate().is_err());
    }
}
