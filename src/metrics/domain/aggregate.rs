use serde::{Deserialize, Serialize};

use crate::shared::{MetricsError, Result};

/// The full counter set produced by one aggregation pass over a
/// component's findings and policy violations.
///
/// Severity buckets, audit counters, and the risk score cover the
/// vulnerability side; state buckets and per-type breakdowns cover the
/// policy-violation side. State buckets and type buckets are orthogonal
/// views of the same non-suppressed violation set, so their sums must
/// agree.
///
/// Equality is field-by-field over every counter and the risk score;
/// the snapshot writer relies on this to decide between appending a new
/// row and touching the current one.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MetricsAggregate {
    pub critical: u32,
    pub high: u32,
    pub medium: u32,
    pub low: u32,
    pub unassigned: u32,
    /// Non-suppressed findings. Kept alongside `findings_total` because
    /// the two diverge in project-level rollups even though they are
    /// equal at component scope.
    pub vulnerabilities: u32,
    /// Findings excluded from every other counter by suppression.
    pub suppressed: u32,
    pub findings_total: u32,
    pub findings_audited: u32,
    pub findings_unaudited: u32,
    pub inherited_risk_score: f64,
    pub policy_violations_fail: u32,
    pub policy_violations_warn: u32,
    pub policy_violations_info: u32,
    pub policy_violations_total: u32,
    pub policy_violations_audited: u32,
    pub policy_violations_unaudited: u32,
    pub policy_violations_security_total: u32,
    pub policy_violations_security_audited: u32,
    pub policy_violations_security_unaudited: u32,
    pub policy_violations_license_total: u32,
    pub policy_violations_license_audited: u32,
    pub policy_violations_license_unaudited: u32,
    pub policy_violations_operational_total: u32,
    pub policy_violations_operational_audited: u32,
    pub policy_violations_operational_unaudited: u32,
}

impl MetricsAggregate {
    /// Checks the cross-taxonomy consistency invariants.
    ///
    /// A failure here is a programming-error-class fault in the
    /// aggregation logic and must abort the invocation; it is never
    /// corrected in place.
    ///
    /// # Errors
    /// Returns `MetricsError::InvariantViolation` naming the first
    /// inconsistency found.
    pub fn verify(&self) -> Result<()> {
        let severity_sum = self.critical + self.high + self.medium + self.low + self.unassigned;
        if severity_sum != self.vulnerabilities {
            return Self::violated(format!(
                "severity buckets ({}) != vulnerabilities total ({})",
                severity_sum, self.vulnerabilities
            ));
        }
        if self.findings_total != self.vulnerabilities {
            return Self::violated(format!(
                "findings total ({}) != vulnerabilities total ({})",
                self.findings_total, self.vulnerabilities
            ));
        }
        if self.findings_audited + self.findings_unaudited != self.findings_total {
            return Self::violated(format!(
                "findings audited ({}) + unaudited ({}) != findings total ({})",
                self.findings_audited, self.findings_unaudited, self.findings_total
            ));
        }

        let state_sum =
            self.policy_violations_fail + self.policy_violations_warn + self.policy_violations_info;
        if state_sum != self.policy_violations_total {
            return Self::violated(format!(
                "violation state buckets ({}) != violations total ({})",
                state_sum, self.policy_violations_total
            ));
        }
        let type_sum = self.policy_violations_security_total
            + self.policy_violations_license_total
            + self.policy_violations_operational_total;
        if type_sum != self.policy_violations_total {
            return Self::violated(format!(
                "violation type buckets ({}) != violations total ({})",
                type_sum, self.policy_violations_total
            ));
        }
        if self.policy_violations_audited + self.policy_violations_unaudited
            != self.policy_violations_total
        {
            return Self::violated(format!(
                "violations audited ({}) + unaudited ({}) != violations total ({})",
                self.policy_violations_audited,
                self.policy_violations_unaudited,
                self.policy_violations_total
            ));
        }

        for (label, total, audited, unaudited) in [
            (
                "security",
                self.policy_violations_security_total,
                self.policy_violations_security_audited,
                self.policy_violations_security_unaudited,
            ),
            (
                "license",
                self.policy_violations_license_total,
                self.policy_violations_license_audited,
                self.policy_violations_license_unaudited,
            ),
            (
                "operational",
                self.policy_violations_operational_total,
                self.policy_violations_operational_audited,
                self.policy_violations_operational_unaudited,
            ),
        ] {
            if audited + unaudited != total {
                return Self::violated(format!(
                    "{} violations audited ({}) + unaudited ({}) != {} total ({})",
                    label, audited, unaudited, label, total
                ));
            }
        }

        Ok(())
    }

    fn violated(details: String) -> Result<()> {
        Err(MetricsError::InvariantViolation { details }.into())
    }
}
