use crate::metrics::domain::{
    Finding, MetricsAggregate, PolicyViolation, Severity, ViolationState, ViolationType,
};
use crate::metrics::policies::RiskWeights;

/// FindingAggregator service for computing posture counters
///
/// This service contains the pure counting logic that reconciles the
/// three vulnerability taxonomies (severity, audit state, suppression)
/// and the two policy-violation taxonomies (state, type) into one
/// consistent aggregate. It has no I/O dependencies and works only
/// with domain objects.
pub struct FindingAggregator;

impl FindingAggregator {
    /// Aggregates the current findings and violations of one component
    ///
    /// Total over any input, including the empty set, which yields an
    /// all-zero aggregate with a zero risk score.
    ///
    /// # Arguments
    /// * `findings` - current vulnerability findings for the component
    /// * `violations` - current policy violations for the component
    /// * `weights` - severity weighting for the risk score
    ///
    /// # Returns
    /// A `MetricsAggregate` with every counter populated
    pub fn aggregate(
        findings: &[Finding],
        violations: &[PolicyViolation],
        weights: &RiskWeights,
    ) -> MetricsAggregate {
        let mut aggregate = MetricsAggregate::default();

        for finding in findings {
            // Suppressed findings contribute to no counter but their own.
            if finding.is_suppressed() {
                aggregate.suppressed += 1;
                continue;
            }

            match finding.severity() {
                Severity::Critical => aggregate.critical += 1,
                Severity::High => aggregate.high += 1,
                Severity::Medium => aggregate.medium += 1,
                Severity::Low => aggregate.low += 1,
                Severity::Unassigned => aggregate.unassigned += 1,
            }

            aggregate.vulnerabilities += 1;
            aggregate.findings_total += 1;
            if finding.is_audited() {
                aggregate.findings_audited += 1;
            } else {
                aggregate.findings_unaudited += 1;
            }
        }

        aggregate.inherited_risk_score = weights.score(
            aggregate.critical,
            aggregate.high,
            aggregate.medium,
            aggregate.low,
            aggregate.unassigned,
        );

        for violation in violations {
            if violation.is_suppressed() {
                continue;
            }

            match violation.state() {
                ViolationState::Fail => aggregate.policy_violations_fail += 1,
                ViolationState::Warn => aggregate.policy_violations_warn += 1,
                ViolationState::Info => aggregate.policy_violations_info += 1,
            }
            aggregate.policy_violations_total += 1;

            let audited = violation.is_audited();
            if audited {
                aggregate.policy_violations_audited += 1;
            } else {
                aggregate.policy_violations_unaudited += 1;
            }

            // Type buckets are an orthogonal view of the same set, each
            // with its own audit split.
            match violation.violation_type() {
                ViolationType::Security => {
                    aggregate.policy_violations_security_total += 1;
                    if audited {
                        aggregate.policy_violations_security_audited += 1;
                    } else {
                        aggregate.policy_violations_security_unaudited += 1;
                    }
                }
                ViolationType::License => {
                    aggregate.policy_violations_license_total += 1;
                    if audited {
                        aggregate.policy_violations_license_audited += 1;
                    } else {
                        aggregate.policy_violations_license_unaudited += 1;
                    }
                }
                ViolationType::Operational => {
                    aggregate.policy_violations_operational_total += 1;
                    if audited {
                        aggregate.policy_violations_operational_audited += 1;
                    } else {
                        aggregate.policy_violations_operational_unaudited += 1;
                    }
                }
            }
        }

        aggregate
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::metrics::domain::{AnalysisState, ViolationAnalysisState};

    fn aggregate(findings: &[Finding], violations: &[PolicyViolation]) -> MetricsAggregate {
        FindingAggregator::aggregate(findings, violations, &RiskWeights::default())
    }

    #[test]
    fn test_aggregate_empty_inputs() {
        let result = aggregate(&[], &[]);
        assert_eq!(result, MetricsAggregate::default());
        assert_eq!(result.inherited_risk_score, 0.0);
        assert!(result.verify().is_ok());
    }

    #[test]
    fn test_aggregate_vulnerability_scenario() {
        // One unaudited HIGH, one audited MEDIUM, one suppressed MEDIUM.
        let findings = vec![
            Finding::new("INTERNAL-001", Severity::High).unwrap(),
            Finding::new("INTERNAL-002", Severity::Medium)
                .unwrap()
                .with_analysis(AnalysisState::NotAffected),
            Finding::new("INTERNAL-003", Severity::Medium)
                .unwrap()
                .with_analysis(AnalysisState::FalsePositive)
                .suppress(),
        ];

        let result = aggregate(&findings, &[]);
        assert_eq!(result.critical, 0);
        assert_eq!(result.high, 1);
        assert_eq!(result.medium, 1);
        assert_eq!(result.low, 0);
        assert_eq!(result.unassigned, 0);
        assert_eq!(result.vulnerabilities, 2);
        assert_eq!(result.suppressed, 1);
        assert_eq!(result.findings_total, 2);
        assert_eq!(result.findings_audited, 1);
        assert_eq!(result.findings_unaudited, 1);
        assert_eq!(result.inherited_risk_score, 8.0);
        assert!(result.verify().is_ok());
    }

    #[test]
    fn test_aggregate_policy_violation_scenario() {
        // One unaudited FAIL/LICENSE, one audited WARN/OPERATIONAL, one
        // suppressed INFO/SECURITY.
        let violations = vec![
            PolicyViolation::new("banned-licenses", ViolationState::Fail, ViolationType::License)
                .unwrap(),
            PolicyViolation::new(
                "outdated-components",
                ViolationState::Warn,
                ViolationType::Operational,
            )
            .unwrap()
            .with_analysis(ViolationAnalysisState::Approved),
            PolicyViolation::new(
                "no-prerelease",
                ViolationState::Info,
                ViolationType::Security,
            )
            .unwrap()
            .with_analysis(ViolationAnalysisState::Rejected)
            .suppress(),
        ];

        let result = aggregate(&[], &violations);
        assert_eq!(result.policy_violations_fail, 1);
        assert_eq!(result.policy_violations_warn, 1);
        assert_eq!(result.policy_violations_info, 0);
        assert_eq!(result.policy_violations_total, 2);
        assert_eq!(result.policy_violations_audited, 1);
        assert_eq!(result.policy_violations_unaudited, 1);
        assert_eq!(result.policy_violations_security_total, 0);
        assert_eq!(result.policy_violations_security_audited, 0);
        assert_eq!(result.policy_violations_security_unaudited, 0);
        assert_eq!(result.policy_violations_license_total, 1);
        assert_eq!(result.policy_violations_license_audited, 0);
        assert_eq!(result.policy_violations_license_unaudited, 1);
        assert_eq!(result.policy_violations_operational_total, 1);
        assert_eq!(result.policy_violations_operational_audited, 1);
        assert_eq!(result.policy_violations_operational_unaudited, 0);
        assert_eq!(result.inherited_risk_score, 0.0);
        assert!(result.verify().is_ok());
    }

    #[test]
    fn test_suppressed_findings_do_not_score() {
        let findings = vec![
            Finding::new("CVE-2024-0001", Severity::Critical)
                .unwrap()
                .suppress(),
            Finding::new("CVE-2024-0002", Severity::Critical)
                .unwrap()
                .suppress(),
        ];
        let result = aggregate(&findings, &[]);
        assert_eq!(result.suppressed, 2);
        assert_eq!(result.vulnerabilities, 0);
        assert_eq!(result.critical, 0);
        assert_eq!(result.inherited_risk_score, 0.0);
        assert!(result.verify().is_ok());
    }

    #[test]
    fn test_risk_score_zero_iff_no_unsuppressed_findings() {
        let unsuppressed = vec![Finding::new("CVE-2024-0003", Severity::Low).unwrap()];
        assert!(aggregate(&unsuppressed, &[]).inherited_risk_score > 0.0);

        let suppressed_only = vec![Finding::new("CVE-2024-0004", Severity::Critical)
            .unwrap()
            .suppress()];
        assert_eq!(aggregate(&suppressed_only, &[]).inherited_risk_score, 0.0);
    }

    #[test]
    fn test_unassigned_severity_counts_and_scores() {
        let json = r#"{"vuln_id": "GHSA-unrated"}"#;
        let unrated: Finding = serde_json::from_str(json).unwrap();

        let result = aggregate(&[unrated], &[]);
        assert_eq!(result.unassigned, 1);
        assert_eq!(result.vulnerabilities, 1);
        assert_eq!(result.inherited_risk_score, 5.0);
        assert!(result.verify().is_ok());
    }

    #[test]
    fn test_in_triage_counts_as_audited() {
        let findings = vec![Finding::new("CVE-2024-0005", Severity::High)
            .unwrap()
            .with_analysis(AnalysisState::InTriage)];
        let result = aggregate(&findings, &[]);
        assert_eq!(result.findings_audited, 1);
        assert_eq!(result.findings_unaudited, 0);
    }

    #[test]
    fn test_audit_and_state_sums_hold_for_mixed_inputs() {
        let findings = vec![
            Finding::new("CVE-1", Severity::Critical).unwrap(),
            Finding::new("CVE-2", Severity::High)
                .unwrap()
                .with_analysis(AnalysisState::Exploitable),
            Finding::new("CVE-3", Severity::Low).unwrap().suppress(),
            Finding::new("CVE-4", Severity::Unassigned).unwrap(),
        ];
        let violations = vec![
            PolicyViolation::new("p1", ViolationState::Fail, ViolationType::Security).unwrap(),
            PolicyViolation::new("p2", ViolationState::Fail, ViolationType::License)
                .unwrap()
                .with_analysis(ViolationAnalysisState::Approved),
            PolicyViolation::new("p3", ViolationState::Info, ViolationType::Operational)
                .unwrap()
                .suppress(),
        ];

        let result = aggregate(&findings, &violations);
        assert_eq!(
            result.findings_audited + result.findings_unaudited,
            result.findings_total
        );
        assert_eq!(result.findings_total, 3);
        assert_eq!(
            result.policy_violations_fail
                + result.policy_violations_warn
                + result.policy_violations_info,
            result.policy_violations_total
        );
        assert_eq!(
            result.policy_violations_security_total
                + result.policy_violations_license_total
                + result.policy_violations_operational_total,
            result.policy_violations_total
        );
        assert!(result.verify().is_ok());
    }
}
