use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{ComponentId, MetricsAggregate};

/// One persisted row of the metrics time series for a component.
///
/// The series is a run-length encoding of the component's posture: a
/// row is appended only when the observed aggregate differs from the
/// current row, otherwise the current row's `last_occurrence` is
/// advanced in place. A row is therefore valid over the window
/// `[first_occurrence, last_occurrence]` and is never retroactively
/// modified once a newer row exists.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DependencyMetrics {
    pub component: ComponentId,
    #[serde(flatten)]
    pub counters: MetricsAggregate,
    /// When this exact aggregate state was first observed.
    pub first_occurrence: DateTime<Utc>,
    /// When this state was most recently re-observed.
    pub last_occurrence: DateTime<Utc>,
}

impl DependencyMetrics {
    /// Builds a fresh row for an aggregate observed at `observed_at`.
    ///
    /// Both occurrence timestamps start at the observation instant; the
    /// window only widens later through `touch`.
    pub fn observed(
        component: ComponentId,
        counters: MetricsAggregate,
        observed_at: DateTime<Utc>,
    ) -> Self {
        Self {
            component,
            counters,
            first_occurrence: observed_at,
            last_occurrence: observed_at,
        }
    }

    /// Whether this row records exactly the given aggregate.
    ///
    /// Field-by-field over every counter and the risk score; the
    /// compaction rule depends on exact equality, not an approximate
    /// comparison.
    pub fn matches(&self, aggregate: &MetricsAggregate) -> bool {
        self.counters == *aggregate
    }

    /// Extends the row's validity window to a newer observation.
    pub fn touch(&mut self, observed_at: DateTime<Utc>) {
        self.last_occurrence = observed_at;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_aggregate() -> MetricsAggregate {
        MetricsAggregate {
            high: 1,
            vulnerabilities: 1,
            findings_total: 1,
            findings_unaudited: 1,
            inherited_risk_score: 5.0,
            ..Default::default()
        }
    }

    #[test]
    fn test_observed_starts_with_equal_occurrences() {
        let now = Utc::now();
        let row = DependencyMetrics::observed(ComponentId::new(), sample_aggregate(), now);
        assert_eq!(row.first_occurrence, now);
        assert_eq!(row.last_occurrence, now);
    }

    #[test]
    fn test_matches_compares_all_counters() {
        let row = DependencyMetrics::observed(ComponentId::new(), sample_aggregate(), Utc::now());
        assert!(row.matches(&sample_aggregate()));

        let mut changed = sample_aggregate();
        changed.suppressed = 1;
        assert!(!row.matches(&changed));
    }

    #[test]
    fn test_touch_advances_last_occurrence_only() {
        let created = Utc::now();
        let mut row = DependencyMetrics::observed(ComponentId::new(), sample_aggregate(), created);

        let later = created + chrono::Duration::seconds(90);
        row.touch(later);
        assert_eq!(row.first_occurrence, created);
        assert_eq!(row.last_occurrence, later);
    }

    #[test]
    fn test_serde_flattens_counters() {
        let row = DependencyMetrics::observed(ComponentId::new(), sample_aggregate(), Utc::now());
        let json = serde_json::to_value(&row).unwrap();
        // Counter fields sit at the top level of the row, the way the
        // storage layer persists them.
        assert_eq!(json["high"], 1);
        assert_eq!(json["inherited_risk_score"], 5.0);
        assert!(json.get("counters").is_none());

        let back: DependencyMetrics = serde_json::from_value(json).unwrap();
        assert_eq!(back, row);
    }
}
