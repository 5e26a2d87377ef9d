use async_trait::async_trait;
use chrono::{DateTime, Utc};
use dashmap::DashMap;
use std::sync::Arc;

use crate::metrics::domain::{ComponentId, DependencyMetrics, Finding, PolicyViolation};
use crate::ports::outbound::{FindingRepository, MetricsRepository};
use crate::shared::{MetricsError, Result};

/// InMemoryMetricsStore - reference implementation of both storage
/// ports
///
/// Backs the current-state view and the snapshot series with
/// thread-safe maps. Intended for tests and for embedding the core
/// without a database; a production deployment supplies its own
/// adapters over real storage.
///
/// Cloning is cheap and shares the underlying state, so the same store
/// can be handed to the use case and kept around for seeding and
/// inspection.
#[derive(Clone, Default)]
pub struct InMemoryMetricsStore {
    findings: Arc<DashMap<ComponentId, Vec<Finding>>>,
    violations: Arc<DashMap<ComponentId, Vec<PolicyViolation>>>,
    snapshots: Arc<DashMap<ComponentId, Vec<DependencyMetrics>>>,
    cached_scores: Arc<DashMap<ComponentId, f64>>,
}

impl InMemoryMetricsStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the findings currently associated with a component
    pub fn put_findings(&self, component: ComponentId, findings: Vec<Finding>) {
        self.findings.insert(component, findings);
    }

    /// Associates one more finding with a component
    pub fn add_finding(&self, component: ComponentId, finding: Finding) {
        self.findings.entry(component).or_default().push(finding);
    }

    /// Replaces the policy violations currently associated with a
    /// component
    pub fn put_violations(&self, component: ComponentId, violations: Vec<PolicyViolation>) {
        self.violations.insert(component, violations);
    }

    /// Associates one more violation with a component
    pub fn add_violation(&self, component: ComponentId, violation: PolicyViolation) {
        self.violations.entry(component).or_default().push(violation);
    }

    /// Full snapshot series for a component, ordered by
    /// `first_occurrence`
    pub fn snapshot_history(&self, component: ComponentId) -> Vec<DependencyMetrics> {
        self.snapshots
            .get(&component)
            .map(|rows| rows.clone())
            .unwrap_or_default()
    }

    /// The component's cached risk score, if one was ever written
    pub fn cached_risk_score(&self, component: ComponentId) -> Option<f64> {
        self.cached_scores.get(&component).map(|score| *score)
    }
}

#[async_trait]
impl FindingRepository for InMemoryMetricsStore {
    async fn findings_for(&self, component: ComponentId) -> Result<Vec<Finding>> {
        Ok(self
            .findings
            .get(&component)
            .map(|findings| findings.clone())
            .unwrap_or_default())
    }

    async fn violations_for(&self, component: ComponentId) -> Result<Vec<PolicyViolation>> {
        Ok(self
            .violations
            .get(&component)
            .map(|violations| violations.clone())
            .unwrap_or_default())
    }
}

#[async_trait]
impl MetricsRepository for InMemoryMetricsStore {
    async fn most_recent(&self, component: ComponentId) -> Result<Option<DependencyMetrics>> {
        // Rows are appended in observation order, so the last one holds
        // the greatest first_occurrence.
        Ok(self
            .snapshots
            .get(&component)
            .and_then(|rows| rows.last().cloned()))
    }

    async fn insert(&self, metrics: DependencyMetrics) -> Result<()> {
        self.snapshots
            .entry(metrics.component)
            .or_default()
            .push(metrics);
        Ok(())
    }

    async fn touch_last_occurrence(
        &self,
        component: ComponentId,
        observed_at: DateTime<Utc>,
    ) -> Result<()> {
        let mut rows = self
            .snapshots
            .get_mut(&component)
            .ok_or(MetricsError::NoSnapshotRecorded {
                component: component.as_uuid(),
            })?;
        let current = rows.last_mut().ok_or(MetricsError::NoSnapshotRecorded {
            component: component.as_uuid(),
        })?;
        current.touch(observed_at);
        Ok(())
    }

    async fn set_component_risk_score(&self, component: ComponentId, score: f64) -> Result<()> {
        self.cached_scores.insert(component, score);
        Ok(())
    }
}
