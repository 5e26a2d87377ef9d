use anyhow::Context;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use dashmap::DashMap;
use std::sync::Arc;
use tokio::sync::Mutex;

use crate::application::dto::{MetricsUpdateRequest, MetricsUpdateResponse};
use crate::metrics::domain::{ComponentId, DependencyMetrics, MetricsAggregate};
use crate::metrics::policies::RiskWeights;
use crate::metrics::services::FindingAggregator;
use crate::ports::inbound::MetricsUpdatePort;
use crate::ports::outbound::{FindingRepository, MetricsRepository};
use crate::shared::Result;

/// UpdateComponentMetricsUseCase - Core use case for recording a
/// component's posture snapshot
///
/// Orchestrates one invocation of the core: read the component's
/// current findings and violations, aggregate them, reconcile the
/// result against the snapshot series, and refresh the component's
/// cached risk score. Uses generic dependency injection for the two
/// storage ports.
///
/// Invocations for the same component are serialized through an
/// internal lock registry; invocations for different components run in
/// parallel. This makes the "at most one snapshot-producing write per
/// component per change" guarantee explicit instead of relying on the
/// trigger mechanism happening to be single-threaded.
///
/// # Type Parameters
/// * `FR` - FindingRepository implementation
/// * `MR` - MetricsRepository implementation
pub struct UpdateComponentMetricsUseCase<FR, MR> {
    finding_repository: FR,
    metrics_repository: MR,
    weights: RiskWeights,
    component_locks: DashMap<ComponentId, Arc<Mutex<()>>>,
}

impl<FR, MR> UpdateComponentMetricsUseCase<FR, MR>
where
    FR: FindingRepository,
    MR: MetricsRepository,
{
    /// Creates a new use case with the canonical risk weights
    pub fn new(finding_repository: FR, metrics_repository: MR) -> Self {
        Self::with_weights(finding_repository, metrics_repository, RiskWeights::default())
    }

    /// Creates a new use case with tuned risk weights
    ///
    /// Callers are expected to have validated the weights (see
    /// `RiskWeights::validate`); the configuration loader does this for
    /// file-provided values.
    pub fn with_weights(
        finding_repository: FR,
        metrics_repository: MR,
        weights: RiskWeights,
    ) -> Self {
        Self {
            finding_repository,
            metrics_repository,
            weights,
            component_locks: DashMap::new(),
        }
    }

    /// Executes one metrics update invocation
    ///
    /// # Arguments
    /// * `request` - carries the component identity
    ///
    /// # Returns
    /// The current snapshot row after the invocation and whether it was
    /// newly appended.
    ///
    /// # Errors
    /// Fails as a whole if a store read/write fails or the aggregate is
    /// internally inconsistent. Retrying re-derives the aggregate from
    /// current state, so redelivered triggers cannot corrupt history.
    pub async fn execute(&self, request: MetricsUpdateRequest) -> Result<MetricsUpdateResponse> {
        let component = request.component;

        let lock = self.lock_for(component);
        let _guard = lock.lock().await;

        let findings = self.finding_repository.findings_for(component).await?;
        let violations = self.finding_repository.violations_for(component).await?;

        let aggregate = FindingAggregator::aggregate(&findings, &violations, &self.weights);
        aggregate.verify().with_context(|| {
            format!("aggregated metrics for component {component} are inconsistent")
        })?;

        let observed_at = Utc::now();
        let (metrics, created_new_row) = self.reconcile(component, aggregate, observed_at).await?;

        // Unconditional on purpose: the cached score is re-affirmed even
        // when the counters did not change.
        self.metrics_repository
            .set_component_risk_score(component, metrics.counters.inherited_risk_score)
            .await?;

        Ok(MetricsUpdateResponse::new(metrics, created_new_row))
    }

    /// Compares the fresh aggregate against the current snapshot row
    /// and either extends that row's validity window or appends a new
    /// row.
    async fn reconcile(
        &self,
        component: ComponentId,
        aggregate: MetricsAggregate,
        observed_at: DateTime<Utc>,
    ) -> Result<(DependencyMetrics, bool)> {
        match self.metrics_repository.most_recent(component).await? {
            Some(mut current) if current.matches(&aggregate) => {
                self.metrics_repository
                    .touch_last_occurrence(component, observed_at)
                    .await?;
                current.touch(observed_at);
                tracing::debug!(
                    component = %component,
                    last_occurrence = %observed_at,
                    "metrics unchanged, extended current snapshot"
                );
                Ok((current, false))
            }
            previous => {
                let row = DependencyMetrics::observed(component, aggregate, observed_at);
                self.metrics_repository.insert(row.clone()).await?;
                tracing::info!(
                    component = %component,
                    risk_score = row.counters.inherited_risk_score,
                    first_snapshot = previous.is_none(),
                    "recorded new metrics snapshot"
                );
                Ok((row, true))
            }
        }
    }

    fn lock_for(&self, component: ComponentId) -> Arc<Mutex<()>> {
        self.component_locks.entry(component).or_default().clone()
    }
}

#[async_trait]
impl<FR, MR> MetricsUpdatePort for UpdateComponentMetricsUseCase<FR, MR>
where
    FR: FindingRepository,
    MR: MetricsRepository,
{
    async fn update_metrics(&self, component: ComponentId) -> Result<DependencyMetrics> {
        let response = self.execute(MetricsUpdateRequest::new(component)).await?;
        Ok(response.metrics)
    }
}
