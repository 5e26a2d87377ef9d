use async_trait::async_trait;
use chrono::{DateTime, Utc};

use crate::metrics::domain::{ComponentId, DependencyMetrics};
use crate::shared::Result;

/// MetricsRepository port for the snapshot time series
///
/// This port abstracts how snapshot rows and the component's cached
/// risk score are persisted. The reconcile step in the use case calls
/// `most_recent` / `insert` / `touch_last_occurrence` under a
/// per-component lock; implementations that want to tolerate fully
/// concurrent callers must make the read-then-write step transactional
/// at component granularity themselves.
#[async_trait]
pub trait MetricsRepository: Send + Sync {
    /// Fetches the current snapshot row for a component
    ///
    /// # Arguments
    /// * `component` - The component whose series to read
    ///
    /// # Returns
    /// The row with the greatest `first_occurrence`, or `None` when no
    /// metrics were ever recorded for the component.
    ///
    /// # Errors
    /// Returns an error if the backing store is unavailable.
    async fn most_recent(&self, component: ComponentId) -> Result<Option<DependencyMetrics>>;

    /// Appends a new snapshot row to the component's series
    ///
    /// Existing rows are never modified by an insert; the previous
    /// current row simply stops being the most recent one.
    ///
    /// # Errors
    /// Returns an error if the backing store is unavailable.
    async fn insert(&self, metrics: DependencyMetrics) -> Result<()>;

    /// Advances `last_occurrence` on the component's current row
    ///
    /// Used when a re-observation produced an aggregate identical to
    /// the current row: the row's validity window widens, nothing else
    /// changes.
    ///
    /// # Arguments
    /// * `component` - The component whose current row to touch
    /// * `observed_at` - The new `last_occurrence` value
    ///
    /// # Errors
    /// Returns an error if no row exists for the component or the
    /// backing store is unavailable.
    async fn touch_last_occurrence(
        &self,
        component: ComponentId,
        observed_at: DateTime<Utc>,
    ) -> Result<()>;

    /// Writes the component's cached risk score
    ///
    /// Called unconditionally on every invocation so the cached value
    /// stays fresh even when the counters were unchanged.
    ///
    /// # Errors
    /// Returns an error if the backing store is unavailable.
    async fn set_component_risk_score(&self, component: ComponentId, score: f64) -> Result<()>;
}
