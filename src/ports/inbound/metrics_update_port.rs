use async_trait::async_trait;

use crate::metrics::domain::{ComponentId, DependencyMetrics};
use crate::shared::Result;

/// MetricsUpdatePort - Inbound port for triggering a metrics update
///
/// This port is the boundary the surrounding application's trigger
/// mechanism (event queue, scheduler, direct call) programs against.
/// It carries only the component identity; the core re-derives
/// everything else from current state, which is what makes at-least-
/// once redelivery of triggers safe.
#[async_trait]
pub trait MetricsUpdatePort: Send + Sync {
    /// Recomputes and records metrics for one component
    ///
    /// # Arguments
    /// * `component` - The component to update
    ///
    /// # Returns
    /// The snapshot row that is current after the update (newly
    /// inserted or re-confirmed).
    ///
    /// # Errors
    /// Returns an error if the backing store is unavailable or the
    /// aggregate fails its consistency check. Both are safe to retry.
    async fn update_metrics(&self, component: ComponentId) -> Result<DependencyMetrics>;
}
