use crate::metrics::domain::DependencyMetrics;

/// MetricsUpdateResponse - Result of one metrics update invocation
#[derive(Debug, Clone)]
pub struct MetricsUpdateResponse {
    /// The snapshot row that is current after this invocation
    pub metrics: DependencyMetrics,
    /// Whether a new row was appended (`true`) or the existing row was
    /// re-confirmed with an advanced `last_occurrence` (`false`)
    pub created_new_row: bool,
}

impl MetricsUpdateResponse {
    pub fn new(metrics: DependencyMetrics, created_new_row: bool) -> Self {
        Self {
            metrics,
            created_new_row,
        }
    }
}
