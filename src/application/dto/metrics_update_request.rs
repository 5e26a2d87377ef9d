use crate::metrics::domain::ComponentId;

/// MetricsUpdateRequest - Internal request DTO for the metrics update
/// use case
///
/// Deliberately minimal: the trigger signal carries only the component
/// identity, and the core pulls everything else from current state.
#[derive(Debug, Clone, Copy)]
pub struct MetricsUpdateRequest {
    /// The component whose metrics should be recomputed
    pub component: ComponentId,
}

impl MetricsUpdateRequest {
    pub fn new(component: ComponentId) -> Self {
        Self { component }
    }
}
