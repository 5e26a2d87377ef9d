use async_trait::async_trait;

use crate::metrics::domain::{ComponentId, Finding, PolicyViolation};
use crate::shared::Result;

/// FindingRepository port for reading a component's current state
///
/// This port abstracts the storage layer's view of the findings and
/// policy violations currently associated with a component. The core
/// pulls this state fresh on every invocation and recomputes the full
/// aggregate; it never mutates findings or violations.
///
/// # Async Support
/// All methods are async because implementations typically sit in
/// front of a database. Implementations must be `Send + Sync` to
/// support concurrent invocations for different components.
#[async_trait]
pub trait FindingRepository: Send + Sync {
    /// Fetches the current non-deleted findings for a component
    ///
    /// # Arguments
    /// * `component` - The component whose findings to fetch
    ///
    /// # Returns
    /// Every finding currently associated with the component,
    /// suppressed ones included; the aggregator applies the suppression
    /// rules itself.
    ///
    /// # Errors
    /// Returns an error if the backing store is unavailable. The
    /// invocation fails as a whole and is safe to retry.
    async fn findings_for(&self, component: ComponentId) -> Result<Vec<Finding>>;

    /// Fetches the current policy violations for a component
    ///
    /// # Arguments
    /// * `component` - The component whose violations to fetch
    ///
    /// # Returns
    /// Every violation currently associated with the component,
    /// suppressed ones included.
    ///
    /// # Errors
    /// Returns an error if the backing store is unavailable.
    async fn violations_for(&self, component: ComponentId) -> Result<Vec<PolicyViolation>>;
}
