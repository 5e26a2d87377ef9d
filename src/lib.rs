//! component-metrics - metrics and risk scoring core for software
//! composition analysis platforms
//!
//! Given a component and the vulnerability findings and policy
//! violations currently recorded against it, this library computes a
//! point-in-time posture snapshot (counts by severity, audit status,
//! suppression status, plus a scalar risk score) and records it into a
//! change-compacted time series: a new row only when something
//! changed, otherwise the current row's validity window is extended.
//!
//! # Architecture
//!
//! The library is organized into the following layers:
//!
//! - **Domain Layer** (`metrics`): Pure business logic and domain models
//! - **Application Layer** (`application`): Use cases and application services
//! - **Ports** (`ports`): Interface definitions for infrastructure
//! - **Adapters** (`adapters`): Concrete implementations of ports
//! - **Shared** (`shared`): Common utilities and error types
//!
//! Storage, trigger dispatch, and report ingestion are collaborators
//! behind the ports; the crate ships an in-memory reference adapter
//! for embedding and tests.
//!
//! # Example
//!
//! ```
//! use component_metrics::prelude::*;
//!
//! # #[tokio::main(flavor = "current_thread")]
//! # async fn main() -> Result<()> {
//! // Seed the reference store with the current state of a component
//! let store = InMemoryMetricsStore::new();
//! let component = ComponentId::new();
//! store.put_findings(
//!     component,
//!     vec![Finding::new("CVE-2024-0001", Severity::High)?],
//! );
//!
//! // Wire the use case against the store and run one invocation
//! let use_case = UpdateComponentMetricsUseCase::new(store.clone(), store.clone());
//! let response = use_case.execute(MetricsUpdateRequest::new(component)).await?;
//!
//! assert!(response.created_new_row);
//! assert_eq!(response.metrics.counters.high, 1);
//! assert_eq!(store.cached_risk_score(component), Some(5.0));
//! # Ok(())
//! # }
//! ```

pub mod adapters;
pub mod application;
pub mod config;
pub mod metrics;
pub mod ports;
pub mod shared;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::adapters::outbound::memory::InMemoryMetricsStore;
    pub use crate::application::dto::{MetricsUpdateRequest, MetricsUpdateResponse};
    pub use crate::application::use_cases::UpdateComponentMetricsUseCase;
    pub use crate::metrics::domain::{
        AnalysisState, ComponentId, DependencyMetrics, Finding, MetricsAggregate, PolicyViolation,
        Severity, ViolationAnalysisState, ViolationState, ViolationType,
    };
    pub use crate::metrics::policies::RiskWeights;
    pub use crate::metrics::services::FindingAggregator;
    pub use crate::ports::inbound::MetricsUpdatePort;
    pub use crate::ports::outbound::{FindingRepository, MetricsRepository};
    pub use crate::shared::{MetricsError, Result};
}
