pub mod aggregate;
pub mod component;
pub mod finding;
pub mod snapshot;
pub mod violation;

pub use aggregate::MetricsAggregate;
pub use component::ComponentId;
pub use finding::{AnalysisState, Finding, Severity};
pub use snapshot::DependencyMetrics;
pub use violation::{PolicyViolation, ViolationAnalysisState, ViolationState, ViolationType};
