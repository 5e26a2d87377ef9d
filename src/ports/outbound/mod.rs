/// Outbound ports (Driven ports) - Infrastructure interfaces
///
/// These ports define the interfaces that the application core uses
/// to interact with the storage layer: the current-state view of
/// findings and violations, and the snapshot time series.
pub mod finding_repository;
pub mod metrics_repository;

pub use finding_repository::FindingRepository;
pub use metrics_repository::MetricsRepository;
