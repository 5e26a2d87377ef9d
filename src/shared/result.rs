/// Crate-wide Result alias over `anyhow::Error`.
///
/// Keeps error handling uniform across domain services, ports, and
/// adapters; typed errors (`MetricsError`) are wrapped into the chain
/// where identification matters.
pub type Result<T> = std::result::Result<T, anyhow::Error>;
