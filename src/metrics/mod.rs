/// Metrics domain - pure business logic for posture aggregation
///
/// Organized the same way as the rest of the crate's layers: `domain`
/// holds the value objects and the snapshot row, `policies` the
/// tunable business rules, `services` the stateless algorithms.
pub mod domain;
pub mod policies;
pub mod services;
