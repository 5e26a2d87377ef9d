pub mod update_metrics;

pub use update_metrics::UpdateComponentMetricsUseCase;
