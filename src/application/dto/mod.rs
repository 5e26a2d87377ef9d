pub mod metrics_update_request;
pub mod metrics_update_response;

pub use metrics_update_request::MetricsUpdateRequest;
pub use metrics_update_response::MetricsUpdateResponse;
