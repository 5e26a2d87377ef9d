pub mod error;
pub mod result;

pub use error::MetricsError;
pub use result::Result;
