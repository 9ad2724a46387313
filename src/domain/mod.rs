mod correlation_id;
mod service_name;
mod service_status;

pub use correlation_id::CorrelationId;
pub use service_name::{ServiceName, FALLBACK_SERVICE_NAME};
pub use service_status::ServiceStatus;
