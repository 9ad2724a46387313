use actix_web::http::header::ContentType;
use actix_web::{web, HttpResponse};

use crate::domain::{CorrelationId, ServiceName, ServiceStatus};

/// Fallback handler for every path other than `/health`.
pub async fn service_status(
    correlation_id: CorrelationId,
    service_name: web::Data<ServiceName>,
) -> Result<HttpResponse, actix_web::Error> {
    let service_name = service_name.get_ref();
    tracing::info!("[{}] Request received on {}", correlation_id, service_name);

    let body = ServiceStatus::active(service_name.as_ref(), correlation_id.as_ref()).to_json()?;

    Ok(HttpResponse::Ok()
        .content_type(ContentType::json())
        .body(body))
}
