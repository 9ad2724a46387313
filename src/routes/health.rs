use actix_web::http::header::ContentType;
use actix_web::{HttpResponse, Responder};
use uuid::Uuid;

/// Liveness probe. Answers every method the same way and stays quiet at
/// the default `info` level.
pub async fn health_check() -> impl Responder {
    let request_id = Uuid::new_v4();
    let request_span = tracing::debug_span!(
        "Checking service health",
        %request_id,
    );

    let _request_span_guard = request_span.enter();
    tracing::debug!("Service is healthy!");
    HttpResponse::Ok()
        .content_type(ContentType::plaintext())
        .body("OK")
}
