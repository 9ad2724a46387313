use std::net::TcpListener;

use actix_web::dev::Server;
use actix_web::{web, App, HttpServer};
use tracing_actix_web::TracingLogger;

use crate::domain::ServiceName;
use crate::routes::health::health_check;
use crate::routes::service_status::service_status;

/// Starts serving on an already bound listener.
///
/// `/health` matches exactly and for any method; everything else lands in
/// the default service.
pub fn run(listener: TcpListener, service_name: ServiceName) -> Result<Server, std::io::Error> {
    let service_name = web::Data::new(service_name);
    Ok(HttpServer::new(move || {
        App::new()
            .wrap(TracingLogger::default())
            .route("/health", web::route().to(health_check))
            .default_service(web::route().to(service_status))
            .app_data(service_name.clone())
    })
    .listen(listener)?
    .run())
}
