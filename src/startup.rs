use std::net::TcpListener;

use actix_web::dev::Server;

use crate::config::Configuration;
use crate::domain::ServiceName;
use crate::run::run;

#[derive(thiserror::Error, Debug)]
pub enum StartupError {
    #[error("failed to bind listener on {address}")]
    Bind {
        address: String,
        #[source]
        source: std::io::Error,
    },
    #[error("server stopped with an error")]
    Serve(#[source] std::io::Error),
}

pub struct AppServer {
    port: u16,
    service_name: ServiceName,
    server: Server,
}

impl AppServer {
    pub fn build(configuration: Configuration) -> Result<Self, StartupError> {
        let address = configuration.application.address();
        let bind_error = |source| StartupError::Bind {
            address: address.clone(),
            source,
        };

        let listener = TcpListener::bind(&address).map_err(bind_error)?;
        let port = listener.local_addr().map_err(bind_error)?.port();
        let service_name = configuration.service_name;

        tracing::info!(
            "{} starting on {}:{}",
            service_name,
            configuration.application.host,
            port
        );

        let server = run(listener, service_name.clone()).map_err(bind_error)?;

        Ok(Self {
            port,
            service_name,
            server,
        })
    }

    pub fn port(&self) -> u16 {
        self.port
    }

    pub fn service_name(&self) -> &ServiceName {
        &self.service_name
    }

    /// Blocks for the lifetime of the process under normal operation.
    pub async fn run_until_stopped(self) -> Result<(), StartupError> {
        self.server.await.map_err(StartupError::Serve)
    }
}
