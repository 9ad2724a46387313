#![allow(dead_code)]

use std::io::Write;
use std::net::TcpListener;
use std::sync::{Arc, Mutex};

use once_cell::sync::Lazy;
use tracing_subscriber::fmt::MakeWriter;

use service_stub::domain::ServiceName;
use service_stub::telemetry::{get_subscriber, init_subscriber};

/// In-memory log sink shared by every test in a binary. Also echoes to
/// stdout when `TEST_LOG` is set.
#[derive(Clone)]
pub struct CapturedLogs {
    buffer: Arc<Mutex<Vec<u8>>>,
    echo: bool,
}

impl CapturedLogs {
    pub fn contents(&self) -> String {
        String::from_utf8_lossy(&self.buffer.lock().unwrap()).into_owned()
    }
}

impl Write for CapturedLogs {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        if self.echo {
            std::io::stdout().write_all(buf)?;
        }
        self.buffer.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> std::io::Result<()> {
        Ok(())
    }
}

impl<'a> MakeWriter<'a> for CapturedLogs {
    type Writer = CapturedLogs;

    fn make_writer(&'a self) -> Self::Writer {
        self.clone()
    }
}

static TRACING: Lazy<CapturedLogs> = Lazy::new(|| {
    let logs = CapturedLogs {
        buffer: Arc::new(Mutex::new(Vec::new())),
        echo: std::env::var("TEST_LOG").is_ok(),
    };
    init_subscriber(get_subscriber("test".into(), "info".into(), logs.clone()))
        .expect("Failed to initialise test tracing");
    logs
});

/// Everything logged so far by this test binary.
pub fn captured_logs() -> String {
    TRACING.contents()
}

pub struct TestApp {
    pub addr: String,
    pub client: reqwest::Client,
}

impl TestApp {
    pub async fn get(&self, path: &str) -> reqwest::Response {
        self.client
            .get(format!("{}{}", self.addr, path))
            .send()
            .await
            .expect("Failed to execute request.")
    }

    pub async fn get_with_correlation_id(&self, path: &str, id: &str) -> reqwest::Response {
        self.client
            .get(format!("{}{}", self.addr, path))
            .header("x-correlation-id", id)
            .send()
            .await
            .expect("Failed to execute request.")
    }
}

/// Spawns the server on a random local port with the fallback identity.
pub async fn spawn_app() -> TestApp {
    spawn_app_with(ServiceName::default()).await
}

pub async fn spawn_app_with(service_name: ServiceName) -> TestApp {
    Lazy::force(&TRACING);

    let listener = TcpListener::bind("127.0.0.1:0").expect("failed to bind to random port");
    let port = listener.local_addr().unwrap().port();
    let server = service_stub::run::run(listener, service_name).expect("Failed to bind address");
    let _ = tokio::spawn(server);

    TestApp {
        addr: format!("http://127.0.0.1:{}", port),
        client: reqwest::Client::new(),
    }
}
