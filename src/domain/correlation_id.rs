use std::fmt::{Display, Formatter};
use std::future::{ready, Ready};

use actix_web::dev::Payload;
use actix_web::{FromRequest, HttpRequest};

/// Caller-supplied token tying a request to external tracing context.
///
/// Never validated or generated here; a request without the header carries
/// an empty id.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CorrelationId(String);

impl CorrelationId {
    pub const HEADER: &'static str = "x-correlation-id";

    pub fn from_request_headers(req: &HttpRequest) -> Self {
        // Header names are case-insensitive, `HeaderMap` normalizes them.
        let value = req
            .headers()
            .get(Self::HEADER)
            .map(|v| String::from_utf8_lossy(v.as_bytes()).into_owned())
            .unwrap_or_default();

        Self(value)
    }
}

impl AsRef<str> for CorrelationId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Display for CorrelationId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

// Reading a header never fails, so the extractor resolves immediately.
impl FromRequest for CorrelationId {
    type Error = actix_web::Error;
    type Future = Ready<Result<CorrelationId, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        ready(Ok(CorrelationId::from_request_headers(req)))
    }
}
