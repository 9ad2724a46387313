use std::io;

use serde::Serialize;
use serde_json::ser::Formatter;

const ACTIVE: &str = "active";

/// Body returned for every non-health request.
#[derive(Debug, Serialize)]
pub struct ServiceStatus<'a> {
    service: &'a str,
    trace_id: &'a str,
    status: &'static str,
}

impl<'a> ServiceStatus<'a> {
    pub fn active(service: &'a str, trace_id: &'a str) -> Self {
        Self {
            service,
            trace_id,
            status: ACTIVE,
        }
    }

    /// Serializes as `{"service": "..", "trace_id": "..", "status": "active"}`.
    ///
    /// Values are escaped by `serde_json`, so quotes in either field still
    /// produce valid JSON.
    pub fn to_json(&self) -> Result<Vec<u8>, serde_json::Error> {
        let mut body = Vec::with_capacity(64);
        let mut serializer = serde_json::Serializer::with_formatter(&mut body, SpacedFormatter);
        self.serialize(&mut serializer)?;
        Ok(body)
    }
}

/// Compact JSON with a space after every `:` and `,`.
struct SpacedFormatter;

impl Formatter for SpacedFormatter {
    fn begin_object_key<W>(&mut self, writer: &mut W, first: bool) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        if first {
            Ok(())
        } else {
            writer.write_all(b", ")
        }
    }

    fn begin_object_value<W>(&mut self, writer: &mut W) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        writer.write_all(b": ")
    }

    fn begin_array_value<W>(&mut self, writer: &mut W, first: bool) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        if first {
            Ok(())
        } else {
            writer.write_all(b", ")
        }
    }
}
