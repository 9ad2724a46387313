//! src/domain/service_name.rs

use std::fmt::{Display, Formatter};

/// Identity reported when `SERVICE_NAME` is unset or empty.
pub const FALLBACK_SERVICE_NAME: &str = "generic-service";

/// The name this process reports about itself in logs and responses.
///
/// Always non-empty. Any other value, whitespace included, is kept verbatim.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceName(String);

impl ServiceName {
    pub fn parse(s: String) -> Result<ServiceName, String> {
        if s.is_empty() {
            return Err(format!("{:?} is not a valid service name.", s));
        }

        Ok(Self(s))
    }

    /// Resolves the identity from a raw environment value, falling back
    /// to [`FALLBACK_SERVICE_NAME`] when the variable is missing or empty.
    pub fn from_env_value(value: Option<String>) -> ServiceName {
        value
            .and_then(|v| Self::parse(v).ok())
            .unwrap_or_default()
    }
}

impl Default for ServiceName {
    fn default() -> Self {
        Self(FALLBACK_SERVICE_NAME.to_string())
    }
}

impl AsRef<str> for ServiceName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Display for ServiceName {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}
