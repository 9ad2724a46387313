use serde_aux::prelude::deserialize_number_from_string;

use crate::domain::ServiceName;

/// Environment variable carrying the service identity.
pub const SERVICE_NAME_VAR: &str = "SERVICE_NAME";

#[derive(Debug)]
pub enum Environment {
    Local,
    Production,
}

impl Environment {
    pub fn as_str(&self) -> &'static str {
        match self {
            Environment::Local => "local",
            Environment::Production => "production",
        }
    }
}

impl TryFrom<String> for Environment {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        match value.to_lowercase().as_str() {
            "local" => Ok(Self::Local),
            "production" => Ok(Self::Production),
            other => Err(format!(
                "{} is not a supported environment. Use either `local` or `production`.",
                other,
            )),
        }
    }
}

#[derive(serde::Deserialize, Clone)]
pub struct AppConfig {
    pub host: String,
    #[serde(deserialize_with = "deserialize_number_from_string")]
    pub port: u16,
}

impl AppConfig {
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

#[derive(serde::Deserialize, Clone)]
pub struct Configuration {
    pub application: AppConfig,
    /// Resolved from `SERVICE_NAME`, not from the configuration files.
    #[serde(skip)]
    pub service_name: ServiceName,
}

pub fn get_configuration() -> Result<Configuration, config::ConfigError> {
    let mut settings = config::Config::default();

    let base_path = std::env::current_dir()
        .map_err(|e| config::ConfigError::Message(format!("no working directory: {}", e)))?;
    let configuration_directory = base_path.join("configuration");

    // Serves on every interface at 8080 even without any configuration files.
    settings.set_default("application.host", "0.0.0.0")?;
    settings.set_default("application.port", 8080_i64)?;

    // Optional overrides: yaml, json or toml all work.
    settings.merge(config::File::from(configuration_directory.join("base")).required(false))?;

    let environment: Environment = std::env::var("APP_ENVIRONMENT")
        .unwrap_or_else(|_| "local".into())
        .try_into()
        .map_err(config::ConfigError::Message)?;

    settings.merge(
        config::File::from(configuration_directory.join(environment.as_str())).required(false),
    )?;

    // e.g. `APP_APPLICATION__PORT=9000`
    settings.merge(config::Environment::with_prefix("app").separator("__"))?;

    let mut configuration: Configuration = settings.try_into()?;
    configuration.service_name = ServiceName::from_env_value(std::env::var(SERVICE_NAME_VAR).ok());

    Ok(configuration)
}
