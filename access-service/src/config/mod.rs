use profitcast_core::error::CoreError;
use serde::Deserialize;

/// Access-service configuration, loaded via `profitcast_core::config`.
#[derive(Debug, Deserialize, Clone)]
pub struct AccessConfig {
    #[serde(default = "default_service_name")]
    pub service_name: String,
    #[serde(default = "default_log_level")]
    pub log_level: String,
    pub jwt: JwtConfig,
}

/// Settings for the built-in JWT credential verifier.
#[derive(Debug, Deserialize, Clone)]
pub struct JwtConfig {
    pub secret: String,
    /// Clock-skew tolerance applied to `exp`, in seconds.
    #[serde(default)]
    pub leeway_seconds: u64,
}

fn default_service_name() -> String {
    "access-service".to_string()
}

fn default_log_level() -> String {
    "info".to_string()
}

impl AccessConfig {
    pub fn load() -> Result<Self, CoreError> {
        profitcast_core::config::load()
    }
}
