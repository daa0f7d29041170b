use thiserror::Error;

/// Infrastructure-level errors shared across Profitcast services.
#[derive(Debug, Error)]
pub enum CoreError {
    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),
}
