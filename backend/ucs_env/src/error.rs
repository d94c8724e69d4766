#[derive(Debug, thiserror::Error)]
pub enum ConfigurationError {
    #[error("Unable to build configuration: {0}")]
    ConfigError(#[from] config::ConfigError),
    #[error("Invalid configuration value provided: {0}")]
    InvalidConfigurationValueError(String),
    #[error("Failed to install the global logger: {0}")]
    LoggerError(String),
}
