//! Installs the global `tracing` subscriber.

use tracing_subscriber::{
    filter::LevelFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer,
    Registry,
};

use super::config::{Log, LogConsole, LogFormat};
use crate::error::ConfigurationError;

type BoxedLayer = Box<dyn Layer<Registry> + Send + Sync>;

/// Sets up the global subscriber from the `[log]` config. Fails if one is already installed.
pub fn setup(config: &Log) -> Result<(), ConfigurationError> {
    let console_layer = config
        .console
        .enabled
        .then(|| console_layer(&config.console))
        .transpose()?;

    tracing_subscriber::registry()
        .with(console_layer)
        .try_init()
        .map_err(|error| ConfigurationError::LoggerError(error.to_string()))
}

fn console_layer(console: &LogConsole) -> Result<BoxedLayer, ConfigurationError> {
    let filter = build_filter(console)?;
    let layer = match console.log_format {
        LogFormat::Default => fmt::layer().with_target(true).with_filter(filter).boxed(),
        LogFormat::Json => fmt::layer()
            .json()
            .with_current_span(true)
            .with_span_list(true)
            .with_target(true)
            .with_filter(filter)
            .boxed(),
    };
    Ok(layer)
}

/// `filtering_directive` wins when set; otherwise `RUST_LOG` on top of the configured level.
pub fn build_filter(console: &LogConsole) -> Result<EnvFilter, ConfigurationError> {
    let builder = EnvFilter::builder()
        .with_default_directive(LevelFilter::from_level(console.level.into_level()).into());

    match console.filtering_directive.as_deref() {
        Some(directive) => builder.parse(directive).map_err(|error| {
            ConfigurationError::InvalidConfigurationValueError(format!(
                "log.console.filtering_directive: {error}"
            ))
        }),
        None => Ok(builder.from_env_lossy()),
    }
}
