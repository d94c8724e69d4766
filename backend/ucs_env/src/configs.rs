use std::path::PathBuf;

use common_enums::GatewayMode;
use common_utils::consts;
use domain_types::types::Connectors;

use crate::logger::config::Log;

/// Environment variable naming the deployment, read when no explicit config path is given.
pub const RUN_ENV: &str = "RUN_ENV";

#[derive(Clone, serde::Deserialize, Debug)]
pub struct Config {
    pub common: Common,
    #[serde(default)]
    pub log: Log,
    #[serde(default)]
    pub connectors: Connectors,
    #[serde(default)]
    pub firstdata: FirstdataSettings,
}

#[derive(Clone, serde::Deserialize, Debug)]
pub struct Common {
    pub environment: Env,
}

/// Settings of the FirstData adapter that are not credentials.
#[derive(Clone, Copy, serde::Deserialize, Debug, Default, PartialEq, Eq)]
#[serde(default)]
pub struct FirstdataSettings {
    /// `test` sends `GOOD` orders to the test endpoint, `live` sends `LIVE` orders.
    pub mode: GatewayMode,
}

#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    PartialEq,
    Eq,
    serde::Deserialize,
    serde::Serialize,
    strum::Display,
    strum::EnumString,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum Env {
    #[default]
    Development,
    Sandbox,
    Production,
}

impl Env {
    pub fn current_env() -> Self {
        std::env::var(RUN_ENV)
            .ok()
            .and_then(|env| env.parse().ok())
            .unwrap_or_default()
    }

    pub fn config_path(&self) -> &'static str {
        match self {
            Self::Development => "development.toml",
            Self::Sandbox => "sandbox.toml",
            Self::Production => "production.toml",
        }
    }
}

impl Config {
    /// Function to build the configuration by picking it from default locations
    pub fn new() -> Result<Self, config::ConfigError> {
        Self::new_with_config_path(None)
    }

    /// Builds the configuration from `explicit_config_path` when given, else `config/<env>.toml`.
    pub fn new_with_config_path(
        explicit_config_path: Option<PathBuf>,
    ) -> Result<Self, config::ConfigError> {
        let env = Env::current_env();
        let config_path = Self::config_path(&env, explicit_config_path);
        Self::load(&env, config_path, None)
    }

    fn load(
        environment: &Env,
        config_path: PathBuf,
        env_overrides: Option<config::Map<String, String>>,
    ) -> Result<Self, config::ConfigError> {
        let config = Self::builder(environment)?
            .add_source(config::File::from(config_path).required(false))
            .add_source(
                config::Environment::with_prefix(consts::ENV_PREFIX)
                    .try_parsing(true)
                    .separator("__")
                    .source(env_overrides),
            )
            .build()?;

        #[allow(clippy::print_stderr)]
        let config: Self = serde_path_to_error::deserialize(config).map_err(|error| {
            eprintln!("Unable to deserialize application configuration: {error}");
            error.into_inner()
        })?;

        config.validate()?;

        Ok(config)
    }

    pub fn builder(
        environment: &Env,
    ) -> Result<config::ConfigBuilder<config::builder::DefaultState>, config::ConfigError> {
        config::Config::builder().set_default("common.environment", environment.to_string())
    }

    /// Config path.
    pub fn config_path(environment: &Env, explicit_config_path: Option<PathBuf>) -> PathBuf {
        let mut config_path = PathBuf::new();
        if let Some(explicit_config_path_val) = explicit_config_path {
            config_path.push(explicit_config_path_val);
        } else {
            config_path.push(workspace_path());
            config_path.push("config");
            config_path.push(environment.config_path());
        }
        config_path
    }

    pub fn validate(&self) -> Result<(), config::ConfigError> {
        let endpoint = self.connectors.firstdata.get_base_url(self.firstdata.mode);
        if endpoint.trim().is_empty() {
            return Err(config::ConfigError::Message(format!(
                "no FirstData endpoint configured for {} mode",
                self.firstdata.mode
            )));
        }
        Ok(())
    }
}

pub fn workspace_path() -> PathBuf {
    if let Ok(manifest_dir) = std::env::var("CARGO_MANIFEST_DIR") {
        let mut path = PathBuf::from(manifest_dir);
        path.pop();
        path.pop();
        path
    } else {
        PathBuf::from(".")
    }
}
