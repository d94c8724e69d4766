/// Header value sent with every outgoing request
pub const USER_AGENT: &str = "connector-service";

/// Prefix for environment variable overrides of the configuration
pub const ENV_PREFIX: &str = "UCS";
