use serde::{Deserialize, Serialize};

#[derive(Clone, Deserialize, Serialize, Debug, PartialEq)]
pub struct Connectors {
    #[serde(default = "ConnectorParams::firstdata")]
    pub firstdata: ConnectorParams,
}

impl Default for Connectors {
    fn default() -> Self {
        Self {
            firstdata: ConnectorParams::firstdata(),
        }
    }
}

#[derive(Clone, Deserialize, Serialize, Debug, Default, PartialEq)]
pub struct ConnectorParams {
    /// base url, used in test mode
    #[serde(default)]
    pub base_url: String,
    /// url used in live mode, falls back to `base_url`
    #[serde(default)]
    pub secondary_base_url: Option<String>,
}

impl ConnectorParams {
    pub fn firstdata() -> Self {
        Self {
            base_url: "https://secure.linkpt.net:1129/".to_string(),
            secondary_base_url: Some("https://secure.linkpt.net:1129/".to_string()),
        }
    }

    pub fn get_base_url(&self, mode: common_enums::GatewayMode) -> &str {
        match mode {
            common_enums::GatewayMode::Test => &self.base_url,
            common_enums::GatewayMode::Live => self
                .secondary_base_url
                .as_deref()
                .unwrap_or(&self.base_url),
        }
    }
}
