use hyperswitch_masking::Secret;

/// Credentials a merchant registers for a connector.
///
/// The key names are connector agnostic; each connector documents which key carries what.
#[derive(Default, Debug, Clone, serde::Deserialize, serde::Serialize)]
#[serde(tag = "auth_type")]
pub enum ConnectorAuthType {
    HeaderKey {
        api_key: Secret<String>,
    },
    BodyKey {
        api_key: Secret<String>,
        key1: Secret<String>,
    },
    #[default]
    NoKey,
}

pub type Error = error_stack::Report<crate::errors::ConnectorError>;
