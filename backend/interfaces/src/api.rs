use common_enums::GatewayMode;
use domain_types::{connector_types::ConnectorSpecifications, types::Connectors};

pub trait ConnectorCommon {
    /// Name of the connector (in lowercase).
    fn id(&self) -> &'static str;

    /// Content type of the request body.
    fn common_get_content_type(&self) -> &'static str {
        "application/json"
    }

    /// The base URL for interacting with the connector's API in the given mode.
    fn base_url<'a>(&self, connectors: &'a Connectors, mode: GatewayMode) -> &'a str;

    /// Display name, homepage and what the connector accepts.
    fn get_connector_specifications(&self) -> ConnectorSpecifications;
}
