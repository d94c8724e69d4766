use common_enums::CardNetwork;

pub const CONNECTOR_ID: &str = "firstdata";
pub const DISPLAY_NAME: &str = "FirstData";
pub const HOMEPAGE_URL: &str = "http://www.firstdata.com";

pub const SUPPORTED_COUNTRIES: &[&str] = &["US"];
pub const SUPPORTED_CARD_NETWORKS: &[CardNetwork] = &[
    CardNetwork::Visa,
    CardNetwork::Mastercard,
    CardNetwork::AmericanExpress,
    CardNetwork::Discover,
    CardNetwork::JCB,
    CardNetwork::DinersClub,
];

/// The switch only listens on this port, in both modes.
pub const SWITCH_PORT: u16 = 1129;

pub const REQUEST_ROOT: &str = "order";
/// Synthetic element the reply is wrapped in, the switch sends bare siblings.
pub const RESPONSE_ROOT: &str = "document";

pub const CVM_INDICATOR_PROVIDED: &str = "provided";
pub const STATE_NOT_APPLICABLE: &str = "n/a";

pub const APPROVED: &str = "APPROVED";

pub(crate) mod fields {
    pub const APPROVED: &str = "r_approved";
    pub const MESSAGE: &str = "r_message";
    pub const AVS: &str = "r_avs";
    pub const ORDER_NUMBER: &str = "r_ordernum";
}
