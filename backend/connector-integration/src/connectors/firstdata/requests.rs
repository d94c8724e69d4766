use common_utils::types::StringMajorUnit;
use hyperswitch_masking::Secret;
use serde::{Serialize, Serializer};

/// One order sent to the switch, serialized as flat children of `<order>`.
///
/// Absent optional fields are left out of the XML entirely. `chargetotal` is only absent for voids.
#[derive(Debug, Serialize)]
pub struct FirstdataTransactionRequest {
    pub host: String,
    pub port: u16,
    pub configfile: Secret<String>,
    pub keyfile: Secret<String>,
    pub ordertype: FirstdataOrderType,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub chargetotal: Option<StringMajorUnit>,
    pub result: FirstdataResultMode,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cardnumber: Option<Secret<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cardexpmonth: Option<Secret<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cardexpyear: Option<Secret<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<Secret<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cvmindicator: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cvmvalue: Option<Secret<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub authorization: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub authorization_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address1: Option<Secret<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub company: Option<Secret<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<Secret<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub zip: Option<Secret<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
    pub state: Secret<String>,
}

/// Action code of an order. Refunds go out as lowercase `credit`, the switch expects it that way.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FirstdataOrderType {
    Preauth,
    Sale,
    Postauth,
    Void,
    Credit,
}

impl FirstdataOrderType {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Preauth => "PREAUTH",
            Self::Sale => "SALE",
            Self::Postauth => "POSTAUTH",
            Self::Void => "VOID",
            Self::Credit => "credit",
        }
    }
}

impl std::fmt::Display for FirstdataOrderType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for FirstdataOrderType {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

/// `GOOD` asks the switch for a simulated approval, `LIVE` settles for real.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FirstdataResultMode {
    Good,
    Live,
}

impl From<common_enums::GatewayMode> for FirstdataResultMode {
    fn from(mode: common_enums::GatewayMode) -> Self {
        match mode {
            common_enums::GatewayMode::Test => Self::Good,
            common_enums::GatewayMode::Live => Self::Live,
        }
    }
}

impl Serialize for FirstdataResultMode {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(match self {
            Self::Good => "GOOD",
            Self::Live => "LIVE",
        })
    }
}

#[derive(Debug, Clone)]
pub struct FirstdataCard {
    pub cardnumber: Secret<String>,
    pub cardexpmonth: Secret<String>,
    pub cardexpyear: Secret<String>,
    pub name: Secret<String>,
    pub cvmvalue: Secret<String>,
}

#[derive(Debug, Clone)]
pub struct FirstdataAddress {
    pub address1: Option<Secret<String>>,
    pub company: Option<Secret<String>>,
    pub phone: Option<Secret<String>>,
    pub zip: Option<Secret<String>>,
    pub city: Option<String>,
    pub country: Option<String>,
    pub state: Secret<String>,
}

/// Link to an earlier transaction. Captures name it `authorization_id`, voids and credits
/// `authorization`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FirstdataReference {
    AuthorizationId(String),
    Authorization(String),
}
