use std::collections::HashMap;

use common_utils::CustomResult;
use domain_types::errors;

use super::constants::{fields, RESPONSE_ROOT};
use crate::utils::xml_utils;

/// Every field of a switch reply, keyed by wire name.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FirstdataResponse {
    fields: HashMap<String, String>,
}

impl FirstdataResponse {
    pub fn parse(body: &[u8]) -> CustomResult<Self, errors::ConnectorError> {
        let fields = xml_utils::parse_rootless_xml_fields(body, RESPONSE_ROOT)?;
        Ok(Self { fields })
    }

    pub fn get(&self, field_name: &str) -> Option<&str> {
        self.fields.get(field_name).map(String::as_str)
    }

    pub fn get_approved(&self) -> CustomResult<&str, errors::ConnectorError> {
        self.get_required(fields::APPROVED)
    }

    pub fn get_message(&self) -> CustomResult<&str, errors::ConnectorError> {
        self.get_required(fields::MESSAGE)
    }

    pub fn get_avs(&self) -> Option<&str> {
        self.get(fields::AVS)
    }

    pub fn get_order_number(&self) -> Option<&str> {
        self.get(fields::ORDER_NUMBER).filter(|id| !id.is_empty())
    }

    pub fn into_fields(self) -> HashMap<String, String> {
        self.fields
    }

    fn get_required(
        &self,
        field_name: &'static str,
    ) -> CustomResult<&str, errors::ConnectorError> {
        self.get(field_name).ok_or_else(|| {
            errors::ConnectorError::MissingResponseField { field_name }.into()
        })
    }
}

impl From<HashMap<String, String>> for FirstdataResponse {
    fn from(fields: HashMap<String, String>) -> Self {
        Self { fields }
    }
}
