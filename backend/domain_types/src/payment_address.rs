use hyperswitch_masking::Secret;
use serde::{Deserialize, Serialize};

use crate::{errors, router_data::Error};

#[derive(Clone, Default, Debug, Eq, PartialEq, Deserialize, Serialize)]
pub struct Address {
    pub address: Option<AddressDetails>,
    pub phone: Option<Secret<String>>,
}

#[derive(Clone, Default, Debug, Eq, PartialEq, Deserialize, Serialize)]
pub struct AddressDetails {
    pub first_name: Option<Secret<String>>,
    pub last_name: Option<Secret<String>>,
    pub company: Option<Secret<String>>,
    pub line1: Option<Secret<String>>,
    pub line2: Option<Secret<String>>,
    pub city: Option<String>,
    pub state: Option<Secret<String>>,
    pub zip: Option<Secret<String>>,
    /// Two letter ISO country code
    pub country: Option<String>,
}

/// The addresses a caller may attach to a payment.
///
/// `billing` is the billing address proper; `address` is the generic address used
/// when no billing address was given.
#[derive(Clone, Default, Debug, Eq, PartialEq, Deserialize, Serialize)]
pub struct PaymentAddress {
    billing: Option<Address>,
    address: Option<Address>,
}

impl PaymentAddress {
    pub fn new(billing: Option<Address>, address: Option<Address>) -> Self {
        Self { billing, address }
    }

    pub fn get_payment_billing(&self) -> Option<&Address> {
        self.billing.as_ref()
    }

    pub fn get_address(&self) -> Option<&Address> {
        self.address.as_ref()
    }

    /// The billing address when present, otherwise the generic address.
    pub fn get_billing_or_address(&self) -> Result<&Address, Error> {
        self.get_payment_billing()
            .or_else(|| self.get_address())
            .ok_or_else(|| {
                errors::ConnectorError::MissingRequiredField {
                    field_name: "billing_address",
                }
                .into()
            })
    }
}
