use common_enums::CardNetwork;
use error_stack::ResultExt;
use hyperswitch_masking::{PeekInterface, Secret};
use serde::{Deserialize, Serialize};

use crate::{errors, router_data::Error};

/// A card presented for a card-not-present payment.
///
/// Number and expiry validation happen before the card reaches a connector.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct Card {
    pub card_number: Secret<String>,
    pub card_exp_month: Secret<String>,
    pub card_exp_year: Secret<String>,
    pub card_cvc: Secret<String>,
    pub card_holder_first_name: Option<Secret<String>>,
    pub card_holder_last_name: Option<Secret<String>>,
    pub card_network: Option<CardNetwork>,
}

impl Card {
    /// Last two digits of the expiry month, zero padded: `1` and `"01"` both give `"01"`.
    pub fn get_card_expiry_month_2_digit(&self) -> Result<Secret<String>, Error> {
        two_digits(self.card_exp_month.peek(), "card_exp_month")
    }

    /// Last two digits of the expiry year: `2015` gives `"15"`, `"7"` gives `"07"`.
    pub fn get_card_expiry_year_2_digit(&self) -> Result<Secret<String>, Error> {
        two_digits(self.card_exp_year.peek(), "card_exp_year")
    }

    /// First and last name joined by a single space. Missing parts are left empty.
    pub fn get_card_holder_full_name(&self) -> Secret<String> {
        let first_name = self
            .card_holder_first_name
            .as_ref()
            .map(|name| name.peek().as_str())
            .unwrap_or_default();
        let last_name = self
            .card_holder_last_name
            .as_ref()
            .map(|name| name.peek().as_str())
            .unwrap_or_default();
        Secret::new(format!("{first_name} {last_name}"))
    }
}

fn two_digits(value: &str, field_name: &'static str) -> Result<Secret<String>, Error> {
    let number = value
        .trim()
        .parse::<u32>()
        .change_context(errors::ConnectorError::InvalidDataFormat { field_name })?;
    Ok(Secret::new(format!("{:02}", number % 100)))
}
