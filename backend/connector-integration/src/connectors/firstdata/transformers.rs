use common_enums::{CaptureMethod, GatewayMode};
use common_utils::types::StringMajorUnit;
use domain_types::{
    connector_types::{
        PaymentOptions, PaymentVoidData, PaymentsAuthorizeData, PaymentsCaptureData,
        RefundsData, TransactionMetadata, TransactionResult,
    },
    errors,
    payment_address::Address,
    payment_method_data::Card,
    router_data::ConnectorAuthType,
    utils::missing_field_err,
};
use hyperswitch_masking::{PeekInterface, Secret};

use super::{
    constants::{APPROVED, CVM_INDICATOR_PROVIDED, STATE_NOT_APPLICABLE, SWITCH_PORT},
    requests::{
        FirstdataAddress, FirstdataCard, FirstdataOrderType, FirstdataReference,
        FirstdataResultMode, FirstdataTransactionRequest,
    },
    responses::FirstdataResponse,
};
use crate::types::ResponseRouterData;

type Error = error_stack::Report<errors::ConnectorError>;

/// Merchant identity on the switch.
///
/// `api_key` carries the store's config file id, `key1` the path of the PEM key file.
#[derive(Debug, Clone)]
pub struct FirstdataAuthType {
    pub configfile: Secret<String>,
    pub keyfile: Secret<String>,
}

impl TryFrom<&ConnectorAuthType> for FirstdataAuthType {
    type Error = Error;

    fn try_from(auth_type: &ConnectorAuthType) -> Result<Self, Self::Error> {
        match auth_type {
            ConnectorAuthType::BodyKey { api_key, key1 } => {
                if api_key.peek().trim().is_empty() {
                    return Err(errors::ConnectorError::InvalidConnectorConfig {
                        config: "configfile",
                    }
                    .into());
                }
                if key1.peek().trim().is_empty() {
                    return Err(errors::ConnectorError::InvalidConnectorConfig {
                        config: "keyfile",
                    }
                    .into());
                }
                Ok(Self {
                    configfile: api_key.to_owned(),
                    keyfile: key1.to_owned(),
                })
            }
            _ => Err(errors::ConnectorError::FailedToObtainAuthType.into()),
        }
    }
}

/// What every order carries regardless of the action.
#[derive(Debug, Clone, Copy)]
pub struct FirstdataMerchant<'a> {
    pub auth: &'a FirstdataAuthType,
    pub host: &'a str,
    pub mode: GatewayMode,
}

pub struct FirstdataRouterData<'a, T> {
    pub amount: Option<StringMajorUnit>,
    pub merchant: FirstdataMerchant<'a>,
    pub router_data: &'a T,
}

impl FirstdataTransactionRequest {
    fn new(
        merchant: FirstdataMerchant<'_>,
        ordertype: FirstdataOrderType,
        chargetotal: Option<StringMajorUnit>,
        card: Option<FirstdataCard>,
        address: Option<FirstdataAddress>,
        reference: Option<FirstdataReference>,
    ) -> Self {
        let (authorization, authorization_id) = match reference {
            Some(FirstdataReference::Authorization(id)) => (Some(id), None),
            Some(FirstdataReference::AuthorizationId(id)) => (None, Some(id)),
            None => (None, None),
        };
        let address = address.unwrap_or_else(FirstdataAddress::not_applicable);
        let (cardnumber, cardexpmonth, cardexpyear, name, cvmindicator, cvmvalue) = match card {
            Some(card) => (
                Some(card.cardnumber),
                Some(card.cardexpmonth),
                Some(card.cardexpyear),
                Some(card.name),
                Some(CVM_INDICATOR_PROVIDED),
                Some(card.cvmvalue),
            ),
            None => (None, None, None, None, None, None),
        };

        Self {
            host: merchant.host.to_string(),
            port: SWITCH_PORT,
            configfile: merchant.auth.configfile.clone(),
            keyfile: merchant.auth.keyfile.clone(),
            ordertype,
            chargetotal,
            result: FirstdataResultMode::from(merchant.mode),
            cardnumber,
            cardexpmonth,
            cardexpyear,
            name,
            cvmindicator,
            cvmvalue,
            authorization,
            authorization_id,
            address1: address.address1,
            company: address.company,
            phone: address.phone,
            zip: address.zip,
            city: address.city,
            country: address.country,
            state: address.state,
        }
    }
}

impl TryFrom<&Card> for FirstdataCard {
    type Error = Error;

    fn try_from(card: &Card) -> Result<Self, Self::Error> {
        if card.card_number.peek().trim().is_empty() {
            return Err(missing_field_err("card_number")());
        }
        Ok(Self {
            cardnumber: card.card_number.clone(),
            cardexpmonth: card.get_card_expiry_month_2_digit()?,
            cardexpyear: card.get_card_expiry_year_2_digit()?,
            name: card.get_card_holder_full_name(),
            cvmvalue: card.card_cvc.clone(),
        })
    }
}

impl FirstdataAddress {
    fn not_applicable() -> Self {
        Self {
            address1: None,
            company: None,
            phone: None,
            zip: None,
            city: None,
            country: None,
            state: Secret::new(STATE_NOT_APPLICABLE.to_string()),
        }
    }
}

impl From<&Address> for FirstdataAddress {
    fn from(address: &Address) -> Self {
        let details = address.address.as_ref();
        Self {
            address1: details.and_then(|d| d.line1.clone()),
            company: details.and_then(|d| d.company.clone()),
            phone: address.phone.clone(),
            zip: details.and_then(|d| d.zip.clone()),
            city: details.and_then(|d| d.city.clone()),
            country: details.and_then(|d| d.country.clone()),
            state: details
                .and_then(|d| d.state.clone())
                .unwrap_or_else(|| Secret::new(STATE_NOT_APPLICABLE.to_string())),
        }
    }
}

/// Extension point for customer details (email, ip). This integration sends none.
fn add_customer_data(_request: &mut FirstdataTransactionRequest, _options: &PaymentOptions) {}

/// Extension point for invoice details. This integration sends none.
fn add_invoice(_request: &mut FirstdataTransactionRequest, _options: &PaymentOptions) {}

fn require_reference(id: &str) -> Result<String, Error> {
    let id = id.trim();
    if id.is_empty() {
        return Err(errors::ConnectorError::MissingConnectorTransactionID.into());
    }
    Ok(id.to_string())
}

impl TryFrom<FirstdataRouterData<'_, PaymentsAuthorizeData>> for FirstdataTransactionRequest {
    type Error = Error;

    fn try_from(item: FirstdataRouterData<'_, PaymentsAuthorizeData>) -> Result<Self, Self::Error> {
        let data = item.router_data;
        let ordertype = match data.capture_method {
            CaptureMethod::Manual => FirstdataOrderType::Preauth,
            CaptureMethod::Automatic => FirstdataOrderType::Sale,
        };
        let amount = item.amount.ok_or_else(missing_field_err("amount"))?;
        let card = FirstdataCard::try_from(&data.payment_method_data)?;
        let address = FirstdataAddress::from(data.options.address.get_billing_or_address()?);

        let mut request = Self::new(
            item.merchant,
            ordertype,
            Some(amount),
            Some(card),
            Some(address),
            None,
        );
        add_invoice(&mut request, &data.options);
        add_customer_data(&mut request, &data.options);
        Ok(request)
    }
}

impl TryFrom<FirstdataRouterData<'_, PaymentsCaptureData>> for FirstdataTransactionRequest {
    type Error = Error;

    fn try_from(item: FirstdataRouterData<'_, PaymentsCaptureData>) -> Result<Self, Self::Error> {
        let data = item.router_data;
        let amount = item.amount.ok_or_else(missing_field_err("amount"))?;
        let reference =
            FirstdataReference::AuthorizationId(require_reference(&data.connector_transaction_id)?);

        let mut request = Self::new(
            item.merchant,
            FirstdataOrderType::Postauth,
            Some(amount),
            None,
            None,
            Some(reference),
        );
        add_customer_data(&mut request, &data.options);
        Ok(request)
    }
}

impl TryFrom<FirstdataRouterData<'_, PaymentVoidData>> for FirstdataTransactionRequest {
    type Error = Error;

    fn try_from(item: FirstdataRouterData<'_, PaymentVoidData>) -> Result<Self, Self::Error> {
        let reference = FirstdataReference::Authorization(require_reference(
            &item.router_data.connector_transaction_id,
        )?);

        // Voids never carry an amount, whatever the caller passed.
        Ok(Self::new(
            item.merchant,
            FirstdataOrderType::Void,
            None,
            None,
            None,
            Some(reference),
        ))
    }
}

impl TryFrom<FirstdataRouterData<'_, RefundsData>> for FirstdataTransactionRequest {
    type Error = Error;

    fn try_from(item: FirstdataRouterData<'_, RefundsData>) -> Result<Self, Self::Error> {
        let data = item.router_data;
        let amount = item.amount.ok_or_else(missing_field_err("amount"))?;
        let reference =
            FirstdataReference::Authorization(require_reference(&data.connector_transaction_id)?);

        let mut request = Self::new(
            item.merchant,
            FirstdataOrderType::Credit,
            Some(amount),
            None,
            None,
            Some(reference),
        );
        add_invoice(&mut request, &data.options);
        Ok(request)
    }
}

/// Verdict read off a switch reply.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FirstdataOutcome {
    pub success: bool,
    pub message: String,
    pub avs_result: Option<String>,
    /// The switch has no separate CVV field, this mirrors `r_avs`.
    pub cvv_result: Option<String>,
}

impl TryFrom<&FirstdataResponse> for FirstdataOutcome {
    type Error = Error;

    fn try_from(response: &FirstdataResponse) -> Result<Self, Self::Error> {
        let success = response.get_approved()? == APPROVED;
        let message = response.get_message()?.to_string();
        let avs_result = response.get_avs().map(str::to_string);

        Ok(Self {
            success,
            message,
            cvv_result: avs_result.clone(),
            avs_result,
        })
    }
}

impl TryFrom<ResponseRouterData<FirstdataResponse>> for TransactionResult {
    type Error = Error;

    fn try_from(item: ResponseRouterData<FirstdataResponse>) -> Result<Self, Self::Error> {
        let outcome = FirstdataOutcome::try_from(&item.response)?;
        let authorization = item.response.get_order_number().map(str::to_string);

        Ok(Self {
            success: outcome.success,
            message: outcome.message,
            params: item.response.into_fields(),
            authorization,
            fraud_review: None,
            metadata: TransactionMetadata {
                test: item.mode.is_test(),
                avs_result: outcome.avs_result,
                cvv_result: outcome.cvv_result,
            },
        })
    }
}
