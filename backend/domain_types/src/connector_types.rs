use std::collections::HashMap;

use common_enums::{CardNetwork, Currency};
use common_utils::types::MinorUnit;
use serde::{Deserialize, Serialize};

use crate::{payment_address::PaymentAddress, payment_method_data::Card};

/// Caller supplied details that travel alongside every flow.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PaymentOptions {
    pub order_id: Option<String>,
    pub description: Option<String>,
    pub email: Option<hyperswitch_masking::Secret<String>>,
    pub ip_address: Option<String>,
    pub invoice: Option<String>,
    pub address: PaymentAddress,
}

#[derive(Debug, Clone)]
pub struct PaymentsAuthorizeData {
    pub minor_amount: MinorUnit,
    pub currency: Currency,
    pub payment_method_data: Card,
    pub capture_method: common_enums::CaptureMethod,
    pub options: PaymentOptions,
}

#[derive(Debug, Clone)]
pub struct PaymentsCaptureData {
    pub minor_amount_to_capture: MinorUnit,
    pub currency: Currency,
    /// Authorization returned by a prior authorize call
    pub connector_transaction_id: String,
    pub options: PaymentOptions,
}

#[derive(Debug, Clone)]
pub struct PaymentVoidData {
    pub connector_transaction_id: String,
    pub options: PaymentOptions,
}

#[derive(Debug, Clone)]
pub struct RefundsData {
    pub minor_refund_amount: MinorUnit,
    pub currency: Currency,
    /// Reference of the transaction being refunded
    pub connector_transaction_id: String,
    pub options: PaymentOptions,
}

/// Normalized outcome of a single connector call.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TransactionResult {
    pub success: bool,
    pub message: String,
    /// Every field the connector returned, untouched
    pub params: HashMap<String, String>,
    pub authorization: Option<String>,
    pub fraud_review: Option<bool>,
    pub metadata: TransactionMetadata,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TransactionMetadata {
    pub test: bool,
    pub avs_result: Option<String>,
    pub cvv_result: Option<String>,
}

/// Static description of what a connector accepts.
#[derive(Debug, Clone, Copy)]
pub struct ConnectorSpecifications {
    pub display_name: &'static str,
    pub homepage_url: &'static str,
    pub supported_countries: &'static [&'static str],
    pub supported_card_networks: &'static [CardNetwork],
}
