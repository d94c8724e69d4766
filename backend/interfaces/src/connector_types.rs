use common_utils::{types::MinorUnit, CustomResult};
use domain_types::{
    connector_types::{PaymentOptions, TransactionResult},
    errors::ConnectorError,
    payment_method_data::Card,
};

use crate::api::ConnectorCommon;

/// The uniform transaction API every card gateway exposes to the billing layer.
///
/// Amounts are in the minor unit of the adapter's currency, so `MinorUnit::new(100)` is 1.00 USD.
#[async_trait::async_trait]
pub trait PaymentGateway: ConnectorCommon + Send + Sync {
    /// Places a hold on the card without settling it.
    async fn authorize(
        &self,
        amount: MinorUnit,
        card: &Card,
        options: &PaymentOptions,
    ) -> CustomResult<TransactionResult, ConnectorError>;

    /// Authorizes and settles in one step.
    async fn purchase(
        &self,
        amount: MinorUnit,
        card: &Card,
        options: &PaymentOptions,
    ) -> CustomResult<TransactionResult, ConnectorError>;

    /// Settles a hold placed by [`PaymentGateway::authorize`].
    async fn capture(
        &self,
        amount: MinorUnit,
        authorization: &str,
        options: &PaymentOptions,
    ) -> CustomResult<TransactionResult, ConnectorError>;

    async fn void(
        &self,
        authorization: &str,
        options: &PaymentOptions,
    ) -> CustomResult<TransactionResult, ConnectorError>;

    /// Refunds part or all of a settled transaction.
    async fn credit(
        &self,
        amount: MinorUnit,
        identification: &str,
        options: &PaymentOptions,
    ) -> CustomResult<TransactionResult, ConnectorError>;
}
