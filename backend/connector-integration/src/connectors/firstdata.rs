pub mod constants;
pub mod requests;
pub mod responses;
#[cfg(test)]
mod test;
pub mod transformers;

use common_enums::{CaptureMethod, Currency, GatewayMode};
use common_utils::{
    request::{Method, RequestBuilder, RequestContent},
    types::{AmountConvertor, MinorUnit, StringMajorUnit, StringMajorUnitForConnector},
    CustomResult,
};
use domain_types::{
    connector_types::{
        ConnectorSpecifications, PaymentOptions, PaymentVoidData, PaymentsAuthorizeData,
        PaymentsCaptureData, RefundsData, TransactionResult,
    },
    errors,
    payment_method_data::Card,
    router_data::ConnectorAuthType,
    types::Connectors,
    utils::convert_amount,
};
use error_stack::{report, ResultExt};
use external_services::{ConnectorTransport, HttpTransport};
use hyperswitch_masking::Secret;
use interfaces::{api::ConnectorCommon, connector_types::PaymentGateway};
use requests::FirstdataTransactionRequest;
use responses::FirstdataResponse;
use transformers::{FirstdataAuthType, FirstdataMerchant, FirstdataRouterData};
use ucs_env::configs::Config;

use crate::{types::ResponseRouterData, utils};

pub(crate) mod headers {
    pub(crate) const CONTENT_TYPE: &str = "Content-Type";
}

/// Client for the FirstData (LinkPoint) switch.
///
/// Credentials, mode and endpoints are fixed at construction; every call builds, sends and
/// parses its own order and keeps nothing afterwards.
pub struct Firstdata {
    auth: FirstdataAuthType,
    connectors: Connectors,
    mode: GatewayMode,
    currency: Currency,
    amount_converter: &'static (dyn AmountConvertor<Output = StringMajorUnit> + Sync),
    transport: Box<dyn ConnectorTransport>,
}

impl std::fmt::Debug for Firstdata {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Firstdata")
            .field("auth", &self.auth)
            .field("connectors", &self.connectors)
            .field("mode", &self.mode)
            .field("currency", &self.currency)
            .finish_non_exhaustive()
    }
}

impl Firstdata {
    pub fn new(
        auth: &ConnectorAuthType,
        connectors: &Connectors,
        mode: GatewayMode,
        currency: Option<Currency>,
    ) -> CustomResult<Self, errors::ConnectorError> {
        Self::with_transport(auth, connectors, mode, currency, Box::new(HttpTransport))
    }

    /// Same as [`Firstdata::new`] but sends orders through `transport`.
    pub fn with_transport(
        auth: &ConnectorAuthType,
        connectors: &Connectors,
        mode: GatewayMode,
        currency: Option<Currency>,
        transport: Box<dyn ConnectorTransport>,
    ) -> CustomResult<Self, errors::ConnectorError> {
        let auth = FirstdataAuthType::try_from(auth)?;
        if connectors.firstdata.get_base_url(mode).trim().is_empty() {
            return Err(report!(errors::ConnectorError::InvalidConnectorConfig {
                config: "connectors.firstdata.base_url",
            }));
        }

        Ok(Self {
            auth,
            connectors: connectors.clone(),
            mode,
            currency: currency.unwrap_or_default(),
            amount_converter: &StringMajorUnitForConnector,
            transport,
        })
    }

    /// Builds the adapter from loaded settings: endpoints from `[connectors.firstdata]` and the
    /// mode from `[firstdata]`.
    pub fn from_config(
        config: &Config,
        auth: &ConnectorAuthType,
        currency: Option<Currency>,
    ) -> CustomResult<Self, errors::ConnectorError> {
        Self::from_config_with_transport(config, auth, currency, Box::new(HttpTransport))
    }

    pub fn from_config_with_transport(
        config: &Config,
        auth: &ConnectorAuthType,
        currency: Option<Currency>,
        transport: Box<dyn ConnectorTransport>,
    ) -> CustomResult<Self, errors::ConnectorError> {
        Self::with_transport(
            auth,
            &config.connectors,
            config.firstdata.mode,
            currency,
            transport,
        )
    }

    pub fn mode(&self) -> GatewayMode {
        self.mode
    }

    fn merchant(&self) -> FirstdataMerchant<'_> {
        FirstdataMerchant {
            auth: &self.auth,
            host: self.base_url(&self.connectors, self.mode),
            mode: self.mode,
        }
    }

    fn amount(&self, amount: MinorUnit) -> CustomResult<StringMajorUnit, errors::ConnectorError> {
        convert_amount(self.amount_converter, amount, self.currency)
    }

    async fn sale_or_preauth(
        &self,
        amount: MinorUnit,
        card: &Card,
        options: &PaymentOptions,
        capture_method: CaptureMethod,
    ) -> CustomResult<TransactionResult, errors::ConnectorError> {
        let data = PaymentsAuthorizeData {
            minor_amount: amount,
            currency: self.currency,
            payment_method_data: card.clone(),
            capture_method,
            options: options.clone(),
        };
        let request = FirstdataTransactionRequest::try_from(FirstdataRouterData {
            amount: Some(self.amount(data.minor_amount)?),
            merchant: self.merchant(),
            router_data: &data,
        })?;
        self.commit(request).await
    }

    #[tracing::instrument(
        name = "firstdata_commit",
        skip_all,
        fields(connector = self.id(), order_type = %request.ordertype, mode = %self.mode)
    )]
    async fn commit(
        &self,
        request: FirstdataTransactionRequest,
    ) -> CustomResult<TransactionResult, errors::ConnectorError> {
        tracing::info!(request=?request, "request of connector");

        let body = utils::serialize_to_xml_string_with_root(constants::REQUEST_ROOT, &request)?;
        let connector_request = RequestBuilder::new()
            .method(Method::Post)
            .url(self.base_url(&self.connectors, self.mode))
            .attach_default_headers()
            .header(headers::CONTENT_TYPE, self.common_get_content_type())
            .add_client_identity_file(Some(self.auth.keyfile.clone()))
            .set_body(RequestContent::Xml(Secret::new(body)))
            .build();

        let response = self
            .transport
            .send(connector_request)
            .await
            .change_context(errors::ConnectorError::ProcessingStepFailed(None))
            .attach_printable("Failed to reach the switch")?;

        let response = match response {
            Ok(response) => response,
            Err(error_response) => {
                tracing::error!(
                    status_code = error_response.status_code,
                    "switch answered with an error status"
                );
                return Err(report!(errors::ConnectorError::UnexpectedResponseError(
                    error_response.response
                )));
            }
        };

        let response = FirstdataResponse::parse(&response.response)?;
        let result = TransactionResult::try_from(ResponseRouterData {
            response,
            mode: self.mode,
        })?;

        tracing::info!(
            success = result.success,
            authorization = ?result.authorization,
            avs_result = ?result.metadata.avs_result,
            "response of connector"
        );
        Ok(result)
    }
}

impl ConnectorCommon for Firstdata {
    fn id(&self) -> &'static str {
        constants::CONNECTOR_ID
    }

    fn common_get_content_type(&self) -> &'static str {
        "text/xml"
    }

    fn base_url<'a>(&self, connectors: &'a Connectors, mode: GatewayMode) -> &'a str {
        connectors.firstdata.get_base_url(mode)
    }

    fn get_connector_specifications(&self) -> ConnectorSpecifications {
        ConnectorSpecifications {
            display_name: constants::DISPLAY_NAME,
            homepage_url: constants::HOMEPAGE_URL,
            supported_countries: constants::SUPPORTED_COUNTRIES,
            supported_card_networks: constants::SUPPORTED_CARD_NETWORKS,
        }
    }
}

#[async_trait::async_trait]
impl PaymentGateway for Firstdata {
    async fn authorize(
        &self,
        amount: MinorUnit,
        card: &Card,
        options: &PaymentOptions,
    ) -> CustomResult<TransactionResult, errors::ConnectorError> {
        self.sale_or_preauth(amount, card, options, CaptureMethod::Manual)
            .await
    }

    async fn purchase(
        &self,
        amount: MinorUnit,
        card: &Card,
        options: &PaymentOptions,
    ) -> CustomResult<TransactionResult, errors::ConnectorError> {
        self.sale_or_preauth(amount, card, options, CaptureMethod::Automatic)
            .await
    }

    async fn capture(
        &self,
        amount: MinorUnit,
        authorization: &str,
        options: &PaymentOptions,
    ) -> CustomResult<TransactionResult, errors::ConnectorError> {
        let data = PaymentsCaptureData {
            minor_amount_to_capture: amount,
            currency: self.currency,
            connector_transaction_id: authorization.to_string(),
            options: options.clone(),
        };
        let request = FirstdataTransactionRequest::try_from(FirstdataRouterData {
            amount: Some(self.amount(data.minor_amount_to_capture)?),
            merchant: self.merchant(),
            router_data: &data,
        })?;
        self.commit(request).await
    }

    async fn void(
        &self,
        authorization: &str,
        options: &PaymentOptions,
    ) -> CustomResult<TransactionResult, errors::ConnectorError> {
        let data = PaymentVoidData {
            connector_transaction_id: authorization.to_string(),
            options: options.clone(),
        };
        let request = FirstdataTransactionRequest::try_from(FirstdataRouterData {
            amount: None,
            merchant: self.merchant(),
            router_data: &data,
        })?;
        self.commit(request).await
    }

    async fn credit(
        &self,
        amount: MinorUnit,
        identification: &str,
        options: &PaymentOptions,
    ) -> CustomResult<TransactionResult, errors::ConnectorError> {
        let data = RefundsData {
            minor_refund_amount: amount,
            currency: self.currency,
            connector_transaction_id: identification.to_string(),
            options: options.clone(),
        };
        let request = FirstdataTransactionRequest::try_from(FirstdataRouterData {
            amount: Some(self.amount(data.minor_refund_amount)?),
            merchant: self.merchant(),
            router_data: &data,
        })?;
        self.commit(request).await
    }
}
