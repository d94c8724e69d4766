#[cfg(test)]
#[allow(clippy::unwrap_used)]
#[allow(clippy::expect_used)]
#[allow(clippy::panic)]
mod tests {
    use common_enums::{CaptureMethod, Currency, GatewayMode};
    use common_utils::types::{
        AmountConvertor, MinorUnit, StringMajorUnit, StringMajorUnitForConnector,
    };
    use domain_types::{
        connector_types::{
            PaymentOptions, PaymentVoidData, PaymentsAuthorizeData, PaymentsCaptureData,
            RefundsData,
        },
        errors::ConnectorError,
        payment_address::{Address, AddressDetails, PaymentAddress},
        payment_method_data::Card,
        router_data::ConnectorAuthType,
    };
    use hyperswitch_masking::{PeekInterface, Secret};

    use crate::connectors::firstdata::{
        constants::REQUEST_ROOT,
        requests::{FirstdataOrderType, FirstdataResultMode, FirstdataTransactionRequest},
        responses::FirstdataResponse,
        transformers::{FirstdataAuthType, FirstdataMerchant, FirstdataOutcome, FirstdataRouterData},
    };
    use crate::utils::serialize_to_xml_string_with_root;

    const HOST: &str = "https://secure.linkpt.net:1129/";

    fn auth() -> FirstdataAuthType {
        FirstdataAuthType {
            configfile: Secret::new("1909922345".to_string()),
            keyfile: Secret::new("/etc/firstdata/1909922345.pem".to_string()),
        }
    }

    fn merchant(auth: &FirstdataAuthType, mode: GatewayMode) -> FirstdataMerchant<'_> {
        FirstdataMerchant {
            auth,
            host: HOST,
            mode,
        }
    }

    fn usd(amount: i64) -> StringMajorUnit {
        StringMajorUnitForConnector
            .convert(MinorUnit::new(amount), Currency::USD)
            .unwrap()
    }

    fn card(year: &str) -> Card {
        Card {
            card_number: Secret::new("4111111111111111".to_string()),
            card_exp_month: Secret::new("3".to_string()),
            card_exp_year: Secret::new(year.to_string()),
            card_cvc: Secret::new("123".to_string()),
            card_holder_first_name: Some(Secret::new("Longbob".to_string())),
            card_holder_last_name: Some(Secret::new("Longsen".to_string())),
            card_network: None,
        }
    }

    fn address(line1: &str, state: Option<&str>) -> Address {
        Address {
            address: Some(AddressDetails {
                line1: Some(Secret::new(line1.to_string())),
                company: Some(Secret::new("Widgets Inc".to_string())),
                city: Some("Ottawa".to_string()),
                zip: Some(Secret::new("K1C2N6".to_string())),
                country: Some("CA".to_string()),
                state: state.map(|s| Secret::new(s.to_string())),
                ..Default::default()
            }),
            phone: Some(Secret::new("(555)555-5555".to_string())),
        }
    }

    fn options(billing: Option<Address>, generic: Option<Address>) -> PaymentOptions {
        PaymentOptions {
            order_id: Some("1".to_string()),
            description: Some("Store Purchase".to_string()),
            address: PaymentAddress::new(billing, generic),
            ..Default::default()
        }
    }

    fn authorize_data(
        capture_method: CaptureMethod,
        options: PaymentOptions,
    ) -> PaymentsAuthorizeData {
        PaymentsAuthorizeData {
            minor_amount: MinorUnit::new(100),
            currency: Currency::USD,
            payment_method_data: card("2015"),
            capture_method,
            options,
        }
    }

    fn build_authorize(
        data: &PaymentsAuthorizeData,
        mode: GatewayMode,
    ) -> Result<FirstdataTransactionRequest, error_stack::Report<ConnectorError>> {
        let auth = auth();
        FirstdataTransactionRequest::try_from(FirstdataRouterData {
            amount: Some(usd(100)),
            merchant: merchant(&auth, mode),
            router_data: data,
        })
    }

    fn to_xml(request: &FirstdataTransactionRequest) -> String {
        serialize_to_xml_string_with_root(REQUEST_ROOT, request).unwrap()
    }

    #[test]
    fn test_auth_type_from_body_key() {
        let auth = FirstdataAuthType::try_from(&ConnectorAuthType::BodyKey {
            api_key: Secret::new("1909922345".to_string()),
            key1: Secret::new("/etc/firstdata/store.pem".to_string()),
        })
        .unwrap();
        assert_eq!(auth.configfile.peek(), "1909922345");
        assert_eq!(auth.keyfile.peek(), "/etc/firstdata/store.pem");
    }

    #[test]
    fn test_auth_type_requires_both_identifiers() {
        let missing_config = FirstdataAuthType::try_from(&ConnectorAuthType::BodyKey {
            api_key: Secret::new(String::new()),
            key1: Secret::new("/etc/firstdata/store.pem".to_string()),
        })
        .unwrap_err();
        assert_eq!(
            missing_config.current_context(),
            &ConnectorError::InvalidConnectorConfig {
                config: "configfile"
            }
        );

        let missing_key = FirstdataAuthType::try_from(&ConnectorAuthType::BodyKey {
            api_key: Secret::new("1909922345".to_string()),
            key1: Secret::new("  ".to_string()),
        })
        .unwrap_err();
        assert_eq!(
            missing_key.current_context(),
            &ConnectorError::InvalidConnectorConfig { config: "keyfile" }
        );

        let wrong_kind = FirstdataAuthType::try_from(&ConnectorAuthType::HeaderKey {
            api_key: Secret::new("1909922345".to_string()),
        })
        .unwrap_err();
        assert_eq!(
            wrong_kind.current_context(),
            &ConnectorError::FailedToObtainAuthType
        );
    }

    #[test]
    fn test_purchase_request_fields() {
        let data = authorize_data(
            CaptureMethod::Automatic,
            options(Some(address("1234 My Street", Some("ON"))), None),
        );
        let request = build_authorize(&data, GatewayMode::Test).unwrap();

        assert_eq!(request.host, HOST);
        assert_eq!(request.port, 1129);
        assert_eq!(request.ordertype, FirstdataOrderType::Sale);
        assert_eq!(request.result, FirstdataResultMode::Good);
        assert_eq!(
            request.chargetotal.as_ref().map(|a| a.get_amount_as_string()),
            Some("1.00".to_string())
        );
        assert_eq!(request.cardexpmonth.as_ref().map(|m| m.peek().as_str()), Some("03"));
        assert_eq!(request.cardexpyear.as_ref().map(|y| y.peek().as_str()), Some("15"));
        assert_eq!(
            request.name.as_ref().map(|n| n.peek().as_str()),
            Some("Longbob Longsen")
        );
        assert_eq!(request.cvmindicator, Some("provided"));
        assert_eq!(request.cvmvalue.as_ref().map(|c| c.peek().as_str()), Some("123"));
        assert_eq!(request.state.peek(), "ON");
        assert_eq!(request.city.as_deref(), Some("Ottawa"));
        assert!(request.authorization.is_none());
        assert!(request.authorization_id.is_none());
    }

    #[test]
    fn test_authorize_is_preauth() {
        let data = authorize_data(
            CaptureMethod::Manual,
            options(None, Some(address("1 Main St", None))),
        );
        let request = build_authorize(&data, GatewayMode::Test).unwrap();
        assert_eq!(request.ordertype, FirstdataOrderType::Preauth);
    }

    #[test]
    fn test_missing_state_defaults_to_not_applicable() {
        let data = authorize_data(
            CaptureMethod::Automatic,
            options(None, Some(address("1 Main St", None))),
        );
        let request = build_authorize(&data, GatewayMode::Test).unwrap();
        assert_eq!(request.state.peek(), "n/a");

        let xml = to_xml(&request);
        assert!(xml.contains("<state>n/a</state>"), "{xml}");
    }

    #[test]
    fn test_billing_address_wins_over_generic_address() {
        let data = authorize_data(
            CaptureMethod::Automatic,
            options(
                Some(address("Billing Street", None)),
                Some(address("Generic Street", Some("CA"))),
            ),
        );
        let request = build_authorize(&data, GatewayMode::Test).unwrap();
        assert_eq!(
            request.address1.as_ref().map(|a| a.peek().as_str()),
            Some("Billing Street")
        );
        assert_eq!(request.state.peek(), "n/a");
    }

    #[test]
    fn test_purchase_without_any_address_fails() {
        let data = authorize_data(CaptureMethod::Automatic, options(None, None));
        let err = build_authorize(&data, GatewayMode::Test).unwrap_err();
        assert_eq!(
            err.current_context(),
            &ConnectorError::MissingRequiredField {
                field_name: "billing_address"
            }
        );
    }

    #[test]
    fn test_purchase_without_card_number_fails() {
        let mut data = authorize_data(
            CaptureMethod::Automatic,
            options(Some(address("1 Main St", None)), None),
        );
        data.payment_method_data.card_number = Secret::new(String::new());
        let err = build_authorize(&data, GatewayMode::Test).unwrap_err();
        assert_eq!(
            err.current_context(),
            &ConnectorError::MissingRequiredField {
                field_name: "card_number"
            }
        );
    }

    #[test]
    fn test_unparseable_expiry_is_rejected() {
        let mut data = authorize_data(
            CaptureMethod::Automatic,
            options(Some(address("1 Main St", None)), None),
        );
        data.payment_method_data.card_exp_year = Secret::new("20x5".to_string());
        let err = build_authorize(&data, GatewayMode::Test).unwrap_err();
        assert_eq!(
            err.current_context(),
            &ConnectorError::InvalidDataFormat {
                field_name: "card_exp_year"
            }
        );
    }

    #[test]
    fn test_live_mode_marker() {
        let data = authorize_data(
            CaptureMethod::Automatic,
            options(Some(address("1 Main St", None)), None),
        );
        let request = build_authorize(&data, GatewayMode::Live).unwrap();
        assert_eq!(request.result, FirstdataResultMode::Live);
        assert!(to_xml(&request).contains("<result>LIVE</result>"));
    }

    #[test]
    fn test_purchase_xml_is_flat_under_order() {
        let data = authorize_data(
            CaptureMethod::Automatic,
            options(Some(address("1234 My Street", Some("ON"))), None),
        );
        let xml = to_xml(&build_authorize(&data, GatewayMode::Test).unwrap());

        assert!(xml.starts_with("<?xml version=\"1.0\" encoding=\"UTF-8\"?><order>"), "{xml}");
        assert!(xml.ends_with("</order>"), "{xml}");
        for fragment in [
            "<host>https://secure.linkpt.net:1129/</host>",
            "<port>1129</port>",
            "<configfile>1909922345</configfile>",
            "<keyfile>/etc/firstdata/1909922345.pem</keyfile>",
            "<ordertype>SALE</ordertype>",
            "<chargetotal>1.00</chargetotal>",
            "<result>GOOD</result>",
            "<cardnumber>4111111111111111</cardnumber>",
            "<cardexpmonth>03</cardexpmonth>",
            "<cardexpyear>15</cardexpyear>",
            "<name>Longbob Longsen</name>",
            "<cvmindicator>provided</cvmindicator>",
            "<cvmvalue>123</cvmvalue>",
            "<address1>1234 My Street</address1>",
            "<company>Widgets Inc</company>",
            "<zip>K1C2N6</zip>",
            "<state>ON</state>",
        ] {
            assert!(xml.contains(fragment), "missing {fragment} in {xml}");
        }
    }

    #[test]
    fn test_void_request_has_no_amount() {
        let auth = auth();
        let data = PaymentVoidData {
            connector_transaction_id: "1234567890-A".to_string(),
            options: PaymentOptions::default(),
        };
        let request = FirstdataTransactionRequest::try_from(FirstdataRouterData {
            amount: Some(usd(100)),
            merchant: merchant(&auth, GatewayMode::Test),
            router_data: &data,
        })
        .unwrap();

        assert_eq!(request.ordertype, FirstdataOrderType::Void);
        assert!(request.chargetotal.is_none());
        assert_eq!(request.authorization.as_deref(), Some("1234567890-A"));
        assert_eq!(request.state.peek(), "n/a");

        let xml = to_xml(&request);
        assert!(!xml.contains("chargetotal"), "{xml}");
        assert!(!xml.contains("cardnumber"), "{xml}");
        assert!(xml.contains("<ordertype>VOID</ordertype>"), "{xml}");
        assert!(xml.contains("<authorization>1234567890-A</authorization>"), "{xml}");
    }

    #[test]
    fn test_capture_references_authorization_id() {
        let auth = auth();
        let data = PaymentsCaptureData {
            minor_amount_to_capture: MinorUnit::new(100),
            currency: Currency::USD,
            connector_transaction_id: "A-100".to_string(),
            options: PaymentOptions::default(),
        };
        let request = FirstdataTransactionRequest::try_from(FirstdataRouterData {
            amount: Some(usd(100)),
            merchant: merchant(&auth, GatewayMode::Test),
            router_data: &data,
        })
        .unwrap();

        assert_eq!(request.ordertype, FirstdataOrderType::Postauth);
        assert_eq!(request.authorization_id.as_deref(), Some("A-100"));
        assert!(request.authorization.is_none());
        assert!(request.cardnumber.is_none());
        assert!(to_xml(&request).contains("<chargetotal>1.00</chargetotal>"));
    }

    #[test]
    fn test_capture_without_authorization_fails() {
        let auth = auth();
        let data = PaymentsCaptureData {
            minor_amount_to_capture: MinorUnit::new(100),
            currency: Currency::USD,
            connector_transaction_id: " ".to_string(),
            options: PaymentOptions::default(),
        };
        let err = FirstdataTransactionRequest::try_from(FirstdataRouterData {
            amount: Some(usd(100)),
            merchant: merchant(&auth, GatewayMode::Test),
            router_data: &data,
        })
        .unwrap_err();
        assert_eq!(
            err.current_context(),
            &ConnectorError::MissingConnectorTransactionID
        );
    }

    #[test]
    fn test_credit_uses_lowercase_action_code() {
        let auth = auth();
        let data = RefundsData {
            minor_refund_amount: MinorUnit::new(50),
            currency: Currency::USD,
            connector_transaction_id: "A-100".to_string(),
            options: PaymentOptions::default(),
        };
        let request = FirstdataTransactionRequest::try_from(FirstdataRouterData {
            amount: Some(usd(50)),
            merchant: merchant(&auth, GatewayMode::Test),
            router_data: &data,
        })
        .unwrap();

        assert_eq!(request.ordertype, FirstdataOrderType::Credit);
        assert_eq!(request.authorization.as_deref(), Some("A-100"));
        let xml = to_xml(&request);
        assert!(xml.contains("<ordertype>credit</ordertype>"), "{xml}");
        assert!(xml.contains("<chargetotal>0.50</chargetotal>"), "{xml}");
    }

    #[test]
    fn test_request_debug_masks_card_data() {
        let data = authorize_data(
            CaptureMethod::Automatic,
            options(Some(address("1 Main St", None)), None),
        );
        let debug = format!("{:?}", build_authorize(&data, GatewayMode::Test).unwrap());
        assert!(!debug.contains("4111111111111111"), "{debug}");
        assert!(!debug.contains("1909922345"), "{debug}");
    }

    fn response(fields: &[(&str, &str)]) -> FirstdataResponse {
        fields
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect::<std::collections::HashMap<_, _>>()
            .into()
    }

    #[test]
    fn test_only_exact_approved_is_success() {
        for (approved, expected) in [
            ("APPROVED", true),
            ("DECLINED", false),
            ("approved", false),
            ("Approved", false),
            ("APPROVED ", false),
            ("NOT APPROVED", false),
            ("", false),
        ] {
            let outcome = FirstdataOutcome::try_from(&response(&[
                ("r_approved", approved),
                ("r_message", "msg"),
            ]))
            .unwrap();
            assert_eq!(outcome.success, expected, "r_approved = {approved:?}");
        }
    }

    #[test]
    fn test_cvv_result_mirrors_avs_result() {
        let outcome = FirstdataOutcome::try_from(&response(&[
            ("r_approved", "APPROVED"),
            ("r_message", "ok"),
            ("r_avs", "YYYM"),
        ]))
        .unwrap();
        assert_eq!(outcome.avs_result.as_deref(), Some("YYYM"));
        assert_eq!(outcome.cvv_result, outcome.avs_result);

        let without_avs = FirstdataOutcome::try_from(&response(&[
            ("r_approved", "DECLINED"),
            ("r_message", "no"),
        ]))
        .unwrap();
        assert_eq!(without_avs.avs_result, None);
        assert_eq!(without_avs.cvv_result, None);
    }

    #[test]
    fn test_mandatory_outcome_fields() {
        let no_approved =
            FirstdataOutcome::try_from(&response(&[("r_message", "msg")])).unwrap_err();
        assert_eq!(
            no_approved.current_context(),
            &ConnectorError::MissingResponseField {
                field_name: "r_approved"
            }
        );

        let no_message =
            FirstdataOutcome::try_from(&response(&[("r_approved", "APPROVED")])).unwrap_err();
        assert_eq!(
            no_message.current_context(),
            &ConnectorError::MissingResponseField {
                field_name: "r_message"
            }
        );
    }

    #[test]
    fn test_message_markup_is_stripped() {
        let parsed = FirstdataResponse::parse(
            concat!(
                "<r_approved>DECLINED</r_approved>",
                "<r_message><b>SGS-005005</b>: Duplicate transaction.</r_message>",
            )
            .as_bytes(),
        )
        .unwrap();
        let outcome = FirstdataOutcome::try_from(&parsed).unwrap();
        assert!(!outcome.success);
        assert_eq!(outcome.message, "SGS-005005: Duplicate transaction.");
    }

    #[test]
    fn test_malformed_reply_is_rejected() {
        let err = FirstdataResponse::parse(b"<r_approved>APPROVED</r_approved><r_message>")
            .unwrap_err();
        assert_eq!(
            err.current_context(),
            &ConnectorError::ResponseDeserializationFailed
        );
    }
}
