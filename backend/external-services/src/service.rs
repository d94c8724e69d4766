use std::{str::FromStr, time::Instant};

use common_utils::{
    request::{Headers, Method, Request},
    CustomResult,
};
use domain_types::{errors::ApiClientError, router_response_types::Response};
use error_stack::{report, ResultExt};
use hyperswitch_masking::{PeekInterface, Secret};
use reqwest::Client;
use serde_json::{json, Value};
use tracing::field::Empty;

/// Sends a fully built request to a connector and hands back the raw reply.
///
/// `Ok(Ok(_))` is a 2xx reply, `Ok(Err(_))` a 4xx/5xx reply carrying the connector's body.
#[async_trait::async_trait]
pub trait ConnectorTransport: Send + Sync {
    async fn send(
        &self,
        request: Request,
    ) -> CustomResult<Result<Response, Response>, ApiClientError>;
}

/// Transport over HTTPS. A client is built per call and dropped with the response.
#[derive(Debug, Default, Clone, Copy)]
pub struct HttpTransport;

#[async_trait::async_trait]
impl ConnectorTransport for HttpTransport {
    async fn send(
        &self,
        request: Request,
    ) -> CustomResult<Result<Response, Response>, ApiClientError> {
        call_connector_api(request).await
    }
}

#[tracing::instrument(
    name = "outgoing_connector_request",
    skip_all,
    fields(
        request.url = %request.url,
        request.method = %request.method,
        status_code = Empty,
        latency = Empty,
    )
)]
pub async fn call_connector_api(
    request: Request,
) -> CustomResult<Result<Response, Response>, ApiClientError> {
    let start = Instant::now();
    let url =
        reqwest::Url::parse(&request.url).change_context(ApiClientError::UrlEncodingFailed)?;

    let client = create_client(request.client_identity_file.as_ref())?;

    let headers = request.headers.construct_header_map()?;

    let request = match request.method {
        Method::Post => {
            let has_content_type = headers.contains_key(reqwest::header::CONTENT_TYPE);
            let client = client.post(url).add_headers(headers);
            match request.body {
                Some(body) if has_content_type => client.body(body.get_body_bytes()),
                Some(body) => client
                    .header(reqwest::header::CONTENT_TYPE, body.content_type())
                    .body(body.get_body_bytes()),
                None => client,
            }
        }
    };

    let response = request.send().await.map_err(|error| {
        let api_error = match error {
            error if error.is_timeout() => ApiClientError::RequestTimeoutReceived,
            error => ApiClientError::RequestNotSent(error.to_string()),
        };
        error_log(
            "REQUEST_FAILURE",
            &json!(format!("Unable to send request to connector. Error: {api_error}")),
        );
        report!(api_error)
    });

    let result = handle_response(response).await;

    let elapsed = start.elapsed().as_secs_f64();
    tracing::Span::current().record("latency", elapsed);
    tracing::info!(log_type = "api", "Outgoing Request completed");
    result
}

pub fn create_client(
    client_identity_file: Option<&Secret<String>>,
) -> CustomResult<Client, ApiClientError> {
    let client_builder = get_client_builder();
    match client_identity_file {
        Some(identity_file) => {
            let identity = create_identity_from_pem_file(identity_file)?;
            client_builder
                .identity(identity)
                .use_rustls_tls()
                .build()
                .change_context(ApiClientError::ClientConstructionFailed)
                .inspect_err(|err| {
                    error_log(
                        "ERROR",
                        &json!(format!(
                            "Failed to construct client with client identity. Error: {:?}",
                            err
                        )),
                    );
                })
        }
        None => client_builder
            .build()
            .change_context(ApiClientError::ClientConstructionFailed)
            .inspect_err(|err| {
                error_log(
                    "ERROR",
                    &json!(format!("Failed to construct base client. Error: {:?}", err)),
                );
            }),
    }
}

fn get_client_builder() -> reqwest::ClientBuilder {
    Client::builder().redirect(reqwest::redirect::Policy::none())
}

/// Loads a PEM file holding both the client certificate and its private key.
pub fn create_identity_from_pem_file(
    identity_file: &Secret<String>,
) -> Result<reqwest::Identity, error_stack::Report<ApiClientError>> {
    let key_chain = std::fs::read(identity_file.peek())
        .change_context(ApiClientError::CertificateDecodeFailed)
        .attach_printable("Unable to read the client identity file")?;

    reqwest::Identity::from_pem(&key_chain).change_context(ApiClientError::CertificateDecodeFailed)
}

async fn handle_response(
    response: CustomResult<reqwest::Response, ApiClientError>,
) -> CustomResult<Result<Response, Response>, ApiClientError> {
    let resp = response?;
    let status_code = resp.status().as_u16();
    let headers = Some(resp.headers().to_owned());
    tracing::Span::current().record("status_code", status_code);

    match status_code {
        200..=202 | 204 => {
            let response = resp
                .bytes()
                .await
                .change_context(ApiClientError::ResponseDecodingFailed)?;
            Ok(Ok(Response {
                headers,
                response,
                status_code,
            }))
        }
        400..=599 => {
            let bytes = resp.bytes().await.map_err(|error| {
                report!(error).change_context(ApiClientError::ResponseDecodingFailed)
            })?;

            Ok(Err(Response {
                headers,
                response: bytes,
                status_code,
            }))
        }
        _ => {
            info_log(
                "UNEXPECTED_RESPONSE",
                &json!("Unexpected response from server."),
            );
            Err(report!(ApiClientError::UnexpectedServerResponse))
        }
    }
}

pub(super) trait HeaderExt {
    fn construct_header_map(self) -> CustomResult<reqwest::header::HeaderMap, ApiClientError>;
}

impl HeaderExt for Headers {
    fn construct_header_map(self) -> CustomResult<reqwest::header::HeaderMap, ApiClientError> {
        use reqwest::header::{HeaderMap, HeaderName, HeaderValue};

        self.into_iter().try_fold(
            HeaderMap::new(),
            |mut header_map, (header_name, header_value)| {
                let header_name = HeaderName::from_str(&header_name)
                    .change_context(ApiClientError::HeaderMapConstructionFailed)?;
                let header_value = header_value.into_inner();
                let header_value = HeaderValue::from_str(&header_value)
                    .change_context(ApiClientError::HeaderMapConstructionFailed)?;
                header_map.append(header_name, header_value);
                Ok(header_map)
            },
        )
    }
}

pub(super) trait RequestBuilderExt {
    fn add_headers(self, headers: reqwest::header::HeaderMap) -> Self;
}

impl RequestBuilderExt for reqwest::RequestBuilder {
    fn add_headers(mut self, headers: reqwest::header::HeaderMap) -> Self {
        self = self.headers(headers);
        self
    }
}

pub fn info_log(action: &str, message: &Value) {
    tracing::info!(tags = %action, json_value= %message);
}

pub fn error_log(action: &str, message: &Value) {
    tracing::error!(tags = %action, json_value= %message);
}
