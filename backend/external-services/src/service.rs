use std::{str::FromStr, time::Duration};

use common_utils::{
    errors::CustomResult,
    request::{Headers, Method, Request, RequestContent},
};
use domain_types::{
    errors::ApiClientError,
    router_response_types::Response,
    types::{HttpClientConfig, Proxy},
};
use error_stack::{report, ResultExt};
use interfaces::transport::Transport;
use once_cell::sync::OnceCell;
use reqwest::Client;
use serde_json::{json, Value};

/// [`Transport`] backed by a pooled reqwest client.
///
/// Clients are built lazily, one for proxied and one for direct traffic.
#[derive(Debug, Default)]
pub struct HttpTransport {
    proxy: Proxy,
    http: HttpClientConfig,
    non_proxied_client: OnceCell<Client>,
    proxied_client: OnceCell<Client>,
}

impl HttpTransport {
    pub fn new(proxy: Proxy, http: HttpClientConfig) -> Self {
        Self {
            proxy,
            http,
            non_proxied_client: OnceCell::new(),
            proxied_client: OnceCell::new(),
        }
    }

    pub async fn call_connector_api(
        &self,
        request: Request,
    ) -> CustomResult<Result<Response, Response>, ApiClientError> {
        let url =
            reqwest::Url::parse(&request.url).change_context(ApiClientError::UrlEncodingFailed)?;

        let should_bypass_proxy = self.proxy.bypass_proxy_urls.contains(&url.to_string());

        let client = self.create_client(should_bypass_proxy)?;

        info_log(
            "OUTGOING_REQUEST",
            &json!({
                "url": request.url,
                "method": request.method.to_string(),
                "headers": request.masked_headers(),
                "body": request
                    .body
                    .as_ref()
                    .map(RequestContent::masked_value)
                    .unwrap_or(Value::Null),
            }),
        );

        let headers = request.headers.construct_header_map()?;

        let request = match request.method {
            Method::Get => client.get(url),
            Method::Post => {
                let client = client.post(url);
                match request.body {
                    Some(RequestContent::Json(payload)) => client.json(&payload),
                    None => client,
                }
            }
        }
        .add_headers(headers);

        let response = request.send().await.map_err(|error| {
            let api_error = match error {
                error if error.is_timeout() => ApiClientError::RequestTimeoutReceived,
                error => ApiClientError::RequestNotSent(error.to_string()),
            };
            error_log(
                "REQUEST_FAILURE",
                &json!(format!("Unable to send request to gateway. Error: {api_error}")),
            );
            report!(api_error)
        });

        handle_response(response).await
    }

    fn create_client(&self, should_bypass_proxy: bool) -> CustomResult<Client, ApiClientError> {
        Ok(if should_bypass_proxy || !self.proxy.is_configured() {
            &self.non_proxied_client
        } else {
            &self.proxied_client
        }
        .get_or_try_init(|| {
            self.get_client_builder(should_bypass_proxy)?
                .build()
                .change_context(ApiClientError::ClientConstructionFailed)
                .inspect_err(|err| {
                    info_log(
                        "ERROR",
                        &json!(format!("Failed to construct base client. Error: {:?}", err)),
                    );
                })
        })?
        .clone())
    }

    fn get_client_builder(
        &self,
        should_bypass_proxy: bool,
    ) -> CustomResult<reqwest::ClientBuilder, ApiClientError> {
        let mut client_builder = Client::builder()
            .redirect(reqwest::redirect::Policy::none())
            .pool_idle_timeout(Duration::from_secs(
                self.proxy.idle_pool_connection_timeout.unwrap_or_default(),
            ));

        if let Some(connect_timeout) = self.http.connect_timeout_ms {
            client_builder = client_builder.connect_timeout(Duration::from_millis(connect_timeout));
        }
        if let Some(request_timeout) = self.http.request_timeout_ms {
            client_builder = client_builder.timeout(Duration::from_millis(request_timeout));
        }

        if should_bypass_proxy {
            return Ok(client_builder);
        }

        if let Some(url) = self.proxy.https_url.as_ref() {
            client_builder = client_builder.proxy(
                reqwest::Proxy::https(url)
                    .change_context(ApiClientError::InvalidProxyConfiguration)
                    .inspect_err(|err| {
                        info_log(
                            "PROXY_ERROR",
                            &json!(format!("HTTPS proxy configuration error. Error: {:?}", err)),
                        );
                    })?,
            );
        }

        if let Some(url) = self.proxy.http_url.as_ref() {
            client_builder = client_builder.proxy(
                reqwest::Proxy::http(url)
                    .change_context(ApiClientError::InvalidProxyConfiguration)
                    .inspect_err(|err| {
                        info_log(
                            "PROXY_ERROR",
                            &json!(format!("HTTP proxy configuration error. Error: {:?}", err)),
                        );
                    })?,
            );
        }

        Ok(client_builder)
    }
}

#[async_trait::async_trait]
impl Transport for HttpTransport {
    async fn send(
        &self,
        request: Request,
    ) -> CustomResult<Result<Response, Response>, ApiClientError> {
        self.call_connector_api(request).await
    }
}

async fn handle_response(
    response: CustomResult<reqwest::Response, ApiClientError>,
) -> CustomResult<Result<Response, Response>, ApiClientError> {
    let resp = response?;
    let status_code = resp.status().as_u16();
    let headers = Some(resp.headers().to_owned());
    let response = resp
        .bytes()
        .await
        .change_context(ApiClientError::ResponseDecodingFailed)?;
    let response = Response {
        headers,
        response,
        status_code,
    };
    if (200..=299).contains(&status_code) {
        info_log("INCOMING_RESPONSE", &json!({ "status_code": status_code }));
        Ok(Ok(response))
    } else {
        warn_log("INCOMING_ERROR_RESPONSE", &json!({ "status_code": status_code }));
        Ok(Err(response))
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

#[inline]
pub fn info_log(action: &str, message: &Value) {
    tracing::info!(tags = %action, json_value= %message);
}

#[inline]
pub fn error_log(action: &str, message: &Value) {
    tracing::error!(tags = %action, json_value= %message);
}

#[inline]
pub fn warn_log(action: &str, message: &Value) {
    tracing::warn!(tags = %action, json_value= %message);
}
