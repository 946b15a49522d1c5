use common_utils::consts::Env;
use serde::Deserialize;

#[derive(Clone, Deserialize, Debug)]
pub struct Connectors {
    pub paymaya: ConnectorParams,
}

impl Connectors {
    pub fn for_environment(env: Env) -> Self {
        Self {
            paymaya: ConnectorParams {
                base_url: env.base_url().to_string(),
            },
        }
    }
}

#[derive(Clone, Deserialize, Debug, Default)]
pub struct ConnectorParams {
    /// base url
    #[serde(default)]
    pub base_url: String,
}

#[derive(Clone, Deserialize, Debug, Default, PartialEq, Eq, Hash)]
#[serde(default)]
pub struct Proxy {
    pub http_url: Option<String>,
    pub https_url: Option<String>,
    pub idle_pool_connection_timeout: Option<u64>,
    pub bypass_proxy_urls: Vec<String>,
}

impl Proxy {
    pub fn is_configured(&self) -> bool {
        self.http_url.is_some() || self.https_url.is_some()
    }
}

/// Timeouts of the outbound http client. Unset means no limit.
#[derive(Clone, Deserialize, Debug, Default, PartialEq, Eq)]
#[serde(default)]
pub struct HttpClientConfig {
    pub connect_timeout_ms: Option<u64>,
    pub request_timeout_ms: Option<u64>,
}
