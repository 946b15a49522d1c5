use std::path::PathBuf;

use common_enums::AuthMethod;
use common_utils::consts::{self, workspace_path};
use domain_types::{
    connector_flow::FlowName,
    types::{Connectors, HttpClientConfig, Proxy},
};
use hyperswitch_masking::Secret;

use crate::logger::config::Log;

#[derive(Clone, serde::Deserialize, Debug)]
pub struct Config {
    pub common: Common,
    #[serde(default)]
    pub log: Log,
    #[serde(default)]
    pub proxy: Proxy,
    #[serde(default)]
    pub http: HttpClientConfig,
    pub connectors: Connectors,
    #[serde(default)]
    pub flows: FlowSettings,
    #[serde(default)]
    pub credentials: Credentials,
}

#[derive(Clone, serde::Deserialize, Debug)]
pub struct Common {
    pub environment: consts::Env,
}

/// Per flow behaviour toggles.
#[derive(Clone, serde::Deserialize, Debug, PartialEq, Eq)]
#[serde(default)]
pub struct FlowSettings {
    pub checkout: FlowSetting,
    pub single_payment: FlowSetting,
    pub wallet_link: FlowSetting,
}

#[derive(Clone, Copy, serde::Deserialize, Debug, PartialEq, Eq)]
pub struct FlowSetting {
    /// Poll the transaction status when the user closes the surface without reaching a
    /// merchant url.
    pub status_check: bool,
}

impl Default for FlowSettings {
    fn default() -> Self {
        Self {
            checkout: FlowSetting { status_check: true },
            single_payment: FlowSetting { status_check: true },
            wallet_link: FlowSetting {
                status_check: false,
            },
        }
    }
}

impl FlowSettings {
    pub fn status_check(&self, flow: FlowName) -> bool {
        match flow {
            FlowName::Checkout => self.checkout.status_check,
            FlowName::SinglePayment => self.single_payment.status_check,
            FlowName::WalletLink => self.wallet_link.status_check,
            FlowName::CardToken | FlowName::Psync => false,
        }
    }
}

/// Merchant keys that may be supplied through configuration instead of
/// `PayMayaClient::add_authentication_key`.
#[derive(Clone, serde::Deserialize, Debug, Default)]
#[serde(default)]
pub struct Credentials {
    pub checkout: Option<Secret<String>>,
    pub payments: Option<Secret<String>>,
    pub card_token: Option<Secret<String>>,
}

impl Credentials {
    pub fn entries(&self) -> impl Iterator<Item = (AuthMethod, Secret<String>)> + '_ {
        [
            (AuthMethod::Checkout, self.checkout.as_ref()),
            (AuthMethod::Payments, self.payments.as_ref()),
            (AuthMethod::CardToken, self.card_token.as_ref()),
        ]
        .into_iter()
        .filter_map(|(method, key)| key.map(|key| (method, key.clone())))
    }
}

impl Config {
    /// Function to build the configuration by picking it from default locations
    pub fn new() -> Result<Self, config::ConfigError> {
        Self::new_with_config_path(None)
    }

    /// Function to build the configuration by picking it from default locations
    pub fn new_with_config_path(
        explicit_config_path: Option<PathBuf>,
    ) -> Result<Self, config::ConfigError> {
        let env = consts::Env::current_env();
        let config_path = Self::config_path(&env, explicit_config_path);

        let config = Self::builder(&env)?
            .add_source(config::File::from(config_path).required(false))
            .add_source(
                config::Environment::with_prefix(consts::ENV_PREFIX)
                    .try_parsing(true)
                    .separator("__")
                    .list_separator(",")
                    .with_list_parse_key("proxy.bypass_proxy_urls"),
            )
            .build()?;

        #[allow(clippy::print_stderr)]
        let config: Self = serde_path_to_error::deserialize(config).map_err(|error| {
            eprintln!("Unable to deserialize application configuration: {error}");
            error.into_inner()
        })?;

        config.validate()?;

        Ok(config)
    }

    /// Configuration of `environment` without reading files or the process environment.
    pub fn for_environment(environment: consts::Env) -> Self {
        Self {
            common: Common { environment },
            log: Log::default(),
            proxy: Proxy::default(),
            http: HttpClientConfig::default(),
            connectors: Connectors::for_environment(environment),
            flows: FlowSettings::default(),
            credentials: Credentials::default(),
        }
    }

    /// The gateway base url must be an absolute https url.
    pub fn validate(&self) -> Result<(), config::ConfigError> {
        let base_url = &self.connectors.paymaya.base_url;
        match url::Url::parse(base_url) {
            Ok(url) if url.scheme() == "https" && url.has_host() => Ok(()),
            _ => Err(config::ConfigError::Message(format!(
                "connectors.paymaya.base_url must be an absolute https url, got {base_url:?}"
            ))),
        }
    }

    pub fn builder(
        environment: &consts::Env,
    ) -> Result<config::ConfigBuilder<config::builder::DefaultState>, config::ConfigError> {
        config::Config::builder()
            // "env" can't be altered by config field.
            .set_override("env", environment.to_string())?
            .set_default("common.environment", environment.to_string())?
            .set_default("connectors.paymaya.base_url", environment.base_url())
    }

    /// Config path.
    pub fn config_path(
        environment: &consts::Env,
        explicit_config_path: Option<PathBuf>,
    ) -> PathBuf {
        let mut config_path = PathBuf::new();
        if let Some(explicit_config_path_val) = explicit_config_path {
            config_path.push(explicit_config_path_val);
        } else {
            let config_directory: String = "config".into();
            let config_file_name = environment.config_path();

            config_path.push(workspace_path());
            config_path.push(config_directory);
            config_path.push(config_file_name);
        }
        config_path
    }
}
