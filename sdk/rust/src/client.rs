use std::sync::Arc;

use common_enums::{AuthMethod, PaymentStatus};
use connector_integration::types::ConnectorData;
use domain_types::{
    connector_flow::FlowName,
    errors::FlowError,
    flow_result::{CardTokenResult, FlowResult},
    router_request_types::{CheckoutInfo, RedirectTransaction, SinglePaymentInfo, WalletLinkInfo},
    router_response_types::CreateTransactionResponse,
};
use external_services::HttpTransport;
use interfaces::{
    card_entry::CardEntrySurface, connector_integration::ConnectorIntegration,
    connector_types::ConnectorServiceTrait, dispatcher::UiDispatcher, transport::Transport,
    web_surface::WebSurface,
};

use crate::{
    configs::Config,
    credentials::CredentialStore,
    flows::{
        callback::{CallbackSink, CardTokenCallback, FlowCallback},
        card_token, redirect, status,
        web_driver::WebFlowDriver,
    },
    services::GatewayContext,
};

/// Entry point of the SDK, built once and shared by every flow.
///
/// Each flow call runs to completion inside the returned future: the future
/// finishes after the terminal result has been handed to the dispatcher.
#[derive(Debug)]
pub struct PayMayaClient {
    config: Config,
    credentials: CredentialStore,
    gateway: GatewayContext,
}

impl PayMayaClient {
    pub fn new(config: Config) -> Self {
        let transport = Arc::new(HttpTransport::new(config.proxy.clone(), config.http.clone()));
        Self::with_transport(config, transport)
    }

    /// Client sending its gateway calls through `transport`.
    pub fn with_transport(config: Config, transport: Arc<dyn Transport>) -> Self {
        let credentials = CredentialStore::from_config(&config.credentials);
        let gateway = GatewayContext {
            transport,
            connector: ConnectorData::paymaya(),
            connectors: config.connectors.clone(),
        };
        tracing::info!(
            environment = %config.common.environment,
            base_url = %gateway.connectors.paymaya.base_url,
            "paymaya client initialised"
        );
        Self {
            config,
            credentials,
            gateway,
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Register the merchant key used by the flows of `method`.
    pub fn add_authentication_key(&mut self, method: AuthMethod, key: impl Into<String>) {
        tracing::debug!(%method, "authentication key registered");
        self.credentials.insert(method, key);
    }

    pub async fn checkout(
        &self,
        info: CheckoutInfo,
        surface: Arc<dyn WebSurface>,
        dispatcher: Arc<dyn UiDispatcher>,
        callback: FlowCallback,
    ) {
        self.run_redirect(&info, surface, dispatcher, callback).await
    }

    pub async fn single_payment(
        &self,
        info: SinglePaymentInfo,
        surface: Arc<dyn WebSurface>,
        dispatcher: Arc<dyn UiDispatcher>,
        callback: FlowCallback,
    ) {
        self.run_redirect(&info, surface, dispatcher, callback).await
    }

    pub async fn create_wallet_link(
        &self,
        info: WalletLinkInfo,
        surface: Arc<dyn WebSurface>,
        dispatcher: Arc<dyn UiDispatcher>,
        callback: FlowCallback,
    ) {
        self.run_redirect(&info, surface, dispatcher, callback).await
    }

    /// Collect a card and create a payment token for it.
    pub async fn add_card(
        &self,
        surface: Arc<dyn CardEntrySurface>,
        dispatcher: Arc<dyn UiDispatcher>,
        callback: CardTokenCallback,
    ) {
        let sink = CallbackSink::new(Arc::clone(&dispatcher), callback, FlowName::CardToken);
        let auth = match self.credentials.get(AuthMethod::CardToken) {
            Ok(auth) => auth,
            Err(error) => return sink.resolve(CardTokenResult::Error(error)),
        };
        card_token::run(&self.gateway, auth, surface, dispatcher, sink).await
    }

    /// Current status of a transaction created by one of the redirect flows.
    pub async fn check_payment_status(
        &self,
        transaction_id: &str,
        method: AuthMethod,
    ) -> Result<PaymentStatus, FlowError> {
        let auth = self.credentials.get(method)?;
        status::poll(&self.gateway, transaction_id, auth)
            .await
            .map_err(|report| report.current_context().clone())
    }

    async fn run_redirect<Req>(
        &self,
        request: &Req,
        surface: Arc<dyn WebSurface>,
        dispatcher: Arc<dyn UiDispatcher>,
        callback: FlowCallback,
    ) where
        Req: RedirectTransaction + Sync,
        (dyn ConnectorServiceTrait + Sync):
            ConnectorIntegration<Req::Flow, Req, CreateTransactionResponse>,
    {
        let flow = request.flow_name();
        let sink = CallbackSink::new(Arc::clone(&dispatcher), callback, flow);
        let auth = match self.credentials.get(request.auth_method()) {
            Ok(auth) => auth,
            Err(error) => return sink.resolve(FlowResult::Error(error)),
        };

        let driver = WebFlowDriver::new(surface, dispatcher);
        redirect::run(
            &self.gateway,
            request,
            auth,
            self.config.flows.status_check(flow),
            driver,
            sink,
        )
        .await
    }
}
