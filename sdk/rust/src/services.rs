use std::{sync::Arc, time::Instant};

use common_utils::errors::{CustomResult, ReportSwitchExt};
use connector_integration::types::ConnectorData;
use domain_types::{
    connector_flow::FlowName,
    errors::{ConnectorError, FlowError},
    router_data::AuthenticationCredential,
    types::Connectors,
};
use error_stack::report;
use interfaces::{
    api::ConnectorCommon, connector_integration::ConnectorIntegration,
    connector_types::ConnectorServiceTrait, transport::Transport,
};

use crate::logger::instrument;

/// Everything a flow needs to reach the gateway.
#[derive(Clone)]
pub struct GatewayContext {
    pub transport: Arc<dyn Transport>,
    pub connector: ConnectorData,
    pub connectors: Connectors,
}

impl GatewayContext {
    /// Run one gateway call of flow `F` through the configured connector.
    pub async fn call<F, Req, Resp>(
        &self,
        req: &Req,
        auth: &AuthenticationCredential,
        flow: FlowName,
    ) -> CustomResult<Resp, FlowError>
    where
        (dyn ConnectorServiceTrait + Sync): ConnectorIntegration<F, Req, Resp>,
        Req: Sync,
    {
        execute_connector_processing_step::<F, _, _, _>(
            self.transport.as_ref(),
            *self.connector.connector,
            req,
            auth,
            &self.connectors,
            flow,
        )
        .await
    }
}

impl std::fmt::Debug for GatewayContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GatewayContext")
            .field("connector", &self.connector)
            .field("connectors", &self.connectors)
            .finish_non_exhaustive()
    }
}

/// Build the request, send it once and interpret the answer.
#[instrument(skip_all, fields(connector = connector.id(), flow = %flow))]
pub async fn execute_connector_processing_step<F, Req, Resp, C>(
    transport: &dyn Transport,
    connector: &C,
    req: &Req,
    auth: &AuthenticationCredential,
    connectors: &Connectors,
    flow: FlowName,
) -> CustomResult<Resp, FlowError>
where
    C: ConnectorIntegration<F, Req, Resp> + ?Sized,
    Req: Sync,
{
    let start = Instant::now();
    let request = connector.build_request(req, auth, connectors).switch()?;
    tracing::info!(
        request.method = %request.method,
        request.url = %request.url,
        "sending gateway request"
    );

    let response = transport.send(request).await.switch()?;

    let result = match response {
        Ok(body) => {
            tracing::info!(status_code = body.status_code, "gateway answered");
            connector.handle_response(req, body).switch()
        }
        Err(body) => {
            tracing::warn!(status_code = body.status_code, "gateway answered with an error");
            let error = connector.get_error_response(body).switch()?;
            Err::<Resp, _>(report!(ConnectorError::from(error))).switch()
        }
    };

    tracing::info!(elapsed = ?start.elapsed(), success = result.is_ok(), "gateway call finished");
    result
}
