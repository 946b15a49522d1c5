use common_enums::{PaymentStatus, RedirectOutcome, StatusResolution};
use common_utils::errors::CustomResult;
use domain_types::{
    connector_flow::{FlowName, PSync},
    errors::FlowError,
    flow_result::FlowResult,
    redirect::RedirectUrlSet,
    router_data::AuthenticationCredential,
    router_request_types::PaymentSyncData,
    router_response_types::PaymentStatusResponse,
};

use crate::services::GatewayContext;

/// Fetch the current status of `transaction_id` with a single request.
pub async fn poll(
    gateway: &GatewayContext,
    transaction_id: &str,
    auth: &AuthenticationCredential,
) -> CustomResult<PaymentStatus, FlowError> {
    let response = gateway
        .call::<PSync, _, PaymentStatusResponse>(
            &PaymentSyncData {
                transaction_id: transaction_id.to_string(),
            },
            auth,
            FlowName::Psync,
        )
        .await?;

    tracing::info!(%transaction_id, status = %response.status, "payment status polled");
    Ok(response.status)
}

/// Result of a flow whose surface was closed, given the polled status.
pub fn resolve(status: PaymentStatus, redirect_urls: &RedirectUrlSet) -> FlowResult {
    let outcome = match status.resolution() {
        StatusResolution::Success => RedirectOutcome::Success,
        StatusResolution::Failure => RedirectOutcome::Failure,
        StatusResolution::Indeterminate => {
            return FlowResult::Interrupted {
                last_known_status: Some(status),
            }
        }
    };
    FlowResult::Processed {
        outcome,
        redirect_url: redirect_urls.url_for(outcome).to_string(),
    }
}
