use std::sync::Arc;

use domain_types::{
    connector_flow::{CreatePaymentToken, FlowName},
    flow_result::CardTokenResult,
    router_data::AuthenticationCredential,
    router_request_types::CardDetails,
    router_response_types::PaymentTokenResponse,
};
use interfaces::{
    card_entry::{CardEntryHandle, CardEntrySignal, CardEntrySurface},
    dispatcher::UiDispatcher,
};

use super::callback::CallbackSink;
use crate::services::GatewayContext;

/// Collect a card on `surface` and exchange it for a payment token.
///
/// Invalid submissions are sent back to the surface and the flow keeps waiting.
/// The surface is torn down before the terminal result is delivered.
pub async fn run(
    gateway: &GatewayContext,
    auth: &AuthenticationCredential,
    surface: Arc<dyn CardEntrySurface>,
    dispatcher: Arc<dyn UiDispatcher>,
    sink: CallbackSink<CardTokenResult>,
) {
    let (handle, mut signals) = CardEntryHandle::channel();
    let presented = Arc::clone(&surface);
    dispatcher.dispatch(Box::new(move || presented.present(handle)));

    let result = loop {
        let input = match signals.recv().await {
            Some(CardEntrySignal::Submitted(input)) => input,
            Some(CardEntrySignal::Cancelled) | None => break CardTokenResult::Cancelled,
        };

        let card = match CardDetails::try_from(&input) {
            Ok(card) => card,
            Err(errors) => {
                tracing::info!(?errors, "card input rejected");
                let form = Arc::clone(&surface);
                dispatcher.dispatch(Box::new(move || form.show_validation_errors(&errors)));
                continue;
            }
        };

        let form = Arc::clone(&surface);
        dispatcher.dispatch(Box::new(move || form.set_busy(true)));

        break match gateway
            .call::<CreatePaymentToken, _, PaymentTokenResponse>(&card, auth, FlowName::CardToken)
            .await
        {
            Ok(token) => CardTokenResult::Success(token),
            Err(report) => {
                tracing::error!(error = ?report, "card could not be tokenized");
                CardTokenResult::Error(report.current_context().clone())
            }
        };
    };

    drop(signals);
    dispatcher.dispatch(Box::new(move || surface.tear_down()));
    sink.resolve(result);
}
