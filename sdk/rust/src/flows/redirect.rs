use domain_types::{
    connector_flow::FlowName,
    flow_result::FlowResult,
    router_data::AuthenticationCredential,
    router_request_types::RedirectTransaction,
    router_response_types::CreateTransactionResponse,
};
use interfaces::{connector_integration::ConnectorIntegration, connector_types::ConnectorServiceTrait};

use super::{
    callback::CallbackSink,
    status,
    web_driver::{DriverEvent, WebFlowDriver},
};
use crate::services::GatewayContext;

pub fn title(flow: FlowName) -> &'static str {
    match flow {
        FlowName::Checkout => "PayMaya Checkout",
        FlowName::SinglePayment => "Pay with PayMaya",
        FlowName::WalletLink => "Create Wallet",
        FlowName::CardToken | FlowName::Psync => "PayMaya",
    }
}

/// How the driver loop ended.
enum Exit {
    Resolved(FlowResult),
    Dismissed,
}

/// Drive one redirect flow to its terminal result.
///
/// The surface is presented before the create call completes. Every branch tears
/// the surface down before the terminal result is handed to `sink`; both go
/// through the same dispatcher, so the caller observes them in that order.
pub async fn run<Req>(
    gateway: &GatewayContext,
    request: &Req,
    auth: &AuthenticationCredential,
    status_check: bool,
    mut driver: WebFlowDriver,
    mut sink: CallbackSink<FlowResult>,
) where
    Req: RedirectTransaction + Sync,
    (dyn ConnectorServiceTrait + Sync):
        ConnectorIntegration<Req::Flow, Req, CreateTransactionResponse>,
{
    let flow = request.flow_name();
    let redirect_urls = request.redirect_urls();

    driver.present(title(flow));

    let create = gateway.call::<Req::Flow, Req, CreateTransactionResponse>(request, auth, flow);
    let mut create = std::pin::pin!(create);
    let mut awaiting_create = true;
    let mut transaction_id: Option<String> = None;

    let exit = loop {
        tokio::select! {
            biased;

            // Signals already queued by the surface win over a create response that is ready
            // in the same poll.
            event = driver.next_event() => match event {
                DriverEvent::Navigated(url) => match redirect_urls.classify(&url) {
                    Some(outcome) => {
                        break Exit::Resolved(FlowResult::Processed {
                            outcome,
                            redirect_url: url,
                        });
                    }
                    None => tracing::debug!(%flow, %url, "intermediate navigation"),
                },
                DriverEvent::Error(error) => break Exit::Resolved(FlowResult::Error(error)),
                DriverEvent::Dismissed => break Exit::Dismissed,
            },

            created = &mut create, if awaiting_create => {
                awaiting_create = false;
                match created {
                    Ok(created) => {
                        sink.prepared(created.transaction_id.clone());
                        transaction_id = Some(created.transaction_id);
                        if let Err(error) = driver.load(&created.redirect_url) {
                            break Exit::Resolved(FlowResult::Error(error));
                        }
                    }
                    Err(report) => {
                        tracing::error!(%flow, error = ?report, "transaction could not be created");
                        break Exit::Resolved(FlowResult::Error(report.current_context().clone()));
                    }
                }
            }
        }
    };

    driver.tear_down();

    let result = match exit {
        Exit::Resolved(result) => result,
        Exit::Dismissed => match transaction_id {
            Some(transaction_id) if status_check => {
                tracing::info!(%flow, %transaction_id, "surface closed, checking payment status");
                match status::poll(gateway, &transaction_id, auth).await {
                    Ok(status) => status::resolve(status, redirect_urls),
                    Err(report) => {
                        tracing::error!(%flow, error = ?report, "status check failed");
                        FlowResult::Error(report.current_context().clone())
                    }
                }
            }
            _ => FlowResult::Interrupted {
                last_known_status: None,
            },
        },
    };

    sink.resolve(result);
}
