use std::{fmt::Debug, sync::Arc};

use domain_types::{
    connector_flow::FlowName,
    flow_result::{CardTokenResult, FlowResult},
};
use interfaces::dispatcher::UiDispatcher;

/// Receives the results of a redirect flow on the caller's dispatcher.
pub type FlowCallback = Arc<dyn Fn(FlowResult) + Send + Sync>;

/// Receives the terminal result of the card tokenization flow on the caller's dispatcher.
pub type CardTokenCallback = Arc<dyn Fn(CardTokenResult) + Send + Sync>;

/// Delivery end of one flow invocation.
///
/// Resolving consumes the sink, so a flow can deliver only one terminal result.
pub struct CallbackSink<R> {
    dispatcher: Arc<dyn UiDispatcher>,
    callback: Arc<dyn Fn(R) + Send + Sync>,
    flow: FlowName,
    prepared: bool,
}

impl<R> CallbackSink<R>
where
    R: Debug + Send + 'static,
{
    pub fn new(
        dispatcher: Arc<dyn UiDispatcher>,
        callback: Arc<dyn Fn(R) + Send + Sync>,
        flow: FlowName,
    ) -> Self {
        Self {
            dispatcher,
            callback,
            flow,
            prepared: false,
        }
    }

    pub fn resolve(self, result: R) {
        tracing::info!(flow = %self.flow, ?result, "flow resolved");
        self.deliver(result);
    }

    fn deliver(&self, result: R) {
        let callback = Arc::clone(&self.callback);
        self.dispatcher.dispatch(Box::new(move || callback(result)));
    }
}

impl CallbackSink<FlowResult> {
    /// Report the transaction id. Only the first call is delivered.
    pub fn prepared(&mut self, transaction_id: String) {
        if self.prepared {
            tracing::debug!(flow = %self.flow, %transaction_id, "duplicate prepared signal ignored");
            return;
        }
        self.prepared = true;
        tracing::info!(flow = %self.flow, %transaction_id, "transaction prepared");
        self.deliver(FlowResult::Prepared { transaction_id });
    }
}
