use cards::CardValidationError;
use domain_types::router_request_types::RawCardInput;
use tokio::sync::mpsc;

#[derive(Debug, Clone)]
pub enum CardEntrySignal {
    Submitted(RawCardInput),
    Cancelled,
}

/// Sending half handed to a [`CardEntrySurface`].
#[derive(Debug, Clone)]
pub struct CardEntryHandle {
    sender: mpsc::UnboundedSender<CardEntrySignal>,
}

impl CardEntryHandle {
    pub fn channel() -> (Self, mpsc::UnboundedReceiver<CardEntrySignal>) {
        let (sender, receiver) = mpsc::unbounded_channel();
        (Self { sender }, receiver)
    }

    pub fn submit(&self, input: RawCardInput) {
        if self.sender.send(CardEntrySignal::Submitted(input)).is_err() {
            tracing::debug!("card submission after flow completion ignored");
        }
    }

    pub fn cancel(&self) {
        if self.sender.send(CardEntrySignal::Cancelled).is_err() {
            tracing::debug!("card entry cancel after flow completion ignored");
        }
    }
}

/// A host-provided form collecting card number, expiry and CVC.
pub trait CardEntrySurface: Send + Sync {
    fn present(&self, handle: CardEntryHandle);

    /// Invalid fields of the last submission. The form stays open.
    fn show_validation_errors(&self, errors: &[CardValidationError]);

    fn set_busy(&self, _busy: bool) {}

    fn tear_down(&self);
}
