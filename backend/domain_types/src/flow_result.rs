use common_enums::{PaymentStatus, RedirectOutcome};

use crate::{errors::FlowError, router_response_types::PaymentTokenResponse};

/// Value handed to the caller of a redirect-based flow.
///
/// A flow delivers at most one `Prepared` followed by exactly one terminal variant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FlowResult {
    /// The gateway accepted the request and assigned a transaction id.
    Prepared { transaction_id: String },
    /// A merchant redirect url was reached, or the status poll resolved the outcome.
    Processed {
        outcome: RedirectOutcome,
        redirect_url: String,
    },
    /// The user left the flow and the outcome is unknown.
    Interrupted {
        last_known_status: Option<PaymentStatus>,
    },
    Error(FlowError),
}

/// Terminal value of the card tokenization flow.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CardTokenResult {
    Success(PaymentTokenResponse),
    /// The user closed the card entry surface.
    Cancelled,
    Error(FlowError),
}
