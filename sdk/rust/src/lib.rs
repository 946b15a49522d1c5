//! Payment flows of the PayMaya gateway.
//!
//! A [`PayMayaClient`] is built once from a [`configs::Config`] and the merchant keys, then
//! drives redirect-based flows (checkout, single payment, wallet link) through a host
//! supplied [`WebSurface`] and card tokenization through a [`CardEntrySurface`].

pub mod client;
pub mod configs;
pub mod credentials;
pub mod errors;
pub mod flows;
pub mod logger;
pub mod services;

pub use client::PayMayaClient;
pub use common_enums::{AuthMethod, PaymentStatus, PaymentTokenStatus, RedirectOutcome};
pub use domain_types::{
    errors::FlowError,
    flow_result::{CardTokenResult, FlowResult},
    redirect::RedirectUrlSet,
    router_request_types::{
        AmountDetails, BillingAddress, Buyer, CheckoutInfo, CheckoutItem, Contact, ItemAmount,
        RawCardInput, ShippingAddress, SinglePaymentInfo, TotalAmount, WalletLinkInfo,
    },
    router_response_types::PaymentTokenResponse,
};
pub use flows::callback::{CardTokenCallback, FlowCallback};
pub use interfaces::{
    card_entry::{CardEntryHandle, CardEntrySignal, CardEntrySurface},
    dispatcher::{InlineDispatcher, MainQueue, MainQueueDispatcher, UiDispatcher},
    transport::Transport,
    web_surface::{SurfaceHandle, SurfaceSignal, WebSurface},
};
