use domain_types::{
    connector_flow::{CreateCheckout, CreatePaymentToken, CreateSinglePayment, CreateWalletLink, PSync},
    router_request_types::{
        CardDetails, CheckoutInfo, PaymentSyncData, SinglePaymentInfo, WalletLinkInfo,
    },
    router_response_types::{CreateTransactionResponse, PaymentStatusResponse, PaymentTokenResponse},
};

use crate::{api::ConnectorCommon, connector_integration::ConnectorIntegration};

pub trait ConnectorServiceTrait:
    ConnectorCommon
    + CheckoutCreate
    + SinglePaymentCreate
    + WalletLinkCreate
    + PaymentTokenCreate
    + PaymentSync
{
}

pub trait CheckoutCreate:
    ConnectorIntegration<CreateCheckout, CheckoutInfo, CreateTransactionResponse>
{
}

pub trait SinglePaymentCreate:
    ConnectorIntegration<CreateSinglePayment, SinglePaymentInfo, CreateTransactionResponse>
{
}

pub trait WalletLinkCreate:
    ConnectorIntegration<CreateWalletLink, WalletLinkInfo, CreateTransactionResponse>
{
}

pub trait PaymentTokenCreate:
    ConnectorIntegration<CreatePaymentToken, CardDetails, PaymentTokenResponse>
{
}

pub trait PaymentSync:
    ConnectorIntegration<PSync, PaymentSyncData, PaymentStatusResponse>
{
}

pub type BoxedConnector = Box<&'static (dyn ConnectorServiceTrait + Sync)>;
