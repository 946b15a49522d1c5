#[derive(Debug, Clone)]
pub struct CreateCheckout;

#[derive(Debug, Clone)]
pub struct CreateSinglePayment;

#[derive(Debug, Clone)]
pub struct CreateWalletLink;

#[derive(Debug, Clone)]
pub struct CreatePaymentToken;

#[derive(Debug, Clone)]
pub struct PSync;

#[derive(Debug, Clone, Copy, PartialEq, Eq, strum::Display)]
#[strum(serialize_all = "snake_case")]
pub enum FlowName {
    Checkout,
    SinglePayment,
    WalletLink,
    CardToken,
    Psync,
}
