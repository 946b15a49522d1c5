/// Credential slot used to sign a gateway request.
#[derive(
    Clone,
    Copy,
    Debug,
    Hash,
    Eq,
    PartialEq,
    serde::Deserialize,
    serde::Serialize,
    strum::Display,
    strum::EnumString,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum AuthMethod {
    /// Checkout flow.
    Checkout,
    /// Single payment and wallet link flows.
    Payments,
    /// Card tokenization flow.
    CardToken,
}

/// Status of a payment as reported by the gateway
#[derive(
    Clone,
    Copy,
    Debug,
    Hash,
    Eq,
    PartialEq,
    serde::Deserialize,
    serde::Serialize,
    strum::Display,
    strum::EnumString,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum PaymentStatus {
    PendingToken,
    PendingPayment,
    PaymentExpired,
    ForAuthentication,
    Authenticating,
    AuthSuccess,
    AuthFailed,
    PaymentProcessing,
    PaymentSuccess,
    PaymentFailed,
    Voided,
    Refunded,
}

/// What a payment status means for a flow that lost its redirect signal.
#[derive(Clone, Copy, Debug, Eq, PartialEq, strum::Display)]
#[strum(serialize_all = "snake_case")]
pub enum StatusResolution {
    Success,
    Failure,
    Indeterminate,
}

impl PaymentStatus {
    pub fn resolution(self) -> StatusResolution {
        match self {
            Self::PaymentSuccess => StatusResolution::Success,
            Self::AuthFailed | Self::PaymentFailed => StatusResolution::Failure,
            Self::PendingToken
            | Self::PendingPayment
            | Self::PaymentExpired
            | Self::ForAuthentication
            | Self::Authenticating
            | Self::AuthSuccess
            | Self::PaymentProcessing
            | Self::Voided
            | Self::Refunded => StatusResolution::Indeterminate,
        }
    }
}

/// State of a card payment token
#[derive(
    Clone,
    Copy,
    Debug,
    Eq,
    PartialEq,
    serde::Deserialize,
    serde::Serialize,
    strum::Display,
    strum::EnumString,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum PaymentTokenStatus {
    Available,
    CurrentlyInUse,
    Used,
    Expired,
    Preverification,
    /// Spelled as the gateway sends it.
    Veryfing,
    VerificationFailed,
}

/// Terminal bucket of a redirect-based flow.
#[derive(
    Clone,
    Copy,
    Debug,
    Eq,
    PartialEq,
    serde::Deserialize,
    serde::Serialize,
    strum::Display,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum RedirectOutcome {
    Success,
    Failure,
    Cancel,
}

#[derive(
    Clone,
    Copy,
    Debug,
    Eq,
    PartialEq,
    serde::Deserialize,
    serde::Serialize,
    strum::Display,
    strum::EnumString,
)]
pub enum ShippingType {
    /// Standard
    #[serde(rename = "ST")]
    #[strum(serialize = "ST")]
    Standard,
    /// Same day
    #[serde(rename = "SD")]
    #[strum(serialize = "SD")]
    SameDay,
}
