use common_enums::{PaymentStatus, PaymentTokenStatus};
use serde::Serialize;
use time::OffsetDateTime;

#[derive(Clone, Debug)]
pub struct Response {
    pub headers: Option<http::HeaderMap>,
    pub response: bytes::Bytes,
    pub status_code: u16,
}

/// Result of creating a checkout, single payment or wallet link.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CreateTransactionResponse {
    pub transaction_id: String,
    pub redirect_url: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct PaymentTokenResponse {
    pub payment_token_id: String,
    pub state: PaymentTokenStatus,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
    #[serde(with = "time::serde::rfc3339")]
    pub updated_at: OffsetDateTime,
    pub issuer: String,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PaymentStatusResponse {
    pub transaction_id: String,
    pub status: PaymentStatus,
}
