use std::collections::HashMap;

use common_enums::{PaymentStatus, PaymentTokenStatus, ShippingType};
use common_utils::{
    consts::{NO_ERROR_CODE, NO_ERROR_MESSAGE},
    pii::Email,
    types::FloatMajorUnit,
};
use domain_types::{
    redirect::RedirectUrlSet,
    router_data::{AuthenticationCredential, ErrorParameter, ErrorResponse},
    router_request_types::{
        AmountDetails, BillingAddress, Buyer, CardDetails, CheckoutInfo, CheckoutItem, Contact,
        ItemAmount, ShippingAddress, SinglePaymentInfo, TotalAmount, WalletLinkInfo,
    },
    router_response_types::{
        CreateTransactionResponse, PaymentStatusResponse, PaymentTokenResponse,
    },
};
use hyperswitch_masking::{PeekInterface, Secret};
use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

#[derive(Debug, Clone)]
pub struct PaymayaAuthType {
    pub api_key: Secret<String>,
}

impl From<&AuthenticationCredential> for PaymayaAuthType {
    fn from(auth: &AuthenticationCredential) -> Self {
        Self {
            api_key: auth.api_key.clone(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct PaymayaRedirectUrl {
    success: String,
    failure: String,
    cancel: String,
}

impl From<&RedirectUrlSet> for PaymayaRedirectUrl {
    fn from(urls: &RedirectUrlSet) -> Self {
        Self {
            success: urls.success().to_string(),
            failure: urls.failure().to_string(),
            cancel: urls.cancel().to_string(),
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymayaAmountDetails {
    #[serde(skip_serializing_if = "Option::is_none")]
    discount: Option<FloatMajorUnit>,
    #[serde(skip_serializing_if = "Option::is_none")]
    service_charge: Option<FloatMajorUnit>,
    #[serde(skip_serializing_if = "Option::is_none")]
    shipping_fee: Option<FloatMajorUnit>,
    #[serde(skip_serializing_if = "Option::is_none")]
    tax: Option<FloatMajorUnit>,
    #[serde(skip_serializing_if = "Option::is_none")]
    subtotal: Option<FloatMajorUnit>,
}

impl From<&AmountDetails> for PaymayaAmountDetails {
    fn from(details: &AmountDetails) -> Self {
        Self {
            discount: details.discount,
            service_charge: details.service_charge,
            shipping_fee: details.shipping_fee,
            tax: details.tax,
            subtotal: details.subtotal,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct PaymayaTotalAmount {
    value: FloatMajorUnit,
    currency: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    details: Option<PaymayaAmountDetails>,
}

impl From<&TotalAmount> for PaymayaTotalAmount {
    fn from(amount: &TotalAmount) -> Self {
        Self {
            value: amount.value,
            currency: amount.currency.clone(),
            details: amount.details.as_ref().map(PaymayaAmountDetails::from),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct PaymayaItemAmount {
    value: FloatMajorUnit,
    #[serde(skip_serializing_if = "Option::is_none")]
    details: Option<PaymayaAmountDetails>,
}

impl From<&ItemAmount> for PaymayaItemAmount {
    fn from(amount: &ItemAmount) -> Self {
        Self {
            value: amount.value,
            details: amount.details.as_ref().map(PaymayaAmountDetails::from),
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymayaItem {
    name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    quantity: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    amount: Option<PaymayaItemAmount>,
    total_amount: PaymayaItemAmount,
}

impl From<&CheckoutItem> for PaymayaItem {
    fn from(item: &CheckoutItem) -> Self {
        Self {
            name: item.name.clone(),
            quantity: item.quantity,
            code: item.code.clone(),
            description: item.description.clone(),
            amount: item.amount.as_ref().map(PaymayaItemAmount::from),
            total_amount: PaymayaItemAmount::from(&item.total_amount),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct PaymayaContact {
    #[serde(skip_serializing_if = "Option::is_none")]
    phone: Option<Secret<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    email: Option<Email>,
}

impl From<&Contact> for PaymayaContact {
    fn from(contact: &Contact) -> Self {
        Self {
            phone: contact.phone.clone(),
            email: contact.email.clone(),
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymayaShippingAddress {
    #[serde(skip_serializing_if = "Option::is_none")]
    first_name: Option<Secret<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    middle_name: Option<Secret<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    last_name: Option<Secret<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    phone: Option<Secret<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    email: Option<Email>,
    #[serde(skip_serializing_if = "Option::is_none")]
    line1: Option<Secret<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    line2: Option<Secret<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    city: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    state: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    zip_code: Option<Secret<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    country_code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    shipping_type: Option<ShippingType>,
}

impl From<&ShippingAddress> for PaymayaShippingAddress {
    fn from(address: &ShippingAddress) -> Self {
        Self {
            first_name: address.first_name.clone(),
            middle_name: address.middle_name.clone(),
            last_name: address.last_name.clone(),
            phone: address.phone.clone(),
            email: address.email.clone(),
            line1: address.line1.clone(),
            line2: address.line2.clone(),
            city: address.city.clone(),
            state: address.state.clone(),
            zip_code: address.zip_code.clone(),
            country_code: address.country_code.clone(),
            shipping_type: address.shipping_type,
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymayaBillingAddress {
    #[serde(skip_serializing_if = "Option::is_none")]
    line1: Option<Secret<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    line2: Option<Secret<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    city: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    state: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    zip_code: Option<Secret<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    country_code: Option<String>,
}

impl From<&BillingAddress> for PaymayaBillingAddress {
    fn from(address: &BillingAddress) -> Self {
        Self {
            line1: address.line1.clone(),
            line2: address.line2.clone(),
            city: address.city.clone(),
            state: address.state.clone(),
            zip_code: address.zip_code.clone(),
            country_code: address.country_code.clone(),
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymayaBuyer {
    #[serde(skip_serializing_if = "Option::is_none")]
    first_name: Option<Secret<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    middle_name: Option<Secret<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    last_name: Option<Secret<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    birthday: Option<Secret<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    customer_since: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    sex: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    contact: Option<PaymayaContact>,
    #[serde(skip_serializing_if = "Option::is_none")]
    shipping_address: Option<PaymayaShippingAddress>,
    #[serde(skip_serializing_if = "Option::is_none")]
    billing_address: Option<PaymayaBillingAddress>,
}

impl From<&Buyer> for PaymayaBuyer {
    fn from(buyer: &Buyer) -> Self {
        Self {
            first_name: buyer.first_name.clone(),
            middle_name: buyer.middle_name.clone(),
            last_name: buyer.last_name.clone(),
            birthday: buyer.birthday.clone(),
            customer_since: buyer.customer_since.clone(),
            sex: buyer.sex.clone(),
            contact: buyer.contact.as_ref().map(PaymayaContact::from),
            shipping_address: buyer
                .shipping_address
                .as_ref()
                .map(PaymayaShippingAddress::from),
            billing_address: buyer.billing_address.as_ref().map(PaymayaBillingAddress::from),
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymayaCheckoutRequest {
    total_amount: PaymayaTotalAmount,
    #[serde(skip_serializing_if = "Option::is_none")]
    buyer: Option<PaymayaBuyer>,
    items: Vec<PaymayaItem>,
    redirect_url: PaymayaRedirectUrl,
    request_reference_number: String,
    metadata: HashMap<String, String>,
}

impl From<&CheckoutInfo> for PaymayaCheckoutRequest {
    fn from(info: &CheckoutInfo) -> Self {
        Self {
            total_amount: PaymayaTotalAmount::from(&info.total_amount),
            buyer: info.buyer.as_ref().map(PaymayaBuyer::from),
            items: info.items.iter().map(PaymayaItem::from).collect(),
            redirect_url: PaymayaRedirectUrl::from(&info.redirect_urls),
            request_reference_number: info.request_reference_number.clone(),
            metadata: info.metadata.clone(),
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymayaSinglePaymentRequest {
    total_amount: PaymayaTotalAmount,
    redirect_url: PaymayaRedirectUrl,
    request_reference_number: String,
    metadata: HashMap<String, String>,
}

impl From<&SinglePaymentInfo> for PaymayaSinglePaymentRequest {
    fn from(info: &SinglePaymentInfo) -> Self {
        Self {
            total_amount: PaymayaTotalAmount::from(&info.total_amount),
            redirect_url: PaymayaRedirectUrl::from(&info.redirect_urls),
            request_reference_number: info.request_reference_number.clone(),
            metadata: info.metadata.clone(),
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymayaWalletLinkRequest {
    redirect_url: PaymayaRedirectUrl,
    request_reference_number: String,
    metadata: HashMap<String, String>,
}

impl From<&WalletLinkInfo> for PaymayaWalletLinkRequest {
    fn from(info: &WalletLinkInfo) -> Self {
        Self {
            redirect_url: PaymayaRedirectUrl::from(&info.redirect_urls),
            request_reference_number: info.request_reference_number.clone(),
            metadata: info.metadata.clone(),
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymayaCard {
    number: Secret<String>,
    exp_month: Secret<String>,
    exp_year: Secret<String>,
    cvc: Secret<String>,
}

#[derive(Debug, Serialize)]
pub struct PaymayaPaymentTokenRequest {
    card: PaymayaCard,
}

impl From<&CardDetails> for PaymayaPaymentTokenRequest {
    fn from(card: &CardDetails) -> Self {
        Self {
            card: PaymayaCard {
                number: Secret::new(card.number.peek().clone()),
                exp_month: Secret::new(card.expiration.get_month().two_digits()),
                exp_year: Secret::new(card.expiration.get_year().four_digits()),
                cvc: Secret::new(card.cvc.peek().clone()),
            },
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymayaCheckoutResponse {
    pub checkout_id: String,
    pub redirect_url: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymayaSinglePaymentResponse {
    pub payment_id: String,
    pub redirect_url: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymayaWalletLinkResponse {
    pub link_id: String,
    pub redirect_url: String,
}

impl From<PaymayaCheckoutResponse> for CreateTransactionResponse {
    fn from(response: PaymayaCheckoutResponse) -> Self {
        Self {
            transaction_id: response.checkout_id,
            redirect_url: response.redirect_url,
        }
    }
}

impl From<PaymayaSinglePaymentResponse> for CreateTransactionResponse {
    fn from(response: PaymayaSinglePaymentResponse) -> Self {
        Self {
            transaction_id: response.payment_id,
            redirect_url: response.redirect_url,
        }
    }
}

impl From<PaymayaWalletLinkResponse> for CreateTransactionResponse {
    fn from(response: PaymayaWalletLinkResponse) -> Self {
        Self {
            transaction_id: response.link_id,
            redirect_url: response.redirect_url,
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymayaPaymentTokenResponse {
    pub payment_token_id: String,
    pub state: PaymentTokenStatus,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
    #[serde(with = "time::serde::rfc3339")]
    pub updated_at: OffsetDateTime,
    pub issuer: String,
}

impl From<PaymayaPaymentTokenResponse> for PaymentTokenResponse {
    fn from(response: PaymayaPaymentTokenResponse) -> Self {
        Self {
            payment_token_id: response.payment_token_id,
            state: response.state,
            created_at: response.created_at,
            updated_at: response.updated_at,
            issuer: response.issuer,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct PaymayaStatusResponse {
    pub id: String,
    pub status: PaymentStatus,
}

impl From<PaymayaStatusResponse> for PaymentStatusResponse {
    fn from(response: PaymayaStatusResponse) -> Self {
        Self {
            transaction_id: response.id,
            status: response.status,
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct PaymayaErrorParameter {
    pub field: Option<String>,
    pub description: Option<String>,
}

/// Error body of the gateway. At least one of `code` or `message` is present.
#[derive(Debug, Serialize, Deserialize)]
pub struct PaymayaErrorResponse {
    pub code: Option<String>,
    pub message: Option<String>,
    #[serde(default)]
    pub parameters: Vec<PaymayaErrorParameter>,
}

impl PaymayaErrorResponse {
    pub fn is_error_shape(&self) -> bool {
        self.code.is_some() || self.message.is_some()
    }

    pub fn into_error_response(self, status_code: u16) -> ErrorResponse {
        ErrorResponse {
            status_code,
            code: self.code.unwrap_or_else(|| NO_ERROR_CODE.to_string()),
            message: self.message.unwrap_or_else(|| NO_ERROR_MESSAGE.to_string()),
            parameters: self
                .parameters
                .into_iter()
                .map(|parameter| ErrorParameter {
                    field: parameter.field,
                    description: parameter.description,
                })
                .collect(),
        }
    }
}
