use std::collections::HashMap;

use cards::{CardExpiration, CardNumber, CardSecurityCode, CardValidationError};
use common_enums::{AuthMethod, ShippingType};
use common_utils::{generate_reference_number, pii::Email, types::FloatMajorUnit};
use hyperswitch_masking::{PeekInterface, Secret};

use crate::{
    connector_flow::{CreateCheckout, CreateSinglePayment, CreateWalletLink, FlowName},
    redirect::RedirectUrlSet,
};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct AmountDetails {
    pub discount: Option<FloatMajorUnit>,
    pub service_charge: Option<FloatMajorUnit>,
    pub shipping_fee: Option<FloatMajorUnit>,
    pub tax: Option<FloatMajorUnit>,
    pub subtotal: Option<FloatMajorUnit>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TotalAmount {
    pub value: FloatMajorUnit,
    /// ISO 4217 code, e.g. `PHP`.
    pub currency: String,
    pub details: Option<AmountDetails>,
}

impl TotalAmount {
    pub fn new(value: impl Into<FloatMajorUnit>, currency: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            currency: currency.into(),
            details: None,
        }
    }

    pub fn with_details(mut self, details: AmountDetails) -> Self {
        self.details = Some(details);
        self
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ItemAmount {
    pub value: FloatMajorUnit,
    pub details: Option<AmountDetails>,
}

#[derive(Debug, Clone)]
pub struct CheckoutItem {
    pub name: String,
    pub quantity: Option<u32>,
    pub code: Option<String>,
    pub description: Option<String>,
    pub amount: Option<ItemAmount>,
    pub total_amount: ItemAmount,
}

#[derive(Debug, Clone, Default)]
pub struct Contact {
    pub phone: Option<Secret<String>>,
    pub email: Option<Email>,
}

#[derive(Debug, Clone, Default)]
pub struct ShippingAddress {
    pub first_name: Option<Secret<String>>,
    pub middle_name: Option<Secret<String>>,
    pub last_name: Option<Secret<String>>,
    pub phone: Option<Secret<String>>,
    pub email: Option<Email>,
    pub line1: Option<Secret<String>>,
    pub line2: Option<Secret<String>>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub zip_code: Option<Secret<String>>,
    pub country_code: Option<String>,
    pub shipping_type: Option<ShippingType>,
}

#[derive(Debug, Clone, Default)]
pub struct BillingAddress {
    pub line1: Option<Secret<String>>,
    pub line2: Option<Secret<String>>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub zip_code: Option<Secret<String>>,
    pub country_code: Option<String>,
}

#[derive(Debug, Clone, Default)]
pub struct Buyer {
    pub first_name: Option<Secret<String>>,
    pub middle_name: Option<Secret<String>>,
    pub last_name: Option<Secret<String>>,
    pub birthday: Option<Secret<String>>,
    pub customer_since: Option<String>,
    pub sex: Option<String>,
    pub contact: Option<Contact>,
    pub shipping_address: Option<ShippingAddress>,
    pub billing_address: Option<BillingAddress>,
}

#[derive(Debug, Clone)]
pub struct CheckoutInfo {
    pub total_amount: TotalAmount,
    pub buyer: Option<Buyer>,
    pub items: Vec<CheckoutItem>,
    pub redirect_urls: RedirectUrlSet,
    pub request_reference_number: String,
    pub metadata: HashMap<String, String>,
}

impl CheckoutInfo {
    /// Checkout with a generated reference number and no buyer details.
    pub fn new(
        total_amount: TotalAmount,
        items: Vec<CheckoutItem>,
        redirect_urls: RedirectUrlSet,
    ) -> Self {
        Self {
            total_amount,
            buyer: None,
            items,
            redirect_urls,
            request_reference_number: generate_reference_number(),
            metadata: HashMap::new(),
        }
    }

    pub fn with_buyer(mut self, buyer: Buyer) -> Self {
        self.buyer = Some(buyer);
        self
    }

    pub fn with_reference_number(mut self, reference_number: impl Into<String>) -> Self {
        self.request_reference_number = reference_number.into();
        self
    }

    pub fn with_metadata(mut self, metadata: HashMap<String, String>) -> Self {
        self.metadata = metadata;
        self
    }
}

#[derive(Debug, Clone)]
pub struct SinglePaymentInfo {
    pub total_amount: TotalAmount,
    pub redirect_urls: RedirectUrlSet,
    pub request_reference_number: String,
    pub metadata: HashMap<String, String>,
}

impl SinglePaymentInfo {
    pub fn new(total_amount: TotalAmount, redirect_urls: RedirectUrlSet) -> Self {
        Self {
            total_amount,
            redirect_urls,
            request_reference_number: generate_reference_number(),
            metadata: HashMap::new(),
        }
    }

    pub fn with_reference_number(mut self, reference_number: impl Into<String>) -> Self {
        self.request_reference_number = reference_number.into();
        self
    }

    pub fn with_metadata(mut self, metadata: HashMap<String, String>) -> Self {
        self.metadata = metadata;
        self
    }
}

#[derive(Debug, Clone)]
pub struct WalletLinkInfo {
    pub redirect_urls: RedirectUrlSet,
    pub request_reference_number: String,
    pub metadata: HashMap<String, String>,
}

impl WalletLinkInfo {
    pub fn new(redirect_urls: RedirectUrlSet) -> Self {
        Self {
            redirect_urls,
            request_reference_number: generate_reference_number(),
            metadata: HashMap::new(),
        }
    }

    pub fn with_reference_number(mut self, reference_number: impl Into<String>) -> Self {
        self.request_reference_number = reference_number.into();
        self
    }

    pub fn with_metadata(mut self, metadata: HashMap<String, String>) -> Self {
        self.metadata = metadata;
        self
    }
}

/// Card fields as typed by the user, before validation.
#[derive(Debug, Clone)]
pub struct RawCardInput {
    pub number: Secret<String>,
    /// `MM/YY`
    pub expiry: Secret<String>,
    pub cvc: Secret<String>,
}

impl RawCardInput {
    pub fn new(
        number: impl Into<String>,
        expiry: impl Into<String>,
        cvc: impl Into<String>,
    ) -> Self {
        Self {
            number: Secret::new(number.into()),
            expiry: Secret::new(expiry.into()),
            cvc: Secret::new(cvc.into()),
        }
    }
}

/// Validated card data, held only for one tokenization call.
#[derive(Debug)]
pub struct CardDetails {
    pub number: CardNumber,
    pub expiration: CardExpiration,
    pub cvc: CardSecurityCode,
}

impl TryFrom<&RawCardInput> for CardDetails {
    type Error = Vec<CardValidationError>;

    fn try_from(input: &RawCardInput) -> Result<Self, Self::Error> {
        let number = input.number.peek().parse::<CardNumber>();
        let expiration = CardExpiration::from_mm_yy(input.expiry.peek());
        let cvc = CardSecurityCode::new(input.cvc.peek());

        match (number, expiration, cvc) {
            (Ok(number), Ok(expiration), Ok(cvc)) => Ok(Self {
                number,
                expiration,
                cvc,
            }),
            (number, expiration, cvc) => Err([number.err(), expiration.err(), cvc.err()]
                .into_iter()
                .flatten()
                .collect()),
        }
    }
}

/// Lookup of a transaction created by one of the redirect flows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaymentSyncData {
    pub transaction_id: String,
}

/// A gateway transaction completed by a redirect through the gateway's web pages.
pub trait RedirectTransaction {
    /// Flow marker of the create call.
    type Flow;

    fn flow_name(&self) -> FlowName;

    fn auth_method(&self) -> AuthMethod;

    fn redirect_urls(&self) -> &RedirectUrlSet;
}

impl RedirectTransaction for CheckoutInfo {
    type Flow = CreateCheckout;

    fn flow_name(&self) -> FlowName {
        FlowName::Checkout
    }

    fn auth_method(&self) -> AuthMethod {
        AuthMethod::Checkout
    }

    fn redirect_urls(&self) -> &RedirectUrlSet {
        &self.redirect_urls
    }
}

impl RedirectTransaction for SinglePaymentInfo {
    type Flow = CreateSinglePayment;

    fn flow_name(&self) -> FlowName {
        FlowName::SinglePayment
    }

    fn auth_method(&self) -> AuthMethod {
        AuthMethod::Payments
    }

    fn redirect_urls(&self) -> &RedirectUrlSet {
        &self.redirect_urls
    }
}

impl RedirectTransaction for WalletLinkInfo {
    type Flow = CreateWalletLink;

    fn flow_name(&self) -> FlowName {
        FlowName::WalletLink
    }

    fn auth_method(&self) -> AuthMethod {
        AuthMethod::Payments
    }

    fn redirect_urls(&self) -> &RedirectUrlSet {
        &self.redirect_urls
    }
}
