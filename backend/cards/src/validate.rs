use std::{fmt, ops::Deref, str::FromStr};

use hyperswitch_masking::{PeekInterface, Strategy, StrongSecret, WithType};
use serde::{Deserialize, Deserializer, Serialize};
use thiserror::Error;

/// Reasons a card entry is rejected before it reaches the gateway.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CardValidationError {
    #[error("Card Number is required")]
    NumberRequired,
    #[error("Invalid credit card format")]
    InvalidNumber,
    #[error("Expiry Date is required")]
    ExpiryRequired,
    #[error("Invalid expiry date format")]
    InvalidExpiry,
    #[error("Card is already expired")]
    Expired,
    #[error("CVC is required")]
    CvcRequired,
    #[error("Invalid CVC format")]
    InvalidCvc,
}

const MIN_CARD_NUMBER_LENGTH: usize = 12;
const MAX_CARD_NUMBER_LENGTH: usize = 19;

/// Card number
#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub struct CardNumber(StrongSecret<String, CardNumberStrategy>);

impl CardNumber {
    pub fn get_last4(&self) -> String {
        let number = self.0.peek();
        number
            .get(number.len().saturating_sub(4)..)
            .unwrap_or_default()
            .to_string()
    }
}

impl FromStr for CardNumber {
    type Err = CardValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.is_empty() {
            return Err(CardValidationError::NumberRequired);
        }
        let number: String = s.chars().filter(|c| *c != ' ').collect();
        let valid_length = (MIN_CARD_NUMBER_LENGTH..=MAX_CARD_NUMBER_LENGTH).contains(&number.len());

        if valid_length && number.chars().all(|c| c.is_ascii_digit()) && luhn(&number) {
            Ok(Self(StrongSecret::new(number)))
        } else {
            Err(CardValidationError::InvalidNumber)
        }
    }
}

impl TryFrom<String> for CardNumber {
    type Error = CardValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::from_str(&value)
    }
}

impl Deref for CardNumber {
    type Target = StrongSecret<String, CardNumberStrategy>;

    fn deref(&self) -> &StrongSecret<String, CardNumberStrategy> {
        &self.0
    }
}

impl<'de> Deserialize<'de> for CardNumber {
    fn deserialize<D: Deserializer<'de>>(d: D) -> Result<Self, D::Error> {
        let s = String::deserialize(d)?;
        Self::from_str(&s).map_err(serde::de::Error::custom)
    }
}

/// Luhn checksum over a string of ascii digits.
pub fn luhn(number: &str) -> bool {
    let mut sum = 0u32;
    for (idx, c) in number.chars().rev().enumerate() {
        let Some(digit) = c.to_digit(10) else {
            return false;
        };
        sum += match (idx % 2 == 1, digit) {
            (true, 9) => 9,
            (true, d) => (d * 2) % 9,
            (false, d) => d,
        };
    }
    sum % 10 == 0
}

pub enum CardNumberStrategy {}

impl<T> Strategy<T> for CardNumberStrategy
where
    T: AsRef<str>,
{
    fn fmt(val: &T, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let val_str: &str = val.as_ref();

        if val_str.len() < 15 || val_str.len() > 19 {
            return WithType::fmt(val, f);
        }

        if let Some(value) = val_str.get(..6) {
            write!(f, "{}{}", value, "*".repeat(val_str.len() - 6))
        } else {
            WithType::fmt(val, f)
        }
    }
}
