pub mod validate;

use hyperswitch_masking::{PeekInterface, StrongSecret};
use once_cell::sync::Lazy;
use regex::Regex;
use time::OffsetDateTime;
pub use validate::{CardNumber, CardValidationError};

#[allow(clippy::expect_used)]
static EXPIRY_FORMAT: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(\d{2})/(\d{2})$").expect("expiry pattern compiles"));

pub struct CardSecurityCode(StrongSecret<String>);

impl CardSecurityCode {
    pub fn new(cvc: &str) -> Result<Self, CardValidationError> {
        if cvc.is_empty() {
            return Err(CardValidationError::CvcRequired);
        }
        if (3..=4).contains(&cvc.len()) && cvc.chars().all(|c| c.is_ascii_digit()) {
            Ok(Self(StrongSecret::new(cvc.to_string())))
        } else {
            Err(CardValidationError::InvalidCvc)
        }
    }
}

impl PeekInterface<String> for CardSecurityCode {
    fn peek(&self) -> &String {
        self.0.peek()
    }
}

impl std::fmt::Debug for CardSecurityCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("CardSecurityCode").field(&self.0).finish()
    }
}

#[derive(Debug)]
pub struct CardExpirationMonth(StrongSecret<u8>);

impl CardExpirationMonth {
    pub fn new(month: u8) -> Result<Self, CardValidationError> {
        if (1..=12).contains(&month) {
            Ok(Self(StrongSecret::new(month)))
        } else {
            Err(CardValidationError::InvalidExpiry)
        }
    }

    pub fn two_digits(&self) -> String {
        format!("{:02}", self.0.peek())
    }
}

#[derive(Debug)]
pub struct CardExpirationYear(StrongSecret<u16>);

impl CardExpirationYear {
    pub fn new(year: u16) -> Result<Self, CardValidationError> {
        if (2000..=2099).contains(&year) {
            Ok(Self(StrongSecret::new(year)))
        } else {
            Err(CardValidationError::InvalidExpiry)
        }
    }

    pub fn four_digits(&self) -> String {
        self.0.peek().to_string()
    }
}

#[derive(Debug)]
pub struct CardExpiration {
    pub month: CardExpirationMonth,
    pub year: CardExpirationYear,
}

impl CardExpiration {
    /// Validated expiry, rejected when it lies before the current month.
    pub fn new(month: u8, year: u16) -> Result<Self, CardValidationError> {
        let expiration = Self {
            month: CardExpirationMonth::new(month)?,
            year: CardExpirationYear::new(year)?,
        };
        if expiration.is_expired_at(local_now()) {
            return Err(CardValidationError::Expired);
        }
        Ok(expiration)
    }

    /// Parses the `MM/YY` form shown on the card.
    pub fn from_mm_yy(input: &str) -> Result<Self, CardValidationError> {
        if input.is_empty() {
            return Err(CardValidationError::ExpiryRequired);
        }
        let captures = EXPIRY_FORMAT
            .captures(input)
            .ok_or(CardValidationError::InvalidExpiry)?;
        let month = captures[1]
            .parse::<u8>()
            .map_err(|_| CardValidationError::InvalidExpiry)?;
        let year = captures[2]
            .parse::<u16>()
            .map_err(|_| CardValidationError::InvalidExpiry)?;
        Self::new(month, 2000 + year)
    }

    /// Compares against the calendar month of `now` in its own offset.
    pub fn is_expired_at(&self, now: OffsetDateTime) -> bool {
        let year = i32::from(*self.year.0.peek());
        let current_month = u8::from(now.month());
        (year, *self.month.0.peek()) < (now.year(), current_month)
    }

    pub fn get_month(&self) -> &CardExpirationMonth {
        &self.month
    }

    pub fn get_year(&self) -> &CardExpirationYear {
        &self.year
    }
}

/// Wall clock of the cardholder's device. UTC when the local offset cannot be determined,
/// which `time` reports for multi-threaded processes on some unix targets.
fn local_now() -> OffsetDateTime {
    OffsetDateTime::now_local().unwrap_or_else(|_| OffsetDateTime::now_utc())
}
