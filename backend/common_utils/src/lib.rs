//! Common utilities for the PayMaya SDK crates

pub mod consts;
pub mod errors;
pub mod ext_traits;
pub mod pii;
pub mod request;
pub mod types;

pub use errors::{CustomResult, ParsingError, ValidationError};
pub use pii::Email;
pub use request::{Method, Request, RequestBuilder, RequestContent};
pub use types::FloatMajorUnit;

/// Generate a fresh request reference number (UUID v4, hyphenated, uppercase).
pub fn generate_reference_number() -> String {
    uuid::Uuid::new_v4().hyphenated().to_string().to_uppercase()
}
