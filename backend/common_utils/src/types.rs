//! Types that can be used in other crates

use serde::{Deserialize, Serialize};

/// Amount in the currency's major unit, as the gateway expects it on the wire.
#[derive(Default, Debug, Serialize, Deserialize, Clone, Copy, PartialEq, PartialOrd)]
#[serde(transparent)]
pub struct FloatMajorUnit(f64);

impl FloatMajorUnit {
    pub fn new(value: f64) -> Self {
        Self(value)
    }
}

impl From<f64> for FloatMajorUnit {
    fn from(value: f64) -> Self {
        Self(value)
    }
}

impl std::fmt::Display for FloatMajorUnit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
