use hyperswitch_masking::Secret;
use serde::{Deserialize, Serialize};

/// Merchant key registered for one [`common_enums::AuthMethod`].
#[derive(Clone, Debug, Deserialize)]
#[serde(transparent)]
pub struct AuthenticationCredential {
    pub api_key: Secret<String>,
}

impl AuthenticationCredential {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: Secret::new(api_key.into()),
        }
    }
}

impl From<Secret<String>> for AuthenticationCredential {
    fn from(api_key: Secret<String>) -> Self {
        Self { api_key }
    }
}

/// Field level detail attached to a gateway error.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorParameter {
    pub field: Option<String>,
    pub description: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ErrorResponse {
    pub status_code: u16,
    pub code: String,
    pub message: String,
    pub parameters: Vec<ErrorParameter>,
}
