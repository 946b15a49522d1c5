use std::collections::HashMap;

use common_enums::AuthMethod;
use domain_types::{errors::FlowError, router_data::AuthenticationCredential};

use crate::configs::Credentials;

/// Merchant keys of a client, one per [`AuthMethod`].
#[derive(Debug, Clone, Default)]
pub struct CredentialStore {
    keys: HashMap<AuthMethod, AuthenticationCredential>,
}

impl CredentialStore {
    pub fn from_config(credentials: &Credentials) -> Self {
        Self {
            keys: credentials
                .entries()
                .map(|(method, key)| (method, AuthenticationCredential::from(key)))
                .collect(),
        }
    }

    /// Register `key` for `method`, replacing any earlier key.
    pub fn insert(&mut self, method: AuthMethod, key: impl Into<String>) {
        self.keys
            .insert(method, AuthenticationCredential::new(key));
    }

    pub fn get(&self, method: AuthMethod) -> Result<&AuthenticationCredential, FlowError> {
        self.keys.get(&method).ok_or_else(|| {
            tracing::warn!(%method, "no authentication key registered");
            FlowError::Authentication { method }
        })
    }

    pub fn contains(&self, method: AuthMethod) -> bool {
        self.keys.contains_key(&method)
    }
}
