use common_enums::RedirectOutcome;
use common_utils::errors::{CustomResult, ValidationError};
use error_stack::report;
use serde::{Deserialize, Serialize};

const SECURE_SCHEME_PREFIX: &str = "https://";

/// The three merchant urls the gateway navigates to when a redirect flow ends.
///
/// Urls are kept exactly as supplied; classification compares strings without
/// any normalization.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawRedirectUrlSet")]
pub struct RedirectUrlSet {
    success: String,
    failure: String,
    cancel: String,
}

#[derive(Deserialize)]
struct RawRedirectUrlSet {
    success: String,
    failure: String,
    cancel: String,
}

impl TryFrom<RawRedirectUrlSet> for RedirectUrlSet {
    type Error = error_stack::Report<ValidationError>;

    fn try_from(raw: RawRedirectUrlSet) -> Result<Self, Self::Error> {
        Self::new(raw.success, raw.failure, raw.cancel)
    }
}

impl RedirectUrlSet {
    pub fn new(
        success: impl Into<String>,
        failure: impl Into<String>,
        cancel: impl Into<String>,
    ) -> CustomResult<Self, ValidationError> {
        let success = success.into();
        let failure = failure.into();
        let cancel = cancel.into();

        ensure_secure(&success, "success")?;
        ensure_secure(&failure, "failure")?;
        ensure_secure(&cancel, "cancel")?;

        Ok(Self {
            success,
            failure,
            cancel,
        })
    }

    pub fn success(&self) -> &str {
        &self.success
    }

    pub fn failure(&self) -> &str {
        &self.failure
    }

    pub fn cancel(&self) -> &str {
        &self.cancel
    }

    /// Terminal bucket of an observed url, checked in success, failure, cancel order.
    /// `None` means an intermediate hop.
    pub fn classify(&self, observed: &str) -> Option<RedirectOutcome> {
        if observed == self.success {
            Some(RedirectOutcome::Success)
        } else if observed == self.failure {
            Some(RedirectOutcome::Failure)
        } else if observed == self.cancel {
            Some(RedirectOutcome::Cancel)
        } else {
            None
        }
    }

    pub fn url_for(&self, outcome: RedirectOutcome) -> &str {
        match outcome {
            RedirectOutcome::Success => &self.success,
            RedirectOutcome::Failure => &self.failure,
            RedirectOutcome::Cancel => &self.cancel,
        }
    }
}

fn ensure_secure(value: &str, field_name: &'static str) -> CustomResult<(), ValidationError> {
    let parsed = url::Url::parse(value).map_err(|error| {
        report!(ValidationError::IncorrectValueProvided { field_name })
            .attach_printable(format!("redirect url is not absolute: {error}"))
    })?;

    if parsed.scheme() != "https" || !value.starts_with(SECURE_SCHEME_PREFIX) {
        return Err(report!(ValidationError::IncorrectValueProvided { field_name })
            .attach_printable("redirect url must use https"));
    }
    Ok(())
}
