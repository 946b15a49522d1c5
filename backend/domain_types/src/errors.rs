use common_enums::AuthMethod;
use common_utils::errors::ErrorSwitch;

use crate::router_data::{ErrorParameter, ErrorResponse};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ApiClientError {
    #[error("Header map construction failed")]
    HeaderMapConstructionFailed,
    #[error("Invalid proxy configuration")]
    InvalidProxyConfiguration,
    #[error("Client construction failed")]
    ClientConstructionFailed,
    #[error("URL encoding of request failed")]
    UrlEncodingFailed,
    #[error("Failed to send request to gateway {0}")]
    RequestNotSent(String),
    #[error("Failed to decode response")]
    ResponseDecodingFailed,
    #[error("Server responded with Request Timeout")]
    RequestTimeoutReceived,
    #[error("Unexpected state reached/Invariants conflicted")]
    UnexpectedState,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConnectorError {
    #[error("Failed to obtain integration url")]
    FailedToObtainIntegrationUrl,
    #[error("Failed to encode connector request")]
    RequestEncodingFailed,
    #[error("Failed to deserialize connector response")]
    ResponseDeserializationFailed,
    #[error("Failed to execute a processing step: {0:?}")]
    ProcessingStepFailed(Option<String>),
    #[error("{message}")]
    FailedAtConnector {
        status_code: u16,
        code: String,
        message: String,
        parameters: Vec<ErrorParameter>,
    },
}

impl From<ErrorResponse> for ConnectorError {
    fn from(response: ErrorResponse) -> Self {
        Self::FailedAtConnector {
            status_code: response.status_code,
            code: response.code,
            message: response.message,
            parameters: response.parameters,
        }
    }
}

/// Failure delivered to the caller of a flow.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FlowError {
    /// No key registered for the auth method the flow needs. Raised before any network call.
    #[error("No authentication key registered for {method}")]
    Authentication { method: AuthMethod },
    /// No interpretable response was received.
    #[error("Request could not be completed: {message}")]
    Transport { message: String },
    /// The gateway answered with a structured error.
    #[error("Gateway error {code} (HTTP {status_code}): {message}")]
    Gateway {
        status_code: u16,
        code: String,
        message: String,
        parameters: Vec<ErrorParameter>,
    },
    /// The web surface could not load a page.
    #[error("Navigation failed: {message}")]
    Navigation { url: Option<String>, message: String },
    /// The response did not match the expected shape.
    #[error("Unexpected response: {message}")]
    Decoding { message: String },
}

impl ErrorSwitch<FlowError> for ApiClientError {
    fn switch(&self) -> FlowError {
        FlowError::Transport {
            message: self.to_string(),
        }
    }
}

impl ErrorSwitch<FlowError> for ConnectorError {
    fn switch(&self) -> FlowError {
        match self {
            Self::FailedToObtainIntegrationUrl
            | Self::RequestEncodingFailed
            | Self::ProcessingStepFailed(_) => FlowError::Transport {
                message: self.to_string(),
            },
            Self::ResponseDeserializationFailed => FlowError::Decoding {
                message: self.to_string(),
            },
            Self::FailedAtConnector {
                status_code,
                code,
                message,
                parameters,
            } => FlowError::Gateway {
                status_code: *status_code,
                code: code.clone(),
                message: message.clone(),
                parameters: parameters.clone(),
            },
        }
    }
}
