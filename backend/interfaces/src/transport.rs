use common_utils::{errors::CustomResult, request::Request};
use domain_types::{errors::ApiClientError, router_response_types::Response};

/// The seam between the flows and real networking.
///
/// One call is one attempt; implementations never retry. `Ok(Ok(_))` carries a
/// 2xx answer, `Ok(Err(_))` any other answer the server gave, and `Err(_)` means
/// no interpretable response was received.
#[async_trait::async_trait]
pub trait Transport: Send + Sync {
    async fn send(
        &self,
        request: Request,
    ) -> CustomResult<Result<Response, Response>, ApiClientError>;
}
