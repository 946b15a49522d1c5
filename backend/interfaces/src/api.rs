use common_utils::errors::CustomResult;
use domain_types::{
    errors::ConnectorError,
    router_data::{AuthenticationCredential, ErrorResponse},
    router_response_types::Response,
    types::Connectors,
};
use hyperswitch_masking::Maskable;

/// Behaviour shared by every flow of a gateway connector.
pub trait ConnectorCommon {
    /// Name of the connector, used in logs.
    fn id(&self) -> &'static str;

    fn common_get_content_type(&self) -> &'static str {
        "application/json"
    }

    fn base_url<'a>(&self, connectors: &'a Connectors) -> &'a str;

    fn get_auth_header(
        &self,
        auth: &AuthenticationCredential,
    ) -> CustomResult<Vec<(String, Maskable<String>)>, ConnectorError>;

    /// Parse a gateway error body into an [`ErrorResponse`].
    fn build_error_response(&self, res: Response) -> CustomResult<ErrorResponse, ConnectorError>;
}
