use common_utils::{
    errors::CustomResult,
    request::{Method, Request, RequestBuilder, RequestContent},
};
use domain_types::{
    errors::ConnectorError,
    router_data::{AuthenticationCredential, ErrorResponse},
    router_response_types::Response,
    types::Connectors,
};
use hyperswitch_masking::Maskable;

use crate::api::ConnectorCommon;

/// Request building and response handling of one gateway flow.
///
/// `Flow` is a marker from [`domain_types::connector_flow`], `Req` the domain
/// request and `Resp` the domain response of the flow.
pub trait ConnectorIntegration<Flow, Req, Resp>: ConnectorCommon + Send + Sync {
    fn get_headers(
        &self,
        _req: &Req,
        _auth: &AuthenticationCredential,
    ) -> CustomResult<Vec<(String, Maskable<String>)>, ConnectorError> {
        Ok(vec![])
    }

    fn get_http_method(&self) -> Method {
        Method::Post
    }

    fn get_url(&self, req: &Req, connectors: &Connectors) -> CustomResult<String, ConnectorError>;

    fn get_request_body(&self, _req: &Req) -> CustomResult<Option<RequestContent>, ConnectorError> {
        Ok(None)
    }

    fn build_request(
        &self,
        req: &Req,
        auth: &AuthenticationCredential,
        connectors: &Connectors,
    ) -> CustomResult<Request, ConnectorError> {
        Ok(RequestBuilder::new()
            .method(self.get_http_method())
            .url(&self.get_url(req, connectors)?)
            .attach_default_headers()
            .headers(self.get_headers(req, auth)?)
            .set_optional_body(self.get_request_body(req)?)
            .build())
    }

    /// Interpret a 2xx response.
    fn handle_response(&self, req: &Req, res: Response) -> CustomResult<Resp, ConnectorError>;

    /// Interpret a non-2xx response.
    fn get_error_response(&self, res: Response) -> CustomResult<ErrorResponse, ConnectorError> {
        self.build_error_response(res)
    }
}
