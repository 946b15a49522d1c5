pub mod transformers;

use base64::Engine;
use common_utils::{
    errors::CustomResult,
    ext_traits::ByteSliceExt,
    request::{Method, RequestContent},
};
use domain_types::{
    connector_flow::{
        CreateCheckout, CreatePaymentToken, CreateSinglePayment, CreateWalletLink, PSync,
    },
    errors::ConnectorError,
    router_data::{AuthenticationCredential, ErrorResponse},
    router_request_types::{
        CardDetails, CheckoutInfo, PaymentSyncData, SinglePaymentInfo, WalletLinkInfo,
    },
    router_response_types::{
        CreateTransactionResponse, PaymentStatusResponse, PaymentTokenResponse, Response,
    },
    types::Connectors,
};
use error_stack::{report, ResultExt};
use hyperswitch_masking::{Mask, Maskable, PeekInterface};
use interfaces::{
    api::ConnectorCommon,
    connector_integration::ConnectorIntegration,
    connector_types::{self, ConnectorServiceTrait},
};
use serde::de::DeserializeOwned;
use transformers::{self as paymaya, PaymayaErrorResponse};

pub const BASE64_ENGINE: base64::engine::GeneralPurpose = base64::engine::general_purpose::STANDARD;

pub(crate) mod headers {
    pub(crate) const CONTENT_TYPE: &str = "Content-Type";
    pub(crate) const AUTHORIZATION: &str = "Authorization";
}

#[derive(Clone, Debug)]
pub struct Paymaya;

impl Paymaya {
    pub const fn new() -> &'static Self {
        &Self
    }

    fn build_headers(
        &self,
        auth: &AuthenticationCredential,
    ) -> CustomResult<Vec<(String, Maskable<String>)>, ConnectorError> {
        let mut header = vec![(
            headers::CONTENT_TYPE.to_string(),
            self.common_get_content_type().to_string().into(),
        )];
        let mut auth_header = self.get_auth_header(auth)?;
        header.append(&mut auth_header);
        Ok(header)
    }

    fn endpoint(&self, connectors: &Connectors, path: &str) -> CustomResult<String, ConnectorError> {
        let base_url = self.base_url(connectors).trim_end_matches('/');
        if base_url.is_empty() {
            return Err(report!(ConnectorError::FailedToObtainIntegrationUrl))
                .attach_printable("paymaya base url is not configured");
        }
        Ok(format!("{base_url}{path}"))
    }

    /// Parse a 2xx body. A body carrying the gateway error shape is reported as a
    /// gateway failure, anything else unreadable as a decoding failure.
    fn handle_success_body<T, R>(
        &self,
        res: &Response,
        type_name: &'static str,
    ) -> CustomResult<R, ConnectorError>
    where
        T: DeserializeOwned,
        R: From<T>,
    {
        match res.response.parse_struct::<T>(type_name) {
            Ok(parsed) => Ok(R::from(parsed)),
            Err(parse_error) => match res
                .response
                .parse_struct::<PaymayaErrorResponse>("PaymayaErrorResponse")
            {
                Ok(error) if error.is_error_shape() => Err(report!(ConnectorError::from(
                    error.into_error_response(res.status_code)
                ))),
                _ => Err(parse_error.change_context(ConnectorError::ResponseDeserializationFailed)),
            },
        }
    }
}

impl ConnectorServiceTrait for Paymaya {}
impl connector_types::CheckoutCreate for Paymaya {}
impl connector_types::SinglePaymentCreate for Paymaya {}
impl connector_types::WalletLinkCreate for Paymaya {}
impl connector_types::PaymentTokenCreate for Paymaya {}
impl connector_types::PaymentSync for Paymaya {}

impl ConnectorCommon for Paymaya {
    fn id(&self) -> &'static str {
        "paymaya"
    }

    fn base_url<'a>(&self, connectors: &'a Connectors) -> &'a str {
        connectors.paymaya.base_url.as_ref()
    }

    fn get_auth_header(
        &self,
        auth: &AuthenticationCredential,
    ) -> CustomResult<Vec<(String, Maskable<String>)>, ConnectorError> {
        let auth = paymaya::PaymayaAuthType::from(auth);
        // the key is the basic auth user name with an empty password
        let encoded_api_key = BASE64_ENGINE.encode(format!("{}:", auth.api_key.peek()));
        Ok(vec![(
            headers::AUTHORIZATION.to_string(),
            format!("Basic {encoded_api_key}").into_masked(),
        )])
    }

    fn build_error_response(&self, res: Response) -> CustomResult<ErrorResponse, ConnectorError> {
        let response: PaymayaErrorResponse = res
            .response
            .parse_struct("PaymayaErrorResponse")
            .change_context(ConnectorError::ResponseDeserializationFailed)?;

        tracing::info!(connector_response = ?response, "paymaya error response");

        Ok(response.into_error_response(res.status_code))
    }
}

impl ConnectorIntegration<CreateCheckout, CheckoutInfo, CreateTransactionResponse> for Paymaya {
    fn get_headers(
        &self,
        _req: &CheckoutInfo,
        auth: &AuthenticationCredential,
    ) -> CustomResult<Vec<(String, Maskable<String>)>, ConnectorError> {
        self.build_headers(auth)
    }

    fn get_url(
        &self,
        _req: &CheckoutInfo,
        connectors: &Connectors,
    ) -> CustomResult<String, ConnectorError> {
        self.endpoint(connectors, "/checkout/v1/checkouts")
    }

    fn get_request_body(
        &self,
        req: &CheckoutInfo,
    ) -> CustomResult<Option<RequestContent>, ConnectorError> {
        let connector_req = paymaya::PaymayaCheckoutRequest::from(req);
        Ok(Some(RequestContent::Json(Box::new(connector_req))))
    }

    fn handle_response(
        &self,
        _req: &CheckoutInfo,
        res: Response,
    ) -> CustomResult<CreateTransactionResponse, ConnectorError> {
        self.handle_success_body::<paymaya::PaymayaCheckoutResponse, _>(
            &res,
            "PaymayaCheckoutResponse",
        )
    }
}

impl ConnectorIntegration<CreateSinglePayment, SinglePaymentInfo, CreateTransactionResponse>
    for Paymaya
{
    fn get_headers(
        &self,
        _req: &SinglePaymentInfo,
        auth: &AuthenticationCredential,
    ) -> CustomResult<Vec<(String, Maskable<String>)>, ConnectorError> {
        self.build_headers(auth)
    }

    fn get_url(
        &self,
        _req: &SinglePaymentInfo,
        connectors: &Connectors,
    ) -> CustomResult<String, ConnectorError> {
        self.endpoint(connectors, "/payby/v2/paymaya/payments")
    }

    fn get_request_body(
        &self,
        req: &SinglePaymentInfo,
    ) -> CustomResult<Option<RequestContent>, ConnectorError> {
        let connector_req = paymaya::PaymayaSinglePaymentRequest::from(req);
        Ok(Some(RequestContent::Json(Box::new(connector_req))))
    }

    fn handle_response(
        &self,
        _req: &SinglePaymentInfo,
        res: Response,
    ) -> CustomResult<CreateTransactionResponse, ConnectorError> {
        self.handle_success_body::<paymaya::PaymayaSinglePaymentResponse, _>(
            &res,
            "PaymayaSinglePaymentResponse",
        )
    }
}

impl ConnectorIntegration<CreateWalletLink, WalletLinkInfo, CreateTransactionResponse>
    for Paymaya
{
    fn get_headers(
        &self,
        _req: &WalletLinkInfo,
        auth: &AuthenticationCredential,
    ) -> CustomResult<Vec<(String, Maskable<String>)>, ConnectorError> {
        self.build_headers(auth)
    }

    fn get_url(
        &self,
        _req: &WalletLinkInfo,
        connectors: &Connectors,
    ) -> CustomResult<String, ConnectorError> {
        self.endpoint(connectors, "/payby/v2/paymaya/link")
    }

    fn get_request_body(
        &self,
        req: &WalletLinkInfo,
    ) -> CustomResult<Option<RequestContent>, ConnectorError> {
        let connector_req = paymaya::PaymayaWalletLinkRequest::from(req);
        Ok(Some(RequestContent::Json(Box::new(connector_req))))
    }

    fn handle_response(
        &self,
        _req: &WalletLinkInfo,
        res: Response,
    ) -> CustomResult<CreateTransactionResponse, ConnectorError> {
        self.handle_success_body::<paymaya::PaymayaWalletLinkResponse, _>(
            &res,
            "PaymayaWalletLinkResponse",
        )
    }
}

impl ConnectorIntegration<CreatePaymentToken, CardDetails, PaymentTokenResponse> for Paymaya {
    fn get_headers(
        &self,
        _req: &CardDetails,
        auth: &AuthenticationCredential,
    ) -> CustomResult<Vec<(String, Maskable<String>)>, ConnectorError> {
        self.build_headers(auth)
    }

    fn get_url(
        &self,
        _req: &CardDetails,
        connectors: &Connectors,
    ) -> CustomResult<String, ConnectorError> {
        self.endpoint(connectors, "/payments/v1/payment-tokens")
    }

    fn get_request_body(
        &self,
        req: &CardDetails,
    ) -> CustomResult<Option<RequestContent>, ConnectorError> {
        let connector_req = paymaya::PaymayaPaymentTokenRequest::from(req);
        Ok(Some(RequestContent::Json(Box::new(connector_req))))
    }

    fn handle_response(
        &self,
        _req: &CardDetails,
        res: Response,
    ) -> CustomResult<PaymentTokenResponse, ConnectorError> {
        self.handle_success_body::<paymaya::PaymayaPaymentTokenResponse, _>(
            &res,
            "PaymayaPaymentTokenResponse",
        )
    }
}

impl ConnectorIntegration<PSync, PaymentSyncData, PaymentStatusResponse> for Paymaya {
    fn get_headers(
        &self,
        _req: &PaymentSyncData,
        auth: &AuthenticationCredential,
    ) -> CustomResult<Vec<(String, Maskable<String>)>, ConnectorError> {
        self.build_headers(auth)
    }

    fn get_http_method(&self) -> Method {
        Method::Get
    }

    fn get_url(
        &self,
        req: &PaymentSyncData,
        connectors: &Connectors,
    ) -> CustomResult<String, ConnectorError> {
        if matches!(req.transaction_id.as_str(), "" | "." | "..") {
            return Err(report!(ConnectorError::ProcessingStepFailed(Some(format!(
                "invalid transaction id {:?}",
                req.transaction_id
            )))));
        }
        let endpoint = self.endpoint(connectors, "/payments/v1/payments")?;
        let mut url = url::Url::parse(&endpoint)
            .change_context(ConnectorError::FailedToObtainIntegrationUrl)?;
        // The id is caller input: push it as a single, percent-encoded segment.
        url.path_segments_mut()
            .map_err(|()| report!(ConnectorError::FailedToObtainIntegrationUrl))?
            .push(&req.transaction_id)
            .push("status");
        Ok(url.into())
    }

    fn handle_response(
        &self,
        _req: &PaymentSyncData,
        res: Response,
    ) -> CustomResult<PaymentStatusResponse, ConnectorError> {
        self.handle_success_body::<paymaya::PaymayaStatusResponse, _>(
            &res,
            "PaymayaStatusResponse",
        )
    }
}
