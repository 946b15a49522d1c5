#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

use std::time::Duration;

use common_utils::request::{Method, RequestBuilder, RequestContent};
use domain_types::{
    errors::ApiClientError,
    types::{HttpClientConfig, Proxy},
};
use external_services::HttpTransport;
use interfaces::transport::Transport;
use serde_json::json;
use wiremock::{
    matchers::{body_json, header, method, path},
    Mock, MockServer, ResponseTemplate,
};

#[tokio::test]
async fn posts_json_body_with_headers() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/checkout/v1/checkouts"))
        .and(header("authorization", "Basic cGs6"))
        .and(header("accept", "application/json"))
        .and(body_json(json!({"requestReferenceNumber": "R1"})))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({"checkoutId": "T1", "redirectUrl": "https://g/T1"})),
        )
        .expect(1)
        .mount(&server)
        .await;

    let request = RequestBuilder::new()
        .method(Method::Post)
        .url(&format!("{}/checkout/v1/checkouts", server.uri()))
        .attach_default_headers()
        .header("Authorization", "Basic cGs6")
        .set_body(RequestContent::Json(Box::new(
            json!({"requestReferenceNumber": "R1"}),
        )))
        .build();

    let response = HttpTransport::default()
        .send(request)
        .await
        .unwrap()
        .expect("2xx response");

    assert_eq!(response.status_code, 200);
    let body: serde_json::Value = serde_json::from_slice(&response.response).unwrap();
    assert_eq!(body["checkoutId"], "T1");
}

#[tokio::test]
async fn non_success_status_is_returned_as_error_response() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/payments/v1/payments/T1/status"))
        .respond_with(
            ResponseTemplate::new(401).set_body_json(json!({"code": "K003", "message": "Unauthorized"})),
        )
        .mount(&server)
        .await;

    let request = RequestBuilder::new()
        .method(Method::Get)
        .url(&format!("{}/payments/v1/payments/T1/status", server.uri()))
        .build();

    let response = HttpTransport::default()
        .send(request)
        .await
        .unwrap()
        .expect_err("non 2xx response");

    assert_eq!(response.status_code, 401);
}

#[tokio::test]
async fn server_error_is_returned_as_error_response() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&server)
        .await;

    let request = RequestBuilder::new()
        .method(Method::Get)
        .url(&server.uri())
        .build();

    let response = HttpTransport::default().send(request).await.unwrap();

    assert_eq!(response.unwrap_err().status_code, 503);
}

#[tokio::test]
async fn any_answered_status_is_classified_by_range() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/partial"))
        .respond_with(ResponseTemplate::new(206).set_body_json(json!({"id": "T1"})))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/not-modified"))
        .respond_with(ResponseTemplate::new(304))
        .mount(&server)
        .await;

    let transport = HttpTransport::default();
    let get = |route: &str| {
        RequestBuilder::new()
            .method(Method::Get)
            .url(&format!("{}{route}", server.uri()))
            .build()
    };

    let partial = transport.send(get("/partial")).await.unwrap().unwrap();
    assert_eq!(partial.status_code, 206);
    assert_eq!(&partial.response[..], br#"{"id":"T1"}"#);

    let not_modified = transport.send(get("/not-modified")).await.unwrap();
    assert_eq!(not_modified.unwrap_err().status_code, 304);
}

#[tokio::test]
async fn slow_server_yields_timeout() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_delay(Duration::from_millis(500)))
        .mount(&server)
        .await;

    let transport = HttpTransport::new(
        Proxy::default(),
        HttpClientConfig {
            connect_timeout_ms: None,
            request_timeout_ms: Some(50),
        },
    );
    let request = RequestBuilder::new()
        .method(Method::Get)
        .url(&server.uri())
        .build();

    let error = transport.send(request).await.unwrap_err();

    assert_eq!(*error.current_context(), ApiClientError::RequestTimeoutReceived);
}

#[tokio::test]
async fn unparsable_url_is_rejected_before_sending() {
    let request = RequestBuilder::new()
        .method(Method::Get)
        .url("not a url")
        .build();

    let error = HttpTransport::default().send(request).await.unwrap_err();

    assert_eq!(*error.current_context(), ApiClientError::UrlEncodingFailed);
}

#[tokio::test]
async fn unreachable_host_is_request_not_sent() {
    let server = MockServer::start().await;
    let uri = server.uri();
    drop(server);

    let request = RequestBuilder::new()
        .method(Method::Get)
        .url(&uri)
        .build();

    let error = HttpTransport::default().send(request).await.unwrap_err();

    assert!(matches!(
        error.current_context(),
        ApiClientError::RequestNotSent(_)
    ));
}
