#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

mod common;

use std::sync::Arc;

use common::{
    basic, client, flow_recorder, redirect_urls, FakeTransport, Reply, ScriptedSurface, Step,
    Timeline, CHECKOUT_KEY, PAYMENTS_KEY,
};
use common_utils::request::Method;
use domain_types::errors::ApiClientError;
use paymaya_sdk::{
    configs::Config, AuthMethod, CheckoutInfo, FlowError, FlowResult, InlineDispatcher,
    MainQueueDispatcher, PayMayaClient, PaymentStatus, RedirectOutcome, SinglePaymentInfo,
    TotalAmount, WalletLinkInfo,
};
use serde_json::json;

const CHECKOUTS: &str = "/checkout/v1/checkouts";
const PAYMENTS: &str = "/payby/v2/paymaya/payments";
const LINK: &str = "/payby/v2/paymaya/link";
const STATUS: &str = "/payments/v1/payments/T1/status";

fn checkout_info() -> CheckoutInfo {
    CheckoutInfo::new(TotalAmount::new(100.0, "PHP"), vec![], redirect_urls())
        .with_reference_number("REF-1")
}

fn checkout_created() -> Reply {
    Reply::Success(json!({"checkoutId": "T1", "redirectUrl": "https://gateway/pay/T1"}))
}

fn status(status: &str) -> Reply {
    Reply::Success(json!({"id": "T1", "status": status}))
}

fn processed(outcome: RedirectOutcome, url: &str) -> FlowResult {
    FlowResult::Processed {
        outcome,
        redirect_url: url.to_string(),
    }
}

fn prepared() -> FlowResult {
    FlowResult::Prepared {
        transaction_id: "T1".to_string(),
    }
}

#[tokio::test]
async fn checkout_reaching_success_url_is_processed() {
    let timeline = Timeline::default();
    let transport = FakeTransport::new().route(Method::Post, CHECKOUTS, checkout_created());
    let surface = ScriptedSurface::new(
        &timeline,
        vec![],
        vec![
            Step::Started("https://gateway/pay/T1"),
            Step::Finished("https://gateway/pay/T1"),
            Step::Started("https://a/s"),
        ],
    );
    let (recorder, callback) = flow_recorder(&timeline);

    client(transport.clone())
        .checkout(checkout_info(), surface, Arc::new(InlineDispatcher), callback)
        .await;

    assert_eq!(
        recorder.results(),
        vec![prepared(), processed(RedirectOutcome::Success, "https://a/s")]
    );
    assert_eq!(
        timeline.entries(),
        vec![
            "present:PayMaya Checkout",
            "callback:prepared",
            "load:https://gateway/pay/T1",
            "tear_down",
            "callback:processed",
        ]
    );

    let requests = transport.requests();
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].authorization, Some(basic(CHECKOUT_KEY)));
    let body = requests[0].body.as_ref().unwrap();
    assert_eq!(body["requestReferenceNumber"], "REF-1");
    assert_eq!(body["redirectUrl"]["success"], "https://a/s");
}

#[tokio::test]
async fn failure_and_cancel_urls_are_classified() {
    for (url, outcome) in [
        ("https://a/f", RedirectOutcome::Failure),
        ("https://a/c", RedirectOutcome::Cancel),
    ] {
        let timeline = Timeline::default();
        let transport = FakeTransport::new().route(Method::Post, CHECKOUTS, checkout_created());
        let steps = vec![Step::Started("https://gateway/pay/T1"), Step::Started(url)];
        let surface = ScriptedSurface::new(&timeline, vec![], steps);
        let (recorder, callback) = flow_recorder(&timeline);

        client(transport)
            .checkout(checkout_info(), surface, Arc::new(InlineDispatcher), callback)
            .await;

        assert_eq!(recorder.results(), vec![prepared(), processed(outcome, url)]);
    }
}

#[tokio::test]
async fn dismiss_is_disambiguated_by_status_poll() {
    let cases = [
        (
            "PAYMENT_SUCCESS",
            processed(RedirectOutcome::Success, "https://a/s"),
        ),
        (
            "PAYMENT_FAILED",
            processed(RedirectOutcome::Failure, "https://a/f"),
        ),
        (
            "AUTH_FAILED",
            processed(RedirectOutcome::Failure, "https://a/f"),
        ),
        (
            "PENDING_PAYMENT",
            FlowResult::Interrupted {
                last_known_status: Some(PaymentStatus::PendingPayment),
            },
        ),
    ];

    for (polled, expected) in cases {
        let timeline = Timeline::default();
        let transport = FakeTransport::new()
            .route(Method::Post, CHECKOUTS, checkout_created())
            .route(Method::Get, STATUS, status(polled));
        let surface = ScriptedSurface::new(
            &timeline,
            vec![],
            vec![Step::Started("https://gateway/pay/T1"), Step::Close],
        );
        let (recorder, callback) = flow_recorder(&timeline);

        client(transport.clone())
            .checkout(checkout_info(), surface, Arc::new(InlineDispatcher), callback)
            .await;

        assert_eq!(recorder.results(), vec![prepared(), expected], "{polled}");
        let polls = transport.requests_to(STATUS);
        assert_eq!(polls.len(), 1);
        assert_eq!(polls[0].method, Method::Get);
        assert_eq!(polls[0].authorization, Some(basic(CHECKOUT_KEY)));
        assert!(timeline.position("tear_down") < timeline.position("callback:processed")
            || timeline.position("tear_down") < timeline.position("callback:interrupted"));
    }
}

#[tokio::test]
async fn failed_status_poll_is_an_error() {
    let timeline = Timeline::default();
    let transport = FakeTransport::new()
        .route(Method::Post, CHECKOUTS, checkout_created())
        .route(
            Method::Get,
            STATUS,
            Reply::Error(ApiClientError::RequestNotSent("offline".to_string())),
        );
    let surface = ScriptedSurface::new(&timeline, vec![], vec![Step::Close]);
    let (recorder, callback) = flow_recorder(&timeline);

    client(transport)
        .checkout(checkout_info(), surface, Arc::new(InlineDispatcher), callback)
        .await;

    let results = recorder.results();
    assert_eq!(results.len(), 2);
    assert!(matches!(
        &results[1],
        FlowResult::Error(FlowError::Transport { .. })
    ));
}

#[tokio::test]
async fn dismiss_before_prepared_skips_the_poll() {
    let timeline = Timeline::default();
    let transport = FakeTransport::new()
        .route(Method::Post, CHECKOUTS, Reply::Pending)
        .route(Method::Get, STATUS, status("PAYMENT_SUCCESS"));
    let surface = ScriptedSurface::new(&timeline, vec![Step::Close], vec![]);
    let (recorder, callback) = flow_recorder(&timeline);

    client(transport.clone())
        .checkout(checkout_info(), surface, Arc::new(InlineDispatcher), callback)
        .await;

    assert_eq!(
        recorder.results(),
        vec![FlowResult::Interrupted {
            last_known_status: None
        }]
    );
    assert!(transport.requests_to(STATUS).is_empty());
    assert_eq!(
        timeline.entries(),
        vec![
            "present:PayMaya Checkout",
            "tear_down",
            "callback:interrupted"
        ]
    );
}

#[tokio::test]
async fn queued_dismiss_wins_over_a_ready_create_response() {
    let timeline = Timeline::default();
    let transport = FakeTransport::new()
        .route(Method::Post, CHECKOUTS, checkout_created())
        .route(Method::Get, STATUS, status("PAYMENT_SUCCESS"));
    let surface = ScriptedSurface::new(&timeline, vec![Step::Close], vec![]);
    let (recorder, callback) = flow_recorder(&timeline);

    client(transport.clone())
        .checkout(checkout_info(), surface, Arc::new(InlineDispatcher), callback)
        .await;

    assert_eq!(
        recorder.results(),
        vec![FlowResult::Interrupted {
            last_known_status: None
        }]
    );
    assert!(transport.requests_to(STATUS).is_empty());
    assert!(!timeline
        .entries()
        .iter()
        .any(|entry| entry.starts_with("load:")));
    assert_eq!(timeline.position("tear_down"), Some(1));
}

#[tokio::test]
async fn missing_key_fails_without_network_or_surface() {
    let timeline = Timeline::default();
    let transport = FakeTransport::new().route(Method::Post, CHECKOUTS, checkout_created());
    let surface = ScriptedSurface::new(&timeline, vec![], vec![]);
    let (recorder, callback) = flow_recorder(&timeline);
    let mut client = PayMayaClient::with_transport(
        Config::for_environment(common_utils::consts::Env::Sandbox),
        transport.clone(),
    );
    client.add_authentication_key(AuthMethod::Payments, PAYMENTS_KEY);

    client
        .checkout(
            checkout_info(),
            surface.clone(),
            Arc::new(InlineDispatcher),
            callback,
        )
        .await;

    assert_eq!(
        recorder.results(),
        vec![FlowResult::Error(FlowError::Authentication {
            method: AuthMethod::Checkout
        })]
    );
    assert!(transport.requests().is_empty());
    assert!(!surface.was_presented());
}

#[tokio::test]
async fn events_after_resolution_are_ignored() {
    let timeline = Timeline::default();
    let transport = FakeTransport::new().route(Method::Post, CHECKOUTS, checkout_created());
    let surface = ScriptedSurface::new(
        &timeline,
        vec![],
        vec![
            Step::Started("https://gateway/pay/T1"),
            Step::Started("https://a/s"),
            Step::Started("https://a/f"),
            Step::Close,
        ],
    );
    let (recorder, callback) = flow_recorder(&timeline);

    client(transport.clone())
        .checkout(
            checkout_info(),
            surface.clone(),
            Arc::new(InlineDispatcher),
            callback,
        )
        .await;

    let handle = surface.handle();
    assert!(handle.is_closed());
    handle.navigation_started("https://a/c");
    handle.closed_by_user();

    assert_eq!(
        recorder.results(),
        vec![prepared(), processed(RedirectOutcome::Success, "https://a/s")]
    );
    assert!(transport.requests_to(STATUS).is_empty());
    assert_eq!(
        timeline
            .entries()
            .iter()
            .filter(|entry| *entry == "tear_down")
            .count(),
        1
    );
}

#[tokio::test]
async fn wallet_link_dismiss_does_not_poll_by_default() {
    let timeline = Timeline::default();
    let transport = FakeTransport::new()
        .route(
            Method::Post,
            LINK,
            Reply::Success(json!({"linkId": "T1", "redirectUrl": "https://gateway/link/T1"})),
        )
        .route(Method::Get, STATUS, status("PAYMENT_SUCCESS"));
    let surface = ScriptedSurface::new(&timeline, vec![], vec![Step::Close]);
    let (recorder, callback) = flow_recorder(&timeline);

    client(transport.clone())
        .create_wallet_link(
            WalletLinkInfo::new(redirect_urls()),
            surface,
            Arc::new(InlineDispatcher),
            callback,
        )
        .await;

    assert_eq!(
        recorder.results(),
        vec![
            prepared(),
            FlowResult::Interrupted {
                last_known_status: None
            }
        ]
    );
    assert!(transport.requests_to(STATUS).is_empty());
    assert_eq!(timeline.entries()[0], "present:Create Wallet");
    assert_eq!(
        transport.requests_to(LINK)[0].authorization,
        Some(basic(PAYMENTS_KEY))
    );
}

#[tokio::test]
async fn wallet_link_polls_when_enabled() {
    let timeline = Timeline::default();
    let transport = FakeTransport::new()
        .route(
            Method::Post,
            LINK,
            Reply::Success(json!({"linkId": "T1", "redirectUrl": "https://gateway/link/T1"})),
        )
        .route(Method::Get, STATUS, status("PAYMENT_SUCCESS"));
    let surface = ScriptedSurface::new(&timeline, vec![], vec![Step::Close]);
    let (recorder, callback) = flow_recorder(&timeline);
    let mut config = Config::for_environment(common_utils::consts::Env::Sandbox);
    config.flows.wallet_link.status_check = true;
    let mut client = PayMayaClient::with_transport(config, transport.clone());
    client.add_authentication_key(AuthMethod::Payments, PAYMENTS_KEY);

    client
        .create_wallet_link(
            WalletLinkInfo::new(redirect_urls()),
            surface,
            Arc::new(InlineDispatcher),
            callback,
        )
        .await;

    assert_eq!(
        recorder.results(),
        vec![prepared(), processed(RedirectOutcome::Success, "https://a/s")]
    );
    assert_eq!(transport.requests_to(STATUS).len(), 1);
}

#[tokio::test]
async fn gateway_error_on_create_tears_down_without_prepared() {
    let timeline = Timeline::default();
    let transport = FakeTransport::new().route(
        Method::Post,
        PAYMENTS,
        Reply::Failure(
            401,
            json!({"code": "K003", "message": "Missing/invalid authorization credentials"}),
        ),
    );
    let surface = ScriptedSurface::new(&timeline, vec![], vec![]);
    let (recorder, callback) = flow_recorder(&timeline);

    client(transport)
        .single_payment(
            SinglePaymentInfo::new(TotalAmount::new(50.0, "PHP"), redirect_urls()),
            surface,
            Arc::new(InlineDispatcher),
            callback,
        )
        .await;

    assert_eq!(
        recorder.results(),
        vec![FlowResult::Error(FlowError::Gateway {
            status_code: 401,
            code: "K003".to_string(),
            message: "Missing/invalid authorization credentials".to_string(),
            parameters: vec![],
        })]
    );
    assert_eq!(
        timeline.entries(),
        vec!["present:Pay with PayMaya", "tear_down", "callback:error"]
    );
}

#[tokio::test]
async fn navigation_failure_is_an_error() {
    let timeline = Timeline::default();
    let transport = FakeTransport::new().route(Method::Post, CHECKOUTS, checkout_created());
    let surface = ScriptedSurface::new(&timeline, vec![], vec![Step::Failed("offline")]);
    let (recorder, callback) = flow_recorder(&timeline);

    client(transport)
        .checkout(checkout_info(), surface, Arc::new(InlineDispatcher), callback)
        .await;

    assert_eq!(
        recorder.results(),
        vec![
            prepared(),
            FlowResult::Error(FlowError::Navigation {
                url: None,
                message: "offline".to_string(),
            })
        ]
    );
    assert!(timeline.position("tear_down") < timeline.position("callback:error"));
}

#[tokio::test]
async fn unparsable_redirect_url_is_a_navigation_error() {
    let timeline = Timeline::default();
    let transport = FakeTransport::new().route(
        Method::Post,
        CHECKOUTS,
        Reply::Success(json!({"checkoutId": "T1", "redirectUrl": "not a url"})),
    );
    let surface = ScriptedSurface::new(&timeline, vec![], vec![]);
    let (recorder, callback) = flow_recorder(&timeline);

    client(transport)
        .checkout(checkout_info(), surface, Arc::new(InlineDispatcher), callback)
        .await;

    let results = recorder.results();
    assert_eq!(results[0], prepared());
    assert!(matches!(
        &results[1],
        FlowResult::Error(FlowError::Navigation { url: Some(url), .. }) if url == "not a url"
    ));
    assert!(!timeline.entries().iter().any(|entry| entry.starts_with("load:")));
}

#[tokio::test]
async fn main_queue_dispatcher_runs_flow_work_on_the_host_loop() {
    let timeline = Timeline::default();
    let transport = FakeTransport::new().route(Method::Post, CHECKOUTS, checkout_created());
    let surface = ScriptedSurface::new(
        &timeline,
        vec![],
        vec![Step::Started("https://gateway/pay/T1"), Step::Started("https://a/c")],
    );
    let (recorder, callback) = flow_recorder(&timeline);
    let (dispatcher, mut queue) = MainQueueDispatcher::new();
    let client = Arc::new(client(transport));

    let flow = tokio::spawn({
        let client = Arc::clone(&client);
        async move {
            client
                .checkout(checkout_info(), surface, Arc::new(dispatcher), callback)
                .await
        }
    });
    while queue.run_next().await {}
    flow.await.unwrap();

    assert_eq!(
        recorder.results(),
        vec![prepared(), processed(RedirectOutcome::Cancel, "https://a/c")]
    );
    assert_eq!(timeline.entries().last().unwrap(), "callback:processed");
}

#[tokio::test]
async fn status_can_be_checked_directly() {
    let transport = FakeTransport::new().route(
        Method::Get,
        "/payments/v1/payments/T9/status",
        Reply::Success(json!({"id": "T9", "status": "AUTH_SUCCESS"})),
    );

    let status = client(transport.clone())
        .check_payment_status("T9", AuthMethod::Payments)
        .await
        .unwrap();

    assert_eq!(status, PaymentStatus::AuthSuccess);
    assert_eq!(
        transport.requests()[0].authorization,
        Some(basic(PAYMENTS_KEY))
    );
}
