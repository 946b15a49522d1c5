#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use bytes::Bytes;
use common_utils::{
    errors::CustomResult,
    request::{Method, Request},
};
use domain_types::{errors::ApiClientError, router_response_types::Response};
use error_stack::report;
use hyperswitch_masking::{Maskable, PeekInterface};
use paymaya_sdk::{
    configs::Config, AuthMethod, CardEntryHandle, CardEntrySurface, CardTokenCallback,
    CardTokenResult, FlowCallback, FlowResult, PayMayaClient, RawCardInput, RedirectUrlSet,
    SurfaceHandle, Transport, WebSurface,
};
use serde_json::Value;

pub const CHECKOUT_KEY: &str = "pk-checkout";
pub const PAYMENTS_KEY: &str = "pk-payments";
pub const CARD_KEY: &str = "pk-card";

/// Ordered record of surface calls and callback deliveries.
#[derive(Clone, Default)]
pub struct Timeline(Arc<Mutex<Vec<String>>>);

impl Timeline {
    pub fn push(&self, entry: impl Into<String>) {
        self.0.lock().unwrap().push(entry.into());
    }

    pub fn entries(&self) -> Vec<String> {
        self.0.lock().unwrap().clone()
    }

    pub fn position(&self, entry: &str) -> Option<usize> {
        self.entries().iter().position(|e| e == entry)
    }
}

#[derive(Clone)]
pub enum Reply {
    Success(Value),
    Failure(u16, Value),
    Error(ApiClientError),
    /// Never answers.
    Pending,
}

#[derive(Debug, Clone)]
pub struct RecordedRequest {
    pub method: Method,
    pub url: String,
    pub authorization: Option<String>,
    pub body: Option<Value>,
}

/// [`Transport`] answering from a route table and recording every request.
#[derive(Default)]
pub struct FakeTransport {
    routes: Mutex<Vec<(Method, String, Reply)>>,
    requests: Mutex<Vec<RecordedRequest>>,
}

impl FakeTransport {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    /// Answer requests whose url ends with `path`.
    pub fn route(self: &Arc<Self>, method: Method, path: &str, reply: Reply) -> Arc<Self> {
        self.routes
            .lock()
            .unwrap()
            .push((method, path.to_string(), reply));
        Arc::clone(self)
    }

    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.requests.lock().unwrap().clone()
    }

    pub fn requests_to(&self, path: &str) -> Vec<RecordedRequest> {
        self.requests()
            .into_iter()
            .filter(|request| request.url.ends_with(path))
            .collect()
    }
}

#[async_trait::async_trait]
impl Transport for FakeTransport {
    async fn send(
        &self,
        request: Request,
    ) -> CustomResult<Result<Response, Response>, ApiClientError> {
        let authorization = request
            .headers
            .iter()
            .find(|(name, _)| name == "Authorization")
            .map(|(_, value)| match value {
                Maskable::Masked(secret) => secret.peek().clone(),
                Maskable::Normal(value) => value.clone(),
            });
        let body = request
            .body
            .as_ref()
            .map(|body| serde_json::from_str(body.get_inner_value().peek()).unwrap());
        self.requests.lock().unwrap().push(RecordedRequest {
            method: request.method,
            url: request.url.clone(),
            authorization,
            body,
        });

        let reply = self
            .routes
            .lock()
            .unwrap()
            .iter()
            .find(|(method, path, _)| *method == request.method && request.url.ends_with(path))
            .map(|(_, _, reply)| reply.clone())
            .unwrap_or_else(|| panic!("no route for {} {}", request.method, request.url));

        match reply {
            Reply::Success(body) => Ok(Ok(response(200, &body))),
            Reply::Failure(status_code, body) => Ok(Err(response(status_code, &body))),
            Reply::Error(error) => Err(report!(error)),
            Reply::Pending => std::future::pending().await,
        }
    }
}

fn response(status_code: u16, body: &Value) -> Response {
    Response {
        headers: None,
        response: Bytes::from(body.to_string()),
        status_code,
    }
}

#[derive(Debug, Clone)]
pub enum Step {
    Started(&'static str),
    Finished(&'static str),
    Failed(&'static str),
    Close,
}

/// [`WebSurface`] replaying a script when it is presented and when a page is loaded.
pub struct ScriptedSurface {
    timeline: Timeline,
    on_present: Vec<Step>,
    on_load: Vec<Step>,
    handle: Mutex<Option<SurfaceHandle>>,
}

impl ScriptedSurface {
    pub fn new(timeline: &Timeline, on_present: Vec<Step>, on_load: Vec<Step>) -> Arc<Self> {
        Arc::new(Self {
            timeline: timeline.clone(),
            on_present,
            on_load,
            handle: Mutex::new(None),
        })
    }

    pub fn handle(&self) -> SurfaceHandle {
        self.handle.lock().unwrap().clone().expect("surface presented")
    }

    pub fn was_presented(&self) -> bool {
        self.handle.lock().unwrap().is_some()
    }

    fn play(&self, steps: &[Step]) {
        let handle = self.handle();
        for step in steps {
            match step {
                Step::Started(url) => handle.navigation_started(*url),
                Step::Finished(url) => handle.navigation_finished(*url),
                Step::Failed(reason) => handle.navigation_failed(None, *reason),
                Step::Close => handle.closed_by_user(),
            }
        }
    }
}

impl WebSurface for ScriptedSurface {
    fn present(&self, title: &str, handle: SurfaceHandle) {
        self.timeline.push(format!("present:{title}"));
        *self.handle.lock().unwrap() = Some(handle);
        self.play(&self.on_present);
    }

    fn load(&self, url: &url::Url) {
        self.timeline.push(format!("load:{url}"));
        self.play(&self.on_load);
    }

    fn tear_down(&self) {
        self.timeline.push("tear_down");
    }
}

pub enum Entry {
    Submit(&'static str, &'static str, &'static str),
    Cancel,
}

/// [`CardEntrySurface`] submitting a scripted sequence of inputs.
pub struct ScriptedCardForm {
    timeline: Timeline,
    entries: Vec<Entry>,
    handle: Mutex<Option<CardEntryHandle>>,
}

impl ScriptedCardForm {
    pub fn new(timeline: &Timeline, entries: Vec<Entry>) -> Arc<Self> {
        Arc::new(Self {
            timeline: timeline.clone(),
            entries,
            handle: Mutex::new(None),
        })
    }

    pub fn was_presented(&self) -> bool {
        self.handle.lock().unwrap().is_some()
    }
}

impl CardEntrySurface for ScriptedCardForm {
    fn present(&self, handle: CardEntryHandle) {
        self.timeline.push("present");
        for entry in &self.entries {
            match entry {
                Entry::Submit(number, expiry, cvc) => {
                    handle.submit(RawCardInput::new(*number, *expiry, *cvc))
                }
                Entry::Cancel => handle.cancel(),
            }
        }
        *self.handle.lock().unwrap() = Some(handle);
    }

    fn show_validation_errors(&self, errors: &[cards::CardValidationError]) {
        let messages: Vec<String> = errors.iter().map(ToString::to_string).collect();
        self.timeline
            .push(format!("validation:{}", messages.join("|")));
    }

    fn set_busy(&self, busy: bool) {
        self.timeline.push(format!("busy:{busy}"));
    }

    fn tear_down(&self) {
        self.timeline.push("tear_down");
    }
}

/// Collects delivered results and mirrors them on the timeline.
pub struct Recorder<R> {
    results: Arc<Mutex<Vec<R>>>,
}

impl<R: Clone> Recorder<R> {
    pub fn results(&self) -> Vec<R> {
        self.results.lock().unwrap().clone()
    }
}

pub fn flow_recorder(timeline: &Timeline) -> (Recorder<FlowResult>, FlowCallback) {
    let results = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&results);
    let timeline = timeline.clone();
    let callback: FlowCallback = Arc::new(move |result: FlowResult| {
        let label = match &result {
            FlowResult::Prepared { .. } => "callback:prepared",
            FlowResult::Processed { .. } => "callback:processed",
            FlowResult::Interrupted { .. } => "callback:interrupted",
            FlowResult::Error(_) => "callback:error",
        };
        timeline.push(label);
        sink.lock().unwrap().push(result);
    });
    (Recorder { results }, callback)
}

pub fn card_recorder(timeline: &Timeline) -> (Recorder<CardTokenResult>, CardTokenCallback) {
    let results = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&results);
    let timeline = timeline.clone();
    let callback: CardTokenCallback = Arc::new(move |result: CardTokenResult| {
        timeline.push("callback");
        sink.lock().unwrap().push(result);
    });
    (Recorder { results }, callback)
}

pub fn redirect_urls() -> RedirectUrlSet {
    RedirectUrlSet::new("https://a/s", "https://a/f", "https://a/c").unwrap()
}

pub fn client(transport: Arc<FakeTransport>) -> PayMayaClient {
    let mut client = PayMayaClient::with_transport(
        Config::for_environment(common_utils::consts::Env::Sandbox),
        transport,
    );
    client.add_authentication_key(AuthMethod::Checkout, CHECKOUT_KEY);
    client.add_authentication_key(AuthMethod::Payments, PAYMENTS_KEY);
    client.add_authentication_key(AuthMethod::CardToken, CARD_KEY);
    client
}

/// `Basic base64("<key>:")`
pub fn basic(key: &str) -> String {
    match key {
        CHECKOUT_KEY => "Basic cGstY2hlY2tvdXQ6".to_string(),
        PAYMENTS_KEY => "Basic cGstcGF5bWVudHM6".to_string(),
        CARD_KEY => "Basic cGstY2FyZDo=".to_string(),
        other => panic!("unknown key {other}"),
    }
}
