use std::sync::Arc;

use domain_types::errors::FlowError;
use interfaces::{
    dispatcher::UiDispatcher,
    web_surface::{SurfaceHandle, SurfaceSignal, WebSurface},
};
use tokio::sync::mpsc;

#[derive(Debug, Clone, Copy, PartialEq, Eq, strum::Display)]
#[strum(serialize_all = "snake_case")]
pub enum DriverState {
    Idle,
    Presenting,
    Loaded,
    Navigating,
    Dismissed,
    FatalNavigationError,
    TornDown,
}

/// What the flow learns from the surface.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DriverEvent {
    Navigated(String),
    Error(FlowError),
    Dismissed,
}

/// Owns the web surface of one flow and turns its signals into [`DriverEvent`]s.
///
/// Surface calls go through the flow's dispatcher. Dropping the driver tears the
/// surface down if that has not happened yet.
pub struct WebFlowDriver {
    surface: Arc<dyn WebSurface>,
    dispatcher: Arc<dyn UiDispatcher>,
    signals: Option<mpsc::UnboundedReceiver<SurfaceSignal>>,
    state: DriverState,
}

impl WebFlowDriver {
    pub fn new(surface: Arc<dyn WebSurface>, dispatcher: Arc<dyn UiDispatcher>) -> Self {
        Self {
            surface,
            dispatcher,
            signals: None,
            state: DriverState::Idle,
        }
    }

    pub fn state(&self) -> DriverState {
        self.state
    }

    /// Show the surface with its loading indicator on.
    pub fn present(&mut self, title: &str) {
        let (handle, signals) = SurfaceHandle::channel();
        self.signals = Some(signals);
        self.state = DriverState::Presenting;

        let surface = Arc::clone(&self.surface);
        let title = title.to_string();
        self.dispatcher.dispatch(Box::new(move || {
            surface.present(&title, handle);
            surface.set_loading_indicator(true);
        }));
    }

    pub fn load(&mut self, redirect_url: &str) -> Result<(), FlowError> {
        let url = url::Url::parse(redirect_url).map_err(|error| FlowError::Navigation {
            url: Some(redirect_url.to_string()),
            message: format!("gateway returned an invalid redirect url: {error}"),
        })?;
        tracing::debug!(%url, "loading gateway page");

        let surface = Arc::clone(&self.surface);
        self.dispatcher
            .dispatch(Box::new(move || surface.load(&url)));
        Ok(())
    }

    /// Wait for the next navigation, failure or dismissal.
    ///
    /// Finished navigations only toggle the loading indicator. A surface that went
    /// away without a close signal counts as dismissed.
    pub async fn next_event(&mut self) -> DriverEvent {
        loop {
            let signal = match self.signals.as_mut() {
                Some(signals) => signals.recv().await,
                None => None,
            };

            match signal {
                Some(SurfaceSignal::NavigationStarted { url }) => {
                    self.state = DriverState::Navigating;
                    self.set_loading_indicator(true);
                    return DriverEvent::Navigated(url);
                }
                Some(SurfaceSignal::NavigationFinished { url }) => {
                    tracing::debug!(%url, "page loaded");
                    self.state = DriverState::Loaded;
                    self.set_loading_indicator(false);
                }
                Some(SurfaceSignal::NavigationFailed { url, reason }) => {
                    tracing::warn!(?url, %reason, "navigation failed");
                    self.state = DriverState::FatalNavigationError;
                    return DriverEvent::Error(FlowError::Navigation {
                        url,
                        message: reason,
                    });
                }
                Some(SurfaceSignal::ClosedByUser) | None => {
                    self.state = DriverState::Dismissed;
                    return DriverEvent::Dismissed;
                }
            }
        }
    }

    /// Remove the surface. Later signals from it are dropped.
    pub fn tear_down(&mut self) {
        if matches!(self.state, DriverState::Idle | DriverState::TornDown) {
            return;
        }
        self.signals = None;
        self.state = DriverState::TornDown;

        let surface = Arc::clone(&self.surface);
        self.dispatcher
            .dispatch(Box::new(move || surface.tear_down()));
    }

    fn set_loading_indicator(&self, visible: bool) {
        let surface = Arc::clone(&self.surface);
        self.dispatcher
            .dispatch(Box::new(move || surface.set_loading_indicator(visible)));
    }
}

impl Drop for WebFlowDriver {
    fn drop(&mut self) {
        self.tear_down();
    }
}
