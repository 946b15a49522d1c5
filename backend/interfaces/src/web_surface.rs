use tokio::sync::mpsc;

/// Event reported by a web surface while it displays a gateway page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SurfaceSignal {
    NavigationStarted { url: String },
    NavigationFinished { url: String },
    /// `url` is absent when the failing location is not known.
    NavigationFailed { url: Option<String>, reason: String },
    /// The user closed the surface before any merchant url was reached.
    ClosedByUser,
}

/// Sending half handed to a [`WebSurface`] when it is presented.
///
/// Signals may be sent from any thread. Signals sent after the flow finished are
/// dropped silently.
#[derive(Debug, Clone)]
pub struct SurfaceHandle {
    sender: mpsc::UnboundedSender<SurfaceSignal>,
}

impl SurfaceHandle {
    pub fn channel() -> (Self, mpsc::UnboundedReceiver<SurfaceSignal>) {
        let (sender, receiver) = mpsc::unbounded_channel();
        (Self { sender }, receiver)
    }

    pub fn navigation_started(&self, url: impl Into<String>) {
        self.send(SurfaceSignal::NavigationStarted { url: url.into() });
    }

    pub fn navigation_finished(&self, url: impl Into<String>) {
        self.send(SurfaceSignal::NavigationFinished { url: url.into() });
    }

    pub fn navigation_failed(&self, url: Option<String>, reason: impl Into<String>) {
        self.send(SurfaceSignal::NavigationFailed {
            url,
            reason: reason.into(),
        });
    }

    pub fn closed_by_user(&self) {
        self.send(SurfaceSignal::ClosedByUser);
    }

    /// Whether the flow stopped listening.
    pub fn is_closed(&self) -> bool {
        self.sender.is_closed()
    }

    fn send(&self, signal: SurfaceSignal) {
        if let Err(err) = self.sender.send(signal) {
            tracing::debug!(signal = ?err.0, "surface signal after flow completion ignored");
        }
    }
}

/// A host-provided view able to display gateway web pages.
///
/// Every method is invoked through the flow's `UiDispatcher`.
pub trait WebSurface: Send + Sync {
    /// Show the surface. It reports navigation events through `handle`.
    fn present(&self, title: &str, handle: SurfaceHandle);

    fn load(&self, url: &url::Url);

    fn set_loading_indicator(&self, _visible: bool) {}

    /// Remove the surface. Called at most once per flow.
    fn tear_down(&self);
}
