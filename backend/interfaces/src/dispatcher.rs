use tokio::sync::mpsc;

pub type UiTask = Box<dyn FnOnce() + Send + 'static>;

/// Runs surface work and user callbacks on the host's UI context.
///
/// Tasks dispatched from one flow must run in dispatch order.
pub trait UiDispatcher: Send + Sync {
    fn dispatch(&self, task: UiTask);
}

/// Runs every task immediately on the calling thread.
#[derive(Debug, Default, Clone, Copy)]
pub struct InlineDispatcher;

impl UiDispatcher for InlineDispatcher {
    fn dispatch(&self, task: UiTask) {
        task()
    }
}

/// Queues tasks for a host loop that calls [`MainQueue::drain`].
#[derive(Debug, Clone)]
pub struct MainQueueDispatcher {
    sender: mpsc::UnboundedSender<UiTask>,
}

pub struct MainQueue {
    receiver: mpsc::UnboundedReceiver<UiTask>,
}

impl MainQueueDispatcher {
    pub fn new() -> (Self, MainQueue) {
        let (sender, receiver) = mpsc::unbounded_channel();
        (Self { sender }, MainQueue { receiver })
    }
}

impl UiDispatcher for MainQueueDispatcher {
    fn dispatch(&self, task: UiTask) {
        if self.sender.send(task).is_err() {
            tracing::warn!("main queue is gone, ui task dropped");
        }
    }
}

impl MainQueue {
    /// Run every task queued so far and return how many ran.
    pub fn drain(&mut self) -> usize {
        let mut count = 0;
        while let Ok(task) = self.receiver.try_recv() {
            task();
            count += 1;
        }
        count
    }

    /// Wait for the next task and run it. Returns `false` once every dispatcher is dropped.
    pub async fn run_next(&mut self) -> bool {
        match self.receiver.recv().await {
            Some(task) => {
                task();
                true
            }
            None => false,
        }
    }
}

impl std::fmt::Debug for MainQueue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MainQueue").finish_non_exhaustive()
    }
}
