use log::warn;
use std::time::Duration;
use tokio::runtime::Handle;
use tokio::time;

pub type Task = Box<dyn FnOnce() + Send + 'static>;

/// A message queue that runs posted tasks later on its own loop.
pub trait Handler: Send + Sync {
    /// Fire-and-forget: nothing is returned to cancel or await the task.
    fn post_delayed(&self, delay: Duration, task: Task);
}

/// Posts onto a tokio runtime. Backed by a current-thread runtime this is a
/// cooperative single-threaded queue.
pub struct TokioHandler {
    runtime: Handle,
}

impl TokioHandler {
    pub fn new(runtime: Handle) -> Self {
        Self { runtime }
    }

    /// Binds to the runtime of the calling thread, if any.
    pub fn current() -> Option<Self> {
        Handle::try_current()
            .inspect_err(|err| warn!("no tokio runtime on this thread: {err}"))
            .ok()
            .map(Self::new)
    }
}

impl Handler for TokioHandler {
    fn post_delayed(&self, delay: Duration, task: Task) {
        let _ = self.runtime.spawn(async move {
            time::sleep(delay).await;
            task();
        });
    }
}
