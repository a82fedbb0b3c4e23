use std::future::Future;
use tokio::task::JoinHandle;

/// Single-slot guard for the one in-flight fetch the application allows.
///
/// Starting a new fetch while one is pending supersedes it: the pending task
/// is aborted and the slot takes the new one. This replaces the implicit
/// "reuse the existing loader" dance with an explicit handle that can also be
/// cancelled outright.
pub struct FetchSlot<T> {
    handle: Option<JoinHandle<T>>,
}

impl<T: Send + 'static> FetchSlot<T> {
    pub fn new() -> Self {
        Self { handle: None }
    }

    /// Spawn `future` into the slot, aborting any fetch already pending.
    pub fn start<F>(&mut self, future: F)
    where
        F: Future<Output = T> + Send + 'static,
    {
        if let Some(previous) = self.handle.take() {
            previous.abort();
        }
        self.handle = Some(tokio::spawn(future));
    }

    /// Abort the pending fetch, if any.
    pub fn cancel(&mut self) {
        if let Some(handle) = self.handle.take() {
            handle.abort();
        }
    }

    pub fn in_flight(&self) -> bool {
        self.handle
            .as_ref()
            .map(|handle| !handle.is_finished())
            .unwrap_or(false)
    }

    /// Wait for the pending fetch and empty the slot. Returns `None` when the
    /// slot is empty or the task was aborted before completing.
    pub async fn join(&mut self) -> Option<T> {
        match self.handle.take() {
            Some(handle) => handle.await.ok(),
            None => None,
        }
    }
}

impl<T: Send + 'static> Default for FetchSlot<T> {
    fn default() -> Self {
        Self::new()
    }
}
