use std::future::Future;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use tokio::task::JoinHandle;

/// Trailing-edge debouncer. Every `call` cancels the invocation still waiting
/// out its quiet window, so only the last call of a burst reaches the callback.
pub struct Debounce<A, F> {
    wait: Duration,
    callback: Arc<F>,
    pending: Mutex<Option<JoinHandle<()>>>,
    _arg: std::marker::PhantomData<fn(A)>,
}

impl<A, F, Fut> Debounce<A, F>
where
    A: Send + 'static,
    F: Fn(A) -> Fut + Send + Sync + 'static,
    Fut: Future<Output = ()> + Send + 'static,
{
    pub fn new(wait: Duration, callback: F) -> Self {
        Self {
            wait,
            callback: Arc::new(callback),
            pending: Mutex::new(None),
            _arg: std::marker::PhantomData,
        }
    }

    /// Must be called from within a tokio runtime.
    pub fn call(&self, arg: A) {
        let callback = self.callback.clone();
        let wait = self.wait;
        let task = tokio::spawn(async move {
            tokio::time::sleep(wait).await;
            callback(arg).await;
        });

        let mut pending = self.pending.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
        if let Some(previous) = pending.replace(task) {
            previous.abort();
        }
    }

    /// Drops the pending invocation, if any.
    pub fn cancel(&self) {
        let mut pending = self.pending.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
        if let Some(previous) = pending.take() {
            previous.abort();
        }
    }
}

impl<A, F> Drop for Debounce<A, F> {
    fn drop(&mut self) {
        if let Ok(mut pending) = self.pending.lock() {
            if let Some(task) = pending.take() {
                task.abort();
            }
        }
    }
}
